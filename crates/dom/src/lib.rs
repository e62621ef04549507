pub mod node;
mod types;

pub use crate::node::DomNode;
pub use crate::types::{Document, NodeData, NodeId, NodeRef};
