//! Deterministic textual fingerprints for nodes in a DOM-like tree.
//!
//! A fingerprint is the concatenation of per-node descriptors along the
//! ancestor chain of a node, root-ward first: `/div#main/ul.menu/li.item`.
//! It identifies "the same node" across page loads without relying on node
//! identity or brittle CSS selectors; collisions are possible and accepted.

pub mod chain;
pub mod classes;
pub mod closest;
pub mod descriptor;

pub use crate::chain::ancestor_chain;
pub use crate::classes::{has_class, has_exact_class};
pub use crate::closest::closest;
pub use crate::descriptor::{NodeDescriptor, describe, fingerprint, is_transient_class};

/// Ceiling on upward traversal, applied both by `closest` (when no depth is
/// given) and by `ancestor_chain`. Guards against cyclic parent links and
/// pathologically deep trees, not a claim about real-world depth.
pub const DEFAULT_MAX_DEPTH: usize = 100;
