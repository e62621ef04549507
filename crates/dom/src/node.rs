/// Read-only surface the path-fingerprinting core needs from a tree node.
///
/// Implementors are cheap handles into an externally owned tree; the core
/// never takes ownership of nodes and never mutates through this trait.
pub trait DomNode: Copy {
    /// Tag name for elements, `#document`/`#text`-style names otherwise.
    fn node_name(&self) -> &str;

    /// Parent handle, or `None` at the top of the tree.
    fn parent(&self) -> Option<Self>;

    /// Whether the attribute is present, with or without a value.
    fn has_attribute(&self, name: &str) -> bool;

    /// Attribute value; a present-but-valueless attribute reads as `Some("")`.
    fn attribute(&self, name: &str) -> Option<&str>;
}
