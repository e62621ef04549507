use dom::DomNode;

/// Whole-token membership test against the node's `class` attribute.
pub fn has_exact_class<N: DomNode>(node: N, class_name: &str) -> bool {
    match node.attribute("class") {
        Some(value) => value.split_whitespace().any(|t| t == class_name),
        None => false,
    }
}

/// Substring containment in the raw `class` attribute value.
///
/// Deliberately looser than `has_exact_class`: `has_class(n, "btn")` is true
/// for `class="btn-primary"`.
pub fn has_class<N: DomNode>(node: N, fragment: &str) -> bool {
    node.attribute("class")
        .is_some_and(|value| value.contains(fragment))
}
