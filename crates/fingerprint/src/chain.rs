use dom::DomNode;

use crate::DEFAULT_MAX_DEPTH;

fn is_root_marker(name: &str) -> bool {
    name.eq_ignore_ascii_case("body") || name.eq_ignore_ascii_case("html")
}

/// Ancestors of `node` from nearest-root down to `node` itself.
///
/// The walk stops (exclusively) at the first `body` or `html` node, so those
/// never appear in the chain; starting on one of them yields an empty chain,
/// as does `None`. The climb is capped at `DEFAULT_MAX_DEPTH` hops, so a
/// cyclic parent relation truncates the chain instead of hanging.
pub fn ancestor_chain<N: DomNode>(node: Option<N>) -> Vec<N> {
    let mut chain = Vec::new();
    let mut current = node;
    for _ in 0..DEFAULT_MAX_DEPTH {
        let Some(n) = current else {
            break;
        };
        if is_root_marker(n.node_name()) {
            break;
        }
        chain.push(n);
        current = n.parent();
    }
    chain.reverse();
    chain
}
