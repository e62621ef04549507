use dom::DomNode;

use crate::DEFAULT_MAX_DEPTH;

/// Nearest node (starting from `node` itself) for which `rule` holds.
///
/// `max_depth` bounds the climb: depth `N` allows testing the start node plus
/// `N` ancestor hops, so the loop runs `N + 1` times. Without a depth the
/// bound falls back to `DEFAULT_MAX_DEPTH`. Returns `None` when the start is
/// absent, the parents run out, or the bound is exhausted without a match.
/// Panics inside `rule` propagate to the caller.
pub fn closest<N, F>(node: Option<N>, rule: F, max_depth: Option<usize>) -> Option<N>
where
    N: DomNode,
    F: Fn(N) -> bool,
{
    let bound = match max_depth {
        Some(depth) => depth.saturating_add(1),
        None => DEFAULT_MAX_DEPTH,
    };
    let mut current = node;
    for _ in 0..bound {
        let n = current?;
        if rule(n) {
            log::trace!(target: "fingerprint.closest", "matched {}", n.node_name());
            return Some(n);
        }
        current = n.parent();
    }
    None
}
