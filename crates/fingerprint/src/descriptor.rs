use std::fmt;

use dom::DomNode;

use crate::chain::ancestor_chain;

/// Class-token prefixes that never make it into a descriptor: transient
/// state classes and framework-generated ones identify nothing stable.
const TRANSIENT_CLASS_PREFIXES: [&str; 10] = [
    "clear", "clearfix", "active", "hover", "enabled", "hidden", "display", "focus", "disabled",
    "ng-",
];

/// Whether a class token is on the transient deny-list (matched by prefix).
pub fn is_transient_class(token: &str) -> bool {
    TRANSIENT_CLASS_PREFIXES
        .iter()
        .any(|p| token.starts_with(p))
}

/// Normalized single-node unit of a fingerprint. Computed fresh per call,
/// never cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeDescriptor {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl fmt::Display for NodeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.tag)?;
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

/// Descriptor for a single node.
///
/// The id is kept only when non-empty and not starting with a digit
/// (numeric auto-ids are unstable across renders). `<input>` elements with a
/// `name` attribute are described by that name instead of their classes;
/// everything else gets its class tokens minus the transient deny-list,
/// sorted so the result is independent of authoring order.
pub fn describe<N: DomNode>(node: N) -> NodeDescriptor {
    let tag = node.node_name().to_ascii_lowercase();

    let id = node
        .attribute("id")
        .filter(|v| !v.is_empty() && !v.starts_with(|c: char| c.is_ascii_digit()))
        .map(str::to_string);

    let classes = match node.attribute("name") {
        Some(name) if tag == "input" && !name.is_empty() => vec![name.to_string()],
        _ => {
            let mut kept: Vec<String> = node
                .attribute("class")
                .unwrap_or("")
                .split_whitespace()
                .filter(|t| !is_transient_class(t))
                .map(str::to_string)
                .collect();
            kept.sort_unstable();
            kept
        }
    };

    NodeDescriptor { tag, id, classes }
}

/// Full path fingerprint: descriptors of the ancestor chain, root-ward first.
///
/// `None`, or a node whose chain is empty (e.g. `body` itself), fingerprints
/// to the empty string. Two calls on an unmutated tree return identical
/// strings; no global uniqueness is implied.
pub fn fingerprint<N: DomNode>(node: Option<N>) -> String {
    use fmt::Write;
    let mut path = String::new();
    for n in ancestor_chain(node) {
        let _ = write!(path, "{}", describe(n));
    }
    log::trace!(target: "fingerprint.path", "fingerprint: {path:?}");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::Document;

    fn describe_one(tag: &str, attrs: &[(&str, &str)]) -> NodeDescriptor {
        let mut doc = Document::new();
        let id = doc.append_element(Document::ROOT, tag, attrs);
        describe(doc.node(id))
    }

    #[test]
    fn tag_only_descriptor() {
        assert_eq!(describe_one("DIV", &[]).to_string(), "/div");
    }

    #[test]
    fn id_and_sorted_classes_render_in_order() {
        let d = describe_one("div", &[("id", "main-1"), ("class", "zzz btn active")]);
        assert_eq!(d.to_string(), "/div#main-1.btn.zzz");
    }

    #[test]
    fn class_tokens_sort_independently_of_authoring_order() {
        let a = describe_one("div", &[("class", "menu item open-state")]);
        let b = describe_one("div", &[("class", "open-state item menu")]);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "/div.item.menu.open-state");
    }

    #[test]
    fn transient_classes_are_stripped_by_prefix() {
        let d = describe_one("div", &[("class", "btn active ng-click-handler")]);
        assert_eq!(d.to_string(), "/div.btn");
        // Prefix match, not whole-token equality.
        let d = describe_one("div", &[("class", "hoverable clearing hidden-xs keep")]);
        assert_eq!(d.to_string(), "/div.keep");
    }

    #[test]
    fn numeric_leading_id_is_rejected() {
        assert_eq!(describe_one("div", &[("id", "123abc")]).id, None);
        assert_eq!(
            describe_one("div", &[("id", "abc123")]).to_string(),
            "/div#abc123"
        );
        assert_eq!(describe_one("div", &[("id", "")]).id, None);
    }

    #[test]
    fn input_name_takes_precedence_over_classes() {
        let d = describe_one("input", &[("name", "email"), ("class", "form-control")]);
        assert_eq!(d.to_string(), "/input.email");
        // Empty name falls back to the class path.
        let d = describe_one("input", &[("name", ""), ("class", "form-control")]);
        assert_eq!(d.to_string(), "/input.form-control");
        // The name attribute only matters on <input>.
        let d = describe_one("a", &[("name", "anchor"), ("class", "link")]);
        assert_eq!(d.to_string(), "/a.link");
    }

    #[test]
    fn duplicate_classes_are_kept() {
        let d = describe_one("div", &[("class", "btn btn")]);
        assert_eq!(d.to_string(), "/div.btn.btn");
    }

    #[test]
    fn fingerprint_concatenates_chain_descriptors() {
        let mut doc = Document::new();
        let html = doc.append_element(Document::ROOT, "html", &[]);
        let body = doc.append_element(html, "body", &[]);
        let div = doc.append_element(body, "div", &[("id", "wrap")]);
        let ul = doc.append_element(div, "ul", &[("class", "menu")]);
        let li = doc.append_element(ul, "li", &[("class", "item active")]);

        assert_eq!(fingerprint(Some(doc.node(li))), "/div#wrap/ul.menu/li.item");
        assert_eq!(fingerprint(Some(doc.node(body))), "");
        assert_eq!(fingerprint::<dom::NodeRef<'_>>(None), "");
    }

    #[test]
    fn fingerprint_is_idempotent() {
        let mut doc = Document::new();
        let html = doc.append_element(Document::ROOT, "html", &[]);
        let body = doc.append_element(html, "body", &[]);
        let p = doc.append_element(body, "p", &[("class", "lede")]);

        let node = doc.node(p);
        assert_eq!(fingerprint(Some(node)), fingerprint(Some(node)));
    }
}
