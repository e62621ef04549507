//! Fixture tooling for building `dom::Document` trees in tests.

use serde::Deserialize;

use dom::{Document, NodeId};

/// Declarative tree node, deserialized from JSON fixtures.
#[derive(Debug, Deserialize)]
pub struct NodeFixture {
    pub tag: String,
    #[serde(default)]
    pub attrs: Vec<(String, String)>,
    #[serde(default)]
    pub children: Vec<NodeFixture>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Build a document from a JSON fixture string.
///
/// Panics on malformed fixtures; this is test-only tooling and a broken
/// fixture should fail loudly.
pub fn document_from_json(json: &str) -> Document {
    let fixture: NodeFixture =
        serde_json::from_str(json).expect("fixture JSON must deserialize");
    document_from_fixture(&fixture)
}

pub fn document_from_fixture(fixture: &NodeFixture) -> Document {
    let mut doc = Document::new();
    append_fixture(&mut doc, Document::ROOT, fixture);
    doc
}

fn append_fixture(doc: &mut Document, parent: NodeId, fixture: &NodeFixture) {
    let attrs: Vec<(&str, &str)> = fixture
        .attrs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let id = doc.append_element(parent, &fixture.tag, &attrs);
    if let Some(text) = &fixture.text {
        doc.append_text(id, text);
    }
    for child in &fixture.children {
        append_fixture(doc, id, child);
    }
}

/// Standard `html > body` scaffolding; returns the body's id.
pub fn html_body(doc: &mut Document) -> NodeId {
    let html = doc.append_element(Document::ROOT, "html", &[]);
    doc.append_element(html, "body", &[])
}
