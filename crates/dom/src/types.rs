use crate::node::DomNode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

#[derive(Debug)]
pub enum NodeData {
    Document,
    Element {
        name: String,
        attributes: Vec<(String, Option<String>)>,
    },
    Text(String),
    Comment(String),
}

#[derive(Debug)]
struct NodeEntry {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed tree: nodes are addressed by `NodeId` and every node keeps a
/// back-reference to its parent. Build with `&mut`, traverse with `&`.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<NodeEntry>,
}

impl Document {
    pub const ROOT: NodeId = NodeId(0);

    pub fn new() -> Self {
        Document {
            nodes: vec![NodeEntry {
                data: NodeData::Document,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn append_element(
        &mut self,
        parent: NodeId,
        name: &str,
        attributes: &[(&str, &str)],
    ) -> NodeId {
        let attributes = attributes
            .iter()
            .map(|(k, v)| (k.to_string(), Some(v.to_string())))
            .collect();
        self.append_element_with(parent, name, attributes)
    }

    /// Like `append_element`, but accepts valueless attributes.
    pub fn append_element_with(
        &mut self,
        parent: NodeId,
        name: &str,
        attributes: Vec<(String, Option<String>)>,
    ) -> NodeId {
        self.push(
            parent,
            NodeData::Element {
                name: name.to_string(),
                attributes,
            },
        )
    }

    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push(parent, NodeData::Text(text.to_string()))
    }

    pub fn append_comment(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push(parent, NodeData::Comment(text.to_string()))
    }

    fn push(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        debug_assert!((parent.0 as usize) < self.nodes.len());
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeEntry {
            data,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0 as usize].children.push(id);
        id
    }

    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { doc: self, id }
    }

    pub fn root(&self) -> NodeRef<'_> {
        self.node(Self::ROOT)
    }

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0 as usize].parent
    }

    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0 as usize].children
    }

    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0 as usize].data
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First element carrying `id="…"`, scanning nodes in insertion order.
    pub fn find_by_dom_id(&self, dom_id: &str) -> Option<NodeRef<'_>> {
        (0..self.nodes.len())
            .map(|i| self.node(NodeId(i as u32)))
            .find(|n| n.attribute("id") == Some(dom_id))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheap copyable handle to a node inside a `Document`.
#[derive(Clone, Copy, Debug)]
pub struct NodeRef<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn data(&self) -> &'a NodeData {
        self.doc.data(self.id)
    }

    pub fn children(self) -> impl Iterator<Item = NodeRef<'a>> {
        let doc = self.doc;
        doc.children_of(self.id).iter().map(move |&c| doc.node(c))
    }

    fn attr_entry(&self, name: &str) -> Option<&'a (String, Option<String>)> {
        match self.data() {
            NodeData::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name)),
            _ => None,
        }
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl<'a> DomNode for NodeRef<'a> {
    fn node_name(&self) -> &str {
        match self.data() {
            NodeData::Document => "#document",
            NodeData::Element { name, .. } => name,
            NodeData::Text(_) => "#text",
            NodeData::Comment(_) => "#comment",
        }
    }

    fn parent(&self) -> Option<Self> {
        self.doc.parent_of(self.id).map(|p| self.doc.node(p))
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attr_entry(name).is_some()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attr_entry(name)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }
}
