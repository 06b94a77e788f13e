// sidebar/dom.rs
use maud::{html, Markup, Render};

/// Index of a node inside its `Document`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Div,
    P,
    A,
    H2,
}

#[derive(Debug, Clone)]
pub struct Element {
    pub tag: Tag,
    pub id: Option<String>,
    pub class: Option<String>,
    pub text: String,
    pub href: Option<String>,
    children: Vec<NodeId>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            id: None,
            class: None,
            text: String::new(),
            href: None,
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A tiny element tree holding the sidebar markup between requests.
///
/// Nodes are never removed; the sidebar only ever grows its fixed slots
/// once and then mutates them.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { nodes: vec![root] }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Adds a detached element. Attach it with `append_child`.
    pub fn create_element(&mut self, element: Element) -> NodeId {
        self.nodes.push(element);
        NodeId(self.nodes.len() - 1)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
    }

    pub fn get(&self, id: NodeId) -> &Element {
        &self.nodes[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Element {
        &mut self.nodes[id.0]
    }

    /// Looks an element up by its `id` attribute among attached nodes.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find(self.root(), id)
    }

    fn find(&self, at: NodeId, id: &str) -> Option<NodeId> {
        if self.get(at).id.as_deref() == Some(id) {
            return Some(at);
        }
        self.get(at)
            .children()
            .iter()
            .find_map(|&child| self.find(child, id))
    }

    pub fn set_text(&mut self, id: NodeId, text: &str) {
        self.get_mut(id).text = text.to_string();
    }

    pub fn set_href(&mut self, id: NodeId, href: &str) {
        self.get_mut(id).href = Some(href.to_string());
    }

    /// Markup for one subtree.
    pub fn render_node(&self, id: NodeId) -> Markup {
        let el = self.get(id);
        let inner = html! {
            (el.text)
            @for &child in &el.children {
                (self.render_node(child))
            }
        };

        match el.tag {
            Tag::Div => html! { div id=[el.id.as_deref()] class=[el.class.as_deref()] { (inner) } },
            Tag::P => html! { p id=[el.id.as_deref()] class=[el.class.as_deref()] { (inner) } },
            Tag::A => html! { a id=[el.id.as_deref()] class=[el.class.as_deref()] href=[el.href.as_deref()] { (inner) } },
            Tag::H2 => html! { h2 id=[el.id.as_deref()] class=[el.class.as_deref()] { (inner) } },
        }
    }
}

impl Render for Document {
    fn render(&self) -> Markup {
        self.render_node(self.root())
    }
}
