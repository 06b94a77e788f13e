pub mod dom;
pub mod slots;

use crate::domain::RecordProperties;
use dom::{Document, Element, NodeId, Tag};

pub const PANEL_ID: &str = "my-info-panel";
pub const BODY_ID: &str = "sidebar-body";
pub const TITLE_ID: &str = "sidebar-title";
pub const CONTENT_ID: &str = "sidebar-content";
pub const NO_SELECTION_TITLE: &str = "No property selected";

/// Which record the sidebar panel is showing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SidebarPanel {
    #[default]
    Closed,
    Open(RecordProperties),
}

impl SidebarPanel {
    pub fn is_open(&self) -> bool {
        matches!(self, SidebarPanel::Open(_))
    }
}

/// The sidebar's title and content slots plus its open/closed state.
#[derive(Debug, Clone)]
pub struct Sidebar {
    doc: Document,
    title: NodeId,
    content: NodeId,
    panel: SidebarPanel,
}

impl Sidebar {
    pub fn new() -> Self {
        let mut doc = Document::new(Element::new(Tag::Div).with_id(BODY_ID));
        let title = doc.create_element(
            Element::new(Tag::H2)
                .with_id(TITLE_ID)
                .with_text(NO_SELECTION_TITLE),
        );
        let content = doc.create_element(Element::new(Tag::Div).with_id(CONTENT_ID));
        let root = doc.root();
        doc.append_child(root, title);
        doc.append_child(root, content);

        Self {
            doc,
            title,
            content,
            panel: SidebarPanel::Closed,
        }
    }

    /// Shows `props`: price in the title, details in the content slots.
    pub fn open(&mut self, props: &RecordProperties) {
        self.doc.set_text(self.title, &props.price);
        slots::render(&mut self.doc, self.content, props);
        self.panel = SidebarPanel::Open(props.clone());
    }

    /// Hides the panel. The last shown content stays in the slots.
    pub fn close(&mut self) {
        self.panel = SidebarPanel::Closed;
    }

    pub fn panel(&self) -> &SidebarPanel {
        &self.panel
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new()
    }
}
