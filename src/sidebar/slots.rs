// sidebar/slots.rs
use crate::domain::RecordProperties;
use crate::sidebar::dom::{Document, Element, NodeId, Tag};

pub const CONTAINER_ID: &str = "div-container";
pub const ADDRESS_ID: &str = "display-address";
pub const PGP_LINK_ID: &str = "link-to-pgp";
pub const MAPS_LINK_ID: &str = "link-to-google-maps";

/// A node with a fixed id: built once, then only its leaf attributes change.
pub struct Slot {
    pub id: &'static str,
    create: fn(&'static str) -> Element,
    update: fn(&mut Document, NodeId, &RecordProperties),
}

impl Slot {
    /// Returns the slot's node under `parent`, creating it on first use,
    /// and writes `props` into it.
    pub fn apply(&self, doc: &mut Document, parent: NodeId, props: &RecordProperties) -> NodeId {
        let node = match doc.get_element_by_id(self.id) {
            Some(node) => node,
            None => {
                let node = doc.create_element((self.create)(self.id));
                doc.append_child(parent, node);
                node
            }
        };
        (self.update)(doc, node, props);
        node
    }
}

pub static CONTENT_SLOTS: [Slot; 3] = [
    Slot {
        id: ADDRESS_ID,
        create: |id| Element::new(Tag::P).with_id(id).with_class("display-text"),
        update: |doc, node, props| doc.set_text(node, &props.address),
    },
    Slot {
        id: PGP_LINK_ID,
        create: |id| {
            Element::new(Tag::A)
                .with_id(id)
                .with_class("link-button")
                .with_text("Property Information")
        },
        update: |doc, node, props| doc.set_href(node, &props.link_to_pgp),
    },
    Slot {
        id: MAPS_LINK_ID,
        create: |id| {
            Element::new(Tag::A)
                .with_id(id)
                .with_class("link-button")
                .with_text("Google Maps Location")
        },
        update: |doc, node, props| doc.set_href(node, &props.link_to_google_maps),
    },
];

const CONTAINER: Slot = Slot {
    id: CONTAINER_ID,
    create: |id| Element::new(Tag::Div).with_id(id),
    update: |_, _, _| {},
};

/// Fills the sidebar content area with `props`.
///
/// Safe to call any number of times: the container and its three slots are
/// created on the first call and updated in place afterwards.
pub fn render(doc: &mut Document, panel_root: NodeId, props: &RecordProperties) {
    let container = CONTAINER.apply(doc, panel_root, props);
    for slot in &CONTENT_SLOTS {
        slot.apply(doc, container, props);
    }
}
