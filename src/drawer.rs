//! Drawer
//!
//! Side panel plus dimming overlay, shown by CSS class.

use crate::config::Selectors;
use crate::dom::{Document, DomNode};
use crate::error::{WidgetError, WidgetResult};

pub struct Drawer<D: Document> {
    document: D,
    selectors: Selectors,
}

impl<D: Document> Drawer<D> {
    pub fn new(document: D, selectors: &Selectors) -> Self {
        Self { document, selectors: selectors.clone() }
    }

    /// Open the drawer, then show the overlay. Repeat calls are no-ops.
    pub fn show(&self) -> WidgetResult<()> {
        self.lookup(&self.selectors.drawer_id)?
            .add_class(&self.selectors.drawer_open_class)?;
        self.lookup(&self.selectors.overlay_id)?
            .add_class(&self.selectors.overlay_show_class)?;
        log::debug!("drawer shown");
        Ok(())
    }

    pub fn hide(&self) -> WidgetResult<()> {
        self.lookup(&self.selectors.drawer_id)?
            .remove_class(&self.selectors.drawer_open_class)?;
        self.lookup(&self.selectors.overlay_id)?
            .remove_class(&self.selectors.overlay_show_class)?;
        log::debug!("drawer hidden");
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        let open = self
            .document
            .element_by_id(&self.selectors.drawer_id)
            .is_some_and(|d| d.has_class(&self.selectors.drawer_open_class));
        let shown = self
            .document
            .element_by_id(&self.selectors.overlay_id)
            .is_some_and(|o| o.has_class(&self.selectors.overlay_show_class));
        open && shown
    }

    fn lookup(&self, id: &str) -> WidgetResult<D::Node> {
        self.document
            .element_by_id(id)
            .ok_or_else(|| WidgetError::MissingElement(id.to_string()))
    }
}
