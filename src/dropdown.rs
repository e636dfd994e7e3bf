//! Dropdown Controller
//!
//! Driven by one document-level click listener: close every dropdown the
//! click landed outside of, then toggle the menu next to a clicked account
//! button. The close pass always runs first.

use crate::config::Selectors;
use crate::dom::{Document, DomNode, DISPLAY_BLOCK, DISPLAY_NONE};
use crate::error::{WidgetError, WidgetResult};

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropdownClick {
    /// Dropdowns set to `display: none` by the close pass
    pub hidden: usize,
    /// New open state of the account menu, if an account was clicked
    pub toggled: Option<bool>,
}

#[derive(Clone)]
pub struct DropdownController<D: Document> {
    document: D,
    dropdown_class: String,
    account_class: String,
}

impl<D: Document> DropdownController<D> {
    pub fn new(document: D, selectors: &Selectors) -> Self {
        Self {
            document,
            dropdown_class: selectors.dropdown_content.clone(),
            account_class: selectors.account.clone(),
        }
    }

    pub fn handle_click(&self, target: &D::Node) -> WidgetResult<DropdownClick> {
        let mut outcome = DropdownClick::default();

        for dropdown in self.document.elements_by_class(&self.dropdown_class) {
            if !dropdown.contains(target) {
                dropdown.set_display(DISPLAY_NONE)?;
                outcome.hidden += 1;
            }
        }

        if target.has_class(&self.account_class) {
            let menu = target
                .next_element_sibling()
                .ok_or_else(|| WidgetError::MissingSibling(self.account_class.clone()))?;
            let open = menu.display().as_deref() != Some(DISPLAY_BLOCK);
            menu.set_display(if open { DISPLAY_BLOCK } else { DISPLAY_NONE })?;
            outcome.toggled = Some(open);
        }

        Ok(outcome)
    }
}
