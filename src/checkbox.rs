//! Checkbox Sync
//!
//! Keeps styled checkbox visuals and their hidden inputs in step.

use crate::config::{Pairing, Selectors};
use crate::dom::{Document, DomNode};
use crate::error::{WidgetError, WidgetResult};

/// State of a pair after a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxState {
    pub visual_checked: bool,
    pub input_checked: bool,
}

/// Visual checkboxes paired with hidden inputs.
///
/// Both lists are captured once at construction, in document order.
pub struct CheckboxSync<D: Document> {
    document: D,
    checked_class: String,
    pairing: Pairing,
    visuals: Vec<D::Node>,
    inputs: Vec<D::Node>,
}

impl<D: Document> CheckboxSync<D> {
    pub fn new(document: D, selectors: &Selectors, pairing: Pairing) -> Self {
        let visuals = document.elements_by_class(&selectors.custom_checkbox);
        let inputs = document.elements_by_class(&selectors.hidden_checkbox);
        if pairing == Pairing::Positional && visuals.len() != inputs.len() {
            log::warn!(
                "{} .{} elements but {} .{} inputs, positional pairing will misalign",
                visuals.len(),
                selectors.custom_checkbox,
                inputs.len(),
                selectors.hidden_checkbox
            );
        }
        Self {
            document,
            checked_class: selectors.checked_class.clone(),
            pairing,
            visuals,
            inputs,
        }
    }

    pub fn visuals(&self) -> &[D::Node] {
        &self.visuals
    }

    /// Handle a click on the visual at `index`.
    ///
    /// The visual's class is flipped before the input is resolved, so a
    /// missing input still leaves the visual toggled.
    pub fn toggle(&self, index: usize) -> WidgetResult<CheckboxState> {
        let visual = self.visuals.get(index).ok_or(WidgetError::IndexOutOfRange {
            list: "custom checkbox",
            index,
            len: self.visuals.len(),
        })?;
        let visual_checked = visual.toggle_class(&self.checked_class)?;

        let input = self.input_for(index, visual)?;
        let input_checked = !input.checked()?;
        input.set_checked(input_checked)?;

        log::debug!("checkbox {} -> {}", index, input_checked);
        Ok(CheckboxState { visual_checked, input_checked })
    }

    fn input_for(&self, index: usize, visual: &D::Node) -> WidgetResult<D::Node> {
        match &self.pairing {
            Pairing::Positional => {
                self.inputs
                    .get(index)
                    .cloned()
                    .ok_or(WidgetError::IndexOutOfRange {
                        list: "hidden checkbox",
                        index,
                        len: self.inputs.len(),
                    })
            }
            Pairing::Attribute { name } => {
                let id = visual.attribute(name).ok_or_else(|| WidgetError::UnpairedCheckbox {
                    index,
                    reason: format!("missing {} attribute", name),
                })?;
                self.document
                    .element_by_id(&id)
                    .ok_or_else(|| WidgetError::UnpairedCheckbox {
                        index,
                        reason: format!("no element #{}", id),
                    })
            }
        }
    }
}
