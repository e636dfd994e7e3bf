//! DOM Seam
//!
//! The behaviors only talk to the page through these traits, so they run
//! against the browser document or an in-memory one alike.

use crate::error::WidgetResult;

/// Inline `display` value for an open dropdown
pub const DISPLAY_BLOCK: &str = "block";
/// Inline `display` value for a closed dropdown
pub const DISPLAY_NONE: &str = "none";

/// Element operations used by the widgets.
///
/// Handles are cheap to clone and mutate through `&self`, like DOM nodes.
pub trait DomNode: Clone {
    fn has_class(&self, class: &str) -> bool;

    fn add_class(&self, class: &str) -> WidgetResult<()>;

    fn remove_class(&self, class: &str) -> WidgetResult<()>;

    /// Flip a class, returning whether it is now present
    fn toggle_class(&self, class: &str) -> WidgetResult<bool>;

    /// `checked` property of an input element
    fn checked(&self) -> WidgetResult<bool>;

    fn set_checked(&self, checked: bool) -> WidgetResult<()>;

    /// Inline `display` style, `None` when unset
    fn display(&self) -> Option<String>;

    fn set_display(&self, value: &str) -> WidgetResult<()>;

    /// True if `other` is this node or one of its descendants
    fn contains(&self, other: &Self) -> bool;

    fn next_element_sibling(&self) -> Option<Self>;

    fn attribute(&self, name: &str) -> Option<String>;

    fn text_content(&self) -> Option<String>;
}

/// Document-level lookups
pub trait Document: Clone {
    type Node: DomNode;

    /// All elements carrying `class`, in document order
    fn elements_by_class(&self, class: &str) -> Vec<Self::Node>;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
}
