//! Custom Checkbox Component
//!
//! Hidden native input followed by its styled visual.

use leptos::prelude::*;

/// Styled checkbox row.
///
/// Rendered as a `div`, not a `label`, so a click on the visual does not
/// also toggle the input natively.
///
/// # Arguments
/// * `label` - Text shown beside the box
/// * `name` - Form field name of the hidden input
/// * `value` - Submitted value when checked
/// * `input_id` - Optional id; also written to `data-checkbox-for` for attribute pairing
#[component]
pub fn CustomCheckbox(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] input_id: Option<String>,
) -> impl IntoView {
    view! {
        <div class="checkbox-row">
            <input
                type="checkbox"
                class="visually-hidden"
                id=input_id.clone()
                name=name
                value=value
            />
            <span class="custom-checkbox" data-checkbox-for=input_id></span>
            <span class="checkbox-label">{label}</span>
        </div>
    }
}
