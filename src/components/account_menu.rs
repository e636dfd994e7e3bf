//! Account Menu Component
//!
//! Account button immediately followed by its dropdown panel. The panel is
//! opened and closed by the document click listener, not by Leptos state.

use leptos::prelude::*;

#[component]
pub fn AccountMenu(#[prop(into)] label: String, children: Children) -> impl IntoView {
    view! {
        <div class="account-menu">
            <button class="account" type="button">{label}</button>
            <div class="dropdown-content">
                {children()}
            </div>
        </div>
    }
}
