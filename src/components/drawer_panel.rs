//! Drawer Components
//!
//! Side drawer with overlay, and the button that opens it.

use leptos::prelude::*;

/// Overlay plus drawer; clicking the overlay closes both
#[component]
pub fn DrawerPanel(children: Children) -> impl IntoView {
    let close = move |_| {
        if let Err(e) = crate::hide_drawer() {
            log::error!("hide drawer: {:?}", e);
        }
    };

    view! {
        <div id="overlay" class="overlay" on:click=close></div>
        <aside id="drawer" class="drawer">
            {children()}
        </aside>
    }
}

#[component]
pub fn DrawerButton(#[prop(into)] label: String) -> impl IntoView {
    let open = move |_| {
        if let Err(e) = crate::show_drawer() {
            log::error!("show drawer: {:?}", e);
        }
    };

    view! {
        <button class="drawer-toggle" on:click=open>
            {label}
        </button>
    }
}
