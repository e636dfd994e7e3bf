//! Demo Page
//!
//! Trip-planning form using every widget.

use leptos::prelude::*;
use page_widgets::components::{AccountMenu, CustomCheckbox, DrawerButton, DrawerPanel};

/// Checkbox groups: (field name, options)
const GROUPS: &[(&str, &[&str])] = &[
    ("traveling-with", &["Solo", "Partner", "Friends", "Family"]),
    ("lodging", &["Hotel", "Hostel", "Camping"]),
    ("adventure", &["Hiking", "Museums", "Food"]),
];

#[component]
pub fn App() -> impl IntoView {
    view! {
        <header class="top-bar">
            <DrawerButton label="Menu" />
            <AccountMenu label="Account">
                <a href="#profile">"Profile"</a>
                <a href="#sign-out">"Sign out"</a>
            </AccountMenu>
        </header>

        <DrawerPanel>
            <nav class="drawer-links">
                <a href="/">"Home"</a>
                <a href="/plan_trip">"Plan a trip"</a>
            </nav>
        </DrawerPanel>

        <main class="plan-trip">
            <h1>"Plan your trip"</h1>
            <form>
                {GROUPS.iter().map(|(name, options)| {
                    view! {
                        <fieldset class="checkbox-group">
                            <legend>{*name}</legend>
                            {options.iter().map(|option| {
                                view! {
                                    <CustomCheckbox
                                        label=*option
                                        name=*name
                                        value=option.to_lowercase()
                                    />
                                }
                            }).collect_view()}
                        </fieldset>
                    }
                }).collect_view()}
            </form>
        </main>
    }
}
