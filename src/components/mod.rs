//! UI Components
//!
//! Leptos components rendering the markup the widgets expect.

mod account_menu;
mod custom_checkbox;
mod drawer_panel;

pub use account_menu::AccountMenu;
pub use custom_checkbox::CustomCheckbox;
pub use drawer_panel::{DrawerButton, DrawerPanel};
