//! Page Widgets
//!
//! Small client-side behaviors for a page: custom checkboxes synced with
//! hidden inputs, a side drawer, and an account dropdown menu.

pub mod checkbox;
pub mod components;
pub mod config;
pub mod dom;
pub mod drawer;
pub mod dropdown;
pub mod error;
pub mod install;
pub mod memory;
pub mod web;

#[cfg(test)]
mod tests;

use wasm_bindgen::prelude::*;

pub use checkbox::{CheckboxState, CheckboxSync};
pub use config::{Pairing, Selectors, WidgetConfig};
pub use dom::{Document, DomNode};
pub use drawer::Drawer;
pub use dropdown::{DropdownClick, DropdownController};
pub use error::{WidgetError, WidgetResult};

fn to_js(err: WidgetError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Read the page configuration with logging already live, then apply its
/// log level.
///
/// `install_logger` is called at `Info` before the config block is parsed,
/// so a malformed block is reported.
pub fn configure<D: Document>(
    document: &D,
    install_logger: impl FnOnce(log::Level) -> Result<(), log::SetLoggerError>,
) -> WidgetConfig {
    if install_logger(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }
    let config = WidgetConfig::from_document(document);
    log::set_max_level(config.level_filter());
    config
}

/// Install logging and every widget on the current page.
///
/// Repeat calls log a warning and leave the page as it is.
#[wasm_bindgen(js_name = initPageWidgets)]
pub fn init_page_widgets() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let document = web::WebDocument::current().map_err(to_js)?;
    let config = configure(&document, console_log::init_with_level);
    install::install_once(&config.selectors, || web::install(document, &config)).map_err(to_js)?;
    Ok(())
}

#[wasm_bindgen(js_name = showDrawer)]
pub fn show_drawer() -> Result<(), JsValue> {
    web::current_drawer().and_then(|d| d.show()).map_err(to_js)
}

#[wasm_bindgen(js_name = hideDrawer)]
pub fn hide_drawer() -> Result<(), JsValue> {
    web::current_drawer().and_then(|d| d.hide()).map_err(to_js)
}
