//! Page Widgets Demo Entry Point
//!
//! Mounts a sample page built from the components, then installs the
//! behaviors on it.

mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
    if let Err(e) = page_widgets::init_page_widgets() {
        web_sys::console::error_1(&e);
    }
}
