//! Page Scenario Tests
//!
//! Whole-page behavior against an in-memory document laid out like the
//! stock markup.

#[cfg(test)]
mod tests {
    use crate::config::{WidgetConfig, CONFIG_ELEMENT_ID};
    use crate::dom::DomNode;
    use crate::memory::{MemoryDocument, MemoryNode};
    use crate::{configure, CheckboxSync, Drawer, DropdownController};
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::sync::Mutex;

    /// Records every line it receives
    struct CaptureLogger {
        lines: Mutex<Vec<String>>,
    }

    impl Log for CaptureLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(format!("{} {}", record.level(), record.args()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: CaptureLogger = CaptureLogger { lines: Mutex::new(Vec::new()) };

    struct StockPage {
        doc: MemoryDocument,
        visuals: Vec<MemoryNode>,
        inputs: Vec<MemoryNode>,
        drawer: MemoryNode,
        overlay: MemoryNode,
        account: MemoryNode,
        menu: MemoryNode,
        content: MemoryNode,
    }

    fn stock_page() -> StockPage {
        let doc = MemoryDocument::new();
        let body = doc.body();

        let header = doc.append(&body, "header");
        let account = doc.append(&header, "button").with_class("account");
        let menu = doc.append(&header, "div").with_class("dropdown-content");
        doc.append(&menu, "a").with_text("Sign out");

        let overlay = doc.append(&body, "div").with_id("overlay").with_class("overlay");
        let drawer = doc.append(&body, "aside").with_id("drawer").with_class("drawer");

        let content = doc.append(&body, "form");
        let mut visuals = Vec::new();
        let mut inputs = Vec::new();
        for _ in 0..2 {
            let row = doc.append(&content, "div").with_class("checkbox-row");
            inputs.push(doc.append(&row, "input").with_class("visually-hidden"));
            visuals.push(doc.append(&row, "span").with_class("custom-checkbox"));
        }

        StockPage { doc, visuals, inputs, drawer, overlay, account, menu, content }
    }

    #[test]
    fn test_stock_page_interactions() {
        let page = stock_page();
        let config = WidgetConfig::from_document(&page.doc);
        let sync = CheckboxSync::new(page.doc.clone(), &config.selectors, config.pairing.clone());
        let drawer = Drawer::new(page.doc.clone(), &config.selectors);
        let dropdowns = DropdownController::new(page.doc.clone(), &config.selectors);

        // Clicks reach both the checkbox and the document listener
        dropdowns.handle_click(&page.visuals[0]).unwrap();
        sync.toggle(0).unwrap();
        assert!(page.visuals[0].has_class("checked"));
        assert!(page.inputs[0].checked().unwrap());
        assert!(!page.inputs[1].checked().unwrap());

        drawer.show().unwrap();
        assert!(page.drawer.has_class("open"));
        assert!(page.overlay.has_class("show"));

        dropdowns.handle_click(&page.account).unwrap();
        assert_eq!(page.menu.display().as_deref(), Some("block"));
        dropdowns.handle_click(&page.content).unwrap();
        assert_eq!(page.menu.display().as_deref(), Some("none"));

        // Widgets are independent of each other
        assert!(drawer.is_open());
        assert!(page.visuals[0].has_class("checked"));
    }

    #[test]
    fn test_configured_selectors() {
        let doc = MemoryDocument::new();
        let body = doc.body();
        doc.append(&body, "script").with_id(CONFIG_ELEMENT_ID).with_text(
            r#"{"selectors": {"account": "profile", "dropdownContent": "menu", "drawerId": "nav-drawer"}}"#,
        );
        let profile = doc.append(&body, "img").with_class("profile");
        let menu = doc.append(&body, "ul").with_class("menu");
        let drawer_el = doc.append(&body, "nav").with_id("nav-drawer");
        doc.append(&body, "div").with_id("overlay");

        let config = WidgetConfig::from_document(&doc);
        DropdownController::new(doc.clone(), &config.selectors)
            .handle_click(&profile)
            .unwrap();
        Drawer::new(doc, &config.selectors).show().unwrap();

        assert_eq!(menu.display().as_deref(), Some("block"));
        assert!(drawer_el.has_class("open"));
    }

    #[test]
    fn test_malformed_config_warning_reaches_logger() {
        let doc = MemoryDocument::new();
        doc.append(&doc.body(), "script")
            .with_id(CONFIG_ELEMENT_ID)
            .with_text(r#"{"logLevel": "warn", "selectors": "#);

        let config = configure(&doc, |level| {
            log::set_logger(&CAPTURE)?;
            log::set_max_level(level.to_level_filter());
            Ok(())
        });

        assert_eq!(config, WidgetConfig::default());
        assert_eq!(log::max_level(), LevelFilter::Info);
        let lines = CAPTURE.lines.lock().unwrap();
        assert!(lines
            .iter()
            .any(|l| l.starts_with(Level::Warn.as_str()) && l.contains(CONFIG_ELEMENT_ID)));
    }
}
