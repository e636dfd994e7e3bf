//! Widget Configuration
//!
//! Class names, ids and pairing mode, read from a JSON `<script>` block on
//! the page. Every field falls back to the defaults the stock markup uses.

use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use crate::dom::{Document, DomNode};
use crate::error::WidgetResult;

/// Id of the `<script type="application/json">` element holding overrides
pub const CONFIG_ELEMENT_ID: &str = "page-widgets-config";

/// Default attribute linking a visual checkbox to its input id
pub const DEFAULT_PAIRING_ATTRIBUTE: &str = "data-checkbox-for";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub custom_checkbox: String,
    pub hidden_checkbox: String,
    pub checked_class: String,
    pub drawer_id: String,
    pub overlay_id: String,
    pub drawer_open_class: String,
    pub overlay_show_class: String,
    pub dropdown_content: String,
    pub account: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            custom_checkbox: "custom-checkbox".to_string(),
            hidden_checkbox: "visually-hidden".to_string(),
            checked_class: "checked".to_string(),
            drawer_id: "drawer".to_string(),
            overlay_id: "overlay".to_string(),
            drawer_open_class: "open".to_string(),
            overlay_show_class: "show".to_string(),
            dropdown_content: "dropdown-content".to_string(),
            account: "account".to_string(),
        }
    }
}

/// How a visual checkbox finds its hidden input
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum Pairing {
    /// Nth visual pairs with Nth hidden input
    #[default]
    Positional,
    /// Visual carries an attribute naming the input's id
    Attribute {
        #[serde(default = "default_pairing_attribute")]
        name: String,
    },
}

fn default_pairing_attribute() -> String {
    DEFAULT_PAIRING_ATTRIBUTE.to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub selectors: Selectors,
    pub pairing: Pairing,
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            pairing: Pairing::default(),
            log_level: "info".to_string(),
        }
    }
}

impl WidgetConfig {
    pub fn from_json(json: &str) -> WidgetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the page's config block, falling back to defaults
    pub fn from_document<D: Document>(document: &D) -> Self {
        let Some(text) = document
            .element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }

    /// Parsed log level; unknown names mean `Info`
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDocument;

    #[test]
    fn test_defaults_match_stock_markup() {
        let config = WidgetConfig::default();
        assert_eq!(config.selectors.custom_checkbox, "custom-checkbox");
        assert_eq!(config.selectors.hidden_checkbox, "visually-hidden");
        assert_eq!(config.selectors.dropdown_content, "dropdown-content");
        assert_eq!(config.pairing, Pairing::Positional);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_override() {
        let config = WidgetConfig::from_json(
            r#"{"selectors": {"account": "profile"}, "logLevel": "debug"}"#,
        )
        .unwrap();
        assert_eq!(config.selectors.account, "profile");
        assert_eq!(config.selectors.drawer_id, "drawer");
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_attribute_pairing() {
        let config = WidgetConfig::from_json(r#"{"pairing": {"mode": "attribute"}}"#).unwrap();
        assert_eq!(
            config.pairing,
            Pairing::Attribute { name: DEFAULT_PAIRING_ATTRIBUTE.to_string() }
        );

        let config =
            WidgetConfig::from_json(r#"{"pairing": {"mode": "attribute", "name": "data-for"}}"#)
                .unwrap();
        assert_eq!(config.pairing, Pairing::Attribute { name: "data-for".to_string() });
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = WidgetConfig::from_json(r#"{"logLevel": "loud"}"#).unwrap();
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_from_document() {
        let doc = MemoryDocument::new();
        assert_eq!(WidgetConfig::from_document(&doc), WidgetConfig::default());

        doc.append(&doc.body(), "script")
            .with_id(CONFIG_ELEMENT_ID)
            .with_text(r#"{"selectors": {"drawerId": "side-panel"}}"#);
        let config = WidgetConfig::from_document(&doc);
        assert_eq!(config.selectors.drawer_id, "side-panel");
    }

    #[test]
    fn test_malformed_document_config_uses_defaults() {
        let doc = MemoryDocument::new();
        doc.append(&doc.body(), "script")
            .with_id(CONFIG_ELEMENT_ID)
            .with_text("{not json");
        assert_eq!(WidgetConfig::from_document(&doc), WidgetConfig::default());
    }
}
