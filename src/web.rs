//! Browser Binding
//!
//! DOM seam over `web_sys`, plus the listeners that wire the widgets into
//! the live page.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::checkbox::CheckboxSync;
use crate::config::{Selectors, WidgetConfig};
use crate::dom::{Document, DomNode};
use crate::drawer::Drawer;
use crate::dropdown::DropdownController;
use crate::error::{WidgetError, WidgetResult};

fn dom_error(err: JsValue) -> WidgetError {
    WidgetError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

fn style_of(el: &web_sys::Element) -> WidgetResult<web_sys::CssStyleDeclaration> {
    el.dyn_ref::<web_sys::HtmlElement>()
        .map(|html| html.style())
        .ok_or_else(|| WidgetError::Dom("element has no inline style".to_string()))
}

impl DomNode for web_sys::Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) -> WidgetResult<()> {
        self.class_list().add_1(class).map_err(dom_error)
    }

    fn remove_class(&self, class: &str) -> WidgetResult<()> {
        self.class_list().remove_1(class).map_err(dom_error)
    }

    fn toggle_class(&self, class: &str) -> WidgetResult<bool> {
        self.class_list().toggle(class).map_err(dom_error)
    }

    fn checked(&self) -> WidgetResult<bool> {
        self.dyn_ref::<web_sys::HtmlInputElement>()
            .map(|input| input.checked())
            .ok_or(WidgetError::NotAnInput)
    }

    fn set_checked(&self, checked: bool) -> WidgetResult<()> {
        let input = self
            .dyn_ref::<web_sys::HtmlInputElement>()
            .ok_or(WidgetError::NotAnInput)?;
        input.set_checked(checked);
        Ok(())
    }

    fn display(&self) -> Option<String> {
        let value = style_of(self).ok()?.get_property_value("display").ok()?;
        (!value.is_empty()).then_some(value)
    }

    fn set_display(&self, value: &str) -> WidgetResult<()> {
        style_of(self)?.set_property("display", value).map_err(dom_error)
    }

    fn contains(&self, other: &Self) -> bool {
        let other: &web_sys::Node = other;
        web_sys::Node::contains(self, Some(other))
    }

    fn next_element_sibling(&self) -> Option<Self> {
        web_sys::Element::next_element_sibling(self)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn text_content(&self) -> Option<String> {
        web_sys::Node::text_content(self)
    }
}

/// The live page document
#[derive(Clone)]
pub struct WebDocument {
    inner: web_sys::Document,
}

impl WebDocument {
    pub fn new(inner: web_sys::Document) -> Self {
        Self { inner }
    }

    /// Document of the current window
    pub fn current() -> WidgetResult<Self> {
        web_sys::window()
            .and_then(|win| win.document())
            .map(Self::new)
            .ok_or(WidgetError::NoDocument)
    }
}

impl Document for WebDocument {
    type Node = web_sys::Element;

    fn elements_by_class(&self, class: &str) -> Vec<web_sys::Element> {
        let Ok(list) = self.inner.query_selector_all(&format!(".{}", class)) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<web_sys::Element> {
        self.inner.get_element_by_id(id)
    }
}

/// Element a click landed on; text nodes resolve to their parent element
fn click_target(ev: &web_sys::MouseEvent) -> Option<web_sys::Element> {
    let target = ev.target()?;
    match target.dyn_into::<web_sys::Element>() {
        Ok(el) => Some(el),
        Err(other) => other.dyn_into::<web_sys::Node>().ok()?.parent_element(),
    }
}

/// Drawer over the current page, using the selectors captured at install
pub fn current_drawer() -> WidgetResult<Drawer<WebDocument>> {
    let document = WebDocument::current()?;
    let selectors = crate::install::installed_selectors().unwrap_or_default();
    Ok(Drawer::new(document, &selectors))
}

/// Attach a click listener to each visual checkbox
pub fn bind_checkboxes(sync: CheckboxSync<WebDocument>) -> WidgetResult<usize> {
    let sync = Rc::new(sync);
    let mut bound = 0;
    for (index, visual) in sync.visuals().iter().enumerate() {
        let handler = Rc::clone(&sync);
        let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
            if let Err(e) = handler.toggle(index) {
                log::error!("checkbox {}: {}", index, e);
            }
        });
        visual
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(dom_error)?;
        on_click.forget();
        bound += 1;
    }
    Ok(bound)
}

/// Bind the single document-level click listener for dropdowns
pub fn bind_global_click(document: &WebDocument, controller: DropdownController<WebDocument>) -> WidgetResult<()> {
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(target) = click_target(&ev) else {
            return;
        };
        match controller.handle_click(&target) {
            Ok(click) => log::trace!("dropdown click: {:?}", click),
            Err(e) => log::error!("dropdown: {}", e),
        }
    });
    document
        .inner
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    on_click.forget();
    Ok(())
}

/// Expose a drawer action as `window.<name>` for inline `onclick` attributes
fn expose_drawer_action(name: &str, action: fn() -> Result<(), JsValue>) -> WidgetResult<()> {
    let window = web_sys::window().ok_or(WidgetError::NoDocument)?;
    let callback = Closure::<dyn Fn() -> Result<(), JsValue>>::new(action);
    js_sys::Reflect::set(&window, &JsValue::from_str(name), &callback.into_js_value()).map_err(dom_error)?;
    Ok(())
}

/// Wire every widget into the current page
pub fn install(document: WebDocument, config: &WidgetConfig) -> WidgetResult<()> {
    let selectors: &Selectors = &config.selectors;

    let sync = CheckboxSync::new(document.clone(), selectors, config.pairing.clone());
    let bound = bind_checkboxes(sync)?;

    let controller = DropdownController::new(document.clone(), selectors);
    bind_global_click(&document, controller)?;

    expose_drawer_action("showDrawer", crate::show_drawer)?;
    expose_drawer_action("hideDrawer", crate::hide_drawer)?;

    log::info!("page widgets installed: {} checkboxes", bound);
    Ok(())
}
