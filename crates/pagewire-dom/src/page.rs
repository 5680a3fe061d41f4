//! `PageView` implementation over the live DOM.

use pagewire_core::PageView;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

/// The real document, seen through the controller capability trait.
///
/// All setters are fallible in the DOM; failures are swallowed because
/// a mis-typed node (e.g. a value write on a non-input) should degrade
/// to a no-op, not crash the handler.
#[derive(Debug, Clone)]
pub struct DomPage {
    window: web_sys::Window,
}

impl DomPage {
    /// Wrap the browsing context's window.
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }
}

impl PageView for DomPage {
    type Node = Element;

    fn contains(&self, ancestor: &Element, target: &Element) -> bool {
        let target: &web_sys::Node = target;
        ancestor.contains(Some(target))
    }

    fn set_class(&mut self, node: &Element, class: &str, on: bool) {
        let _ = node.class_list().toggle_with_force(class, on);
    }

    fn set_shown(&mut self, node: &Element, shown: bool) {
        if let Some(element) = node.dyn_ref::<web_sys::HtmlElement>() {
            let display = if shown { "flex" } else { "none" };
            let _ = element.style().set_property("display", display);
        }
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_value(&mut self, node: &Element, value: &str) {
        if let Some(input) = node.dyn_ref::<web_sys::HtmlInputElement>() {
            input.set_value(value);
        }
    }

    fn set_image_src(&mut self, node: &Element, url: &str) {
        if let Some(image) = node.dyn_ref::<web_sys::HtmlImageElement>() {
            image.set_src(url);
        }
    }

    fn remove(&mut self, node: &Element) {
        node.remove();
    }

    fn clear_query(&mut self) {
        let location = self.window.location();
        let pathname = match location.pathname() {
            Ok(pathname) => pathname,
            Err(_) => return,
        };
        // Rewrite in place: no reload, no new history entry.
        if let Ok(history) = self.window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&pathname));
        }
    }
}
