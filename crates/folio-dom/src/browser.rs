//! Browser bindings over `web_sys`.

use std::time::Duration;

use folio_common::{FolioError, FolioResult, LocalTask, Scheduler};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, NodeList, Storage, Window};

use crate::dom::Dom;
use crate::selector::Selector;
use crate::storage::PreferenceStore;

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// The live page.
#[derive(Debug, Clone)]
pub struct BrowserDocument {
    window: Window,
    document: Document,
}

impl BrowserDocument {
    /// Binds to the global window and its document.
    pub fn from_window() -> FolioResult<Self> {
        let window = web_sys::window().ok_or_else(|| FolioError::browser("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| FolioError::browser("window has no document"))?;
        Ok(Self { window, document })
    }

    /// The bound window.
    pub const fn window(&self) -> &Window {
        &self.window
    }

    /// The bound document.
    pub const fn document(&self) -> &Document {
        &self.document
    }
}

impl Dom for BrowserDocument {
    type Node = Element;

    fn query_all(&self, selector: &Selector) -> Vec<Element> {
        let css = selector.to_css();
        match self.document.query_selector_all(&css) {
            Ok(list) => elements(&list),
            Err(e) => {
                warn!("Invalid selector '{}': {}", css, js_message(&e));
                Vec::new()
            }
        }
    }

    fn query_within(&self, root: &Element, selector: &Selector) -> Vec<Element> {
        let css = selector.to_css();
        match root.query_selector_all(&css) {
            Ok(list) => elements(&list),
            Err(e) => {
                warn!("Invalid selector '{}': {}", css, js_message(&e));
                Vec::new()
            }
        }
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        if let Err(e) = node.set_attribute(name, value) {
            warn!("Failed to set attribute '{}': {}", name, js_message(&e));
        }
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Element, class: &str) {
        if let Err(e) = node.class_list().add_1(class) {
            warn!("Failed to add class '{}': {}", class, js_message(&e));
        }
    }

    fn remove_class(&self, node: &Element, class: &str) {
        if let Err(e) = node.class_list().remove_1(class) {
            warn!("Failed to remove class '{}': {}", class, js_message(&e));
        }
    }

    fn fragment(&self) -> String {
        self.window
            .location()
            .hash()
            .map(|hash| hash.trim_start_matches('#').to_string())
            .unwrap_or_default()
    }

    fn replace_fragment(&self, fragment: &str) {
        let url = format!("#{fragment}");
        let result = self
            .window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(e) = result {
            warn!("Failed to replace location fragment: {}", js_message(&e));
        }
    }
}

/// `window.localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Opens the window's local storage.
    pub fn open(window: &Window) -> FolioResult<Self> {
        let storage = window
            .local_storage()
            .map_err(|e| FolioError::browser(format!("localStorage unavailable: {}", js_message(&e))))?
            .ok_or_else(|| FolioError::browser("localStorage unavailable"))?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> FolioResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| FolioError::storage(js_message(&e), key))
    }

    fn set(&self, key: &str, value: &str) -> FolioResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| FolioError::storage(js_message(&e), key))
    }
}

/// Scheduler on the browser event loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn spawn(&self, task: LocalTask) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalTask {
        let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            if let Some(window) = web_sys::window() {
                if let Err(e) =
                    window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
                {
                    warn!("setTimeout failed: {}", js_message(&e));
                }
            }
        });
        Box::pin(async move {
            let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
        })
    }
}
