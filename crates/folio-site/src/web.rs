//! Browser entry point.

use crate::site::{embedded_config, Site};
use anyhow::{anyhow, Context};
use folio_common::logging::init_logging_with_writer;
use folio_common::LoggingConfig;
use folio_dom::browser::{BrowserDocument, BrowserScheduler, LocalStorageStore};
use folio_dom::{Dom, MemoryPreferenceStore, PreferenceStore, Selector};
use folio_i18n::HttpContentSource;
use folio_nav::KeyInput;
use std::io;
use std::rc::Rc;
use tracing::{info, warn, Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget, KeyboardEvent};

type BrowserSite = Site<BrowserDocument>;

/// Buffers one formatted event and hands it to the console on drop.
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buffer);
        let line = text.trim_end();
        if line.is_empty() {
            return;
        }
        let value = JsValue::from_str(line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&value),
            Level::WARN => web_sys::console::warn_1(&value),
            _ => web_sys::console::log_1(&value),
        }
    }
}

/// [`MakeWriter`] targeting the browser console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buffer: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buffer: Vec::new(),
        }
    }
}

fn js_error(value: &JsValue) -> anyhow::Error {
    anyhow!(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> anyhow::Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| js_error(&e))
        .with_context(|| format!("Failed to listen for '{event}'"))?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

fn wire_clicks(site: &Rc<BrowserSite>, document: &BrowserDocument) -> anyhow::Result<()> {
    let contract = &site.config().dom;
    let controls = document.query_all(&Selector::any_class([
        contract.language_button_class.as_str(),
        contract.tab_class.as_str(),
    ]));

    for control in controls {
        let site = Rc::clone(site);
        let target = control.clone();
        listen(&control, "click", move |event| {
            if site.handle_click(&target) {
                event.prevent_default();
            }
        })?;
    }
    Ok(())
}

fn wire_keyboard(site: &Rc<BrowserSite>, document: &BrowserDocument) -> anyhow::Result<()> {
    let site = Rc::clone(site);
    listen(document.document(), "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let input = KeyInput {
            ctrl: key.ctrl_key(),
            meta: key.meta_key(),
            alt: key.alt_key(),
            shift: key.shift_key(),
            ..KeyInput::from_key(&key.key())
        };
        if site.handle_key(&input) {
            event.prevent_default();
        }
    })
}

fn wire_hover(site: &Rc<BrowserSite>, document: &BrowserDocument) -> anyhow::Result<()> {
    let classes = &site.config().decor.hover_icon_classes;
    let icons = document.query_all(&Selector::any_class(classes.iter().map(String::as_str)));

    for icon in icons {
        let link: Element = match icon.closest("a") {
            Ok(Some(link)) => link,
            _ => icon,
        };

        let enter_site = Rc::clone(site);
        let enter_link = link.clone();
        listen(&link, "mouseenter", move |_| enter_site.hover_enter(&enter_link))?;

        let leave_site = Rc::clone(site);
        let leave_link = link.clone();
        listen(&link, "mouseleave", move |_| leave_site.hover_leave(&leave_link))?;
    }
    Ok(())
}

fn on_ready(site: &Rc<BrowserSite>, document: &BrowserDocument) {
    site.start();
    let wired = wire_clicks(site, document)
        .and_then(|()| wire_keyboard(site, document))
        .and_then(|()| wire_hover(site, document));
    if let Err(e) = wired {
        warn!("Event wiring incomplete: {:#}", e);
    }
}

fn run() -> anyhow::Result<()> {
    let config = embedded_config();
    if let Err(e) = init_logging_with_writer(
        &LoggingConfig::browser(config.logging.level.clone()),
        ConsoleMakeWriter,
        false,
    ) {
        web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
    }

    let document = BrowserDocument::from_window().context("Failed to bind to the page")?;
    let window = document.window().clone();

    let page_url = window.location().href().map_err(|e| js_error(&e))?;
    let source = HttpContentSource::from_config(&config.content, &page_url)
        .context("Failed to set up content loading")?;

    let store: Rc<dyn PreferenceStore> = match LocalStorageStore::open(&window) {
        Ok(store) => Rc::new(store),
        Err(e) => {
            warn!("Language preference will not persist: {}", e);
            Rc::new(MemoryPreferenceStore::new())
        }
    };

    let site = Rc::new(Site::new(
        document.clone(),
        config,
        Rc::new(source),
        store,
        Rc::new(BrowserScheduler),
    ));

    let ready_state = document.document().ready_state();
    if ready_state == "loading" {
        let ready_site = Rc::clone(&site);
        let ready_document = document.clone();
        listen(document.document(), "DOMContentLoaded", move |_| {
            on_ready(&ready_site, &ready_document);
        })?;
    } else {
        on_ready(&site, &document);
    }

    if ready_state == "complete" {
        site.on_load();
    } else {
        let load_site = Rc::clone(&site);
        listen(&window, "load", move |_| load_site.on_load())?;
    }

    info!("Portfolio scripts attached");
    Ok(())
}

/// Module start function.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    run().map_err(|e| JsValue::from_str(&format!("{e:#}")))
}
