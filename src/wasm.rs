// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the page scripts.
//!
//! Provides WASM-accessible types:
//! - `GleanSearch`: the search modal controller
//! - `CopyFeedback`: the state of one code-block copy button
//! - `ThemeMenu`: the theme switcher, persisted in `localStorage`
//! - `TocSidebar`: the table-of-contents toggle, persisted in `localStorage`
//! - `HighlightRetryTimer`: the one-shot re-run of `Prism.highlightAll`
//!
//! The page keeps the DOM work (listeners, `fetch`, `innerHTML`) and asks
//! these objects what to do. Every event method returns the command list as
//! plain objects, e.g. `[{type: "fetchIndex", path: "search-index.json",
//! attempt: 1}, {type: "render"}]`.

use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::controller::{Command, Event, KeyPress, KeyScope, SearchController};
use crate::error::Error;
use crate::loader::{FetchTicket, IndexLoader};
use crate::render::{modal_display, render_results};
use crate::types::{SearchOptions, DEFAULT_INDEX_PATH};
use crate::ui::sidebar::HIDDEN_CLASS;
use crate::ui::{
    CopyButton, HighlightRetry, RevertTimer, SidebarToggle, Storage, SyntaxHighlighter,
    ThemeSwitcher, COPY_FEEDBACK,
};

/// Options passed from JavaScript. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WidgetConfig {
    index_path: Option<String>,
    #[serde(flatten)]
    search: SearchOptions,
}

fn js_error(message: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&message.to_string()).into()
}

fn commands_to_js(commands: &[Command]) -> Result<JsValue, JsValue> {
    to_value(commands).map_err(js_error)
}

/// WASM-accessible search modal.
#[wasm_bindgen]
pub struct GleanSearch {
    controller: SearchController,
}

#[wasm_bindgen]
impl GleanSearch {
    /// Create the controller. `options` may set `indexPath`, `minQueryLen`,
    /// `contextBefore`, `contextAfter` and `fallbackLen`.
    #[wasm_bindgen(constructor)]
    pub fn new(options: Option<JsValue>) -> Result<GleanSearch, JsValue> {
        let config: WidgetConfig = match options {
            Some(opts) if !opts.is_undefined() && !opts.is_null() => {
                from_value(opts).map_err(js_error)?
            }
            _ => WidgetConfig::default(),
        };
        let path = config
            .index_path
            .unwrap_or_else(|| DEFAULT_INDEX_PATH.to_string());
        Ok(GleanSearch {
            controller: SearchController::new(IndexLoader::new(path), config.search),
        })
    }

    #[wasm_bindgen]
    pub fn open(&mut self) -> Result<JsValue, JsValue> {
        commands_to_js(&self.controller.dispatch(Event::Open))
    }

    #[wasm_bindgen]
    pub fn close(&mut self) -> Result<JsValue, JsValue> {
        commands_to_js(&self.controller.dispatch(Event::Close))
    }

    /// The input's value changed.
    #[wasm_bindgen]
    pub fn input(&mut self, query: String) -> Result<JsValue, JsValue> {
        commands_to_js(&self.controller.dispatch(Event::Input(query)))
    }

    /// A keydown heard on the document (`scope = "document"`) or on the
    /// search input (`scope = "input"`). `event` is the `KeyboardEvent`.
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, scope: &str, event: JsValue) -> Result<JsValue, JsValue> {
        let scope = match scope {
            "document" => KeyScope::Document,
            "input" => KeyScope::Input,
            other => return Err(js_error(format!("Unknown key scope: {}", other))),
        };
        let key = KeyPress {
            key: js_sys::Reflect::get(&event, &JsValue::from_str("key"))?
                .as_string()
                .unwrap_or_default(),
            ctrl_key: js_sys::Reflect::get(&event, &JsValue::from_str("ctrlKey"))?.is_truthy(),
            meta_key: js_sys::Reflect::get(&event, &JsValue::from_str("metaKey"))?.is_truthy(),
        };
        commands_to_js(&self.controller.handle_key(scope, &key))
    }

    /// A result row was clicked.
    #[wasm_bindgen]
    pub fn activate(&mut self, index: usize) -> Result<JsValue, JsValue> {
        commands_to_js(&self.controller.dispatch(Event::Activate(index)))
    }

    /// The `fetchIndex` command resolved with the response body.
    #[wasm_bindgen(js_name = indexLoaded)]
    pub fn index_loaded(&mut self, path: String, attempt: u32, body: &[u8]) -> Result<JsValue, JsValue> {
        let ticket = FetchTicket::from((path, attempt));
        commands_to_js(&self.controller.index_loaded(&ticket, Ok(body.to_vec())))
    }

    /// The `fetchIndex` command failed (network error, non-2xx status).
    #[wasm_bindgen(js_name = indexFailed)]
    pub fn index_failed(&mut self, path: String, attempt: u32, reason: String) -> Result<JsValue, JsValue> {
        let ticket = FetchTicket::from((path.clone(), attempt));
        let error = Error::Fetch { path, reason };
        commands_to_js(&self.controller.index_loaded(&ticket, Err(error)))
    }

    /// New `innerHTML` for the results container.
    #[wasm_bindgen(js_name = resultsHtml)]
    pub fn results_html(&self) -> String {
        render_results(self.controller.state())
    }

    /// New `style.display` for the modal.
    #[wasm_bindgen(js_name = modalDisplay)]
    pub fn modal_display(&self) -> String {
        modal_display(self.controller.state()).to_string()
    }

    #[wasm_bindgen(js_name = selectedIndex)]
    pub fn selected_index(&self) -> i32 {
        self.controller.selected_index() as i32
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }
}

/// Timer request handed to JavaScript.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RevertRequest {
    generation: u32,
    delay_ms: u32,
}

impl From<RevertTimer> for RevertRequest {
    fn from(timer: RevertTimer) -> Self {
        RevertRequest {
            generation: timer.generation,
            delay_ms: timer.delay.as_millis() as u32,
        }
    }
}

/// WASM-accessible copy button state.
#[wasm_bindgen]
#[derive(Default)]
pub struct CopyFeedback {
    button: CopyButton,
}

#[wasm_bindgen]
impl CopyFeedback {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CopyFeedback {
        CopyFeedback::default()
    }

    /// `navigator.clipboard.writeText` resolved. Returns `{generation, delayMs}`.
    #[wasm_bindgen]
    pub fn succeeded(&mut self) -> Result<JsValue, JsValue> {
        to_value(&RevertRequest::from(self.button.record(Ok(())))).map_err(js_error)
    }

    /// `navigator.clipboard.writeText` rejected.
    #[wasm_bindgen]
    pub fn failed(&mut self, reason: String) -> Result<JsValue, JsValue> {
        to_value(&RevertRequest::from(self.button.record(Err(Error::Clipboard(reason))))).map_err(js_error)
    }

    /// Timer fired. Returns whether the button went back to idle.
    #[wasm_bindgen]
    pub fn revert(&mut self, generation: u32) -> bool {
        self.button.revert(RevertTimer {
            generation,
            delay: COPY_FEEDBACK,
        })
    }

    /// Markup for the button in its current state.
    #[wasm_bindgen]
    pub fn html(&self) -> String {
        self.button.markup().into_string()
    }
}

/// Message of a thrown JS value, for logs and `Error` payloads.
fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Look up `target[name]` and require it to be a function.
fn js_method(target: &JsValue, name: &str) -> Result<js_sys::Function, JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(name))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| js_error(format!("{} is not a function", name)))
}

/// `window.localStorage`. Reading the property itself throws when storage
/// is disabled, so every call resolves it afresh.
struct LocalStorage;

impl LocalStorage {
    fn call(method: &str, args: &js_sys::Array) -> Result<JsValue, JsValue> {
        let storage = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("localStorage"))?;
        if storage.is_undefined() || storage.is_null() {
            return Err(js_error("localStorage is unavailable"));
        }
        js_method(&storage, method)?.apply(&storage, args)
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> crate::error::Result<Option<String>> {
        Self::call("getItem", &js_sys::Array::of1(&JsValue::from_str(key)))
            .map(|value| value.as_string())
            .map_err(|e| Error::Storage(js_message(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> crate::error::Result<()> {
        let args = js_sys::Array::of2(&JsValue::from_str(key), &JsValue::from_str(value));
        Self::call("setItem", &args)
            .map(|_| ())
            .map_err(|e| Error::Storage(js_message(&e)))
    }
}

/// The global `Prism` object, if the script loaded.
struct PrismHighlighter;

impl PrismHighlighter {
    fn prism() -> Option<JsValue> {
        js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("Prism"))
            .ok()
            .filter(|prism| prism.is_object())
    }
}

impl SyntaxHighlighter for PrismHighlighter {
    fn is_available(&self) -> bool {
        Self::prism().is_some()
    }

    fn highlight_all(&mut self) {
        let Some(prism) = Self::prism() else {
            return;
        };
        let outcome = js_method(&prism, "highlightAll").and_then(|f| f.call0(&prism));
        if let Err(e) = outcome {
            tracing::warn!(error = %js_message(&e), "Prism.highlightAll failed");
        }
    }
}

/// WASM-accessible theme switcher.
#[wasm_bindgen]
pub struct ThemeMenu {
    switcher: ThemeSwitcher,
}

impl ThemeMenu {
    fn init_with(&mut self, storage: &mut impl Storage) -> String {
        self.switcher.init(storage).to_string()
    }

    fn select_with(&mut self, storage: &mut impl Storage, theme: &str) -> String {
        self.switcher.select(storage, theme).to_string()
    }
}

#[wasm_bindgen]
impl ThemeMenu {
    /// `page_default` is the theme the page was rendered with, if any.
    #[wasm_bindgen(constructor)]
    pub fn new(page_default: Option<String>) -> ThemeMenu {
        ThemeMenu {
            switcher: ThemeSwitcher::new(page_default.as_deref()),
        }
    }

    /// Restore the remembered theme. Returns the value for `data-theme`.
    #[wasm_bindgen]
    pub fn init(&mut self) -> String {
        self.init_with(&mut LocalStorage)
    }

    /// A theme option was clicked. Returns the value for `data-theme`.
    #[wasm_bindgen]
    pub fn select(&mut self, theme: &str) -> String {
        self.select_with(&mut LocalStorage, theme)
    }

    /// The switcher button was clicked. Returns whether the menu is open.
    #[wasm_bindgen(js_name = toggleMenu)]
    pub fn toggle_menu(&mut self) -> bool {
        self.switcher.toggle_menu()
    }

    /// Any click on the document; `inside` when it landed in the switcher.
    #[wasm_bindgen(js_name = documentClick)]
    pub fn document_click(&mut self, inside: bool) {
        self.switcher.on_document_click(inside);
    }

    #[wasm_bindgen(js_name = menuOpen)]
    pub fn menu_open(&self) -> bool {
        self.switcher.menu_open()
    }

    /// Whether the option for `theme` gets the `active` class.
    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self, theme: &str) -> bool {
        self.switcher.is_active(theme)
    }

    #[wasm_bindgen]
    pub fn current(&self) -> String {
        self.switcher.current().to_string()
    }
}

/// WASM-accessible table-of-contents toggle.
#[wasm_bindgen]
pub struct TocSidebar {
    toggle: SidebarToggle,
}

impl TocSidebar {
    fn init_with(storage: &impl Storage) -> TocSidebar {
        TocSidebar {
            toggle: SidebarToggle::init(storage),
        }
    }

    fn toggle_with(&mut self, storage: &mut impl Storage) -> bool {
        self.toggle.toggle(storage)
    }
}

#[wasm_bindgen]
impl TocSidebar {
    /// Restore the remembered visibility.
    #[wasm_bindgen(constructor)]
    pub fn new() -> TocSidebar {
        TocSidebar::init_with(&LocalStorage)
    }

    #[wasm_bindgen(js_name = isHidden)]
    pub fn is_hidden(&self) -> bool {
        self.toggle.is_hidden()
    }

    /// The toggle button was clicked. Returns the new hidden flag.
    #[wasm_bindgen]
    pub fn toggle(&mut self) -> bool {
        self.toggle_with(&mut LocalStorage)
    }

    /// Class to set on `<body>` while hidden.
    #[wasm_bindgen(js_name = hiddenClass)]
    pub fn hidden_class() -> String {
        HIDDEN_CLASS.to_string()
    }
}

impl Default for TocSidebar {
    fn default() -> Self {
        Self::new()
    }
}

/// WASM-accessible highlighter retry.
#[wasm_bindgen]
#[derive(Default)]
pub struct HighlightRetryTimer {
    retry: HighlightRetry,
}

impl HighlightRetryTimer {
    fn fire_with(&mut self, highlighter: &mut impl SyntaxHighlighter) -> bool {
        self.retry.fire(highlighter)
    }
}

#[wasm_bindgen]
impl HighlightRetryTimer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> HighlightRetryTimer {
        HighlightRetryTimer::default()
    }

    /// The page's `load` event. Returns the delay in ms the first time only.
    #[wasm_bindgen(js_name = onPageLoad)]
    pub fn on_page_load(&mut self) -> Option<u32> {
        self.retry
            .on_page_load()
            .map(|delay| delay.as_millis() as u32)
    }

    /// Timer elapsed. Returns whether `Prism.highlightAll` ran.
    #[wasm_bindgen]
    pub fn fire(&mut self) -> bool {
        self.fire_with(&mut PrismHighlighter)
    }
}
