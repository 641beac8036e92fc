//! WASM front end for the PDF tools upload page
//!
//! The page posts ordinary HTML forms to the server, which does the PDF
//! work. This crate owns what happens in the browser before that: file
//! selection through the picker or drag-and-drop, the selection summaries,
//! tab switching and the pre-submit check.
//!
//! ## Architecture
//!
//! - Selection state and reconciliation live in `pdftools-core`
//! - `dom::DomWidget` is the `web-sys` surface the registry drives
//! - `app::UploadApp` wires listeners and exposes the JavaScript API
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { initPage, formatBytes } from './pkg/pdftools_wasm.js';
//!
//! await init();
//!
//! const app = initPage();
//! window.validateForm = (key) => app.validateForm(key);
//!
//! formatBytes(1536); // "1.5 KB"
//! ```

pub mod app;
pub mod dom;
pub mod tabs;

use wasm_bindgen::prelude::*;

// Re-export main types for JavaScript
pub use app::UploadApp;
pub use dom::{DomWidget, PickedFile};

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Get the library version
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Format bytes as human-readable string, e.g. `1536` -> `"1.5 KB"`
#[wasm_bindgen(js_name = formatBytes)]
pub fn format_bytes(bytes: f64, decimals: Option<i32>) -> String {
    pdftools_core::format_bytes_with(bytes, decimals.unwrap_or(pdftools_core::DEFAULT_DECIMALS))
}

/// Wire the whole page: tabs, split-mode toggle and upload widgets
#[wasm_bindgen(js_name = initPage)]
pub fn init_page() -> Result<UploadApp, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document object available"))?;
    let config = pdftools_core::UploadConfig::default();

    tabs::setup_tabs(&document)?;
    tabs::setup_split_mode_toggle(&document, &config.fields)?;
    UploadApp::mount_config(config)
}
