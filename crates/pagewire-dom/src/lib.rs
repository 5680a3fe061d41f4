//! PageWire browser adapter.
//!
//! Binds the headless controllers in `pagewire-core` to the live DOM:
//! a [`PageView`](pagewire_core::PageView) over `web_sys::Element`,
//! guarded per-widget mounting, and the WASM entry point. The config
//! and query modules are platform-agnostic and carry native tests.

pub mod config;
pub mod query;

#[cfg(target_arch = "wasm32")]
pub mod mount;
#[cfg(target_arch = "wasm32")]
pub mod page;

pub use config::MountConfig;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Id of the optional JSON config override tag in the page.
pub const CONFIG_SCRIPT_ID: &str = "pagewire-config";

/// Initialize and mount the widget layer.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn run_wasm() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");

    log::info!("Starting PageWire (WASM)");

    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let document = match window.document() {
        Some(document) => document,
        None => return,
    };

    let config = match document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|element| element.text_content())
    {
        Some(json) => MountConfig::from_json(&json),
        None => MountConfig::default(),
    };

    mount::mount_all(&window, &document, &config);
    log::info!("PageWire widgets mounted");
}
