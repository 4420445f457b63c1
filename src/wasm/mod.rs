//! WASM module: the gate running in the browser
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        WalletGateApp (JS API)           │
//! │  start(backendUrl?), phase, sessionId   │
//! └─────────────────┬───────────────────────┘
//!                   │ Action
//! ┌─────────────────▼───────────────────────┐
//! │     Controller (state machine)          │
//! └───────┬─────────────────┬───────────────┘
//!         │                 │
//! ┌───────▼───────┐ ┌───────▼───────────────┐
//! │ Cip30Connector│ │ ReqwestClient (fetch) │
//! │ window.cardano│ │ terms + relay         │
//! └───────────────┘ └───────────────────────┘
//!         View ──▶ DomRenderer
//! ```

mod app;
mod cip30;
mod dom;

pub use app::WalletGateApp;
pub use cip30::{Cip30Connector, Cip30Wallet};
pub use dom::DomRenderer;

use wasm_bindgen::prelude::*;

/// Initialize WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Log to browser console
pub fn console_log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

macro_rules! log {
    ($($t:tt)*) => {
        crate::wasm::console_log(&format!($($t)*))
    }
}

pub(crate) use log;
