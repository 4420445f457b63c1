//! Walletgate: connect a browser wallet, sign the terms, relay the credential.
//!
//! # Architecture
//!
//! ```text
//! page URL ──▶ resolve_session_id ──▶ Controller
//!                                        │
//!                 Action::Connect(name)  │  Action::Authorize
//!                                        ▼
//!                            transition(state, event)   (pure)
//!                                        │
//!                    ┌───────────────────┼───────────────────┐
//!                    ▼                   ▼                   ▼
//!             WalletConnector       HttpClient         View::project
//!             WalletHandle          terms + relay      ──▶ Renderer
//! ```
//!
//! # Flow
//!
//! | Step | Collaborator | Failure message |
//! |------|--------------|-----------------|
//! | connect | `WalletConnector::connect` | `Wallet connection was cancelled or failed.` |
//! | fetch terms | `HttpClient::get_text` | `Could not fetch Terms & Conditions.` |
//! | pick address | `WalletHandle::used_addresses` (first) | `No addresses found in the wallet.` |
//! | sign | `WalletHandle::sign_data` | wallet's own message |
//! | relay | `HttpClient::post_json` | `Backend error: <status> - <body>` |
//!
//! # Features
//!
//! - `native` - CLI, env configuration, tracing subscriber
//! - `wasm` - browser entry point, CIP-30 connector, DOM renderer

// =============================================================================
// Shared modules (compile everywhere)
// =============================================================================
pub mod config;
pub mod controller;
pub mod core;
pub mod http;
pub mod wallet;

// =============================================================================
// Native-only modules
// =============================================================================
#[cfg(feature = "native")]
pub mod logging;

// =============================================================================
// WASM-only modules (browser, wasm-bindgen)
// =============================================================================
#[cfg(feature = "wasm")]
pub mod wasm;

// =============================================================================
// Re-exports
// =============================================================================
pub use config::{ConfigError, GateConfig};
pub use controller::{AuthorizeError, Controller, Renderer};
pub use crate::core::{resolve_session_id, Action, AppState, AuthorizePayload, Event, Panel, Phase, SessionId, View, WalletListView};
pub use http::{HttpClient, HttpError, HttpResponse, ReqwestClient};
pub use wallet::{DataSignature, WalletConnector, WalletError, WalletHandle, WalletInfo};

#[cfg(feature = "wasm")]
pub use wasm::{Cip30Connector, DomRenderer, WalletGateApp};
