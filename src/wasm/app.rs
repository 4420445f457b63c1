//! WalletGateApp: JS entry point wiring the controller to the page.

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use super::cip30::Cip30Connector;
use super::dom::DomRenderer;
use super::log;
use crate::config::GateConfig;
use crate::controller::Controller;
use crate::core::{resolve_session_id, Action};
use crate::http::ReqwestClient;

type GateController = Controller<Cip30Connector, ReqwestClient, Rc<DomRenderer>>;

fn spawn_dispatch(controller: &Rc<GateController>, action: Action) {
    let controller = controller.clone();
    wasm_bindgen_futures::spawn_local(async move {
        controller.dispatch(action).await;
    });
}

#[wasm_bindgen]
pub struct WalletGateApp {
    controller: Rc<GateController>,
}

#[wasm_bindgen]
impl WalletGateApp {
    /// Resolve the session from `location.search`, render, and bind the
    /// wallet buttons and the authorize button. `backendUrl` overrides the
    /// compiled-in relay endpoint.
    #[wasm_bindgen]
    pub fn start(backend_url: Option<String>) -> Result<WalletGateApp, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
        let session = resolve_session_id(&window.location().search()?);

        let mut config = GateConfig::default();
        if let Some(url) = backend_url {
            config = config.with_backend_url(url);
        }
        config.validate().map_err(|e| JsValue::from_str(&e.to_string()))?;

        let renderer = Rc::new(DomRenderer::from_document(&document)?);
        let controller = Rc::new(Controller::new(
            Cip30Connector::new(),
            ReqwestClient::new(),
            renderer.clone(),
            config,
            session,
        ));

        if let Some(list) = controller.initialize() {
            log!("[walletgate] {} wallet(s) available", list.entries().len());
            let dispatcher = controller.clone();
            let on_action: Rc<dyn Fn(Action)> = Rc::new(move |action| spawn_dispatch(&dispatcher, action));
            renderer.render_wallet_list(&list, on_action.clone())?;
            renderer.bind_authorize(on_action);
        } else {
            log!("[walletgate] no session_id, halting");
        }

        Ok(Self { controller })
    }

    /// Current state-machine phase, e.g. `"connected"`.
    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> String {
        self.controller.state().phase.as_str().to_string()
    }

    #[wasm_bindgen(getter, js_name = "sessionId")]
    pub fn session_id(&self) -> Option<String> {
        self.controller.state().session_id.map(|id| id.to_string())
    }

    #[wasm_bindgen(getter, js_name = "backendUrl")]
    pub fn backend_url(&self) -> String {
        self.controller.config().backend_url.clone()
    }
}
