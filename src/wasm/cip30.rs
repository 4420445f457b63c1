//! CIP-30 connector over `window.cardano`.
//!
//! Every injected wallet registers an entry under `window.cardano` with a
//! `name`, an `icon` and an `enable()` that resolves to the wallet API once
//! the user approves.

use std::rc::Rc;

use async_trait::async_trait;
use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::log;
use crate::wallet::address::{display_address, raw_address};
use crate::wallet::{DataSignature, WalletConnector, WalletError, WalletHandle, WalletInfo, WalletResult};

const CARDANO_KEY: &str = "cardano";

fn cardano_root() -> Option<Object> {
    let window = web_sys::window()?;
    let root = Reflect::get(&window, &JsValue::from_str(CARDANO_KEY)).ok()?;
    root.dyn_into::<Object>().ok()
}

fn prop(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Text of a thrown value. CIP-30 errors carry `info`, JS errors `message`.
fn js_message(err: &JsValue) -> String {
    ["info", "message"]
        .iter()
        .filter_map(|key| prop(err, key).and_then(|v| v.as_string()))
        .find(|s| !s.is_empty())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

/// Call `target[method](...args)` and await the result if it is a promise.
async fn call(target: &JsValue, method: &str, args: &[JsValue]) -> WalletResult<JsValue> {
    let func = prop(target, method)
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or_else(|| WalletError::Api(format!("{method} is not a function")))?;

    let result = func
        .apply(target, &Array::from_iter(args.iter()))
        .map_err(|e| WalletError::Rejected(js_message(&e)))?;

    match result.dyn_into::<Promise>() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .map_err(|e| WalletError::Rejected(js_message(&e))),
        Err(value) => Ok(value),
    }
}

/// An entry is a wallet if it has a string `name` and a callable `enable`.
fn wallet_entry(entry: &JsValue) -> Option<WalletInfo> {
    prop(entry, "enable").filter(|v| v.is_function())?;
    let name = prop(entry, "name")?.as_string()?;
    let icon = prop(entry, "icon").and_then(|v| v.as_string()).unwrap_or_default();
    Some(WalletInfo::new(name, icon))
}

#[derive(Debug, Clone, Default)]
pub struct Cip30Connector;

impl Cip30Connector {
    pub fn new() -> Self {
        Self
    }

    /// Look up by injection key first, then by display name.
    fn find(&self, name: &str) -> Option<JsValue> {
        let root = cardano_root()?;
        if let Some(entry) = prop(&root, name).filter(|e| wallet_entry(e).is_some()) {
            return Some(entry);
        }
        Object::values(&root)
            .iter()
            .find(|entry| wallet_entry(entry).is_some_and(|info| info.name == name))
    }
}

#[async_trait(?Send)]
impl WalletConnector for Cip30Connector {
    fn list_wallets(&self) -> Vec<WalletInfo> {
        let Some(root) = cardano_root() else {
            return Vec::new();
        };
        Object::values(&root).iter().filter_map(|entry| wallet_entry(&entry)).collect()
    }

    async fn connect(&self, name: &str) -> WalletResult<Rc<dyn WalletHandle>> {
        let entry = self.find(name).ok_or_else(|| WalletError::NotFound(name.to_string()))?;
        log!("[walletgate] enabling {}", name);
        let api = call(&entry, "enable", &[]).await?;
        Ok(Rc::new(Cip30Wallet { name: name.to_string(), api }))
    }
}

/// An enabled CIP-30 API object.
pub struct Cip30Wallet {
    name: String,
    api: JsValue,
}

#[async_trait(?Send)]
impl WalletHandle for Cip30Wallet {
    fn name(&self) -> &str {
        &self.name
    }

    async fn used_addresses(&self) -> WalletResult<Vec<String>> {
        let value = call(&self.api, "getUsedAddresses", &[]).await?;
        let list = value
            .dyn_into::<Array>()
            .map_err(|_| WalletError::Api("getUsedAddresses: not an array".into()))?;
        Ok(list
            .iter()
            .filter_map(|v| v.as_string())
            .map(|raw| display_address(&raw))
            .collect())
    }

    async fn sign_data(&self, address: &str, hex_message: &str) -> WalletResult<DataSignature> {
        let args = [
            JsValue::from_str(&raw_address(address)),
            JsValue::from_str(hex_message),
        ];
        let value = call(&self.api, "signData", &args).await?;
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| WalletError::Api(format!("signData result: {e}")))
    }
}
