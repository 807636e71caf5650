//! Bridge between host `JsValue`s and the core's serde types.

use crate::payload::parse_payload;
use anyhow::anyhow;
use region_core::UvUpdate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;

pub fn from_js<T: DeserializeOwned>(value: &JsValue) -> anyhow::Result<T> {
    if value.is_null() || value.is_undefined() {
        return Err(anyhow!("missing host payload"));
    }
    let text = js_sys::JSON::stringify(value)
        .map_err(|e| anyhow!("stringify host value: {:?}", e))?
        .as_string();
    parse_payload(text)
}

pub fn to_js<T: Serialize>(value: &T) -> anyhow::Result<JsValue> {
    let text = serde_json::to_string(value)?;
    js_sys::JSON::parse(&text).map_err(|e| anyhow!("parse {text}: {:?}", e))
}

#[inline]
pub fn to_js_error(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

/// Delivers corner updates to the host's `notifyUV` callback.
#[derive(Clone)]
pub struct HostNotifier {
    notify_uv: js_sys::Function,
}

impl HostNotifier {
    pub fn new(notify_uv: js_sys::Function) -> Self {
        Self { notify_uv }
    }

    pub fn deliver(&self, updates: Vec<UvUpdate>) {
        for update in updates {
            let result = to_js(&update).and_then(|payload| {
                self.notify_uv
                    .call1(&JsValue::NULL, &payload)
                    .map(|_| ())
                    .map_err(|e| anyhow!("notifyUV threw: {:?}", e))
            });
            if let Err(e) = result {
                log::error!("[host] {:#}", e);
            }
        }
    }
}
