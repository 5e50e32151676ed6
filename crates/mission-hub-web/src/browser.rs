//! Browser implementations of the core's platform seams.
//!
//! Every probe returns an optional handle; nothing here throws. A missing
//! capability means the corresponding feature silently degrades (no
//! persistence, no analytics forwarding, 2D fallback).

use wasm_bindgen::{JsCast, JsValue};

use mission_hub::telemetry::TelemetryEvent;
use mission_hub::{Capabilities, Router, StorageFlag, TrackHook};

/// One-time environment probe for mode selection and persistence.
pub fn probe_capabilities() -> Capabilities {
    Capabilities {
        webgl: probe_webgl(),
        storage: local_storage().is_some(),
    }
}

fn probe_webgl() -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Ok(element) = document.create_element("canvas") else {
        return false;
    };
    let Ok(canvas) = element.dyn_into::<web_sys::HtmlCanvasElement>() else {
        return false;
    };
    matches!(canvas.get_context("webgl"), Ok(Some(_)))
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// `localStorage`-backed flag store. All failures degrade to "not set".
pub struct BrowserFlags {
    storage: web_sys::Storage,
}

impl BrowserFlags {
    pub fn probe() -> Option<Self> {
        Some(Self {
            storage: local_storage()?,
        })
    }
}

impl StorageFlag for BrowserFlags {
    fn is_set(&self, key: &str) -> bool {
        matches!(self.storage.get_item(key), Ok(Some(_)))
    }

    fn set(&self, key: &str) {
        let _ = self.storage.set_item(key, "1");
    }
}

/// Location-fragment router over the History API, so fragment changes do
/// not scroll or reload.
pub struct BrowserRouter;

impl Router for BrowserRouter {
    fn push_fragment(&self, fragment: &str) {
        push_url(&format!("#{fragment}"));
    }

    fn clear_fragment(&self) {
        push_url(" ");
    }
}

fn push_url(url: &str) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(url));
}

/// Discover the injected analytics function (`window.va`, Vercel
/// Analytics). Returns a forwarding hook when present and callable.
pub fn analytics_hook() -> Option<TrackHook> {
    let window = web_sys::window()?;
    let va = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("va")).ok()?;
    let func: js_sys::Function = va.dyn_into().ok()?;

    Some(Box::new(move |event: &TelemetryEvent| {
        let props = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &props,
            &JsValue::from_str("source"),
            &JsValue::from_str(&event.source),
        );
        if let Some(id) = &event.mission_id {
            let _ = js_sys::Reflect::set(
                &props,
                &JsValue::from_str("missionId"),
                &JsValue::from_str(id),
            );
        }
        // Analytics must never break the app: call failures are dropped.
        let _ = func.call2(
            &JsValue::NULL,
            &JsValue::from_str(event.name.as_str()),
            &props,
        );
    }))
}
