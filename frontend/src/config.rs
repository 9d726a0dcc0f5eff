use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Runtime configuration served next to the static bundle as `./config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

fn global_base_url(global_name: &str) -> Option<String> {
    // Expect optional global object: window.__LEAVEDESK_ENV / window.__LEAVEDESK_CONFIG
    // with either key spelling: { API_BASE_URL: "..." } or { api_base_url: "..." }.
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &global_name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    ["api_base_url", "API_BASE_URL"].iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .and_then(|value| value.as_string())
    })
}

fn snapshot_from_globals() -> Option<String> {
    // env.js takes precedence over a previously cached config.json snapshot.
    global_base_url("__LEAVEDESK_ENV").or_else(|| global_base_url("__LEAVEDESK_CONFIG"))
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

fn write_window_config(cfg: &RuntimeConfig) {
    let url = match &cfg.api_base_url {
        Some(url) => url,
        None => return,
    };
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&window, &"__LEAVEDESK_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
