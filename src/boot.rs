use js_sys::Reflect;
use wasm_bindgen::JsValue;

use parapara_core::AlbumConfig;

const CONFIG_GLOBAL: &str = "PARAPARA_CONFIG";

/// Album configuration for this mount. The host page may install a JSON
/// string on `window.PARAPARA_CONFIG` to override the defaults (page count,
/// asset paths, surface geometry, behavior flags); anything missing or
/// invalid falls back to the built-ins.
pub(crate) fn load_album_config() -> AlbumConfig {
    let config = read_host_config().unwrap_or_default();
    match config.validate() {
        Ok(()) => config,
        Err(err) => {
            gloo::console::log!("config: invalid override", err.to_string());
            AlbumConfig::default()
        }
    }
}

fn read_host_config() -> Option<AlbumConfig> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let raw = value.as_string()?;
    match serde_json::from_str(&raw) {
        Ok(config) => Some(config),
        Err(err) => {
            gloo::console::log!("config: override parse failed", err.to_string());
            None
        }
    }
}
