//! Runtime configuration injected by `/config.js`

use saro::config::BUILD_TIME_API_URL;
use saro::{ApiBase, ApiClient};
use wasm_bindgen::JsValue;

use super::{Client, GlooTransport};

/// `window.SARO_CONFIG.apiUrl`, if the deployment set one
pub fn runtime_api_url() -> Option<String> {
    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &JsValue::from_str("SARO_CONFIG")).ok()?;
    if config.is_undefined() || config.is_null() {
        return None;
    }
    js_sys::Reflect::get(&config, &JsValue::from_str("apiUrl"))
        .ok()?
        .as_string()
}

/// Resolve the base URL once and build the shared client
pub fn build_client() -> Client {
    let runtime = runtime_api_url();
    let base = ApiBase::resolve(runtime.as_deref(), BUILD_TIME_API_URL);
    if !base.is_configured() {
        web_sys::console::warn_1(&"SARO_API_URL is not set; API calls will fail".into());
    }
    ApiClient::new(base, GlooTransport)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn set_config(value: &JsValue) {
        let window = web_sys::window().unwrap();
        js_sys::Reflect::set(&window, &JsValue::from_str("SARO_CONFIG"), value).unwrap();
    }

    #[wasm_bindgen_test]
    fn reads_api_url_from_window_config() {
        let config = js_sys::Object::new();
        js_sys::Reflect::set(&config, &"apiUrl".into(), &"https://api.example.com".into()).unwrap();
        set_config(&config);
        assert_eq!(runtime_api_url().as_deref(), Some("https://api.example.com"));
    }

    #[wasm_bindgen_test]
    fn missing_config_is_unset() {
        set_config(&JsValue::UNDEFINED);
        assert_eq!(runtime_api_url(), None);
    }

    #[wasm_bindgen_test]
    fn banner_rendered_without_base_url() {
        use leptos::*;
        use wasm_bindgen::JsCast;

        set_config(&JsValue::UNDEFINED);
        let document = web_sys::window().unwrap().document().unwrap();
        let root: web_sys::HtmlElement = document.create_element("div").unwrap().unchecked_into();
        document.body().unwrap().append_child(&root).unwrap();

        mount_to(root.clone(), || view! { <crate::app::App /> });

        let unset = !ApiBase::resolve(None, BUILD_TIME_API_URL).is_configured();
        assert_eq!(root.inner_html().contains("Configuration required"), unset);
    }
}
