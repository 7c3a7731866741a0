use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::constants::{API_URL_META, DEFAULT_API_ORIGIN, JS_CONFIG_GLOBAL};

/// API route configuration, resolved once at start-up and handed to the
/// [`ApiClient`](super::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    /// Points at the local development backend. Only used when neither the
    /// page nor the build supplies an origin.
    fn default() -> Self {
        Self::from_url(DEFAULT_API_ORIGIN)
    }
}

impl ApiConfig {
    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self { base_url: url.trim_end_matches('/').to_string() }
    }

    /// Resolve the configuration, first match wins:
    /// 1. `<meta name="rackmaster:api-url">` injected by the server
    /// 2. `window.__RACKMASTER_CONFIG__.api_url`
    /// 3. the `API_BASE_URL` build-time environment variable
    /// 4. the development default
    pub fn load(document: &Document) -> Self {
        if let Some(url) = meta_content(document, API_URL_META).filter(|u| !u.is_empty()) {
            return Self::from_url(&url);
        }
        if let Some(url) = js_config("api_url").filter(|u| !u.is_empty()) {
            return Self::from_url(&url);
        }
        Self::from_build_env().unwrap_or_default()
    }

    /// Create a new ApiConfig from the API_BASE_URL environment variable
    pub fn from_build_env() -> Option<Self> {
        option_env!("API_BASE_URL").map(Self::from_url)
    }

    /// Get the base URL for all API calls
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get a full API URL for a given path
    pub fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }
}

fn meta_content(document: &Document, name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
        .map(|meta| meta.content())
}

fn js_config(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &JS_CONFIG_GLOBAL.into()).ok()?;
    if config.is_undefined() || config.is_null() {
        return None;
    }
    js_sys::Reflect::get(&config, &key.into()).ok()?.as_string()
}
