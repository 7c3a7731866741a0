use wasm_bindgen::JsValue;

use crate::network::ApiError;

/// Page-level failures that end an initializer early.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl AppError {
    /// Backend message when there is one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Api(err) => err.user_message(fallback),
            _ => fallback.to_string(),
        }
    }
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
