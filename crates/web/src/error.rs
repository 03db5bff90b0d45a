// =============================================================================
// USDZ Web - Error Types
// =============================================================================
// Table of Contents:
// 1. DOM Errors
// 2. Startup Errors
// 3. Upload Errors
// =============================================================================

use thiserror::Error;
use usdz_material_form::ConfigError;
use wasm_bindgen::JsValue;

// -----------------------------------------------------------------------------
// 1. DOM Errors
// -----------------------------------------------------------------------------

/// Failures talking to the document.
#[derive(Error, Debug, Clone)]
pub enum DomError {
    #[error("no element with id `{0}`")]
    MissingElement(String),

    #[error("no form field named `{0}`")]
    MissingField(String),

    #[error("template has no control with class `{0}`")]
    MissingControl(String),

    #[error("element `{0}` is not a {1}")]
    WrongType(String, &'static str),

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(js_error_text(&value))
    }
}

/// Best-effort text for a thrown JS value.
pub fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

// -----------------------------------------------------------------------------
// 2. Startup Errors
// -----------------------------------------------------------------------------

/// Reasons the form builder stays disabled on this page.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("template did not declare necessary constants: {0}")]
    Config(#[from] ConfigError),

    #[error("page is missing the form builder's elements: {0}")]
    Dom(#[from] DomError),
}

// -----------------------------------------------------------------------------
// 3. Upload Errors
// -----------------------------------------------------------------------------

/// Best-effort upload failures. Logged, never shown to the user.
#[derive(Error, Debug, Clone)]
pub enum UploadError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(String),

    #[error("could not build request body: {0}")]
    Body(String),
}
