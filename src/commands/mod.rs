//! Data Loading
//!
//! Frontend bindings to the people API, organized by domain.

mod people;

pub use people::*;

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why the person list could not be loaded
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("no browser window available")]
    NoWindow,
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not read response body: {0}")]
    Body(String),
    #[error("response is not a person list: {0}")]
    Decode(String),
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
