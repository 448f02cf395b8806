use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::carousel::CarouselError;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("{field} must be between 0 and 1, got {value}")]
    InvalidSetting { field: &'static str, value: f64 },
    #[error(transparent)]
    Carousel(#[from] CarouselError),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(format!("{:?}", value))
    }
}
