use game_core::ConfigError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Fatal problems while bringing the game up in the page
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("no global `window` (not running in a browser?)")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("no element with id `{0}`; the page needs a <canvas id=\"{0}\">")]
    MissingCanvas(String),

    #[error("element `{0}` is not a <canvas>")]
    NotACanvas(String),

    #[error("canvas `{0}` has no 2d rendering context")]
    NoContext(String),

    #[error("canvas size is not playable: {0}")]
    Config(#[from] ConfigError),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for StartupError {
    fn from(value: JsValue) -> Self {
        StartupError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}
