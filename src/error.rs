use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("surface element #{0} not found")]
    MissingSurface(String),

    #[error("surface element #{0} has no area")]
    EmptySurface(String),

    #[error("failed to load shader {path}: {reason}")]
    ShaderLoad { path: String, reason: String },

    #[error("failed to compile {stage} shader: {log}")]
    Compile { stage: &'static str, log: String },

    #[error("failed to link shader program: {0}")]
    Link(String),

    #[error("browser call failed: {0}")]
    Platform(String),
}

impl Error {
    pub fn shader_load(path: &str, reason: impl Into<String>) -> Self {
        Error::ShaderLoad {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        let msg = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Error::Platform(msg)
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
