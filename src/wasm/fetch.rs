use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

use crate::error::{Error, Result};
use crate::shader::ShaderLoader;

pub struct FetchLoader {
    window: Window,
}

impl FetchLoader {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

fn reason(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl ShaderLoader for FetchLoader {
    async fn load(&self, path: &str) -> Result<String> {
        debug!("fetching {path}");
        let response = JsFuture::from(self.window.fetch_with_str(path))
            .await
            .map_err(|e| Error::shader_load(path, reason(e)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|e| Error::shader_load(path, reason(e)))?;
        if !response.ok() {
            return Err(Error::shader_load(
                path,
                format!("HTTP {} {}", response.status(), response.status_text()),
            ));
        }
        let text = response
            .text()
            .map_err(|e| Error::shader_load(path, reason(e)))?;
        let text = JsFuture::from(text)
            .await
            .map_err(|e| Error::shader_load(path, reason(e)))?;
        text.as_string()
            .ok_or_else(|| Error::shader_load(path, "body is not text"))
    }
}
