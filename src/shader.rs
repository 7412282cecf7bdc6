use std::future::Future;

use log::debug;

use crate::config::Config;
use crate::error::{Error, Result};

/// Vertex and fragment program text, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderProgramSource {
    pub vertex: String,
    pub fragment: String,
}

/// Fetches shader text by path.
pub trait ShaderLoader {
    fn load(&self, path: &str) -> impl Future<Output = Result<String>>;
}

/// Reject bodies that cannot be program text, such as an HTML error page.
pub fn check_source(path: &str, text: String) -> Result<String> {
    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return Err(Error::shader_load(path, "empty response"));
    }
    if trimmed.starts_with('<') {
        return Err(Error::shader_load(path, "response is markup, not shader source"));
    }
    Ok(text)
}

/// Load both stages concurrently; the first failure wins.
pub async fn load_sources<L: ShaderLoader>(
    loader: &L,
    config: &Config,
) -> Result<ShaderProgramSource> {
    let vertex = async {
        let text = loader.load(&config.vertex_path).await?;
        check_source(&config.vertex_path, text)
    };
    let fragment = async {
        let text = loader.load(&config.fragment_path).await?;
        check_source(&config.fragment_path, text)
    };
    let (vertex, fragment) = futures::future::try_join(vertex, fragment).await?;
    debug!(
        "loaded shaders: vertex {} bytes, fragment {} bytes",
        vertex.len(),
        fragment.len()
    );
    Ok(ShaderProgramSource { vertex, fragment })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_source_accepts_glsl() {
        let src = "void main() { gl_FragColor = vec4(1.0); }".to_string();
        assert_eq!(check_source("f.glsl", src.clone()), Ok(src));
    }

    #[test]
    fn check_source_rejects_empty_and_markup() {
        assert!(matches!(
            check_source("f.glsl", "  \n".into()),
            Err(Error::ShaderLoad { .. })
        ));
        assert!(matches!(
            check_source("f.glsl", "<!DOCTYPE html><p>Not Found</p>".into()),
            Err(Error::ShaderLoad { .. })
        ));
    }
}
