//! Startup configuration, read from `data-*` attributes on the container.

use log::{warn, Level};

pub const CONTAINER_ID: &str = "webgl-container";
pub const WRAPPER_ID: &str = "liquid-button-wrapper";
pub const VERTEX_PATH: &str = "./shaders/vertex.glsl";
pub const FRAGMENT_PATH: &str = "./shaders/fragment.glsl";

/// Which element the effect is sized to and tracks the pointer over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Canvas fills the viewport; pointer and resize are tracked on the window.
    FullWindow,
    /// Canvas is sized to the button wrapper; pointer is tracked on the wrapper only.
    Widget,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub variant: Variant,
    pub container_id: String,
    pub wrapper_id: String,
    pub vertex_path: String,
    pub fragment_path: String,
    pub track_resize: bool,
    pub log_level: Level,
}

impl Config {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            container_id: CONTAINER_ID.to_string(),
            wrapper_id: WRAPPER_ID.to_string(),
            vertex_path: VERTEX_PATH.to_string(),
            fragment_path: FRAGMENT_PATH.to_string(),
            track_resize: variant == Variant::FullWindow,
            log_level: Level::Info,
        }
    }

    /// Build a config from attribute lookups such as `data-variant`.
    ///
    /// Unknown values are logged and replaced by the default.
    pub fn from_attributes<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let variant = match lookup("data-variant").as_deref() {
            None | Some("full-window") => Variant::FullWindow,
            Some("widget") => Variant::Widget,
            Some(other) => {
                warn!("unknown data-variant {other:?}, using full-window");
                Variant::FullWindow
            }
        };

        let mut config = Config::new(variant);
        if let Some(path) = lookup("data-vertex") {
            config.vertex_path = path;
        }
        if let Some(path) = lookup("data-fragment") {
            config.fragment_path = path;
        }
        if let Some(id) = lookup("data-wrapper") {
            config.wrapper_id = id;
        }
        match lookup("data-track-resize").as_deref() {
            None => {}
            Some("true") => config.track_resize = true,
            Some("false") => config.track_resize = false,
            Some(other) => warn!("unknown data-track-resize {other:?}, keeping default"),
        }
        if let Some(level) = lookup("data-log-level") {
            match level.parse::<Level>() {
                Ok(level) => config.log_level = level,
                Err(_) => warn!("unknown data-log-level {level:?}, using info"),
            }
        }
        config
    }

    /// Element whose size drives the canvas and whose bounds normalize the pointer.
    pub fn surface_id(&self) -> Option<&str> {
        match self.variant {
            Variant::FullWindow => None,
            Variant::Widget => Some(&self.wrapper_id),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(Variant::FullWindow)
    }
}
