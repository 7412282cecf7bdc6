//! Mouse- and time-driven "liquid" shader effect for an HTML canvas.
//!
//! Everything outside `wasm` is platform-independent and tested on the host.

pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod input;
pub mod scene;
pub mod shader;
pub mod surface;
pub mod uniforms;

pub use app::{App, Backend};
pub use config::{Config, Variant};
pub use error::{Error, Result};
pub use input::{Effect, Event};
pub use scene::Scene;
pub use shader::{ShaderLoader, ShaderProgramSource};
pub use surface::{Bounds, SurfaceProvider, SurfaceSize};
pub use uniforms::UniformStore;

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
