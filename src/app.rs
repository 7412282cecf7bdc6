//! The render context: one owner for the scene, uniforms, clock and backend.

use log::{debug, error, info};

use crate::clock::FrameClock;
use crate::config::Config;
use crate::error::Result;
use crate::input::{update, Effect, Event};
use crate::scene::Scene;
use crate::shader::{load_sources, ShaderLoader};
use crate::surface::{SurfaceProvider, SurfaceSize};
use crate::uniforms::UniformStore;

/// GPU side of the pipeline.
pub trait Backend {
    /// Compile the material and upload the quad. Called once.
    fn install(&mut self, scene: &Scene) -> Result<()>;
    fn resize(&mut self, size: SurfaceSize);
    fn draw(&mut self, scene: &Scene, uniforms: &UniformStore) -> Result<()>;
}

pub struct App<B> {
    scene: Scene,
    uniforms: UniformStore,
    clock: FrameClock,
    backend: B,
}

impl<B: Backend> App<B> {
    /// Measure the surface, fetch both shaders, then assemble and install the
    /// scene. Any failure returns before the backend sees a scene.
    pub async fn init<S, L>(config: &Config, surface: &S, loader: &L, mut backend: B) -> Result<Self>
    where
        S: SurfaceProvider,
        L: ShaderLoader,
    {
        let size = surface.size()?;
        info!("surface {}x{}", size.width, size.height);
        backend.resize(size);

        let source = load_sources(loader, config).await?;
        let scene = Scene::assemble(size, source);
        backend.install(&scene)?;
        info!(
            "scene assembled: aspect {:.3}, quad {:.3}x{:.3}",
            size.aspect(),
            scene.quad.width,
            scene.quad.height
        );

        Ok(Self {
            scene,
            uniforms: UniformStore::new(size.as_vec2()),
            clock: FrameClock::new(),
            backend,
        })
    }

    pub fn dispatch(&mut self, event: Event) {
        match update(&mut self.uniforms, &mut self.clock, &event) {
            Effect::None => {}
            Effect::ResizeBuffer(size) => {
                debug!("resize to {}x{}", size.width, size.height);
                self.backend.resize(size);
            }
            Effect::Draw => {
                if let Err(e) = self.backend.draw(&self.scene, &self.uniforms) {
                    error!("draw failed: {e}");
                }
            }
        }
    }

    pub fn uniforms(&self) -> &UniformStore {
        &self.uniforms
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}
