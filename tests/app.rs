use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::executor::block_on;
use glam::Vec2;
use liquid_wasm::{
    App, Backend, Bounds, Config, Error, Event, Result, Scene, ShaderLoader, SurfaceProvider,
    SurfaceSize, UniformStore, Variant,
};

const VERTEX: &str = "void main() { gl_Position = vec4(position, 1.0); }";
const FRAGMENT: &str = "void main() { gl_FragColor = vec4(u_mouse, 0.0, 1.0); }";

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Install,
    Resize(SurfaceSize),
    Draw { time: f32, mouse: Vec2 },
}

#[derive(Default, Clone)]
struct Recorder(Rc<RefCell<Vec<Call>>>);

impl Recorder {
    fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }
}

impl Backend for Recorder {
    fn install(&mut self, _scene: &Scene) -> Result<()> {
        self.0.borrow_mut().push(Call::Install);
        Ok(())
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.0.borrow_mut().push(Call::Resize(size));
    }

    fn draw(&mut self, _scene: &Scene, uniforms: &UniformStore) -> Result<()> {
        self.0.borrow_mut().push(Call::Draw {
            time: uniforms.time(),
            mouse: uniforms.mouse(),
        });
        Ok(())
    }
}

struct FixedSurface(Option<SurfaceSize>);

impl SurfaceProvider for FixedSurface {
    fn size(&self) -> Result<SurfaceSize> {
        self.0
            .ok_or_else(|| Error::MissingSurface("liquid-button-wrapper".into()))
    }

    fn bounds(&self) -> Result<Bounds> {
        Ok(Bounds::viewport(self.size()?))
    }
}

struct MapLoader(HashMap<&'static str, Result<String>>);

impl MapLoader {
    fn ok() -> Self {
        MapLoader(HashMap::from([
            ("./shaders/vertex.glsl", Ok(VERTEX.to_string())),
            ("./shaders/fragment.glsl", Ok(FRAGMENT.to_string())),
        ]))
    }
}

impl ShaderLoader for MapLoader {
    async fn load(&self, path: &str) -> Result<String> {
        self.0
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(Error::shader_load(path, "HTTP 404 Not Found")))
    }
}

fn widget() -> FixedSurface {
    FixedSurface(Some(SurfaceSize::new(200.0, 60.0)))
}

#[test]
fn init_installs_scene_sized_to_surface() {
    let recorder = Recorder::default();
    let config = Config::new(Variant::Widget);
    let app = block_on(App::init(&config, &widget(), &MapLoader::ok(), recorder.clone()))
        .expect("init");

    assert_eq!(
        recorder.calls(),
        vec![Call::Resize(SurfaceSize::new(200.0, 60.0)), Call::Install]
    );
    assert_eq!(app.uniforms().resolution(), Vec2::new(200.0, 60.0));
    assert_eq!(app.uniforms().mouse(), Vec2::splat(0.5));
    assert_eq!(app.scene().material.source.fragment, FRAGMENT);
    assert!((app.scene().quad.width - 2.0 * 200.0 / 60.0).abs() < 1e-5);
}

#[test]
fn fragment_fetch_failure_aborts_before_install() {
    let recorder = Recorder::default();
    let mut loader = MapLoader::ok();
    loader.0.insert(
        "./shaders/fragment.glsl",
        Err(Error::shader_load("./shaders/fragment.glsl", "network error")),
    );

    let result = block_on(App::init(&Config::default(), &widget(), &loader, recorder.clone()));
    assert!(matches!(result, Err(Error::ShaderLoad { ref path, .. }) if path == "./shaders/fragment.glsl"));
    let calls = recorder.calls();
    assert!(!calls.contains(&Call::Install));
    assert!(!calls.iter().any(|c| matches!(c, Call::Draw { .. })));
}

#[test]
fn html_error_page_is_not_a_shader() {
    let recorder = Recorder::default();
    let mut loader = MapLoader::ok();
    loader.0.insert(
        "./shaders/vertex.glsl",
        Ok("<!doctype html><title>404</title>".to_string()),
    );

    let result = block_on(App::init(&Config::default(), &widget(), &loader, recorder.clone()));
    assert!(matches!(result, Err(Error::ShaderLoad { .. })));
    assert!(!recorder.calls().contains(&Call::Install));
}

#[test]
fn missing_surface_is_fatal() {
    let recorder = Recorder::default();
    let result = block_on(App::init(
        &Config::default(),
        &FixedSurface(None),
        &MapLoader::ok(),
        recorder.clone(),
    ));
    assert_eq!(
        result.err(),
        Some(Error::MissingSurface("liquid-button-wrapper".into()))
    );
    assert!(recorder.calls().is_empty());
}

#[test]
fn each_tick_draws_once_with_current_uniforms() {
    let recorder = Recorder::default();
    let mut app = block_on(App::init(
        &Config::default(),
        &widget(),
        &MapLoader::ok(),
        recorder.clone(),
    ))
    .expect("init");

    app.dispatch(Event::FrameTick { now_ms: 1000.0 });
    app.dispatch(Event::PointerMoved {
        client_x: 50.0,
        client_y: 15.0,
        bounds: Bounds::new(0.0, 0.0, 200.0, 60.0),
    });
    app.dispatch(Event::FrameTick { now_ms: 1500.0 });

    let draws: Vec<Call> = recorder
        .calls()
        .into_iter()
        .filter(|c| matches!(c, Call::Draw { .. }))
        .collect();
    assert_eq!(
        draws,
        vec![
            Call::Draw {
                time: 0.0,
                mouse: Vec2::splat(0.5)
            },
            Call::Draw {
                time: 0.5,
                mouse: Vec2::new(0.25, 0.75)
            },
        ]
    );
}

#[test]
fn resize_updates_resolution_and_buffer_once() {
    let recorder = Recorder::default();
    let mut app = block_on(App::init(
        &Config::default(),
        &widget(),
        &MapLoader::ok(),
        recorder.clone(),
    ))
    .expect("init");

    let size = SurfaceSize::new(800.0, 600.0);
    app.dispatch(Event::ViewportResized(size));
    app.dispatch(Event::ViewportResized(size));

    assert_eq!(app.uniforms().resolution(), Vec2::new(800.0, 600.0));
    let resizes: Vec<Call> = recorder
        .calls()
        .into_iter()
        .filter(|c| matches!(c, Call::Resize(_)))
        .collect();
    assert_eq!(
        resizes,
        vec![
            Call::Resize(SurfaceSize::new(200.0, 60.0)),
            Call::Resize(size)
        ]
    );
}
