use std::cell::RefCell;
use std::rc::Rc;

use log::{error, info, warn};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{MouseEvent, Window};

use super::fetch::FetchLoader;
use super::gl::GlBackend;
use super::surface::DomSurface;
use crate::app::App;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::input::Event;
use crate::surface::SurfaceProvider;

type SharedApp = Rc<RefCell<App<GlBackend>>>;

/// Build the scene, attach listeners and start the animation loop.
pub async fn run(window: Window, config: Config) -> Result<()> {
    let document = window
        .document()
        .ok_or_else(|| Error::Platform("no document".into()))?;
    let container = document
        .get_element_by_id(&config.container_id)
        .ok_or_else(|| Error::MissingSurface(config.container_id.clone()))?;

    let surface = match config.surface_id() {
        None => DomSurface::viewport(window.clone()),
        Some(id) => DomSurface::element(&document, id)?,
    };
    let backend = GlBackend::new(&window, &document, &container)?;
    let loader = FetchLoader::new(window.clone());

    let app = App::init(&config, &surface, &loader, backend).await?;
    let app: SharedApp = Rc::new(RefCell::new(app));
    let surface = Rc::new(surface);

    listen_pointer(&surface, &app)?;
    if config.track_resize {
        listen_resize(&window, &surface, &app)?;
    }
    start_loop(window, app)?;
    info!("render loop started");
    Ok(())
}

fn listen_pointer(surface: &Rc<DomSurface>, app: &SharedApp) -> Result<()> {
    let closure = {
        let surface = surface.clone();
        let app = app.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let bounds = match surface.bounds() {
                Ok(bounds) => bounds,
                Err(e) => {
                    warn!("pointer ignored: {e}");
                    return;
                }
            };
            app.borrow_mut().dispatch(Event::PointerMoved {
                client_x: event.client_x() as f32,
                client_y: event.client_y() as f32,
                bounds,
            });
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    surface
        .event_target()
        .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
    // Listeners live for the page.
    closure.forget();
    Ok(())
}

fn listen_resize(window: &Window, surface: &Rc<DomSurface>, app: &SharedApp) -> Result<()> {
    let closure = {
        let surface = surface.clone();
        let app = app.clone();
        Closure::wrap(Box::new(move || match surface.size() {
            Ok(size) => app.borrow_mut().dispatch(Event::ViewportResized(size)),
            Err(e) => warn!("resize ignored: {e}"),
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn start_loop(window: Window, app: SharedApp) -> Result<()> {
    // `f` holds the animation-frame closure so that it can keep calling
    // `request_animation_frame` on itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let w = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        app.borrow_mut().dispatch(Event::FrameTick { now_ms });

        if let Some(callback) = f.borrow().as_ref() {
            if let Err(e) = w.request_animation_frame(callback.as_ref().unchecked_ref()) {
                error!("failed to schedule frame: {e:?}");
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = g.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}
