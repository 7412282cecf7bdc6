use log::{error, info, Level};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::Config;

pub mod fetch;
pub mod gl;
pub mod render;
pub mod surface;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Trace).ok();

    let window = web_sys::window().ok_or("no window")?;
    let config = read_config(&window);
    log::set_max_level(config.log_level.to_level_filter());
    info!("starting liquid effect: {:?}", config.variant);

    spawn_local(async move {
        if let Err(e) = render::run(window, config).await {
            error!("startup aborted: {e}");
        }
    });
    Ok(())
}

/// Read `data-*` overrides from the container; a missing container is
/// reported later by `render::run`.
fn read_config(window: &web_sys::Window) -> Config {
    let container = window
        .document()
        .and_then(|document| document.get_element_by_id(crate::config::CONTAINER_ID));
    match container {
        Some(element) => Config::from_attributes(|name| element.get_attribute(name)),
        None => Config::default(),
    }
}
