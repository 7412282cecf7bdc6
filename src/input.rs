//! Host events and the pure state transitions they cause.

use crate::clock::FrameClock;
use crate::surface::{Bounds, SurfaceSize};
use crate::uniforms::UniformStore;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    PointerMoved {
        client_x: f32,
        client_y: f32,
        bounds: Bounds,
    },
    ViewportResized(SurfaceSize),
    /// Animation-frame callback; `now_ms` is the host's high-resolution timestamp.
    FrameTick { now_ms: f64 },
}

/// What the host must do after an event has been applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    ResizeBuffer(SurfaceSize),
    Draw,
}

pub fn update(store: &mut UniformStore, clock: &mut FrameClock, event: &Event) -> Effect {
    match *event {
        Event::PointerMoved {
            client_x,
            client_y,
            bounds,
        } => {
            if let Some(mouse) = bounds.normalize(client_x, client_y) {
                store.set_mouse(mouse);
            }
            Effect::None
        }
        Event::ViewportResized(size) => {
            if store.resolution() == size.as_vec2() {
                return Effect::None;
            }
            store.set_resolution(size.as_vec2());
            Effect::ResizeBuffer(size)
        }
        Event::FrameTick { now_ms } => {
            store.set_time(clock.elapsed(now_ms));
            Effect::Draw
        }
    }
}
