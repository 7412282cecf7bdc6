use glam::Vec2;

pub const U_TIME: &str = "u_time";
pub const U_RESOLUTION: &str = "u_resolution";
pub const U_MOUSE: &str = "u_mouse";

/// Values shared with the shader program, read once per frame by the draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformStore {
    time: f32,
    resolution: Vec2,
    mouse: Vec2,
}

impl UniformStore {
    /// Fresh store: time zero, pointer centred.
    pub fn new(resolution: Vec2) -> Self {
        Self {
            time: 0.0,
            resolution,
            mouse: Vec2::splat(0.5),
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn set_time(&mut self, seconds: f32) {
        self.time = seconds;
    }

    pub fn resolution(&self) -> Vec2 {
        self.resolution
    }

    pub fn set_resolution(&mut self, resolution: Vec2) {
        self.resolution = resolution;
    }

    pub fn mouse(&self) -> Vec2 {
        self.mouse
    }

    // Not clamped: the shader decides what to do outside [0,1].
    pub fn set_mouse(&mut self, mouse: Vec2) {
        self.mouse = mouse;
    }
}
