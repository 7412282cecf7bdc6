use glam::Vec2;

use crate::error::Result;

/// Pixel dimensions of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Client-space rectangle of the element the pointer is tracked over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Bounds of a viewport-sized surface anchored at the client origin.
    pub fn viewport(size: SurfaceSize) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Map a client point into [0,1]x[0,1] with the origin at the bottom-left.
    ///
    /// Returns `None` for degenerate bounds. Points outside the rectangle map
    /// outside the unit square.
    pub fn normalize(&self, client_x: f32, client_y: f32) -> Option<Vec2> {
        if self.width == 0.0 || self.height == 0.0 {
            return None;
        }
        let x = (client_x - self.left) / self.width;
        let y = 1.0 - (client_y - self.top) / self.height;
        Some(Vec2::new(x, y))
    }
}

/// Reports the current size and client bounds of the drawing surface.
pub trait SurfaceProvider {
    fn size(&self) -> Result<SurfaceSize>;
    fn bounds(&self) -> Result<Bounds>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_of_button() {
        let size = SurfaceSize::new(200.0, 60.0);
        assert!((size.aspect() - 10.0 / 3.0).abs() < 1e-6);
        assert!(!size.is_empty());
        assert!(SurfaceSize::new(0.0, 60.0).is_empty());
    }

    #[test]
    fn normalize_flips_y() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(bounds.normalize(0.0, 0.0), Some(Vec2::new(0.0, 1.0)));
        assert_eq!(bounds.normalize(0.0, 100.0), Some(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn normalize_rejects_zero_area() {
        assert_eq!(Bounds::new(10.0, 10.0, 0.0, 50.0).normalize(10.0, 10.0), None);
    }
}
