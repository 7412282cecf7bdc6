//! The fixed pipeline: an orthographic camera, one quad filling its frustum,
//! and a blended shader material. Assembled once at startup.

use glam::{Mat4, Vec3};

use crate::shader::ShaderProgramSource;
use crate::surface::SurfaceSize;

pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicCamera {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl OrthographicCamera {
    /// Half-width `aspect`, half-height 1, placed at z = 1 looking down -z.
    pub fn for_aspect(aspect: f32) -> Self {
        Self {
            left: -aspect,
            right: aspect,
            top: 1.0,
            bottom: -1.0,
            near: NEAR,
            far: FAR,
            position: Vec3::new(0.0, 0.0, 1.0),
        }
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::orthographic_rh_gl(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }

    pub fn view(&self) -> Mat4 {
        Mat4::from_translation(-self.position)
    }
}

/// Flat rectangle centred at the origin on z = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub width: f32,
    pub height: f32,
}

impl Quad {
    pub const INDICES: [u16; 6] = [0, 1, 2, 2, 1, 3];

    pub fn covering(camera: &OrthographicCamera) -> Self {
        Self {
            width: camera.right - camera.left,
            height: camera.top - camera.bottom,
        }
    }

    /// Corner positions as xyz triples: bottom-left, bottom-right, top-left, top-right.
    pub fn positions(&self) -> [f32; 12] {
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        [
            -hw, -hh, 0.0, //
            hw, -hh, 0.0, //
            -hw, hh, 0.0, //
            hw, hh, 0.0,
        ]
    }

    pub fn uvs(&self) -> [f32; 8] {
        [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub source: ShaderProgramSource,
    /// Alpha-blend the output over the page instead of writing opaque pixels.
    pub transparent: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub camera: OrthographicCamera,
    pub quad: Quad,
    pub material: Material,
}

impl Scene {
    pub fn assemble(size: SurfaceSize, source: ShaderProgramSource) -> Self {
        let camera = OrthographicCamera::for_aspect(size.aspect());
        let quad = Quad::covering(&camera);
        Self {
            camera,
            quad,
            material: Material {
                source,
                transparent: true,
            },
        }
    }

    pub fn model_view(&self) -> Mat4 {
        // The quad sits at the origin, so model is identity.
        self.camera.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn source() -> ShaderProgramSource {
        ShaderProgramSource {
            vertex: "v".into(),
            fragment: "f".into(),
        }
    }

    #[test]
    fn quad_spans_camera_frustum() {
        let scene = Scene::assemble(SurfaceSize::new(200.0, 60.0), source());
        let aspect = 200.0 / 60.0;
        assert!((scene.quad.width - 2.0 * aspect).abs() < 1e-5);
        assert_eq!(scene.quad.height, 2.0);
        assert!(scene.material.transparent);

        let clip = scene.camera.projection() * scene.model_view();
        let p = scene.quad.positions();
        for corner in p.chunks(3) {
            let v = clip * Vec4::new(corner[0], corner[1], corner[2], 1.0);
            let ndc = v.truncate() / v.w;
            assert!((ndc.x.abs() - 1.0).abs() < 1e-5, "x={}", ndc.x);
            assert!((ndc.y.abs() - 1.0).abs() < 1e-5, "y={}", ndc.y);
            assert!(ndc.z > -1.0 && ndc.z < 1.0, "z={}", ndc.z);
        }
    }

    #[test]
    fn camera_encloses_quad_depth() {
        let camera = OrthographicCamera::for_aspect(1.0);
        let distance = camera.position.z;
        assert!(camera.near < distance && distance < camera.far);
    }
}
