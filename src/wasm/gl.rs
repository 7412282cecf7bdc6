//! WebGL2 backend: one program, one indexed quad, three store uniforms plus
//! the camera matrices.

use js_sys::{Float32Array, Object, Reflect, Uint16Array};
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlProgram,
    WebGlShader, WebGlUniformLocation, WebGlVertexArrayObject, Window,
};

use crate::app::Backend;
use crate::error::{Error, Result};
use crate::scene::{Quad, Scene};
use crate::surface::SurfaceSize;
use crate::uniforms::{UniformStore, U_MOUSE, U_RESOLUTION, U_TIME};

const POSITION_LOCATION: u32 = 0;
const UV_LOCATION: u32 = 1;

struct Locations {
    projection: Option<WebGlUniformLocation>,
    model_view: Option<WebGlUniformLocation>,
    time: Option<WebGlUniformLocation>,
    resolution: Option<WebGlUniformLocation>,
    mouse: Option<WebGlUniformLocation>,
}

struct Installed {
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    locations: Locations,
}

pub struct GlBackend {
    gl: GL,
    canvas: HtmlCanvasElement,
    window: Window,
    installed: Option<Installed>,
}

impl GlBackend {
    /// Create a canvas inside `container` and acquire an alpha-enabled WebGL2 context.
    pub fn new(window: &Window, document: &Document, container: &Element) -> Result<Self> {
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| Error::Platform("created element is not a canvas".into()))?;
        container.append_child(&canvas)?;

        let options = Object::new();
        Reflect::set(&options, &"alpha".into(), &JsValue::TRUE)?;
        Reflect::set(&options, &"antialias".into(), &JsValue::TRUE)?;
        let gl: GL = canvas
            .get_context_with_context_options("webgl2", &options)?
            .ok_or_else(|| Error::Platform("WebGL2 not supported".into()))?
            .dyn_into()
            .map_err(|_| Error::Platform("context is not WebGL2".into()))?;

        Ok(Self {
            gl,
            canvas,
            window: window.clone(),
            installed: None,
        })
    }

    fn upload_quad(&self, quad: &Quad) -> Result<WebGlVertexArrayObject> {
        let gl = &self.gl;
        let vao = gl
            .create_vertex_array()
            .ok_or_else(|| Error::Platform("failed to create vertex array".into()))?;
        gl.bind_vertex_array(Some(&vao));

        self.upload_attribute(&quad.positions(), POSITION_LOCATION, 3)?;
        self.upload_attribute(&quad.uvs(), UV_LOCATION, 2)?;

        let indices = gl
            .create_buffer()
            .ok_or_else(|| Error::Platform("failed to create index buffer".into()))?;
        gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&indices));
        gl.buffer_data_with_array_buffer_view(
            GL::ELEMENT_ARRAY_BUFFER,
            &Uint16Array::from(&Quad::INDICES[..]),
            GL::STATIC_DRAW,
        );

        gl.bind_vertex_array(None);
        Ok(vao)
    }

    fn upload_attribute(&self, data: &[f32], location: u32, components: i32) -> Result<()> {
        let gl = &self.gl;
        let buffer = gl
            .create_buffer()
            .ok_or_else(|| Error::Platform("failed to create vertex buffer".into()))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        gl.buffer_data_with_array_buffer_view(
            GL::ARRAY_BUFFER,
            &Float32Array::from(data),
            GL::STATIC_DRAW,
        );
        gl.enable_vertex_attrib_array(location);
        gl.vertex_attrib_pointer_with_i32(location, components, GL::FLOAT, false, 0, 0);
        Ok(())
    }
}

impl Backend for GlBackend {
    fn install(&mut self, scene: &Scene) -> Result<()> {
        let gl = &self.gl;
        let source = &scene.material.source;
        let vertex = compile_shader(gl, GL::VERTEX_SHADER, "vertex", &source.vertex)?;
        let fragment = compile_shader(gl, GL::FRAGMENT_SHADER, "fragment", &source.fragment)?;
        let program = link_program(gl, &vertex, &fragment)?;

        let location = |name: &str| {
            let loc = gl.get_uniform_location(&program, name);
            if loc.is_none() {
                warn!("uniform {name} is not used by the shader program");
            }
            loc
        };
        let locations = Locations {
            projection: location("projectionMatrix"),
            model_view: location("modelViewMatrix"),
            time: location(U_TIME),
            resolution: location(U_RESOLUTION),
            mouse: location(U_MOUSE),
        };

        if scene.material.transparent {
            gl.enable(GL::BLEND);
            gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);
        }

        let vao = self.upload_quad(&scene.quad)?;
        self.installed = Some(Installed {
            program,
            vao,
            locations,
        });
        Ok(())
    }

    fn resize(&mut self, size: SurfaceSize) {
        let ratio = self.window.device_pixel_ratio();
        let width = (f64::from(size.width) * ratio).round() as u32;
        let height = (f64::from(size.height) * ratio).round() as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);

        let style = self.canvas.style();
        let css = style
            .set_property("width", &format!("{}px", size.width))
            .and_then(|_| style.set_property("height", &format!("{}px", size.height)));
        if let Err(e) = css {
            warn!("failed to size canvas: {e:?}");
        }
        self.gl.viewport(0, 0, width as i32, height as i32);
    }

    fn draw(&mut self, scene: &Scene, uniforms: &UniformStore) -> Result<()> {
        let installed = self
            .installed
            .as_ref()
            .ok_or_else(|| Error::Platform("draw before install".into()))?;
        let gl = &self.gl;
        let loc = &installed.locations;

        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.clear(GL::COLOR_BUFFER_BIT);
        gl.use_program(Some(&installed.program));

        gl.uniform_matrix4fv_with_f32_array(
            loc.projection.as_ref(),
            false,
            &scene.camera.projection().to_cols_array(),
        );
        gl.uniform_matrix4fv_with_f32_array(
            loc.model_view.as_ref(),
            false,
            &scene.model_view().to_cols_array(),
        );
        gl.uniform1f(loc.time.as_ref(), uniforms.time());
        let resolution = uniforms.resolution();
        gl.uniform2f(loc.resolution.as_ref(), resolution.x, resolution.y);
        let mouse = uniforms.mouse();
        gl.uniform2f(loc.mouse.as_ref(), mouse.x, mouse.y);

        gl.bind_vertex_array(Some(&installed.vao));
        gl.draw_elements_with_i32(
            GL::TRIANGLES,
            Quad::INDICES.len() as i32,
            GL::UNSIGNED_SHORT,
            0,
        );
        gl.bind_vertex_array(None);
        Ok(())
    }
}

fn compile_shader(gl: &GL, kind: u32, stage: &'static str, source: &str) -> Result<WebGlShader> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| Error::Platform(format!("failed to create {stage} shader")))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl
            .get_shader_info_log(&shader)
            .unwrap_or_else(|| "unknown error".to_string());
        gl.delete_shader(Some(&shader));
        Err(Error::Compile { stage, log })
    }
}

fn link_program(gl: &GL, vertex: &WebGlShader, fragment: &WebGlShader) -> Result<WebGlProgram> {
    let program = gl
        .create_program()
        .ok_or_else(|| Error::Platform("failed to create program".into()))?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.bind_attrib_location(&program, POSITION_LOCATION, "position");
    gl.bind_attrib_location(&program, UV_LOCATION, "uv");
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl
            .get_program_info_log(&program)
            .unwrap_or_else(|| "unknown error".to_string());
        gl.delete_program(Some(&program));
        Err(Error::Link(log))
    }
}
