use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, HtmlElement, Window};

use crate::error::{Error, Result};
use crate::surface::{Bounds, SurfaceProvider, SurfaceSize};

/// The viewport, or a sized element, measured from the live layout.
pub enum DomSurface {
    Viewport(Window),
    Element { id: String, element: HtmlElement },
}

impl DomSurface {
    pub fn viewport(window: Window) -> Self {
        DomSurface::Viewport(window)
    }

    pub fn element(document: &Document, id: &str) -> Result<Self> {
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| Error::MissingSurface(id.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| Error::MissingSurface(id.to_string()))?;
        Ok(DomSurface::Element {
            id: id.to_string(),
            element,
        })
    }

    /// Where pointer-move listeners attach.
    pub fn event_target(&self) -> &EventTarget {
        let target: &EventTarget = match self {
            DomSurface::Viewport(window) => window,
            DomSurface::Element { element, .. } => element,
        };
        target
    }
}

impl SurfaceProvider for DomSurface {
    fn size(&self) -> Result<SurfaceSize> {
        match self {
            DomSurface::Viewport(window) => {
                let width = window.inner_width()?.as_f64().unwrap_or(0.0);
                let height = window.inner_height()?.as_f64().unwrap_or(0.0);
                Ok(SurfaceSize::new(width as f32, height as f32))
            }
            DomSurface::Element { id, element } => {
                let size = SurfaceSize::new(
                    element.offset_width() as f32,
                    element.offset_height() as f32,
                );
                if size.is_empty() {
                    return Err(Error::EmptySurface(id.clone()));
                }
                Ok(size)
            }
        }
    }

    fn bounds(&self) -> Result<Bounds> {
        match self {
            DomSurface::Viewport(_) => Ok(Bounds::viewport(self.size()?)),
            DomSurface::Element { element, .. } => {
                let rect = element.get_bounding_client_rect();
                Ok(Bounds::new(
                    rect.left() as f32,
                    rect.top() as f32,
                    rect.width() as f32,
                    rect.height() as f32,
                ))
            }
        }
    }
}
