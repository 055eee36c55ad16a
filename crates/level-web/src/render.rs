use level_core::{RenderTarget, Vector2};
use web_sys as web;

/// Absolutely positioned element inside the level container, driven via
/// inline `left`/`top`/`transform` styles.
pub struct DomTarget {
    element: web::HtmlElement,
}

impl DomTarget {
    pub fn new(element: web::HtmlElement) -> Self {
        Self { element }
    }

    #[inline]
    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = self.element.style().set_property(property, value) {
            log::error!("[render] failed to set {}: {:?}", property, e);
        }
    }
}

impl RenderTarget for DomTarget {
    fn set_offset_px(&mut self, left: f64, top: f64) {
        self.set_style("left", &format!("{}px", left));
        self.set_style("top", &format!("{}px", top));
    }

    fn set_scale(&mut self, scale: Vector2) {
        self.set_style("transform", &format!("scale({}, {})", scale.x, scale.y));
    }

    fn set_rotation(&mut self, radians: f64) {
        self.set_style("transform", &format!("rotate({}rad)", radians));
    }
}
