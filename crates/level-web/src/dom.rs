use level_core::{ScreenOrientation, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn query_html(document: &web::Document, selector: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn container_viewport(container: &web::Element) -> Viewport {
    let rect = container.get_bounding_client_rect();
    Viewport::new(rect.width(), rect.height())
}

/// Read `screen.orientation.type` through reflection; Safari before 16.4
/// has no `screen.orientation` at all.
pub fn screen_orientation() -> ScreenOrientation {
    let type_str = web::window()
        .and_then(|w| w.screen().ok())
        .and_then(|screen| {
            let screen: &JsValue = screen.as_ref();
            js_sys::Reflect::get(screen, &JsValue::from_str("orientation")).ok()
        })
        .filter(|o| o.is_object())
        .and_then(|o| js_sys::Reflect::get(&o, &JsValue::from_str("type")).ok())
        .and_then(|t| t.as_string());
    ScreenOrientation::from_dom(type_str.as_deref())
}
