use web_sys as web;

/// Pointer position relative to the centre of a client rect.
#[inline]
pub fn offset_from_center(
    client_x: f64,
    client_y: f64,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> (f64, f64) {
    (client_x - left - width / 2.0, client_y - top - height / 2.0)
}

/// Pointer position relative to the centre of `element`. Rotating an element
/// around its centre keeps its bounding-box centre fixed, so this stays
/// valid for the spinning dial.
#[inline]
pub fn pointer_offset(ev: &web::PointerEvent, element: &web::Element) -> (f64, f64) {
    let rect = element.get_bounding_client_rect();
    offset_from_center(
        ev.client_x() as f64,
        ev.client_y() as f64,
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
    )
}

/// Parse the throttle override attribute; rejects anything that is not a
/// finite, non-negative number of milliseconds.
pub fn parse_throttle_ms(attr: Option<&str>) -> Option<f64> {
    let ms = attr?.trim().parse::<f64>().ok()?;
    (ms.is_finite() && ms >= 0.0).then_some(ms)
}
