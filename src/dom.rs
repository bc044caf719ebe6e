use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    window_document()?
        .get_element_by_id(id)?
        .dyn_into::<T>()
        .ok()
}

/// Center of an element's bounding box in viewport coordinates.
#[inline]
pub fn element_center(el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        (rect.left() + rect.width() * 0.5) as f32,
        (rect.top() + rect.height() * 0.5) as f32,
    )
}

/// Size the canvas backing store to the viewport so pointer coordinates map
/// one-to-one onto canvas pixels.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width((width as u32).max(1));
        canvas.set_height((height as u32).max(1));
    }
}

pub fn set_box_size(el: &web::HtmlElement, edge_px: f32) {
    let style = el.style();
    let v = format!("{:.1}px", edge_px);
    _ = style.set_property("width", &v);
    _ = style.set_property("height", &v);
}

pub fn set_transition(el: &web::HtmlElement, css: &str) {
    _ = el.style().set_property("transition", css);
}
