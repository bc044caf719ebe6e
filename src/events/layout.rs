use crate::constants::{CANVAS_ID, WINDOW_ID};
use crate::dom;
use crate::frame::SharedToy;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Push fresh layout facts into the toy. Missing elements are left for the
/// frame loop to pick up once they appear.
fn relayout(toy: &SharedToy, resize_canvas: bool) {
    if resize_canvas {
        if let Some(canvas) = dom::element_by_id::<web::HtmlCanvasElement>(CANVAS_ID) {
            dom::sync_canvas_to_viewport(&canvas);
        }
    }
    if let Some(host) = dom::element_by_id::<web::Element>(WINDOW_ID) {
        toy.borrow_mut().relayout(dom::element_center(&host));
    }
}

pub fn wire_layout_handlers(toy: &SharedToy) {
    let Some(wnd) = web::window() else { return };

    let toy_resize = toy.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        relayout(&toy_resize, true);
    }) as Box<dyn FnMut()>);
    _ = wnd.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();

    let toy_scroll = toy.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        relayout(&toy_scroll, false);
    }) as Box<dyn FnMut()>);
    // Capture so scrolls of nested containers are seen too.
    _ = wnd.add_event_listener_with_callback_and_bool(
        "scroll",
        on_scroll.as_ref().unchecked_ref(),
        true,
    );
    on_scroll.forget();
}

/// Hover tracking for the hover-sized window variant. Called by the frame
/// loop once the window element exists.
pub fn wire_hover_handlers(toy: &SharedToy, host: &web::Element) {
    for (event, hovered) in [("pointerenter", true), ("pointerleave", false)] {
        let toy = toy.clone();
        let closure = Closure::wrap(Box::new(move || {
            toy.borrow_mut().set_hovered(hovered);
        }) as Box<dyn FnMut()>);
        _ = host.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
    log::debug!("[layout] hover sizing wired on #{}", WINDOW_ID);
}

pub fn wire_teardown(mut on_teardown: impl FnMut() + 'static) {
    let Some(wnd) = web::window() else { return };
    let closure = Closure::wrap(Box::new(move || on_teardown()) as Box<dyn FnMut()>);
    _ = wnd.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}
