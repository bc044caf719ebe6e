use crate::audio::WebSynth;
use crate::frame::SharedToy;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub fn wire_input_handlers(toy: &SharedToy) {
    wire_pointerdown(toy);
    wire_pointermove(toy);
    wire_pointerup(toy);
}

fn wire_pointerdown(toy: &SharedToy) {
    let toy = toy.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // Only the primary pointer drives the rope.
        if !ev.is_primary() {
            return;
        }
        let mut toy = toy.borrow_mut();
        let tau = toy.mapper().config.ramp_tau_sec;
        let grabbed = toy.pointer_down(client_pos(&ev), || WebSynth::new(tau));
        if grabbed {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointermove(toy: &SharedToy) {
    let toy = toy.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.is_primary() {
            toy.borrow_mut().pointer_move(client_pos(&ev));
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(toy: &SharedToy) {
    let toy = toy.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.is_primary() {
            toy.borrow_mut().pointer_up();
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        _ = wnd
            .add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
