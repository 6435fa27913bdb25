use crate::SharedSession;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position relative to the canvas in CSS pixels, the unit drag
/// sensitivity is tuned for.
#[inline]
pub fn pointer_css_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    Vec2::new(x_css, y_css)
}

pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, session: &SharedSession) {
    wire_pointerdown(canvas, session);
    wire_pointermove(canvas, session);
    wire_pointerup(session);
    wire_wheel(canvas, session);
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, session: &SharedSession) {
    let s = session.clone();
    let c = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = pointer_css_px(&ev, &c);
        s.borrow_mut().pointer_down(pos);
        log::debug!("[mouse] begin drag at ({:.0}, {:.0})", pos.x, pos.y);
        _ = c.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, session: &SharedSession) {
    let s = session.clone();
    let c = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut session = s.borrow_mut();
        if session.is_dragging() {
            session.pointer_move(pointer_css_px(&ev, &c));
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(session: &SharedSession) {
    let s = session.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        s.borrow_mut().pointer_up();
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        for name in ["pointerup", "pointercancel"] {
            _ = wnd.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
    }
    closure.forget();
}

fn wire_wheel(canvas: &web::HtmlCanvasElement, session: &SharedSession) {
    let s = session.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        s.borrow_mut().wheel(ev.delta_y() as f32);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
