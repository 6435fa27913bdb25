use crate::constants::VIEWER_ID;
use crate::dom;
use crate::keymap::command_for_key;
use crate::SharedSession;
use tour_core::ViewerCommand;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, session: &SharedSession) {
    // leave browser shortcuts such as Ctrl+0 alone
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    let Some(command) = command_for_key(&key) else {
        return;
    };
    log::debug!("[keys] {} -> {:?}", key, command);
    if command == ViewerCommand::ToggleFullscreen {
        if let Some(doc) = dom::window_document() {
            dom::toggle_fullscreen(&doc, VIEWER_ID);
        }
    }
    session.borrow_mut().apply(command);
    ev.prevent_default();
}

pub fn wire_global_keydown(session: SharedSession) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &session);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
