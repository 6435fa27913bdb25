pub mod keyboard;
pub mod pointer;

use crate::constants::*;
use crate::dom;
use crate::SharedSession;
use tour_core::{RotateDirection, ViewerCommand};
use web_sys as web;

pub use keyboard::wire_global_keydown;
pub use pointer::wire_pointer_handlers;

/// Hotspot markers, scene selector and mini-map all dispatch through
/// delegated listeners since their contents are rebuilt on the fly.
pub fn wire_overlay_clicks(document: &web::Document, session: &SharedSession) {
    let s = session.clone();
    dom::add_delegated_click_listener(document, HOTSPOT_LAYER_ID, "data-hotspot", move |id| {
        log::info!("[mouse] hotspot \"{}\"", id);
        s.borrow_mut().apply(ViewerCommand::ActivateHotspot(id));
    });
    for list in [SCENE_SELECTOR_ID, MINIMAP_ID] {
        let s = session.clone();
        dom::add_delegated_click_listener(document, list, "data-scene", move |scene| {
            s.borrow_mut().apply(ViewerCommand::Navigate(scene));
        });
    }
    let s = session.clone();
    dom::add_click_listener(document, INFO_CLOSE_ID, move || {
        s.borrow_mut().apply(ViewerCommand::CloseInfo);
    });
}

pub fn wire_control_buttons(document: &web::Document, session: &SharedSession) {
    let buttons = [
        (BTN_ROTATE_LEFT_ID, ViewerCommand::Rotate(RotateDirection::Left)),
        (BTN_ROTATE_RIGHT_ID, ViewerCommand::Rotate(RotateDirection::Right)),
        (BTN_ROTATE_UP_ID, ViewerCommand::Rotate(RotateDirection::Up)),
        (BTN_ROTATE_DOWN_ID, ViewerCommand::Rotate(RotateDirection::Down)),
        (BTN_ZOOM_IN_ID, ViewerCommand::ZoomIn),
        (BTN_ZOOM_OUT_ID, ViewerCommand::ZoomOut),
        (BTN_RESET_ID, ViewerCommand::Reset),
        (BTN_FULLSCREEN_ID, ViewerCommand::ToggleFullscreen),
    ];
    for (id, command) in buttons {
        let s = session.clone();
        let doc = document.clone();
        dom::add_click_listener(document, id, move || {
            if command == ViewerCommand::ToggleFullscreen {
                dom::toggle_fullscreen(&doc, VIEWER_ID);
            }
            s.borrow_mut().apply(command.clone());
        });
    }
}
