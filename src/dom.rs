use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
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
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Click listener on `element_id` that reports the `attr` value of the
/// nearest ancestor of the clicked node carrying it.
pub fn add_delegated_click_listener(
    document: &web::Document,
    element_id: &str,
    attr: &'static str,
    mut handler: impl FnMut(String) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            if let Some(value) = closest_attr(&ev, attr) {
                handler(value);
                ev.stop_propagation();
            }
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn closest_attr(ev: &web::Event, attr: &str) -> Option<String> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let holder = target.closest(&format!("[{}]", attr)).ok()??;
    holder.get_attribute(attr)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// CSS pixels per canvas backing pixel.
pub fn css_scale(canvas: &web::HtmlCanvasElement) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    let backing = canvas.width().max(1) as f64;
    (rect.width() / backing) as f32
}

pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_hidden(document: &web::Document, element_id: &str, hidden: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let cl = el.class_list();
        if hidden {
            _ = cl.add_1("hidden");
        } else {
            _ = cl.remove_1("hidden");
        }
    }
}

/// Enter fullscreen on `element_id`, or leave it if the document is already
/// fullscreen.
pub fn toggle_fullscreen(document: &web::Document, element_id: &str) {
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
    } else if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.request_fullscreen();
    }
}
