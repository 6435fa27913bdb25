#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use tour_core::{NavigationSession, Viewport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod keymap;
mod loader;
mod overlay;
mod render;

pub(crate) type Session = NavigationSession<render::GpuState, loader::ImageLoader>;
pub(crate) type SharedSession = Rc<RefCell<Session>>;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

// Leaving the page releases the GPU backend and stops the frame loop.
fn wire_teardown(session: &SharedSession) {
    let s = session.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Ok(mut session) = s.try_borrow_mut() {
            session.teardown();
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tour-web starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let tour = tour_core::sample::office_tour()?;
    let gpu = render::GpuState::new(&canvas).await?;
    let (device, queue) = gpu.device_and_queue();
    let loader = loader::ImageLoader::new(device, queue);
    let inbox = loader.inbox();

    let mut session: Session = NavigationSession::from_tour(tour, loader)?;
    session.attach(
        gpu,
        Viewport::new(canvas.width() as f32, canvas.height() as f32),
    );
    let session: SharedSession = Rc::new(RefCell::new(session));

    events::wire_pointer_handlers(&canvas, &session);
    events::wire_global_keydown(session.clone());
    events::wire_overlay_clicks(&document, &session);
    events::wire_control_buttons(&document, &session);
    wire_teardown(&session);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        inbox,
        overlay: overlay::Overlay::new(document),
        canvas,
        started: Instant::now(),
        timer_armed: Rc::new(Cell::new(false)),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
