use crate::dom;
use crate::loader::TextureInbox;
use crate::overlay::Overlay;
use crate::SharedSession;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use tour_core::{LoopControl, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: SharedSession,
    pub inbox: TextureInbox,
    pub overlay: Overlay,
    pub canvas: web::HtmlCanvasElement,
    pub started: Instant,
    pub timer_armed: Rc<Cell<bool>>,
}

impl FrameContext {
    fn now(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn frame(&mut self) {
        let now = self.now();
        let completions: Vec<_> = self.inbox.borrow_mut().drain(..).collect();
        {
            let mut session = self.session.borrow_mut();
            for (id, result) in completions {
                session.texture_loaded(id, result);
            }
            let viewport = Viewport::new(self.canvas.width() as f32, self.canvas.height() as f32);
            if viewport != session.viewport() {
                session.resize(viewport);
            }
            session.frame(now);
            self.overlay.sync(&session, dom::css_scale(&self.canvas));
        }
        self.arm_stage_timer(now);
    }

    /// Backs the frame loop with a one-shot timeout for the next stage
    /// deadline, so transitions finish while animation frames are throttled.
    fn arm_stage_timer(&self, now: Duration) {
        if self.timer_armed.get() {
            return;
        }
        let Some(deadline) = self.session.borrow().next_timer_deadline() else {
            return;
        };
        let Some(window) = web::window() else {
            return;
        };
        let delay_ms = deadline.saturating_sub(now).as_millis() as i32;
        let session = self.session.clone();
        let armed = self.timer_armed.clone();
        let started = self.started;
        let callback = Closure::once_into_js(move || {
            armed.set(false);
            if let Ok(mut s) = session.try_borrow_mut() {
                s.poll_timers(started.elapsed());
            }
        });
        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                delay_ms,
            )
            .is_ok()
        {
            self.timer_armed.set(true);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let mut render_loop = frame_ctx.borrow().session.borrow().render_loop();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let control = render_loop.tick(|| frame_ctx_tick.borrow_mut().frame());
        if control == LoopControl::Stop {
            log::info!(
                "[session] render loop stopped after {} frames",
                render_loop.frames()
            );
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
