use std::cell::Cell;
use std::rc::Rc;

/// Shared flag that stops a render loop at its next iteration boundary.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// "Run until cancelled" frame driver. The host calls [`RenderLoop::tick`]
/// from its frame callback and stops rescheduling on [`LoopControl::Stop`].
#[derive(Debug)]
pub struct RenderLoop {
    token: CancelToken,
    frames: u64,
}

impl RenderLoop {
    pub fn new(token: CancelToken) -> Self {
        Self { token, frames: 0 }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn tick(&mut self, step: impl FnOnce()) -> LoopControl {
        if self.token.is_cancelled() {
            return LoopControl::Stop;
        }
        step();
        self.frames += 1;
        if self.token.is_cancelled() {
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    }
}
