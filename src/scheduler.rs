use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;

use folio_core::{FrameTask, Scheduler, Task};

/// `setTimeout` and `requestAnimationFrame` behind the core scheduler trait.
pub(crate) struct BrowserScheduler {
    frames: Rc<RefCell<HashMap<u64, AnimationFrame>>>,
    next_frame: Cell<u64>,
}

impl BrowserScheduler {
    pub(crate) fn new() -> Self {
        Self {
            frames: Rc::new(RefCell::new(HashMap::new())),
            next_frame: Cell::new(0),
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn now(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.performance())
            .map(|performance| performance.now())
            .unwrap_or(0.0)
    }

    fn set_timeout(&self, delay_ms: u32, task: Task) {
        let _ = Timeout::new(delay_ms, task).forget();
    }

    fn request_frame(&self, task: FrameTask) {
        let id = self.next_frame.get();
        self.next_frame.set(id.wrapping_add(1));
        let frames = Rc::clone(&self.frames);
        let handle = request_animation_frame(move |timestamp| {
            frames.borrow_mut().remove(&id);
            task(timestamp);
        });
        self.frames.borrow_mut().insert(id, handle);
    }
}
