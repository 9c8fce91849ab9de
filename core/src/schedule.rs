use std::cell::{Cell, RefCell};
use std::cmp::Ordering;

pub type Task = Box<dyn FnOnce()>;
pub type FrameTask = Box<dyn FnOnce(f64)>;

/// Single-threaded deferred work: delayed tasks and per-frame callbacks.
pub trait Scheduler {
    /// Milliseconds on the same clock frame callbacks receive.
    fn now(&self) -> f64;
    fn set_timeout(&self, delay_ms: u32, task: Task);
    fn request_frame(&self, task: FrameTask);
}

struct PendingTimeout {
    due: f64,
    seq: u64,
    task: Task,
}

/// Deterministic scheduler driven by an explicit clock.
///
/// Timeouts fire ordered by due time, ties in registration order. A frame runs every
/// callback requested before it started; callbacks requested while a frame runs wait
/// for the next one.
pub struct SimulatedScheduler {
    now: Cell<f64>,
    next_seq: Cell<u64>,
    timeouts: RefCell<Vec<PendingTimeout>>,
    frames: RefCell<Vec<FrameTask>>,
}

impl SimulatedScheduler {
    pub fn new() -> Self {
        Self {
            now: Cell::new(0.0),
            next_seq: Cell::new(0),
            timeouts: RefCell::new(Vec::new()),
            frames: RefCell::new(Vec::new()),
        }
    }

    pub fn pending_timeouts(&self) -> usize {
        self.timeouts.borrow().len()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    /// Moves the clock forward by `ms`, running every timeout that falls due.
    pub fn advance(&self, ms: f64) {
        let target = self.now.get() + ms.max(0.0);
        while let Some(pending) = self.take_due(target) {
            if pending.due > self.now.get() {
                self.now.set(pending.due);
            }
            (pending.task)();
        }
        self.now.set(target);
    }

    /// Moves the clock forward by `ms` and then runs one frame. Returns how many
    /// callbacks ran.
    pub fn frame(&self, ms: f64) -> usize {
        self.advance(ms);
        let tasks = std::mem::take(&mut *self.frames.borrow_mut());
        let timestamp = self.now.get();
        let count = tasks.len();
        for task in tasks {
            task(timestamp);
        }
        count
    }

    /// Runs frames `frame_ms` apart until none are requested or `max_frames` ran.
    pub fn run_frames(&self, frame_ms: f64, max_frames: usize) -> usize {
        let mut ran = 0;
        while ran < max_frames && self.pending_frames() > 0 {
            self.frame(frame_ms);
            ran += 1;
        }
        ran
    }

    fn take_due(&self, target: f64) -> Option<PendingTimeout> {
        let mut timeouts = self.timeouts.borrow_mut();
        let index = timeouts
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.due <= target)
            .min_by(|(_, a), (_, b)| {
                a.due
                    .partial_cmp(&b.due)
                    .unwrap_or(Ordering::Equal)
                    .then(a.seq.cmp(&b.seq))
            })
            .map(|(index, _)| index)?;
        Some(timeouts.remove(index))
    }
}

impl Default for SimulatedScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for SimulatedScheduler {
    fn now(&self) -> f64 {
        self.now.get()
    }

    fn set_timeout(&self, delay_ms: u32, task: Task) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq.saturating_add(1));
        self.timeouts.borrow_mut().push(PendingTimeout {
            due: self.now.get() + f64::from(delay_ms),
            seq,
            task,
        });
    }

    fn request_frame(&self, task: FrameTask) {
        self.frames.borrow_mut().push(task);
    }
}
