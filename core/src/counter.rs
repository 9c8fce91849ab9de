use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::schedule::Scheduler;
use crate::surface::{Role, Stage};

pub const COUNTER_DURATION_MS: u32 = 2000;

/// Target for a stat counter: every digit of `text`, in order. Zero counts as no target.
pub fn parse_counter_target(text: &str) -> Option<i64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    let value = digits.parse::<i64>().ok()?;
    (value != 0).then_some(value)
}

pub fn counter_progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

pub fn counter_value(start: i64, end: i64, progress: f64) -> i64 {
    (start as f64 + (end - start) as f64 * progress).floor() as i64
}

/// Renders `value`, re-appending a `+` or `%` found in the text currently displayed.
pub fn format_counter(value: i64, current_text: &str) -> String {
    let mut out = value.to_string();
    if current_text.contains('+') {
        out.push('+');
    }
    if current_text.contains('%') {
        out.push('%');
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterRun {
    pub start: i64,
    pub end: i64,
    pub duration_ms: f64,
    pub started_at: f64,
}

impl CounterRun {
    /// Displayed value and progress at `timestamp`.
    pub fn sample(&self, timestamp: f64) -> (i64, f64) {
        let progress = counter_progress(timestamp - self.started_at, self.duration_ms);
        (counter_value(self.start, self.end, progress), progress)
    }
}

type CounterKey = (Role, usize);

/// Frame-driven number animation over stage elements.
///
/// Starting a run on an element that already has one in flight supersedes it; the
/// older loop stops at its next frame without writing. Targets are read from an
/// element's text once and remembered, so a re-run never counts to a half-drawn value.
pub struct CounterAnimator {
    stage: Rc<dyn Stage>,
    scheduler: Rc<dyn Scheduler>,
    generations: RefCell<HashMap<CounterKey, u64>>,
    targets: RefCell<HashMap<CounterKey, Option<i64>>>,
    next_generation: Cell<u64>,
}

impl CounterAnimator {
    pub fn new(stage: Rc<dyn Stage>, scheduler: Rc<dyn Scheduler>) -> Rc<Self> {
        Rc::new(Self {
            stage,
            scheduler,
            generations: RefCell::new(HashMap::new()),
            targets: RefCell::new(HashMap::new()),
            next_generation: Cell::new(1),
        })
    }

    pub fn animate_number(
        self: &Rc<Self>,
        role: Role,
        index: usize,
        start: i64,
        end: i64,
        duration_ms: u32,
    ) {
        let generation = self.next_generation.get();
        self.next_generation.set(generation.saturating_add(1));
        self.generations
            .borrow_mut()
            .insert((role, index), generation);
        let run = CounterRun {
            start,
            end,
            duration_ms: f64::from(duration_ms),
            started_at: self.scheduler.now(),
        };
        self.schedule_frame((role, index), generation, run);
    }

    /// Counter target of the element at `index`, parsed from the text it showed the
    /// first time it was asked for.
    pub fn initial_target(&self, role: Role, index: usize) -> Option<i64> {
        if let Some(target) = self.targets.borrow().get(&(role, index)) {
            return *target;
        }
        let text = self.stage.text(role, index)?;
        let target = parse_counter_target(&text);
        self.targets.borrow_mut().insert((role, index), target);
        target
    }

    pub fn in_flight(&self) -> usize {
        self.generations.borrow().len()
    }

    fn schedule_frame(self: &Rc<Self>, key: CounterKey, generation: u64, run: CounterRun) {
        let animator = Rc::clone(self);
        self.scheduler.request_frame(Box::new(move |timestamp| {
            animator.tick(key, generation, run, timestamp);
        }));
    }

    fn tick(self: &Rc<Self>, key: CounterKey, generation: u64, run: CounterRun, timestamp: f64) {
        if self.generations.borrow().get(&key) != Some(&generation) {
            return;
        }
        let (role, index) = key;
        let Some(current) = self.stage.text(role, index) else {
            self.finish(key, generation);
            return;
        };
        let (value, progress) = run.sample(timestamp);
        self.stage
            .set_text(role, index, &format_counter(value, &current));
        if progress < 1.0 {
            self.schedule_frame(key, generation, run);
        } else {
            self.finish(key, generation);
        }
    }

    fn finish(&self, key: CounterKey, generation: u64) {
        let mut generations = self.generations.borrow_mut();
        if generations.get(&key) == Some(&generation) {
            generations.remove(&key);
        }
    }
}
