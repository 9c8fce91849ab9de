#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use folio_core::{
    OverlaySurface, PageIndex, PageSurface, Portfolio, RevealEffect, Role, Scheduler,
    SimulatedScheduler, SiteConfig, Stage,
};

pub struct FakePages {
    present: BTreeSet<u32>,
    active: RefCell<BTreeSet<u32>>,
    links: RefCell<Vec<(Option<String>, bool)>>,
}

impl FakePages {
    /// Pages `1..=total` present, page 1 active, one link per page.
    pub fn new(total: u32) -> Rc<Self> {
        let links = (1..=total)
            .map(|page| (Some(page.to_string()), page == 1))
            .collect();
        Rc::new(Self {
            present: (1..=total).collect(),
            active: RefCell::new(BTreeSet::from([1])),
            links: RefCell::new(links),
        })
    }

    pub fn without_page(total: u32, missing: u32) -> Rc<Self> {
        let pages = Self::new(total);
        let mut present = pages.present.clone();
        present.remove(&missing);
        let active = pages.active.borrow().clone();
        let links = pages.links.borrow().clone();
        Rc::new(Self {
            present,
            active: RefCell::new(active),
            links: RefCell::new(links),
        })
    }

    pub fn push_link(&self, data_page: Option<&str>) {
        self.links
            .borrow_mut()
            .push((data_page.map(str::to_string), false));
    }

    pub fn active_pages(&self) -> Vec<u32> {
        self.active.borrow().iter().copied().collect()
    }

    pub fn active_links(&self) -> Vec<usize> {
        self.links
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, (_, active))| *active)
            .map(|(index, _)| index)
            .collect()
    }
}

impl PageSurface for FakePages {
    fn set_page_active(&self, page: PageIndex, active: bool) {
        if !self.present.contains(&page.get()) {
            return;
        }
        let mut set = self.active.borrow_mut();
        if active {
            set.insert(page.get());
        } else {
            set.remove(&page.get());
        }
    }

    fn nav_link_count(&self) -> usize {
        self.links.borrow().len()
    }

    fn nav_link_page(&self, index: usize) -> Option<String> {
        self.links.borrow().get(index).and_then(|(page, _)| page.clone())
    }

    fn set_nav_link_active(&self, index: usize, active: bool) {
        if let Some(link) = self.links.borrow_mut().get_mut(index) {
            link.1 = active;
        }
    }
}

pub struct FakeOverlay {
    present: bool,
    hidden: Cell<bool>,
    overflow: RefCell<String>,
}

impl FakeOverlay {
    pub fn new() -> Rc<Self> {
        Self::with_overflow("")
    }

    pub fn with_overflow(overflow: &str) -> Rc<Self> {
        Rc::new(Self {
            present: true,
            hidden: Cell::new(true),
            overflow: RefCell::new(overflow.to_string()),
        })
    }

    pub fn missing() -> Rc<Self> {
        Rc::new(Self {
            present: false,
            hidden: Cell::new(true),
            overflow: RefCell::new(String::new()),
        })
    }

    pub fn hidden(&self) -> bool {
        self.hidden.get()
    }

    pub fn overflow(&self) -> String {
        self.overflow.borrow().clone()
    }
}

impl OverlaySurface for FakeOverlay {
    fn is_hidden(&self) -> Option<bool> {
        self.present.then(|| self.hidden.get())
    }

    fn set_hidden(&self, hidden: bool) {
        if self.present {
            self.hidden.set(hidden);
        }
    }

    fn body_overflow(&self) -> String {
        self.overflow.borrow().clone()
    }

    fn set_body_overflow(&self, value: &str) {
        *self.overflow.borrow_mut() = value.to_string();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppliedEffect {
    pub at_ms: f64,
    pub index: usize,
    pub effect: RevealEffect,
}

/// In-memory elements per role. Text writes are recorded with the clock time.
pub struct FakeStage {
    clock: Rc<SimulatedScheduler>,
    texts: RefCell<HashMap<Role, Vec<String>>>,
    counts: RefCell<HashMap<Role, usize>>,
    applied: RefCell<HashMap<Role, Vec<AppliedEffect>>>,
    writes: RefCell<Vec<(Role, usize, String)>>,
}

impl FakeStage {
    pub fn new(clock: Rc<SimulatedScheduler>) -> Rc<Self> {
        Rc::new(Self {
            clock,
            texts: RefCell::new(HashMap::new()),
            counts: RefCell::new(HashMap::new()),
            applied: RefCell::new(HashMap::new()),
            writes: RefCell::new(Vec::new()),
        })
    }

    pub fn with_elements(&self, role: Role, count: usize) {
        self.counts.borrow_mut().insert(role, count);
        self.texts
            .borrow_mut()
            .insert(role, vec![String::new(); count]);
    }

    pub fn with_texts(&self, role: Role, texts: &[&str]) {
        self.counts.borrow_mut().insert(role, texts.len());
        self.texts
            .borrow_mut()
            .insert(role, texts.iter().map(|text| text.to_string()).collect());
    }

    pub fn text_of(&self, role: Role, index: usize) -> String {
        self.texts.borrow()[&role][index].clone()
    }

    pub fn applied(&self, role: Role) -> Vec<AppliedEffect> {
        self.applied.borrow().get(&role).cloned().unwrap_or_default()
    }

    pub fn writes_for(&self, role: Role, index: usize) -> Vec<String> {
        self.writes
            .borrow()
            .iter()
            .filter(|(r, i, _)| *r == role && *i == index)
            .map(|(_, _, text)| text.clone())
            .collect()
    }
}

impl Stage for FakeStage {
    fn count(&self, role: Role) -> usize {
        self.counts.borrow().get(&role).copied().unwrap_or(0)
    }

    fn apply(&self, role: Role, index: usize, effect: &RevealEffect) {
        self.applied
            .borrow_mut()
            .entry(role)
            .or_default()
            .push(AppliedEffect {
                at_ms: self.clock.now(),
                index,
                effect: effect.clone(),
            });
    }

    fn text(&self, role: Role, index: usize) -> Option<String> {
        self.texts.borrow().get(&role)?.get(index).cloned()
    }

    fn set_text(&self, role: Role, index: usize, text: &str) {
        if let Some(slot) = self
            .texts
            .borrow_mut()
            .get_mut(&role)
            .and_then(|texts| texts.get_mut(index))
        {
            *slot = text.to_string();
        }
        self.writes
            .borrow_mut()
            .push((role, index, text.to_string()));
    }
}

pub struct Harness {
    pub clock: Rc<SimulatedScheduler>,
    pub pages: Rc<FakePages>,
    pub overlay: Rc<FakeOverlay>,
    pub stage: Rc<FakeStage>,
    pub portfolio: Portfolio,
}

impl Harness {
    pub fn new() -> Self {
        Self::build(FakePages::new(6), FakeOverlay::new())
    }

    pub fn build(pages: Rc<FakePages>, overlay: Rc<FakeOverlay>) -> Self {
        let clock = Rc::new(SimulatedScheduler::new());
        let stage = FakeStage::new(Rc::clone(&clock));
        let portfolio = Portfolio::new(
            &SiteConfig::default(),
            pages.clone(),
            overlay.clone(),
            stage.clone(),
            clock.clone(),
        );
        Self {
            clock,
            pages,
            overlay,
            stage,
            portfolio,
        }
    }
}
