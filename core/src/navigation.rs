use std::cell::Cell;
use std::rc::Rc;

use crate::page::{parse_int_prefix, PageIndex};
use crate::surface::PageSurface;

pub const KEY_PREVIOUS: &str = "ArrowLeft";
pub const KEY_NEXT: &str = "ArrowRight";

/// Owns the current page and keeps page containers and navigation links in step with it.
pub struct Navigator {
    surface: Rc<dyn PageSurface>,
    total: u32,
    current: Cell<PageIndex>,
}

impl Navigator {
    pub fn new(surface: Rc<dyn PageSurface>, total: u32) -> Self {
        Self {
            surface,
            total: total.max(1),
            current: Cell::new(PageIndex::FIRST),
        }
    }

    pub fn current(&self) -> PageIndex {
        self.current.get()
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Shows `target` and returns it, or returns `None` without touching anything when
    /// `target` is outside `1..=total`.
    pub fn go_to(&self, target: i64) -> Option<PageIndex> {
        let next = PageIndex::new(target, self.total).ok()?;
        let previous = self.current.get();
        self.surface.set_page_active(previous, false);
        self.surface.set_page_active(next, true);
        self.sync_links(next);
        self.current.set(next);
        Some(next)
    }

    /// Page an arrow key asks for. No wraparound at either end.
    pub fn key_target(&self, key: &str) -> Option<i64> {
        let current = self.current.get();
        let target = match key {
            KEY_PREVIOUS => current.prev()?,
            KEY_NEXT => current.next(self.total)?,
            _ => return None,
        };
        Some(i64::from(target.get()))
    }

    fn sync_links(&self, active: PageIndex) {
        let active = i64::from(active.get());
        for index in 0..self.surface.nav_link_count() {
            let link_page = self
                .surface
                .nav_link_page(index)
                .and_then(|raw| parse_int_prefix(&raw));
            self.surface
                .set_nav_link_active(index, link_page == Some(active));
        }
    }
}
