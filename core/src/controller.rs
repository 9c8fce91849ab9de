use std::rc::Rc;

use crate::animation::AnimationTrigger;
use crate::config::SiteConfig;
use crate::navigation::Navigator;
use crate::overlay::{Overlay, KEY_CLOSE};
use crate::page::{parse_int_prefix, PageIndex};
use crate::router::{route_anchor, AnchorRoute};
use crate::schedule::Scheduler;
use crate::surface::{OverlaySurface, PageSurface, Stage};

/// Everything the page reacts to, routed through one owner of the page index.
pub struct Portfolio {
    navigator: Navigator,
    overlay: Overlay,
    animations: AnimationTrigger,
}

impl Portfolio {
    pub fn new(
        config: &SiteConfig,
        pages: Rc<dyn PageSurface>,
        overlay: Rc<dyn OverlaySurface>,
        stage: Rc<dyn Stage>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        Self {
            navigator: Navigator::new(pages, config.total_pages),
            overlay: Overlay::new(overlay),
            animations: AnimationTrigger::new(stage, scheduler, config.counter_duration_ms),
        }
    }

    pub fn current_page(&self) -> PageIndex {
        self.navigator.current()
    }

    pub fn total_pages(&self) -> u32 {
        self.navigator.total()
    }

    pub fn animations(&self) -> &AnimationTrigger {
        &self.animations
    }

    /// Out-of-range targets are ignored.
    pub fn go_to_page(&self, target: i64) {
        if let Some(page) = self.navigator.go_to(target) {
            self.animations.on_page_shown(page.get());
        }
    }

    pub fn open_overlay(&self) {
        self.overlay.open();
    }

    pub fn close_overlay(&self) {
        self.overlay.close();
    }

    pub fn overlay_open(&self) -> bool {
        self.overlay.is_open()
    }

    pub fn handle_key(&self, key: &str) {
        if let Some(target) = self.navigator.key_target(key) {
            self.go_to_page(target);
        }
        if key == KEY_CLOSE {
            self.overlay.on_escape();
        }
    }

    /// Click on a navigation link carrying `data-page`.
    pub fn handle_nav_link(&self, data_page: Option<&str>) {
        if let Some(target) = data_page.and_then(parse_int_prefix) {
            self.go_to_page(target);
        }
    }

    /// Click inside an in-page anchor. Returns true when the browser's own jump must be
    /// suppressed.
    pub fn handle_anchor(&self, href: &str) -> bool {
        let route = route_anchor(href);
        if let AnchorRoute::Page(Some(target)) = route {
            self.go_to_page(target);
        }
        route.suppresses_default()
    }

    pub fn handle_backdrop_click(&self, on_backdrop: bool) {
        self.overlay.on_backdrop_click(on_backdrop);
    }
}
