//! View bindings the controllers talk to. The browser crate implements these over
//! `web-sys` elements; tests implement them in memory.

use crate::page::PageIndex;

pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAV_LINK_PAGE_ATTR: &str = "data-page";

pub trait PageSurface {
    /// Missing page containers are ignored.
    fn set_page_active(&self, page: PageIndex, active: bool);
    fn nav_link_count(&self) -> usize;
    /// Raw `data-page` value of the link at `index`.
    fn nav_link_page(&self, index: usize) -> Option<String>;
    fn set_nav_link_active(&self, index: usize, active: bool);
}

pub trait OverlaySurface {
    /// `None` when the overlay element is not in the document.
    fn is_hidden(&self) -> Option<bool>;
    fn set_hidden(&self, hidden: bool);
    fn body_overflow(&self) -> String;
    fn set_body_overflow(&self, value: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    FloatingCard,
    StatNumber,
    ProjectCard,
    TimelineItem,
    SkillProgress,
    ContactItem,
}

impl Role {
    pub fn selector(self) -> &'static str {
        match self {
            Role::FloatingCard => ".floating-card",
            Role::StatNumber => ".stat-number",
            Role::ProjectCard => ".project-card",
            Role::TimelineItem => ".timeline-item",
            Role::SkillProgress => ".skill-progress",
            Role::ContactItem => ".contact-item, .social-link",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealEffect {
    /// Reset the element's CSS animation and start the float loop again, offset by
    /// `delay_ms`.
    RestartFloat { delay_ms: u32 },
    /// Move the element to `transform` and make it fully opaque.
    Settle { transform: &'static str },
    /// Collapse the inline width to zero and restore it so the bar grows again.
    ReplayWidth,
}

impl RevealEffect {
    pub fn float_animation(delay_ms: u32) -> String {
        let delay_s = f64::from(delay_ms) / 1000.0;
        format!("float 6s ease-in-out infinite {delay_s}s")
    }
}

pub trait Stage {
    fn count(&self, role: Role) -> usize;
    fn apply(&self, role: Role, index: usize, effect: &RevealEffect);
    fn text(&self, role: Role, index: usize) -> Option<String>;
    fn set_text(&self, role: Role, index: usize, text: &str);
}
