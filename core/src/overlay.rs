use std::cell::RefCell;
use std::rc::Rc;

use crate::surface::OverlaySurface;

pub const OVERLAY_ID: &str = "pdf-overlay";
pub const OVERLAY_TOGGLE_ID: &str = "pdf-toggle";
pub const OVERLAY_CLOSE_ID: &str = "close-pdf";
pub const KEY_CLOSE: &str = "Escape";

const SCROLL_LOCKED: &str = "hidden";
const SCROLL_FALLBACK: &str = "auto";

/// Document overlay with background scroll lock.
///
/// Open and close are idempotent. The body overflow seen on the first open from a
/// closed state is what close puts back.
pub struct Overlay {
    surface: Rc<dyn OverlaySurface>,
    saved_overflow: RefCell<Option<String>>,
}

impl Overlay {
    pub fn new(surface: Rc<dyn OverlaySurface>) -> Self {
        Self {
            surface,
            saved_overflow: RefCell::new(None),
        }
    }

    pub fn is_open(&self) -> bool {
        self.surface.is_hidden() == Some(false)
    }

    pub fn open(&self) {
        let Some(hidden) = self.surface.is_hidden() else {
            return;
        };
        {
            let mut saved = self.saved_overflow.borrow_mut();
            if hidden && saved.is_none() {
                *saved = Some(self.surface.body_overflow());
            }
        }
        self.surface.set_hidden(false);
        self.surface.set_body_overflow(SCROLL_LOCKED);
    }

    pub fn close(&self) {
        if self.surface.is_hidden().is_none() {
            return;
        }
        self.surface.set_hidden(true);
        let restore = self
            .saved_overflow
            .borrow_mut()
            .take()
            .unwrap_or_else(|| SCROLL_FALLBACK.to_string());
        self.surface.set_body_overflow(&restore);
    }

    pub fn on_escape(&self) {
        if self.is_open() {
            self.close();
        }
    }

    /// `on_backdrop` is true only when the click landed on the overlay element itself,
    /// not on anything inside it.
    pub fn on_backdrop_click(&self, on_backdrop: bool) {
        if on_backdrop {
            self.close();
        }
    }
}
