use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use folio_core::surface::{ACTIVE_CLASS, HIDDEN_CLASS, NAV_LINK_PAGE_ATTR, NAV_LINK_SELECTOR};
use folio_core::{OverlaySurface, PageIndex, PageSurface, RevealEffect, Role, Stage};

fn nth_match(document: &Document, selector: &str, index: usize) -> Option<Element> {
    let list = document.query_selector_all(selector).ok()?;
    let index = u32::try_from(index).ok()?;
    list.item(index)?.dyn_into::<Element>().ok()
}

fn match_count(document: &Document, selector: &str) -> usize {
    document
        .query_selector_all(selector)
        .map(|list| list.length() as usize)
        .unwrap_or(0)
}

fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let _ = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
}

/// Forces a style flush so a following style write starts a fresh transition.
fn reflow(element: &HtmlElement) {
    let _ = element.offset_height();
}

pub(crate) struct DomPages {
    document: Document,
}

impl DomPages {
    pub(crate) fn new(document: Document) -> Self {
        Self { document }
    }
}

impl PageSurface for DomPages {
    fn set_page_active(&self, page: PageIndex, active: bool) {
        let Some(element) = self.document.get_element_by_id(&page.element_id()) else {
            return;
        };
        set_class(&element, ACTIVE_CLASS, active);
    }

    fn nav_link_count(&self) -> usize {
        match_count(&self.document, NAV_LINK_SELECTOR)
    }

    fn nav_link_page(&self, index: usize) -> Option<String> {
        nth_match(&self.document, NAV_LINK_SELECTOR, index)?.get_attribute(NAV_LINK_PAGE_ATTR)
    }

    fn set_nav_link_active(&self, index: usize, active: bool) {
        if let Some(link) = nth_match(&self.document, NAV_LINK_SELECTOR, index) {
            set_class(&link, ACTIVE_CLASS, active);
        }
    }
}

pub(crate) struct DomOverlay {
    document: Document,
    overlay_id: &'static str,
}

impl DomOverlay {
    pub(crate) fn new(document: Document, overlay_id: &'static str) -> Self {
        Self {
            document,
            overlay_id,
        }
    }

    fn overlay(&self) -> Option<Element> {
        self.document.get_element_by_id(self.overlay_id)
    }
}

impl OverlaySurface for DomOverlay {
    fn is_hidden(&self) -> Option<bool> {
        Some(self.overlay()?.class_list().contains(HIDDEN_CLASS))
    }

    fn set_hidden(&self, hidden: bool) {
        if let Some(overlay) = self.overlay() {
            set_class(&overlay, HIDDEN_CLASS, hidden);
        }
    }

    fn body_overflow(&self) -> String {
        self.document
            .body()
            .and_then(|body| body.style().get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    fn set_body_overflow(&self, value: &str) {
        let Some(body) = self.document.body() else {
            return;
        };
        let _ = body.style().set_property("overflow", value);
    }
}

pub(crate) struct DomStage {
    document: Document,
}

impl DomStage {
    pub(crate) fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, role: Role, index: usize) -> Option<HtmlElement> {
        nth_match(&self.document, role.selector(), index)?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl Stage for DomStage {
    fn count(&self, role: Role) -> usize {
        match_count(&self.document, role.selector())
    }

    fn apply(&self, role: Role, index: usize, effect: &RevealEffect) {
        let Some(element) = self.element(role, index) else {
            return;
        };
        let style = element.style();
        match effect {
            RevealEffect::RestartFloat { delay_ms } => {
                let _ = style.set_property("animation", "none");
                reflow(&element);
                let _ = style.set_property("animation", &RevealEffect::float_animation(*delay_ms));
            }
            RevealEffect::Settle { transform } => {
                let _ = style.set_property("transform", transform);
                let _ = style.set_property("opacity", "1");
            }
            RevealEffect::ReplayWidth => {
                let width = style.get_property_value("width").unwrap_or_default();
                let _ = style.set_property("width", "0%");
                reflow(&element);
                let _ = style.set_property("width", &width);
            }
        }
    }

    fn text(&self, role: Role, index: usize) -> Option<String> {
        nth_match(&self.document, role.selector(), index)?.text_content()
    }

    fn set_text(&self, role: Role, index: usize, text: &str) {
        if let Some(element) = nth_match(&self.document, role.selector(), index) {
            element.set_text_content(Some(text));
        }
    }
}
