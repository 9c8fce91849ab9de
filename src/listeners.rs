use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent, Node};

use folio_core::overlay::{OVERLAY_CLOSE_ID, OVERLAY_ID, OVERLAY_TOGGLE_ID};
use folio_core::surface::{NAV_LINK_PAGE_ATTR, NAV_LINK_SELECTOR};
use folio_core::{Portfolio, IN_PAGE_ANCHOR_SELECTOR};

fn cancelable() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    }
}

/// Element the event started on, stepping out of text nodes.
fn event_element(event: &Event) -> Option<Element> {
    let node = event.target()?.dyn_into::<Node>().ok()?;
    match node.dyn_ref::<Element>() {
        Some(element) => Some(element.clone()),
        None => node.parent_element(),
    }
}

pub(crate) fn install_navigation(
    document: &Document,
    portfolio: &Rc<Portfolio>,
) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    if let Ok(links) = document.query_selector_all(NAV_LINK_SELECTOR) {
        for index in 0..links.length() {
            let Some(link) = links.item(index).and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            let portfolio = Rc::clone(portfolio);
            let target = link.clone();
            let listener =
                EventListener::new_with_options(&link, "click", cancelable(), move |event| {
                    event.prevent_default();
                    let data_page = target.get_attribute(NAV_LINK_PAGE_ATTR);
                    portfolio.handle_nav_link(data_page.as_deref());
                });
            listeners.push(listener);
        }
    }

    let portfolio = Rc::clone(portfolio);
    let listener = EventListener::new(document, "keydown", move |event: &Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        portfolio.handle_key(&event.key());
    });
    listeners.push(listener);
    listeners
}

pub(crate) fn install_overlay(
    document: &Document,
    portfolio: &Rc<Portfolio>,
) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    if let Some(toggle) = document.get_element_by_id(OVERLAY_TOGGLE_ID) {
        let portfolio = Rc::clone(portfolio);
        listeners.push(EventListener::new(&toggle, "click", move |_event| {
            portfolio.open_overlay();
        }));
    }
    if let Some(close) = document.get_element_by_id(OVERLAY_CLOSE_ID) {
        let portfolio = Rc::clone(portfolio);
        listeners.push(EventListener::new(&close, "click", move |_event| {
            portfolio.close_overlay();
        }));
    }
    if let Some(overlay) = document.get_element_by_id(OVERLAY_ID) {
        let portfolio = Rc::clone(portfolio);
        let backdrop = overlay.clone();
        listeners.push(EventListener::new(&overlay, "click", move |event| {
            let on_backdrop = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .is_some_and(|target| target == backdrop);
            portfolio.handle_backdrop_click(on_backdrop);
        }));
    }
    listeners
}

pub(crate) fn install_anchor_router(
    document: &Document,
    portfolio: &Rc<Portfolio>,
) -> EventListener {
    let portfolio = Rc::clone(portfolio);
    EventListener::new_with_options(document, "click", cancelable(), move |event| {
        let Some(origin) = event_element(event) else {
            return;
        };
        let Ok(Some(anchor)) = origin.closest(IN_PAGE_ANCHOR_SELECTOR) else {
            return;
        };
        let href = anchor.get_attribute("href").unwrap_or_default();
        if portfolio.handle_anchor(&href) {
            event.prevent_default();
        }
    })
}
