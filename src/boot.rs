use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use js_sys::Date;
use web_sys::Document;

use folio_core::overlay::OVERLAY_ID;
use folio_core::{Portfolio, RevealOptions, Scheduler};

use crate::dom::{DomOverlay, DomPages, DomStage};
use crate::listeners;
use crate::reveal::RevealWatcher;
use crate::scheduler::BrowserScheduler;
use crate::site_config::load_site_config;
use crate::globals;

const YEAR_ID: &str = "year";
const READY_STATE_LOADING: &str = "loading";

thread_local! {
    static PORTFOLIO: RefCell<Option<Rc<Portfolio>>> = RefCell::new(None);
    static LISTENERS: RefCell<Vec<EventListener>> = RefCell::new(Vec::new());
    static WATCHERS: RefCell<Vec<RevealWatcher>> = RefCell::new(Vec::new());
}

/// Runs `initialize` once the document has been parsed.
pub(crate) fn start() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    when_parsed(&document, &document.ready_state(), || {
        let _ = initialize();
    });
}

/// Runs `init` now, or on `DOMContentLoaded` while `ready_state` is still `loading`.
pub(crate) fn when_parsed<F>(document: &Document, ready_state: &str, init: F)
where
    F: FnOnce() + 'static,
{
    if ready_state == READY_STATE_LOADING {
        let listener = EventListener::once(document, "DOMContentLoaded", move |_event| init());
        keep_listeners(vec![listener]);
    } else {
        init();
    }
}

/// Wires every listener against the current document. Calling it again wires a second
/// full set; the newest controller backs the `window` accessors.
pub(crate) fn initialize() -> Option<Rc<Portfolio>> {
    let document = web_sys::window()?.document()?;
    let config = load_site_config(&document);
    set_footer_year(&document);

    let scheduler: Rc<dyn Scheduler> = Rc::new(BrowserScheduler::new());
    let portfolio = Rc::new(Portfolio::new(
        &config,
        Rc::new(DomPages::new(document.clone())),
        Rc::new(DomOverlay::new(document.clone(), OVERLAY_ID)),
        Rc::new(DomStage::new(document.clone())),
        scheduler,
    ));

    let mut wired = listeners::install_navigation(&document, &portfolio);
    wired.extend(listeners::install_overlay(&document, &portfolio));
    wired.push(listeners::install_anchor_router(&document, &portfolio));
    let listener_count = wired.len();
    keep_listeners(wired);

    let watcher = RevealWatcher::arm(&document, &RevealOptions::from_config(&config));
    let watching = watcher.is_some();
    if let Some(watcher) = watcher {
        WATCHERS.with(|slot| slot.borrow_mut().push(watcher));
    }

    globals::install(&portfolio);
    PORTFOLIO.with(|slot| {
        *slot.borrow_mut() = Some(Rc::clone(&portfolio));
    });

    if config.verbose {
        gloo::console::log!(
            "folio: ready",
            portfolio.total_pages(),
            listener_count,
            watching
        );
    }
    Some(portfolio)
}

#[cfg(test)]
pub(crate) fn portfolio() -> Option<Rc<Portfolio>> {
    PORTFOLIO.with(|slot| slot.borrow().clone())
}

fn keep_listeners(listeners: Vec<EventListener>) {
    LISTENERS.with(|slot| slot.borrow_mut().extend(listeners));
}

fn set_footer_year(document: &Document) {
    let Some(year) = document.get_element_by_id(YEAR_ID) else {
        return;
    };
    let current = Date::new_0().get_full_year();
    year.set_text_content(Some(&current.to_string()));
}
