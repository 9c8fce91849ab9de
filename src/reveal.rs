use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use folio_core::{RevealOptions, RevealTracker, REVEAL_CLASS, REVEAL_SELECTOR};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Viewport watcher that marks each card with `animate-in` the first time it is seen.
pub(crate) struct RevealWatcher {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
    tracker: Rc<RefCell<RevealTracker<usize>>>,
}

impl RevealWatcher {
    /// Returns `None` when the browser refuses to build the observer.
    pub(crate) fn arm(document: &Document, options: &RevealOptions) -> Option<Self> {
        let elements = collect_targets(document);
        let tracker = Rc::new(RefCell::new(RevealTracker::new()));
        let callback_tracker = Rc::clone(&tracker);
        let callback_elements = elements.clone();
        let callback = ObserverCallback::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(index) = callback_elements.iter().position(|el| *el == target) else {
                        continue;
                    };
                    if callback_tracker
                        .borrow_mut()
                        .observe(index, entry.is_intersecting())
                    {
                        let _ = target.class_list().add_1(REVEAL_CLASS);
                        observer.unobserve(&target);
                    }
                }
            },
        ));

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        for element in &elements {
            observer.observe(element);
        }
        Some(Self {
            observer,
            _callback: callback,
            tracker,
        })
    }

    #[cfg(test)]
    pub(crate) fn revealed(&self) -> usize {
        self.tracker.borrow().len()
    }

    #[cfg(test)]
    pub(crate) fn observer(&self) -> &IntersectionObserver {
        &self.observer
    }
}

impl Drop for RevealWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn collect_targets(document: &Document) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(REVEAL_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
