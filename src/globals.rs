use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

use folio_core::{parse_int_prefix, Portfolio};

pub(crate) const NAVIGATE_FN: &str = "navigateToPage";
pub(crate) const OPEN_OVERLAY_FN: &str = "openPDF";
pub(crate) const CLOSE_OVERLAY_FN: &str = "closePDF";

/// Page number handed in from markup: integral numbers or numeric strings.
fn page_argument(value: &JsValue) -> Option<i64> {
    if let Some(number) = value.as_f64() {
        if number.is_finite() && number.fract() == 0.0 {
            return Some(number as i64);
        }
        return None;
    }
    value.as_string().as_deref().and_then(parse_int_prefix)
}

fn publish(window: &web_sys::Window, name: &str, callback: Closure<dyn FnMut(JsValue)>) {
    let _ = Reflect::set(window, &JsValue::from_str(name), callback.as_ref());
    callback.forget();
}

/// Exposes navigation and the overlay on `window` for inline handlers in the markup.
pub(crate) fn install(portfolio: &Rc<Portfolio>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let target = Rc::clone(portfolio);
    publish(
        &window,
        NAVIGATE_FN,
        Closure::<dyn FnMut(JsValue)>::wrap(Box::new(move |page: JsValue| {
            if let Some(page) = page_argument(&page) {
                target.go_to_page(page);
            }
        })),
    );

    let target = Rc::clone(portfolio);
    publish(
        &window,
        OPEN_OVERLAY_FN,
        Closure::<dyn FnMut(JsValue)>::wrap(Box::new(move |_: JsValue| target.open_overlay())),
    );

    let target = Rc::clone(portfolio);
    publish(
        &window,
        CLOSE_OVERLAY_FN,
        Closure::<dyn FnMut(JsValue)>::wrap(Box::new(move |_: JsValue| target.close_overlay())),
    );
}
