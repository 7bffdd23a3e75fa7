//! One-shot visibility observation.
//!
//! Wraps `IntersectionObserver` for elements that trigger an effect the
//! first time they scroll into view and never again.

/// Invoke `on_visible` the first time `el` reaches `threshold` visibility.
///
/// The observer unobserves the element and disconnects after firing; if the
/// observer cannot be constructed the element simply never animates
/// (guard-and-skip). The backing closure lives for the page lifetime.
#[cfg(feature = "csr")]
pub fn observe_once(el: &web_sys::Element, threshold: f64, on_visible: impl FnOnce() + 'static) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    let callback = std::cell::Cell::new(Some(Box::new(on_visible) as Box<dyn FnOnce()>));
    let target = el.clone();
    let closure = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .unchecked_into::<web_sys::IntersectionObserverEntry>()
                    .is_intersecting()
            });
            if !intersecting {
                return;
            }
            observer.unobserve(&target);
            observer.disconnect();
            if let Some(f) = callback.take() {
                f();
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
        closure.as_ref().unchecked_ref(),
        &options,
    ) else {
        return;
    };
    observer.observe(el);
    closure.forget();
}
