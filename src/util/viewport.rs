//! Window and document geometry reads plus smooth-scroll helpers.

#[cfg(feature = "csr")]
use crate::state::scroll::SectionMetrics;

/// Current scroll offset, full document scroll height, and visible height.
#[cfg(feature = "csr")]
pub fn scroll_metrics() -> Option<(f64, f64, f64)> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let scroll_y = window.scroll_y().ok()?;
    Some((scroll_y, f64::from(root.scroll_height()), f64::from(root.client_height())))
}

/// Measured top edge of every listed section that exists in the document,
/// in the given order. Missing sections are skipped.
#[cfg(feature = "csr")]
pub fn section_metrics(ids: &[&str]) -> Vec<SectionMetrics> {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    ids.iter()
        .filter_map(|&id| {
            let el = document.get_element_by_id(id)?;
            let el = el.dyn_into::<web_sys::HtmlElement>().ok()?;
            Some(SectionMetrics { id: id.to_owned(), top: f64::from(el.offset_top()) })
        })
        .collect()
}

/// Smooth-scroll the viewport back to the top.
pub fn scroll_to_top() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Smooth-scroll the element with `id` to the top of the viewport.
/// Missing elements are ignored.
pub fn scroll_section_into_view(id: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}
