//! Floating button that smooth-scrolls back to the page top.

use leptos::prelude::*;

use crate::state::scroll::ScrollState;
use crate::util::viewport;

/// Appears once the page has been scrolled past the visibility threshold.
#[component]
pub fn BackToTop() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();

    view! {
        <button
            class="back-to-top"
            class:visible=move || scroll.get().back_to_top_visible
            aria-label="Back to top"
            on:click=move |_| viewport::scroll_to_top()
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
