//! Thin bar tracking how far the page has been scrolled.

use leptos::prelude::*;

use crate::state::scroll::ScrollState;

#[component]
pub fn ProgressBar() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();

    view! {
        <div
            class="progress-bar"
            style:width=move || format!("{}%", scroll.get().progress_pct)
        ></div>
    }
}
