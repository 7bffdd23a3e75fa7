//! Root application component: shared state contexts, window-level event
//! wiring, and the page layout.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::back_to_top::BackToTop;
use crate::components::certificates::CertificatesSection;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::progress_bar::ProgressBar;
use crate::components::projects::ProjectsSection;
use crate::components::skills::SkillsSection;
use crate::components::timeline::TimelineSection;
use crate::state::scroll::ScrollState;
use crate::state::theme::Theme;
use crate::util::theme_store;

/// Root application component.
///
/// Provides the theme and scroll contexts, applies the resolved theme to
/// the document root before first paint, and installs the single window
/// scroll listener that every scroll-driven affordance derives from.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(theme_store::read_preference());
    theme_store::apply(theme.get_untracked());

    let scroll = RwSignal::new(ScrollState::default());

    provide_context(theme);
    provide_context(scroll);

    install_scroll_listener(scroll);

    view! {
        <Title text="System Administrator Portfolio"/>

        <ProgressBar/>
        <Navbar/>
        <main>
            <Hero/>
            <TimelineSection/>
            <ProjectsSection/>
            <CertificatesSection/>
            <SkillsSection/>
        </main>
        <BackToTop/>
    }
}

/// One window `scroll` listener updating the shared [`ScrollState`].
fn install_scroll_listener(scroll: RwSignal<ScrollState>) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        use crate::data;
        use crate::util::viewport;

        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut()>::new(move || {
            let Some((scroll_y, scroll_height, client_height)) = viewport::scroll_metrics()
            else {
                return;
            };
            let ids: Vec<&str> = data::SECTIONS.iter().map(|(id, _)| *id).collect();
            let sections = viewport::section_metrics(&ids);
            scroll.update(|s| s.update(scroll_y, scroll_height, client_height, &sections));
        });
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = scroll;
    }
}
