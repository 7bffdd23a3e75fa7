//! Paginated project grid with previous/next controls and a page indicator.

use leptos::prelude::*;

use crate::data;
use crate::state::pagination::PaginationState;

/// Delay before scrolling back to the section top after a page switch,
/// letting the hide/show reflow settle first.
#[cfg(feature = "csr")]
const SCROLL_SETTLE_MS: u32 = 100;

/// Projects section: one fixed partition of project cards visible at a
/// time, with boundary-safe navigation controls.
#[component]
pub fn ProjectsSection() -> impl IntoView {
    let pages = data::project_pages();
    let pagination = RwSignal::new(PaginationState::new(pages.len()));
    let page_count = pages.len();

    let on_previous = move |_| {
        let mut changed = false;
        pagination.update(|s| changed = s.previous());
        if changed {
            after_page_change(pagination.get_untracked());
        }
    };
    let on_next = move |_| {
        let mut changed = false;
        pagination.update(|s| changed = s.next());
        if changed {
            after_page_change(pagination.get_untracked());
        }
    };

    view! {
        <section id="projects" class="projects-section">
            <h2 class="section-title">"Projects"</h2>

            {pages
                .iter()
                .enumerate()
                .map(|(index, page)| {
                    let page_number = index + 1;
                    view! {
                        <div
                            class="projects-page"
                            class:active=move || pagination.get().is_current(page_number)
                        >
                            {page
                                .iter()
                                .cloned()
                                .map(|project| view! { <ProjectCard project=project/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                })
                .collect::<Vec<_>>()}

            {(page_count > 0)
                .then(|| {
                    view! {
                        <div class="pagination-controls">
                            <button
                                class="pagination-btn"
                                disabled=move || pagination.get().prev_disabled()
                                style:opacity=move || {
                                    PaginationState::control_opacity(
                                        pagination.get().prev_disabled(),
                                    )
                                }
                                on:click=on_previous
                            >
                                "\u{2190} Previous"
                            </button>
                            <span class="page-indicator">
                                <span class="current-page">
                                    {move || pagination.get().current_page()}
                                </span>
                                " / "
                                <span class="total-pages">{page_count}</span>
                            </span>
                            <button
                                class="pagination-btn"
                                disabled=move || pagination.get().next_disabled()
                                style:opacity=move || {
                                    PaginationState::control_opacity(
                                        pagination.get().next_disabled(),
                                    )
                                }
                                on:click=on_next
                            >
                                "Next \u{2192}"
                            </button>
                        </div>
                    }
                })}
        </section>
    }
}

/// One project card.
#[component]
fn ProjectCard(project: data::Project) -> impl IntoView {
    view! {
        <article class="project-card">
            <h3>{project.title}</h3>
            <p>{project.description}</p>
            <div class="project-tags">
                {project
                    .tags
                    .into_iter()
                    .map(|tag| view! { <span class="project-tag">{tag}</span> })
                    .collect::<Vec<_>>()}
            </div>
        </article>
    }
}

/// Pages past the first scroll the section heading back into view once the
/// reflow settles; returning to page 1 leaves the viewport alone.
fn after_page_change(state: PaginationState) {
    #[cfg(feature = "csr")]
    {
        if state.current_page() > 1 {
            gloo_timers::callback::Timeout::new(SCROLL_SETTLE_MS, || {
                crate::util::viewport::scroll_section_into_view("projects");
            })
            .forget();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = state;
    }
}
