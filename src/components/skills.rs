//! Skill tag grid with a lift-on-hover effect.

use leptos::prelude::*;

use crate::data;

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="skills-section">
            <h2 class="section-title">"Skills"</h2>
            {data::skill_groups()
                .into_iter()
                .map(|group| {
                    view! {
                        <div class="skill-group">
                            <h3>{group.name}</h3>
                            <div class="skill-tags">
                                {group
                                    .tags
                                    .into_iter()
                                    .map(|tag| view! { <SkillTag label=tag/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
    }
}

/// One skill tag; lifts and grows slightly while hovered.
#[component]
fn SkillTag(label: String) -> impl IntoView {
    view! {
        <span class="skill-tag" on:mouseenter=on_hover_in on:mouseleave=on_hover_out>
            {label}
        </span>
    }
}

fn on_hover_in(ev: leptos::ev::MouseEvent) {
    #[cfg(feature = "csr")]
    set_transform(&ev, "translateY(-5px) scale(1.05)");
    #[cfg(not(feature = "csr"))]
    let _ = ev;
}

fn on_hover_out(ev: leptos::ev::MouseEvent) {
    #[cfg(feature = "csr")]
    set_transform(&ev, "translateY(0) scale(1)");
    #[cfg(not(feature = "csr"))]
    let _ = ev;
}

#[cfg(feature = "csr")]
fn set_transform(ev: &leptos::ev::MouseEvent, transform: &str) {
    use wasm_bindgen::JsCast;

    let Some(el) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok()) else {
        return;
    };
    let _ = el.style().set_property("transform", transform);
}
