//! Experience timeline with a staggered slide-in on first visibility.

use leptos::prelude::*;

use crate::data;

/// Visibility ratio at which a timeline item animates in.
#[cfg(feature = "csr")]
const REVEAL_THRESHOLD: f64 = 0.2;

/// Per-item stagger applied to the reveal transition, in seconds.
#[cfg(feature = "csr")]
const REVEAL_STAGGER_S: f64 = 0.2;

#[component]
pub fn TimelineSection() -> impl IntoView {
    view! {
        <section id="experience" class="timeline-section">
            <h2 class="section-title">"Experience"</h2>
            <div class="timeline">
                {data::timeline()
                    .into_iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let index = u32::try_from(index).unwrap_or(0);
                        view! { <TimelineItem entry=entry index=index/> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// One timeline card. Starts shifted and transparent, then slides in the
/// first time it reaches the reveal threshold; the observer fires once and
/// unsubscribes.
#[component]
fn TimelineItem(entry: data::TimelineEntry, index: u32) -> impl IntoView {
    let item_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        let Some(el) = item_ref.get() else {
            return;
        };
        let style = el.style();
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("transform", "translateX(-30px)");
        let _ = style.set_property("transition", "opacity 0.6s ease, transform 0.6s ease");
        let _ = style
            .set_property("transition-delay", &format!("{}s", f64::from(index) * REVEAL_STAGGER_S));

        let target = el.clone();
        crate::util::observer::observe_once(&el, REVEAL_THRESHOLD, move || {
            let style = target.style();
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("transform", "translateX(0)");
        });
    });
    #[cfg(not(feature = "csr"))]
    let _ = index;

    view! {
        <div class="timeline-item" node_ref=item_ref>
            <span class="timeline-period">{entry.period}</span>
            <h3>{entry.role}</h3>
            <p class="timeline-company">{entry.company}</p>
            <p>{entry.summary}</p>
        </div>
    }
}
