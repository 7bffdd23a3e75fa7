//! Decorative bubble field behind the hero section.
//!
//! The pool is generated once at mount, regenerated wholesale after a
//! debounced window resize, and retinted shortly after every theme flip.
//! Hover and click effects are transient inline-style changes only; they
//! never touch the pool state.

use leptos::prelude::*;

use crate::state::bubbles::BubbleField;
use crate::state::theme::Theme;

#[component]
pub fn Bubbles() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let field = RwSignal::new(BubbleField::default());

    #[cfg(feature = "csr")]
    install_triggers(field, theme);
    #[cfg(not(feature = "csr"))]
    let _ = theme;

    view! {
        <div class="bubbles">
            {move || {
                field
                    .get()
                    .bubbles
                    .into_iter()
                    .map(|bubble| {
                        view! {
                            <div
                                class=format!("bubble {}", bubble.size.class_name())
                                style:left=format!("{}%", bubble.pos_x)
                                style:top=format!("{}%", bubble.pos_y)
                                style:animation-delay=format!("{}s", bubble.delay_s)
                                style:animation-duration=format!("{}s", bubble.duration_s)
                                style:background=bubble.background().unwrap_or_default()
                                style:box-shadow=bubble.box_shadow().unwrap_or_default()
                                on:mouseenter=on_hover_in
                                on:mouseleave=on_hover_out
                                on:click=on_pop
                            ></div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Initial pool plus the two regeneration triggers (resize, theme flip).
#[cfg(feature = "csr")]
fn install_triggers(field: RwSignal<BubbleField>, theme: RwSignal<Theme>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::state::bubbles::{BUBBLE_COUNT, RESIZE_DEBOUNCE_MS, RETINT_DELAY_MS};
    use crate::util::debounce::Debounce;

    let regenerate = move || {
        let current = theme.get_untracked();
        field.set(BubbleField::generate(BUBBLE_COUNT, current, &mut js_sys::Math::random));
        log::debug!("bubble field regenerated");
    };

    regenerate();

    // Window resize: rebuild the pool once the drag goes quiet.
    if let Some(window) = web_sys::window() {
        let mut debounce = Debounce::new();
        let closure = Closure::<dyn FnMut()>::new(move || {
            debounce.schedule(RESIZE_DEBOUNCE_MS, regenerate);
        });
        let _ =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Theme flips: retint the existing pool once the root attribute change
    // has propagated. The first effect run only records the starting theme.
    let mut retint_delay = Debounce::new();
    Effect::new(move |prev: Option<Theme>| {
        let next = theme.get();
        if prev.is_some_and(|p| p != next) {
            retint_delay.schedule(RETINT_DELAY_MS, move || {
                field.update(|f| f.retint(next, &mut js_sys::Math::random));
            });
        }
        next
    });
}

fn on_hover_in(ev: leptos::ev::MouseEvent) {
    #[cfg(feature = "csr")]
    set_transient_style(&ev, "0.6", "scale(1.2)");
    #[cfg(not(feature = "csr"))]
    let _ = ev;
}

fn on_hover_out(ev: leptos::ev::MouseEvent) {
    #[cfg(feature = "csr")]
    set_transient_style(&ev, "0.3", "scale(1)");
    #[cfg(not(feature = "csr"))]
    let _ = ev;
}

/// One-shot randomized translate-and-scale "pop" that reverts on a timer.
fn on_pop(ev: leptos::ev::MouseEvent) {
    #[cfg(feature = "csr")]
    {
        use crate::state::bubbles::{POP_REVERT_MS, pop_transform};

        let Some(el) = event_element(&ev) else {
            return;
        };
        let transform = pop_transform(js_sys::Math::random(), js_sys::Math::random());
        let style = el.style();
        let _ = style.set_property("transform", &transform);
        let _ = style.set_property("opacity", "0.8");

        gloo_timers::callback::Timeout::new(POP_REVERT_MS, move || {
            let style = el.style();
            let _ = style.remove_property("transform");
            let _ = style.set_property("opacity", "0.3");
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    let _ = ev;
}

#[cfg(feature = "csr")]
fn set_transient_style(ev: &leptos::ev::MouseEvent, opacity: &str, transform: &str) {
    let Some(el) = event_element(ev) else {
        return;
    };
    let style = el.style();
    let _ = style.set_property("opacity", opacity);
    let _ = style.set_property("transform", transform);
}

#[cfg(feature = "csr")]
fn event_element(ev: &leptos::ev::MouseEvent) -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;

    ev.target()?.dyn_into::<web_sys::HtmlElement>().ok()
}
