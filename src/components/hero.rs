//! Hero section: terminal with typing effect and a preloaded background
//! image that degrades to a themed gradient.

use leptos::prelude::*;

use crate::components::bubbles::Bubbles;
use crate::data;
use crate::state::hero::{self, BackgroundImage, Typewriter};
use crate::state::theme::Theme;

#[component]
pub fn Hero() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let background = RwSignal::new(BackgroundImage::default());
    let typed = RwSignal::new(Typewriter::new(data::TERMINAL_OUTPUT));

    let terminal_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        preload_background(background);
        start_typing_when_visible(terminal_ref, typed);
    }

    view! {
        <section id="home" class="hero">
            <div class="hero-bg">
                {move || {
                    (background.get() == BackgroundImage::Failed)
                        .then(|| {
                            view! {
                                <div
                                    class="hero-bg-fallback"
                                    style:background=move || hero::fallback_gradient(theme.get())
                                ></div>
                            }
                        })
                }}
                <div
                    class="hero-bg-image"
                    style:background-image=format!("url('{}')", data::HERO_BACKGROUND_URL)
                    style:transition="opacity 1s ease"
                    style:opacity=move || {
                        hero::image_opacity(background.get(), theme.get()).to_string()
                    }
                ></div>
                <Bubbles/>
            </div>

            <div class="hero-content">
                <h1>"Adi Pratama"</h1>
                <p class="hero-subtitle">"System Administrator"</p>

                <div class="hero-terminal" node_ref=terminal_ref>
                    <div class="terminal-header">
                        <span class="terminal-dot"></span>
                        <span class="terminal-dot"></span>
                        <span class="terminal-dot"></span>
                    </div>
                    <pre class="terminal-output">{move || typed.get().visible()}</pre>
                </div>
            </div>
        </section>
    }
}

/// Preload the hero background; load failures swap in the gradient, never
/// an error surface.
#[cfg(feature = "csr")]
fn preload_background(background: RwSignal<BackgroundImage>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Ok(img) = web_sys::HtmlImageElement::new() else {
        background.set(BackgroundImage::Failed);
        return;
    };

    let on_load = Closure::<dyn FnMut()>::new(move || {
        log::debug!("hero background image loaded");
        background.set(BackgroundImage::Loaded);
    });
    let on_error = Closure::<dyn FnMut()>::new(move || {
        log::debug!("hero background image failed, using gradient fallback");
        background.set(BackgroundImage::Failed);
    });
    img.set_onload(Some(on_load.as_ref().unchecked_ref()));
    img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_load.forget();
    on_error.forget();

    img.set_src(data::HERO_BACKGROUND_URL);
}

/// Kick off the typing loop the first time the terminal is half visible.
#[cfg(feature = "csr")]
fn start_typing_when_visible(
    terminal_ref: NodeRef<leptos::html::Div>,
    typed: RwSignal<Typewriter>,
) {
    use std::time::Duration;

    Effect::new(move || {
        let Some(el) = terminal_ref.get() else {
            return;
        };
        crate::util::observer::observe_once(
            &el,
            hero::TERMINAL_VISIBILITY_THRESHOLD,
            move || {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(Duration::from_millis(u64::from(
                        hero::TYPE_START_DELAY_MS,
                    )))
                    .await;
                    loop {
                        let mut more = false;
                        typed.update(|t| more = t.step());
                        if !more {
                            break;
                        }
                        gloo_timers::future::sleep(Duration::from_millis(u64::from(
                            hero::TYPE_TICK_MS,
                        )))
                        .await;
                    }
                });
            },
        );
    });
}
