//! Fixed navigation bar: brand, section links, theme toggle, mobile menu.

use leptos::prelude::*;

use crate::data;
use crate::state::scroll::ScrollState;
use crate::state::theme::Theme;
use crate::util::theme_store;

/// Top navigation bar.
///
/// The theme toggle button is the single mutation entry point for the
/// global theme flag: it flips the signal, mirrors the root attribute, and
/// persists the preference. The bubble field subscribes to the signal for
/// retinting; nothing else reacts beyond styling.
#[component]
pub fn Navbar() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let menu_open = RwSignal::new(false);

    let on_toggle_theme = move |_| {
        let next = theme.get_untracked().toggled();
        theme.set(next);
        theme_store::apply(next);
        theme_store::store(next);
    };

    let menu_icon = move || {
        if menu_open.get() { "fas fa-times" } else { "fas fa-bars" }
    };

    view! {
        <nav class="navbar">
            <a href="#home" class="navbar__brand">
                "adi@portfolio:~$"
            </a>

            <ul class="nav-links">
                {data::SECTIONS
                    .iter()
                    .map(|&(id, label)| {
                        view! {
                            <li>
                                <a
                                    href=format!("#{id}")
                                    class:active=move || {
                                        scroll.get().active_section.as_deref() == Some(id)
                                    }
                                >
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>

            <button
                class="theme-toggle"
                on:click=on_toggle_theme
                aria-label=move || theme.get().toggle_aria_label()
            >
                <i class=move || theme.get().toggle_icon_class()></i>
            </button>

            <button
                class="menu-toggle"
                on:click=move |_| menu_open.update(|open| *open = !*open)
                aria-label="Toggle menu"
            >
                <i class=menu_icon></i>
            </button>

            <div class="mobile-menu" class:active=move || menu_open.get()>
                {data::SECTIONS
                    .iter()
                    .map(|&(id, label)| {
                        view! {
                            <a
                                href=format!("#{id}")
                                class="mobile-nav-link"
                                class:active=move || {
                                    scroll.get().active_section.as_deref() == Some(id)
                                }
                                on:click=move |_| menu_open.set(false)
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </nav>
    }
}
