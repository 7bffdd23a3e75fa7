//! Certificate cards with logo-colored hover and click effects.

use leptos::prelude::*;

use crate::data;

/// How long the click glow lasts before the icon reverts.
#[cfg(feature = "csr")]
const CLICK_RESET_MS: u32 = 1000;

#[component]
pub fn CertificatesSection() -> impl IntoView {
    view! {
        <section id="certificates" class="certificates-section">
            <h2 class="section-title">"Certifications"</h2>
            <div class="certificates-grid">
                {data::certificates()
                    .into_iter()
                    .map(|cert| view! { <CertificateCard cert=cert/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// One certificate card.
///
/// Hover tints the icon with the issuer's logo color; leaving resets the
/// inline color and filter to inherited. Click applies a stronger glow
/// that reverts to inherited on a timer.
#[component]
fn CertificateCard(cert: data::Certificate) -> impl IntoView {
    let icon_ref = NodeRef::<leptos::html::I>::new();
    let hover_color = cert.logo_color.clone();
    let click_color = cert.logo_color.clone();

    let on_enter = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(icon) = icon_ref.get_untracked() {
                let style = icon.style();
                let _ = style.set_property("color", &hover_color);
                let _ = style.set_property("filter", "brightness(1.2)");
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = &hover_color;
    };

    let on_leave = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(icon) = icon_ref.get_untracked() {
                let style = icon.style();
                let _ = style.remove_property("color");
                let _ = style.remove_property("filter");
            }
        }
    };

    let on_click = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(icon) = icon_ref.get_untracked() {
                let style = icon.style();
                let _ = style.set_property("color", &click_color);
                let _ = style.set_property(
                    "filter",
                    "brightness(1.3) drop-shadow(0 0 8px rgba(0, 0, 0, 0.3))",
                );

                gloo_timers::callback::Timeout::new(CLICK_RESET_MS, move || {
                    let style = icon.style();
                    let _ = style.remove_property("color");
                    let _ = style.remove_property("filter");
                })
                .forget();
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = &click_color;
    };

    view! {
        <div
            class="certificate-card"
            on:mouseenter=on_enter
            on:mouseleave=on_leave
            on:click=on_click
        >
            <div class="certificate-icon">
                <i class=cert.icon_class.clone() node_ref=icon_ref></i>
            </div>
            <h3>{cert.title.clone()}</h3>
            <p class="certificate-issuer">{cert.issuer.clone()}</p>
        </div>
    }
}
