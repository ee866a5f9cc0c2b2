use askra_core::data::COMPANY_INFO;
use askra_core::motion::PRELOADER_MS;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::utils::dom;
use crate::AppClock;

/// Splash shown for the first [`PRELOADER_MS`] after the app starts. Scroll is
/// locked while it is up.
#[function_component(Preloader)]
pub fn preloader() -> Html {
    let clock = use_context::<AppClock>().unwrap_or_else(AppClock::now);
    let remaining = PRELOADER_MS - clock.elapsed_ms();
    let visible = use_state(|| remaining > 0.0);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let timer = if *visible {
                    dom::set_scroll_locked(true);
                    dom::scroll_to_top();
                    Some(Timeout::new(remaining.max(0.0) as u32, move || {
                        dom::set_scroll_locked(false);
                        visible.set(false);
                    }))
                } else {
                    None
                };
                move || {
                    drop(timer);
                    dom::set_scroll_locked(false);
                }
            },
            (),
        );
    }

    if !*visible {
        return html! {};
    }

    let preloader_css = r#"
        .preloader {
            position: fixed;
            inset: 0;
            z-index: 100;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            background: var(--cream);
            animation: preloader-exit 0.6s ease 2.4s forwards;
        }
        .preloader img { width: 96px; height: 96px; object-fit: contain; margin-bottom: 2rem; }
        .preloader h1 {
            margin: 0 0 1rem;
            font-size: clamp(2rem, 6vw, 4rem);
            font-weight: 300;
            letter-spacing: 0.1em;
            text-transform: uppercase;
        }
        .preloader p { margin: 0; font-size: 0.75rem; letter-spacing: 0.3em; text-transform: uppercase; opacity: 0.6; }
        .preloader-line { margin-top: 2.5rem; width: 160px; height: 1px; background: rgba(44, 44, 44, 0.1); overflow: hidden; }
        .preloader-line div { height: 100%; background: var(--rose); animation: preloader-fill 2.4s ease forwards; transform-origin: left; }
        @keyframes preloader-fill { from { transform: scaleX(0); } to { transform: scaleX(1); } }
        @keyframes preloader-exit { to { transform: translateY(-100%); opacity: 0; } }
    "#;

    html! {
        <div class="preloader">
            <style>{preloader_css}</style>
            <img src="/images/logo-fix.png" alt="Askra Konstruksi Logo" />
            <h1>{"Askra Konstruksi"}</h1>
            <p>{format!("by {}", COMPANY_INFO.full_name)}</p>
            <div class="preloader-line"><div></div></div>
        </div>
    }
}
