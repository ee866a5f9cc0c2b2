use askra_core::motion;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::utils::hooks::{use_is_mobile, use_scroll_y};
use crate::AppClock;

#[function_component(Hero)]
pub fn hero() -> Html {
    let clock = use_context::<AppClock>().unwrap_or_else(AppClock::now);
    let show_content = use_state(|| false);
    let is_mobile = use_is_mobile();
    let scroll_y = use_scroll_y();

    // Wait out whatever is left of the preloader before animating in.
    {
        let show_content = show_content.clone();
        use_effect_with_deps(
            move |_| {
                let delay = motion::reveal_delay_ms(clock.elapsed_ms());
                let timer = Timeout::new(delay as u32, move || show_content.set(true));
                move || drop(timer)
            },
            (),
        );
    }

    let dim = motion::interpolate(scroll_y, (0.0, 500.0), (0.0, 0.6));
    let parallax = if is_mobile {
        0.0
    } else {
        motion::interpolate(scroll_y, (0.0, 800.0), (0.0, 160.0))
    };

    let hero_css = r#"
        .hero {
            position: relative;
            height: 100vh;
            overflow: hidden;
            background: #1a1a1a;
            color: #fff;
        }
        .hero.mobile { height: 110vh; }
        .hero-image {
            position: absolute;
            inset: 0;
            opacity: 0;
            transform: scale(1.1);
            transition: opacity 1.5s cubic-bezier(0.25, 0.46, 0.45, 0.94), transform 1.5s cubic-bezier(0.25, 0.46, 0.45, 0.94);
        }
        .hero-image img { width: 100%; height: 100%; object-fit: cover; }
        .hero-image::after {
            content: "";
            position: absolute;
            inset: 0;
            background: linear-gradient(to top, rgba(0,0,0,0.75) 0%, rgba(0,0,0,0.35) 50%, rgba(0,0,0,0.15) 100%);
        }
        .hero-dim { position: absolute; inset: 0; background: #000; pointer-events: none; }
        .hero-labels {
            position: absolute;
            top: 0;
            left: 0;
            right: 0;
            z-index: 2;
            display: flex;
            align-items: center;
            padding: 5.5rem 2.5rem 0;
            font-size: 0.75rem;
            letter-spacing: 0.35em;
            color: rgba(255, 255, 255, 0.6);
            opacity: 0;
            transition: opacity 0.8s ease 0.4s;
        }
        .hero-labels .line { flex: 1; height: 1px; margin: 0 1rem; background: rgba(255, 255, 255, 0.25); }
        .hero-copy {
            position: absolute;
            left: 0;
            bottom: 0;
            z-index: 2;
            max-width: 70vw;
            padding: 0 2.5rem 6rem;
            opacity: 0;
            transform: translateY(40px);
            transition: opacity 0.9s ease 0.7s, transform 0.9s cubic-bezier(0.25, 0.46, 0.45, 0.94) 0.7s;
        }
        .hero-copy h2 { margin: 0 0 2.5rem; font-size: clamp(1.75rem, 5vw, 3rem); line-height: 1.2; font-weight: 600; }
        .hero-cta {
            display: inline-flex;
            gap: 1rem;
            padding: 1rem 2rem;
            background: #fff;
            color: #000;
            font-size: 13px;
            letter-spacing: 0.15em;
            text-transform: uppercase;
        }
        .hero.shown .hero-image { opacity: 1; transform: scale(1); }
        .hero.shown .hero-labels { opacity: 1; }
        .hero.shown .hero-copy { opacity: 1; transform: translateY(0); }
        @media (max-width: 768px) {
            .hero-labels { padding: 5.5rem 1.5rem 0; }
            .hero-copy { max-width: 90vw; padding: 0 1.5rem 5rem; bottom: 15vh; }
        }
    "#;

    let class = classes!(
        "hero",
        is_mobile.then_some("mobile"),
        show_content.then_some("shown")
    );

    html! {
        <section id="hero" {class}>
            <style>{hero_css}</style>
            <div class="hero-image" style={format!("top: {}px;", parallax)}>
                <img src="/images/hero/main-cover.jpg" alt="Desain Bangun Renovasi - Hero" />
            </div>
            <div class="hero-dim" style={format!("opacity: {};", dim)}></div>
            <div class="hero-labels">
                <span>{"DESAIN"}</span>
                <div class="line"></div>
                <span>{"BANGUN"}</span>
                <div class="line"></div>
                <span>{"RENOVASI"}</span>
            </div>
            <div class="hero-copy">
                <h2>
                    {"Mewujudkan Hunian Impian Melalui Desain Presisi, Bangunan Kokoh & Renovasi Tanpa Batas."}
                </h2>
                <a class="hero-cta" href="#portfolio">
                    <span>{"LIHAT PROYEK"}</span>
                    <span>{"→"}</span>
                </a>
            </div>
        </section>
    }
}
