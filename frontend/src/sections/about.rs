use askra_core::data::ABOUT_STATS;
use askra_core::motion;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::utils::hooks::{use_is_mobile, use_section_progress};
use crate::Route;

/// "We Build Dreams" band with the headline stats. The headline drifts and the
/// image settles from a zoom as the section scrolls through; both are off on
/// mobile.
#[function_component(About)]
pub fn about() -> Html {
    let node = use_node_ref();
    let progress = use_section_progress(node.clone());
    let is_mobile = use_is_mobile();

    let (text_y, image_scale) = if is_mobile {
        (0.0, 1.0)
    } else {
        (
            motion::interpolate(progress, (0.0, 1.0), (100.0, -100.0)),
            motion::interpolate(progress, (0.0, 0.5), (1.2, 1.0)),
        )
    };

    let about_css = r#"
        .about-band {
            position: relative;
            overflow: hidden;
            color: #fff;
            background: linear-gradient(135deg, #0F4040 0%, #1A5F5F 50%, #2A7F7F 100%);
        }
        .about-inner { position: relative; max-width: 80rem; margin: 0 auto; padding: 10rem 4rem; }
        .about-label {
            display: inline-block;
            margin-bottom: 4rem;
            padding: 0.5rem 1rem;
            border: 1px solid rgba(255,255,255,0.2);
            border-radius: 999px;
            font-size: 0.75rem;
            letter-spacing: 0.3em;
            text-transform: uppercase;
            color: rgba(255,255,255,0.5);
        }
        .about-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 6rem; align-items: start; }
        .about-grid h2 { margin: 0; font-size: clamp(3.5rem, 9vw, 8rem); font-weight: 200; letter-spacing: -0.03em; line-height: 1; }
        .about-grid h2 span { color: rgba(255,255,255,0.4); }
        .about-stats { display: flex; gap: 3rem; margin-top: 4rem; }
        .about-stats strong { font-size: 3rem; font-weight: 200; }
        .about-stats small { display: block; font-size: 0.75rem; letter-spacing: 0.2em; text-transform: uppercase; color: rgba(255,255,255,0.5); }
        .about-copy p { margin: 0 0 3rem; font-size: 1.35rem; font-weight: 300; line-height: 1.7; color: rgba(255,255,255,0.7); }
        .about-image { position: relative; aspect-ratio: 4 / 3; overflow: hidden; border-radius: 0.5rem; }
        .about-image img { width: 100%; height: 100%; object-fit: cover; }
        .about-cta { display: inline-block; margin-top: 3rem; padding-bottom: 0.25rem; border-bottom: 1px solid rgba(255,255,255,0.3); letter-spacing: 0.2em; text-transform: uppercase; font-size: 0.8rem; }
        @media (max-width: 768px) {
            .about-inner { padding: 8rem 1.5rem; }
            .about-grid { grid-template-columns: 1fr; gap: 4rem; }
            .about-stats { gap: 2rem; }
        }
    "#;

    html! {
        <section id="about" ref={node} class="about-band">
            <style>{about_css}</style>
            <div class="about-inner">
                <Reveal>
                    <span class="about-label">{"About Us"}</span>
                </Reveal>
                <div class="about-grid">
                    <div style={format!("transform: translateY({}px);", text_y)}>
                        <h2>{"We Build"}<br /><span>{"Dreams"}</span></h2>
                        <div class="about-stats">
                            { for ABOUT_STATS.iter().map(|stat| html! {
                                <div>
                                    <strong>{stat.number}{stat.suffix}</strong>
                                    <small>{stat.label}</small>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="about-copy">
                        <p>
                            {"Kami mentransformasi ruang menjadi pengalaman. Dengan dedikasi lebih dari satu dekade, setiap proyek adalah cerita yang kami bangun bersama."}
                        </p>
                        <div class="about-image">
                            <img
                                src="/images/about/about-image.png"
                                alt="ASKRA Interior"
                                style={format!("transform: scale({});", image_scale)}
                            />
                        </div>
                        <Link<Route> to={Route::Contact} classes="about-cta">{"Mulai Proyek Anda →"}</Link<Route>>
                    </div>
                </div>
            </div>
        </section>
    }
}
