use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::utils::hooks::{use_is_mobile, use_section_progress};

struct Step {
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    points: [&'static str; 4],
}

const STEPS: [Step; 3] = [
    Step {
        title: "DESAIN",
        subtitle: "Layanan Desain Arsitektur",
        description: "Menciptakan blueprint impian Anda dengan ketelitian dan kreativitas tinggi.",
        points: [
            "Desain rumah tinggal",
            "3D visual & gambar kerja",
            "Desain sesuai budget",
            "Siap dibangun tanpa revisi berulang",
        ],
    },
    Step {
        title: "BANGUN",
        subtitle: "Jasa Bangun Rumah",
        description: "Mewujudkan desain menjadi kenyataan dengan standar konstruksi terbaik.",
        points: [
            "Rumah baru 1-3 lantai",
            "Sistem kerja transparan",
            "Material sesuai spesifikasi",
            "Pengawasan langsung tim internal",
        ],
    },
    Step {
        title: "RENOVASI",
        subtitle: "Jasa Renovasi Rumah",
        description: "Mentransformasi ruang lama menjadi pengalaman baru yang lebih baik.",
        points: [
            "Renovasi sebagian / total",
            "Upgrade fasad & interior",
            "Penambahan lantai / ruangan",
            "Solusi renovasi bertahap",
        ],
    },
];

/// The design, build, renovate philosophy, one step per band. On mobile the
/// steps hang off a vertical timeline that fills as the section scrolls by.
#[function_component(Tagline)]
pub fn tagline() -> Html {
    let is_mobile = use_is_mobile();
    let node = use_node_ref();
    let progress = use_section_progress(node.clone());

    let tagline_css = r#"
        .tagline { position: relative; background: #1A5F5F; color: #fff; padding: 6rem 0; overflow: hidden; }
        .tagline-inner { max-width: 80rem; margin: 0 auto; padding: 0 4rem; }
        .tagline-step { display: grid; grid-template-columns: 1fr 1fr; gap: 8rem; padding: 6rem 0; align-items: start; }
        .tagline-step.flipped .tagline-title { order: 2; }
        .tagline-step .index { display: block; font-size: 0.75rem; letter-spacing: 0.2em; text-transform: uppercase; color: rgba(255,255,255,0.4); margin-bottom: 1rem; }
        .tagline-step h3 { margin: 0 0 0.75rem; font-size: clamp(3rem, 8vw, 6rem); font-weight: 200; letter-spacing: 0.02em; }
        .tagline-step .subtitle { color: rgba(255,255,255,0.5); margin: 0; }
        .tagline-step .description { color: rgba(255,255,255,0.7); line-height: 1.7; margin: 0 0 1.5rem; }
        .tagline-step ul { list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 0.6rem; }
        .tagline-step li { display: flex; align-items: center; gap: 0.75rem; color: rgba(255,255,255,0.55); font-size: 0.9rem; }
        .tagline-step li::before { content: ""; width: 4px; height: 4px; border-radius: 50%; background: rgba(255,255,255,0.4); }
        .tagline.mobile .tagline-inner { padding: 0 1.5rem; position: relative; }
        .tagline.mobile .tagline-step { display: block; padding: 0 0 4rem 3rem; }
        .tagline-track { position: absolute; left: 2.5rem; top: 0; bottom: 0; width: 1px; background: rgba(255,255,255,0.1); }
        .tagline-track div { position: absolute; inset: 0; background: rgba(255,255,255,0.5); transform-origin: top; }
    "#;

    let steps = STEPS.iter().enumerate().map(|(index, step)| {
        let class = classes!("tagline-step", (!is_mobile && index % 2 == 1).then_some("flipped"));
        html! {
            <Reveal {class} delay_ms={if is_mobile { 0 } else { 100 }}>
                <div class="tagline-title">
                    <span class="index">{format!("Step {}", index + 1)}</span>
                    <h3>{step.title}</h3>
                    <p class="subtitle">{step.subtitle}</p>
                </div>
                <div>
                    <p class="description">{step.description}</p>
                    <ul>
                        { for step.points.iter().map(|point| html! { <li>{*point}</li> }) }
                    </ul>
                </div>
            </Reveal>
        }
    });

    html! {
        <section id="tagline" ref={node} class={classes!("tagline", is_mobile.then_some("mobile"))}>
            <style>{tagline_css}</style>
            <div class="tagline-inner">
                if is_mobile {
                    <div class="tagline-track">
                        <div style={format!("transform: scaleY({});", progress)}></div>
                    </div>
                }
                { for steps }
            </div>
        </section>
    }
}
