use askra_core::motion::{self, Theme};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::{
    footer::Footer, navigation::Navigation, reveal::Reveal, whatsapp_button::WhatsAppButton,
};
use crate::sections::{about::About as AboutBand, cta::Cta};
use crate::utils::dom::SectionDecl;
use crate::utils::hooks::{use_in_view, use_section_theme};

const SECTIONS: &[SectionDecl] = &[
    ("about", Theme::Dark),
    ("values", Theme::Light),
    ("journey", Theme::Light),
    ("numbers", Theme::Dark),
    ("contact", Theme::Dark),
    ("footer", Theme::Light),
];

const VALUES: [(&str, &str); 4] = [
    ("Presisi", "Setiap detail dikerjakan dengan akurasi tinggi untuk hasil sempurna"),
    ("Kualitas Premium", "Material terbaik dan standar internasional dalam setiap proyek"),
    ("Inovasi", "Mengadopsi teknologi dan metode konstruksi terkini"),
    ("Kepercayaan", "Komitmen penuh terhadap kepuasan dan kepercayaan klien"),
];

const TIMELINE: [(&str, &str, &str); 5] = [
    ("2017", "Berdiri", "ASKRA didirikan dengan visi menjadi kontraktor terpercaya"),
    ("2019", "Ekspansi", "Membuka cabang dan menambah tim profesional"),
    ("2021", "100 Proyek", "Menyelesaikan 100+ proyek residential & commercial"),
    ("2023", "Award", "Meraih penghargaan Best Construction Company"),
    ("2026", "Sekarang", "150+ proyek selesai dengan 98% kepuasan klien"),
];

const NUMBERS: [(u32, &str, &str); 4] = [
    (150, "+", "Proyek Selesai"),
    (98, "%", "Kepuasan Klien"),
    (7, "+", "Tahun Pengalaman"),
    (50, "+", "Klien Setia"),
];

const BENEFITS: [(&str, &str); 6] = [
    ("Garansi Proyek", "Jaminan kualitas konstruksi dengan garansi resmi"),
    ("Tepat Waktu", "Komitmen penyelesaian proyek sesuai timeline"),
    ("Tim Profesional", "Tenaga ahli bersertifikat dan berpengalaman"),
    ("Harga Transparan", "RAB detail tanpa biaya tersembunyi"),
    ("Konsultasi Gratis", "Diskusi kebutuhan proyek tanpa biaya"),
    ("Respon Cepat", "Layanan komunikasi 24/7 responsif"),
];

const COUNTER_TICK_MS: u32 = 16;

#[derive(Properties, PartialEq)]
struct CounterProps {
    target: u32,
    suffix: &'static str,
}

/// Counts up to `target` once half of it is on screen.
#[function_component(Counter)]
fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let started = use_in_view(node.clone(), 0.5);
    let value = use_state_eq(|| 0u32);

    {
        let value = value.clone();
        let target = props.target;
        use_effect_with_deps(
            move |started| {
                let interval = started.then(|| {
                    let begun = js_sys::Date::now();
                    Interval::new(COUNTER_TICK_MS, move || {
                        value.set(motion::counter_value(js_sys::Date::now() - begun, target));
                    })
                });
                move || drop(interval)
            },
            started,
        );
    }

    html! {
        <div ref={node} class="counter">{*value}{props.suffix}</div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let theme = use_section_theme(SECTIONS);

    let about_css = r#"
        .about-page section.light { background: var(--cream); padding: 8rem 0; }
        .about-page .inner { max-width: 80rem; margin: 0 auto; padding: 0 3rem; }
        .about-page h2 { margin: 0 0 4rem; text-align: center; font-size: clamp(2rem, 5vw, 3.5rem); font-weight: 500; }
        .values-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
        .value-card { height: 100%; padding: 2rem; border-radius: 1.5rem; background: rgba(255,255,255,0.8); box-shadow: 0 10px 30px rgba(0,0,0,0.06); }
        .value-card h3 { margin: 0 0 1rem; font-size: 1.4rem; }
        .value-card p { margin: 0; color: rgba(44,44,44,0.7); line-height: 1.6; }
        .journey { position: relative; display: flex; flex-direction: column; gap: 3rem; }
        .journey-item { display: flex; gap: 2rem; align-items: center; }
        .journey-item.flipped { flex-direction: row-reverse; }
        .journey-item > div { flex: 1; }
        .journey-card { padding: 2rem; border-radius: 1rem; background: #fff; box-shadow: 0 10px 30px rgba(0,0,0,0.06); }
        .journey-card strong { display: block; color: var(--teal); font-size: 2rem; }
        .journey-card h3 { margin: 0.5rem 0; }
        .journey-card p { margin: 0; color: rgba(44,44,44,0.6); }
        .numbers { background: var(--charcoal); color: #fff; padding: 6rem 0; }
        .numbers-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; text-align: center; }
        .numbers .counter { font-size: clamp(2.5rem, 6vw, 4.5rem); font-weight: 200; font-variant-numeric: tabular-nums; }
        .numbers small { letter-spacing: 0.2em; text-transform: uppercase; color: rgba(255,255,255,0.5); }
        .benefits-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; margin-top: 4rem; }
        .benefit h4 { margin: 0 0 0.5rem; }
        .benefit p { margin: 0; color: rgba(44,44,44,0.6); }
        @media (max-width: 768px) {
            .about-page .inner { padding: 0 1.5rem; }
            .values-grid, .numbers-grid, .benefits-grid { grid-template-columns: 1fr 1fr; }
            .journey-item, .journey-item.flipped { flex-direction: column; }
        }
    "#;

    html! {
        <div class="about-page">
            <style>{about_css}</style>
            <Navigation sections={SECTIONS} />
            <main>
                <AboutBand />
                <section id="values" class="light">
                    <div class="inner">
                        <Reveal><h2>{"Nilai "}<span class="text-gradient">{"Kami"}</span></h2></Reveal>
                        <div class="values-grid">
                            { for VALUES.iter().enumerate().map(|(index, (title, description))| html! {
                                <Reveal delay_ms={index as u32 * 100}>
                                    <div class="value-card">
                                        <h3>{*title}</h3>
                                        <p>{*description}</p>
                                    </div>
                                </Reveal>
                            }) }
                        </div>
                    </div>
                </section>
                <section id="journey" class="light">
                    <div class="inner">
                        <Reveal><h2>{"Perjalanan "}<span class="text-gradient">{"Kami"}</span></h2></Reveal>
                        <div class="journey">
                            { for TIMELINE.iter().enumerate().map(|(index, (year, title, description))| html! {
                                <Reveal delay_ms={index as u32 * 100}>
                                    <div class={classes!("journey-item", (index % 2 == 1).then_some("flipped"))}>
                                        <div class="journey-card">
                                            <strong>{*year}</strong>
                                            <h3>{*title}</h3>
                                            <p>{*description}</p>
                                        </div>
                                        <div></div>
                                    </div>
                                </Reveal>
                            }) }
                        </div>
                        <div class="benefits-grid">
                            { for BENEFITS.iter().map(|(title, description)| html! {
                                <div class="benefit">
                                    <h4>{*title}</h4>
                                    <p>{*description}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>
                <section id="numbers" class="numbers">
                    <div class="inner numbers-grid">
                        { for NUMBERS.iter().map(|&(target, suffix, label)| html! {
                            <div>
                                <Counter {target} {suffix} />
                                <small>{label}</small>
                            </div>
                        }) }
                    </div>
                </section>
                <Cta
                    title="Menciptakan Warisan Bersama"
                    text="Ceritakan rencana hunian atau ruang usaha Anda, tim kami siap mendampingi dari desain hingga serah terima."
                />
            </main>
            <Footer />
            <WhatsAppButton {theme} />
        </div>
    }
}
