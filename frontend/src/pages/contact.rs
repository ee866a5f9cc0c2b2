use askra_core::contact::{maps_embed, maps_link, mailto, whatsapp_url};
use askra_core::data::{COMPANY_INFO, CONTACT_INFO};
use askra_core::motion::Theme;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{navigation::Navigation, reveal::Reveal, whatsapp_button::WhatsAppButton};
use crate::utils::dom::SectionDecl;
use crate::utils::hooks::use_section_theme;
use crate::Route;

const SECTIONS: &[SectionDecl] = &[("contact-info", Theme::Dark), ("contact-map", Theme::Light)];

#[function_component(Contact)]
pub fn contact() -> Html {
    let theme = use_section_theme(SECTIONS);

    let contact_css = r#"
        .contact-page { min-height: 100vh; background: #1a1a1a; color: #fff; }
        .contact-grid { display: grid; grid-template-columns: 1fr 1fr; min-height: 100vh; }
        .contact-info { padding: 8rem 4rem 4rem; display: flex; flex-direction: column; justify-content: space-between; gap: 3rem; }
        .contact-info .back { font-size: 0.8rem; letter-spacing: 0.2em; text-transform: uppercase; color: rgba(255,255,255,0.5); }
        .contact-info h1 { margin: 0 0 1.5rem; font-size: clamp(2.5rem, 6vw, 5rem); font-weight: 300; line-height: 1.05; }
        .contact-info .lead { margin: 0; max-width: 28rem; color: rgba(255,255,255,0.6); line-height: 1.7; }
        .contact-links { display: flex; flex-direction: column; gap: 2rem; }
        .contact-links a { display: block; font-size: 1.15rem; font-weight: 300; }
        .contact-links a:hover { color: #C9A961; }
        .contact-links span { display: block; margin-bottom: 0.25rem; font-size: 0.7rem; letter-spacing: 0.2em; text-transform: uppercase; color: rgba(255,255,255,0.4); }
        .contact-note { margin: 0.5rem 0 0; font-size: 0.85rem; font-style: italic; color: rgba(255,255,255,0.5); }
        .contact-closing { font-size: 0.9rem; color: rgba(255,255,255,0.5); }
        .contact-map { position: relative; min-height: 60vh; background: var(--beige); }
        .contact-map iframe { position: absolute; inset: 0; width: 100%; height: 100%; border: 0; filter: grayscale(0.6); }
        @media (max-width: 768px) {
            .contact-grid { grid-template-columns: 1fr; }
            .contact-info { padding: 7rem 1.5rem 3rem; }
        }
    "#;

    html! {
        <div class="contact-page">
            <style>{contact_css}</style>
            <Navigation sections={SECTIONS} />
            <main class="contact-grid">
                <section id="contact-info" class="contact-info">
                    <Link<Route> to={Route::Home} classes="back">{"← Kembali"}</Link<Route>>
                    <Reveal>
                        <h1>{"Mari bekerja sama."}</h1>
                        <p class="lead">
                            {"Hubungi kami melalui email atau WhatsApp, atau kunjungi kantor kami untuk konsultasi langsung."}
                        </p>
                    </Reveal>
                    <Reveal class="contact-links" delay_ms={150}>
                        <a href={mailto(&CONTACT_INFO)}>
                            <span>{"Email"}</span>
                            {CONTACT_INFO.email}
                        </a>
                        <a href={whatsapp_url(CONTACT_INFO.whatsapp, None)} target="_blank" rel="noopener noreferrer">
                            <span>{"WhatsApp"}</span>
                            {CONTACT_INFO.phone}
                        </a>
                        <div>
                            <a href={maps_link(CONTACT_INFO.address)} target="_blank" rel="noopener noreferrer">
                                <span>{"Lokasi"}</span>
                                {CONTACT_INFO.address}
                            </a>
                            <p class="contact-note">{CONTACT_INFO.note}</p>
                        </div>
                    </Reveal>
                    <p class="contact-closing">
                        {format!("Wujudkan impian Anda bersama {}. {}", COMPANY_INFO.name, COMPANY_INFO.location)}
                    </p>
                </section>
                <section id="contact-map" class="contact-map">
                    <iframe
                        src={maps_embed(CONTACT_INFO.address)}
                        title="Lokasi ASKRA"
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                    />
                </section>
            </main>
            <WhatsAppButton {theme} />
        </div>
    }
}
