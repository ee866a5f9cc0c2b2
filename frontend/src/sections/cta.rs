use askra_core::contact::{mailto, whatsapp_url, WHATSAPP_GREETING};
use askra_core::data::CONTACT_INFO;
use yew::prelude::*;

use crate::components::reveal::Reveal;

#[derive(Properties, PartialEq)]
pub struct CtaProps {
    #[prop_or(AttrValue::Static("Ready to Start Your Project?"))]
    pub title: AttrValue,
    #[prop_or(AttrValue::Static(
        "Let us transform your vision into reality with our professional construction and design services."
    ))]
    pub text: AttrValue,
}

/// Closing call to action. Pages swap the copy through props.
#[function_component(Cta)]
pub fn cta(props: &CtaProps) -> Html {
    html! {
        <section id="contact" class="cta">
            <style>{r#"
                .cta { background: var(--rose); color: #fff; padding: 8rem 0; }
                .cta-inner { max-width: 56rem; margin: 0 auto; padding: 0 1.5rem; text-align: center; }
                .cta h2 { margin: 0 0 1.5rem; font-size: clamp(2rem, 5vw, 3.75rem); font-weight: 500; }
                .cta p { margin: 0 auto 2.5rem; max-width: 40rem; font-size: 1.15rem; color: rgba(255,255,255,0.85); }
                .cta-actions { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; }
                .cta-actions a { padding: 1rem 2rem; border-radius: 999px; font-weight: 500; }
                .cta-actions .primary { background: #fff; color: var(--rose); }
                .cta-actions .secondary { border: 1px solid rgba(255,255,255,0.6); }
            "#}</style>
            <div class="cta-inner">
                <Reveal>
                    <h2>{props.title.clone()}</h2>
                    <p>{props.text.clone()}</p>
                    <div class="cta-actions">
                        <a class="primary" href={whatsapp_url(CONTACT_INFO.whatsapp, Some(WHATSAPP_GREETING))} target="_blank" rel="noopener noreferrer">
                            {"Konsultasi Gratis"}
                        </a>
                        <a class="secondary" href={mailto(&CONTACT_INFO)}>{"Hubungi Kami"}</a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
