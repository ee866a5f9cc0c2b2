use askra_core::motion::Theme;
use yew::prelude::*;

use crate::components::{
    footer::Footer, navigation::Navigation, preloader::Preloader, whatsapp_button::WhatsAppButton,
};
use crate::sections::{
    cta::Cta, hero::Hero, portfolio::Portfolio, quote::Quote, services::Services,
    tagline::Tagline, testimonials::Testimonials,
};
use crate::utils::dom::SectionDecl;
use crate::utils::hooks::use_section_theme;

const SECTIONS: &[SectionDecl] = &[
    ("hero", Theme::Dark),
    ("tagline", Theme::Dark),
    ("quote", Theme::Light),
    ("services", Theme::Light),
    ("portfolio", Theme::Light),
    ("testimonials", Theme::Light),
    ("contact", Theme::Dark),
    ("footer", Theme::Light),
];

#[function_component(Home)]
pub fn home() -> Html {
    let theme = use_section_theme(SECTIONS);

    html! {
        <>
            <Preloader />
            <Navigation sections={SECTIONS} />
            <main>
                <Hero />
                <Tagline />
                <Quote />
                <Services />
                <Portfolio />
                <Testimonials />
                <Cta />
            </main>
            <Footer />
            <WhatsAppButton {theme} />
        </>
    }
}
