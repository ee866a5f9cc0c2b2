use askra_core::catalog::{find_service, other_services, projects_for_service};
use askra_core::data::{PORTFOLIO_PROJECTS, SERVICES};
use askra_core::model::Service;
use askra_core::motion::Theme;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{
    footer::Footer, navigation::Navigation, reveal::Reveal, whatsapp_button::WhatsAppButton,
};
use crate::pages::not_found::NotFound;
use crate::sections::cta::Cta;
use crate::utils::dom::SectionDecl;
use crate::utils::hooks::use_section_theme;
use crate::Route;

const SECTIONS: &[SectionDecl] = &[
    ("service-hero", Theme::Dark),
    ("service-about", Theme::Light),
    ("service-gallery", Theme::Light),
    ("service-projects", Theme::Light),
    ("service-others", Theme::Light),
    ("contact", Theme::Dark),
    ("footer", Theme::Light),
];

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub id: String,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    match find_service(&props.id) {
        Some(service) => html! { <ServiceView {service} /> },
        None => {
            log::info!("No service with id {}", props.id);
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct ServiceViewProps {
    service: &'static Service,
}

#[function_component(ServiceView)]
fn service_view(props: &ServiceViewProps) -> Html {
    let service = props.service;
    let theme = use_section_theme(SECTIONS);
    let projects = projects_for_service(PORTFOLIO_PROJECTS, service);
    let others = other_services(SERVICES, service);

    let service_css = r#"
        .service-page { background: var(--cream); color: var(--charcoal); }
        .service-hero { position: relative; height: 70vh; overflow: hidden; }
        .service-hero img { width: 100%; height: 100%; object-fit: cover; }
        .service-hero-shade { position: absolute; inset: 0; background: linear-gradient(to top, rgba(0,0,0,0.7), rgba(0,0,0,0.3) 50%, transparent); }
        .service-hero-text { position: absolute; left: 0; right: 0; bottom: 0; padding: 4rem; color: #fff; }
        .service-hero-text span { display: block; margin-bottom: 1rem; font-size: 0.85rem; letter-spacing: 0.2em; text-transform: uppercase; color: rgba(255,255,255,0.7); }
        .service-hero-text h1 { margin: 0; font-size: clamp(2.25rem, 7vw, 4.5rem); font-weight: 600; }
        .service-inner { max-width: 80rem; margin: 0 auto; padding: 6rem 4rem; }
        .service-about { display: grid; grid-template-columns: 3fr 2fr; gap: 4rem; }
        .service-about h2, .service-inner > h2 { margin: 0 0 2rem; font-size: clamp(1.75rem, 3.5vw, 2.5rem); font-weight: 500; }
        .service-about p { margin: 0; font-size: 1.2rem; font-weight: 300; line-height: 1.8; color: rgba(44,44,44,0.8); }
        .service-features ul { list-style: none; margin: 0; padding: 0; }
        .service-features { padding: 2rem; border-radius: 1rem; background: #fff; box-shadow: 0 10px 30px rgba(0,0,0,0.06); }
        .service-features h3 { margin: 0 0 1.5rem; font-size: 0.85rem; letter-spacing: 0.2em; text-transform: uppercase; color: var(--teal); }
        .service-features li { display: flex; gap: 0.75rem; padding: 0.75rem 0; border-bottom: 1px solid rgba(44,44,44,0.08); font-weight: 500; }
        .service-features li::before { content: "✓"; color: var(--teal); }
        .service-gallery { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
        .service-gallery .item { aspect-ratio: 4 / 3; overflow: hidden; border-radius: 0.5rem; }
        .service-gallery img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s ease; }
        .service-gallery .item:hover img { transform: scale(1.05); }
        .service-row-head { display: flex; align-items: center; justify-content: space-between; margin-bottom: 2rem; }
        .service-row-head h2 { margin: 0; font-size: clamp(1.5rem, 3vw, 2.25rem); font-weight: 500; }
        .service-row-head a { font-size: 0.85rem; letter-spacing: 0.15em; text-transform: uppercase; color: rgba(44,44,44,0.6); }
        .service-cards { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
        .service-card .image { aspect-ratio: 4 / 3; overflow: hidden; border-radius: 0.5rem; margin-bottom: 1rem; }
        .service-card img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s ease; }
        .service-card:hover img { transform: scale(1.05); }
        .service-card h3 { margin: 0; font-size: 1.2rem; font-weight: 500; }
        .service-card:hover h3 { color: var(--teal); }
        .service-card p { margin: 0.25rem 0 0; font-size: 0.9rem; color: rgba(44,44,44,0.55); overflow: hidden; display: -webkit-box; -webkit-line-clamp: 2; -webkit-box-orient: vertical; }
        .service-others { border-top: 1px solid rgba(44,44,44,0.1); }
        @media (max-width: 768px) {
            .service-hero-text { padding: 1.5rem; }
            .service-inner { padding: 4rem 1.5rem; }
            .service-about, .service-gallery, .service-cards { grid-template-columns: 1fr; }
        }
    "#;

    html! {
        <div class="service-page">
            <style>{service_css}</style>
            <Navigation sections={SECTIONS} />
            <main>
                <section id="service-hero" class="service-hero">
                    <img src={service.image} alt={service.title} />
                    <div class="service-hero-shade"></div>
                    <div class="service-hero-text">
                        <Reveal delay_ms={300}>
                            <span>{"Layanan"}</span>
                            <h1>{service.title}</h1>
                        </Reveal>
                    </div>
                </section>

                <section id="service-about">
                    <div class="service-inner service-about">
                        <Reveal>
                            <h2>{"Tentang Layanan"}</h2>
                            <p>{service.long_description}</p>
                        </Reveal>
                        <Reveal delay_ms={150}>
                            <div class="service-features">
                                <h3>{"Keunggulan"}</h3>
                                <ul>
                                    { for service.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                                </ul>
                            </div>
                        </Reveal>
                    </div>
                </section>

                <section id="service-gallery">
                    <div class="service-inner">
                        <h2>{"Gallery"}</h2>
                        <div class="service-gallery">
                            { for service.gallery.iter().enumerate().map(|(index, image)| html! {
                                <Reveal class="item" delay_ms={index as u32 * 100}>
                                    <img src={*image} alt={format!("{} - Image {}", service.title, index + 1)} loading="lazy" />
                                </Reveal>
                            }) }
                        </div>
                    </div>
                </section>

                if !projects.is_empty() {
                    <section id="service-projects">
                        <div class="service-inner">
                            <div class="service-row-head">
                                <h2>{"Proyek Terkait"}</h2>
                                <Link<Route> to={Route::Portfolio}>{"View All"}</Link<Route>>
                            </div>
                            <div class="service-cards">
                                { for projects.iter().map(|project| html! {
                                    <Link<Route> to={Route::PortfolioDetail { slug: project.slug.to_string() }} classes="service-card">
                                        <div class="image">
                                            <img src={project.image} alt={project.title} loading="lazy" />
                                        </div>
                                        <h3>{project.title}</h3>
                                        <p>{project.location}</p>
                                    </Link<Route>>
                                }) }
                            </div>
                        </div>
                    </section>
                }

                <section id="service-others" class="service-others">
                    <div class="service-inner">
                        <div class="service-row-head">
                            <h2>{"Layanan Lainnya"}</h2>
                        </div>
                        <div class="service-cards">
                            { for others.iter().map(|other| html! {
                                <Link<Route> to={Route::ServiceDetail { id: other.id.to_string() }} classes="service-card">
                                    <div class="image">
                                        <img src={other.image} alt={other.title} loading="lazy" />
                                    </div>
                                    <h3>{other.title}</h3>
                                    <p>{other.description}</p>
                                </Link<Route>>
                            }) }
                        </div>
                    </div>
                </section>

                <Cta
                    title="Tertarik dengan layanan ini?"
                    text="Konsultasikan proyek Anda dengan tim profesional kami"
                />
            </main>
            <Footer />
            <WhatsAppButton {theme} />
        </div>
    }
}
