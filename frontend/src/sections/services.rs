use askra_core::data::SERVICES;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    let services_css = r#"
        .services { position: relative; background: #F5F3F0; padding: 8rem 0; overflow: hidden; }
        .services-inner { max-width: 80rem; margin: 0 auto; padding: 0 3rem; }
        .services-header { text-align: center; margin-bottom: 5rem; }
        .services-header .eyebrow { color: var(--teal); font-size: 0.85rem; letter-spacing: 0.2em; text-transform: uppercase; }
        .services-header h2 { margin: 1.5rem 0; font-size: clamp(2.25rem, 6vw, 4.5rem); font-weight: 500; }
        .services-header p { max-width: 42rem; margin: 0 auto; font-size: 1.15rem; color: #6b6b6b; }
        .services-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2rem; }
        .service-card {
            display: block;
            background: #fff;
            border-radius: 1.5rem;
            overflow: hidden;
            box-shadow: 0 10px 40px -10px rgba(0, 0, 0, 0.1);
            transition: transform 0.5s ease, box-shadow 0.5s ease;
        }
        .service-card:hover { transform: translateY(-8px); box-shadow: 0 20px 50px -10px rgba(0, 0, 0, 0.2); }
        .service-card-image { position: relative; height: 18rem; overflow: hidden; }
        .service-card-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s ease; }
        .service-card:hover .service-card-image img { transform: scale(1.1); }
        .service-card-image::after { content: ""; position: absolute; inset: 0; background: linear-gradient(to top, rgba(44,44,44,0.8), rgba(44,44,44,0.2) 50%, transparent); }
        .service-card-number {
            position: absolute;
            top: 1.5rem;
            left: 1.5rem;
            z-index: 1;
            width: 3.5rem;
            height: 3.5rem;
            border-radius: 1rem;
            border: 1px solid rgba(255, 255, 255, 0.2);
            background: rgba(255, 255, 255, 0.1);
            backdrop-filter: blur(12px);
            color: #fff;
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 1.5rem;
            font-weight: 300;
        }
        .service-card-image h3 { position: absolute; left: 1.5rem; right: 1.5rem; bottom: 1.5rem; z-index: 1; margin: 0; color: #fff; font-size: 1.9rem; font-weight: 300; }
        .service-card-body { padding: 2rem; }
        .service-card-body p { margin: 0 0 1.5rem; color: #6b6b6b; line-height: 1.6; }
        .service-card-body span { color: var(--teal); font-weight: 500; }
        .services-more { margin-top: 5rem; text-align: center; color: #6b6b6b; }
        .services-more a {
            display: inline-block;
            margin-left: 1.5rem;
            padding: 1rem 2rem;
            border-radius: 999px;
            color: #fff;
            background: linear-gradient(135deg, #1A5F5F 0%, #2A7A7A 50%, #1A5F5F 100%);
        }
        @media (max-width: 768px) {
            .services { padding: 6rem 0; }
            .services-inner { padding: 0 1.5rem; }
            .services-grid { grid-template-columns: 1fr; }
        }
    "#;

    html! {
        <section id="services" class="services">
            <style>{services_css}</style>
            <div class="services-inner">
                <Reveal class="services-header">
                    <span class="eyebrow">{"Layanan Kami"}</span>
                    <h2>{"Solusi "}<span class="text-gradient">{"Konstruksi"}</span>{" Terbaik"}</h2>
                    <p>{"Dari perencanaan hingga penyelesaian, kami hadir untuk mewujudkan impian Anda"}</p>
                </Reveal>
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <Reveal delay_ms={index as u32 * 150}>
                            <Link<Route> to={Route::ServiceDetail { id: service.id.to_string() }} classes="service-card">
                                <div class="service-card-image">
                                    <img src={service.image} alt={service.title} />
                                    <div class="service-card-number">{format!("{:02}", index + 1)}</div>
                                    <h3>{service.title}</h3>
                                </div>
                                <div class="service-card-body">
                                    <p>{service.description}</p>
                                    <span>{"Pelajari Lebih Lanjut →"}</span>
                                </div>
                            </Link<Route>>
                        </Reveal>
                    }) }
                </div>
                <div class="services-more">
                    {"Butuh layanan khusus?"}
                    <a href="#contact">{"Hubungi Kami"}</a>
                </div>
            </div>
        </section>
    }
}
