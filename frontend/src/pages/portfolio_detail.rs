use askra_core::catalog::{find_project, related_projects};
use askra_core::data::PORTFOLIO_PROJECTS;
use askra_core::model::Project;
use askra_core::motion::Theme;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{
    before_after_slider::BeforeAfterSlider, footer::Footer, navigation::Navigation,
    reveal::Reveal, whatsapp_button::WhatsAppButton,
};
use crate::pages::not_found::NotFound;
use crate::sections::cta::Cta;
use crate::utils::dom::SectionDecl;
use crate::utils::hooks::use_section_theme;
use crate::Route;

const SECTIONS: &[SectionDecl] = &[
    ("project-hero", Theme::Dark),
    ("project-info", Theme::Light),
    ("transformation", Theme::Light),
    ("gallery", Theme::Light),
    ("related", Theme::Light),
    ("contact", Theme::Dark),
    ("footer", Theme::Light),
];

#[derive(Properties, PartialEq)]
pub struct PortfolioDetailProps {
    pub slug: String,
}

#[function_component(PortfolioDetail)]
pub fn portfolio_detail(props: &PortfolioDetailProps) -> Html {
    match find_project(&props.slug) {
        Some(project) => html! { <ProjectView {project} /> },
        None => {
            log::info!("No project with slug {}", props.slug);
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct ProjectViewProps {
    project: &'static Project,
}

#[function_component(ProjectView)]
fn project_view(props: &ProjectViewProps) -> Html {
    let project = props.project;
    let theme = use_section_theme(SECTIONS);
    let related = related_projects(PORTFOLIO_PROJECTS, project);

    let info = [
        ("Location", project.location.to_string()),
        ("Category", project.category.as_str().to_string()),
        ("Floor Area", project.area.to_string()),
        ("Year", project.year.to_string()),
    ];

    let detail_css = r#"
        .project-page { background: var(--cream); color: var(--charcoal); }
        .project-hero { position: relative; height: 85vh; overflow: hidden; }
        .project-hero img { width: 100%; height: 100%; object-fit: cover; animation: project-zoom 1.5s ease-out; }
        .project-hero-shade { position: absolute; inset: 0; background: linear-gradient(to top, rgba(0,0,0,0.6), rgba(0,0,0,0.2) 50%, transparent); }
        .project-hero-text { position: absolute; left: 0; right: 0; bottom: 0; padding: 4rem; color: #fff; }
        .project-hero-text span { display: block; margin-bottom: 1rem; letter-spacing: 0.2em; text-transform: uppercase; color: rgba(255,255,255,0.7); }
        .project-hero-text h1 { margin: 0; font-size: clamp(2.25rem, 7vw, 4.5rem); font-weight: 700; letter-spacing: -0.02em; }
        .project-inner { max-width: 80rem; margin: 0 auto; padding: 6rem 4rem; }
        .project-facts { display: grid; grid-template-columns: repeat(4, 1fr); gap: 3rem; margin-bottom: 6rem; }
        .project-facts h3 { margin: 0 0 0.5rem; font-size: 0.8rem; letter-spacing: 0.2em; text-transform: uppercase; color: rgba(44,44,44,0.5); }
        .project-facts p { margin: 0; font-size: 1.25rem; font-weight: 500; text-transform: capitalize; }
        .project-description { margin: 0; font-size: clamp(1.5rem, 3vw, 2.25rem); font-weight: 300; line-height: 1.6; }
        .transformation { background: linear-gradient(to bottom, #F4F1EE, transparent); }
        .transformation h2 { margin: 0 0 0.5rem; font-size: clamp(1.9rem, 4vw, 3rem); font-weight: 600; }
        .transformation .lead { margin: 0 0 3rem; max-width: 42rem; font-size: 1.1rem; color: rgba(44,44,44,0.6); }
        .transformation-list { display: flex; flex-direction: column; gap: 4rem; }
        .gallery-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
        .gallery-item { position: relative; aspect-ratio: 4 / 3; overflow: hidden; border-radius: 0.5rem; }
        .gallery-item.wide { grid-column: span 2; aspect-ratio: 16 / 9; }
        .gallery-item img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s ease; }
        .gallery-item:hover img { transform: scale(1.05); }
        .related { border-top: 1px solid rgba(44,44,44,0.1); }
        .related-head { display: flex; align-items: center; justify-content: space-between; margin-bottom: 3rem; }
        .related-head h2 { margin: 0; font-size: clamp(1.5rem, 3vw, 2.25rem); font-weight: 600; }
        .related-head a { font-size: 0.85rem; letter-spacing: 0.15em; text-transform: uppercase; color: rgba(44,44,44,0.6); }
        .related-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
        .related-card .image { aspect-ratio: 4 / 3; overflow: hidden; border-radius: 0.5rem; margin-bottom: 1rem; }
        .related-card img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s ease; }
        .related-card:hover img { transform: scale(1.05); }
        .related-card small { font-size: 0.75rem; letter-spacing: 0.15em; text-transform: uppercase; color: rgba(44,44,44,0.5); }
        .related-card h3 { margin: 0.5rem 0 0; font-size: 1.2rem; font-weight: 500; }
        .related-card:hover h3 { color: var(--teal); }
        @keyframes project-zoom { from { transform: scale(1.1); } to { transform: none; } }
        @media (max-width: 768px) {
            .project-hero { height: 70vh; }
            .project-hero-text { padding: 1.5rem; }
            .project-inner { padding: 4rem 1.5rem; }
            .project-facts { grid-template-columns: 1fr 1fr; gap: 2rem; margin-bottom: 4rem; }
            .gallery-grid, .related-grid { grid-template-columns: 1fr; }
            .gallery-item.wide { grid-column: auto; }
        }
    "#;

    html! {
        <div class="project-page">
            <style>{detail_css}</style>
            <Navigation sections={SECTIONS} />
            <main>
                <section id="project-hero" class="project-hero">
                    <img src={project.image} alt={project.title} />
                    <div class="project-hero-shade"></div>
                    <div class="project-hero-text">
                        <Reveal delay_ms={500}>
                            <span>{project.services}</span>
                            <h1>{project.title}</h1>
                        </Reveal>
                    </div>
                </section>

                <section id="project-info">
                    <div class="project-inner">
                        <div class="project-facts">
                            { for info.into_iter().enumerate().map(|(index, (label, value))| html! {
                                <Reveal delay_ms={index as u32 * 100}>
                                    <h3>{label}</h3>
                                    <p>{value}</p>
                                </Reveal>
                            }) }
                        </div>
                        <Reveal>
                            <p class="project-description">{project.description}</p>
                        </Reveal>
                    </div>
                </section>

                if !project.before_after.is_empty() {
                    <section id="transformation" class="transformation">
                        <div class="project-inner">
                            <Reveal>
                                <h2>{"Transformasi Luar Biasa"}</h2>
                                <p class="lead">{"Lihat perubahan dramatis dari kondisi sebelum dan sesudah renovasi"}</p>
                            </Reveal>
                            <div class="transformation-list">
                                { for project.before_after.iter().enumerate().map(|(index, pair)| html! {
                                    <Reveal delay_ms={index as u32 * 200}>
                                        <BeforeAfterSlider
                                            before={pair.before}
                                            after={pair.after}
                                            title={pair.title.map(AttrValue::Static)}
                                        />
                                    </Reveal>
                                }) }
                            </div>
                        </div>
                    </section>
                }

                <section id="gallery">
                    <div class="project-inner gallery-grid">
                        { for project.gallery.iter().enumerate().map(|(index, image)| html! {
                            <Reveal
                                class={classes!("gallery-item", (index == 0).then_some("wide"))}
                                delay_ms={index as u32 * 100}
                            >
                                <img src={*image} alt={format!("{} - Image {}", project.title, index + 1)} loading="lazy" />
                            </Reveal>
                        }) }
                    </div>
                </section>

                if !related.is_empty() {
                    <section id="related" class="related">
                        <div class="project-inner">
                            <div class="related-head">
                                <h2>{"Related Projects"}</h2>
                                <Link<Route> to={Route::Portfolio}>{"View All"}</Link<Route>>
                            </div>
                            <div class="related-grid">
                                { for related.iter().enumerate().map(|(index, other)| html! {
                                    <Reveal delay_ms={index as u32 * 100}>
                                        <Link<Route> to={Route::PortfolioDetail { slug: other.slug.to_string() }} classes="related-card">
                                            <div class="image">
                                                <img src={other.image} alt={other.title} loading="lazy" />
                                            </div>
                                            <small>{format!("{} • {}", other.category.as_str(), other.year)}</small>
                                            <h3>{other.title}</h3>
                                        </Link<Route>>
                                    </Reveal>
                                }) }
                            </div>
                        </div>
                    </section>
                }

                <Cta
                    title="Let's collaborate together."
                    text="Punya proyek serupa? Ceritakan kebutuhan Anda dan kami bantu wujudkan."
                />
            </main>
            <Footer />
            <WhatsAppButton {theme} />
        </div>
    }
}
