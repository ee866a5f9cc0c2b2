use askra_core::catalog::{apply_filters, FilterState};
use askra_core::data::PORTFOLIO_PROJECTS;
use askra_core::model::Category;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Home-page project strip with the category pills only. The full catalog
/// lives on the portfolio page.
#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let filter = use_state(FilterState::default);
    let projects = apply_filters(PORTFOLIO_PROJECTS, &filter);

    let pill = |label: &'static str, category: Option<Category>| {
        let active = filter.category == category;
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| {
                filter.set(FilterState {
                    category,
                    ..FilterState::default()
                })
            })
        };
        html! {
            <button class={classes!("strip-pill", active.then_some("active"))} {onclick}>
                <span class={classes!(active.then_some("text-gradient"))}>{label}</span>
            </button>
        }
    };

    let strip_css = r#"
        .strip { background: #E8E4DE; padding: 4rem 0 5rem; overflow: hidden; }
        .strip-header { max-width: 80rem; margin: 0 auto 2rem; padding: 0 3rem; }
        .strip-title { display: flex; align-items: center; justify-content: space-between; }
        .strip-title h2 { margin: 0; font-size: clamp(1.9rem, 5vw, 3.75rem); font-weight: 500; }
        .strip-title a { font-size: 0.85rem; letter-spacing: 0.1em; text-transform: uppercase; color: rgba(44,44,44,0.6); }
        .strip-pills { display: flex; flex-wrap: wrap; gap: 0.75rem; margin-top: 1rem; }
        .strip-pill {
            padding: 0.5rem 1.25rem;
            border: none;
            border-radius: 999px;
            background: rgba(44,44,44,0.05);
            color: rgba(44,44,44,0.6);
            font-size: 0.75rem;
            letter-spacing: 0.1em;
            text-transform: uppercase;
            cursor: pointer;
        }
        .strip-pill.active { background: #fff; box-shadow: 0 4px 12px rgba(0,0,0,0.08); }
        .strip-track { display: flex; gap: 2rem; padding: 0 3rem; overflow-x: auto; scroll-snap-type: x mandatory; }
        .strip-card { flex: 0 0 40vw; scroll-snap-align: start; }
        .strip-card-image { aspect-ratio: 4 / 3; overflow: hidden; border-radius: 0.5rem; margin-bottom: 1.25rem; }
        .strip-card-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s ease; }
        .strip-card:hover .strip-card-image img { transform: scale(1.1); }
        .strip-card-info { display: flex; justify-content: space-between; gap: 1rem; }
        .strip-card-info h3 { margin: 0; font-size: 1.5rem; font-weight: 500; }
        .strip-card:hover h3 { color: var(--teal); }
        .strip-card-info span { font-size: 0.75rem; letter-spacing: 0.1em; text-transform: uppercase; color: rgba(44,44,44,0.4); }
        .strip-card p { margin: 0.5rem 0 0; font-size: 0.9rem; color: rgba(44,44,44,0.5); }
        @media (max-width: 768px) {
            .strip-header, .strip-track { padding: 0 1rem; }
            .strip-card { flex-basis: 80vw; }
        }
    "#;

    html! {
        <section id="portfolio" class="strip">
            <style>{strip_css}</style>
            <div class="strip-header">
                <div class="strip-title">
                    <h2><span class="text-gradient">{"PROJECTS"}</span></h2>
                    <Link<Route> to={Route::Portfolio}>{"VIEW ALL →"}</Link<Route>>
                </div>
                <div class="strip-pills">
                    { pill("Semua", None) }
                    { for Category::ALL.iter().map(|&category| pill(category.label(), Some(category))) }
                </div>
            </div>
            <div class="strip-track">
                { for projects.iter().map(|project| html! {
                    <Link<Route> to={Route::PortfolioDetail { slug: project.slug.to_string() }} classes="strip-card">
                        <div class="strip-card-image">
                            <img src={project.image} alt={project.title} />
                        </div>
                        <div class="strip-card-info">
                            <h3>{project.title}</h3>
                            <span>{project.category.as_str()}</span>
                        </div>
                        <p>{project.location}</p>
                    </Link<Route>>
                }) }
            </div>
        </section>
    }
}
