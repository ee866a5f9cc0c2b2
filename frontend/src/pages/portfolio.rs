use askra_core::carousel::Carousel;
use askra_core::catalog::{apply_filters, choice, featured_projects, Facets, FilterState, ALL};
use askra_core::data::PORTFOLIO_PROJECTS;
use askra_core::model::{Category, Project};
use askra_core::motion::Theme;
use wasm_bindgen::JsValue;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{footer::Footer, navigation::Navigation, whatsapp_button::WhatsAppButton};
use crate::utils::dom::SectionDecl;
use crate::utils::hooks::use_section_theme;
use crate::Route;

const SECTIONS: &[SectionDecl] = &[
    ("featured", Theme::Dark),
    ("catalog", Theme::Light),
    ("footer", Theme::Light),
];

/// Mirrors the active filters into the address bar without adding a history
/// entry, so a filtered listing can be shared.
fn sync_query(state: &FilterState) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let query = state.to_query();
    let url = if query.is_empty() {
        "/portfolio".to_string()
    } else {
        format!("/portfolio?{}", query)
    };
    if let Ok(history) = window.history() {
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
            log::warn!("Could not update the portfolio URL: {:?}", e);
        }
    }
}

#[derive(Properties, PartialEq)]
struct FeaturedProps {
    projects: &'static [Project],
}

/// Full-screen carousel of the featured projects with manual controls.
#[function_component(Featured)]
fn featured(props: &FeaturedProps) -> Html {
    let carousel = use_state(|| Carousel::new(props.projects.len()));
    let Some(project) = carousel.current().map(|i| &props.projects[i]) else {
        return html! {};
    };

    let prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.prev()))
    };
    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.next()))
    };

    html! {
        <section id="featured" class="featured">
            <div class="featured-slide" key={project.id}>
                <img src={project.image} alt={project.title} />
                <div class="featured-shade"></div>
            </div>
            <div class="featured-content" key={format!("text-{}", project.id)}>
                <span class="featured-rule"></span>
                <h1>{project.title}</h1>
                <div class="featured-meta">
                    <span>{project.location}</span>
                    <span class="sep">{"|"}</span>
                    <span>{project.year}</span>
                    <span class="sep">{"|"}</span>
                    <span class="category">{project.category.as_str()}</span>
                </div>
                <p>{project.description}</p>
                <Link<Route> to={Route::PortfolioDetail { slug: project.slug.to_string() }} classes="featured-link">
                    {"View Details →"}
                </Link<Route>>
            </div>
            <div class="featured-controls">
                <button onclick={prev} aria-label="Previous project">{"‹"}</button>
                <span class="featured-counter">{carousel.counter()}</span>
                <button onclick={next} aria-label="Next project">{"›"}</button>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FacetSelectProps {
    label: &'static str,
    options: Vec<&'static str>,
    value: Option<String>,
    onchange: Callback<Option<String>>,
}

#[function_component(FacetSelect)]
fn facet_select(props: &FacetSelectProps) -> Html {
    let onchange = {
        let on_pick = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_pick.emit(choice(&select.value()));
        })
    };
    let selected = props.value.as_deref();

    html! {
        <label class="facet">
            <span>{props.label}</span>
            <select {onchange}>
                <option value={ALL} selected={selected.is_none()}>{"Semua"}</option>
                { for props.options.iter().map(|&option| html! {
                    <option value={option} selected={selected == Some(option)}>{option}</option>
                }) }
            </select>
        </label>
    }
}

/// The portfolio listing: featured carousel on top, then the filterable
/// catalog. Filters start from the URL query and are written back to it.
#[function_component(PortfolioContent)]
pub fn portfolio_content() -> Html {
    let query = use_location()
        .map(|location| location.query_str().to_string())
        .unwrap_or_default();
    let filter = use_state(|| FilterState::from_query(&query));
    let facets = use_memo(|_| Facets::from_projects(PORTFOLIO_PROJECTS), ());
    let theme = use_section_theme(SECTIONS);

    use_effect_with_deps(
        |state: &FilterState| {
            sync_query(state);
            || ()
        },
        (*filter).clone(),
    );

    // Every control edits a copy of the current state and stores it whole.
    let update = {
        let filter = filter.clone();
        move |edit: fn(&mut FilterState, Option<String>)| {
            let filter = filter.clone();
            Callback::from(move |value: Option<String>| {
                let mut next = (*filter).clone();
                edit(&mut next, value);
                filter.set(next);
            })
        }
    };

    let on_service = update(|state, value| state.service = value);
    let on_year = update(|state, value| state.year = value);
    let on_location = update(|state, value| state.location = value);

    let on_search = {
        let on_text = update(|state, value| state.search = value.unwrap_or_default());
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_text.emit(Some(input.value()));
        })
    };

    let reset = {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*filter).clone();
            next.reset();
            filter.set(next);
        })
    };

    let category_button = |label: &'static str, category: Option<Category>| {
        let active = filter.category == category;
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| {
                filter.set(FilterState {
                    category,
                    ..(*filter).clone()
                })
            })
        };
        html! {
            <button class={classes!("category", active.then_some("active"))} {onclick}>{label}</button>
        }
    };

    let projects = apply_filters(PORTFOLIO_PROJECTS, &filter);
    log::debug!("Portfolio filter {:?} matched {} projects", *filter, projects.len());

    let portfolio_css = r#"
        .portfolio-page { min-height: 100vh; background: var(--cream); color: var(--charcoal); }
        .featured { position: relative; height: 100vh; overflow: hidden; background: linear-gradient(135deg, #6B2D2E, #9E4244); }
        .featured-slide { position: absolute; inset: 0; animation: featured-in 1.2s ease-out; }
        .featured-slide img { width: 100%; height: 100%; object-fit: cover; }
        .featured-shade { position: absolute; inset: 0; background: linear-gradient(to right, rgba(0,0,0,0.7), rgba(0,0,0,0.2) 50%, transparent), linear-gradient(to top, rgba(0,0,0,0.9), transparent 60%); }
        .featured-content { position: absolute; inset: 0; z-index: 1; display: flex; flex-direction: column; justify-content: center; max-width: 56rem; padding: 0 6rem; color: #fff; animation: featured-text 0.8s ease 0.2s both; }
        .featured-rule { width: 3rem; height: 1px; background: var(--teal); margin-bottom: 1rem; }
        .featured-content h1 { margin: 0 0 1rem; font-size: clamp(2.25rem, 8vw, 6rem); font-weight: 500; line-height: 1.05; }
        .featured-meta { display: flex; flex-wrap: wrap; gap: 1.5rem; margin-bottom: 1.5rem; color: rgba(255,255,255,0.8); font-weight: 300; }
        .featured-meta .sep { color: rgba(255,255,255,0.3); }
        .featured-meta .category { text-transform: uppercase; letter-spacing: 0.2em; color: #6FD1C8; font-weight: 600; }
        .featured-content p { margin: 0 0 1.5rem; max-width: 42rem; line-height: 1.7; font-weight: 300; color: rgba(255,255,255,0.9); }
        .featured-link { align-self: flex-start; padding-bottom: 0.25rem; border-bottom: 1px solid rgba(255,255,255,0.3); }
        .featured-controls { position: absolute; right: 6rem; bottom: 2.5rem; z-index: 2; display: flex; align-items: center; gap: 1rem; color: #fff; }
        .featured-controls button { width: 3rem; height: 3rem; border-radius: 50%; border: 1px solid rgba(255,255,255,0.2); background: rgba(0,0,0,0.1); color: #fff; font-size: 1.25rem; cursor: pointer; }
        .featured-counter { font-family: monospace; font-size: 1.25rem; }
        .catalog { max-width: 80rem; margin: 0 auto; padding: 6rem 3rem; }
        .catalog-intro .eyebrow { display: block; margin-bottom: 1rem; color: var(--teal); font-size: 0.85rem; letter-spacing: 0.2em; text-transform: uppercase; }
        .catalog-intro h2 { margin: 0 0 1.5rem; font-size: clamp(2.25rem, 5vw, 3rem); font-weight: 500; }
        .catalog-intro p { margin: 0 0 3rem; max-width: 42rem; color: rgba(44,44,44,0.6); font-size: 1.1rem; line-height: 1.7; }
        .catalog-tools { display: flex; flex-wrap: wrap; align-items: flex-end; justify-content: space-between; gap: 1.5rem; padding-bottom: 1.5rem; margin-bottom: 4rem; border-bottom: 1px solid rgba(44,44,44,0.1); }
        .catalog-tools .categories { display: flex; flex-wrap: wrap; gap: 0.5rem; }
        .catalog-tools button.category { padding: 0.5rem 1.5rem; border-radius: 999px; border: 1px solid transparent; background: transparent; color: rgba(44,44,44,0.6); cursor: pointer; }
        .catalog-tools button.category.active { background: linear-gradient(to right, #6B2D2E, #9E4244); color: #fff; }
        .facets { display: flex; flex-wrap: wrap; gap: 1rem; }
        .facet { display: flex; flex-direction: column; gap: 0.25rem; font-size: 0.7rem; letter-spacing: 0.15em; text-transform: uppercase; color: rgba(44,44,44,0.5); }
        .facet select, .catalog-search input { padding: 0.7rem 1.25rem; border: 1px solid rgba(44,44,44,0.1); border-radius: 999px; background: #fff; font: inherit; font-size: 0.9rem; text-transform: none; letter-spacing: normal; color: var(--charcoal); }
        .catalog-search input { width: 18rem; }
        .catalog-reset { padding: 0.7rem 1.25rem; border: none; background: none; color: var(--rose); cursor: pointer; text-decoration: underline; }
        .catalog-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 3rem 2rem; }
        .catalog-card { display: block; animation: featured-text 0.5s ease both; }
        .catalog-card-image { position: relative; aspect-ratio: 4 / 5; overflow: hidden; margin-bottom: 1.5rem; background: rgba(44,44,44,0.05); }
        .catalog-card-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s ease; }
        .catalog-card:hover .catalog-card-image img { transform: scale(1.05); }
        .catalog-card-overlay { position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 0.5rem; padding: 1.5rem; text-align: center; color: #fff; background: rgba(0,0,0,0.6); opacity: 0; transition: opacity 0.3s ease; }
        .catalog-card:hover .catalog-card-overlay { opacity: 1; }
        .catalog-card h3 { margin: 0 0 0.25rem; font-size: 1.1rem; font-weight: 500; }
        .catalog-card:hover h3 { color: var(--teal); }
        .catalog-card small { color: rgba(44,44,44,0.5); text-transform: uppercase; letter-spacing: 0.1em; }
        .catalog-empty { grid-column: 1 / -1; padding: 5rem 0; text-align: center; }
        .catalog-empty h3 { margin: 0 0 0.5rem; font-size: 1.25rem; font-weight: 500; }
        .catalog-empty p { margin: 0; color: rgba(44,44,44,0.5); }
        @keyframes featured-in { from { opacity: 0; transform: scale(1.05); } to { opacity: 1; transform: none; } }
        @keyframes featured-text { from { opacity: 0; transform: translateY(30px); } to { opacity: 1; transform: none; } }
        @media (max-width: 768px) {
            .featured-content { padding: 0 1.5rem; }
            .featured-controls { right: 1.5rem; bottom: 6rem; }
            .catalog { padding: 4rem 1.5rem; }
            .catalog-grid { grid-template-columns: 1fr; }
            .catalog-search input { width: 100%; }
        }
        @media (min-width: 769px) and (max-width: 1200px) { .catalog-grid { grid-template-columns: repeat(2, 1fr); } }
    "#;

    html! {
        <div class="portfolio-page">
            <style>{portfolio_css}</style>
            <Navigation sections={SECTIONS} />
            <main>
                <Featured projects={featured_projects()} />
                <section id="catalog" class="catalog">
                    <div class="catalog-intro">
                        <span class="eyebrow">{"Our Portfolio"}</span>
                        <h2>{"Crafting spaces that inspire and endure."}</h2>
                        <p>
                            {"Explore our diverse portfolio of residential and commercial projects, each reflecting our commitment to design excellence and functional innovation."}
                        </p>
                    </div>
                    <div class="catalog-tools">
                        <div class="categories">
                            { category_button("All Work", None) }
                            { for Category::ALL.iter().map(|&category| category_button(category.label(), Some(category))) }
                        </div>
                        <div class="facets">
                            <FacetSelect label="Layanan" options={facets.services.clone()} value={filter.service.clone()} onchange={on_service} />
                            <FacetSelect label="Tahun" options={facets.years.clone()} value={filter.year.clone()} onchange={on_year} />
                            <FacetSelect label="Lokasi" options={facets.locations.clone()} value={filter.location.clone()} onchange={on_location} />
                        </div>
                        <div class="catalog-search">
                            <input
                                type="text"
                                placeholder="Search by name, location..."
                                value={filter.search.clone()}
                                oninput={on_search}
                            />
                            if filter.has_active_filters() {
                                <button class="catalog-reset" onclick={reset.clone()}>{"Reset"}</button>
                            }
                        </div>
                    </div>
                    <div class="catalog-grid">
                        if projects.is_empty() {
                            <div class="catalog-empty">
                                <h3>{"No projects found."}</h3>
                                <p>{"Try searching for something else or change the filter."}</p>
                                <button class="catalog-reset" onclick={reset}>{"Reset filters"}</button>
                            </div>
                        } else {
                            { for projects.iter().enumerate().map(|(index, project)| html! {
                                <Link<Route> to={Route::PortfolioDetail { slug: project.slug.to_string() }} classes="catalog-card">
                                    <div class="catalog-card-image" style={format!("animation-delay: {}ms;", index * 50)}>
                                        <img src={project.image} alt={project.title} />
                                        <div class="catalog-card-overlay">
                                            <span>{"View Project"}</span>
                                            <h3>{project.title}</h3>
                                            <small>{format!("{} • {}", project.location, project.year)}</small>
                                        </div>
                                    </div>
                                    <h3>{project.title}</h3>
                                    <small>{format!("{} · {}", project.category.as_str(), project.location)}</small>
                                </Link<Route>>
                            }) }
                        }
                    </div>
                </section>
            </main>
            <Footer />
            <WhatsAppButton {theme} />
        </div>
    }
}
