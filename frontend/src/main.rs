use askra_core::page::Page;
use yew::prelude::*;
use yew_router::prelude::*;

mod utils {
    pub mod dom;
    pub mod hooks;
}
mod components {
    pub mod before_after_slider;
    pub mod footer;
    pub mod navigation;
    pub mod preloader;
    pub mod reveal;
    pub mod whatsapp_button;
}
mod sections {
    pub mod about;
    pub mod cta;
    pub mod hero;
    pub mod portfolio;
    pub mod quote;
    pub mod services;
    pub mod tagline;
    pub mod testimonials;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod portfolio;
    pub mod portfolio_detail;
    pub mod service_detail;
}

use pages::{
    about::About, contact::Contact, home::Home, not_found::NotFound, portfolio::PortfolioContent,
    portfolio_detail::PortfolioDetail, service_detail::ServiceDetail,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/portfolio")]
    Portfolio,
    #[at("/portfolio/:slug")]
    PortfolioDetail { slug: String },
    #[at("/services/:id")]
    ServiceDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// When the app started, in `Date.now()` milliseconds. Provided once by
/// [`App`] so the preloader and the hero agree on how much of the splash is
/// left.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AppClock {
    pub started_at_ms: f64,
}

impl AppClock {
    pub fn now() -> Self {
        Self {
            started_at_ms: js_sys::Date::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        js_sys::Date::now() - self.started_at_ms
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::About => html! { <About /> },
        Route::Contact => html! { <Contact /> },
        Route::Portfolio => html! { <PortfolioContent /> },
        Route::PortfolioDetail { slug } => html! { <PortfolioDetail slug={slug} /> },
        Route::ServiceDetail { id } => html! { <ServiceDetail id={id} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

/// Keeps `document.title` in step with the current route, using the same
/// metadata the server injects into the shell.
#[function_component(DocumentTitle)]
fn document_title() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    use_effect_with_deps(
        move |path| {
            let title = Page::resolve(path).meta().document_title();
            utils::dom::set_document_title(&title);
            utils::dom::scroll_to_top();
            || ()
        },
        path,
    );

    html! {}
}

#[function_component(App)]
fn app() -> Html {
    let clock = use_state(AppClock::now);

    html! {
        <ContextProvider<AppClock> context={*clock}>
            <BrowserRouter>
                <DocumentTitle />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<AppClock>>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Starting ASKRA frontend");
    yew::Renderer::<App>::new().render();
}
