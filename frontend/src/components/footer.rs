use askra_core::data::{COMPANY_INFO, SERVICES};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    let footer_css = r#"
        .site-footer {
            position: relative;
            background: var(--cream);
            color: var(--charcoal);
            padding: 6rem 0 2rem;
            border-top: 1px solid rgba(44, 44, 44, 0.1);
            font-weight: 300;
        }
        .footer-inner { max-width: 80rem; margin: 0 auto; padding: 0 3rem; }
        .footer-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; margin-bottom: 6rem; }
        .footer-grid h4 {
            margin: 0 0 1.5rem;
            padding-bottom: 1rem;
            border-bottom: 1px solid rgba(44, 44, 44, 0.2);
            font-size: 0.75rem;
            font-weight: 600;
            letter-spacing: 0.25em;
            text-transform: uppercase;
        }
        .footer-grid ul { list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 1rem; }
        .footer-grid li { font-size: 0.75rem; font-weight: 600; letter-spacing: 0.1em; text-transform: uppercase; }
        .footer-grid a:hover { color: #C9A961; }
        .footer-brand {
            display: flex;
            align-items: center;
            justify-content: center;
            gap: 3rem;
            padding: 4rem 0;
            margin-bottom: 2rem;
            border-top: 1px solid rgba(44, 44, 44, 0.1);
            border-bottom: 1px solid rgba(44, 44, 44, 0.1);
        }
        .footer-brand img { width: 128px; height: 128px; object-fit: contain; }
        .footer-brand h4 { margin: 0; font-size: clamp(2.5rem, 8vw, 6rem); font-weight: 700; letter-spacing: -0.03em; }
        .footer-brand p { margin: 0.5rem 0 0; font-size: 0.8rem; letter-spacing: 0.4em; font-weight: 700; }
        .footer-legal {
            display: flex;
            justify-content: space-between;
            font-size: 0.65rem;
            letter-spacing: 0.2em;
            text-transform: uppercase;
            color: rgba(44, 44, 44, 0.6);
        }
        @media (max-width: 768px) {
            .footer-inner { padding: 0 1.5rem; }
            .footer-grid { grid-template-columns: repeat(2, 1fr); }
            .footer-brand, .footer-legal { flex-direction: column; text-align: center; gap: 1.5rem; }
        }
    "#;

    html! {
        <footer id="footer" class="site-footer">
            <style>{footer_css}</style>
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <h4>{"Pages"}</h4>
                        <ul>
                            <li><Link<Route> to={Route::Home}>{"Home"}</Link<Route>></li>
                            <li><Link<Route> to={Route::About}>{"About Us"}</Link<Route>></li>
                            <li><a href="/#services">{"Services"}</a></li>
                            <li><Link<Route> to={Route::Portfolio}>{"Portfolio"}</Link<Route>></li>
                            <li><a href="/#testimonials">{"Reviews"}</a></li>
                            <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                        </ul>
                    </div>
                    <div>
                        <h4>{"Locations"}</h4>
                        <ul>
                            <li>{"Jakarta"}</li>
                            <li>{"Bali"}</li>
                        </ul>
                    </div>
                    <div>
                        <h4>{"Services"}</h4>
                        <ul>
                            { for SERVICES.iter().map(|service| html! {
                                <li>
                                    <Link<Route> to={Route::ServiceDetail { id: service.id.to_string() }}>
                                        {service.title}
                                    </Link<Route>>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Socials"}</h4>
                        <ul>
                            <li><a href="https://linkedin.com" target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a></li>
                            <li><a href="https://instagram.com" target="_blank" rel="noopener noreferrer">{"Instagram"}</a></li>
                            <li><a href="https://youtube.com" target="_blank" rel="noopener noreferrer">{"YouTube"}</a></li>
                        </ul>
                    </div>
                </div>
                <div class="footer-brand">
                    <img src="/images/logo-fix.png" alt="Askra Logo" />
                    <div>
                        <h4>{"ASKRA KONSTRUKSI"}</h4>
                        <p>{COMPANY_INFO.full_name}</p>
                    </div>
                </div>
                <div class="footer-legal">
                    <span>{format!("© {} {}. All Rights Reserved.", year, COMPANY_INFO.full_name)}</span>
                    <span>{COMPANY_INFO.tagline}</span>
                </div>
            </div>
        </footer>
    }
}
