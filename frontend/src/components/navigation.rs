use askra_core::contact::{mailto, whatsapp_url};
use askra_core::data::CONTACT_INFO;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::utils::dom::SectionDecl;
use crate::utils::hooks::use_active_section;
use crate::Route;

enum Target {
    Section(&'static str),
    Page(Route),
}

fn menu() -> [(&'static str, Target); 6] {
    [
        ("Home", Target::Section("hero")),
        ("About", Target::Page(Route::About)),
        ("Services", Target::Section("services")),
        ("Portfolio", Target::Page(Route::Portfolio)),
        ("Testimonials", Target::Section("testimonials")),
        ("Contact", Target::Page(Route::Contact)),
    ]
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    /// Sections of the current page to highlight in the menu while scrolled to.
    #[prop_or_default]
    pub sections: &'static [SectionDecl],
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let is_open = use_state(|| false);
    let active = use_active_section(props.sections);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };
    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };

    let nav_css = r#"
        .nav-toggle {
            position: fixed;
            top: 1.5rem;
            right: 1.5rem;
            z-index: 60;
            width: 48px;
            height: 48px;
            border: none;
            border-radius: 50%;
            background: rgba(255, 255, 255, 0.15);
            backdrop-filter: blur(12px);
            cursor: pointer;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            gap: 5px;
        }
        .nav-toggle span {
            display: block;
            width: 20px;
            height: 1.5px;
            background: #fff;
            mix-blend-mode: difference;
            transition: transform 0.3s ease, opacity 0.3s ease;
        }
        .nav-toggle.open span:nth-child(1) { transform: translateY(6.5px) rotate(45deg); }
        .nav-toggle.open span:nth-child(2) { opacity: 0; }
        .nav-toggle.open span:nth-child(3) { transform: translateY(-6.5px) rotate(-45deg); }
        .nav-logo {
            position: fixed;
            top: 1.75rem;
            left: 1.5rem;
            z-index: 60;
            color: #fff;
            mix-blend-mode: difference;
            font-weight: 600;
            letter-spacing: 0.3em;
        }
        .nav-overlay {
            position: fixed;
            inset: 0;
            z-index: 55;
            background: #1a1a1a;
            display: flex;
            flex-direction: column;
            justify-content: center;
            align-items: flex-end;
            padding: 6rem 3rem;
            animation: nav-in 0.4s ease;
        }
        .nav-overlay nav { display: flex; flex-direction: column; align-items: flex-end; }
        .nav-overlay a.nav-item {
            color: rgba(255, 255, 255, 0.5);
            font-size: clamp(2.5rem, 7vw, 5rem);
            font-weight: 300;
            letter-spacing: -0.02em;
            line-height: 1.15;
            transition: color 0.3s ease;
        }
        .nav-overlay a.nav-item:hover,
        .nav-overlay a.nav-item.active { color: #fff; }
        .nav-socials {
            position: absolute;
            left: 3rem;
            bottom: 3rem;
            display: flex;
            gap: 2rem;
            font-size: 0.8rem;
            letter-spacing: 0.2em;
            text-transform: uppercase;
            color: rgba(255, 255, 255, 0.5);
        }
        @keyframes nav-in { from { opacity: 0; } to { opacity: 1; } }
        @media (max-width: 768px) {
            .nav-overlay { padding: 5rem 1.5rem; }
            .nav-socials { left: 1.5rem; }
        }
    "#;

    let items = menu()
        .into_iter()
        .map(|(label, target)| match target {
            Target::Section(id) => {
                let class = classes!("nav-item", (active == Some(id)).then_some("active"));
                html! {
                    <a class={class} href={format!("/#{}", id)} onclick={close.clone()}>{label}</a>
                }
            }
            Target::Page(route) => html! {
                <span onclick={close.clone()}>
                    <Link<Route> to={route} classes="nav-item">{label}</Link<Route>>
                </span>
            },
        })
        .collect::<Html>();

    html! {
        <>
            <style>{nav_css}</style>
            <Link<Route> to={Route::Home} classes="nav-logo">{"ASKRA"}</Link<Route>>
            <button
                class={classes!("nav-toggle", is_open.then_some("open"))}
                onclick={toggle}
                aria-label="Toggle menu"
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
            if *is_open {
                <div class="nav-overlay">
                    <nav>{items}</nav>
                    <div class="nav-socials">
                        <a href={mailto(&CONTACT_INFO)}>{"Email"}</a>
                        <a href={whatsapp_url(CONTACT_INFO.whatsapp, None)} target="_blank" rel="noopener noreferrer">{"WhatsApp"}</a>
                        <a href="https://instagram.com" target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                    </div>
                </div>
            }
        </>
    }
}
