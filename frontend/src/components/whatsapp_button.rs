use askra_core::contact::{whatsapp_url, WHATSAPP_GREETING};
use askra_core::data::CONTACT_INFO;
use askra_core::motion::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WhatsAppButtonProps {
    /// Theme of the section behind the button.
    #[prop_or_default]
    pub theme: Theme,
}

#[function_component(WhatsAppButton)]
pub fn whatsapp_button(props: &WhatsAppButtonProps) -> Html {
    let href = whatsapp_url(CONTACT_INFO.whatsapp, Some(WHATSAPP_GREETING));
    let style = match props.theme {
        Theme::Light => "background: rgba(0, 0, 0, 0.08); border: 1px solid rgba(0, 0, 0, 0.1); color: #1f8f4e;",
        Theme::Dark => "background: rgba(255, 255, 255, 0.15); border: 1px solid rgba(255, 255, 255, 0.2); color: #ffffff;",
    };

    html! {
        <>
            <style>{r#"
                .whatsapp-button {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    z-index: 40;
                    width: 56px;
                    height: 56px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    backdrop-filter: blur(20px);
                    -webkit-backdrop-filter: blur(20px);
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.1);
                    transition: background 0.3s ease, border-color 0.3s ease, transform 0.2s ease;
                }
                .whatsapp-button:hover { transform: scale(1.08); }
                .whatsapp-button svg { width: 26px; height: 26px; fill: currentColor; }
            "#}</style>
            <a
                class="whatsapp-button"
                href={href}
                target="_blank"
                rel="noopener noreferrer"
                aria-label="Chat on WhatsApp"
                {style}
            >
                <svg viewBox="0 0 24 24">
                    <path d="M17.5 14.4c-.3-.1-1.8-.9-2-1-.3-.1-.5-.1-.7.1-.2.3-.8 1-.9 1.2-.2.2-.3.2-.6.1-.3-.1-1.3-.5-2.4-1.5-.9-.8-1.5-1.8-1.7-2.1-.2-.3 0-.5.1-.6l.4-.5c.1-.2.2-.3.3-.5.1-.2 0-.4 0-.5l-.9-2.2c-.2-.6-.5-.5-.7-.5h-.6c-.2 0-.5.1-.8.4-.3.3-1 1-1 2.5s1.1 2.9 1.2 3.1c.1.2 2.1 3.2 5.1 4.5.7.3 1.3.5 1.7.6.7.2 1.4.2 1.9.1.6-.1 1.8-.7 2-1.4.2-.7.2-1.3.2-1.4-.1-.1-.3-.2-.6-.3zM12 21.8c-1.8 0-3.5-.5-5-1.4l-.4-.2-3.7 1 1-3.6-.2-.4C2.7 15.6 2.2 13.8 2.2 12 2.2 6.6 6.6 2.2 12 2.2s9.8 4.4 9.8 9.8-4.4 9.8-9.8 9.8zM12 0C5.4 0 0 5.4 0 12c0 2.1.6 4.2 1.6 6L0 24l6.2-1.6c1.8 1 3.8 1.5 5.8 1.5 6.6 0 12-5.4 12-12S18.6 0 12 0z" />
                </svg>
            </a>
        </>
    }
}
