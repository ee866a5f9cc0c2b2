use askra_core::slider::SliderMode;
use yew::prelude::*;

use crate::components::before_after_slider::BeforeAfterSlider;
use crate::components::reveal::Reveal;

#[function_component(Quote)]
pub fn quote() -> Html {
    html! {
        <section id="quote" class="quote">
            <style>{r#"
                .quote { background: #fff; padding: 5rem 0 8rem; overflow: hidden; }
                .quote h4 {
                    max-width: 56rem;
                    margin: 0 auto 6rem;
                    padding: 0 1rem;
                    text-align: center;
                    font-size: clamp(1.1rem, 3vw, 2.25rem);
                    font-weight: 300;
                    line-height: 1.3;
                    color: #374151;
                }
                .quote-slider { max-width: 64rem; margin: 0 auto; padding: 0 1rem; }
                .quote-hint { margin-top: 1.5rem; text-align: center; font-size: 0.8rem; letter-spacing: 0.2em; text-transform: uppercase; color: rgba(44,44,44,0.5); }
                @media (max-width: 768px) { .quote h4 { margin-bottom: 2rem; } }
            "#}</style>
            <Reveal>
                <h4>
                    {"Bermula dari mimpi, berakhir dengan"}<br />
                    {"kehangatan ruang yang nyaman bagi Anda."}
                </h4>
            </Reveal>
            <div class="quote-slider">
                <BeforeAfterSlider
                    before="/images/quote/before.png"
                    after="/images/quote/after.png"
                    mode={SliderMode::Hover}
                    labels={false}
                />
                <p class="quote-hint">{"Geser untuk membandingkan"}</p>
            </div>
        </section>
    }
}
