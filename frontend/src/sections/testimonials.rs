use askra_core::carousel::Carousel;
use askra_core::data::TESTIMONIALS;
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::reveal::Reveal;

const ROTATE_MS: u32 = 5_000;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_state(|| Carousel::new(TESTIMONIALS.len()));

    // Restarted after every manual change so a click gets a full interval.
    {
        let current = *carousel;
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(ROTATE_MS, move || carousel.set(carousel.next()));
                move || drop(interval)
            },
            current,
        );
    }

    let Some(index) = carousel.current() else {
        return html! {};
    };
    let testimonial = &TESTIMONIALS[index];

    let go = |target: Carousel| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(target))
    };

    let testimonials_css = r#"
        .testimonials { background: #F8F8F8; padding: 8rem 0; }
        .testimonials-inner { max-width: 64rem; margin: 0 auto; padding: 0 1.5rem; text-align: center; }
        .testimonials h2 { margin: 0 0 3rem; font-size: clamp(2rem, 5vw, 3.5rem); font-weight: 500; }
        .testimonial { min-height: 300px; animation: testimonial-in 0.6s ease; }
        .testimonial blockquote { margin: 0 0 2.5rem; font-size: clamp(1.4rem, 3vw, 2.25rem); font-weight: 300; font-style: italic; line-height: 1.5; color: #4a4a4a; }
        .testimonial .name { margin: 0 0 0.25rem; font-size: 1.25rem; font-weight: 600; }
        .testimonial .role { margin: 0; color: var(--rose); font-weight: 500; }
        .testimonial-dots { display: flex; justify-content: center; gap: 0.75rem; margin-top: 3rem; }
        .testimonial-dots button { width: 0.5rem; height: 0.5rem; border: none; border-radius: 999px; background: rgba(74,74,74,0.3); cursor: pointer; transition: width 0.3s ease; }
        .testimonial-dots button.active { width: 2rem; background: var(--rose); }
        .testimonial-arrows { display: flex; justify-content: center; gap: 1rem; margin-top: 2rem; }
        .testimonial-arrows button { width: 3rem; height: 3rem; border-radius: 50%; border: 1px solid rgba(44,44,44,0.2); background: transparent; cursor: pointer; }
        @keyframes testimonial-in { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: none; } }
    "#;

    html! {
        <section id="testimonials" class="testimonials">
            <style>{testimonials_css}</style>
            <div class="testimonials-inner">
                <Reveal>
                    <h2>{"Client Stories"}</h2>
                </Reveal>
                <div class="testimonial" key={testimonial.id}>
                    <blockquote>{format!("\"{}\"", testimonial.content)}</blockquote>
                    <p class="name">{testimonial.name}</p>
                    <p class="role">{testimonial.role}</p>
                </div>
                <div class="testimonial-dots">
                    { for (0..carousel.len()).map(|i| html! {
                        <button
                            class={classes!((i == index).then_some("active"))}
                            onclick={go(carousel.go_to(i))}
                            aria-label={format!("Go to testimonial {}", i + 1)}
                        />
                    }) }
                </div>
                <div class="testimonial-arrows">
                    <button onclick={go(carousel.prev())} aria-label="Previous testimonial">{"←"}</button>
                    <button onclick={go(carousel.next())} aria-label="Next testimonial">{"→"}</button>
                </div>
            </div>
        </section>
    }
}
