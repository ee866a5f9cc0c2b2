use yew::prelude::*;

use crate::utils::hooks::use_in_view;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Transition delay once the block enters the viewport.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or(0.15)]
    pub threshold: f64,
}

/// Fades and lifts its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), props.threshold);

    let style = format!("transition-delay: {}ms;", props.delay_ms);
    html! {
        <div
            ref={node}
            class={classes!("reveal", visible.then_some("revealed"), props.class.clone())}
            {style}
        >
            <style>{".reveal { opacity: 0; transform: translateY(32px); transition: opacity 0.8s ease, transform 0.8s ease; } .reveal.revealed { opacity: 1; transform: none; }"}</style>
            { for props.children.iter() }
        </div>
    }
}
