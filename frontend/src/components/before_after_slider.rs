use std::rc::Rc;

use askra_core::slider::{Bounds, SliderMode, SliderState};
use yew::prelude::*;

use crate::utils::dom;

enum SliderAction {
    Press(Option<(f64, Bounds)>),
    Release,
    Move(f64, Bounds),
    Leave,
}

#[derive(Clone, PartialEq)]
struct Slider(SliderState);

impl Reducible for Slider {
    type Action = SliderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0;
        match action {
            SliderAction::Press(at) => {
                state.begin_drag();
                if let Some((x, bounds)) = at {
                    state.set_position(x, bounds);
                }
            }
            SliderAction::Release => state.end_drag(),
            SliderAction::Move(x, bounds) => {
                if !state.pointer_move(x, bounds) {
                    return self;
                }
            }
            SliderAction::Leave => state.pointer_leave(),
        }
        if state == self.0 {
            self
        } else {
            Rc::new(Slider(state))
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BeforeAfterSliderProps {
    pub before: AttrValue,
    pub after: AttrValue,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub mode: SliderMode,
    /// Shows the Before/After badges and the drag hint.
    #[prop_or(true)]
    pub labels: bool,
}

#[function_component(BeforeAfterSlider)]
pub fn before_after_slider(props: &BeforeAfterSliderProps) -> Html {
    let slider = use_reducer(|| Slider(SliderState::new(props.mode)));
    let container = use_node_ref();

    let pointer = {
        let slider = slider.clone();
        let container = container.clone();
        move |x: f64| {
            if let Some(bounds) = dom::element_bounds(&container) {
                slider.dispatch(SliderAction::Move(x, bounds));
            }
        }
    };

    let onmousemove = {
        let pointer = pointer.clone();
        Callback::from(move |e: MouseEvent| pointer(e.client_x() as f64))
    };
    let ontouchmove = Callback::from(move |e: TouchEvent| {
        if let Some(touch) = e.touches().get(0) {
            pointer(touch.client_x() as f64);
        }
    });

    // Pressing on the track also jumps the divider there in drag mode.
    let onmousedown = {
        let slider = slider.clone();
        let container = container.clone();
        Callback::from(move |e: MouseEvent| {
            let at = dom::element_bounds(&container).map(|b| (e.client_x() as f64, b));
            slider.dispatch(SliderAction::Press(at));
        })
    };
    let ontouchstart = {
        let slider = slider.clone();
        Callback::from(move |_: TouchEvent| slider.dispatch(SliderAction::Press(None)))
    };
    let onmouseup = {
        let slider = slider.clone();
        Callback::from(move |_: MouseEvent| slider.dispatch(SliderAction::Release))
    };
    let ontouchend = {
        let slider = slider.clone();
        Callback::from(move |_: TouchEvent| slider.dispatch(SliderAction::Release))
    };
    let onmouseleave = {
        let slider = slider.clone();
        Callback::from(move |_: MouseEvent| slider.dispatch(SliderAction::Leave))
    };

    let state = slider.0;
    let show_hint = props.labels && props.mode == SliderMode::Drag && !state.is_dragging();

    let slider_css = r#"
        .compare { display: flex; flex-direction: column; gap: 1rem; }
        .compare h3 { margin: 0; font-size: 1.2rem; font-weight: 500; }
        .compare-frame {
            position: relative;
            aspect-ratio: 16 / 10;
            width: 100%;
            overflow: hidden;
            border-radius: 0.75rem;
            cursor: ew-resize;
            user-select: none;
            touch-action: pan-y;
            background: rgba(44, 44, 44, 0.05);
        }
        .compare-frame.hover { aspect-ratio: auto; height: 65vh; }
        .compare-layer { position: absolute; inset: 0; }
        .compare-layer img { width: 100%; height: 100%; object-fit: cover; pointer-events: none; }
        .compare-badge {
            position: absolute;
            top: 1rem;
            padding: 0.35rem 0.75rem;
            border-radius: 999px;
            font-size: 0.8rem;
            color: #fff;
        }
        .compare-badge.before { left: 1rem; background: rgba(44, 44, 44, 0.8); }
        .compare-badge.after { right: 1rem; background: var(--teal); }
        .compare-divider {
            position: absolute;
            top: 0;
            bottom: 0;
            width: 4px;
            background: #fff;
            box-shadow: 0 0 24px rgba(0, 0, 0, 0.3);
        }
        .compare-handle {
            position: absolute;
            top: 50%;
            left: 50%;
            width: 48px;
            height: 48px;
            transform: translate(-50%, -50%);
            border-radius: 50%;
            background: #fff;
            display: flex;
            align-items: center;
            justify-content: center;
            gap: 6px;
            font-size: 0.8rem;
            color: var(--charcoal);
            cursor: grab;
        }
        .compare-hint {
            position: absolute;
            bottom: 1rem;
            left: 50%;
            transform: translateX(-50%);
            padding: 0.5rem 1rem;
            border-radius: 999px;
            background: rgba(0, 0, 0, 0.6);
            color: #fff;
            font-size: 0.8rem;
            pointer-events: none;
        }
    "#;

    let frame_class = classes!(
        "compare-frame",
        (props.mode == SliderMode::Hover).then_some("hover")
    );

    html! {
        <div class="compare">
            <style>{slider_css}</style>
            if let Some(title) = &props.title {
                <h3>{title.clone()}</h3>
            }
            <div
                ref={container}
                class={frame_class}
                {onmousedown}
                {onmouseup}
                {onmouseleave}
                {onmousemove}
                {ontouchstart}
                {ontouchend}
                {ontouchmove}
            >
                <div class="compare-layer">
                    <img src={props.after.clone()} alt="After" draggable="false" />
                    if props.labels {
                        <span class="compare-badge after">{"After"}</span>
                    }
                </div>
                <div class="compare-layer" style={state.before_clip_style()}>
                    <img src={props.before.clone()} alt="Before" draggable="false" />
                    if props.labels {
                        <span class="compare-badge before">{"Before"}</span>
                    }
                </div>
                <div class="compare-divider" style={state.handle_style()}>
                    <div class="compare-handle">
                        <span>{"‹"}</span>
                        <span>{"›"}</span>
                    </div>
                </div>
                if show_hint {
                    <div class="compare-hint">{"Geser untuk membandingkan"}</div>
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK: Bounds = Bounds { left: 100.0, width: 400.0 };

    fn slider(mode: SliderMode) -> Rc<Slider> {
        Rc::new(Slider(SliderState::new(mode)))
    }

    #[test]
    fn press_on_track_jumps_divider_and_starts_drag() {
        let pressed = slider(SliderMode::Drag).reduce(SliderAction::Press(Some((200.0, TRACK))));
        assert_eq!(pressed.0.position(), 25.0);
        assert!(pressed.0.is_dragging());

        let released = pressed.reduce(SliderAction::Release);
        assert!(!released.0.is_dragging());
        assert_eq!(released.0.position(), 25.0);
    }

    #[test]
    fn touch_press_keeps_position() {
        let pressed = slider(SliderMode::Drag).reduce(SliderAction::Press(None));
        assert!(pressed.0.is_dragging());
        assert_eq!(pressed.0.position(), 50.0);
    }

    #[test]
    fn move_without_change_keeps_same_state() {
        let idle = slider(SliderMode::Drag);
        let after_move = idle.clone().reduce(SliderAction::Move(450.0, TRACK));
        assert!(Rc::ptr_eq(&idle, &after_move));

        let dragging = slider(SliderMode::Drag).reduce(SliderAction::Press(None));
        let centered = dragging.clone().reduce(SliderAction::Move(300.0, TRACK));
        assert!(Rc::ptr_eq(&dragging, &centered));

        let moved = dragging.reduce(SliderAction::Move(900.0, TRACK));
        assert_eq!(moved.0.position(), 100.0);
    }

    #[test]
    fn hover_follows_pointer_and_recenters_on_leave() {
        let hovered = slider(SliderMode::Hover).reduce(SliderAction::Move(180.0, TRACK));
        assert_eq!(hovered.0.position(), 20.0);
        assert!(!hovered.0.is_dragging());

        let left = hovered.reduce(SliderAction::Leave);
        assert_eq!(left.0.position(), 50.0);
    }

    #[test]
    fn leave_in_drag_mode_stops_dragging_only() {
        let dragging = slider(SliderMode::Drag)
            .reduce(SliderAction::Press(Some((400.0, TRACK))))
            .reduce(SliderAction::Leave);
        assert!(!dragging.0.is_dragging());
        assert_eq!(dragging.0.position(), 75.0);
    }
}
