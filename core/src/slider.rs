//! Divider state of the before/after comparison slider.

/// Divider position of a freshly mounted slider, in percent.
pub const DEFAULT_POSITION: f64 = 50.0;

/// Horizontal extent of the slider container as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub width: f64,
}

impl Bounds {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    fn is_measurable(&self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width > 0.0
    }
}

/// How pointer movement drives the divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliderMode {
    /// Divider follows the pointer only between press and release.
    #[default]
    Drag,
    /// Divider follows the pointer while it hovers and recenters on leave.
    Hover,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    position: f64,
    dragging: bool,
    mode: SliderMode,
}

impl Default for SliderState {
    fn default() -> Self {
        Self::new(SliderMode::Drag)
    }
}

impl SliderState {
    pub fn new(mode: SliderMode) -> Self {
        Self {
            position: DEFAULT_POSITION,
            dragging: false,
            mode,
        }
    }

    /// Percentage of the "before" image visible from the left edge, in `[0, 100]`.
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn mode(&self) -> SliderMode {
        self.mode
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Moves the divider under `pointer_x`. Leaves the position untouched when
    /// the container has no measurable width.
    pub fn set_position(&mut self, pointer_x: f64, bounds: Bounds) {
        if !bounds.is_measurable() || !pointer_x.is_finite() {
            return;
        }
        let percent = 100.0 * (pointer_x - bounds.left) / bounds.width;
        self.position = percent.clamp(0.0, 100.0);
    }

    /// Handles a pointer move event. Returns true if the position changed.
    pub fn pointer_move(&mut self, pointer_x: f64, bounds: Bounds) -> bool {
        let tracking = match self.mode {
            SliderMode::Drag => self.dragging,
            SliderMode::Hover => true,
        };
        if !tracking {
            return false;
        }
        let before = self.position;
        self.set_position(pointer_x, bounds);
        before != self.position
    }

    /// Pointer left the container.
    pub fn pointer_leave(&mut self) {
        self.dragging = false;
        if self.mode == SliderMode::Hover {
            self.position = DEFAULT_POSITION;
        }
    }

    /// `clip-path` for the "before" layer: shows only the left `position`%.
    pub fn before_clip_style(&self) -> String {
        format!("clip-path: inset(0 {}% 0 0);", format_percent(100.0 - self.position))
    }

    /// Placement of the divider line and handle.
    pub fn handle_style(&self) -> String {
        format!(
            "left: {}%; transform: translateX(-50%);",
            format_percent(self.position)
        )
    }
}

fn format_percent(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: Bounds = Bounds { left: 100.0, width: 400.0 };

    #[test]
    fn starts_centered_and_idle() {
        let slider = SliderState::default();
        assert_eq!(slider.position(), 50.0);
        assert!(!slider.is_dragging());
        assert_eq!(slider.mode(), SliderMode::Drag);
    }

    #[test]
    fn maps_pointer_to_percentage() {
        let mut slider = SliderState::default();
        slider.set_position(200.0, BOX);
        assert_eq!(slider.position(), 25.0);
        slider.set_position(500.0, BOX);
        assert_eq!(slider.position(), 100.0);
    }

    #[test]
    fn position_stays_in_bounds_for_any_pointer() {
        let mut slider = SliderState::default();
        for x in [-1e9, -50.0, 0.0, 99.9, 100.0, 300.0, 500.0, 501.0, 1e9] {
            slider.set_position(x, BOX);
            let p = slider.position();
            assert!((0.0..=100.0).contains(&p), "{x} gave {p}");
        }
    }

    #[test]
    fn zero_or_negative_width_is_a_no_op() {
        let mut slider = SliderState::default();
        slider.set_position(180.0, BOX);
        let before = slider.position();

        slider.set_position(10.0, Bounds::new(0.0, 0.0));
        assert_eq!(slider.position(), before);
        slider.set_position(10.0, Bounds::new(0.0, -20.0));
        assert_eq!(slider.position(), before);
        slider.set_position(10.0, Bounds::new(0.0, f64::NAN));
        assert_eq!(slider.position(), before);
        assert!(slider.position().is_finite());
    }

    #[test]
    fn moves_are_ignored_unless_dragging() {
        let mut slider = SliderState::default();
        assert!(!slider.pointer_move(120.0, BOX));
        assert_eq!(slider.position(), 50.0);

        slider.begin_drag();
        assert!(slider.pointer_move(120.0, BOX));
        assert_eq!(slider.position(), 5.0);

        slider.end_drag();
        assert!(!slider.pointer_move(480.0, BOX));
        assert_eq!(slider.position(), 5.0);
    }

    #[test]
    fn leaving_ends_a_drag_but_keeps_position() {
        let mut slider = SliderState::default();
        slider.begin_drag();
        slider.pointer_move(400.0, BOX);
        slider.pointer_leave();
        assert!(!slider.is_dragging());
        assert_eq!(slider.position(), 75.0);
    }

    #[test]
    fn hover_mode_tracks_without_press_and_recenters() {
        let mut slider = SliderState::new(SliderMode::Hover);
        assert!(slider.pointer_move(140.0, BOX));
        assert_eq!(slider.position(), 10.0);
        slider.pointer_leave();
        assert_eq!(slider.position(), DEFAULT_POSITION);
    }

    #[test]
    fn styles_follow_position() {
        let mut slider = SliderState::default();
        assert_eq!(slider.before_clip_style(), "clip-path: inset(0 50% 0 0);");
        slider.set_position(200.0, BOX);
        assert_eq!(slider.before_clip_style(), "clip-path: inset(0 75% 0 0);");
        assert_eq!(slider.handle_style(), "left: 25%; transform: translateX(-50%);");
        slider.set_position(100.0 + 400.0 / 3.0, BOX);
        assert_eq!(slider.handle_style(), "left: 33.33%; transform: translateX(-50%);");
    }
}
