//! Scroll and timing math behind the animated sections.

/// How long the splash screen stays up on first load.
pub const PRELOADER_MS: f64 = 3000.0;
/// Pause between the splash leaving and the hero copy appearing.
pub const PRELOADER_SETTLE_MS: f64 = 200.0;
/// Hero delay when the splash is already gone.
pub const MIN_REVEAL_DELAY_MS: f64 = 100.0;
/// Viewport widths below this use the simplified mobile layout.
pub const MOBILE_BREAKPOINT: f64 = 768.0;
/// Distance below the top of the viewport used to pick the active section.
pub const NAV_OFFSET: f64 = 100.0;

/// Color scheme of a page section. Floating controls read it to pick a
/// contrasting style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Vertical extent of a rendered section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBand<'a> {
    pub id: &'a str,
    pub top: f64,
    pub height: f64,
    pub theme: Theme,
}

impl SectionBand<'_> {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Maps `value` from `input` to `output` linearly, clamped to `output`.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    let span = in_end - in_start;
    if span == 0.0 || !span.is_finite() || !value.is_finite() {
        return out_start;
    }
    let t = ((value - in_start) / span).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

/// Progress of a section through the viewport: 0 when its top touches the
/// viewport bottom, 1 when its bottom leaves through the viewport top.
/// `top` is relative to the viewport.
pub fn section_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + height;
    if travel <= 0.0 || !travel.is_finite() {
        return 0.0;
    }
    ((viewport_height - top) / travel).clamp(0.0, 1.0)
}

/// Section under the navigation bar for a given scroll offset. `None` when no
/// section covers it, in which case the caller keeps its previous answer.
pub fn active_section<'a>(bands: &[SectionBand<'a>], scroll_y: f64) -> Option<&'a str> {
    let probe = scroll_y + NAV_OFFSET;
    bands
        .iter()
        .rev()
        .find(|band| band.contains(probe))
        .map(|band| band.id)
}

/// Theme of the section covering document offset `y`.
pub fn theme_at(bands: &[SectionBand<'_>], y: f64) -> Option<Theme> {
    bands.iter().find(|band| band.contains(y)).map(|band| band.theme)
}

/// Delay before the hero copy animates in, given the time since the app
/// started.
pub fn reveal_delay_ms(elapsed_ms: f64) -> f64 {
    if elapsed_ms.is_finite() && elapsed_ms >= 0.0 && elapsed_ms < PRELOADER_MS {
        PRELOADER_MS - elapsed_ms + PRELOADER_SETTLE_MS
    } else {
        MIN_REVEAL_DELAY_MS
    }
}

pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT
}

/// How long a stat counter takes to count up to its target.
pub const COUNTER_MS: f64 = 2000.0;

/// Value shown by a counting-up stat `elapsed_ms` after it started. Reaches
/// `target` exactly at [`COUNTER_MS`] and stays there.
pub fn counter_value(elapsed_ms: f64, target: u32) -> u32 {
    if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
        return 0;
    }
    if elapsed_ms >= COUNTER_MS {
        return target;
    }
    (f64::from(target) * elapsed_ms / COUNTER_MS).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn interpolate_clamps_to_output() {
        assert!(close(interpolate(0.25, (0.0, 0.5), (1.2, 1.0)), 1.1));
        assert_eq!(interpolate(-1.0, (0.0, 0.5), (1.2, 1.0)), 1.2);
        assert_eq!(interpolate(3.0, (0.0, 0.5), (1.2, 1.0)), 1.0);
        assert!(close(interpolate(250.0, (0.0, 500.0), (0.0, 0.6)), 0.3));
        assert_eq!(interpolate(5.0, (1.0, 1.0), (7.0, 9.0)), 7.0);
    }

    #[test]
    fn section_progress_spans_entry_to_exit() {
        assert_eq!(section_progress(800.0, 400.0, 800.0), 0.0);
        assert_eq!(section_progress(-400.0, 400.0, 800.0), 1.0);
        assert_eq!(section_progress(200.0, 400.0, 800.0), 0.5);
        assert_eq!(section_progress(5000.0, 400.0, 800.0), 0.0);
        assert_eq!(section_progress(0.0, 0.0, 0.0), 0.0);
    }

    fn bands() -> Vec<SectionBand<'static>> {
        vec![
            SectionBand { id: "hero", top: 0.0, height: 800.0, theme: Theme::Dark },
            SectionBand { id: "services", top: 800.0, height: 600.0, theme: Theme::Light },
            SectionBand { id: "contact", top: 1400.0, height: 400.0, theme: Theme::Dark },
        ]
    }

    #[test]
    fn active_section_uses_nav_offset() {
        let bands = bands();
        assert_eq!(active_section(&bands, 0.0), Some("hero"));
        assert_eq!(active_section(&bands, 699.0), Some("hero"));
        assert_eq!(active_section(&bands, 700.0), Some("services"));
        assert_eq!(active_section(&bands, 5000.0), None);
    }

    #[test]
    fn theme_follows_declared_sections() {
        let bands = bands();
        assert_eq!(theme_at(&bands, 900.0), Some(Theme::Light));
        assert_eq!(theme_at(&bands, 1500.0), Some(Theme::Dark));
        assert_eq!(theme_at(&bands, -1.0), None);
    }

    #[test]
    fn reveal_waits_for_the_preloader_only_on_first_load() {
        assert_eq!(reveal_delay_ms(0.0), 3200.0);
        assert_eq!(reveal_delay_ms(1000.0), 2200.0);
        assert_eq!(reveal_delay_ms(3000.0), MIN_REVEAL_DELAY_MS);
        assert_eq!(reveal_delay_ms(f64::NAN), MIN_REVEAL_DELAY_MS);
    }

    #[test]
    fn mobile_breakpoint() {
        assert!(is_mobile_width(767.0));
        assert!(!is_mobile_width(768.0));
    }

    #[test]
    fn counter_counts_up_and_stops() {
        assert_eq!(counter_value(0.0, 150), 0);
        assert_eq!(counter_value(1000.0, 150), 75);
        assert_eq!(counter_value(1999.0, 98), 97);
        assert_eq!(counter_value(2000.0, 98), 98);
        assert_eq!(counter_value(60_000.0, 7), 7);
        assert_eq!(counter_value(-5.0, 7), 0);
    }
}
