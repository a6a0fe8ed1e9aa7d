pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityOptions {
    pub threshold: f64,
    pub trigger_once: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            trigger_once: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    NotObserved,
    Hidden,
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// `None` when the element is off screen or has no area.
pub fn intersection_ratio(element: Rect, viewport_width: f64, viewport_height: f64) -> Option<f64> {
    let area = element.width * element.height;
    if area <= 0.0 {
        return None;
    }

    let visible_width = (element.left + element.width).min(viewport_width) - element.left.max(0.0);
    let visible_height = (element.top + element.height).min(viewport_height) - element.top.max(0.0);

    if visible_width <= 0.0 || visible_height <= 0.0 {
        return None;
    }

    Some((visible_width * visible_height / area).clamp(0.0, 1.0))
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityTracker {
    options: VisibilityOptions,
    state: RevealState,
}

impl VisibilityTracker {
    pub fn new(options: VisibilityOptions) -> Self {
        Self {
            options,
            state: RevealState::NotObserved,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Visible
    }

    pub fn options(&self) -> VisibilityOptions {
        self.options
    }

    /// Feeds one intersection sample. `None` means the element is entirely
    /// off screen. Returns true when the visible flag changed.
    pub fn observe(&mut self, ratio: Option<f64>) -> bool {
        let was_visible = self.is_visible();

        if was_visible && self.options.trigger_once {
            return false;
        }

        let entered = ratio.is_some_and(|ratio| ratio >= self.options.threshold);
        self.state = if entered {
            RevealState::Visible
        } else {
            RevealState::Hidden
        };

        was_visible != self.is_visible()
    }

    pub fn observe_rect(&mut self, element: Rect, viewport_width: f64, viewport_height: f64) -> bool {
        self.observe(intersection_ratio(element, viewport_width, viewport_height))
    }
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new(VisibilityOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VW: f64 = 1280.0;
    const VH: f64 = 800.0;

    fn section_at(top: f64) -> Rect {
        Rect::new(0.0, top, VW, 1000.0)
    }

    #[test]
    fn starts_unobserved_and_hidden_flag() {
        let tracker = VisibilityTracker::default();
        assert_eq!(tracker.state(), RevealState::NotObserved);
        assert!(!tracker.is_visible());
    }

    #[test]
    fn ratio_counts_only_on_screen_area() {
        assert_eq!(intersection_ratio(section_at(700.0), VW, VH), Some(0.1));
        assert_eq!(intersection_ratio(section_at(0.0), VW, VH), Some(0.8));
        assert_eq!(intersection_ratio(section_at(-950.0), VW, VH), Some(0.05));
        assert_eq!(intersection_ratio(section_at(900.0), VW, VH), None);
        assert_eq!(intersection_ratio(Rect::new(-50.0, 0.0, 100.0, 100.0), VW, VH), Some(0.5));
        assert_eq!(intersection_ratio(Rect::new(0.0, 10.0, 0.0, 100.0), VW, VH), None);
    }

    #[test]
    fn becomes_visible_at_threshold() {
        let mut tracker = VisibilityTracker::default();

        assert!(!tracker.observe_rect(section_at(750.0), VW, VH));
        assert_eq!(tracker.state(), RevealState::Hidden);

        assert!(tracker.observe_rect(section_at(700.0), VW, VH));
        assert!(tracker.is_visible());
    }

    #[test]
    fn trigger_once_latches_for_any_scroll_sequence() {
        let mut rng = fastrand::Rng::with_seed(3);
        let mut tracker = VisibilityTracker::default();
        let mut seen_visible = false;

        for _ in 0..5_000 {
            let top = rng.f64() * 6_000.0 - 3_000.0;
            tracker.observe_rect(section_at(top), VW, VH);

            if seen_visible {
                assert!(tracker.is_visible());
            }
            seen_visible |= tracker.is_visible();
        }

        assert!(seen_visible);
    }

    #[test]
    fn repeating_tracker_follows_viewport() {
        let mut tracker = VisibilityTracker::new(VisibilityOptions {
            threshold: 0.1,
            trigger_once: false,
        });

        assert!(tracker.observe(Some(0.5)));
        assert!(!tracker.observe(Some(0.6)));
        assert!(tracker.observe(None));
        assert_eq!(tracker.state(), RevealState::Hidden);
        assert!(tracker.observe(Some(0.2)));
    }

    #[test]
    fn visible_sample_after_latch_reports_no_change() {
        let mut tracker = VisibilityTracker::default();
        assert!(tracker.observe(Some(1.0)));
        assert!(!tracker.observe(None));
        assert!(!tracker.observe(Some(1.0)));
        assert!(tracker.is_visible());
    }
}
