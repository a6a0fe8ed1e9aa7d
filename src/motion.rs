#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
    Linear,
}

impl Easing {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
            Self::Linear => "linear",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub axis: Axis,
    /// Displacement of the hidden state from the resting position, in px.
    pub offset: f64,
    pub duration: f64,
    pub easing: Easing,
}

impl Motion {
    pub const fn rise(offset: f64, duration: f64) -> Self {
        Self {
            axis: Axis::Y,
            offset,
            duration,
            easing: Easing::EaseOut,
        }
    }

    pub const fn slide(offset: f64, duration: f64) -> Self {
        Self {
            axis: Axis::X,
            offset,
            duration,
            easing: Easing::EaseOut,
        }
    }

    fn translate(&self, visible: bool) -> String {
        let offset = if visible { 0.0 } else { self.offset };
        match self.axis {
            Axis::X => format!("translateX({offset}px)"),
            Axis::Y => format!("translateY({offset}px)"),
        }
    }

    pub fn style(&self, visible: bool, delay: f64) -> String {
        let opacity = if visible { 1 } else { 0 };
        format!(
            "opacity: {opacity}; transform: {}; transition: opacity {duration}s {ease} {delay}s, transform {duration}s {ease} {delay}s;",
            self.translate(visible),
            duration = self.duration,
            ease = self.easing.as_css(),
            delay = round_seconds(delay),
        )
    }
}

/// Delay cascade: child `i` starts at `base_delay + i * interval` seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub base_delay: f64,
    pub interval: f64,
}

impl Stagger {
    pub const fn new(base_delay: f64, interval: f64) -> Self {
        Self {
            base_delay,
            interval,
        }
    }

    pub fn delay(&self, index: usize) -> f64 {
        round_seconds(self.base_delay + index as f64 * self.interval)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub stagger: Stagger,
    pub motion: Motion,
}

impl Reveal {
    pub fn item_style(&self, visible: bool, index: usize) -> String {
        self.motion.style(visible, self.stagger.delay(index))
    }

    pub fn container_style(&self, visible: bool) -> String {
        let opacity = if visible { 1 } else { 0 };
        format!(
            "opacity: {opacity}; transition: opacity {}s {};",
            self.motion.duration,
            self.motion.easing.as_css()
        )
    }
}

pub const HERO: Reveal = Reveal {
    stagger: Stagger::new(0.2, 0.3),
    motion: Motion::rise(30.0, 0.8),
};

/// About, internships and contact.
pub const SECTION_RELAXED: Reveal = Reveal {
    stagger: Stagger::new(0.1, 0.2),
    motion: Motion::rise(50.0, 0.6),
};

pub const SECTION_BRISK: Reveal = Reveal {
    stagger: Stagger::new(0.2, 0.1),
    motion: Motion::rise(50.0, 0.6),
};

pub const CARD: Reveal = Reveal {
    stagger: Stagger::new(0.3, 0.1),
    motion: Motion::rise(30.0, 0.6),
};

pub const CERTIFICATE: Reveal = Reveal {
    stagger: Stagger::new(1.5, 0.1),
    motion: Motion::rise(30.0, 0.6),
};

pub const SKILL_ROW: Motion = Motion::slide(-20.0, 0.6);

pub fn skill_row_delay(category: usize, skill: usize) -> f64 {
    round_seconds(0.3 + category as f64 * 0.1 + skill as f64 * 0.05)
}

/// Width transition for a skill bar fill.
pub fn skill_fill_style(visible: bool, level: u8, category: usize, skill: usize) -> String {
    let width = if visible { level } else { 0 };
    let delay = round_seconds(0.5 + category as f64 * 0.1 + skill as f64 * 0.05);
    format!("width: {width}%; transition: width 1s ease-out {delay}s;")
}

// Keeps emitted CSS free of float noise such as 0.30000000000000004.
fn round_seconds(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_delay_grows_by_interval() {
        let stagger = Stagger::new(0.1, 0.2);
        assert_eq!(stagger.delay(0), 0.1);
        assert_eq!(stagger.delay(1), 0.3);
        assert_eq!(stagger.delay(4), 0.9);
    }

    #[test]
    fn hidden_state_is_offset_and_transparent() {
        let style = SECTION_RELAXED.item_style(false, 0);
        assert!(style.starts_with("opacity: 0; transform: translateY(50px);"), "{style}");
    }

    #[test]
    fn visible_state_rests_at_origin() {
        let style = SECTION_BRISK.item_style(true, 2);
        assert_eq!(
            style,
            "opacity: 1; transform: translateY(0px); transition: opacity 0.6s ease-out 0.4s, transform 0.6s ease-out 0.4s;"
        );
    }

    #[test]
    fn hero_uses_slower_rise() {
        let style = HERO.item_style(true, 1);
        assert!(style.contains("opacity 0.8s ease-out 0.5s"), "{style}");
    }

    #[test]
    fn skill_rows_slide_in_from_left() {
        let style = SKILL_ROW.style(false, skill_row_delay(1, 2));
        assert!(style.contains("translateX(-20px)"), "{style}");
        assert!(style.contains("0.5s;"), "{style}");
    }

    #[test]
    fn skill_fill_grows_to_level() {
        assert_eq!(
            skill_fill_style(true, 85, 0, 1),
            "width: 85%; transition: width 1s ease-out 0.55s;"
        );
        assert!(skill_fill_style(false, 85, 0, 1).starts_with("width: 0%;"));
    }

    #[test]
    fn slide_style_moves_along_x_with_delay() {
        assert_eq!(
            Motion::slide(-20.0, 0.3).style(false, 0.25),
            "opacity: 0; transform: translateX(-20px); transition: opacity 0.3s ease-out 0.25s, transform 0.3s ease-out 0.25s;"
        );
    }

    #[test]
    fn container_only_fades() {
        assert_eq!(
            CARD.container_style(false),
            "opacity: 0; transition: opacity 0.6s ease-out;"
        );
    }
}
