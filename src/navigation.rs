pub const SCROLLED_OFFSET: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Home,
    About,
    Skills,
    Internships,
    Projects,
    Contact,
}

impl Anchor {
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Internships => "internships",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Internships => "Internships",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

pub const NAV_ITEMS: [Anchor; 6] = [
    Anchor::Home,
    Anchor::About,
    Anchor::Skills,
    Anchor::Internships,
    Anchor::Projects,
    Anchor::Contact,
];

pub const FOOTER_LINKS: [Anchor; 4] = [
    Anchor::About,
    Anchor::Skills,
    Anchor::Projects,
    Anchor::Contact,
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollTracker {
    scrolled: bool,
}

impl ScrollTracker {
    pub fn from_offset(offset: f64) -> Self {
        let mut tracker = Self::default();
        tracker.update(offset);
        tracker
    }

    /// Returns true when the flag flipped.
    pub fn update(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLLED_OFFSET;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

/// Mobile overlay menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Navigating to a section always closes the overlay.
    pub fn after_navigate(self) -> Self {
        Self { open: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_flag_follows_offset() {
        let mut tracker = ScrollTracker::from_offset(0.0);
        assert!(!tracker.is_scrolled());

        assert!(tracker.update(80.0));
        assert!(tracker.is_scrolled());

        assert!(tracker.update(10.0));
        assert!(!tracker.is_scrolled());
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(!ScrollTracker::from_offset(50.0).is_scrolled());
        assert!(ScrollTracker::from_offset(50.5).is_scrolled());
    }

    #[test]
    fn repeated_offsets_report_no_change() {
        let mut tracker = ScrollTracker::from_offset(120.0);
        assert!(!tracker.update(300.0));
        assert!(tracker.is_scrolled());
    }

    #[test]
    fn navigating_closes_menu() {
        let menu = NavMenu::default().toggled();
        assert!(menu.is_open());
        assert!(!menu.after_navigate().is_open());
        assert!(!NavMenu::default().after_navigate().is_open());
    }

    #[test]
    fn anchors_match_section_ids() {
        let hrefs: Vec<String> = NAV_ITEMS.iter().map(|anchor| anchor.href()).collect();
        assert_eq!(
            hrefs,
            ["#home", "#about", "#skills", "#internships", "#projects", "#contact"]
        );
    }
}
