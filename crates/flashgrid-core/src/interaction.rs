//! Page chrome state: sidebar, language dropdowns, scroll buttons

/// Arrow appended to a dropdown's main label
pub const DROPDOWN_ARROW: &str = "▾";

/// Sidebar drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarState {
    open: bool,
}

impl SidebarState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip open/closed and return the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Value for the `aria-hidden` attribute
    pub fn aria_hidden(&self) -> &'static str {
        if self.open {
            "false"
        } else {
            "true"
        }
    }
}

/// The two switchable language pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguagePair {
    /// English shown by default, Urdu on switch
    UrduEnglish,
    /// Arabic shown by default, Persian on switch
    ArabicPersian,
}

impl LanguagePair {
    pub const ALL: [LanguagePair; 2] = [LanguagePair::UrduEnglish, LanguagePair::ArabicPersian];

    /// Class toggled on `<body>` when the alternate language is shown
    pub fn body_class(&self) -> &'static str {
        match self {
            LanguagePair::UrduEnglish => "show-urd",
            LanguagePair::ArabicPersian => "show-per",
        }
    }

    /// Labels as `(main, sub)` before any switch
    pub fn default_labels(&self) -> (&'static str, &'static str) {
        match self {
            LanguagePair::UrduEnglish => ("English", "Urdu"),
            LanguagePair::ArabicPersian => ("Arabic", "Persian"),
        }
    }

    /// Element id prefix of the pair's buttons
    pub fn id_prefix(&self) -> &'static str {
        match self {
            LanguagePair::UrduEnglish => "btn-urd",
            LanguagePair::ArabicPersian => "btn-ar",
        }
    }
}

/// Two-button dropdown switching one language pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDropdown {
    pair: LanguagePair,
    main_label: String,
    sub_label: String,
    open: bool,
    alternate: bool,
}

impl LanguageDropdown {
    pub fn new(pair: LanguagePair) -> Self {
        let (main, sub) = pair.default_labels();
        Self {
            pair,
            main_label: format!("{} {}", main, DROPDOWN_ARROW),
            sub_label: sub.to_string(),
            open: false,
            alternate: false,
        }
    }

    pub fn pair(&self) -> LanguagePair {
        self.pair
    }

    /// Main button text, arrow included
    pub fn main_label(&self) -> &str {
        &self.main_label
    }

    /// Main button text without the arrow
    pub fn main_text(&self) -> &str {
        self.main_label.trim_end_matches(DROPDOWN_ARROW).trim_end()
    }

    pub fn sub_label(&self) -> &str {
        &self.sub_label
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the pair's body class is on
    pub fn alternate_shown(&self) -> bool {
        self.alternate
    }

    /// Main button click
    pub fn toggle_open(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Sub button click: switch language, swap labels, close.
    ///
    /// Returns whether the body class is now on.
    pub fn choose_sub(&mut self) -> bool {
        self.alternate = !self.alternate;

        let main_text = self.main_label.replace(DROPDOWN_ARROW, "").trim().to_string();
        let sub_text = self.sub_label.trim().to_string();
        self.main_label = format!("{} {}", sub_text, DROPDOWN_ARROW);
        self.sub_label = main_text;

        self.open = false;
        self.alternate
    }
}

/// Element id a button scrolls to, from its `data-target` attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScrollTarget(String);

impl ScrollTarget {
    /// `None` for a missing or blank attribute
    pub fn from_attribute(value: Option<&str>) -> Option<Self> {
        let id = value?.trim();
        if id.is_empty() {
            None
        } else {
            Some(Self(id.to_string()))
        }
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_aria_mirrors_open() {
        let mut sidebar = SidebarState::default();
        assert_eq!(sidebar.aria_hidden(), "true");
        assert!(sidebar.toggle());
        assert_eq!(sidebar.aria_hidden(), "false");
        assert!(!sidebar.toggle());
        assert_eq!(sidebar.aria_hidden(), "true");
    }

    #[test]
    fn main_button_only_opens() {
        let mut dropdown = LanguageDropdown::new(LanguagePair::UrduEnglish);
        assert!(dropdown.toggle_open());
        assert!(!dropdown.alternate_shown());
        assert_eq!(dropdown.main_label(), "English ▾");
        assert!(!dropdown.toggle_open());
    }

    #[test]
    fn sub_button_swaps_and_closes() {
        let mut dropdown = LanguageDropdown::new(LanguagePair::UrduEnglish);
        dropdown.toggle_open();

        assert!(dropdown.choose_sub());
        assert_eq!(dropdown.main_label(), "Urdu ▾");
        assert_eq!(dropdown.main_text(), "Urdu");
        assert_eq!(dropdown.sub_label(), "English");
        assert!(!dropdown.is_open());

        assert!(!dropdown.choose_sub());
        assert_eq!(dropdown.main_label(), "English ▾");
        assert_eq!(dropdown.sub_label(), "Urdu");
    }

    #[test]
    fn pairs_toggle_separate_body_classes() {
        let mut urdu = LanguageDropdown::new(LanguagePair::UrduEnglish);
        let persian = LanguageDropdown::new(LanguagePair::ArabicPersian);

        assert!(urdu.choose_sub());
        assert!(!persian.alternate_shown());
        assert_eq!(urdu.pair().body_class(), "show-urd");
        assert_eq!(persian.pair().body_class(), "show-per");
        assert_eq!(persian.main_text(), "Arabic");
    }

    #[test]
    fn scroll_target_needs_an_id() {
        assert_eq!(ScrollTarget::from_attribute(None), None);
        assert_eq!(ScrollTarget::from_attribute(Some("  ")), None);
        assert_eq!(
            ScrollTarget::from_attribute(Some("fruits")).map(|t| t.id().to_string()),
            Some("fruits".to_string())
        );
    }
}
