//! Page chrome state as the desktop components use it, through the crate
//! root re-exports.

use flashgrid_core::{
    FlipTiming, LanguageDropdown, LanguagePair, ScrollTarget, SidebarState, DROPDOWN_ARROW,
    FLIP_HALF_VAR,
};

#[test]
fn dropdown_label_and_arrow_render_as_main_label() {
    for pair in LanguagePair::ALL {
        let dropdown = LanguageDropdown::new(pair);
        let rendered = format!("{} {}", dropdown.main_text(), DROPDOWN_ARROW);
        assert_eq!(rendered, dropdown.main_label());
    }
}

#[test]
fn switching_twice_restores_labels() {
    let mut dropdown = LanguageDropdown::new(LanguagePair::ArabicPersian);
    dropdown.toggle_open();
    assert!(dropdown.choose_sub());
    assert_eq!(dropdown.main_label(), format!("Persian {}", DROPDOWN_ARROW));

    dropdown.toggle_open();
    assert!(!dropdown.choose_sub());
    assert_eq!(dropdown.main_text(), "Arabic");
    assert_eq!(dropdown.sub_label(), "Persian");
}

#[test]
fn sidebar_and_scroll_targets() {
    let mut sidebar = SidebarState::default();
    sidebar.toggle();
    assert_eq!(sidebar.aria_hidden(), "false");

    let target = ScrollTarget::from_attribute(Some(" fruits "));
    assert_eq!(target.as_ref().map(ScrollTarget::id), Some("fruits"));
}

#[test]
fn flip_timing_publishes_half_duration() {
    let css = FlipTiming::default().to_css();
    assert!(css.contains(&format!("{}: 200ms;", FLIP_HALF_VAR)));
}
