use dioxus::prelude::*;
use flashgrid_core::ScaledPreset;

use crate::context::{get_config, PageContext};
use crate::pages::DeckPage;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the 4-per-row and flip timing defaults, and the
/// page context.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_config);
    let ctx = use_context_provider(|| PageContext::new(&config));

    // Stylesheet defaults are the base preset, so the page is laid out
    // before any viewport read
    let root_defaults = use_hook(|| {
        ScaledPreset::identity(&config.base).to_css() + &config.flip.to_css()
    });

    // Build presets once the first layout exists
    let load_config = config.clone();
    use_effect(move || {
        let config = load_config.clone();
        spawn(ctx.load(config));
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {root_defaults} }
        DeckPage { sections: config.sections.clone() }
    }
}
