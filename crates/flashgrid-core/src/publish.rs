//! Custom property publication
//!
//! Presets reach the stylesheet as CSS custom properties on the document
//! root. Writes go through [`StyleSink`] so the same code drives the live
//! document and the in-memory [`RootStyle`] used in tests and for batching.

use std::collections::BTreeMap;

use crate::preset::{PresetField, ScaledPreset};
use crate::units::{parse_leading_number, Length};

/// Custom property holding the card back's height
pub const BACK_HEIGHT_VAR: &str = "--back-height";

/// Anything custom properties can be read from and written to
pub trait StyleSink {
    fn set_property(&mut self, name: &str, value: &str);
    fn get_property(&self, name: &str) -> Option<String>;
}

/// In-memory root style.
///
/// Holds the current value of each property and a log of writes since the
/// last [`RootStyle::take_writes`], in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootStyle {
    properties: BTreeMap<String, String>,
    writes: Vec<(String, String)>,
}

impl RootStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value without logging it as a write
    pub fn with_property(mut self, name: &str, value: &str) -> Self {
        self.properties.insert(name.to_string(), value.to_string());
        self
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Drain the write log
    pub fn take_writes(&mut self) -> Vec<(String, String)> {
        std::mem::take(&mut self.writes)
    }
}

impl StyleSink for RootStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
        self.writes.push((name.to_string(), value.to_string()));
    }

    fn get_property(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }
}

/// Publish every field of `preset`, overwriting previous values
pub fn apply_preset<S: StyleSink + ?Sized>(sink: &mut S, preset: &ScaledPreset) {
    for (name, value) in preset.declarations() {
        sink.set_property(name, &value);
    }
    tracing::debug!(factor = preset.factor(), "applied preset");
}

/// Set the back height to the published card height plus the front caption's
/// rendered height.
///
/// Does nothing when there is no caption on the page yet, or when the card
/// height cannot be read. Returns the value written.
pub fn recompute_back_height<S: StyleSink + ?Sized>(
    sink: &mut S,
    caption_height: Option<f64>,
) -> Option<Length> {
    let caption_height = caption_height?;

    let card_var = PresetField::Height.css_var();
    let Some(card_height) = sink
        .get_property(card_var)
        .as_deref()
        .and_then(parse_leading_number)
    else {
        tracing::warn!(property = card_var, "card height unavailable, back height left as is");
        return None;
    };

    let back = Length::px(card_height + caption_height);
    sink.set_property(BACK_HEIGHT_VAR, &back.to_string());
    Some(back)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{PresetEngine, ViewportMetrics};
    use crate::preset::BasePreset;

    #[test]
    fn apply_writes_every_field_in_order() {
        let preset = ScaledPreset::identity(&BasePreset::default());
        let mut root = RootStyle::new();
        apply_preset(&mut root, &preset);

        let writes = root.take_writes();
        assert_eq!(writes.len(), PresetField::COUNT);
        assert_eq!(writes[0], ("--grid-min".to_string(), "300px".to_string()));
        assert_eq!(root.get_property("--emoji-size").as_deref(), Some("120px"));
        assert!(root.take_writes().is_empty());
    }

    #[test]
    fn apply_is_idempotent() {
        let engine = PresetEngine::default();
        let table = engine.compute_dynamic_presets(&ViewportMetrics::new(1000.0, 0.0));

        let mut root = RootStyle::new();
        apply_preset(&mut root, &table.six);
        let once = root.properties().clone();
        apply_preset(&mut root, &table.six);
        assert_eq!(root.properties(), &once);
    }

    #[test]
    fn apply_overrides_previous_preset() {
        let engine = PresetEngine::default();
        let table = engine.compute_dynamic_presets(&ViewportMetrics::new(1000.0, 0.0));

        let mut root = RootStyle::new();
        apply_preset(&mut root, &table.five);
        apply_preset(&mut root, &table.four);
        assert_eq!(root.get_property("--card-width").as_deref(), Some("300px"));
    }

    #[test]
    fn back_height_sums_card_and_caption() {
        let mut root = RootStyle::new().with_property("--card-height", " 220px");
        let back = recompute_back_height(&mut root, Some(64.5));

        assert_eq!(back, Some(Length::px(284.5)));
        assert_eq!(root.get_property(BACK_HEIGHT_VAR).as_deref(), Some("284.5px"));
    }

    #[test]
    fn back_height_without_caption_is_noop() {
        let mut root = RootStyle::new().with_property("--card-height", "220px");
        assert_eq!(recompute_back_height(&mut root, None), None);
        assert!(root.take_writes().is_empty());
        assert!(root.get_property(BACK_HEIGHT_VAR).is_none());
    }

    #[test]
    fn back_height_without_card_height_is_noop() {
        let mut root = RootStyle::new();
        assert_eq!(recompute_back_height(&mut root, Some(40.0)), None);
        assert!(root.take_writes().is_empty());
    }

    #[test]
    fn back_height_tracks_latest_preset() {
        let engine = PresetEngine::default();
        let table = engine.compute_dynamic_presets(&ViewportMetrics::new(1000.0, 0.0));

        let mut root = RootStyle::new();
        apply_preset(&mut root, &table.five);
        let back = recompute_back_height(&mut root, Some(50.0)).unwrap();

        let card = table.five.get(PresetField::Height).value;
        assert!((back.value - (card + 50.0)).abs() < 1e-9);
    }
}
