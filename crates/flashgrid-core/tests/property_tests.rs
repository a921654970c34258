//! Property-based tests for preset computation
//!
//! Uses proptest to check the column-count and scaling laws over a wide
//! range of viewports.

use flashgrid_core::{
    apply_preset, ColumnPreset, PresetEngine, PresetField, RootStyle, ScaledPreset,
    ViewportMetrics,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Viewports at least one base track wide, no body padding
fn unpadded_viewport() -> impl Strategy<Value = ViewportMetrics> {
    (300.0f64..8000.0).prop_map(|width| ViewportMetrics::new(width, 0.0))
}

/// Realistic viewports with some body padding
fn padded_viewport() -> impl Strategy<Value = ViewportMetrics> {
    (320.0f64..4000.0, 0.0f64..200.0).prop_map(|(width, padding)| ViewportMetrics::new(width, padding))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Without padding the auto-fit count is floor((w + gap) / grid_min), and at least 1
    #[test]
    fn base_columns_formula(viewport in unpadded_viewport()) {
        let engine = PresetEngine::default();
        let cols = engine.base_column_count(&viewport);
        let expected = ((viewport.device_width + 40.0) / 300.0).floor() as u32;
        prop_assert_eq!(cols, expected);
        prop_assert!(cols >= 1);
    }

    /// Whatever the viewport, the auto-fit count never drops below 1
    #[test]
    fn base_columns_never_zero(width in -500.0f64..10000.0, padding in 0.0f64..500.0) {
        let engine = PresetEngine::default();
        prop_assert!(engine.base_column_count(&ViewportMetrics::new(width, padding)) >= 1);
    }

    /// More columns means smaller or equal cards: factor_6 <= factor_5 <= 1
    #[test]
    fn factors_are_monotonic(viewport in padded_viewport()) {
        let engine = PresetEngine::default();
        let table = engine.compute_dynamic_presets(&viewport);
        let five = table.get(ColumnPreset::Five).factor();
        let six = table.get(ColumnPreset::Six).factor();
        prop_assert!(six <= five, "six {} > five {}", six, five);
        prop_assert!(five <= 1.0, "five {} > 1", five);
    }

    /// The 4 entry is the base record verbatim for every viewport
    #[test]
    fn four_is_identity(viewport in padded_viewport()) {
        let engine = PresetEngine::default();
        let table = engine.compute_dynamic_presets(&viewport);
        let identity = ScaledPreset::identity(engine.base());
        prop_assert_eq!(table.get(ColumnPreset::Four), &identity);
        prop_assert_eq!(table.get(ColumnPreset::Four).factor(), 1.0);
    }

    /// Columns of the derived width plus gaps fill the content width exactly
    #[test]
    fn derived_tracks_fill_width(viewport in padded_viewport(), extra in 1u32..=2) {
        let engine = PresetEngine::default();
        let preset = engine.derive_preset(&viewport, extra);
        let columns = f64::from(engine.base_column_count(&viewport) + extra);
        let width = preset.get(PresetField::Width).value;
        let filled = width * columns + 40.0 * (columns - 1.0);
        prop_assert!((filled - viewport.content_width()).abs() < 1e-6);
    }

    /// Publishing the same preset twice leaves the same values
    #[test]
    fn apply_twice_is_stable(viewport in padded_viewport()) {
        let engine = PresetEngine::default();
        let table = engine.compute_dynamic_presets(&viewport);
        for (_, preset) in table.iter() {
            let mut root = RootStyle::new();
            apply_preset(&mut root, preset);
            let first = root.properties().clone();
            apply_preset(&mut root, preset);
            prop_assert_eq!(root.properties(), &first);
        }
    }
}
