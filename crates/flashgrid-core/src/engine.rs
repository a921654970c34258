//! Preset engine
//!
//! Turns a viewport snapshot into the three column presets.
//!
//! ## Example
//!
//! ```rust
//! use flashgrid_core::{ColumnPreset, PresetEngine, PresetField, ViewportMetrics};
//!
//! let engine = PresetEngine::default();
//! let viewport = ViewportMetrics::new(1000.0, 0.0);
//!
//! assert_eq!(engine.base_column_count(&viewport), 3);
//!
//! let table = engine.compute_dynamic_presets(&viewport);
//! let five = table.get(ColumnPreset::Five);
//! assert_eq!(five.get(PresetField::Width).to_string(), "220px");
//! ```

use serde::{Deserialize, Serialize};

use crate::preset::{BasePreset, PresetTable, ScaledPreset};

/// Viewport values read from the document when presets are computed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportMetrics {
    /// `window.innerWidth`
    pub device_width: f64,
    /// Resolved left + right padding of `<body>`
    pub body_padding: f64,
}

impl ViewportMetrics {
    pub fn new(device_width: f64, body_padding: f64) -> Self {
        Self {
            device_width,
            body_padding,
        }
    }

    /// Width left for the grid once body padding is taken off
    pub fn content_width(&self) -> f64 {
        self.device_width - self.body_padding
    }
}

/// Computes scaled presets from a fixed base record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetEngine {
    base: BasePreset,
}

impl PresetEngine {
    pub fn new(base: BasePreset) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &BasePreset {
        &self.base
    }

    /// How many base-width tracks fit, counting one extra gap so that `n`
    /// tracks and `n - 1` gaps fitting exactly still count as `n`. Never
    /// less than 1.
    pub fn base_column_count(&self, viewport: &ViewportMetrics) -> u32 {
        let fit = ((viewport.content_width() + self.base.gap) / self.base.grid_min).floor();
        // f64::max drops NaN
        fit.max(1.0).min(u32::MAX as f64) as u32
    }

    /// Preset with `extra_cards` more columns than the auto-fit count.
    ///
    /// The card width is not clamped: a viewport too narrow for the gaps
    /// yields a zero or negative width and every field follows it.
    pub fn derive_preset(&self, viewport: &ViewportMetrics, extra_cards: u32) -> ScaledPreset {
        let columns = self.base_column_count(viewport).saturating_add(extra_cards);
        let total_gap = self.base.gap * f64::from(columns - 1);
        let card_width = (viewport.content_width() - total_gap) / f64::from(columns);
        let factor = card_width / self.base.grid_min;

        tracing::debug!(
            columns,
            card_width,
            factor,
            "derived preset"
        );

        ScaledPreset::scaled(&self.base, factor, card_width)
    }

    /// The 4/5/6 table. The 4 entry is the base record itself, not a
    /// derivation, so it ignores the viewport entirely.
    pub fn compute_dynamic_presets(&self, viewport: &ViewportMetrics) -> PresetTable {
        PresetTable {
            four: ScaledPreset::identity(&self.base),
            five: self.derive_preset(viewport, 1),
            six: self.derive_preset(viewport, 2),
        }
    }
}
