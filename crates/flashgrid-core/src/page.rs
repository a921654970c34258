//! Preset state of a running page
//!
//! Owns the current [`PresetTable`], the selected density and a mirror of
//! the document root's custom properties. Every change is recorded as a
//! write so the host can flush it to the live document in one batch.

use crate::engine::{PresetEngine, ViewportMetrics};
use crate::preset::{BasePreset, ColumnPreset, PresetTable, ScaledPreset};
use crate::publish::{apply_preset, recompute_back_height, RootStyle, StyleSink};
use crate::units::Length;

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    engine: PresetEngine,
    table: PresetTable,
    selected: ColumnPreset,
    root: RootStyle,
}

impl PageState {
    /// State at page load.
    ///
    /// The stylesheet already carries the 4-per-row values, so they seed the
    /// mirror without being written. Any other initial density is published.
    pub fn new(base: BasePreset, initial: ColumnPreset, viewport: ViewportMetrics) -> Self {
        let engine = PresetEngine::new(base);
        let table = engine.compute_dynamic_presets(&viewport);

        let mut root = RootStyle::new();
        for (name, value) in table.get(ColumnPreset::Four).declarations() {
            root = root.with_property(name, &value);
        }

        let mut state = Self {
            engine,
            table,
            selected: ColumnPreset::Four,
            root,
        };
        if initial != ColumnPreset::Four {
            state.select(initial, viewport);
        }
        state
    }

    pub fn selected(&self) -> ColumnPreset {
        self.selected
    }

    pub fn table(&self) -> &PresetTable {
        &self.table
    }

    pub fn current(&self) -> &ScaledPreset {
        self.table.get(self.selected)
    }

    pub fn root(&self) -> &RootStyle {
        &self.root
    }

    /// Row selector change: rebuild the table for the current viewport and
    /// publish the chosen preset.
    pub fn select(&mut self, key: ColumnPreset, viewport: ViewportMetrics) {
        self.table = self.engine.compute_dynamic_presets(&viewport);
        self.selected = key;
        apply_preset(&mut self.root, self.table.get(key));
        tracing::info!(
            columns = %key,
            device_width = viewport.device_width,
            factor = self.current().factor(),
            "preset selected"
        );
    }

    /// Refresh `--back-height` from the caption's rendered height
    pub fn sync_back_height(&mut self, caption_height: Option<f64>) -> Option<Length> {
        recompute_back_height(&mut self.root, caption_height)
    }

    pub fn property(&self, name: &str) -> Option<String> {
        self.root.get_property(name)
    }

    /// Writes not yet flushed to the document, oldest first
    pub fn take_writes(&mut self) -> Vec<(String, String)> {
        self.root.take_writes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::PresetField;
    use crate::publish::BACK_HEIGHT_VAR;

    fn viewport() -> ViewportMetrics {
        ViewportMetrics::new(1000.0, 0.0)
    }

    #[test]
    fn load_with_default_density_writes_nothing() {
        let mut state = PageState::new(BasePreset::default(), ColumnPreset::Four, viewport());
        assert!(state.take_writes().is_empty());
        assert_eq!(state.property("--card-height").as_deref(), Some("220px"));
    }

    #[test]
    fn load_with_other_density_publishes_it() {
        let mut state = PageState::new(BasePreset::default(), ColumnPreset::Five, viewport());
        let writes = state.take_writes();
        assert_eq!(writes.len(), PresetField::COUNT);
        assert!(writes.contains(&("--card-width".to_string(), "220px".to_string())));
    }

    #[test]
    fn select_uses_new_viewport() {
        let mut state = PageState::new(BasePreset::default(), ColumnPreset::Four, viewport());
        state.select(ColumnPreset::Five, ViewportMetrics::new(1300.0, 0.0));

        // 4 auto-fit columns + 1: (1300 - 160) / 5
        assert_eq!(state.property("--card-width").as_deref(), Some("228px"));
        assert_eq!(state.selected(), ColumnPreset::Five);
    }

    #[test]
    fn back_height_follows_selected_preset() {
        let mut state = PageState::new(BasePreset::default(), ColumnPreset::Four, viewport());
        state.sync_back_height(Some(80.0));
        assert_eq!(state.property(BACK_HEIGHT_VAR).as_deref(), Some("300px"));

        state.select(ColumnPreset::Six, viewport());
        let back = state.sync_back_height(Some(80.0)).unwrap();
        let card = state.current().get(PresetField::Height).value;
        assert!((back.value - (card + 80.0)).abs() < 1e-9);
    }

    #[test]
    fn selection_made_while_loading_is_published() {
        let mut state = PageState::new(BasePreset::default(), ColumnPreset::Four, viewport());
        assert!(state.take_writes().is_empty());

        state.select(ColumnPreset::Six, viewport());
        let writes = state.take_writes();
        assert_eq!(writes.len(), PresetField::COUNT);

        let expected = state.table().get(ColumnPreset::Six).get(PresetField::Width).to_string();
        assert_eq!(state.property("--card-width"), Some(expected));
        assert_eq!(state.selected(), ColumnPreset::Six);
    }

    #[test]
    fn back_height_before_first_paint_is_noop() {
        let mut state = PageState::new(BasePreset::default(), ColumnPreset::Four, viewport());
        assert!(state.sync_back_height(None).is_none());
        assert!(state.take_writes().is_empty());
    }
}
