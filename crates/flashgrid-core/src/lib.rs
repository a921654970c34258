//! Flashgrid Core Library
//!
//! Responsive presets and interaction state for a flashcard grid.
//!
//! ## Overview
//!
//! The page offers three densities: 4, 5 or 6 cards per row. The 4-per-row
//! layout is the reference ([`BasePreset`]); the denser layouts scale every
//! dimension by one factor derived from the viewport. Presets are published
//! as CSS custom properties through a [`StyleSink`].
//!
//! Nothing here touches a real document. The desktop app owns the DOM and
//! feeds viewport metrics in; the same code runs under plain unit tests.
//!
//! ## Quick Start
//!
//! ```rust
//! use flashgrid_core::{apply_preset, ColumnPreset, PresetEngine, RootStyle, StyleSink, ViewportMetrics};
//!
//! let engine = PresetEngine::default();
//! let table = engine.compute_dynamic_presets(&ViewportMetrics::new(1280.0, 32.0));
//!
//! let mut root = RootStyle::new();
//! apply_preset(&mut root, table.get(ColumnPreset::Six));
//! assert!(root.get_property("--card-width").is_some());
//! ```

pub mod config;
pub mod deck;
pub mod engine;
pub mod error;
pub mod flip;
pub mod interaction;
pub mod page;
pub mod preset;
pub mod publish;
pub mod roles;
pub mod units;

// Re-exports
pub use config::PageConfig;
pub use deck::{Caption, CardBack, DeckSection, Flashcard};
pub use engine::{PresetEngine, ViewportMetrics};
pub use error::{GridError, GridResult};
pub use flip::{
    CardFlip, FlipBoard, FlipCommand, FlipPhase, FlipPolicy, FlipStep, FlipTick, FlipTiming,
    FLIP_HALF_VAR,
};
pub use interaction::{LanguageDropdown, LanguagePair, ScrollTarget, SidebarState, DROPDOWN_ARROW};
pub use page::PageState;
pub use preset::{BasePreset, ColumnPreset, PresetField, PresetTable, ScaledPreset};
pub use publish::{apply_preset, recompute_back_height, RootStyle, StyleSink, BACK_HEIGHT_VAR};
pub use roles::ClickRole;
pub use units::{Length, Unit};
