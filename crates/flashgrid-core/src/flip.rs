//! Card flip state machine
//!
//! A flip is staged in two halves: the card shrinks out, the face swaps at
//! the midpoint, then it grows back in.
//!
//! ```text
//! Idle --click--> FlippingOut --midpoint tick--> FlippingIn --settle tick--> Idle
//! ```
//!
//! The machine never sleeps itself. [`CardFlip::click`] returns
//! [`FlipCommand`]s telling the host which ticks to deliver and when, and the
//! host feeds them back through [`CardFlip::tick`].
//!
//! ## Policies
//!
//! - [`FlipPolicy::Restart`]: a new click cancels whatever is pending for the
//!   card. Ticks from an older click are dropped by generation.
//! - [`FlipPolicy::Overlap`]: nothing is cancelled and every tick lands, so
//!   two clicks inside the midpoint delay toggle twice and cancel out.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::roles::ClickRole;

/// Class present while the back face is shown
pub const SHOW_BACK_CLASS: &str = "show-back";
/// Class present while a flip animation runs
pub const FLIPPING_CLASS: &str = "flipping";
/// Custom property holding the duration of one flip half
pub const FLIP_HALF_VAR: &str = "--flip-half";

/// How overlapping clicks on one card interact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlipPolicy {
    #[default]
    Restart,
    Overlap,
}

impl fmt::Display for FlipPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlipPolicy::Restart => f.write_str("restart"),
            FlipPolicy::Overlap => f.write_str("overlap"),
        }
    }
}

impl FromStr for FlipPolicy {
    type Err = GridError;

    fn from_str(s: &str) -> GridResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "restart" => Ok(FlipPolicy::Restart),
            "overlap" => Ok(FlipPolicy::Overlap),
            _ => Err(GridError::UnknownFlipPolicy(s.to_string())),
        }
    }
}

/// Delays of the two flip halves, measured from the click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlipTiming {
    pub midpoint_ms: u64,
    pub settle_ms: u64,
    pub policy: FlipPolicy,
}

impl Default for FlipTiming {
    fn default() -> Self {
        Self {
            midpoint_ms: 200,
            settle_ms: 400,
            policy: FlipPolicy::default(),
        }
    }
}

impl FlipTiming {
    pub fn midpoint(&self) -> Duration {
        Duration::from_millis(self.midpoint_ms)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// `:root` block timing the CSS transition to the midpoint tick, so the
    /// face swaps exactly when the card is edge-on.
    pub fn to_css(&self) -> String {
        format!(":root {{\n  {}: {}ms;\n}}\n", FLIP_HALF_VAR, self.midpoint_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlipPhase {
    #[default]
    Idle,
    FlippingOut,
    FlippingIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipStep {
    /// Swap faces
    Midpoint,
    /// Clear the flipping marker
    Settle,
}

/// A deferred step, stamped with the click that scheduled it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipTick {
    pub generation: u64,
    pub step: FlipStep,
}

/// What the host must do after a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipCommand {
    /// Drop every timer still pending for this card
    CancelPending,
    /// Deliver `tick` after `delay`
    Schedule { delay: Duration, tick: FlipTick },
}

/// Presentation state of one card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardFlip {
    show_back: bool,
    flipping: bool,
    phase: FlipPhase,
    generation: u64,
}

impl CardFlip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_back(&self) -> bool {
        self.show_back
    }

    pub fn flipping(&self) -> bool {
        self.flipping
    }

    pub fn phase(&self) -> FlipPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Handle a click on part `role` of the card
    pub fn click(&mut self, role: ClickRole, timing: &FlipTiming) -> Vec<FlipCommand> {
        if !role.flips_card() {
            return Vec::new();
        }

        self.generation += 1;
        self.flipping = true;
        self.phase = FlipPhase::FlippingOut;

        let mut commands = Vec::with_capacity(3);
        if timing.policy == FlipPolicy::Restart {
            commands.push(FlipCommand::CancelPending);
        }
        commands.push(FlipCommand::Schedule {
            delay: timing.midpoint(),
            tick: FlipTick {
                generation: self.generation,
                step: FlipStep::Midpoint,
            },
        });
        commands.push(FlipCommand::Schedule {
            delay: timing.settle(),
            tick: FlipTick {
                generation: self.generation,
                step: FlipStep::Settle,
            },
        });
        commands
    }

    /// Deliver a scheduled tick. Returns whether it changed anything.
    pub fn tick(&mut self, tick: FlipTick, policy: FlipPolicy) -> bool {
        if policy == FlipPolicy::Restart {
            let expected = match tick.step {
                FlipStep::Midpoint => FlipPhase::FlippingOut,
                FlipStep::Settle => FlipPhase::FlippingIn,
            };
            if tick.generation != self.generation || self.phase != expected {
                tracing::trace!(?tick, generation = self.generation, "stale flip tick dropped");
                return false;
            }
        }

        match tick.step {
            FlipStep::Midpoint => {
                self.show_back = !self.show_back;
                self.phase = FlipPhase::FlippingIn;
            }
            FlipStep::Settle => {
                self.flipping = false;
                self.phase = FlipPhase::Idle;
            }
        }
        true
    }

    /// Back to the front face, no animation
    pub fn reset(&mut self, policy: FlipPolicy) -> Vec<FlipCommand> {
        self.show_back = false;
        self.flipping = false;
        self.phase = FlipPhase::Idle;
        self.generation += 1;
        match policy {
            FlipPolicy::Restart => vec![FlipCommand::CancelPending],
            FlipPolicy::Overlap => Vec::new(),
        }
    }

    /// State classes to render next to the base `card` class
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::with_capacity(2);
        if self.show_back {
            classes.push(SHOW_BACK_CLASS);
        }
        if self.flipping {
            classes.push(FLIPPING_CLASS);
        }
        classes
    }
}

/// Flip state of every card on the page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlipBoard {
    cards: Vec<CardFlip>,
    timing: FlipTiming,
}

impl FlipBoard {
    pub fn new(card_count: usize, timing: FlipTiming) -> Self {
        Self {
            cards: vec![CardFlip::new(); card_count],
            timing,
        }
    }

    pub fn timing(&self) -> &FlipTiming {
        &self.timing
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, index: usize) -> Option<&CardFlip> {
        self.cards.get(index)
    }

    pub fn click(&mut self, index: usize, role: ClickRole) -> Vec<FlipCommand> {
        let timing = self.timing;
        match self.cards.get_mut(index) {
            Some(card) => card.click(role, &timing),
            None => Vec::new(),
        }
    }

    pub fn tick(&mut self, index: usize, tick: FlipTick) -> bool {
        let policy = self.timing.policy;
        self.cards
            .get_mut(index)
            .is_some_and(|card| card.tick(tick, policy))
    }

    /// Reset every card; returns the indices whose timers must be cancelled
    pub fn reset_all(&mut self) -> Vec<usize> {
        let policy = self.timing.policy;
        let mut cancel = Vec::new();
        for (index, card) in self.cards.iter_mut().enumerate() {
            if card.reset(policy).contains(&FlipCommand::CancelPending) {
                cancel.push(index);
            }
        }
        cancel
    }
}
