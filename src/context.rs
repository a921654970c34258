//! Page context for Flashgrid.
//!
//! Holds the preset state, the flip board and the pending flip timers, and
//! provides them to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! let ctx = use_context_provider(|| PageContext::new(&config));
//!
//! // In child components
//! let ctx = use_page();
//! ctx.click_card(index, ClickRole::Emoji);
//! ```

use dioxus::prelude::*;
use flashgrid_core::{
    deck::card_count, ClickRole, ColumnPreset, FlipBoard, FlipCommand, FlipPolicy, PageConfig,
    PageState,
};

use crate::bridge;

/// Get the configuration loaded at startup.
pub fn get_config() -> PageConfig {
    crate::get_config()
}

#[derive(Clone, Copy)]
pub struct PageContext {
    /// Preset state, `None` until the first viewport read
    pub page: Signal<Option<PageState>>,
    /// Row selector value
    pub selected: Signal<ColumnPreset>,
    pub flips: Signal<FlipBoard>,
    /// Timers still pending per card
    flip_tasks: Signal<Vec<Vec<Task>>>,
}

impl PageContext {
    pub fn new(config: &PageConfig) -> Self {
        let cards = card_count(&config.sections);
        Self {
            page: Signal::new(None),
            selected: Signal::new(config.initial_columns),
            flips: Signal::new(FlipBoard::new(cards, config.flip)),
            flip_tasks: Signal::new(vec![Vec::new(); cards]),
        }
    }

    /// First viewport read: build the preset table, publish the initial
    /// density and size the card backs.
    pub async fn load(mut self, config: PageConfig) {
        let Some(viewport) = bridge::read_viewport().await else {
            return;
        };
        // The selector may have changed before the first read
        let initial = *self.selected.peek();
        let mut state = PageState::new(config.base, initial, viewport);
        bridge::publish(state.take_writes()).await;

        state.sync_back_height(bridge::caption_height().await);
        bridge::publish(state.take_writes()).await;

        let latest = *self.selected.peek();
        if latest != state.selected() {
            state.select(latest, viewport);
            bridge::publish(state.take_writes()).await;
            state.sync_back_height(bridge::caption_height().await);
            bridge::publish(state.take_writes()).await;
        }

        tracing::info!(
            device_width = viewport.device_width,
            columns = %state.selected(),
            "page ready"
        );
        self.page.set(Some(state));
    }

    /// Row selector change
    pub async fn select_row(mut self, value: String) {
        let key = match value.parse::<ColumnPreset>() {
            Ok(key) => key,
            Err(err) => {
                tracing::warn!(%err, "ignoring row selector value");
                return;
            }
        };
        self.selected.set(key);

        let Some(viewport) = bridge::read_viewport().await else {
            return;
        };

        let cancel = self.flips.write().reset_all();
        for index in cancel {
            self.cancel_flip_timers(index);
        }

        let writes = {
            let mut page = self.page.write();
            let Some(state) = page.as_mut() else {
                return;
            };
            state.select(key, viewport);
            state.take_writes()
        };
        bridge::publish(writes).await;

        let caption = bridge::caption_height().await;
        let writes = {
            let mut page = self.page.write();
            let Some(state) = page.as_mut() else {
                return;
            };
            state.sync_back_height(caption);
            state.take_writes()
        };
        bridge::publish(writes).await;
    }

    /// Click on part `role` of card `index`
    pub fn click_card(mut self, index: usize, role: ClickRole) {
        let commands = self.flips.write().click(index, role);
        if commands.is_empty() {
            return;
        }
        tracing::debug!(index, ?role, "card flip");

        let keep_tasks = self.flips.peek().timing().policy == FlipPolicy::Restart;
        let mut flips = self.flips;
        for command in commands {
            match command {
                FlipCommand::CancelPending => self.cancel_flip_timers(index),
                FlipCommand::Schedule { delay, tick } => {
                    let task = spawn(async move {
                        tokio::time::sleep(delay).await;
                        flips.write().tick(index, tick);
                    });
                    if keep_tasks {
                        if let Some(tasks) = self.flip_tasks.write().get_mut(index) {
                            tasks.push(task);
                        }
                    }
                }
            }
        }
    }

    fn cancel_flip_timers(&mut self, index: usize) {
        let tasks = self
            .flip_tasks
            .write()
            .get_mut(index)
            .map(std::mem::take)
            .unwrap_or_default();
        for task in tasks {
            task.cancel();
        }
    }
}

/// Hook to access the page context.
pub fn use_page() -> PageContext {
    use_context::<PageContext>()
}
