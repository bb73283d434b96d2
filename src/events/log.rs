//! Chronological event log.
//!
//! Every recorded event is also emitted through `tracing`: milestones at
//! `info`, ordinary play at `debug`.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::event::GameEvent;

/// Append-only log backed by a persistent vector, so cloning a game state
/// does not copy the history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vector<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn record(&mut self, event: GameEvent) {
        if event.is_milestone() {
            info!(seq = self.events.len(), ?event, "game event");
        } else {
            debug!(seq = self.events.len(), ?event, "game event");
        }
        self.events.push_back(event);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events in the order they happened.
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&GameEvent> {
        self.events.back()
    }
}
