// ============================================================================
// Event Handler Interface
// Defines the contract for observing processed input lines
// ============================================================================

use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the line processor
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineEvent {
    /// Line validated and summed with the addend
    LineAccepted {
        line_number: usize,
        input: String,
        addend: String,
        sum: String,
    },

    /// Line failed validation, reason is the validator's message
    LineRejected {
        line_number: usize,
        input: String,
        reason: String,
    },

    /// Blank line skipped
    LineSkipped { line_number: usize },
}

/// Event handler trait for processing driver events
/// Implementations can handle logging, auditing, collection, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a line event
    fn on_event(&self, event: LineEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<LineEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: LineEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: LineEvent) {
        match &event {
            LineEvent::LineRejected {
                line_number,
                input,
                reason,
            } => tracing::warn!(line_number, input = %input, reason = %reason, "line rejected"),
            _ => tracing::debug!("Driver event: {:?}", event),
        }
    }
}

/// Keeps every event in arrival order
#[derive(Default)]
pub struct CollectingEventHandler {
    events: Mutex<Vec<LineEvent>>,
}

impl CollectingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events seen so far
    pub fn events(&self) -> Vec<LineEvent> {
        self.events.lock().clone()
    }

    /// Drain the collected events
    pub fn take(&self) -> Vec<LineEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventHandler for CollectingEventHandler {
    fn on_event(&self, event: LineEvent) {
        self.events.lock().push(event);
    }
}
