//! Event logging system for notable simulation events.
//!
//! The core never draws anything; presentation layers read this log to show
//! notifications and markers for culled seekers.

use ndarray::Array1;
use std::collections::VecDeque;

/// A logged event for display in the UI.
#[derive(Debug, Clone)]
pub struct LoggedEvent {
    /// Sequence number, increasing by one per logged event
    pub seq: u64,
    /// Simulation time when the event occurred
    pub time: f32,
    /// What happened
    pub kind: EventKind,
    /// Human-readable description of the event
    pub description: String,
    /// Where it happened, for events tied to a position
    pub pos: Option<Array1<f32>>,
}

/// Event categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A seeker consumed an obstacle
    Consumed,
    /// A seeker was removed by selection or evolution
    Culled,
    /// A seeker's brain was mutated
    Mutation,
    /// Selection replaced the worst seeker
    Selection,
    /// Evolution replaced the worst half of the population
    Evolution,
    /// The population was recreated
    Reset,
}

/// Event log that tracks recent simulation events
#[derive(Debug, Clone)]
pub struct EventLog {
    /// Recent events, newest first
    events: VecDeque<LoggedEvent>,
    /// Maximum number of events to keep
    max_events: usize,
    /// Number of events ever logged
    total: u64,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(20)
    }
}

impl EventLog {
    /// Creates a new event log with specified capacity
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
            total: 0,
        }
    }

    /// Adds a new event to the log
    pub fn log(&mut self, time: f32, kind: EventKind, description: String, pos: Option<Array1<f32>>) {
        self.total += 1;
        self.events.push_front(LoggedEvent {
            seq: self.total,
            time,
            kind,
            description,
            pos,
        });

        // Keep only the most recent events
        while self.events.len() > self.max_events {
            self.events.pop_back();
        }
    }

    /// Returns all events, newest first
    pub fn events(&self) -> &VecDeque<LoggedEvent> {
        &self.events
    }

    /// Returns the retained events logged after sequence number `seq`, oldest first.
    pub fn since(&self, seq: u64) -> impl Iterator<Item = &LoggedEvent> {
        self.events.iter().rev().filter(move |event| event.seq > seq)
    }

    /// Sequence number of the newest event, or 0 if nothing was logged.
    pub fn last_seq(&self) -> u64 {
        self.total
    }

    /// Clears all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_is_bounded_newest_first() {
        let mut log = EventLog::new(3);
        for i in 0..5 {
            log.log(i as f32, EventKind::Mutation, format!("event {i}"), None);
        }
        let seqs: Vec<u64> = log.events().iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![5, 4, 3]);
        assert_eq!(log.last_seq(), 5);
    }

    #[test]
    fn test_since_returns_oldest_first() {
        let mut log = EventLog::new(10);
        log.log(0.0, EventKind::Selection, "a".into(), None);
        log.log(1.0, EventKind::Evolution, "b".into(), None);
        log.log(2.0, EventKind::Reset, "c".into(), None);

        let kinds: Vec<EventKind> = log.since(1).map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::Evolution, EventKind::Reset]);

        log.clear();
        assert_eq!(log.since(0).count(), 0);
        assert_eq!(log.last_seq(), 3);
    }
}
