//! Location events - randomized happenings rolled on tile entry

use serde::{Deserialize, Serialize};

/// Narrative category of an event, used by consumers to route the hand-off
/// (combat, dialogue, loot, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Encounter,
    ItemFind,
    CharacterMeeting,
    StoryEvent,
    RandomEvent,
}

impl Default for EventKind {
    fn default() -> Self {
        Self::RandomEvent
    }
}

/// One possible event on a location
///
/// Triggered-state is deliberately not stored here: the catalog stays
/// immutable across sessions, and the engine tracks fired one-time events in
/// a per-session ledger keyed by `(coordinate, event index)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationEvent {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Trigger probability per tile entry, clamped into [0, 1] at roll time
    pub chance: f32,
    #[serde(default)]
    pub one_time: bool,
    #[serde(default)]
    pub kind: EventKind,
}

impl LocationEvent {
    pub fn new(name: &str, chance: f32, kind: EventKind) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            chance,
            one_time: false,
            kind,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn one_time(mut self) -> Self {
        self.one_time = true;
        self
    }
}

/// Clamp a trigger chance into the valid probability range
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(3.0), 1.0);
    }

    #[test]
    fn test_event_builder() {
        let ev = LocationEvent::new("Timberwolf Ambush", 0.3, EventKind::Encounter)
            .with_description("Snapping branches circle in from the dark.")
            .one_time();

        assert_eq!(ev.name, "Timberwolf Ambush");
        assert!(ev.one_time);
        assert_eq!(ev.kind, EventKind::Encounter);
    }
}
