//! Session event state and the trigger policy
//!
//! The catalog declares what *can* happen on a tile; this module tracks what
//! *has* happened in the current session. Fired events are recorded against
//! `(coordinate, event index)` so the shared catalog is never mutated and a
//! fresh session starts clean.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::catalog::event::{clamp01, LocationEvent};
use crate::core::types::Coord;

/// Per-session record of fired events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLedger {
    fired: HashSet<(Coord, usize)>,
}

impl EventLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, coord: Coord, index: usize) {
        self.fired.insert((coord, index));
    }

    pub fn has_fired(&self, coord: Coord, index: usize) -> bool {
        self.fired.contains(&(coord, index))
    }

    pub fn len(&self) -> usize {
        self.fired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }
}

/// Roll the events of a just-entered tile, first match wins
///
/// Events are evaluated in declared order with one uniform draw each; the
/// first draw under the event's clamped chance fires and ends the entry.
/// At most one event fires per entry. Returns the index of the fired event.
pub fn roll_entry(
    coord: Coord,
    events: &[LocationEvent],
    ledger: &mut EventLedger,
    rng: &mut dyn RngCore,
) -> Option<usize> {
    for (index, event) in events.iter().enumerate() {
        if event.one_time && ledger.has_fired(coord, index) {
            continue;
        }
        let roll: f64 = rng.gen();
        if roll < clamp01(event.chance) as f64 {
            ledger.mark(coord, index);
            tracing::debug!("event '{}' fired at {} (roll {:.3})", event.name, coord, roll);
            return Some(index);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::event::EventKind;
    use rand::rngs::mock::StepRng;

    fn sure(name: &str) -> LocationEvent {
        LocationEvent::new(name, 1.0, EventKind::RandomEvent)
    }

    fn never(name: &str) -> LocationEvent {
        LocationEvent::new(name, 0.0, EventKind::RandomEvent)
    }

    #[test]
    fn test_first_match_wins() {
        let events = [never("a"), sure("b"), sure("c")];
        let mut ledger = EventLedger::new();
        let mut rng = StepRng::new(0, 0);

        let fired = roll_entry(Coord::new(0, 0), &events, &mut ledger, &mut rng);
        assert_eq!(fired, Some(1));
    }

    #[test]
    fn test_zero_chance_never_fires() {
        let events = [never("a")];
        let mut ledger = EventLedger::new();
        let mut rng = StepRng::new(0, 0);

        for _ in 0..50 {
            assert_eq!(roll_entry(Coord::new(0, 0), &events, &mut ledger, &mut rng), None);
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_one_time_fires_once() {
        let events = [sure("welcome").one_time()];
        let mut ledger = EventLedger::new();
        let mut rng = StepRng::new(0, 0);
        let coord = Coord::new(1, 2);

        assert_eq!(roll_entry(coord, &events, &mut ledger, &mut rng), Some(0));
        for _ in 0..20 {
            assert_eq!(roll_entry(coord, &events, &mut ledger, &mut rng), None);
        }
    }

    #[test]
    fn test_repeatable_event_fires_again() {
        let events = [sure("ambush")];
        let mut ledger = EventLedger::new();
        let mut rng = StepRng::new(0, 0);
        let coord = Coord::new(1, 2);

        assert_eq!(roll_entry(coord, &events, &mut ledger, &mut rng), Some(0));
        assert_eq!(roll_entry(coord, &events, &mut ledger, &mut rng), Some(0));
    }

    #[test]
    fn test_ledger_is_per_coordinate() {
        let events = [sure("shrine blessing").one_time()];
        let mut ledger = EventLedger::new();
        let mut rng = StepRng::new(0, 0);

        assert_eq!(roll_entry(Coord::new(0, 0), &events, &mut ledger, &mut rng), Some(0));
        // Same catalog entry on another tile is independent state
        assert_eq!(roll_entry(Coord::new(5, 5), &events, &mut ledger, &mut rng), Some(0));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_out_of_range_chance_clamped() {
        let mut hot = sure("storm");
        hot.chance = 5.0;
        let mut cold = never("void");
        cold.chance = -2.0;

        let mut ledger = EventLedger::new();
        let mut rng = StepRng::new(0, 0);

        assert_eq!(roll_entry(Coord::new(0, 0), &[cold], &mut ledger, &mut rng), None);
        assert_eq!(roll_entry(Coord::new(0, 0), &[hot], &mut ledger, &mut rng), Some(0));
    }
}
