//! Navigation engine - validates and applies player movement
//!
//! `MapService` owns the grid, the player position, discovery state, the
//! session event ledger, and the observer list. Every operation completes
//! synchronously in one call or is rejected with zero side effects.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::catalog::event::LocationEvent;
use crate::catalog::location::Location;
use crate::core::types::{Coord, Direction};
use crate::world::discovery::Discovery;
use crate::world::events::{roll_entry, EventLedger};
use crate::world::grid::Grid;

/// Status of a `step` attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was committed
    Moved,
    /// The target coordinate lies outside the grid
    OutOfBounds,
    /// The occupied tile has no exit in that direction
    Blocked,
}

impl MoveOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved)
    }
}

/// Subscriber to navigation notifications
///
/// Callbacks run synchronously inside the `step`/`teleport` call, in
/// subscription order. Observers are owned by the engine, so a callback can
/// never re-enter the engine while an operation is in flight.
pub trait MapObserver {
    fn location_changed(&mut self, _at: Coord, _location: &Location) {}
    fn event_triggered(&mut self, _at: Coord, _event: &LocationEvent) {}
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// The world map navigation engine
pub struct MapService {
    grid: Grid,
    position: Coord,
    discovered: Discovery,
    ledger: EventLedger,
    rng: Box<dyn RngCore>,
    observers: Vec<(ObserverId, Box<dyn MapObserver>)>,
    next_observer: u64,
}

impl MapService {
    /// Create an engine over the given grid
    ///
    /// The start coordinate is clamped into bounds and marked discovered.
    pub fn new(grid: Grid, start: Coord) -> Self {
        let position = grid.clamp(start);
        let mut discovered = Discovery::new();
        discovered.mark(position);
        Self {
            grid,
            position,
            discovered,
            ledger: EventLedger::new(),
            rng: Box::new(ChaCha8Rng::from_entropy()),
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// Replace the random source used for event rolls
    ///
    /// Tests inject deterministic sequences here; production keeps the
    /// entropy-seeded default.
    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    pub fn discovered(&self) -> &Discovery {
        &self.discovered
    }

    pub fn ledger(&self) -> &EventLedger {
        &self.ledger
    }

    /// The location the player currently occupies
    pub fn current(&self) -> &Location {
        self.grid
            .get(self.position)
            .expect("player position is kept in bounds")
    }

    /// Location lookup with the documented defensive fallback: an
    /// out-of-bounds coordinate resolves to the occupied tile
    ///
    /// Callers must not use this for bounds validation.
    pub fn location_at(&self, coord: Coord) -> &Location {
        match self.grid.get(coord) {
            Some(location) => location,
            None => self.current(),
        }
    }

    /// Re-author a grid cell
    ///
    /// Grid `set` semantics (soft no-op out of bounds or unnamed); editing
    /// the occupied tile republishes `location_changed` so renderers stay
    /// consistent.
    pub fn set_location(&mut self, coord: Coord, location: Location) -> bool {
        if !self.grid.set(coord, location) {
            return false;
        }
        if coord == self.position {
            let location = self.grid.get(coord).expect("just stored in bounds");
            for (_, obs) in self.observers.iter_mut() {
                obs.location_changed(coord, location);
            }
        }
        true
    }

    /// Attempt one step in the given direction
    ///
    /// Exit permission is read from the occupied tile only; the destination
    /// tile's flags are never consulted. On commit: position moves, the
    /// target is marked discovered, `location_changed` is published, and the
    /// new tile's events are rolled.
    pub fn step(&mut self, dir: Direction) -> MoveOutcome {
        let target = self.position.step(dir);
        if !self.grid.in_bounds(target) {
            tracing::debug!("step {} from {} rejected: out of bounds", dir, self.position);
            return MoveOutcome::OutOfBounds;
        }
        if !self.current().exits.allows(dir) {
            tracing::debug!("step {} from {} rejected: exit closed", dir, self.position);
            return MoveOutcome::Blocked;
        }

        self.position = target;
        self.discovered.mark(target);

        let location = self.grid.get(target).expect("target checked in bounds");
        tracing::debug!("moved {} to {} ({})", dir, target, location.name);
        for (_, obs) in self.observers.iter_mut() {
            obs.location_changed(target, location);
        }

        if let Some(index) = roll_entry(
            target,
            &location.events,
            &mut self.ledger,
            self.rng.as_mut(),
        ) {
            let event = &location.events[index];
            for (_, obs) in self.observers.iter_mut() {
                obs.event_triggered(target, event);
            }
        }

        MoveOutcome::Moved
    }

    /// Unconditionally place the player, clamping into bounds
    ///
    /// Bypasses exit flags and rolls no events; meant for restore and debug
    /// paths, never as a normal movement action. Returns the clamped
    /// coordinate.
    pub fn teleport(&mut self, coord: Coord) -> Coord {
        let target = self.grid.clamp(coord);
        self.position = target;
        self.discovered.mark(target);

        let location = self.grid.get(target).expect("clamped into bounds");
        tracing::debug!("teleported to {} ({})", target, location.name);
        for (_, obs) in self.observers.iter_mut() {
            obs.location_changed(target, location);
        }
        target
    }

    /// Restore a persisted session: discovered set first, then position
    ///
    /// Out-of-grid discovered coordinates are kept as-is (the set is
    /// monotone and harmless to over-fill); the position goes through
    /// `teleport`, which clamps and re-marks it discovered.
    pub fn restore(&mut self, position: Coord, discovered: impl IntoIterator<Item = Coord>) {
        for coord in discovered {
            self.discovered.mark(coord);
        }
        self.teleport(position);
    }

    /// Register an observer; notifications arrive in subscription order
    pub fn subscribe(&mut self, observer: impl MapObserver + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer; returns whether it was registered
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }
}
