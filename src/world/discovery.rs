//! Fog-of-war discovery tracking
//!
//! A monotonically growing set of coordinates the player has ever occupied.
//! Coordinates are never removed; rendering collaborators read it to decide
//! what counts as "known".

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::types::Coord;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Discovery {
    visited: HashSet<Coord>,
}

impl Discovery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a coordinate as visited; idempotent
    ///
    /// Returns `true` the first time a coordinate is seen.
    pub fn mark(&mut self, coord: Coord) -> bool {
        self.visited.insert(coord)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.visited.contains(&coord)
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Read-only view for fog-of-war rendering
    pub fn iter(&self) -> impl Iterator<Item = &Coord> {
        self.visited.iter()
    }

    /// Visited coordinates in deterministic order, for snapshots
    pub fn sorted(&self) -> Vec<Coord> {
        let mut coords: Vec<Coord> = self.visited.iter().copied().collect();
        coords.sort();
        coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_idempotent() {
        let mut disc = Discovery::new();
        assert!(disc.mark(Coord::new(1, 1)));
        assert!(!disc.mark(Coord::new(1, 1)));
        assert_eq!(disc.len(), 1);
        assert!(disc.contains(Coord::new(1, 1)));
        assert!(!disc.contains(Coord::new(0, 0)));
    }

    #[test]
    fn test_sorted_is_deterministic() {
        let mut disc = Discovery::new();
        disc.mark(Coord::new(2, 0));
        disc.mark(Coord::new(0, 1));
        disc.mark(Coord::new(0, 0));

        assert_eq!(
            disc.sorted(),
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(2, 0)]
        );
    }
}
