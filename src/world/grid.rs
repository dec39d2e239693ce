//! Fixed-size tile store for the world map
//!
//! The grid owns the authored content and nothing else: no player position,
//! no discovery state. It is filled with a placeholder at construction and
//! re-authored only through `set`.

use serde::{Deserialize, Serialize};

use crate::catalog::location::Location;
use crate::core::types::Coord;

/// A `width x height` array of locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<Location>,
}

impl Grid {
    /// Create a grid filled with the given placeholder location
    ///
    /// Panics on non-positive dimensions; that is a programmer error, not a
    /// runtime condition.
    pub fn new(width: i32, height: i32, placeholder: Location) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {width}x{height}"
        );
        let tiles = vec![placeholder; (width * height) as usize];
        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }

    /// Clamp both components into bounds
    pub fn clamp(&self, coord: Coord) -> Coord {
        Coord::new(
            coord.x.clamp(0, self.width - 1),
            coord.y.clamp(0, self.height - 1),
        )
    }

    fn index(&self, coord: Coord) -> usize {
        (coord.y * self.width + coord.x) as usize
    }

    /// Get the location at a coordinate, `None` out of bounds
    pub fn get(&self, coord: Coord) -> Option<&Location> {
        if self.in_bounds(coord) {
            Some(&self.tiles[self.index(coord)])
        } else {
            None
        }
    }

    /// Replace the location at a coordinate
    ///
    /// Soft no-op returning `false` when the coordinate is out of bounds or
    /// the location is unnamed.
    pub fn set(&mut self, coord: Coord, location: Location) -> bool {
        if !self.in_bounds(coord) {
            tracing::warn!("set ignored: {} outside {}x{} grid", coord, self.width, self.height);
            return false;
        }
        if location.name.is_empty() {
            tracing::warn!("set ignored: unnamed location at {}", coord);
            return false;
        }
        let idx = self.index(coord);
        self.tiles[idx] = location;
        true
    }

    /// Iterate all cells with their coordinates, row by row from the top
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Location)> {
        let width = self.width;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, loc)| (Coord::new(i as i32 % width, i as i32 / width), loc))
    }
}
