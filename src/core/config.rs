//! Default map configuration with documented constants

use crate::core::types::Coord;

/// Defaults applied when a catalog file omits dimensions or spawn point
///
/// These match the authored overworld: a 10x8 grid with the starting
/// forest near the center.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Grid width in tiles
    ///
    /// Must be positive; `Grid::new` treats a non-positive dimension as a
    /// programmer error.
    pub width: i32,

    /// Grid height in tiles
    pub height: i32,

    /// Player spawn coordinate
    ///
    /// Clamped into bounds by the engine at session start, so a stale spawn
    /// in a resized catalog degrades gracefully instead of failing.
    pub spawn: Coord,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 8,
            spawn: Coord::new(5, 4),
        }
    }
}
