//! Save/restore of exploration progress through a key-value store contract
//!
//! The backing store is external; only its get/set string-and-integer
//! contract is consumed here. The payload is deliberately flat: the player
//! coordinate as two integer entries and the discovered set as one
//! comma-separated list of integer pairs, so any settings-style store can
//! carry it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::types::Coord;
use crate::world::engine::MapService;

pub const KEY_PLAYER_X: &str = "map.player_x";
pub const KEY_PLAYER_Y: &str = "map.player_y";
pub const KEY_DISCOVERED: &str = "map.discovered";

/// The consumed storage contract (settings/prefs style)
pub trait KvStore {
    fn get_int(&self, key: &str) -> Option<i64>;
    fn set_int(&mut self, key: &str, value: i64);
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and the demo loop
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    ints: HashMap<String, i64>,
    strings: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get_int(&self, key: &str) -> Option<i64> {
        self.ints.get(key).copied()
    }

    fn set_int(&mut self, key: &str, value: i64) {
        self.ints.insert(key.to_string(), value);
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.strings.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.strings.insert(key.to_string(), value.to_string());
    }
}

/// A point-in-time capture of exploration progress
///
/// Discovered coordinates are kept in sorted order so equal sessions encode
/// to equal payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub position: Coord,
    pub discovered: Vec<Coord>,
}

impl Snapshot {
    pub fn capture(svc: &MapService) -> Self {
        Self {
            position: svc.position(),
            discovered: svc.discovered().sorted(),
        }
    }

    /// Encode the discovered list as `x,y,x,y,...`
    fn encode_discovered(&self) -> String {
        let mut out = String::new();
        for coord in &self.discovered {
            if !out.is_empty() {
                out.push(',');
            }
            out.push_str(&format!("{},{}", coord.x, coord.y));
        }
        out
    }

    /// Decode a flat pair list, silently dropping a malformed tail
    ///
    /// An odd element count or a non-integer token ends the parse at the
    /// last complete, well-formed pair; everything before it is kept.
    fn decode_discovered(raw: &str) -> Vec<Coord> {
        let mut coords = Vec::new();
        if raw.is_empty() {
            return coords;
        }
        let tokens: Vec<&str> = raw.split(',').collect();
        for pair in tokens.chunks(2) {
            let parsed = match pair {
                [x, y] => x
                    .trim()
                    .parse::<i32>()
                    .ok()
                    .zip(y.trim().parse::<i32>().ok()),
                _ => None,
            };
            match parsed {
                Some((x, y)) => coords.push(Coord::new(x, y)),
                None => {
                    tracing::warn!("malformed discovered-list tail dropped: {pair:?}");
                    break;
                }
            }
        }
        coords
    }
}

/// Write the current exploration state into the store
pub fn save(store: &mut dyn KvStore, svc: &MapService) {
    let snapshot = Snapshot::capture(svc);
    store.set_int(KEY_PLAYER_X, snapshot.position.x as i64);
    store.set_int(KEY_PLAYER_Y, snapshot.position.y as i64);
    store.set_string(KEY_DISCOVERED, &snapshot.encode_discovered());
    tracing::debug!(
        "saved map state: player at {}, {} discovered",
        snapshot.position,
        snapshot.discovered.len()
    );
}

/// Restore exploration state from the store
///
/// Missing entries fall back to `default_spawn`. The restore goes through
/// the engine, so the position is clamped into bounds and re-added to the
/// discovered set, keeping the discovery invariant intact immediately after
/// load.
pub fn load(store: &dyn KvStore, svc: &mut MapService, default_spawn: Coord) {
    let x = store
        .get_int(KEY_PLAYER_X)
        .map(|v| v as i32)
        .unwrap_or(default_spawn.x);
    let y = store
        .get_int(KEY_PLAYER_Y)
        .map(|v| v as i32)
        .unwrap_or(default_spawn.y);

    let discovered = store
        .get_string(KEY_DISCOVERED)
        .map(|raw| Snapshot::decode_discovered(&raw))
        .unwrap_or_default();

    svc.restore(Coord::new(x, y), discovered);
    tracing::debug!(
        "loaded map state: player at {}, {} discovered",
        svc.position(),
        svc.discovered().len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_round_trip() {
        let snapshot = Snapshot {
            position: Coord::new(1, 2),
            discovered: vec![Coord::new(0, 0), Coord::new(1, 2), Coord::new(2, 1)],
        };
        let raw = snapshot.encode_discovered();
        assert_eq!(raw, "0,0,1,2,2,1");
        assert_eq!(Snapshot::decode_discovered(&raw), snapshot.discovered);
    }

    #[test]
    fn test_decode_empty() {
        assert!(Snapshot::decode_discovered("").is_empty());
    }

    #[test]
    fn test_decode_odd_count_drops_tail() {
        assert_eq!(
            Snapshot::decode_discovered("3,4,7"),
            vec![Coord::new(3, 4)]
        );
    }

    #[test]
    fn test_decode_non_integer_drops_tail() {
        assert_eq!(
            Snapshot::decode_discovered("1,1,oops,2,5,5"),
            vec![Coord::new(1, 1)]
        );
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_int("missing"), None);
        store.set_int("a", 7);
        store.set_string("b", "x,y");
        assert_eq!(store.get_int("a"), Some(7));
        assert_eq!(store.get_string("b").as_deref(), Some("x,y"));
    }
}
