//! Integration tests for persistence of exploration progress

use wildermap::catalog::{Location, LocationKind};
use wildermap::core::types::{Coord, Direction};
use wildermap::persistence::{
    self, KvStore, MemoryStore, Snapshot, KEY_DISCOVERED, KEY_PLAYER_X, KEY_PLAYER_Y,
};
use wildermap::world::{Grid, MapService};

fn frontier() -> Grid {
    let mut grid = Grid::new(5, 5, Location::new("Scrub", LocationKind::Path));
    grid.set(Coord::new(2, 2), Location::new("Waystation", LocationKind::Town));
    grid
}

#[test]
fn test_save_load_round_trip() {
    let mut svc = MapService::new(frontier(), Coord::new(2, 2));
    for dir in [Direction::North, Direction::East, Direction::South, Direction::South] {
        assert!(svc.step(dir).moved());
    }
    let saved = Snapshot::capture(&svc);

    let mut store = MemoryStore::new();
    persistence::save(&mut store, &svc);

    // Fresh session over the same catalog
    let mut restored = MapService::new(frontier(), Coord::new(0, 0));
    persistence::load(&store, &mut restored, Coord::new(2, 2));

    let loaded = Snapshot::capture(&restored);
    assert_eq!(loaded.position, saved.position);
    // Order-independent set equality via the sorted snapshot form, plus the
    // start tile of the throwaway session
    let mut expected = saved.discovered.clone();
    expected.push(Coord::new(0, 0));
    expected.sort();
    expected.dedup();
    assert_eq!(loaded.discovered, expected);
}

#[test]
fn test_missing_store_falls_back_to_default_spawn() {
    let store = MemoryStore::new();
    let mut svc = MapService::new(frontier(), Coord::new(0, 0));
    persistence::load(&store, &mut svc, Coord::new(2, 2));

    assert_eq!(svc.position(), Coord::new(2, 2));
    assert!(svc.discovered().contains(Coord::new(2, 2)));
}

#[test]
fn test_partial_store_mixes_saved_and_default() {
    let mut store = MemoryStore::new();
    store.set_int(KEY_PLAYER_X, 4);

    let mut svc = MapService::new(frontier(), Coord::new(0, 0));
    persistence::load(&store, &mut svc, Coord::new(2, 1));

    assert_eq!(svc.position(), Coord::new(4, 1));
}

#[test]
fn test_malformed_discovered_list_tolerated() {
    let mut store = MemoryStore::new();
    store.set_int(KEY_PLAYER_X, 3);
    store.set_int(KEY_PLAYER_Y, 3);
    store.set_string(KEY_DISCOVERED, "1,1,2,garbled,4,4");

    let mut svc = MapService::new(frontier(), Coord::new(0, 0));
    persistence::load(&store, &mut svc, Coord::new(2, 2));

    // Well-formed prefix kept, tail dropped, position re-added
    assert!(svc.discovered().contains(Coord::new(1, 1)));
    assert!(!svc.discovered().contains(Coord::new(4, 4)));
    assert!(svc.discovered().contains(Coord::new(3, 3)));
    assert_eq!(svc.position(), Coord::new(3, 3));
}

#[test]
fn test_out_of_bounds_saved_position_clamped() {
    let mut store = MemoryStore::new();
    store.set_int(KEY_PLAYER_X, 40);
    store.set_int(KEY_PLAYER_Y, -9);

    let mut svc = MapService::new(frontier(), Coord::new(0, 0));
    persistence::load(&store, &mut svc, Coord::new(2, 2));

    assert_eq!(svc.position(), Coord::new(4, 0));
    assert!(svc.discovered().contains(Coord::new(4, 0)));
}

#[test]
fn test_save_is_deterministic() {
    let mut svc = MapService::new(frontier(), Coord::new(2, 2));
    svc.step(Direction::West);
    svc.step(Direction::North);

    let mut a = MemoryStore::new();
    let mut b = MemoryStore::new();
    persistence::save(&mut a, &svc);
    persistence::save(&mut b, &svc);

    assert_eq!(a.get_string(KEY_DISCOVERED), b.get_string(KEY_DISCOVERED));
}
