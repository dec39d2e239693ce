//! Wildermap - Interactive Explorer
//!
//! A stdin-driven walk across the demo overworld (or a catalog file passed
//! as the first argument): directional movement, a fog-of-war minimap, and
//! save/load against an in-process store.

use std::io::{self, Write};
use std::path::Path;

use wildermap::catalog::{EventKind, Location, LocationEvent, LocationKind, MapCatalog};
use wildermap::core::config::MapConfig;
use wildermap::core::types::{Coord, Direction};
use wildermap::persistence::{self, MemoryStore};
use wildermap::world::{Grid, MapObserver, MapService};

/// Prints location changes and event hand-offs as narrative lines
struct Narrator;

impl MapObserver for Narrator {
    fn location_changed(&mut self, _at: Coord, location: &Location) {
        println!("\n== {} ==", location.name);
        if !location.description.is_empty() {
            println!("{}", location.description);
        }
    }

    fn event_triggered(&mut self, _at: Coord, event: &LocationEvent) {
        println!("* {} ({:?})", event.name, event.kind);
        if !event.description.is_empty() {
            println!("  {}", event.description);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("wildermap=info")
        .init();

    let mut svc = match std::env::args().nth(1) {
        Some(path) => match MapCatalog::from_file(Path::new(&path)) {
            Ok(catalog) => catalog.into_service(),
            Err(e) => {
                eprintln!("failed to load catalog '{path}': {e}");
                std::process::exit(1);
            }
        },
        None => build_overworld(),
    };
    svc.subscribe(Narrator);

    let mut store = MemoryStore::new();
    let spawn = svc.position();

    println!("=== WILDERMAP EXPLORER ===");
    println!("Commands:");
    println!("  n / s / e / w   - Move");
    println!("  look            - Describe the current location");
    println!("  map             - Fog-of-war minimap");
    println!("  tp <x> <y>      - Debug teleport");
    println!("  save / load     - Persist or restore exploration state");
    println!("  quit / q        - Exit");
    println!("\nYou are at {}.", svc.current().name);

    loop {
        print!("\n> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&cmd) = parts.first() else {
            continue;
        };

        if let Ok(dir) = cmd.parse::<Direction>() {
            match svc.step(dir) {
                outcome if outcome.moved() => {}
                _ => println!("You can't go {dir} from here."),
            }
            continue;
        }

        match cmd {
            "look" | "l" => {
                let here = svc.current();
                println!("{} - {}", here.name, here.description);
                let open: Vec<String> = Direction::ALL
                    .iter()
                    .filter(|d| here.exits.allows(**d))
                    .map(|d| d.to_string())
                    .collect();
                println!("Exits: {}", if open.is_empty() { "none".into() } else { open.join(", ") });
            }
            "map" | "m" => print_minimap(&svc),
            "tp" => match (parts.get(1), parts.get(2)) {
                (Some(x), Some(y)) => match (x.parse(), y.parse()) {
                    (Ok(x), Ok(y)) => {
                        svc.teleport(Coord::new(x, y));
                    }
                    _ => println!("usage: tp <x> <y>"),
                },
                _ => println!("usage: tp <x> <y>"),
            },
            "save" => {
                persistence::save(&mut store, &svc);
                println!("Saved.");
            }
            "load" => {
                persistence::load(&store, &mut svc, spawn);
                println!("Loaded.");
            }
            "quit" | "q" => break,
            _ => println!("Unknown command: {cmd}"),
        }
    }

    println!("Farewell, wanderer.");
}

/// Render the grid with fog of war: '@' player, '?' undiscovered,
/// otherwise a glyph per tile kind
fn print_minimap(svc: &MapService) {
    let grid = svc.grid();
    for y in 0..grid.height() {
        let mut row = String::new();
        for x in 0..grid.width() {
            let coord = Coord::new(x, y);
            let glyph = if coord == svc.position() {
                '@'
            } else if !svc.discovered().contains(coord) {
                '?'
            } else {
                kind_glyph(svc.location_at(coord).kind)
            };
            row.push(glyph);
            row.push(' ');
        }
        println!("{row}");
    }
    println!(
        "{} of {} tiles discovered",
        svc.discovered().len(),
        (grid.width() * grid.height()) as usize
    );
}

fn kind_glyph(kind: LocationKind) -> char {
    match kind {
        LocationKind::Empty => '.',
        LocationKind::Path => ':',
        LocationKind::Town | LocationKind::City => 'o',
        LocationKind::Capital | LocationKind::Castle => 'O',
        LocationKind::Farm => 'f',
        LocationKind::Forest => 'T',
        LocationKind::Home => 'h',
        LocationKind::Shop => '$',
        LocationKind::Library => 'b',
        LocationKind::Mountain => '^',
        LocationKind::River | LocationKind::Lake => '~',
        LocationKind::Ruins => 'x',
    }
}

/// The built-in demo overworld: a wilderness start, landmarks around it,
/// and a few authored events
fn build_overworld() -> MapService {
    let config = MapConfig::default();
    let wilds = Location::new("Wildlands", LocationKind::Path)
        .with_description("Rolling scrub between the landmarks of the frontier.");
    let mut grid = Grid::new(config.width, config.height, wilds);

    grid.set(
        Coord::new(5, 4),
        Location::new("Deepwood", LocationKind::Forest)
            .with_description("The old forest where your journey begins."),
    );
    grid.set(
        Coord::new(4, 5),
        Location::new("Mirror Lake", LocationKind::Lake)
            .with_description("Still water that holds the night sky."),
    );
    grid.set(
        Coord::new(3, 3),
        Location::new("Castle Ruins", LocationKind::Ruins)
            .with_description("A collapsed keep with a worn stone circle.")
            .with_event(
                LocationEvent::new("The Stone Circle Stirs", 1.0, EventKind::StoryEvent)
                    .with_description("Pale light traces the old carvings once, then fades.")
                    .one_time(),
            ),
    );
    grid.set(
        Coord::new(2, 6),
        Location::new("Hidden Village", LocationKind::Town)
            .with_description("A quiet settlement folded into the hills.")
            .with_event(
                LocationEvent::new("A Wary Welcome", 0.5, EventKind::CharacterMeeting)
                    .with_description("A villager sizes you up from a doorway."),
            ),
    );
    grid.set(
        Coord::new(6, 2),
        Location::new("Mountain Pass", LocationKind::Mountain)
            .with_description("A switchback trail climbing toward the capital."),
    );
    grid.set(
        Coord::new(7, 5),
        Location::new("Wolf Den", LocationKind::Forest)
            .with_description("Gnawed bones mark the threshold. The way back west is a scramble.")
            .with_exits(wildermap::catalog::Exits::open().with(Direction::West, false))
            .with_event(
                LocationEvent::new("Ambush", 0.4, EventKind::Encounter)
                    .with_description("Low shapes break from the treeline."),
            ),
    );
    grid.set(
        Coord::new(1, 4),
        Location::new("Orchard Grove", LocationKind::Farm)
            .with_description("Wind-bent fruit trees, long untended.")
            .with_event(
                LocationEvent::new("Windfall", 0.25, EventKind::ItemFind)
                    .with_description("Something useful lies in the tall grass."),
            ),
    );

    MapService::new(grid, config.spawn)
}
