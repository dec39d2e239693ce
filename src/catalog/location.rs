//! Location - authored content for one map cell
//!
//! A location carries narrative text, a descriptive kind used for rendering,
//! per-direction exit permissions, and the events that can fire on entry.

use serde::{Deserialize, Serialize};

use crate::catalog::event::LocationEvent;
use crate::core::types::Direction;

/// Descriptive tile kinds for rendering and filtering
///
/// Carries no navigation semantics; movement is governed entirely by exit
/// flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    Empty,
    Path,
    Town,
    City,
    Capital,
    Farm,
    Forest,
    Home,
    Shop,
    Library,
    Castle,
    Mountain,
    River,
    Lake,
    Ruins,
}

impl Default for LocationKind {
    fn default() -> Self {
        Self::Empty
    }
}

/// Per-direction exit permissions
///
/// A flag grants permission to *leave the occupied tile* in that direction.
/// The destination tile's flags are never consulted, so one-way corridors
/// are a legal topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Exits {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl Exits {
    /// All four exits open
    pub fn open() -> Self {
        Self {
            north: true,
            south: true,
            east: true,
            west: true,
        }
    }

    /// All four exits closed (same as `Default`)
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn allows(&self, dir: Direction) -> bool {
        match dir {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    pub fn with(mut self, dir: Direction, open: bool) -> Self {
        match dir {
            Direction::North => self.north = open,
            Direction::South => self.south = open,
            Direction::East => self.east = open,
            Direction::West => self.west = open,
        }
        self
    }
}

/// Authored content for a single map cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub kind: LocationKind,
    /// Catalog files default to all-open exits for authoring convenience
    #[serde(default = "Exits::open")]
    pub exits: Exits,
    #[serde(default)]
    pub events: Vec<LocationEvent>,
}

impl Location {
    pub fn new(name: &str, kind: LocationKind) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            kind,
            exits: Exits::open(),
            events: Vec::new(),
        }
    }

    /// The placeholder filling unauthored cells: unreachable narrative
    /// dead space with every exit sealed
    pub fn unknown() -> Self {
        Self {
            name: "Unknown Area".to_string(),
            description: "An unexplored region of the wilds.".to_string(),
            kind: LocationKind::Empty,
            exits: Exits::closed(),
            events: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_exits(mut self, exits: Exits) -> Self {
        self.exits = exits;
        self
    }

    pub fn with_event(mut self, event: LocationEvent) -> Self {
        self.events.push(event);
        self
    }
}
