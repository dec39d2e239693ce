//! Load map catalogs from authored data files
//!
//! Catalogs arrive as TOML or JSON: grid dimensions, the spawn coordinate,
//! an optional placeholder for unauthored cells, and a list of placed
//! locations. The loader validates dimensions hard and placements soft -
//! an out-of-bounds placement is skipped with a warning, matching the
//! grid's own `set` contract.

use std::path::Path;

use serde::Deserialize;

use crate::catalog::location::Location;
use crate::core::error::{MapError, Result};
use crate::core::types::Coord;
use crate::world::engine::MapService;
use crate::world::grid::Grid;

/// A location entry pinned to a grid cell
#[derive(Debug, Clone, Deserialize)]
pub struct PlacedLocation {
    pub x: i32,
    pub y: i32,
    #[serde(flatten)]
    pub location: Location,
}

/// A parsed catalog file, not yet validated against grid bounds
#[derive(Debug, Clone, Deserialize)]
pub struct MapCatalog {
    pub width: i32,
    pub height: i32,
    pub spawn: Coord,
    /// Placeholder for cells no entry covers; `Location::unknown` if absent
    #[serde(default)]
    pub default: Option<Location>,
    #[serde(default)]
    pub locations: Vec<PlacedLocation>,
}

impl MapCatalog {
    /// Parse a catalog from a TOML string
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let catalog: MapCatalog = toml::from_str(input)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog from a JSON string
    pub fn from_json_str(input: &str) -> Result<Self> {
        let catalog: MapCatalog = serde_json::from_str(input)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file, dispatching on extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            other => Err(MapError::Catalog(format!(
                "unsupported catalog extension: {other:?}"
            ))),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(MapError::Catalog(format!(
                "non-positive grid dimensions: {}x{}",
                self.width, self.height
            )));
        }
        for placed in &self.locations {
            if placed.location.name.is_empty() {
                return Err(MapError::Catalog(format!(
                    "unnamed location at ({}, {})",
                    placed.x, placed.y
                )));
            }
        }
        Ok(())
    }

    /// Build the grid described by this catalog
    pub fn build_grid(&self) -> Grid {
        let placeholder = self
            .default
            .clone()
            .unwrap_or_else(Location::unknown);
        let mut grid = Grid::new(self.width, self.height, placeholder);

        for placed in &self.locations {
            let coord = Coord::new(placed.x, placed.y);
            if !grid.set(coord, placed.location.clone()) {
                tracing::warn!(
                    "catalog entry '{}' at {} is outside the {}x{} grid, skipped",
                    placed.location.name,
                    coord,
                    self.width,
                    self.height
                );
            }
        }

        grid
    }

    /// Build a ready navigation engine positioned at the spawn coordinate
    pub fn into_service(self) -> MapService {
        let grid = self.build_grid();
        MapService::new(grid, self.spawn)
    }
}
