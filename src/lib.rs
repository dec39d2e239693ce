//! Wildermap - World map navigation and discovery engine for a narrative RPG
//!
//! A fixed grid of authored locations with directional exit permissions,
//! player position tracking, fog-of-war discovery, randomized per-location
//! events, and save/restore through an external key-value store contract.

pub mod catalog;
pub mod core;
pub mod persistence;
pub mod world;
