//! Roster client - Dioxus components for member lists.
//!
//! The centerpiece is [`components::rooms::EntityTile`], a single roster row.
//! Decisions about what a tile shows live in `roster_shared`; this crate maps
//! them onto elements.

pub mod logging;

pub mod components;
pub mod stores;
pub mod views;

pub use components::rooms::{EntityTile, EntityTileProps};
