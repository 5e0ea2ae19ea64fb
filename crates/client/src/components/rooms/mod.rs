//! Room member components.

mod entity_tile;
mod presence_label;

pub use entity_tile::{EntityTile, EntityTileProps};
pub use presence_label::{PresenceLabel, PresenceLabelProps};
