//! Shared types and pure logic for the roster client.
//!
//! Nothing in here touches the UI framework: the client crate feeds props
//! through these functions and renders whatever they decide.

pub mod avatar;
pub mod config;
pub mod emoji;
pub mod error;
pub mod i18n;
pub mod power;
pub mod presence;
pub mod tile;

pub use avatar::*;
pub use config::*;
pub use error::*;
pub use i18n::{translate, Locale};
pub use power::*;
pub use presence::*;
pub use tile::*;
