//! Reusable components.

pub mod avatars;
pub mod elements;
pub mod rooms;
