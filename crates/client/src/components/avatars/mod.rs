//! Avatar components.

mod base_avatar;

pub use base_avatar::{BaseAvatar, BaseAvatarProps};
