//! Power-level badges.

use crate::config::{ImageAsset, TileConfig};

/// The lowest level rendered with a moderator badge.
pub const MODERATOR_LEVEL: i64 = 50;
/// The lowest level rendered with an admin badge.
pub const ADMIN_LEVEL: i64 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerBadge {
    Moderator,
    Admin,
}

impl PowerBadge {
    /// Badge for a power level. Anything below the moderator threshold,
    /// negative levels included, gets no badge.
    pub fn for_level(level: i64) -> Option<Self> {
        if level >= ADMIN_LEVEL {
            Some(PowerBadge::Admin)
        } else if level >= MODERATOR_LEVEL {
            Some(PowerBadge::Moderator)
        } else {
            None
        }
    }

    /// Untranslated label, used as the catalog key for the alt text.
    pub fn label_key(self) -> &'static str {
        match self {
            PowerBadge::Moderator => "Moderator",
            PowerBadge::Admin => "Admin",
        }
    }

    pub fn asset(self, config: &TileConfig) -> &ImageAsset {
        match self {
            PowerBadge::Moderator => &config.moderator_badge,
            PowerBadge::Admin => &config.admin_badge,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_fifty_has_no_badge() {
        for level in [-100, -1, 0, 1, 49] {
            assert_eq!(PowerBadge::for_level(level), None, "level {level}");
        }
    }

    #[test]
    fn moderator_range() {
        for level in [50, 51, 75, 98] {
            assert_eq!(PowerBadge::for_level(level), Some(PowerBadge::Moderator), "level {level}");
        }
    }

    #[test]
    fn admin_from_ninety_nine() {
        for level in [99, 100, 9000] {
            assert_eq!(PowerBadge::for_level(level), Some(PowerBadge::Admin), "level {level}");
        }
    }

    #[test]
    fn badge_assets_come_from_config() {
        let config = TileConfig::default();
        assert_eq!(PowerBadge::Moderator.asset(&config).path, "img/mod.svg");
        assert_eq!(PowerBadge::Admin.asset(&config).path, "img/admin.svg");
        assert_eq!(PowerBadge::Admin.label_key(), "Admin");
    }
}
