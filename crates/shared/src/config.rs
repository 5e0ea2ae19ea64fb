//! Tile configuration: asset references, sizes and locale.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::i18n::Locale;

/// A fixed-size image referenced by the tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub path: String,
    pub width: u32,
    pub height: u32,
}

impl ImageAsset {
    fn new(path: &str, width: u32, height: u32) -> Self {
        Self {
            path: path.to_string(),
            width,
            height,
        }
    }

    /// The asset path resolved against `base`. An empty base leaves the
    /// path relative to the document.
    pub fn url(&self, base: &str) -> String {
        if base.is_empty() {
            return self.path.clone();
        }
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}

/// Everything about a tile that is not per-member data.
///
/// Defaults:
/// - `asset_base`: empty (paths are document-relative)
/// - `chevron`: `img/member_chevron.png`, 8x12
/// - `invite`: `img/plus.svg`, 16x16
/// - `moderator_badge`: `img/mod.svg`, 16x17
/// - `admin_badge`: `img/admin.svg`, 16x17
/// - `avatar_size`: 36
/// - `locale`: English
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TileConfig {
    pub asset_base: String,
    pub chevron: ImageAsset,
    pub invite: ImageAsset,
    pub moderator_badge: ImageAsset,
    pub admin_badge: ImageAsset,
    pub avatar_size: u32,
    pub locale: Locale,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            asset_base: String::new(),
            chevron: ImageAsset::new("img/member_chevron.png", 8, 12),
            invite: ImageAsset::new("img/plus.svg", 16, 16),
            moderator_badge: ImageAsset::new("img/mod.svg", 16, 17),
            admin_badge: ImageAsset::new("img/admin.svg", 16, 17),
            avatar_size: 36,
            locale: Locale::En,
        }
    }
}

impl TileConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Build a config from environment variables.
    ///
    /// Environment variables:
    /// - `ROSTER_TILE_CONFIG`: path to a JSON config file (default: none)
    /// - `ROSTER_ASSET_BASE`: overrides `asset_base`
    /// - `ROSTER_LOCALE`: locale tag such as `de` or `fr-FR`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`TileConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup("ROSTER_TILE_CONFIG") {
            Some(path) if !path.is_empty() => Self::load(&path)?,
            _ => Self::default(),
        };

        if let Some(base) = lookup("ROSTER_ASSET_BASE") {
            config.asset_base = base;
        }

        if let Some(tag) = lookup("ROSTER_LOCALE") {
            config.locale = Locale::from_tag(&tag).ok_or(ConfigError::InvalidValue {
                key: "ROSTER_LOCALE",
                value: tag,
            })?;
        }

        Ok(config)
    }

    pub fn asset_url(&self, asset: &ImageAsset) -> String {
        asset.url(&self.asset_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_assets() {
        let config = TileConfig::default();
        assert_eq!(config.chevron, ImageAsset::new("img/member_chevron.png", 8, 12));
        assert_eq!(config.invite.width, 16);
        assert_eq!(config.invite.height, 16);
        assert_eq!(config.avatar_size, 36);
        assert_eq!(config.asset_url(&config.invite), "img/plus.svg");
    }

    #[test]
    fn json_overrides_merge_with_defaults() {
        let config = TileConfig::from_json(r#"{"assetBase":"https://cdn.example/","locale":"fr"}"#)
            .unwrap();
        assert_eq!(config.locale, Locale::Fr);
        assert_eq!(
            config.asset_url(&config.admin_badge),
            "https://cdn.example/img/admin.svg"
        );
        assert_eq!(config.moderator_badge.height, 17);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            TileConfig::from_json("{not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn env_lookup() {
        let config = TileConfig::from_lookup(|key| match key {
            "ROSTER_ASSET_BASE" => Some("/static".to_string()),
            "ROSTER_LOCALE" => Some("de-DE".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.asset_url(&config.chevron), "/static/img/member_chevron.png");
        assert_eq!(config.locale, Locale::De);
    }

    #[test]
    fn env_rejects_unknown_locale() {
        let err = TileConfig::from_lookup(|key| {
            (key == "ROSTER_LOCALE").then(|| "klingon".to_string())
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "ROSTER_LOCALE", .. }
        ));
    }

    #[test]
    fn missing_config_file() {
        let err = TileConfig::from_lookup(|key| {
            (key == "ROSTER_TILE_CONFIG").then(|| "/nonexistent/roster.json".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
