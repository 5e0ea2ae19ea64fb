//! Presence state, the tile's presence class, and presence descriptions.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ParsePresenceError;
use crate::i18n::{translate, translate_with, Locale};

/// Connectivity of a user as reported by the homeserver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceState {
    Offline,
    Online,
    Unavailable,
}

impl PresenceState {
    pub fn as_str(self) -> &'static str {
        match self {
            PresenceState::Offline => "offline",
            PresenceState::Online => "online",
            PresenceState::Unavailable => "unavailable",
        }
    }

    /// Parse a wire value, treating empty or unrecognized strings as unknown.
    pub fn parse_lenient(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl FromStr for PresenceState {
    type Err = ParsePresenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "offline" => Ok(PresenceState::Offline),
            "online" => Ok(PresenceState::Online),
            "unavailable" => Ok(PresenceState::Unavailable),
            other => Err(ParsePresenceError(other.to_string())),
        }
    }
}

impl fmt::Display for PresenceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A presence snapshot as carried by roster data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presence {
    #[serde(default, deserialize_with = "lenient_state")]
    pub state: Option<PresenceState>,
    #[serde(default)]
    pub last_active_ago_ms: Option<i64>,
    #[serde(default)]
    pub last_ts_ms: i64,
    #[serde(default)]
    pub currently_active: bool,
}

impl Presence {
    pub fn new(state: PresenceState) -> Self {
        Self {
            state: Some(state),
            ..Self::default()
        }
    }

    /// Last-active-ago as a duration, `None` when absent or zero.
    pub fn last_active_ago(&self) -> Option<Duration> {
        nonzero(self.last_active_ago_ms.map(Duration::milliseconds))
    }
}

fn lenient_state<'de, D>(deserializer: D) -> Result<Option<PresenceState>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(PresenceState::parse_lenient))
}

fn nonzero(ago: Option<Duration>) -> Option<Duration> {
    ago.filter(|d| *d != Duration::zero())
}

/// The presence modifier class of an entity tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresenceClass {
    Online,
    Unavailable,
    OfflineBeenActive,
    OfflineNeverActive,
}

impl PresenceClass {
    pub fn css_class(self) -> &'static str {
        match self {
            PresenceClass::Online => "mx_EntityTile_online",
            PresenceClass::Unavailable => "mx_EntityTile_unavailable",
            PresenceClass::OfflineBeenActive => "mx_EntityTile_offline_beenactive",
            PresenceClass::OfflineNeverActive => "mx_EntityTile_offline_neveractive",
        }
    }
}

impl fmt::Display for PresenceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Pick the presence class for a member.
///
/// Offline is split by whether a nonzero last-active-ago is known. An
/// unknown state renders like an offline member that was never active.
pub fn presence_class(
    state: Option<PresenceState>,
    last_active_ago: Option<Duration>,
) -> PresenceClass {
    match state {
        Some(PresenceState::Offline) => {
            if nonzero(last_active_ago).is_some() {
                PresenceClass::OfflineBeenActive
            } else {
                PresenceClass::OfflineNeverActive
            }
        }
        Some(PresenceState::Online) => PresenceClass::Online,
        Some(PresenceState::Unavailable) => PresenceClass::Unavailable,
        None => PresenceClass::OfflineNeverActive,
    }
}

/// Time since the member was last active, as of `now_ms`.
///
/// `last_ts_ms` is when the presence event was received and
/// `last_active_ago` was relative to that moment. Returns `None` (unknown)
/// when no nonzero last-active-ago is available.
pub fn active_ago(now_ms: i64, last_ts_ms: i64, last_active_ago: Option<Duration>) -> Option<Duration> {
    let ago = nonzero(last_active_ago)?;
    let last_active_at = last_ts_ms - ago.num_milliseconds();
    Some(Duration::milliseconds(now_ms - last_active_at))
}

/// Compact duration such as `42s`, `5m`, `3h` or `2d`.
pub fn format_duration(duration: Duration, locale: Locale) -> String {
    let secs = duration.num_seconds();
    let (key, value) = if secs < 60 {
        ("%(duration)ss", secs.max(0))
    } else if secs < 60 * 60 {
        ("%(duration)sm", secs / 60 % 60)
    } else if secs < 24 * 60 * 60 {
        ("%(duration)sh", secs / (60 * 60) % 24)
    } else {
        ("%(duration)sd", secs / (60 * 60 * 24))
    };
    translate_with(locale, key, &[("duration", &value.to_string())])
}

/// Human-readable presence, e.g. "Idle for 5m" or "Online".
pub fn describe_presence(
    state: Option<PresenceState>,
    active_ago: Option<Duration>,
    currently_active: bool,
    locale: Locale,
) -> String {
    match active_ago {
        Some(ago) if !currently_active && ago > Duration::zero() => {
            let duration = format_duration(ago, locale);
            let key = match state {
                Some(PresenceState::Online) => "Online for %(duration)s",
                Some(PresenceState::Unavailable) => "Idle for %(duration)s",
                Some(PresenceState::Offline) => "Offline for %(duration)s",
                None => "Unknown for %(duration)s",
            };
            translate_with(locale, key, &[("duration", &duration)])
        }
        _ => {
            let key = match state {
                Some(PresenceState::Online) => "Online",
                Some(PresenceState::Unavailable) => "Idle",
                Some(PresenceState::Offline) => "Offline",
                None => "Unknown",
            };
            translate(locale, key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_split_by_last_active() {
        assert_eq!(
            presence_class(Some(PresenceState::Offline), Some(Duration::seconds(30))),
            PresenceClass::OfflineBeenActive
        );
        assert_eq!(
            presence_class(Some(PresenceState::Offline), Some(Duration::zero())),
            PresenceClass::OfflineNeverActive
        );
        assert_eq!(
            presence_class(Some(PresenceState::Offline), None),
            PresenceClass::OfflineNeverActive
        );
    }

    #[test]
    fn known_states_map_directly() {
        assert_eq!(
            presence_class(Some(PresenceState::Online), None).css_class(),
            "mx_EntityTile_online"
        );
        assert_eq!(
            presence_class(Some(PresenceState::Unavailable), Some(Duration::seconds(5))).css_class(),
            "mx_EntityTile_unavailable"
        );
    }

    #[test]
    fn unknown_state_is_never_active() {
        assert_eq!(
            presence_class(PresenceState::parse_lenient(""), None),
            PresenceClass::OfflineNeverActive
        );
        assert_eq!(
            presence_class(PresenceState::parse_lenient("busy"), Some(Duration::seconds(9))),
            PresenceClass::OfflineNeverActive
        );
    }

    #[test]
    fn strict_parse_reports_value() {
        let err = "away".parse::<PresenceState>().unwrap_err();
        assert_eq!(err, ParsePresenceError("away".to_string()));
        assert_eq!(err.to_string(), "unknown presence state: \"away\"");
    }

    #[test]
    fn active_ago_from_event_time() {
        // Event received at t=10_000 said "active 4s ago"; now is t=16_000.
        let ago = active_ago(16_000, 10_000, Some(Duration::milliseconds(4_000)));
        assert_eq!(ago, Some(Duration::milliseconds(10_000)));
    }

    #[test]
    fn active_ago_unknown_without_last_active() {
        assert_eq!(active_ago(16_000, 10_000, None), None);
        assert_eq!(active_ago(16_000, 10_000, Some(Duration::zero())), None);
    }

    #[test]
    fn durations_pick_the_largest_unit() {
        let en = Locale::En;
        assert_eq!(format_duration(Duration::seconds(-3), en), "0s");
        assert_eq!(format_duration(Duration::seconds(59), en), "59s");
        assert_eq!(format_duration(Duration::seconds(125), en), "2m");
        assert_eq!(format_duration(Duration::seconds(3 * 3600 + 59), en), "3h");
        assert_eq!(format_duration(Duration::days(9), en), "9d");
    }

    #[test]
    fn describe_with_duration() {
        let ago = Some(Duration::minutes(5));
        assert_eq!(
            describe_presence(Some(PresenceState::Unavailable), ago, false, Locale::En),
            "Idle for 5m"
        );
        assert_eq!(
            describe_presence(None, ago, false, Locale::En),
            "Unknown for 5m"
        );
    }

    #[test]
    fn describe_without_duration() {
        let ago = Some(Duration::minutes(5));
        assert_eq!(
            describe_presence(Some(PresenceState::Online), ago, true, Locale::En),
            "Online"
        );
        assert_eq!(
            describe_presence(Some(PresenceState::Offline), None, false, Locale::En),
            "Offline"
        );
        assert_eq!(
            describe_presence(Some(PresenceState::Offline), None, false, Locale::De),
            "Offline"
        );
    }

    #[test]
    fn presence_json_is_lenient_about_state() {
        let p: Presence = serde_json::from_str(r#"{"state":"busy","lastActiveAgoMs":0}"#).unwrap();
        assert_eq!(p.state, None);
        assert_eq!(p.last_active_ago(), None);

        let p: Presence =
            serde_json::from_str(r#"{"state":"offline","lastActiveAgoMs":1500,"lastTsMs":9}"#).unwrap();
        assert_eq!(p.state, Some(PresenceState::Offline));
        assert_eq!(p.last_active_ago(), Some(Duration::milliseconds(1500)));
        assert_eq!(p.last_ts_ms, 9);
    }
}
