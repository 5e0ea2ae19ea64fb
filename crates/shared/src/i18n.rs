//! Minimal localization catalog.
//!
//! Keys are the English source strings. Placeholders use the `%(name)s`
//! form and are filled by [`translate_with`]. A key missing from a locale
//! falls back to the key itself.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
    Fr,
}

impl Locale {
    /// Resolve a BCP 47-ish tag such as `de`, `de-AT` or `fr_FR`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Locale::En),
            "de" => Some(Locale::De),
            "fr" => Some(Locale::Fr),
            _ => None,
        }
    }
}

static CATALOG: Lazy<HashMap<(Locale, &'static str), &'static str>> = Lazy::new(|| {
    let de = [
        ("Moderator", "Moderator"),
        ("Admin", "Administrator"),
        ("Online", "Online"),
        ("Idle", "Abwesend"),
        ("Offline", "Offline"),
        ("Unknown", "Unbekannt"),
        ("Online for %(duration)s", "Online seit %(duration)s"),
        ("Idle for %(duration)s", "Abwesend seit %(duration)s"),
        ("Offline for %(duration)s", "Offline seit %(duration)s"),
        ("Unknown for %(duration)s", "Unbekannt seit %(duration)s"),
        ("%(duration)ss", "%(duration)s s"),
        ("%(duration)sm", "%(duration)s m"),
        ("%(duration)sh", "%(duration)s h"),
        ("%(duration)sd", "%(duration)s T"),
        ("Invited", "Eingeladen"),
    ];
    let fr = [
        ("Moderator", "Modérateur"),
        ("Admin", "Administrateur"),
        ("Online", "En ligne"),
        ("Idle", "Inactif"),
        ("Offline", "Hors ligne"),
        ("Unknown", "Inconnu"),
        ("Online for %(duration)s", "En ligne depuis %(duration)s"),
        ("Idle for %(duration)s", "Inactif depuis %(duration)s"),
        ("Offline for %(duration)s", "Hors ligne depuis %(duration)s"),
        ("Unknown for %(duration)s", "Inconnu depuis %(duration)s"),
        ("%(duration)ss", "%(duration)ss"),
        ("%(duration)sm", "%(duration)smin"),
        ("%(duration)sh", "%(duration)sh"),
        ("%(duration)sd", "%(duration)sj"),
        ("Invited", "Invités"),
    ];

    let mut map = HashMap::new();
    for (key, value) in de {
        map.insert((Locale::De, key), value);
    }
    for (key, value) in fr {
        map.insert((Locale::Fr, key), value);
    }
    map
});

/// Look up `key` for `locale`.
pub fn translate(locale: Locale, key: &str) -> String {
    CATALOG
        .get(&(locale, key))
        .copied()
        .unwrap_or(key)
        .to_string()
}

/// Look up `key` and substitute each `%(name)s` placeholder.
pub fn translate_with(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    let mut text = translate(locale, key);
    for (name, value) in args {
        text = text.replace(&format!("%({name})s"), value);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_falls_through_to_key() {
        assert_eq!(translate(Locale::En, "Moderator"), "Moderator");
        assert_eq!(translate(Locale::En, "Admin"), "Admin");
    }

    #[test]
    fn german_badge_labels() {
        assert_eq!(translate(Locale::De, "Admin"), "Administrator");
        assert_eq!(translate(Locale::De, "Not in catalog"), "Not in catalog");
    }

    #[test]
    fn placeholders_are_substituted() {
        let text = translate_with(Locale::Fr, "Idle for %(duration)s", &[("duration", "5min")]);
        assert_eq!(text, "Inactif depuis 5min");
    }

    #[test]
    fn locale_tags() {
        assert_eq!(Locale::from_tag("de-AT"), Some(Locale::De));
        assert_eq!(Locale::from_tag("fr_FR"), Some(Locale::Fr));
        assert_eq!(Locale::from_tag("EN"), Some(Locale::En));
        assert_eq!(Locale::from_tag("xx"), None);
        assert_eq!(Locale::from_tag(""), None);
    }
}
