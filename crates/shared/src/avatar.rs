//! Fallback avatar helpers.

/// Sigils that prefix Matrix identifiers and aliases.
const SIGILS: [char; 4] = ['@', '#', '!', '+'];

/// The letter shown when a member has no avatar image.
///
/// One leading sigil is skipped so `@alice:example.org` shows `A`.
/// Empty names show `?`.
pub fn initial_letter(name: &str) -> String {
    let trimmed = name.trim();
    let rest = trimmed
        .strip_prefix(|c: char| SIGILS.contains(&c))
        .unwrap_or(trimmed);
    match rest.chars().next() {
        Some(c) => c.to_uppercase().to_string(),
        None => "?".to_string(),
    }
}
