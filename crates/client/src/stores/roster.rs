//! Roster store - the members shown in the member list.

use std::cmp::Ordering;

use anyhow::Context;
use chrono::Utc;
use dioxus::prelude::*;
use roster_shared::Presence;
use serde::{Deserialize, Serialize};

/// A user in the roster, joined or invited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterMember {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub presence: Presence,
    #[serde(default)]
    pub power_level: i64,
    #[serde(default)]
    pub invited: bool,
}

impl RosterMember {
    /// Display name, falling back to the user id.
    pub fn name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.user_id)
    }
}

/// All members, in no particular order
pub static ROSTER: GlobalSignal<Vec<RosterMember>> = Signal::global(Vec::new);

/// User id of the member last clicked in the list
pub static SELECTED_MEMBER: GlobalSignal<Option<String>> = Signal::global(|| None);

/// Replace the whole roster
pub fn set_roster(members: Vec<RosterMember>) {
    *ROSTER.write() = members;
}

pub fn select_member(user_id: &str) {
    *SELECTED_MEMBER.write() = Some(user_id.to_string());
}

/// Parse a JSON array of members.
pub fn parse_roster(json: &str) -> anyhow::Result<Vec<RosterMember>> {
    serde_json::from_str(json).context("roster JSON is not a list of members")
}

/// Members bundled with the app for the demo list. Presence without a
/// receive time is stamped as received now.
pub fn demo_roster() -> anyhow::Result<Vec<RosterMember>> {
    let mut members = parse_roster(include_str!("../../assets/roster.json"))?;
    let now = Utc::now().timestamp_millis();
    for member in &mut members {
        if member.presence.last_ts_ms == 0 {
            member.presence.last_ts_ms = now;
        }
    }
    Ok(members)
}

/// Highest power level first, then by name (case-insensitive), then user id.
fn display_order(a: &RosterMember, b: &RosterMember) -> Ordering {
    b.power_level
        .cmp(&a.power_level)
        .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
        .then_with(|| a.user_id.cmp(&b.user_id))
}

/// Split into (joined, invited), each sorted for display.
pub fn partition_for_display(members: Vec<RosterMember>) -> (Vec<RosterMember>, Vec<RosterMember>) {
    let (mut invited, mut joined): (Vec<_>, Vec<_>) =
        members.into_iter().partition(|m| m.invited);
    joined.sort_by(display_order);
    invited.sort_by(display_order);
    (joined, invited)
}
