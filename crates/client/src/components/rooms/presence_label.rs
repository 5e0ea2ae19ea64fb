//! Presence label - "Online", "Idle for 5m" and friends.

use chrono::Duration;
use dioxus::prelude::*;
use roster_shared::{describe_presence, PresenceState, TileConfig};

#[derive(Props, Clone, PartialEq)]
pub struct PresenceLabelProps {
    /// Time since last activity; `None` when unknown.
    #[props(!optional, default)]
    pub active_ago: Option<Duration>,
    #[props(default)]
    pub currently_active: bool,
    #[props(!optional, default)]
    pub presence_state: Option<PresenceState>,
}

#[component]
pub fn PresenceLabel(props: PresenceLabelProps) -> Element {
    let locale = try_use_context::<TileConfig>()
        .map(|config| config.locale)
        .unwrap_or_default();
    let label = describe_presence(
        props.presence_state,
        props.active_ago,
        props.currently_active,
        locale,
    );

    rsx! {
        div { class: "mx_PresenceLabel", "{label}" }
    }
}
