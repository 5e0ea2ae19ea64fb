//! Render decisions for an entity tile.
//!
//! [`TileLayout::compute`] turns tile inputs plus the hover state into the
//! class string and the set of optional pieces to draw. The client only
//! maps the layout onto elements.

use chrono::Duration;

use crate::power::PowerBadge;
use crate::presence::{active_ago, presence_class, PresenceState};

pub const BASE_CLASS: &str = "mx_EntityTile";
pub const HOVER_CLASS: &str = "mx_EntityTile_hover";

/// Pointer-over state of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    hover: bool,
}

impl HoverState {
    pub fn is_hovered(self) -> bool {
        self.hover
    }

    /// Pointer entered. Returns whether the state changed.
    pub fn enter(&mut self) -> bool {
        let changed = !self.hover;
        self.hover = true;
        changed
    }

    /// Pointer left. Returns whether the state changed.
    pub fn leave(&mut self) -> bool {
        let changed = self.hover;
        self.hover = false;
        changed
    }

    /// Whether the expanded detail branch is drawn. Suppression does not stop
    /// the state from flipping, only the branch.
    pub fn shows_details(self, suppress_on_hover: bool) -> bool {
        self.hover && !suppress_on_hover
    }
}

/// Caller-supplied re-render predicate, called with previous and next props.
pub type UpdatePredicate<P> = fn(&P, &P) -> bool;

/// Whether a tile must re-render. A hover flip always re-renders; otherwise
/// the predicate decides, and no predicate means always.
pub fn should_update<P>(
    prev_hover: HoverState,
    next_hover: HoverState,
    predicate: Option<UpdatePredicate<P>>,
    prev: &P,
    next: &P,
) -> bool {
    if prev_hover != next_hover {
        return true;
    }
    predicate.map_or(true, |p| p(prev, next))
}

/// Compose `mx_EntityTile <presence>[ <extra>][ mx_EntityTile_hover]`.
pub fn tile_class(presence: &str, extra: Option<&str>, hovered: bool) -> String {
    let mut class = format!("{BASE_CLASS} {presence}");
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    if hovered {
        class.push(' ');
        class.push_str(HOVER_CLASS);
    }
    class
}

/// The per-member data that drives layout decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileInput<'a> {
    pub class_name: Option<&'a str>,
    pub presence_state: Option<PresenceState>,
    pub last_active_ago: Option<Duration>,
    pub last_ts_ms: i64,
    pub show_invite_button: bool,
    pub power_level: i64,
    pub suppress_on_hover: bool,
}

impl Default for TileInput<'_> {
    fn default() -> Self {
        Self {
            class_name: None,
            presence_state: Some(PresenceState::Offline),
            last_active_ago: None,
            last_ts_ms: 0,
            show_invite_button: false,
            power_level: 0,
            suppress_on_hover: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSlot {
    /// Just the display name.
    Plain,
    /// Chevron, name and presence label. `active_ago` is `None` when unknown.
    Details { active_ago: Option<Duration> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayout {
    pub class: String,
    pub name_slot: NameSlot,
    pub badge: Option<PowerBadge>,
    pub show_invite: bool,
}

impl TileLayout {
    pub fn compute(input: &TileInput<'_>, hover: HoverState, now_ms: i64) -> Self {
        let presence = presence_class(input.presence_state, input.last_active_ago);
        let details = hover.shows_details(input.suppress_on_hover);

        let name_slot = if details {
            NameSlot::Details {
                active_ago: active_ago(now_ms, input.last_ts_ms, input.last_active_ago),
            }
        } else {
            NameSlot::Plain
        };

        Self {
            class: tile_class(presence.css_class(), input.class_name, details),
            name_slot,
            badge: PowerBadge::for_level(input.power_level),
            show_invite: input.show_invite_button,
        }
    }
}
