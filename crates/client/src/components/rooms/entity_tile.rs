//! Entity tile - one row of a member list.
//!
//! ```text
//! +-----------------------------------------------+
//! | [A]*  alice                              [+]  |   idle
//! +-----------------------------------------------+
//! | [A]*  > alice                            [+]  |   hovered
//! |         Idle for 5m                           |
//! +-----------------------------------------------+
//! ```
//!
//! `*` is the moderator/admin badge and `[+]` the invite affordance.

use chrono::{Duration, Utc};
use dioxus::prelude::*;
use roster_shared::{
    should_update, translate, HoverState, NameSlot, PresenceState, TileConfig, TileInput,
    TileLayout, UpdatePredicate,
};

use crate::components::avatars::BaseAvatar;
use crate::components::elements::{AccessibleButton, EmojiText, TextElement};
use crate::components::rooms::PresenceLabel;

#[derive(Props, Clone)]
pub struct EntityTileProps {
    /// Display name.
    #[props(into)]
    pub name: String,
    /// Tooltip for the whole row.
    #[props(optional)]
    pub title: Option<String>,
    /// Pre-rendered avatar. Defaults to a [`BaseAvatar`] of `name` and `avatar_url`.
    #[props(optional)]
    pub avatar: Option<Element>,
    /// Image for the default avatar when `avatar` is absent.
    #[props(!optional, default)]
    pub avatar_url: Option<String>,
    /// Extra class appended after the presence class.
    #[props(optional)]
    pub class_name: Option<String>,
    /// `None` means unknown. Defaults to offline.
    #[props(!optional, default = Some(PresenceState::Offline))]
    pub presence_state: Option<PresenceState>,
    /// How long before `presence_last_ts` the member was last active.
    #[props(!optional, default)]
    pub presence_last_active_ago: Option<Duration>,
    /// When the presence was received, in epoch milliseconds.
    #[props(default)]
    pub presence_last_ts: i64,
    #[props(default)]
    pub presence_currently_active: bool,
    #[props(default)]
    pub show_invite_button: bool,
    #[props(default)]
    pub power_level: i64,
    /// Keep the hover detail view from expanding.
    #[props(default)]
    pub suppress_on_hover: bool,
    #[props(optional)]
    pub on_click: Option<EventHandler<()>>,
    /// Decides whether new props re-render the tile. Absent means always.
    /// Hover changes re-render regardless.
    #[props(optional)]
    pub should_update: Option<UpdatePredicate<EntityTileProps>>,
}

impl EntityTileProps {
    fn input(&self) -> TileInput<'_> {
        TileInput {
            class_name: self.class_name.as_deref(),
            presence_state: self.presence_state,
            last_active_ago: self.presence_last_active_ago,
            last_ts_ms: self.presence_last_ts,
            show_invite_button: self.show_invite_button,
            power_level: self.power_level,
            suppress_on_hover: self.suppress_on_hover,
        }
    }
}

/// Dioxus memoizes components on props equality, so "equal" here means the
/// current props' predicate declined the update to `other`. Hover lives in a signal and
/// re-renders on its own.
impl PartialEq for EntityTileProps {
    fn eq(&self, other: &Self) -> bool {
        let hover = HoverState::default();
        !should_update(hover, hover, self.should_update, self, other)
    }
}

#[component]
pub fn EntityTile(props: EntityTileProps) -> Element {
    let hover = use_signal(HoverState::default);
    tile_markup(&props, hover, Utc::now().timestamp_millis())
}

/// The tile as of `now_ms`, toggling `hover` on pointer enter/leave.
fn tile_markup(props: &EntityTileProps, mut hover: Signal<HoverState>, now_ms: i64) -> Element {
    let config = try_use_context::<TileConfig>().unwrap_or_default();
    let layout = TileLayout::compute(&props.input(), *hover.read(), now_ms);

    let avatar = props.avatar.clone().unwrap_or_else(|| {
        rsx! {
            BaseAvatar {
                name: props.name.clone(),
                url: props.avatar_url.clone(),
                width: config.avatar_size,
                height: config.avatar_size,
            }
        }
    });

    let badge = layout.badge.map(|badge| {
        let asset = badge.asset(&config);
        (
            config.asset_url(asset),
            asset.width,
            asset.height,
            translate(config.locale, badge.label_key()),
        )
    });

    let name_el = match layout.name_slot {
        NameSlot::Details { active_ago } => rsx! {
            div { class: "mx_EntityTile_details",
                img {
                    class: "mx_EntityTile_chevron",
                    src: config.asset_url(&config.chevron),
                    width: "{config.chevron.width}",
                    height: "{config.chevron.height}",
                }
                EmojiText {
                    element: TextElement::Div,
                    class: "mx_EntityTile_name_hover",
                    text: props.name.clone(),
                }
                PresenceLabel {
                    active_ago,
                    currently_active: props.presence_currently_active,
                    presence_state: props.presence_state,
                }
            }
        },
        NameSlot::Plain => rsx! {
            EmojiText {
                element: TextElement::Div,
                class: "mx_EntityTile_name",
                text: props.name.clone(),
            }
        },
    };

    let on_click = props.on_click;
    let name = props.name.clone();

    rsx! {
        AccessibleButton {
            class: layout.class,
            title: props.title.clone().unwrap_or_default(),
            on_activate: move |_| {
                if let Some(handler) = on_click {
                    handler.call(());
                }
            },
            onmouseenter: {
                let name = name.clone();
                move |_| {
                    let mut next = *hover.peek();
                    if next.enter() {
                        crate::log_debug!("EntityTile: hover on '{}'", name);
                        hover.set(next);
                    }
                }
            },
            onmouseleave: move |_| {
                let mut next = *hover.peek();
                if next.leave() {
                    hover.set(next);
                }
            },
            div { class: "mx_EntityTile_avatar",
                {avatar}
                if let Some((src, width, height, alt)) = badge {
                    img {
                        class: "mx_EntityTile_power",
                        src,
                        width: "{width}",
                        height: "{height}",
                        alt,
                    }
                }
            }
            {name_el}
            if layout.show_invite {
                div { class: "mx_EntityTile_invite",
                    img {
                        src: config.asset_url(&config.invite),
                        width: "{config.invite.width}",
                        height: "{config.invite.height}",
                    }
                }
            }
        }
    }
}


#[cfg(test)]
impl EntityTileProps {
    /// Props as the builder would produce them for just a name.
    pub(crate) fn with_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            title: None,
            avatar: None,
            avatar_url: None,
            class_name: None,
            presence_state: Some(PresenceState::Offline),
            presence_last_active_ago: None,
            presence_last_ts: 0,
            presence_currently_active: false,
            show_invite_button: false,
            power_level: 0,
            suppress_on_hover: false,
            on_click: None,
            should_update: None,
        }
    }
}
