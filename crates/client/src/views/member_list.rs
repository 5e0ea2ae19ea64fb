//! Member list - joined members followed by pending invites.

use dioxus::prelude::*;
use roster_shared::{translate, TileConfig, UpdatePredicate};

use crate::components::rooms::{EntityTile, EntityTileProps};
use crate::stores::{partition_for_display, select_member, RosterMember, ROSTER};

/// Re-render a member tile only when something it shows changed.
fn member_changed(prev: &EntityTileProps, next: &EntityTileProps) -> bool {
    prev.name != next.name
        || prev.avatar_url != next.avatar_url
        || prev.avatar.is_some() != next.avatar.is_some()
        || prev.title != next.title
        || prev.class_name != next.class_name
        || prev.presence_state != next.presence_state
        || prev.presence_last_active_ago != next.presence_last_active_ago
        || prev.presence_last_ts != next.presence_last_ts
        || prev.presence_currently_active != next.presence_currently_active
        || prev.show_invite_button != next.show_invite_button
        || prev.power_level != next.power_level
        || prev.suppress_on_hover != next.suppress_on_hover
}

#[component]
pub fn MemberList() -> Element {
    let locale = try_use_context::<TileConfig>()
        .map(|config| config.locale)
        .unwrap_or_default();
    let (joined, invited) = partition_for_display(ROSTER.read().clone());

    rsx! {
        div { class: "mx_MemberList",
            div { class: "mx_MemberList_joined",
                for member in joined {
                    MemberTile { key: "{member.user_id}", member }
                }
            }
            if !invited.is_empty() {
                h2 { class: "mx_MemberList_invited", {translate(locale, "Invited")} }
                div { class: "mx_MemberList_invitedList",
                    for member in invited {
                        MemberTile { key: "{member.user_id}", member }
                    }
                }
            }
        }
    }
}

#[component]
fn MemberTile(member: RosterMember) -> Element {
    let name = member.name().to_string();
    let user_id = member.user_id.clone();

    rsx! {
        EntityTile {
            name: name.clone(),
            title: format!("{} ({})", name, member.user_id),
            class_name: "mx_MemberTile".to_string(),
            avatar_url: member.avatar_url.clone(),
            presence_state: member.presence.state,
            presence_last_active_ago: member.presence.last_active_ago(),
            presence_last_ts: member.presence.last_ts_ms,
            presence_currently_active: member.presence.currently_active,
            power_level: member.power_level,
            show_invite_button: member.invited,
            on_click: move |_| {
                crate::log_info!("MemberList: selected {}", user_id);
                select_member(&user_id);
            },
            should_update: member_changed as UpdatePredicate<EntityTileProps>,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::set_roster;
    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
    use roster_shared::Presence;

    fn member(avatar_url: &str) -> RosterMember {
        RosterMember {
            user_id: "@grace:example.org".to_string(),
            display_name: Some("Grace".to_string()),
            avatar_url: Some(avatar_url.to_string()),
            presence: Presence::default(),
            power_level: 0,
            invited: false,
        }
    }

    #[test]
    fn avatar_change_counts_as_change() {
        let prev = EntityTileProps {
            avatar_url: Some("old.png".to_string()),
            ..EntityTileProps::with_name("Grace")
        };
        let next = EntityTileProps {
            avatar_url: Some("new.png".to_string()),
            ..prev.clone()
        };
        assert!(member_changed(&prev, &next));
        assert!(!member_changed(&prev, &prev.clone()));
    }

    #[test]
    fn new_avatar_reaches_rendered_tile() {
        fn app() -> Element {
            use_hook(|| set_roster(vec![member("old.png")]));
            rsx! { MemberList {} }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains("src=\"old.png\""));

        dom.in_runtime(|| ROSTER.write()[0].avatar_url = Some("new.png".to_string()));
        dom.render_immediate(&mut NoOpMutations);

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("src=\"new.png\""));
        assert!(!html.contains("old.png"));
    }

    #[test]
    fn invited_members_get_their_own_section() {
        fn app() -> Element {
            let mut invited = member("i.png");
            invited.user_id = "@ivy:example.org".to_string();
            invited.invited = true;
            use_hook(move || set_roster(vec![member("g.png"), invited]));
            rsx! { MemberList {} }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("class=\"mx_MemberList_invited\""));
        assert_eq!(html.matches("class=\"mx_EntityTile_invite\"").count(), 1);
        assert_eq!(html.matches("mx_MemberTile").count(), 2);
    }
}
