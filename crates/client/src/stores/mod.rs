//! Global stores for application state.

pub mod roster;

pub use roster::{
    partition_for_display, select_member, set_roster, RosterMember, ROSTER, SELECTED_MEMBER,
};
