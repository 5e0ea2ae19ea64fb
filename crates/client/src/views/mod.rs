//! View components for the application.

pub mod member_list;

pub use member_list::MemberList;
