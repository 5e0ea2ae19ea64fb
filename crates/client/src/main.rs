//! Roster client - Main entry point
//!
//! Renders a member list from the bundled roster.
//! Supports both web (WASM) and desktop platforms.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use roster_client::{log_error, logging, stores, views::MemberList};
use roster_shared::TileConfig;

// Assets
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    logging::init("roster_client=debug");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(load_config);
    use_hook(|| match stores::roster::demo_roster() {
        Ok(members) => stores::set_roster(members),
        Err(err) => log_error!("failed to load roster: {err:#}"),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        MemberList {}
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> TileConfig {
    TileConfig::from_env().unwrap_or_else(|err| {
        roster_client::log_warn!("using default tile config: {err}");
        TileConfig::default()
    })
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> TileConfig {
    TileConfig::default()
}
