//! Image avatar with an initial-letter fallback.

use dioxus::prelude::*;
use roster_shared::initial_letter;

#[derive(Props, Clone, PartialEq)]
pub struct BaseAvatarProps {
    #[props(into)]
    pub name: String,
    #[props(!optional, default)]
    pub url: Option<String>,
    #[props(default = 36)]
    pub width: u32,
    #[props(default = 36)]
    pub height: u32,
}

#[component]
pub fn BaseAvatar(props: BaseAvatarProps) -> Element {
    let width = props.width;
    let height = props.height;
    let font_size = (height as f32 * 0.65).round() as u32;

    rsx! {
        span {
            class: "mx_BaseAvatar",
            style: "width: {width}px; height: {height}px;",
            if let Some(url) = props.url.as_deref().filter(|u| !u.is_empty()) {
                img {
                    class: "mx_BaseAvatar_image",
                    src: "{url}",
                    alt: "",
                    width: "{width}",
                    height: "{height}",
                }
            } else {
                span {
                    class: "mx_BaseAvatar_initial",
                    aria_hidden: "true",
                    style: "font-size: {font_size}px; width: {width}px; line-height: {height}px;",
                    {initial_letter(&props.name)}
                }
            }
        }
    }
}
