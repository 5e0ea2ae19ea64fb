//! Text with emoji runs wrapped for the emoji font.

use dioxus::prelude::*;
use roster_shared::emoji::{segments, Segment};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TextElement {
    #[default]
    Div,
    Span,
}

#[derive(Props, Clone, PartialEq)]
pub struct EmojiTextProps {
    #[props(into)]
    pub text: String,
    #[props(default)]
    pub element: TextElement,
    #[props(default, into)]
    pub class: String,
    #[props(default = "auto".to_string(), into)]
    pub dir: String,
}

#[component]
pub fn EmojiText(props: EmojiTextProps) -> Element {
    let body = rsx! {
        for (i, segment) in segments(&props.text).into_iter().enumerate() {
            {
                match segment {
                    Segment::Text(text) => rsx! { "{text}" },
                    Segment::Emoji(emoji) => rsx! {
                        span { key: "{i}", class: "mx_Emoji", title: "{emoji}", "{emoji}" }
                    },
                }
            }
        }
    };

    match props.element {
        TextElement::Div => rsx! {
            div { class: "{props.class}", dir: "{props.dir}", {body} }
        },
        TextElement::Span => rsx! {
            span { class: "{props.class}", dir: "{props.dir}", {body} }
        },
    }
}
