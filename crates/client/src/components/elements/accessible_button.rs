//! A `div` that behaves like a button for pointer and keyboard users.

use dioxus::prelude::*;

/// Which keyboard event a key press arrived on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum KeyPhase {
    Down,
    Up,
}

/// Enter activates on key-down, Space on key-up, matching native buttons.
fn activates(phase: KeyPhase, key: &Key) -> bool {
    match phase {
        KeyPhase::Down => *key == Key::Enter,
        KeyPhase::Up => matches!(key, Key::Character(c) if c == " "),
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct AccessibleButtonProps {
    #[props(default, into)]
    pub class: String,
    #[props(default, into)]
    pub title: String,
    #[props(optional)]
    pub on_activate: Option<EventHandler<()>>,
    #[props(optional)]
    pub onmouseenter: Option<EventHandler<MouseEvent>>,
    #[props(optional)]
    pub onmouseleave: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

#[component]
pub fn AccessibleButton(props: AccessibleButtonProps) -> Element {
    let on_activate = props.on_activate;
    let on_enter = props.onmouseenter;
    let on_leave = props.onmouseleave;
    let title = (!props.title.is_empty()).then(|| props.title.clone());

    let activate = move || {
        if let Some(handler) = on_activate {
            handler.call(());
        }
    };

    rsx! {
        div {
            class: "{props.class}",
            title,
            role: "button",
            tabindex: "0",
            onclick: move |_| activate(),
            onkeydown: move |evt: KeyboardEvent| {
                if activates(KeyPhase::Down, &evt.key()) {
                    evt.prevent_default();
                    activate();
                }
            },
            onkeyup: move |evt: KeyboardEvent| {
                if activates(KeyPhase::Up, &evt.key()) {
                    evt.prevent_default();
                    activate();
                }
            },
            onmouseenter: move |evt| {
                if let Some(handler) = on_enter {
                    handler.call(evt);
                }
            },
            onmouseleave: move |evt| {
                if let Some(handler) = on_leave {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_on_key_down_only() {
        assert!(activates(KeyPhase::Down, &Key::Enter));
        assert!(!activates(KeyPhase::Up, &Key::Enter));
    }

    #[test]
    fn space_on_key_up_only() {
        let space = Key::Character(" ".to_string());
        assert!(activates(KeyPhase::Up, &space));
        assert!(!activates(KeyPhase::Down, &space));
    }

    #[test]
    fn other_keys_ignored() {
        assert!(!activates(KeyPhase::Down, &Key::Tab));
        assert!(!activates(KeyPhase::Up, &Key::Character("a".to_string())));
    }
}
