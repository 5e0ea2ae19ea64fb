//! Splitting display text into plain and emoji runs.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Emoji(String),
}

fn is_emoji(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1FAFF
            | 0x2600..=0x27BF
            | 0x231A..=0x231B
            | 0x23E9..=0x23FA
            | 0x2B1B..=0x2B1C
            | 0x2B50
            | 0x2B55
            | 0x3030
            | 0x303D
            | 0x3297
            | 0x3299
    )
}

/// Code points that only modify the emoji before them: ZWJ, variation
/// selectors, the keycap combiner and tag characters.
fn is_emoji_modifier(c: char) -> bool {
    matches!(
        c as u32,
        0x200D | 0xFE0E | 0xFE0F | 0x20E3 | 0xE0020..=0xE007F
    )
}

/// Split `text` into alternating runs. Modifiers stay attached to the emoji
/// run they follow; outside an emoji run they are treated as text.
pub fn segments(text: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut in_emoji = false;

    for c in text.chars() {
        let emoji = is_emoji(c) || (in_emoji && is_emoji_modifier(c));
        if emoji != in_emoji && !current.is_empty() {
            out.push(finish(std::mem::take(&mut current), in_emoji));
        }
        in_emoji = emoji;
        current.push(c);
    }
    if !current.is_empty() {
        out.push(finish(current, in_emoji));
    }
    out
}

fn finish(run: String, emoji: bool) -> Segment {
    if emoji {
        Segment::Emoji(run)
    } else {
        Segment::Text(run)
    }
}
