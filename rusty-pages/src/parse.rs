//! Parsing of emoji overrides into twilight reaction types.

use twilight_model::{
    channel::message::EmojiReactionType,
    id::{Id, marker::EmojiMarker},
};

/// Parse an emoji override (`<:name:id>`, `<a:name:id>`, or a unicode emoji).
///
/// Anything that is not a well-formed custom emoji mention is passed through
/// as a unicode emoji.
pub fn parse_emoji(raw: &str) -> EmojiReactionType {
    let trimmed = raw.trim();

    parse_custom_emoji(trimmed).unwrap_or_else(|| EmojiReactionType::Unicode {
        name: trimmed.to_owned(),
    })
}

fn parse_custom_emoji(raw: &str) -> Option<EmojiReactionType> {
    let inner = raw.strip_prefix('<')?.strip_suffix('>')?;

    let (animated, rest) = match inner.strip_prefix("a:") {
        Some(rest) => (true, rest),
        None => (false, inner.strip_prefix(':')?),
    };

    let (name, id_raw) = rest.split_once(':')?;
    let id = id_raw.parse::<u64>().ok()?;

    Some(EmojiReactionType::Custom {
        animated,
        id: Id::<EmojiMarker>::new_checked(id)?,
        name: (!name.is_empty()).then(|| name.to_owned()),
    })
}
