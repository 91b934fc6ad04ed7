//! Pure grammar matchers.
//!
//! Each matcher is a plain `fn(&str) -> Option<Reference>`. The tables below
//! fix the order in which they are tried; the first match wins.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

use crate::reference::Reference;

pub type Matcher = fn(&str) -> Option<Reference>;

const MENTION_SIGILS: &[char] = &['*', '@'];

/// Grammars tried against a bare screen name.
pub const SCREEN_NAME_GRAMMARS: &[(&str, Matcher)] = &[
    ("attachment", match_attachment),
    ("owner_embed", match_owner_embed),
    ("plain_id", match_plain_id),
];

/// Grammars tried against the query string of a platform URL.
pub const QUERY_GRAMMARS: &[(&str, Matcher)] = &[
    ("attachment", match_attachment),
    ("owner_embed", match_query_embed),
];

/// Tags accepted by the owner-embed grammars.
const OWNER_TAGS: &str = "audio_message|wall_reply|albums|album|topic|wall|page|videos|\
    photo|video|audio|doc|graffiti|market|poll|gift|story|sticker|link|podcast";

lazy_static! {
    static ref NUMBER_REGEX: Regex = Regex::new(r"^-?\d+$").unwrap();

    // [id1|Pavel] or [club1]
    static ref SYSTEM_MENTION_REGEX: Regex =
        Regex::new(r"^\[([^|\]]+)(?:\|[^\]]*)?\]$").unwrap();

    static ref PLATFORM_URL_REGEX: Regex =
        Regex::new(r"(?i)^(?:https?://)?(?:m\.)?vk\.com(?:[/?#]|$)").unwrap();

    static ref SCHEME_REGEX: Regex = Regex::new(r"(?i)^https?://").unwrap();

    // Media attachments: photo-1_2, audio_message5_6, wall_reply-1_9
    static ref ATTACHMENT_REGEX: Regex = Regex::new(
        r"(?i)\b(audio_message|wall_reply|photo|video|audio|doc|graffiti|wall|market|poll|gift|story|sticker|link|podcast)(-?\d+)_(\d+)"
    ).unwrap();

    // Whole screen name, optionally with a leaked query key: album-1_2, z=album-1_2
    static ref OWNER_EMBED_REGEX: Regex = Regex::new(&format!(
        r"(?i)^((?:[a-z_]+=)?(?:{}))(-?\d+)_(\d+)$",
        OWNER_TAGS
    )).unwrap();

    // One query parameter whose value is an owner reference: w=wall-1_2, z=photo-1_2%2Falbum
    static ref QUERY_EMBED_REGEX: Regex = Regex::new(&format!(
        r"(?i)(?:^|&)([a-z_]+=(?:{}))(-?\d+)_(\d+)",
        OWNER_TAGS
    )).unwrap();

    static ref PLAIN_ID_REGEX: Regex = Regex::new(r"(?i)^([a-z_]+)(\d+)$").unwrap();
}

pub fn is_number(input: &str) -> bool {
    NUMBER_REGEX.is_match(input)
}

pub fn is_platform_url(input: &str) -> bool {
    PLATFORM_URL_REGEX.is_match(input)
}

pub fn has_scheme(input: &str) -> bool {
    SCHEME_REGEX.is_match(input)
}

pub fn is_mention(input: &str) -> bool {
    input.starts_with(MENTION_SIGILS) || SYSTEM_MENTION_REGEX.is_match(input)
}

/// The text a mention points at.
///
/// Sigil mentions drop exactly one leading character; bracket mentions keep
/// the part before the first `|`. Only call this for input accepted by
/// [`is_mention`].
pub fn mention_target(input: &str) -> &str {
    if let Some(rest) = input.strip_prefix(MENTION_SIGILS) {
        return rest;
    }

    SYSTEM_MENTION_REGEX
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or_else(|| unreachable!("is_mention accepted malformed mention: {input}"))
}

/// Run `grammars` in order and return the first reference produced.
pub fn first_match(grammars: &[(&str, Matcher)], input: &str) -> Option<Reference> {
    grammars.iter().find_map(|(name, matcher)| {
        let reference = matcher(input)?;
        debug!(grammar = *name, input, ?reference, "Grammar matched");
        Some(reference)
    })
}

pub fn match_attachment(input: &str) -> Option<Reference> {
    owned_from_captures(ATTACHMENT_REGEX.captures(input)?)
}

pub fn match_owner_embed(input: &str) -> Option<Reference> {
    owned_from_captures(OWNER_EMBED_REGEX.captures(input)?)
}

pub fn match_query_embed(input: &str) -> Option<Reference> {
    owned_from_captures(QUERY_EMBED_REGEX.captures(input)?)
}

pub fn match_plain_id(input: &str) -> Option<Reference> {
    let caps = PLAIN_ID_REGEX.captures(input)?;
    let id = caps[2].parse().ok()?;

    Some(Reference::Tagged {
        prefix: caps[1].to_lowercase(),
        id,
    })
}

fn owned_from_captures(caps: Captures<'_>) -> Option<Reference> {
    let owner_id = caps[2].parse().ok()?;
    let id = caps[3].parse().ok()?;

    Some(Reference::Owned {
        tag: normalize_tag(&caps[1]),
        owner_id,
        id,
    })
}

/// Lowercase a captured tag and drop any `key=` prefix that leaked in from a
/// query string (`w=wall` becomes `wall`).
fn normalize_tag(raw: &str) -> String {
    let tag = raw.rsplit('=').next().unwrap_or(raw);
    tag.to_lowercase()
}
