//! Local classification of raw input.
//!
//! Everything in here is synchronous and side-effect free. The only thing
//! that can leave this module undecided is an opaque screen name, which the
//! resolver then hands to the remote lookup.

use tracing::debug;
use url::Url;

use crate::error::{ResourceError, Result};
use crate::grammar::{self, QUERY_GRAMMARS, SCREEN_NAME_GRAMMARS};
use crate::reference::Reference;
use crate::types::{RawResource, ResolvedResource};

/// Outcome of local classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// Fully decided without a network call.
    Resolved(ResolvedResource),

    /// Opaque screen name that only the remote lookup can decide.
    ScreenName(String),
}

impl From<Reference> for Classified {
    fn from(reference: Reference) -> Self {
        Self::Resolved(reference.into_resolved())
    }
}

/// Classify raw input.
///
/// Precedence is fixed: numeric literal, mention, platform URL, screen name.
pub fn classify(raw: &RawResource) -> Result<Classified> {
    match raw {
        RawResource::Id(number) => Ok(Reference::from_number(*number).into()),
        RawResource::Text(text) => classify_text(text),
    }
}

fn classify_text(text: &str) -> Result<Classified> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ResourceError::invalid_resource("Resource is required"));
    }

    if grammar::is_number(text) {
        let number: i64 = text.parse().map_err(|_| {
            ResourceError::invalid_resource(format!("Resource ID is out of range: {}", text))
        })?;
        debug!(number, "Classified as numeric ID");
        return Ok(Reference::from_number(number).into());
    }

    if grammar::is_mention(text) {
        let target = grammar::mention_target(text).trim();
        debug!(mention = text, target, "Classified as mention");
        if target.is_empty() {
            return Err(ResourceError::invalid_resource(
                "Mention does not reference a resource",
            ));
        }
        return Ok(classify_screen_name(target));
    }

    if grammar::is_platform_url(text) {
        debug!(url = text, "Classified as platform URL");
        return classify_url(text);
    }

    Ok(classify_screen_name(text))
}

/// Try the local screen-name grammars, deferring to the remote lookup on a miss.
pub fn classify_screen_name(screen_name: &str) -> Classified {
    match grammar::first_match(SCREEN_NAME_GRAMMARS, screen_name) {
        Some(reference) => reference.into(),
        None => Classified::ScreenName(screen_name.to_string()),
    }
}

fn classify_url(raw_url: &str) -> Result<Classified> {
    let url = if grammar::has_scheme(raw_url) {
        Url::parse(raw_url)
    } else {
        Url::parse(&format!("https://{}", raw_url))
    }
    .map_err(|e| ResourceError::invalid_url(format!("Invalid URL: {}", e)))?;

    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.find(|s| !s.is_empty()));

    let Some(segment) = segment else {
        return Err(ResourceError::invalid_url("URL should contain path"));
    };

    if let Some(query) = url.query() {
        if let Some(reference) = grammar::first_match(QUERY_GRAMMARS, query) {
            return Ok(reference.into());
        }
    }

    Ok(classify_screen_name(segment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResourceErrorCode;
    use crate::types::ResourceType;

    fn classify_str(input: &str) -> Result<Classified> {
        classify(&RawResource::from(input))
    }

    fn resolved(input: &str) -> ResolvedResource {
        match classify_str(input).unwrap() {
            Classified::Resolved(resource) => resource,
            other => panic!("expected local resolution for {input}, got {other:?}"),
        }
    }

    fn code(input: &str) -> Option<ResourceErrorCode> {
        classify_str(input).unwrap_err().code()
    }

    #[test]
    fn test_empty_input_is_invalid() {
        assert_eq!(code(""), Some(ResourceErrorCode::InvalidResource));
        assert_eq!(code("   \t\n"), Some(ResourceErrorCode::InvalidResource));
        assert_eq!(code("@"), Some(ResourceErrorCode::InvalidResource));
        assert_eq!(code("@ "), Some(ResourceErrorCode::InvalidResource));
        assert_eq!(code("[ ]"), Some(ResourceErrorCode::InvalidResource));
        assert_eq!(code("[  |Label]"), Some(ResourceErrorCode::InvalidResource));
    }

    #[test]
    fn test_numeric_literals() {
        assert_eq!(resolved("123"), ResolvedResource::new(123, ResourceType::User));
        assert_eq!(resolved(" -123 "), ResolvedResource::new(123, ResourceType::Group));
        assert_eq!(resolved("0"), ResolvedResource::new(0, ResourceType::User));
        assert_eq!(
            code("99999999999999999999999"),
            Some(ResourceErrorCode::InvalidResource)
        );
    }

    #[test]
    fn test_integer_input() {
        let classified = classify(&RawResource::Id(-7)).unwrap();
        assert_eq!(
            classified,
            Classified::Resolved(ResolvedResource::new(7, ResourceType::Group))
        );
    }

    #[test]
    fn test_mentions_delegate_to_screen_name() {
        assert_eq!(resolved("[club1|Label]"), ResolvedResource::new(1, ResourceType::Group));
        assert_eq!(resolved("[id5]"), ResolvedResource::new(5, ResourceType::User));
        assert_eq!(resolved("@public3"), ResolvedResource::new(3, ResourceType::Group));
        assert_eq!(
            classify_str("*durov").unwrap(),
            Classified::ScreenName("durov".into())
        );
    }

    #[test]
    fn test_bare_domain_needs_path() {
        for input in ["vk.com", "https://vk.com/", "m.vk.com", "http://vk.com//", "vk.com?w=wall-1_2"] {
            assert_eq!(code(input), Some(ResourceErrorCode::InvalidUrl), "{input}");
        }
    }

    #[test]
    fn test_url_path_grammars() {
        assert_eq!(resolved("vk.com/wall-1_2"), ResolvedResource::owned(2, -1, "wall"));
        assert_eq!(resolved("https://m.vk.com/club15"), ResolvedResource::new(15, ResourceType::Group));
        assert_eq!(resolved("vk.com/app7/settings"), ResolvedResource::new(7, ResourceType::Application));
        assert_eq!(
            classify_str("https://vk.com/durov").unwrap(),
            Classified::ScreenName("durov".into())
        );
    }

    #[test]
    fn test_url_query_takes_precedence_over_path() {
        assert_eq!(
            resolved("https://vk.com/durov?z=photo-123_456%2Falbum"),
            ResolvedResource::owned(456, -123, "photo")
        );
        assert_eq!(
            resolved("vk.com/feed?w=wall-1_2"),
            ResolvedResource::owned(2, -1, "wall")
        );
        assert_eq!(
            resolved("vk.com/club1?z=album-1_2"),
            ResolvedResource::owned(2, -1, "album")
        );
        // query without a reference falls back to the path
        assert_eq!(
            resolved("vk.com/id1?from=search"),
            ResolvedResource::new(1, ResourceType::User)
        );
        assert_eq!(
            classify_str("https://vk.com/durov?utm_campaign=spring2024_1").unwrap(),
            Classified::ScreenName("durov".into())
        );
        assert_eq!(
            classify_str("vk.com/durov?ref=feed&utm_content=v2_3").unwrap(),
            Classified::ScreenName("durov".into())
        );
    }

    #[test]
    fn test_plain_ids() {
        assert_eq!(resolved("club15"), ResolvedResource::new(15, ResourceType::Group));
        assert_eq!(resolved("public15"), ResolvedResource::new(15, ResourceType::Group));
        assert_eq!(resolved("app7"), ResolvedResource::new(7, ResourceType::Application));
        assert_eq!(resolved("xyz9"), ResolvedResource::new(9, "xyz"));
        assert_eq!(resolved("albums-5_3"), ResolvedResource::owned(3, -5, "albums"));
    }

    #[test]
    fn test_unknown_screen_names_are_deferred() {
        assert_eq!(
            classify_str("durov").unwrap(),
            Classified::ScreenName("durov".into())
        );
        assert_eq!(
            classify_str("vk.company").unwrap(),
            Classified::ScreenName("vk.company".into())
        );
        assert_eq!(
            classify_str("durov_2013_1").unwrap(),
            Classified::ScreenName("durov_2013_1".into())
        );
        assert_eq!(
            classify_str("[ durov | Pavel]").unwrap(),
            Classified::ScreenName("durov".into())
        );
    }
}
