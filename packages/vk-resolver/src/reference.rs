//! Canonical intermediate form shared by every local grammar.
//!
//! Numeric literals, mentions, URL fragments and plain screen names all end
//! up as a [`Reference`] before type normalization, so there is exactly one
//! place where prefixes turn into resource types.

use crate::types::{ResolvedResource, ResourceType};

/// A locally decided reference, not yet normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// `<prefix><id>` such as `id1`, `club15`, `app9`. Prefix is lowercase.
    Tagged { prefix: String, id: u64 },

    /// `<tag><ownerId>_<id>` such as `wall-1_2`. Tag is lowercase.
    Owned { tag: String, owner_id: i64, id: u64 },
}

impl Reference {
    /// Map a signed numeric ID onto its prefixed form.
    ///
    /// Negative IDs address groups, everything else addresses users.
    pub fn from_number(number: i64) -> Self {
        let prefix = if number < 0 { "club" } else { "id" };
        Self::Tagged {
            prefix: prefix.to_string(),
            id: number.unsigned_abs(),
        }
    }

    pub fn into_resolved(self) -> ResolvedResource {
        match self {
            Self::Tagged { prefix, id } => ResolvedResource::new(id, canonical_type(&prefix)),
            Self::Owned { tag, owner_id, id } => ResolvedResource::owned(id, owner_id, tag),
        }
    }
}

/// Alias table for plain-ID prefixes.
pub(crate) fn canonical_type(prefix: &str) -> ResourceType {
    match prefix {
        "id" => ResourceType::User,
        "club" | "public" => ResourceType::Group,
        "app" => ResourceType::Application,
        other => ResourceType::from(other),
    }
}
