use serde::{Deserialize, Serialize};

/// Type tag of a resolved resource.
///
/// `User`, `Group` and `Application` are the canonical tags produced by the
/// alias table. Anything else (`photo`, `wall`, `album`, an unknown prefix)
/// is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceType {
    User,
    Group,
    Application,
    Other(String),
}

impl ResourceType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::User => "user",
            Self::Group => "group",
            Self::Application => "application",
            Self::Other(tag) => tag,
        }
    }

    /// Prefix used when rendering this type back into a plain screen name.
    fn screen_name_prefix(&self) -> &str {
        match self {
            Self::User => "id",
            Self::Group => "club",
            Self::Application => "app",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for ResourceType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "user" => Self::User,
            "group" => Self::Group,
            "application" => Self::Application,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for ResourceType {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<ResourceType> for String {
    fn from(kind: ResourceType) -> Self {
        match kind {
            ResourceType::Other(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved resource reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedResource {
    pub id: u64,
    /// Present only for owner-tagged references (`wall-1_2`, `photo5_7`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: ResourceType,
}

impl ResolvedResource {
    pub fn new(id: u64, kind: impl Into<ResourceType>) -> Self {
        Self {
            id,
            owner_id: None,
            kind: kind.into(),
        }
    }

    pub fn owned(id: u64, owner_id: i64, kind: impl Into<ResourceType>) -> Self {
        Self {
            id,
            owner_id: Some(owner_id),
            kind: kind.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.kind == ResourceType::User
    }

    pub fn is_group(&self) -> bool {
        self.kind == ResourceType::Group
    }

    /// Render the canonical textual form (`id1`, `club1`, `wall-1_2`).
    ///
    /// Resolving the returned string yields the same `{id, ownerId, type}`.
    pub fn to_screen_name(&self) -> String {
        match self.owner_id {
            Some(owner_id) => format!("{}{}_{}", self.kind.as_str(), owner_id, self.id),
            None => format!("{}{}", self.kind.screen_name_prefix(), self.id),
        }
    }
}

/// Untrusted caller input: a bare integer or free-form text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawResource {
    Id(i64),
    Text(String),
}

impl From<i64> for RawResource {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<i32> for RawResource {
    fn from(id: i32) -> Self {
        Self::Id(id.into())
    }
}

impl From<u32> for RawResource {
    fn from(id: u32) -> Self {
        Self::Id(id.into())
    }
}

impl From<String> for RawResource {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for RawResource {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<&String> for RawResource {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}
