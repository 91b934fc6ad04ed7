//! VK resource resolver
//!
//! Turns whatever a user typed (a numeric ID, `@mention`, `[club1|Label]`,
//! a `vk.com` link or a bare screen name) into a typed
//! [`ResolvedResource`] `{id, ownerId?, type}`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vk_resolver::{ResourceResolver, ResourceType};
//!
//! let resolver = ResourceResolver::new(vk_client);
//!
//! let group = resolver.resolve(-1).await?;
//! assert_eq!(group.kind, ResourceType::Group);
//!
//! let post = resolver.resolve("https://vk.com/wall-1_2").await?;
//! assert_eq!(post.owner_id, Some(-1));
//!
//! // Opaque screen names go through `utils.resolveScreenName`
//! let user = resolver.resolve("@durov").await?;
//! ```
//!
//! # Modules
//!
//! - [`classify`] - Pure, synchronous classification of raw input
//! - [`grammar`] - Ordered grammar matchers
//! - [`lookup`] - Screen-name lookup collaborator trait
//! - [`resolver`] - The async [`ResourceResolver`]
//! - [`testing`] - Mock lookup for tests

pub mod classify;
pub mod error;
pub mod grammar;
pub mod lookup;
pub mod reference;
pub mod resolver;
pub mod testing;
pub mod types;

pub use classify::{classify, Classified};
pub use error::{BoxError, ResourceError, ResourceErrorCode, Result};
pub use lookup::{OfflineLookup, ScreenNameLookup, ScreenNameObject, ScreenNameResponse};
pub use resolver::ResourceResolver;
pub use types::{RawResource, ResolvedResource, ResourceType};
