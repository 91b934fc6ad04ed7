use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::classify::{classify, Classified};
use crate::error::{ResourceError, Result};
use crate::lookup::{OfflineLookup, ScreenNameLookup, ScreenNameResponse};
use crate::types::{RawResource, ResolvedResource, ResourceType};

/// Resolves mentions, URLs, numeric IDs and screen names into
/// [`ResolvedResource`]s.
///
/// Holds no per-call state, so one instance can be cloned and shared across
/// tasks freely.
#[derive(Clone)]
pub struct ResourceResolver {
    lookup: Arc<dyn ScreenNameLookup>,
}

impl ResourceResolver {
    pub fn new(lookup: impl ScreenNameLookup + 'static) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }

    /// Share an existing lookup (e.g. an API client used elsewhere).
    pub fn from_arc(lookup: Arc<dyn ScreenNameLookup>) -> Self {
        Self { lookup }
    }

    /// Resolver that only uses local grammars.
    pub fn offline() -> Self {
        Self::new(OfflineLookup)
    }

    pub async fn resolve(&self, resource: impl Into<RawResource>) -> Result<ResolvedResource> {
        let raw = resource.into();

        match classify(&raw)? {
            Classified::Resolved(resource) => {
                debug!(?raw, ?resource, "Resolved locally");
                Ok(resource)
            }
            Classified::ScreenName(screen_name) => self.lookup_screen_name(&screen_name).await,
        }
    }

    async fn lookup_screen_name(&self, screen_name: &str) -> Result<ResolvedResource> {
        info!(screen_name, "Resolving screen name remotely");

        let response = self
            .lookup
            .resolve_screen_name(screen_name)
            .await
            .map_err(|e| {
                warn!(screen_name, error = %e, "Screen name lookup failed");
                ResourceError::Lookup(e)
            })?;

        match response {
            ScreenNameResponse::Found(object) => {
                let kind = if object.kind == "page" {
                    ResourceType::Group
                } else {
                    ResourceType::from(object.kind)
                };
                Ok(ResolvedResource::new(object.object_id, kind))
            }
            ScreenNameResponse::Ambiguous(_) => {
                debug!(screen_name, "Screen name lookup returned no match");
                Err(ResourceError::not_found(screen_name))
            }
        }
    }
}

impl std::fmt::Debug for ResourceResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceResolver").finish_non_exhaustive()
    }
}
