//! Mock lookup for testing.
//!
//! Provides a configurable mock implementation of [`ScreenNameLookup`].

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::BoxError;
use crate::lookup::{ScreenNameLookup, ScreenNameResponse};

/// Mock screen-name lookup.
///
/// Names without a canned response answer with an empty list, the same way
/// the real API reports an unknown screen name.
///
/// # Example
///
/// ```rust
/// use vk_resolver::testing::MockLookup;
/// use vk_resolver::ScreenNameResponse;
///
/// let lookup = MockLookup::new().with_response("durov", ScreenNameResponse::found("user", 1));
/// assert_eq!(lookup.call_count(), 0);
/// ```
#[derive(Default)]
pub struct MockLookup {
    responses: Arc<RwLock<HashMap<String, ScreenNameResponse>>>,
    failures: Arc<RwLock<HashMap<String, String>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned response for a screen name.
    pub fn add_response(&self, screen_name: impl Into<String>, response: ScreenNameResponse) {
        self.responses
            .write()
            .unwrap()
            .insert(screen_name.into(), response);
    }

    /// Make lookups of `screen_name` fail with `message`.
    pub fn add_failure(&self, screen_name: impl Into<String>, message: impl Into<String>) {
        self.failures
            .write()
            .unwrap()
            .insert(screen_name.into(), message.into());
    }

    /// Builder form of [`add_response`](Self::add_response).
    pub fn with_response(self, screen_name: impl Into<String>, response: ScreenNameResponse) -> Self {
        self.add_response(screen_name, response);
        self
    }

    /// Builder form of [`add_failure`](Self::add_failure).
    pub fn with_failure(self, screen_name: impl Into<String>, message: impl Into<String>) -> Self {
        self.add_failure(screen_name, message);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Screen names requested so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    pub fn reset_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

impl Clone for MockLookup {
    fn clone(&self) -> Self {
        Self {
            responses: Arc::clone(&self.responses),
            failures: Arc::clone(&self.failures),
            calls: Arc::clone(&self.calls),
        }
    }
}

#[async_trait]
impl ScreenNameLookup for MockLookup {
    async fn resolve_screen_name(
        &self,
        screen_name: &str,
    ) -> std::result::Result<ScreenNameResponse, BoxError> {
        self.calls.write().unwrap().push(screen_name.to_string());

        if let Some(message) = self.failures.read().unwrap().get(screen_name) {
            return Err(message.clone().into());
        }

        Ok(self
            .responses
            .read()
            .unwrap()
            .get(screen_name)
            .cloned()
            .unwrap_or_else(ScreenNameResponse::not_found))
    }
}
