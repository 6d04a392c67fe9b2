//! Session token seam.
//!
//! The embedding application owns authentication. This crate only asks
//! for a bearer token right before each request; `None` means the viewer
//! is signed out and no request is made.

use async_trait::async_trait;

#[async_trait]
pub trait SessionTokenProvider: Send + Sync {
    async fn bearer_token(&self) -> Option<String>;
}

/// Provider backed by a fixed token (or none).
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()).filter(|t: &String| !t.is_empty()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionTokenProvider for StaticTokenProvider {
    async fn bearer_token(&self) -> Option<String> {
        self.token.clone()
    }
}
