//! REST client for the marketplace backend.
//!
//! Wraps `GET /projects` and `POST /projects/{id}/apply` using
//! [`reqwest`]. Every call carries the viewer's bearer token.

use reqwest::StatusCode;
use serde::Deserialize;
use talentboard_core::{ApplicationRequest, Id, Project, ProjectList};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Error code the backend uses to gate applications on email verification.
pub const EMAIL_NOT_VERIFIED: &str = "EMAIL_NOT_VERIFIED";

/// Errors from the marketplace REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The viewer must verify their email before applying.
    #[error("Email not verified: {email}")]
    EmailNotVerified { email: String },

    /// Any other non-2xx response.
    #[error("Marketplace API error ({status}): {}", .message.as_deref().unwrap_or("<no message>"))]
    Status {
        status: u16,
        /// `message` from the response body, falling back to `error`.
        message: Option<String>,
    },
}

impl ApiError {
    /// Server-provided message suitable for showing to the viewer.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Error body shape shared by all backend endpoints.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
    email: Option<String>,
}

/// HTTP client for the marketplace backend.
pub struct MarketplaceApi {
    client: reqwest::Client,
    api_url: String,
}

impl MarketplaceApi {
    /// Build a client with the configured request timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(ApiError::Request)?;
        Ok(Self::with_client(client, config.api_url.clone()))
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetch the open-project catalog.
    ///
    /// Sends `GET /projects` and unwraps the `{ "data": [...] }` envelope.
    /// The returned list is in server order, which carries no meaning.
    pub async fn list_projects(&self, token: &str) -> Result<Vec<Project>, ApiError> {
        let response = self
            .client
            .get(format!("{}/projects", self.api_url))
            .bearer_auth(token)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let list: ProjectList = response.json().await?;
        Ok(list.data)
    }

    /// Submit an application to a project.
    ///
    /// Sends `POST /projects/{project_id}/apply` with
    /// `{ "proposal", "bidAmount" }`. A 403 carrying
    /// [`EMAIL_NOT_VERIFIED`] becomes [`ApiError::EmailNotVerified`].
    pub async fn apply(
        &self,
        token: &str,
        project_id: &Id,
        request: &ApplicationRequest,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/projects/{}/apply", self.api_url, project_id))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    // ---- private helpers ----

    /// Return the response unchanged on 2xx, otherwise classify the body.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let raw = response.text().await.unwrap_or_default();
        Err(classify_error(status, &raw))
    }
}

/// Map a non-2xx status and raw body to an [`ApiError`].
fn classify_error(status: StatusCode, raw_body: &str) -> ApiError {
    let body: ErrorBody = serde_json::from_str(raw_body).unwrap_or_default();

    if status == StatusCode::FORBIDDEN && body.error.as_deref() == Some(EMAIL_NOT_VERIFIED) {
        return ApiError::EmailNotVerified {
            email: body.email.unwrap_or_default(),
        };
    }

    ApiError::Status {
        status: status.as_u16(),
        message: body
            .message
            .or(body.error)
            .filter(|m| !m.trim().is_empty()),
    }
}
