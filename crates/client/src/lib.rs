//! Talentboard client engine.
//!
//! Talks to the marketplace backend and drives the stateful parts of the
//! discovery workflow:
//!
//! - [`MarketplaceApi`] — bearer-authenticated REST calls.
//! - [`CatalogStore`] — the fetched project list, with a stale-response
//!   guard so an older fetch never overwrites a newer one.
//! - [`SubmissionFlow`] — validation, submission, and the three outcomes
//!   (accepted, verification gate, failure) of applying to a project.
//! - Collaborator seams ([`SessionTokenProvider`], [`Navigator`],
//!   [`Notifier`]) implemented by the embedding UI.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod navigation;
pub mod notify;
pub mod session;
pub mod submission;

pub use api::{ApiError, MarketplaceApi};
pub use catalog::{CatalogPhase, CatalogStore};
pub use config::ClientConfig;
pub use error::ClientError;
pub use navigation::{NavigationTarget, Navigator, VerificationAction, VerificationRedirect};
pub use notify::{NotificationLevel, Notifier};
pub use session::{SessionTokenProvider, StaticTokenProvider};
pub use submission::{SubmissionError, SubmissionFlow, SubmissionOutcome, SubmissionState};
