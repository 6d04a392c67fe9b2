//! Talentboard domain layer.
//!
//! Pure data model and transformations behind the project discovery and
//! application workflow. Nothing in this crate performs I/O; the HTTP
//! client, catalog store, and submission flow live in
//! `talentboard-client`.

pub mod application;
pub mod card;
pub mod discovery;
pub mod error;
pub mod project;
pub mod state;
pub mod types;

pub use application::{ApplicationDraft, ApplicationRequest, ApplicationValidationError};
pub use card::{CardLayout, ProjectCard};
pub use discovery::{categories, discover, filter, rank, rank_limited, DiscoveryQuery, ALL_CATEGORIES};
pub use error::CoreError;
pub use project::{ApplicationStatus, Complexity, Project, ProjectList, ProjectStatus, UserSummary};
pub use state::{resolve, ApplicationAffordance};
pub use types::{parse_timestamp, Id, Timestamp};
