//! Project catalog model as served by `GET /projects`.
//!
//! Projects are read-mostly: they are created by a catalog fetch and only
//! ever replaced wholesale by the next fetch. `my_application_status` is
//! scoped to the requesting viewer and says nothing about other applicants.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{deserialize_optional_timestamp, Id, Timestamp};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Skill level a project asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Complexity {
    Beginner,
    Intermediate,
    Expert,
}

impl Complexity {
    pub fn label(self) -> &'static str {
        match self {
            Complexity::Beginner => "Beginner",
            Complexity::Intermediate => "Intermediate",
            Complexity::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Open,
    Closed,
}

/// The viewer's own application state for a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    #[default]
    None,
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::None,
        ApplicationStatus::Pending,
        ApplicationStatus::Approved,
        ApplicationStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::None => "NONE",
            ApplicationStatus::Pending => "PENDING",
            ApplicationStatus::Approved => "APPROVED",
            ApplicationStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn deserialize_application_status<'de, D>(deserializer: D) -> Result<ApplicationStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ApplicationStatus>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// Project owner summary. Owned by the backend, read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Id,
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Id,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub budget: u64,
    /// Display label only; never parsed for ordering.
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub complexity: Option<Complexity>,
    /// Raw comma-delimited tag list; see [`Project::required_skills`].
    #[serde(default)]
    pub required_skills: Option<String>,
    #[serde(default)]
    pub estimated_duration: Option<String>,
    #[serde(default)]
    pub applicant_count: u32,
    #[serde(default)]
    pub owner: Option<UserSummary>,
    pub status: ProjectStatus,
    #[serde(default, deserialize_with = "deserialize_application_status")]
    pub my_application_status: ApplicationStatus,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<Timestamp>,
}

impl Project {
    /// Complexity shown to the viewer; absent values read as intermediate.
    pub fn display_complexity(&self) -> Complexity {
        self.complexity.unwrap_or(Complexity::Intermediate)
    }

    /// Ordered, trimmed, non-empty skill tags.
    pub fn required_skills(&self) -> Vec<&str> {
        self.required_skills
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Envelope returned by `GET /projects`.
#[derive(Debug, Deserialize)]
pub struct ProjectList {
    pub data: Vec<Project>,
}
