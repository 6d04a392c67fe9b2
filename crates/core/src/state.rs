//! Per-viewer application state resolution.
//!
//! Every rendering of a project (compact or expanded card, CLI row)
//! derives its apply affordance through [`resolve`] and nowhere else.
//! Only `NONE -> PENDING` is ever caused by this client; every other
//! transition is decided server-side and observed on the next fetch.

use serde::Serialize;

use crate::error::CoreError;
use crate::project::{ApplicationStatus, Project};

/// What the viewer can do about a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationAffordance {
    /// Enabled "Apply" button.
    Apply,
    /// Disabled "Application Pending" indicator.
    Pending,
    /// Disabled "Application Accepted" indicator.
    Accepted,
    /// Disabled "Application Rejected" indicator.
    Rejected,
}

impl ApplicationAffordance {
    pub fn label(self) -> &'static str {
        match self {
            ApplicationAffordance::Apply => "Apply",
            ApplicationAffordance::Pending => "Application Pending",
            ApplicationAffordance::Accepted => "Application Accepted",
            ApplicationAffordance::Rejected => "Application Rejected",
        }
    }

    /// `true` only for [`ApplicationAffordance::Apply`].
    pub fn can_apply(self) -> bool {
        matches!(self, ApplicationAffordance::Apply)
    }
}

pub fn resolve(status: ApplicationStatus) -> ApplicationAffordance {
    match status {
        ApplicationStatus::None => ApplicationAffordance::Apply,
        ApplicationStatus::Pending => ApplicationAffordance::Pending,
        ApplicationStatus::Approved => ApplicationAffordance::Accepted,
        ApplicationStatus::Rejected => ApplicationAffordance::Rejected,
    }
}

impl Project {
    pub fn affordance(&self) -> ApplicationAffordance {
        resolve(self.my_application_status)
    }

    /// Fails unless the viewer may still apply to this project.
    pub fn ensure_applicable(&self) -> Result<(), CoreError> {
        if self.affordance().can_apply() {
            Ok(())
        } else {
            Err(CoreError::NotApplicable {
                id: self.id.clone(),
                status: self.my_application_status,
            })
        }
    }
}
