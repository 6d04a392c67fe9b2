//! Navigation seam and the typed verification hand-off.
//!
//! When the backend refuses an application because the viewer's email is
//! unverified, the flow hands off to an external verification page. The
//! context it carries is a typed [`VerificationRedirect`], not a loose map.

use serde::Serialize;

/// Route of the external email verification flow.
pub const VERIFY_EMAIL_PATH: &str = "/verify-email";

/// Discovery view the viewer returns to after verifying.
pub const DISCOVERY_PATH: &str = "/projects";

/// Action that triggered the verification gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationAction {
    ApplyProject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRedirect {
    pub action: VerificationAction,
    pub email: String,
    #[serde(rename = "returnTo")]
    pub return_path: String,
}

impl VerificationRedirect {
    /// Hand-off for a gated project application; returns to discovery.
    pub fn apply_project(email: impl Into<String>) -> Self {
        Self {
            action: VerificationAction::ApplyProject,
            email: email.into(),
            return_path: DISCOVERY_PATH.to_string(),
        }
    }
}

/// Where the navigator should take the viewer, with its context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    VerifyEmail(VerificationRedirect),
}

impl NavigationTarget {
    pub fn path(&self) -> &'static str {
        match self {
            NavigationTarget::VerifyEmail(_) => VERIFY_EMAIL_PATH,
        }
    }

    /// Context payload as the navigation service receives it.
    pub fn context(&self) -> serde_json::Value {
        match self {
            NavigationTarget::VerifyEmail(redirect) => serde_json::json!({
                "action": redirect.action,
                "email": redirect.email,
                "returnTo": redirect.return_path,
            }),
        }
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, target: NavigationTarget);
}
