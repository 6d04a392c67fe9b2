//! Application submission flow.
//!
//! One [`SubmissionFlow`] backs one application surface. Its state is a
//! single [`SubmissionState`] rather than separate open/submitting flags.
//! While a request is in flight every other submit is refused without a
//! network call. The in-flight state is owned by a guard that restores
//! the surface on drop, so the flag is released on every exit path,
//! including cancellation of the submitting future.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use talentboard_core::{
    ApplicationDraft, ApplicationValidationError, CoreError, Id, Project,
};

use crate::api::{ApiError, MarketplaceApi};
use crate::catalog::CatalogStore;
use crate::navigation::{NavigationTarget, Navigator, VerificationRedirect};
use crate::notify::{NotificationLevel, Notifier};
use crate::session::SessionTokenProvider;

pub const SUCCESS_MESSAGE: &str = "Application submitted successfully";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to submit application";
pub const VERIFY_EMAIL_MESSAGE: &str = "Please verify your email before applying";

/// State of the application surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Closed,
    Editing { project_id: Id },
    Validating { project_id: Id },
    InFlight { project_id: Id },
    /// Last attempt failed; the surface stays open for a retry.
    Failed { project_id: Id, message: String },
}

impl SubmissionState {
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            SubmissionState::Validating { .. } | SubmissionState::InFlight { .. }
        )
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, SubmissionState::Closed)
    }
}

/// Result of a submission that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Accepted; the catalog has been refetched.
    Submitted,
    /// Email verification required; the viewer was handed off.
    VerificationRequired(VerificationRedirect),
    /// Any other failure; the surface remains usable.
    Failed { message: String },
}

/// Local refusals. None of these issue a network request.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("An application is already being submitted")]
    AlreadySubmitting,

    #[error("Not signed in")]
    NotAuthenticated,

    #[error(transparent)]
    Invalid(#[from] ApplicationValidationError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub struct SubmissionFlow {
    api: Arc<MarketplaceApi>,
    session: Arc<dyn SessionTokenProvider>,
    catalog: Arc<CatalogStore>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<SubmissionState>,
}

impl SubmissionFlow {
    pub fn new(
        api: Arc<MarketplaceApi>,
        session: Arc<dyn SessionTokenProvider>,
        catalog: Arc<CatalogStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            session,
            catalog,
            navigator,
            notifier,
            state: Mutex::new(SubmissionState::Closed),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.lock_state().clone()
    }

    /// Open the surface for a project the viewer may still apply to.
    pub fn open(&self, project: &Project) -> Result<(), SubmissionError> {
        let mut state = self.lock_state();
        if state.is_busy() {
            return Err(SubmissionError::AlreadySubmitting);
        }
        project.ensure_applicable()?;
        *state = SubmissionState::Editing {
            project_id: project.id.clone(),
        };
        Ok(())
    }

    /// Close the surface. Ignored while a submission is in progress.
    pub fn close(&self) -> bool {
        let mut state = self.lock_state();
        if state.is_busy() {
            return false;
        }
        *state = SubmissionState::Closed;
        true
    }

    /// Validate and submit an application.
    ///
    /// Local problems (busy, not applicable, invalid draft, signed out)
    /// return `Err` without touching the network. Everything the server
    /// answers is an `Ok` outcome. On acceptance the catalog refetch is
    /// awaited before returning, so it happens after the response.
    pub async fn submit(
        &self,
        project: &Project,
        draft: &ApplicationDraft,
    ) -> Result<SubmissionOutcome, SubmissionError> {
        let mut guard = self.begin(&project.id)?;

        if let Err(e) = project.ensure_applicable() {
            guard.settle(SubmissionState::Closed);
            return Err(e.into());
        }

        let request = match draft.validate() {
            Ok(request) => request,
            Err(e) => {
                self.notifier.notify(NotificationLevel::Warning, &e.to_string());
                return Err(e.into());
            }
        };

        let Some(token) = self.session.bearer_token().await else {
            tracing::warn!(project_id = %project.id, "Submission attempted without a session");
            return Err(SubmissionError::NotAuthenticated);
        };

        guard.transition(SubmissionState::InFlight {
            project_id: project.id.clone(),
        });
        tracing::info!(project_id = %project.id, bid_amount = request.bid_amount, "Submitting application");

        let result = self.api.apply(&token, &project.id, &request).await;

        match result {
            Ok(()) => {
                guard.settle(SubmissionState::Closed);
                drop(guard);
                tracing::info!(project_id = %project.id, "Application accepted");
                self.notifier.notify(NotificationLevel::Success, SUCCESS_MESSAGE);
                // Failure is logged by the store and deliberately not surfaced.
                let _ = self.catalog.refresh().await;
                Ok(SubmissionOutcome::Submitted)
            }
            Err(ApiError::EmailNotVerified { email }) => {
                guard.settle(SubmissionState::Closed);
                drop(guard);
                tracing::info!(project_id = %project.id, "Application gated on email verification");
                let redirect = VerificationRedirect::apply_project(email);
                self.notifier.notify(NotificationLevel::Warning, VERIFY_EMAIL_MESSAGE);
                self.navigator
                    .navigate(NavigationTarget::VerifyEmail(redirect.clone()));
                Ok(SubmissionOutcome::VerificationRequired(redirect))
            }
            Err(e) => {
                tracing::warn!(project_id = %project.id, error = %e, "Application submission failed");
                let message = e
                    .server_message()
                    .unwrap_or(DEFAULT_FAILURE_MESSAGE)
                    .to_string();
                guard.settle(SubmissionState::Failed {
                    project_id: project.id.clone(),
                    message: message.clone(),
                });
                drop(guard);
                self.notifier.notify(NotificationLevel::Error, &message);
                Ok(SubmissionOutcome::Failed { message })
            }
        }
    }

    /// Claim the surface for one submission attempt.
    fn begin(&self, project_id: &Id) -> Result<BusyGuard<'_>, SubmissionError> {
        let mut state = self.lock_state();
        if state.is_busy() {
            tracing::debug!(%project_id, "Submission already in progress, ignoring");
            return Err(SubmissionError::AlreadySubmitting);
        }
        *state = SubmissionState::Validating {
            project_id: project_id.clone(),
        };
        Ok(BusyGuard {
            state: &self.state,
            release_to: SubmissionState::Editing {
                project_id: project_id.clone(),
            },
        })
    }

    fn lock_state(&self) -> MutexGuard<'_, SubmissionState> {
        lock(&self.state)
    }
}

fn lock(state: &Mutex<SubmissionState>) -> MutexGuard<'_, SubmissionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Holds the surface in a busy state until dropped.
///
/// Drop writes `release_to`, which defaults to `Editing` so an
/// abandoned attempt leaves the surface open for a retry.
struct BusyGuard<'a> {
    state: &'a Mutex<SubmissionState>,
    release_to: SubmissionState,
}

impl BusyGuard<'_> {
    fn transition(&mut self, busy: SubmissionState) {
        *lock(self.state) = busy;
    }

    fn settle(&mut self, next: SubmissionState) {
        self.release_to = next;
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let next = std::mem::replace(&mut self.release_to, SubmissionState::Closed);
        *lock(self.state) = next;
    }
}
