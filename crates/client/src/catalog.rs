//! In-memory project catalog.
//!
//! [`CatalogStore`] holds the last successfully fetched project list and
//! its load phase. It owns no transformation logic: views are rendered
//! through `talentboard_core::discover` on demand.
//!
//! Each fetch takes a ticket from a monotonically increasing counter. A
//! response is applied only if its ticket is still the latest issued, so
//! a slow older fetch can never overwrite a newer one, and [`reset`]
//! invalidates everything still in flight.
//!
//! [`reset`]: CatalogStore::reset

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use talentboard_core::{discover, CardLayout, DiscoveryQuery, Id, Project, ProjectCard};
use tokio::sync::RwLock;

use crate::api::{ApiError, MarketplaceApi};
use crate::error::ClientError;
use crate::session::SessionTokenProvider;

/// Load phase of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogPhase {
    /// Nothing fetched yet (or reset).
    Idle,
    Loading,
    Ready,
    /// Last fetch failed; the previous list is retained.
    Failed,
}

#[derive(Debug)]
struct CatalogInner {
    phase: CatalogPhase,
    projects: Vec<Project>,
}

/// Identifies one fetch for the stale-response check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FetchTicket(u64);

pub struct CatalogStore {
    api: Arc<MarketplaceApi>,
    session: Arc<dyn SessionTokenProvider>,
    inner: RwLock<CatalogInner>,
    latest_ticket: AtomicU64,
}

impl CatalogStore {
    pub fn new(api: Arc<MarketplaceApi>, session: Arc<dyn SessionTokenProvider>) -> Self {
        Self {
            api,
            session,
            inner: RwLock::new(CatalogInner {
                phase: CatalogPhase::Idle,
                projects: Vec::new(),
            }),
            latest_ticket: AtomicU64::new(0),
        }
    }

    /// Fetch the catalog and replace the current list.
    ///
    /// Skipped when the viewer has no session token. A failed fetch is
    /// logged, leaves the previous list in place, and is returned so
    /// callers may inspect it; the discovery view itself stays silent.
    pub async fn refresh(&self) -> Result<(), ClientError> {
        let Some(token) = self.session.bearer_token().await else {
            tracing::debug!("No session token, skipping catalog fetch");
            return Ok(());
        };

        let ticket = self.begin_fetch().await;
        tracing::debug!(ticket = ticket.0, "Fetching project catalog");

        let result = self.api.list_projects(&token).await;
        self.complete_fetch(ticket, result).await
    }

    /// Drop the catalog and ignore every fetch still in flight.
    ///
    /// Call on session token change or teardown.
    pub async fn reset(&self) {
        let mut inner = self.inner.write().await;
        self.latest_ticket.fetch_add(1, Ordering::SeqCst);
        inner.phase = CatalogPhase::Idle;
        inner.projects.clear();
        tracing::debug!("Project catalog reset");
    }

    pub async fn phase(&self) -> CatalogPhase {
        self.inner.read().await.phase
    }

    /// Raw catalog in fetch order. Use [`CatalogStore::view`] for display.
    pub async fn projects(&self) -> Vec<Project> {
        self.inner.read().await.projects.clone()
    }

    pub async fn find(&self, id: &Id) -> Option<Project> {
        self.inner
            .read()
            .await
            .projects
            .iter()
            .find(|p| &p.id == id)
            .cloned()
    }

    /// Filtered, ranked, and optionally truncated display list.
    pub async fn view(&self, query: &DiscoveryQuery) -> Vec<Project> {
        discover(&self.inner.read().await.projects, query)
    }

    pub async fn cards(&self, query: &DiscoveryQuery, layout: CardLayout) -> Vec<ProjectCard> {
        self.view(query)
            .await
            .iter()
            .map(|p| ProjectCard::new(p, layout))
            .collect()
    }

    pub async fn categories(&self) -> Vec<String> {
        talentboard_core::categories(&self.inner.read().await.projects)
    }

    // ---- fetch bookkeeping ----

    pub(crate) async fn begin_fetch(&self) -> FetchTicket {
        let mut inner = self.inner.write().await;
        let ticket = FetchTicket(self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1);
        inner.phase = CatalogPhase::Loading;
        ticket
    }

    pub(crate) async fn complete_fetch(
        &self,
        ticket: FetchTicket,
        result: Result<Vec<Project>, ApiError>,
    ) -> Result<(), ClientError> {
        let mut inner = self.inner.write().await;

        if ticket.0 != self.latest_ticket.load(Ordering::SeqCst) {
            tracing::debug!(ticket = ticket.0, "Discarding stale catalog response");
            return Ok(());
        }

        match result {
            Ok(projects) => {
                tracing::info!(count = projects.len(), "Project catalog loaded");
                inner.projects = projects;
                inner.phase = CatalogPhase::Ready;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Project catalog fetch failed");
                inner.phase = CatalogPhase::Failed;
                Err(e.into())
            }
        }
    }
}
