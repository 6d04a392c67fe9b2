//! `talentboard` -- command-line project discovery client.
//!
//! Fetches the open-project catalog, prints it filtered and ranked with
//! each project's apply affordance, and optionally submits one
//! application.
//!
//! # Environment variables
//!
//! | Variable                           | Required | Default                     | Description                        |
//! |------------------------------------|----------|-----------------------------|------------------------------------|
//! | `TALENTBOARD_API_URL`              | no       | `http://localhost:3000/api` | Backend base URL                   |
//! | `TALENTBOARD_REQUEST_TIMEOUT_SECS` | no       | `30`                        | Per-request timeout                |
//! | `TALENTBOARD_TOKEN`                | yes      | --                          | Bearer token of the viewer         |
//! | `TALENTBOARD_SEARCH`               | no       | empty                       | Free-text search term (trimmed)    |
//! | `TALENTBOARD_CATEGORY`             | no       | `All`                       | Category filter                    |
//! | `TALENTBOARD_LIMIT`                | no       | --                          | Show only the top N (compact view) |
//! | `TALENTBOARD_APPLY_PROJECT_ID`     | no       | --                          | Apply to this project              |
//! | `TALENTBOARD_PROPOSAL`             | no       | empty                       | Proposal text for the application  |
//! | `TALENTBOARD_BID_AMOUNT`           | no       | empty                       | Bid amount for the application     |

mod collaborators;
mod query;
mod render;

use std::sync::Arc;

use talentboard_client::{
    CatalogStore, ClientConfig, MarketplaceApi, SessionTokenProvider, StaticTokenProvider,
    SubmissionFlow, SubmissionOutcome,
};
use talentboard_core::{ApplicationDraft, CardLayout, DiscoveryQuery, Id};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use collaborators::{TerminalNavigator, TerminalNotifier};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "talentboard=info,talentboard_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });

    let token = std::env::var("TALENTBOARD_TOKEN").unwrap_or_else(|_| {
        tracing::error!("TALENTBOARD_TOKEN environment variable is required");
        std::process::exit(1);
    });

    let query = query_from_env();
    let layout = if query.limit.is_some() {
        CardLayout::Compact
    } else {
        CardLayout::Expanded
    };

    tracing::info!(
        api_url = %config.api_url,
        search = %query.search_term,
        category = %query.category,
        limit = ?query.limit,
        "Starting talentboard",
    );

    let api = Arc::new(MarketplaceApi::new(&config).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to build HTTP client");
        std::process::exit(1);
    }));
    let session: Arc<dyn SessionTokenProvider> = Arc::new(StaticTokenProvider::new(token));
    let catalog = Arc::new(CatalogStore::new(api.clone(), session.clone()));

    // A broken catalog shows as "no results"; the store already logged why.
    let _ = catalog.refresh().await;

    print_catalog(&catalog, &query, layout).await;

    let Ok(raw_id) = std::env::var("TALENTBOARD_APPLY_PROJECT_ID") else {
        return;
    };

    let project_id = Id::new(raw_id.trim());
    let Some(project) = catalog.find(&project_id).await else {
        tracing::error!(%project_id, "Project not found in catalog");
        std::process::exit(1);
    };

    let draft = ApplicationDraft::new(
        std::env::var("TALENTBOARD_PROPOSAL").unwrap_or_default(),
        std::env::var("TALENTBOARD_BID_AMOUNT").unwrap_or_default(),
    );

    let flow = SubmissionFlow::new(
        api,
        session,
        catalog.clone(),
        Arc::new(TerminalNavigator),
        Arc::new(TerminalNotifier),
    );

    match flow.submit(&project, &draft).await {
        Ok(SubmissionOutcome::Submitted) => {
            println!();
            print_catalog(&catalog, &query, layout).await;
        }
        Ok(SubmissionOutcome::VerificationRequired(_)) => {}
        Ok(SubmissionOutcome::Failed { .. }) => std::process::exit(2),
        Err(e) => {
            tracing::error!(error = %e, %project_id, "Application not submitted");
            std::process::exit(1);
        }
    }
}

fn query_from_env() -> DiscoveryQuery {
    let search = std::env::var("TALENTBOARD_SEARCH").ok();
    let category = std::env::var("TALENTBOARD_CATEGORY").ok();
    let limit = std::env::var("TALENTBOARD_LIMIT").ok();
    query::build_query(search.as_deref(), category.as_deref(), limit.as_deref())
}

async fn print_catalog(catalog: &CatalogStore, query: &DiscoveryQuery, layout: CardLayout) {
    let cards = catalog.cards(query, layout).await;
    if cards.is_empty() {
        println!("No projects found.");
        return;
    }

    println!("Categories: {}", catalog.categories().await.join(" | "));
    for card in &cards {
        println!("{}", render::render_card(card));
    }
}
