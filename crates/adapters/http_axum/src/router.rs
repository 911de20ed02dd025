//! Axum router assembly.

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use fastnomads_app::ports::PlaceRepository;

use crate::state::AppState;

/// Body of the liveness response.
#[derive(Serialize)]
struct Liveness {
    message: &'static str,
}

/// Build the top-level axum [`Router`].
///
/// Serves the liveness check at `/` and merges the places routes.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<PR>(state: AppState<PR>) -> Router
where
    PR: PlaceRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(root))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Liveness> {
    Json(Liveness {
        message: "Molto Bene!",
    })
}
