//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod places;

use axum::Router;
use axum::routing::get;

use fastnomads_app::ports::PlaceRepository;

use crate::state::AppState;

/// Build the places sub-router.
///
/// The collection is reachable with and without the trailing slash.
pub fn routes<PR>() -> Router<AppState<PR>>
where
    PR: PlaceRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/places/",
            get(places::list::<PR>).post(places::create::<PR>),
        )
        .route(
            "/places",
            get(places::list::<PR>).post(places::create::<PR>),
        )
        .route("/place/{id}", get(places::get::<PR>))
}
