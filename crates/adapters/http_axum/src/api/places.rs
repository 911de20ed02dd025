//! JSON handlers for places.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};

use fastnomads_app::ports::PlaceRepository;
use fastnomads_domain::id::PlaceId;
use fastnomads_domain::place::{NewPlace, Place};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /places/`
pub async fn list<PR>(State(state): State<AppState<PR>>) -> Result<Json<Vec<Place>>, ApiError>
where
    PR: PlaceRepository + Send + Sync + 'static,
{
    let places = state.place_service.list_places().await?;
    Ok(Json(places))
}

/// `GET /place/{id}`
///
/// An unknown id is answered with `200` and a `null` body.
pub async fn get<PR>(
    State(state): State<AppState<PR>>,
    id: Result<Path<PlaceId>, PathRejection>,
) -> Result<Json<Option<Place>>, ApiError>
where
    PR: PlaceRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    let place = state.place_service.get_place(id).await?;
    Ok(Json(place))
}

/// `POST /places/`
///
/// Answers `200` with the stored place, including its generated id.
pub async fn create<PR>(
    State(state): State<AppState<PR>>,
    payload: Result<Json<NewPlace>, JsonRejection>,
) -> Result<Json<Place>, ApiError>
where
    PR: PlaceRepository + Send + Sync + 'static,
{
    let Json(place) = payload?;
    let created = state.place_service.create_place(place).await?;
    Ok(Json(created))
}
