//! Storage port — repository trait for place persistence.

use std::future::Future;

use fastnomads_domain::error::FastNomadsError;
use fastnomads_domain::id::PlaceId;
use fastnomads_domain::place::{NewPlace, Place};

/// Repository for persisting and querying [`Place`]s.
pub trait PlaceRepository {
    /// Insert a new place, commit it, and return the row as stored,
    /// including its generated id.
    fn create(&self, place: NewPlace)
    -> impl Future<Output = Result<Place, FastNomadsError>> + Send;

    /// Get a place by its id. A missing row is `Ok(None)`, not an error.
    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, FastNomadsError>> + Send;

    /// Get every stored place, in whatever order storage yields them.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Place>, FastNomadsError>> + Send;
}
