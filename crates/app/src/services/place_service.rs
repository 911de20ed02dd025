//! Place service — use-cases for storing and looking up places.

use fastnomads_domain::error::FastNomadsError;
use fastnomads_domain::id::PlaceId;
use fastnomads_domain::place::{NewPlace, Place};

use crate::ports::PlaceRepository;

/// Application service for place operations.
pub struct PlaceService<R> {
    repo: R,
}

impl<R: PlaceRepository> PlaceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new place after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FastNomadsError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn create_place(&self, place: NewPlace) -> Result<Place, FastNomadsError> {
        place.validate()?;
        let created = self.repo.create(place).await?;
        tracing::debug!(place_id = %created.id, name = %created.name, "place created");
        Ok(created)
    }

    /// Look up a place by id. An unknown id yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_place(&self, id: PlaceId) -> Result<Option<Place>, FastNomadsError> {
        self.repo.get_by_id(id).await
    }

    /// List all places.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_places(&self) -> Result<Vec<Place>, FastNomadsError> {
        self.repo.get_all().await
    }
}
