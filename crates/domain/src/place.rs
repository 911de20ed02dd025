//! Place — a point of interest with amenity flags and coordinates.

use serde::{Deserialize, Serialize};

use crate::error::{FastNomadsError, ValidationError};
use crate::id::PlaceId;

/// Longest accepted [`Place::name`], in characters.
pub const NAME_MAX_LEN: usize = 50;

/// A persisted point of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub description: Option<String>,
    pub coffee: bool,
    pub wifi: bool,
    pub food: bool,
    pub lat: f64,
    pub lng: f64,
}

/// The caller-supplied fields of a [`Place`], before storage assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPlace {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub coffee: bool,
    pub wifi: bool,
    pub food: bool,
    pub lat: f64,
    pub lng: f64,
}

impl NewPlace {
    /// Create a builder for constructing a [`NewPlace`].
    #[must_use]
    pub fn builder() -> NewPlaceBuilder {
        NewPlaceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FastNomadsError::Validation`] when `name` exceeds
    /// [`NAME_MAX_LEN`] characters.
    pub fn validate(&self) -> Result<(), FastNomadsError> {
        let len = self.name.chars().count();
        if len > NAME_MAX_LEN {
            return Err(ValidationError::NameTooLong {
                len,
                max: NAME_MAX_LEN,
            }
            .into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NewPlace`]. Amenity flags default to `false`.
#[derive(Debug, Default)]
pub struct NewPlaceBuilder {
    name: Option<String>,
    description: Option<String>,
    coffee: bool,
    wifi: bool,
    food: bool,
    lat: f64,
    lng: f64,
}

impl NewPlaceBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn coffee(mut self, coffee: bool) -> Self {
        self.coffee = coffee;
        self
    }

    #[must_use]
    pub fn wifi(mut self, wifi: bool) -> Self {
        self.wifi = wifi;
        self
    }

    #[must_use]
    pub fn food(mut self, food: bool) -> Self {
        self.food = food;
        self
    }

    #[must_use]
    pub fn coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.lat = lat;
        self.lng = lng;
        self
    }

    /// Consume the builder, validate, and return a [`NewPlace`].
    ///
    /// # Errors
    ///
    /// Returns [`FastNomadsError::Validation`] if `name` is too long.
    pub fn build(self) -> Result<NewPlace, FastNomadsError> {
        let place = NewPlace {
            name: self.name.unwrap_or_default(),
            description: self.description,
            coffee: self.coffee,
            wifi: self.wifi,
            food: self.food,
            lat: self.lat,
            lng: self.lng,
        };
        place.validate()?;
        Ok(place)
    }
}
