//! `SQLite` implementation of [`PlaceRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use fastnomads_app::ports::PlaceRepository;
use fastnomads_domain::error::FastNomadsError;
use fastnomads_domain::id::PlaceId;
use fastnomads_domain::place::{NewPlace, Place};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Place);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Place> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;

        Ok(Self(Place {
            id: PlaceId::from_i64(id),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            coffee: row.try_get("coffee")?,
            wifi: row.try_get("wifi")?,
            food: row.try_get("food")?,
            lat: row.try_get("lat")?,
            lng: row.try_get("lng")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO places (name, description, coffee, wifi, food, lat, lng)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM places WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM places";

/// `SQLite`-backed place repository.
pub struct SqlitePlaceRepository {
    pool: SqlitePool,
}

impl SqlitePlaceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PlaceRepository for SqlitePlaceRepository {
    fn create(
        &self,
        place: NewPlace,
    ) -> impl Future<Output = Result<Place, FastNomadsError>> + Send {
        let pool = self.pool.clone();
        async move {
            // Rolled back on drop if anything below fails before commit.
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            let id = sqlx::query(INSERT)
                .bind(&place.name)
                .bind(&place.description)
                .bind(place.coffee)
                .bind(place.wifi)
                .bind(place.food)
                .bind(place.lat)
                .bind(place.lng)
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?
                .last_insert_rowid();

            tx.commit().await.map_err(StorageError::from)?;

            // Reload so the caller sees exactly what storage holds.
            let row: Wrapper = sqlx::query_as(SELECT_BY_ID)
                .bind(id)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, FastNomadsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Place>, FastNomadsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
