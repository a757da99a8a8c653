use super::timestamps;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use motorpool_application::ports::OwnerRepository;
use motorpool_domain::{DomainError, Owner};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

pub(super) type OwnerRow = (i64, String, String);

pub struct SqliteOwnerRepository {
    pool: SqlitePool,
}

impl SqliteOwnerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

pub(super) fn row_to_owner(row: OwnerRow) -> Result<Owner, DomainError> {
    let (id, name, purchase_date) = row;
    Ok(Owner {
        id: Some(id),
        name: Arc::from(name.as_str()),
        purchase_date: timestamps::from_db(&purchase_date)?,
    })
}

#[async_trait]
impl OwnerRepository for SqliteOwnerRepository {
    #[instrument(skip(self))]
    async fn create(
        &self,
        name: String,
        purchase_date: DateTime<Utc>,
    ) -> Result<Owner, DomainError> {
        let purchased = timestamps::to_db(purchase_date)?;
        let row = sqlx::query_as::<_, OwnerRow>(
            "INSERT INTO owners (name, purchase_date)
             VALUES (?, ?)
             RETURNING id, name, purchase_date",
        )
        .bind(&name)
        .bind(purchased)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create owner");
            DomainError::DatabaseError(e.to_string())
        })?;

        row_to_owner(row)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Owner>, DomainError> {
        let row = sqlx::query_as::<_, OwnerRow>(
            "SELECT id, name, purchase_date FROM owners WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query owner by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(row_to_owner).transpose()
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Owner>, DomainError> {
        let rows = sqlx::query_as::<_, OwnerRow>(
            "SELECT id, name, purchase_date FROM owners ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query all owners");
            DomainError::DatabaseError(e.to_string())
        })?;

        rows.into_iter().map(row_to_owner).collect()
    }
}
