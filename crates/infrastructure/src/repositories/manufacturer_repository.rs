use async_trait::async_trait;
use motorpool_application::ports::ManufacturerRepository;
use motorpool_domain::{DomainError, Manufacturer};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

type ManufacturerRow = (i64, String, i64, String);

pub struct SqliteManufacturerRepository {
    pool: SqlitePool,
}

impl SqliteManufacturerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_manufacturer(row: ManufacturerRow) -> Manufacturer {
        let (id, name, siret, phone) = row;
        Manufacturer {
            id: Some(id),
            name: Arc::from(name.as_str()),
            siret,
            phone: Arc::from(phone.as_str()),
        }
    }
}

#[async_trait]
impl ManufacturerRepository for SqliteManufacturerRepository {
    #[instrument(skip(self))]
    async fn create(
        &self,
        name: String,
        siret: i64,
        phone: String,
    ) -> Result<Manufacturer, DomainError> {
        let row = sqlx::query_as::<_, ManufacturerRow>(
            "INSERT INTO manufacturers (name, siret, phone)
             VALUES (?, ?, ?)
             RETURNING id, name, siret, phone",
        )
        .bind(&name)
        .bind(siret)
        .bind(&phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                DomainError::ManufacturerConflict(siret)
            } else {
                error!(error = %e, "Failed to create manufacturer");
                DomainError::DatabaseError(e.to_string())
            }
        })?;

        Ok(Self::row_to_manufacturer(row))
    }

    #[instrument(skip(self))]
    async fn get_by_siret(&self, siret: i64) -> Result<Option<Manufacturer>, DomainError> {
        let row = sqlx::query_as::<_, ManufacturerRow>(
            "SELECT id, name, siret, phone FROM manufacturers WHERE siret = ?",
        )
        .bind(siret)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query manufacturer by siret");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_manufacturer))
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Manufacturer>, DomainError> {
        let rows = sqlx::query_as::<_, ManufacturerRow>(
            "SELECT id, name, siret, phone FROM manufacturers ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query all manufacturers");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_manufacturer).collect())
    }
}
