use super::owner_repository::row_to_owner;
use super::timestamps;
use async_trait::async_trait;
use motorpool_application::ports::CarRepository;
use motorpool_domain::{
    Car, CarUpdate, DomainError, Manufacturer, NewCar, Owner, RegistrationDateFilter,
    WriteOutcome,
};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, instrument};

type CarRow = (i64, f64, String, i64, String, i64, String);
type CarOwnerRow = (i64, i64, String, String);

const CAR_SELECT: &str = "SELECT c.id, c.price, c.first_registration_date,
        m.id, m.name, m.siret, m.phone
     FROM cars c
     JOIN manufacturers m ON m.id = c.manufacturer_id";

const CAR_OWNERS_SELECT: &str = "SELECT co.car_id, o.id, o.name, o.purchase_date
     FROM car_owners co
     JOIN owners o ON o.id = co.owner_id
     WHERE co.car_id IN (SELECT c.id FROM cars c";

/// Which cars a read targets.
#[derive(Debug, Clone, Copy)]
enum Selection<'a> {
    All,
    Id(i64),
    Registration(&'a RegistrationDateFilter),
}

impl Selection<'_> {
    fn order_by(&self) -> &'static str {
        match self {
            Selection::Registration(_) => " ORDER BY c.first_registration_date ASC, c.id ASC",
            _ => " ORDER BY c.id ASC",
        }
    }
}

/// Appends ` WHERE ...` for `selection`, with cars aliased as `c`.
fn push_selection(builder: &mut QueryBuilder<'_, Sqlite>, selection: Selection<'_>) {
    builder.push(" WHERE 1 = 1");
    match selection {
        Selection::All => {}
        Selection::Id(id) => {
            builder.push(" AND c.id = ").push_bind(id);
        }
        Selection::Registration(filter) => {
            push_registration_filter(builder, "c.first_registration_date", filter)
        }
    }
}

/// Appends one ` AND column <op> ?` per bound set on `filter`.
fn push_registration_filter(
    builder: &mut QueryBuilder<'_, Sqlite>,
    column: &str,
    filter: &RegistrationDateFilter,
) {
    if let Some(bound) = filter.less_than {
        builder
            .push(format!(" AND {} < ", column))
            .push_bind(timestamps::bound_to_db(bound));
    }
    if let Some(bound) = filter.less_than_or_equal {
        builder
            .push(format!(" AND {} <= ", column))
            .push_bind(timestamps::bound_to_db(bound));
    }
    if let Some(bound) = filter.greater_than_or_equal {
        builder
            .push(format!(" AND {} >= ", column))
            .push_bind(timestamps::bound_to_db(bound));
    }
}

fn database_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        error!(error = %e, context, "Car store operation failed");
        DomainError::DatabaseError(e.to_string())
    }
}

async fn insert_owner_links(
    conn: &mut SqliteConnection,
    car_id: i64,
    owner_ids: &[i64],
) -> Result<(), DomainError> {
    for (position, owner_id) in owner_ids.iter().enumerate() {
        // Duplicate ids keep their first position.
        sqlx::query(
            "INSERT OR IGNORE INTO car_owners (car_id, owner_id, position) VALUES (?, ?, ?)",
        )
        .bind(car_id)
        .bind(*owner_id)
        .bind(position as i64)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            if e.to_string().contains("FOREIGN KEY constraint failed") {
                DomainError::OwnerNotFound(*owner_id)
            } else {
                error!(error = %e, car_id, owner_id, "Failed to link owner to car");
                DomainError::DatabaseError(e.to_string())
            }
        })?;
    }
    Ok(())
}

pub struct SqliteCarRepository {
    pool: SqlitePool,
}

impl SqliteCarRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_car(row: CarRow, owners: Vec<Owner>) -> Result<Car, DomainError> {
        let (id, price, first_registration_date, manufacturer_id, name, siret, phone) = row;
        Ok(Car {
            id: Some(id),
            manufacturer: Manufacturer {
                id: Some(manufacturer_id),
                name: Arc::from(name.as_str()),
                siret,
                phone: Arc::from(phone.as_str()),
            },
            price,
            first_registration_date: timestamps::from_db(&first_registration_date)?,
            owners,
        })
    }

    /// Cars plus their ordered owners, read inside one transaction so both
    /// queries see the same snapshot.
    async fn load_cars(&self, selection: Selection<'_>) -> Result<Vec<Car>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(database_error("begin read transaction"))?;

        let mut cars_query = QueryBuilder::<Sqlite>::new(CAR_SELECT);
        push_selection(&mut cars_query, selection);
        cars_query.push(selection.order_by());
        let rows: Vec<CarRow> = cars_query
            .build_query_as()
            .fetch_all(&mut *tx)
            .await
            .map_err(database_error("query cars"))?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let mut owners_query = QueryBuilder::<Sqlite>::new(CAR_OWNERS_SELECT);
        push_selection(&mut owners_query, selection);
        owners_query.push(") ORDER BY co.car_id ASC, co.position ASC");
        let owner_rows: Vec<CarOwnerRow> = owners_query
            .build_query_as()
            .fetch_all(&mut *tx)
            .await
            .map_err(database_error("query car owners"))?;

        tx.commit()
            .await
            .map_err(database_error("commit read transaction"))?;

        let mut owners_by_car: HashMap<i64, Vec<Owner>> = HashMap::new();
        for (car_id, owner_id, name, purchase_date) in owner_rows {
            owners_by_car
                .entry(car_id)
                .or_default()
                .push(row_to_owner((owner_id, name, purchase_date))?);
        }

        rows.into_iter()
            .map(|row| {
                let owners = owners_by_car.remove(&row.0).unwrap_or_default();
                Self::row_to_car(row, owners)
            })
            .collect()
    }

    async fn count_matching(
        conn: &mut SqliteConnection,
        filter: &RegistrationDateFilter,
    ) -> Result<u64, DomainError> {
        let mut query = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM cars c");
        push_selection(&mut query, Selection::Registration(filter));
        let (count,): (i64,) = query
            .build_query_as()
            .fetch_one(&mut *conn)
            .await
            .map_err(database_error("count matching cars"))?;
        Ok(count as u64)
    }
}

#[async_trait]
impl CarRepository for SqliteCarRepository {
    #[instrument(skip(self))]
    async fn create(&self, car: NewCar) -> Result<Car, DomainError> {
        let registered = timestamps::to_db(car.first_registration_date)?;
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(database_error("begin create transaction"))?;

        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO cars (manufacturer_id, price, first_registration_date)
             VALUES (?, ?, ?)
             RETURNING id",
        )
        .bind(car.manufacturer_id)
        .bind(car.price)
        .bind(registered)
        .fetch_one(&mut *tx)
        .await
        .map_err(database_error("insert car"))?;

        insert_owner_links(&mut *tx, id, &car.owner_ids).await?;

        tx.commit()
            .await
            .map_err(database_error("commit create transaction"))?;

        self.get_by_id(id).await?.ok_or(DomainError::CarNotFound(id))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Car>, DomainError> {
        Ok(self.load_cars(Selection::Id(id)).await?.into_iter().next())
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Car>, DomainError> {
        self.load_cars(Selection::All).await
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i64, update: CarUpdate) -> Result<Car, DomainError> {
        let registered = update
            .first_registration_date
            .map(timestamps::to_db)
            .transpose()?;
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(database_error("begin update transaction"))?;

        let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM cars WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(database_error("query car by id"))?;
        if exists.is_none() {
            return Err(DomainError::CarNotFound(id));
        }

        if update.manufacturer_id.is_some()
            || update.price.is_some()
            || update.first_registration_date.is_some()
        {
            let mut query = QueryBuilder::<Sqlite>::new("UPDATE cars SET ");
            let mut fields = query.separated(", ");
            if let Some(manufacturer_id) = update.manufacturer_id {
                fields.push("manufacturer_id = ");
                fields.push_bind_unseparated(manufacturer_id);
            }
            if let Some(price) = update.price {
                fields.push("price = ");
                fields.push_bind_unseparated(price);
            }
            if let Some(date) = registered {
                fields.push("first_registration_date = ");
                fields.push_bind_unseparated(date);
            }
            query.push(" WHERE id = ").push_bind(id);

            query
                .build()
                .execute(&mut *tx)
                .await
                .map_err(database_error("update car"))?;
        }

        if let Some(owner_ids) = &update.owner_ids {
            sqlx::query("DELETE FROM car_owners WHERE car_id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(database_error("clear car owners"))?;

            insert_owner_links(&mut *tx, id, owner_ids).await?;
        }

        tx.commit()
            .await
            .map_err(database_error("commit update transaction"))?;

        self.get_by_id(id).await?.ok_or(DomainError::CarNotFound(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM cars WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error("delete car"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CarNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_registration_date(
        &self,
        filter: &RegistrationDateFilter,
    ) -> Result<Vec<Car>, DomainError> {
        self.load_cars(Selection::Registration(filter)).await
    }

    #[instrument(skip(self))]
    async fn apply_price_factor(
        &self,
        filter: &RegistrationDateFilter,
        factor: f64,
    ) -> Result<WriteOutcome, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(database_error("begin price transaction"))?;

        let matched_count = Self::count_matching(&mut *tx, filter).await?;

        let mut query = QueryBuilder::<Sqlite>::new("UPDATE cars SET price = price * ");
        query.push_bind(factor);
        query.push(" WHERE 1 = 1");
        push_registration_filter(&mut query, "first_registration_date", filter);
        // Rows whose price would not change are matched but not modified.
        query.push(" AND price * ").push_bind(factor).push(" <> price");

        let result = query
            .build()
            .execute(&mut *tx)
            .await
            .map_err(database_error("apply price factor"))?;

        tx.commit()
            .await
            .map_err(database_error("commit price transaction"))?;

        let outcome = WriteOutcome {
            matched_count,
            modified_count: result.rows_affected(),
        };
        debug!(
            factor,
            matched = outcome.matched_count,
            modified = outcome.modified_count,
            "Price factor applied"
        );
        Ok(outcome)
    }

    #[instrument(skip(self))]
    async fn detach_owners(
        &self,
        filter: &RegistrationDateFilter,
    ) -> Result<WriteOutcome, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(database_error("begin detach transaction"))?;

        let matched_count = Self::count_matching(&mut *tx, filter).await?;

        let mut owned = QueryBuilder::<Sqlite>::new(
            "SELECT COUNT(DISTINCT co.car_id)
             FROM car_owners co
             JOIN cars c ON c.id = co.car_id",
        );
        push_selection(&mut owned, Selection::Registration(filter));
        let (modified_count,): (i64,) = owned
            .build_query_as()
            .fetch_one(&mut *tx)
            .await
            .map_err(database_error("count owned cars"))?;

        let mut delete = QueryBuilder::<Sqlite>::new(
            "DELETE FROM car_owners WHERE car_id IN (SELECT c.id FROM cars c",
        );
        push_selection(&mut delete, Selection::Registration(filter));
        delete.push(")");

        let result = delete
            .build()
            .execute(&mut *tx)
            .await
            .map_err(database_error("detach owners"))?;

        tx.commit()
            .await
            .map_err(database_error("commit detach transaction"))?;

        debug!(
            matched = matched_count,
            modified = modified_count,
            links_removed = result.rows_affected(),
            "Owners detached"
        );

        Ok(WriteOutcome {
            matched_count,
            modified_count: modified_count as u64,
        })
    }
}
