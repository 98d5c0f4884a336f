use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveTime;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use thiserror::Error;
use tokio::time::timeout;

use crate::clock::format_clock;
use crate::models::ClassEvent;

/// Times are normalized to UTC before being cast down to a time-of-day.
/// The ordering keeps responses stable across calls.
const LIST_CLASSES_SQL: &str = r#"
    SELECT id::text AS id,
           title,
           instructor,
           CAST(start_time AT TIME ZONE 'UTC' AS TIME) AS start_time,
           CAST(end_time AT TIME ZONE 'UTC' AS TIME) AS end_time,
           capacity::int8 AS capacity,
           enrolled::int8 AS enrolled,
           price::float8 AS price,
           schedule
    FROM classes
    ORDER BY start_time, classes.id
"#;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),
    #[error("query timed out after {0:?}")]
    Timeout(Duration),
    #[error("failed to decode row {index}: {source}")]
    Row {
        index: usize,
        #[source]
        source: sqlx::Error,
    },
}

/// Read access to scheduled classes.
#[async_trait]
pub trait ClassStore: Send + Sync {
    /// Returns every class, fully decoded. Any bad row fails the whole call.
    async fn list_classes(&self) -> Result<Vec<ClassEvent>, StoreError>;

    /// Checks that the backing store answers.
    async fn ping(&self) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct PgClassStore {
    pool: PgPool,
    query_timeout: Duration,
}

impl PgClassStore {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

fn event_from_row(row: &PgRow) -> Result<ClassEvent, sqlx::Error> {
    let start_time: NaiveTime = row.try_get("start_time")?;
    let end_time: NaiveTime = row.try_get("end_time")?;

    Ok(ClassEvent {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        instructor: row.try_get("instructor")?,
        start_time: format_clock(start_time),
        end_time: format_clock(end_time),
        capacity: row.try_get("capacity")?,
        enrolled: row.try_get("enrolled")?,
        price: row.try_get("price")?,
        schedule: row.try_get("schedule")?,
    })
}

#[async_trait]
impl ClassStore for PgClassStore {
    async fn list_classes(&self) -> Result<Vec<ClassEvent>, StoreError> {
        // sqlx prepares the statement once per connection and reuses it.
        let rows = timeout(
            self.query_timeout,
            sqlx::query(LIST_CLASSES_SQL).fetch_all(&self.pool),
        )
        .await
        .map_err(|_| StoreError::Timeout(self.query_timeout))??;

        rows.iter()
            .enumerate()
            .map(|(index, row)| {
                event_from_row(row).map_err(|source| StoreError::Row { index, source })
            })
            .collect()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        timeout(self.query_timeout, sqlx::query("SELECT 1").execute(&self.pool))
            .await
            .map_err(|_| StoreError::Timeout(self.query_timeout))??;
        Ok(())
    }
}
