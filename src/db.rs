//! PostgreSQL connection pool management.

use std::str::FromStr;

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

use crate::settings::{DatabaseSettings, Settings};

/// Builds connect options from the `DB_*` settings.
///
/// Options are set field by field, so passwords containing spaces or quotes
/// need no escaping.
pub fn connect_options(db: &DatabaseSettings) -> Result<PgConnectOptions, sqlx::Error> {
    let ssl_mode = PgSslMode::from_str(&db.ssl_mode)?;
    Ok(PgConnectOptions::new()
        .host(&db.host)
        .port(db.port)
        .username(&db.user)
        .password(&db.password)
        .database(&db.name)
        .ssl_mode(ssl_mode))
}

/// Opens the process-wide pool and establishes the first connection.
///
/// # Errors
///
/// Returns an error if the options are invalid or the database cannot be reached.
pub async fn connect(settings: &Settings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(connect_options(&settings.database)?)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn database() -> DatabaseSettings {
        DatabaseSettings {
            host: "db.internal".to_string(),
            user: "scheduler".to_string(),
            password: "p@ss word".to_string(),
            name: "gym".to_string(),
            port: 5433,
            ssl_mode: "disable".to_string(),
        }
    }

    #[test]
    fn test_connect_options_from_settings() {
        let options = connect_options(&database()).unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_username(), "scheduler");
        assert_eq!(options.get_database(), Some("gym"));
    }

    #[test]
    fn test_connect_options_rejects_unknown_ssl_mode() {
        let mut db = database();
        db.ssl_mode = "sometimes".to_string();
        assert!(connect_options(&db).is_err());
    }

    // Run with: DATABASE_URL=postgres://... cargo test -- --ignored
    #[tokio::test]
    #[ignore = "requires database"]
    async fn test_pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert_eq!(result.0, 1);
    }
}
