use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub mod queries;

pub type DbPool = Pool<Postgres>;

pub async fn init_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(50)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Creates the tables if they do not exist yet. Safe to run on every startup.
pub async fn init_schema(pool: &DbPool) -> Result<()> {
    for ddl in queries::SCHEMA {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
