#![allow(dead_code)]

use chrono::{ DateTime, TimeZone, Utc };
use sqlx::postgres::{ PgPool, PgPoolOptions };

use studio_repo::db::schema::{ apply_schema, SCHEMA_SQL };
use studio_repo::{ Client, Coach, DbContext, Hall, Training };

/// Pool against `DATABASE_URL` with the schema applied
///
/// Database tests are `#[ignore]`d; run them with `cargo test -- --ignored`
/// once `DATABASE_URL` points at a scratch database.
pub async fn test_pool() -> PgPool {
    dotenv::dotenv().ok();
    let url = std::env
        ::var("DATABASE_URL")
        .expect("DATABASE_URL must be set to run database tests");

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url).await
        .expect("Failed to connect to test database");
    apply_schema(&pool, SCHEMA_SQL, false).await.expect("Failed to apply schema");

    pool
}

/// Context whose transaction the test rolls back at the end
pub async fn test_context(pool: &PgPool) -> DbContext {
    DbContext::begin(pool).await.expect("Failed to open test transaction")
}

pub fn training_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 7, 12, 0, 0).unwrap()
}

pub fn test_client(telephone: &str) -> Client {
    Client::new("Name", telephone, "mail@mail.ru", "123")
}

pub fn test_coach(name: &str) -> Coach {
    Coach::new(name)
}

pub fn test_hall(number: i64) -> Hall {
    Hall::new(number)
}

pub fn test_training(coach_id: i64, hall_id: i64) -> Training {
    Training::new(coach_id, hall_id, "Name", training_time(), 10)
}
