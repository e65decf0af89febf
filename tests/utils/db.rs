/// Database test utilities with singleton pattern
///
/// Provides a shared, migrated PostgreSQL pool with serialized access for
/// repository tests. `TEST_DATABASE_URL` must point at a disposable database.
use diesel::prelude::*;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use marquee_lib::shared::Database;

static DATABASE: OnceLock<Arc<Database>> = OnceLock::new();

/// Shared, migrated database for the whole test binary
pub fn test_database() -> Arc<Database> {
    DATABASE
        .get_or_init(|| {
            dotenvy::dotenv().ok();
            let url = std::env::var("TEST_DATABASE_URL")
                .expect("TEST_DATABASE_URL must be set in .env for tests");

            let database = Database::new(&url).expect("Failed to create test database pool");
            database
                .run_migrations()
                .expect("Failed to run migrations on test database");
            Arc::new(database)
        })
        .clone()
}

/// Clean all test tables - use at the start of each test
pub fn clean_test_db(database: &Database) {
    let mut conn = database
        .get_connection()
        .expect("Failed to get DB connection");

    diesel::sql_query("TRUNCATE TABLE ratings, box_office, movies RESTART IDENTITY CASCADE")
        .execute(&mut conn)
        .expect("Failed to clean test tables");
}

/// Global test mutex for serialization
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Acquire test lock to ensure tests run serially
/// Returns a guard that releases the lock when dropped
pub fn acquire_test_lock() -> MutexGuard<'static, ()> {
    // Handle poisoned mutex by recovering from panic
    match TEST_LOCK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
