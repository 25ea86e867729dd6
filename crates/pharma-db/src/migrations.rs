//! # Database Migrations
//!
//! Embedded SQL migrations for Pharma POS.
//!
//! ## How Migrations Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Migration Process                             │
//! │                                                                     │
//! │  App Startup                                                        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Check _sqlx_migrations table (created on first run)                │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Compare embedded migrations vs applied                             │
//! │       │                                                             │
//! │       ├── 001_initial_schema.sql ✓ (already applied)                │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Run pending migrations in order, record each one                   │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Adding New Migrations
//!
//! 1. Create a new file in `migrations/sqlite/` with the next sequence
//!    number (`NNN_description.sql`)
//! 2. Write idempotent SQL (use `IF NOT EXISTS` where possible)
//! 3. **NEVER** modify existing migrations - always add new ones

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

/// Embedded migrations from the `migrations/sqlite` directory.
///
/// The `sqlx::migrate!()` macro embeds all SQL files from the
/// directory into the binary at compile time; no runtime file access
/// is needed.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Runs all pending database migrations.
///
/// ## Safety
/// - Idempotent: safe to run on every startup; a second run neither
///   fails nor alters existing rows
/// - Transactional: each migration runs in a transaction
/// - Ordered: migrations run in filename order (001, 002, ...)
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("All migrations applied");
    Ok(())
}

/// Returns (total embedded, applied) migration counts.
///
/// For diagnostics and health checks.
pub async fn migration_status(pool: &SqlitePool) -> DbResult<(usize, usize)> {
    let total = MIGRATOR.migrations.len();

    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await
        .unwrap_or(0);

    Ok((total, applied as usize))
}
