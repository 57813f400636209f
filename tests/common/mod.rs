#![allow(dead_code)]

use std::sync::Arc;

use log::o;
use once_cell::sync::OnceCell;
use tempfile::TempDir;

use civic::db::SqliteDb;
use civic::environment::{Config, Environment};

static SLOG_SCOPE_GUARD: OnceCell<slog_scope::GlobalLoggerGuard> = OnceCell::new();

fn initialize_global_logger() {
    SLOG_SCOPE_GUARD.get_or_init(|| slog_envlogger::init().expect("initialize slog-envlogger"));
}

/// Opens a fresh database in a temporary directory. The directory is
/// removed when the returned `TempDir` is dropped.
pub async fn make_db() -> (TempDir, SqliteDb) {
    let dir = tempfile::tempdir().expect("create temporary directory");

    let db = SqliteDb::connect(dir.path().join("complaints.db"))
        .await
        .expect("open database");
    db.initialize().await.expect("initialize database");

    (dir, db)
}

pub async fn make_environment(test_name: impl Into<String>) -> (TempDir, Environment) {
    initialize_global_logger();

    let logger = slog_scope::logger().new(o!("test" => test_name.into()));
    let (dir, db) = make_db().await;

    (
        dir,
        Environment::new(Arc::new(logger), Arc::new(db), Config::default()),
    )
}
