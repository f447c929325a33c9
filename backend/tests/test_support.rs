//! Shared fixtures for the HTTP integration tests: a temporary database and
//! storage root, seeded accounts, and a logged-in session cookie helper.

// Each integration test binary compiles its own copy and uses a subset.
#![allow(dead_code)]

use actix_web::web;
use backend::auth;
use backend::config::AppConfig;
use common::model::user::Role;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // Held so the directory outlives the test.
    #[allow(dead_code)]
    pub dir: TempDir,
    pub config: web::Data<AppConfig>,
}

/// Creates an isolated environment: fresh database file, empty storage
/// root, and two accounts (`sensei`/admin, `seito`/user).
pub fn setup() -> TestEnv {
    let dir = tempfile::tempdir().unwrap();
    let db_path: PathBuf = dir.path().join("test.sqlite");
    let storage_root = dir.path().join("pdfs");
    std::fs::create_dir_all(&storage_root).unwrap();

    let conn = backend::db::open(&db_path).unwrap();
    backend::db::init_schema(&conn).unwrap();
    auth::create_user(&conn, "sensei", "correct-horse", Role::Admin).unwrap();
    auth::create_user(&conn, "seito", "battery-staple", Role::User).unwrap();

    let config = web::Data::new(AppConfig {
        port: 0,
        db_path,
        storage_root,
        session_ttl_secs: 3600,
    });
    TestEnv { dir, config }
}

/// Opens a session for the given seeded account and returns the cookie
/// token, bypassing the login endpoint (covered by its own tests).
pub fn session_token(env: &TestEnv, username: &str) -> String {
    let conn = backend::db::open(&env.config.db_path).unwrap();
    let role = if username == "sensei" { Role::Admin } else { Role::User };
    auth::create_session(&conn, username, role).unwrap().token
}

/// Builds the same app the server runs, minus the embedded static assets.
#[macro_export]
macro_rules! test_app {
    ($env:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data($env.config.clone())
                .service(backend::services::auth::configure_routes())
                .service(backend::services::lessons::configure_routes())
                .service(backend::services::files::configure_routes()),
        )
        .await
    };
}
