//! Credential verification and cookie sessions.
//!
//! A session is an explicit value: handlers resolve the cookie to a
//! `Session` once and pass it into store/resolver calls, so there is no
//! ambient authentication state and tests can substitute callers freely.
//!
//! Passwords are stored as hex SHA-256 over a per-user random salt plus the
//! password. Session tokens are v4 UUIDs persisted in the `sessions` table
//! and handed to the browser as an `HttpOnly` cookie.

use actix_web::HttpRequest;
use common::model::user::Role;
use rusqlite::{params, Connection, OptionalExtension};
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::error::ApiError;

pub const SESSION_COOKIE: &str = "session";

/// An authenticated caller, resolved from the session cookie.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub role: Role,
}

pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Inserts a user row. Used by the admin user-creation endpoint and by test
/// fixtures; the username must be unique.
pub fn create_user(
    conn: &Connection,
    username: &str,
    password: &str,
    role: Role,
) -> Result<(), ApiError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "username and password must not be empty".to_string(),
        ));
    }
    let salt = Uuid::new_v4().to_string();
    conn.execute(
        "INSERT INTO users (id, username, password_hash, salt, role) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            Uuid::new_v4().to_string(),
            username,
            hash_password(&salt, password),
            salt,
            role.as_str()
        ],
    )
    .map_err(|e| match e {
        rusqlite::Error::SqliteFailure(f, _)
            if f.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            ApiError::Validation(format!("username {} already exists", username))
        }
        other => ApiError::from(other),
    })?;
    Ok(())
}

/// Checks a username/password pair. Unknown user and wrong password produce
/// the same `Unauthorized`, so the response does not leak which usernames
/// exist.
pub fn verify_credentials(
    conn: &Connection,
    username: &str,
    password: &str,
) -> Result<Role, ApiError> {
    let row: Option<(String, String, String)> = conn
        .query_row(
            "SELECT password_hash, salt, role FROM users WHERE username = ?1",
            params![username],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .optional()?;

    match row {
        Some((hash, salt, role)) if hash_password(&salt, password) == hash => {
            Ok(Role::parse(&role))
        }
        _ => Err(ApiError::Unauthorized),
    }
}

pub fn create_session(conn: &Connection, username: &str, role: Role) -> Result<Session, ApiError> {
    let token = Uuid::new_v4().to_string();
    conn.execute(
        "INSERT INTO sessions (token, username, role, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![token, username, role.as_str(), now_secs()],
    )?;
    Ok(Session {
        token,
        username: username.to_string(),
        role,
    })
}

pub fn delete_session(conn: &Connection, token: &str) -> Result<(), ApiError> {
    conn.execute("DELETE FROM sessions WHERE token = ?1", params![token])?;
    Ok(())
}

/// Looks a token up and enforces the TTL. An expired row is deleted and
/// treated the same as a missing one.
pub fn lookup_session(
    conn: &Connection,
    token: &str,
    ttl_secs: i64,
) -> Result<Session, ApiError> {
    let row: Option<(String, String, i64)> = conn
        .query_row(
            "SELECT username, role, created_at FROM sessions WHERE token = ?1",
            params![token],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .optional()?;

    match row {
        Some((username, role, created_at)) => {
            if now_secs() - created_at > ttl_secs {
                delete_session(conn, token)?;
                return Err(ApiError::Unauthorized);
            }
            Ok(Session {
                token: token.to_string(),
                username,
                role: Role::parse(&role),
            })
        }
        None => Err(ApiError::Unauthorized),
    }
}

/// Resolves the caller from the request's session cookie.
pub fn session_from_request(
    conn: &Connection,
    req: &HttpRequest,
    ttl_secs: i64,
) -> Result<Session, ApiError> {
    let cookie = req.cookie(SESSION_COOKIE).ok_or(ApiError::Unauthorized)?;
    lookup_session(conn, cookie.value(), ttl_secs)
}
