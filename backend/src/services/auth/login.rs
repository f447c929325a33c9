use actix_web::cookie::Cookie;
use actix_web::{web, HttpResponse};
use common::model::user::SessionInfo;
use common::requests::LoginRequest;
use log::info;

use crate::auth;
use crate::config::AppConfig;
use crate::error::ApiError;

/// `POST /api/auth/login`: verifies the credentials and hands out a fresh
/// session cookie. Unknown users and wrong passwords are indistinguishable
/// from the outside.
pub async fn process(
    payload: web::Json<LoginRequest>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ApiError> {
    let conn = crate::db::open(&config.db_path)?;
    let role = auth::verify_credentials(&conn, &payload.username, &payload.password)?;
    let session = auth::create_session(&conn, &payload.username, role)?;
    info!("{} logged in", session.username);

    let cookie = Cookie::build(auth::SESSION_COOKIE, session.token.clone())
        .path("/")
        .http_only(true)
        .finish();
    Ok(HttpResponse::Ok().cookie(cookie).json(SessionInfo {
        username: session.username,
        role: session.role,
    }))
}
