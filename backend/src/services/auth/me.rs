use actix_web::{web, HttpRequest, HttpResponse};
use common::model::user::SessionInfo;

use crate::auth;
use crate::config::AppConfig;
use crate::error::ApiError;

/// `GET /api/auth/me`: who the session cookie belongs to. The frontend
/// probes this on startup to decide between the login form and the pages.
pub async fn process(
    req: HttpRequest,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ApiError> {
    let conn = crate::db::open(&config.db_path)?;
    let session = auth::session_from_request(&conn, &req, config.session_ttl_secs)?;
    Ok(HttpResponse::Ok().json(SessionInfo {
        username: session.username,
        role: session.role,
    }))
}
