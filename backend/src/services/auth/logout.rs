use actix_web::cookie::time::Duration;
use actix_web::cookie::Cookie;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::auth;
use crate::config::AppConfig;
use crate::error::ApiError;

/// `POST /api/auth/logout`: drops the server-side session row and expires
/// the cookie. Logging out without a session is not an error.
pub async fn process(
    req: HttpRequest,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ApiError> {
    let conn = crate::db::open(&config.db_path)?;
    if let Some(cookie) = req.cookie(auth::SESSION_COOKIE) {
        auth::delete_session(&conn, cookie.value())?;
    }

    let expired = Cookie::build(auth::SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .max_age(Duration::seconds(0))
        .finish();
    Ok(HttpResponse::Ok().cookie(expired).body("logged out"))
}
