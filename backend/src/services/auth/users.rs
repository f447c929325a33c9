use actix_web::{web, HttpRequest, HttpResponse};
use common::model::user::Role;
use log::info;
use serde::Deserialize;

use crate::auth;
use crate::config::AppConfig;
use crate::error::ApiError;

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<Role>,
}

/// `POST /api/auth/users`: admin-only account creation. Accounts without
/// an explicit role become plain users.
pub async fn process(
    req: HttpRequest,
    payload: web::Json<CreateUserRequest>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ApiError> {
    let conn = crate::db::open(&config.db_path)?;
    let session = auth::session_from_request(&conn, &req, config.session_ttl_secs)?;
    if !session.role.is_admin() {
        return Err(ApiError::Forbidden);
    }

    let role = payload.role.unwrap_or(Role::User);
    auth::create_user(&conn, &payload.username, &payload.password, role)?;
    info!("{} created account {}", session.username, payload.username);
    Ok(HttpResponse::Ok().body("created"))
}
