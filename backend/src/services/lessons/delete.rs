use actix_web::{web, HttpRequest, HttpResponse};
use log::info;

use crate::auth;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::store::lessons;

/// `DELETE /api/lessons/{id}`: removes one material. Renumbering the
/// survivors is the client's job via `POST /api/lessons/reorder`.
pub async fn process(
    req: HttpRequest,
    id: web::Path<String>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ApiError> {
    let conn = crate::db::open(&config.db_path)?;
    let session = auth::session_from_request(&conn, &req, config.session_ttl_secs)?;

    lessons::remove(&conn, &session, &id)?;
    info!("{} deleted lesson {}", session.username, id);
    Ok(HttpResponse::Ok().body("deleted"))
}
