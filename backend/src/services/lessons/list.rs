use actix_web::{web, HttpRequest, HttpResponse};

use crate::auth;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::store::lessons;

/// `GET /api/lessons/{semester}/{subject}`: the partition's materials in
/// display order. Browsing requires a session but no particular role.
pub async fn process(
    req: HttpRequest,
    path: web::Path<(String, String)>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ApiError> {
    let (semester, subject) = path.into_inner();
    let conn = crate::db::open(&config.db_path)?;
    auth::session_from_request(&conn, &req, config.session_ttl_secs)?;

    let result = lessons::list(&conn, &semester, &subject)?;
    Ok(HttpResponse::Ok().json(result))
}
