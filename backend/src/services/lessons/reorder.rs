use actix_web::{web, HttpRequest, HttpResponse};
use common::model::lesson::Lesson;
use log::info;

use crate::auth;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::store::lessons;

/// `POST /api/lessons/reorder`: persists the posted sequence as the new
/// order of its partition. The batch commits fully or not at all, so a
/// failed call leaves the stored order untouched and the client can roll
/// its optimistic state back safely.
pub async fn process(
    req: HttpRequest,
    payload: web::Json<Vec<Lesson>>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ApiError> {
    let mut conn = crate::db::open(&config.db_path)?;
    let session = auth::session_from_request(&conn, &req, config.session_ttl_secs)?;

    lessons::reorder(&mut conn, &session, &payload)?;
    info!(
        "{} reordered {} lessons in {}/{}",
        session.username,
        payload.len(),
        payload[0].semester,
        payload[0].subject
    );
    Ok(HttpResponse::Ok().body("reordered"))
}
