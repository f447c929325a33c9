use actix_web::{web, HttpRequest, HttpResponse};
use common::requests::CreateLessonRequest;
use log::info;

use crate::auth;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::store::lessons;

/// `POST /api/lessons`: appends a material to the end of its partition.
/// The store assigns the id and the position and enforces the admin role.
pub async fn process(
    req: HttpRequest,
    payload: web::Json<CreateLessonRequest>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ApiError> {
    let mut conn = crate::db::open(&config.db_path)?;
    let session = auth::session_from_request(&conn, &req, config.session_ttl_secs)?;

    let lesson = lessons::create(
        &mut conn,
        &session,
        &payload.semester,
        &payload.subject,
        &payload.title,
        &payload.url,
    )?;
    info!(
        "{} added lesson '{}' to {}/{} at position {}",
        session.username, lesson.title, lesson.semester, lesson.subject, lesson.order
    );
    Ok(HttpResponse::Ok().json(lesson))
}
