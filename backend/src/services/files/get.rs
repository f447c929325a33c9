//! Resolution and streaming of stored lesson documents.
//!
//! The identifier format is `term-subject-lesson.pdf`. Decoding re-expands
//! the hyphens into path components; every component is validated before any
//! filesystem access, and the final path is canonicalized and checked to be
//! a descendant of the storage root. That one descendant check is the
//! traversal defense, whatever encoding the attacker picked.

use actix_web::{web, HttpRequest, HttpResponse};
use std::io::ErrorKind;
use std::path::Path;

use crate::auth::{self, Session};
use crate::config::AppConfig;
use crate::error::ApiError;

/// A successfully resolved document: its bytes plus the filename used for
/// the `Content-Disposition` header. The filename is rebuilt from the
/// validated segments, never echoed from raw input.
pub struct ResolvedFile {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// Checks the session, decodes the identifier, and reads the file.
///
/// Order matters: `Unauthorized` wins over every other failure, and no
/// filesystem access happens before the identifier has been validated.
pub fn resolve(
    storage_root: &Path,
    raw_name: &str,
    session: Option<&Session>,
) -> Result<ResolvedFile, ApiError> {
    if session.is_none() {
        return Err(ApiError::Unauthorized);
    }
    if raw_name.is_empty() {
        return Err(ApiError::BadRequest("empty file name".to_string()));
    }
    let stem = raw_name
        .strip_suffix(".pdf")
        .ok_or_else(|| ApiError::BadRequest("expected a .pdf name".to_string()))?;

    let parts: Vec<&str> = stem.split('-').collect();
    if parts.len() < 3 {
        return Err(ApiError::BadRequest("invalid file name format".to_string()));
    }
    let (term, subject, lesson) = (parts[0], parts[1], parts[2]);
    for segment in [term, subject, lesson] {
        if segment.is_empty()
            || segment.contains('.')
            || segment.contains('/')
            || segment.contains('\\')
            || segment.contains('%')
        {
            return Err(ApiError::BadRequest("invalid file name format".to_string()));
        }
    }

    let root = storage_root
        .canonicalize()
        .map_err(|e| ApiError::Internal(format!("storage root unavailable: {}", e)))?;
    let candidate = root.join(term).join(subject).join(format!("{}.pdf", lesson));
    let resolved = match candidate.canonicalize() {
        Ok(path) => path,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ApiError::NotFound(raw_name.to_string()))
        }
        Err(e) => return Err(ApiError::Internal(e.to_string())),
    };
    if !resolved.starts_with(&root) {
        return Err(ApiError::BadRequest("invalid file name format".to_string()));
    }

    let bytes = std::fs::read(&resolved).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ApiError::NotFound(raw_name.to_string()),
        _ => ApiError::Internal(e.to_string()),
    })?;
    if bytes.is_empty() {
        return Err(ApiError::NotFound(raw_name.to_string()));
    }

    Ok(ResolvedFile {
        bytes,
        filename: format!("{}-{}-{}.pdf", term, subject, lesson),
    })
}

/// `GET /api/files/{name}`: streams a stored PDF to an authenticated caller.
pub async fn process(
    req: HttpRequest,
    name: web::Path<String>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ApiError> {
    let conn = crate::db::open(&config.db_path)?;
    // A missing or stale cookie becomes `None` so the resolver can answer
    // 401; store failures during the lookup still propagate as themselves.
    let session = match auth::session_from_request(&conn, &req, config.session_ttl_secs) {
        Ok(session) => Some(session),
        Err(ApiError::Unauthorized) => None,
        Err(e) => return Err(e),
    };

    let file = resolve(&config.storage_root, &name, session.as_ref())?;
    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header((
            "Content-Disposition",
            format!("inline; filename=\"{}\"", file.filename),
        ))
        .insert_header(("Cache-Control", "no-store, no-cache, must-revalidate"))
        .insert_header(("Pragma", "no-cache"))
        .insert_header(("Expires", "0"))
        .body(file.bytes))
}
