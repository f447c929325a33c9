//! Authenticated PDF serving.
//!
//! A single endpoint resolves opaque `term-subject-lesson.pdf` identifiers
//! to files under the configured storage root and streams them with caching
//! disabled. All validation lives in `get::resolve`.

mod get;

use actix_web::web;

const API_PATH: &str = "/api/files";

/// Configures and returns the Actix `Scope` for the file endpoint.
pub fn configure_routes() -> actix_web::Scope {
    web::scope(API_PATH).route("/{name}", web::get().to(get::process))
}
