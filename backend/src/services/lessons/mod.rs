//! # Lesson Material Service
//!
//! Groups every endpoint operating on ordered lesson materials under
//! `/api/lessons`. Handlers stay thin: they resolve the caller's session,
//! open a database connection, and delegate to `crate::store::lessons`,
//! which owns the ordering semantics and the role checks.
//!
//! ## Registered routes
//!
//! *   **`GET /{semester}/{subject}`** (`list::process`): the partition's
//!     materials, position ascending. Any authenticated caller.
//! *   **`POST /`** (`create::process`): appends a material to the end of
//!     its partition and returns the stored record. Admin only.
//! *   **`POST /reorder`** (`reorder::process`): persists a full new
//!     sequence for one partition as an atomic batch. Admin only.
//! *   **`DELETE /{id}`** (`delete::process`): removes one material. Admin
//!     only; the client issues a follow-up reorder to renumber survivors.

mod create;
mod delete;
mod list;
mod reorder;

use actix_web::web;

const API_PATH: &str = "/api/lessons";

/// Configures and returns the Actix `Scope` for all lesson routes.
pub fn configure_routes() -> actix_web::Scope {
    web::scope(API_PATH)
        .route("", web::post().to(create::process))
        .route("/reorder", web::post().to(reorder::process))
        .route("/{semester}/{subject}", web::get().to(list::process))
        .route("/{id}", web::delete().to(delete::process))
}
