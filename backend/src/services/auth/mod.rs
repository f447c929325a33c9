//! Login, logout, session introspection, and admin user creation under
//! `/api/auth`. The session cookie is `HttpOnly`; its token is the only
//! thing the browser ever holds.

mod login;
mod logout;
mod me;
mod users;

use actix_web::web;

const API_PATH: &str = "/api/auth";

/// Configures and returns the Actix `Scope` for the auth routes.
pub fn configure_routes() -> actix_web::Scope {
    web::scope(API_PATH)
        .route("/login", web::post().to(login::process))
        .route("/logout", web::post().to(logout::process))
        .route("/me", web::get().to(me::process))
        .route("/users", web::post().to(users::process))
}
