use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use backend::{auth, config, db, services};
use common::model::user::Role;
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        // SPA fallback: unknown paths get the shell, the client decides.
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

/// Creates the first admin account when the users table is empty, so a
/// fresh deployment is reachable. The password comes from `ADMIN_PASSWORD`.
fn seed_admin(conn: &rusqlite::Connection) -> rusqlite::Result<()> {
    let count: u32 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    if count > 0 {
        return Ok(());
    }
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string());
    if password == "admin" {
        warn!("users table is empty and ADMIN_PASSWORD is unset; seeding admin/admin");
    }
    if let Err(e) = auth::create_user(conn, "admin", &password, Role::Admin) {
        warn!("could not seed admin account: {}", e);
    }
    Ok(())
}

fn io_err(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = config::AppConfig::load();

    {
        let conn = db::open(&config.db_path).map_err(io_err)?;
        db::init_schema(&conn).map_err(io_err)?;
        seed_admin(&conn).map_err(io_err)?;
    }

    let port = config.port;
    info!("Server running on port {}", port);

    let app_config = web::Data::new(config);
    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(1024 * 1024)) // 1 MB
            .app_data(app_config.clone())
            .service(services::auth::configure_routes())
            .service(services::lessons::configure_routes())
            .service(services::files::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
