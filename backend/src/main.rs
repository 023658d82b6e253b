//! Static host for the supplier web client.
//!
//! Serves the frontend bundle embedded at build time. A client route without a
//! matching file gets `index.html`, so `/` and `/cadastrar_fornecedor` both
//! load the client, which then picks the page from the URL. Missing files
//! (anything under `assets/` or with an extension) get a plain 404, so the
//! client's logo request sees the failure.

mod config;

use crate::config::ServerConfig;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{debug, error, info};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Maps a request path to the embedded file to look up first.
fn embedded_path(request_path: &str) -> &str {
    let path = request_path.trim_start_matches('/');
    if path.is_empty() {
        "index.html"
    } else {
        path
    }
}

/// `true` for paths naming a file rather than a client route.
fn is_file_request(path: &str) -> bool {
    let path = path.trim_start_matches('/');
    let last_segment = path.rsplit('/').next().unwrap_or_default();
    path.starts_with("assets/") || last_segment.contains('.')
}

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let file_path = embedded_path(req.path());

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None if is_file_request(req.path()) => {
            debug!("No embedded file for {}", req.path());
            HttpResponse::NotFound().body("Not Found")
        }
        None => {
            debug!("No embedded file for {}, serving index.html", req.path());
            match STATIC_DIR.get_file("index.html") {
                Some(index) => HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(index.contents().to_vec()),
                None => HttpResponse::NotFound().body("Not Found"),
            }
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(|e| {
        error!("Configuração inválida: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    let url = config.url();

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url_clone) {
                error!("Could not open browser: {}", e);
            }
        });
    }

    if STATIC_DIR.get_file("index.html").is_none() {
        error!("Frontend bundle not embedded; build frontend/dist before the backend");
    }

    info!("Server running at {}", url);

    HttpServer::new(|| App::new().default_service(web::route().to(serve_embedded)))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
