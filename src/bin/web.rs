//! Single binary web server: the persistence/transport layer around the
//! engine. Serves the dataset document as a whole (GET/POST) backed by a JSON
//! file, plus the static UI.
//! Run with: cargo run --bin web
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), DATA_FILE (path).

use actix_files::Files;
use actix_web::{
    get, post,
    web::{Data, Json},
    App, HttpResponse, HttpServer, Responder,
};
use backgammon_tournament_web::Dataset;
use std::path::PathBuf;

/// Where the document lives on disk. The whole file is replaced on every save.
struct DataFile {
    path: PathBuf,
}

impl DataFile {
    fn load(&self) -> std::io::Result<Dataset> {
        if !self.path.exists() {
            return Ok(Dataset::new());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    fn save(&self, data: &Dataset) -> std::io::Result<()> {
        let raw = serde_json::to_string_pretty(data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(&self.path, raw)
    }
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "backgammon-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Current document; a fresh default when no file exists yet.
#[get("/get-data")]
async fn get_data(file: Data<DataFile>) -> HttpResponse {
    match file.load() {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => {
            log::error!("Failed to load dataset: {}", e);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Failed to load data" }))
        }
    }
}

/// Replace the document. The client sends the whole dataset after every
/// mutation; there is no incremental diffing. Point settings must be
/// positive. A failed write reports 500 but the client keeps its in-memory
/// state authoritative and may simply retry the save.
#[post("/save-data")]
async fn save_data(file: Data<DataFile>, body: Json<Dataset>) -> HttpResponse {
    if !body.settings.points.is_valid() {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": "Point values must be positive" }));
    }
    match file.save(&body) {
        Ok(()) => {
            log::info!(
                "Dataset saved: {} player(s), {} tournament(s)",
                body.players.len(),
                body.tournaments.len()
            );
            HttpResponse::Ok().json(serde_json::json!({ "success": true }))
        }
        Err(e) => {
            log::error!("Failed to save dataset: {}", e);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Failed to save data" }))
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_file = std::env::var("DATA_FILE").unwrap_or_else(|_| "data.json".to_string());
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{} (data: {})", bind.0, bind.1, data_file);

    let file = Data::new(DataFile {
        path: PathBuf::from(data_file),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(file.clone())
            .service(api_health)
            .service(favicon)
            .service(get_data)
            .service(save_data)
            .service(Files::new("/", "static").index_file("index.html"))
    })
    .bind(bind)?
    .run()
    .await
}
