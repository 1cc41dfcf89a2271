mod documents;
mod handlers;
mod payload;
mod samples;

use axum::{
    routing::{get, post},
    Router,
};
use std::env;
use std::sync::OnceLock;
use swot_engine::AnalysisService;
use tower_http::cors::{Any, CorsLayer};

static ANALYSIS_SERVICE: OnceLock<AnalysisService> = OnceLock::new();

#[tokio::main]
async fn main() {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    // Embed the knowledge corpus and build the index before serving traffic
    match AnalysisService::initialize().await {
        Ok(service) => {
            let _ = ANALYSIS_SERVICE.set(service);
            println!("SWOT analysis service initialized successfully");
        }
        Err(e) => {
            eprintln!("Failed to initialize SWOT analysis service: {}", e);
            std::process::exit(1);
        }
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(handlers::index_page))
        .route("/health", get(handlers::health))
        .route("/samples", get(handlers::list_samples))
        .route("/analyze", post(handlers::analyze))
        .route("/analyze/upload", post(handlers::analyze_upload))
        .layer(cors);

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await.unwrap();
    println!("Listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
