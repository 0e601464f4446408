use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use bitacora::api;
use bitacora::config::AppConfig;
use bitacora::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bitacora=info,tower_http=info".into()),
        )
        .init();

    tracing::info!("Starting Bitácora search server...");

    let config = AppConfig::from_env();
    let addr = config.addr.clone();
    let public_dir = config.public_dir.clone();

    tracing::info!(
        "Serving corpus from {} and static files from {}",
        config.index_path.display(),
        public_dir.display()
    );

    let app_state = AppState { config };

    // Build the Axum router: the search API plus the static public
    // directory (which also exposes the corpus JSON to the client widget).
    let app = Router::new()
        .route("/api/search", get(api::search::search_handler))
        .fallback_service(ServeDir::new(&public_dir))
        .with_state(app_state);

    // Start the server
    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
