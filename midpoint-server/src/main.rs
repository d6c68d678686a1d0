use midpoint_server::config::ServerConfig;
use midpoint_server::graph::load_graph;
use midpoint_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("midpoint_server=info,tower_http=info")),
        )
        .init();

    // Read configuration from environment
    let config = ServerConfig::from_env().expect("Invalid configuration");

    // Load the graph once; it is read-only from here on (fail fast if unavailable)
    info!(path = %config.graph_path.display(), "Loading graph");
    let graph = load_graph(&config.graph_path).expect("Failed to load graph");
    info!(
        stations = graph.len(),
        edges = graph.edge_count(),
        "Graph loaded"
    );

    // Build app state
    let state = AppState::new(graph, config.midpoint.clone());

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = config.bind_addr;
    info!("Midpoint server listening on http://{addr}");
    info!("  GET  /health        - Health check");
    info!("  GET  /api/stations  - Search stations");
    info!("  GET  /api/graph     - Graph summary");
    info!("  POST /midpoint      - Find a meeting station");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
