#[tokio::main]
async fn main() {
    stockroom_observability::init();

    let config = stockroom_core::AppConfig::from_env();
    let bind_addr = config.bind_addr.clone();

    // Keep the worker handle alive for the whole process; the notifier
    // thread stops when the process does.
    let app = stockroom_api::build_app(&config);
    let _notifier = app.notifier;

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app.router).await.unwrap();
}
