use tokio::{net::TcpListener, signal};

use crate::{
    db::{dish::DishStore, Database},
    error::Result,
    routes,
    settings::Settings,
    state::AppState,
};

/// Connect, serve until Ctrl+C or SIGTERM, then close the database.
pub async fn run(settings: Settings) -> Result<()> {
    tracing::info!("Initializing database connection...");
    let db = Database::connect(&settings.surrealdb).await?;

    let state = AppState::new(DishStore::new(db.client()));
    let router = routes::create_routes(state);

    let address = format!("0.0.0.0:{}", settings.http.port);
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("Dishbook started on {address}");
    tracing::info!(
        "Swagger UI available at: http://localhost:{}/swagger-ui",
        settings.http.port
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("HTTP server closed");

    db.close().await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
