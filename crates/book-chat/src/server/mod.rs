//! HTTP server for the book chat service

pub mod routes;
pub mod state;

use axum::{
    routing::{get_service, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, services::ServeFile, trace::TraceLayer};

use crate::error::{Error, Result};
use state::AppState;

/// Chat HTTP server
pub struct ChatServer {
    state: AppState,
}

impl ChatServer {
    /// Create a server over fully initialized state
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Build the router: the static page at `/` and the chat endpoint
    pub fn build_router(&self) -> Router {
        let server_config = &self.state.config().server;

        let router = Router::new()
            .route(
                "/",
                get_service(ServeFile::new(&server_config.index_page)),
            )
            .route("/chatbot", post(routes::chatbot::chatbot))
            .with_state(self.state.clone())
            .layer(TraceLayer::new_for_http());

        if server_config.enable_cors {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = self
            .address()
            .parse()
            .map_err(|e| Error::config(format!("Invalid address: {}", e)))?;

        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| Error::config(format!("Failed to bind {}: {}", addr, e)))?;

        tracing::info!("Starting chat server on http://{}", addr);

        axum::serve(listener, router)
            .await
            .map_err(|e| Error::internal(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Get the server address
    pub fn address(&self) -> String {
        let server = &self.state.config().server;
        format!("{}:{}", server.host, server.port)
    }
}
