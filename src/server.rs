// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Result;
use axum::{routing::get, Router};
use log::info;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::api::shared::handle_panic;
use crate::config::ServerConfig;
use crate::models::seed::{seed_doodads, seed_widgets};
use crate::models::{Doodad, Widget};
use crate::repository::Repository;

/// The HTTP server and the repositories it serves.
pub struct WidgetServer {
    address: String,
    widgets: Repository<Widget>,
    doodads: Repository<Doodad>,
}

impl WidgetServer {
    /// Create a server from `config`, seeding the stores if `seedData` is set.
    pub fn new(config: &ServerConfig) -> Self {
        let (widgets, doodads) = if config.seed_data {
            info!("Seeding sample widgets and doodads");
            (
                Repository::with_records(seed_widgets()),
                Repository::with_records(seed_doodads()),
            )
        } else {
            (Repository::new(), Repository::new())
        };

        Self::with_repositories(config, widgets, doodads)
    }

    /// Create a server over existing repositories.
    pub fn with_repositories(
        config: &ServerConfig,
        widgets: Repository<Widget>,
        doodads: Repository<Doodad>,
    ) -> Self {
        Self {
            address: config.bind_address(),
            widgets,
            doodads,
        }
    }

    pub fn widgets(&self) -> &Repository<Widget> {
        &self.widgets
    }

    pub fn doodads(&self) -> &Repository<Doodad> {
        &self.doodads
    }

    /// The `host:port` address from the config.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Build the complete application router.
    pub fn app(&self) -> Router {
        with_middleware(self.routes())
    }

    /// Health, resource and documentation routes, without middleware.
    pub fn routes(&self) -> Router {
        Router::new()
            .route("/health", get(api::handlers::health_check))
            .merge(api::build_router(self.widgets.clone(), self.doodads.clone()))
            .merge(SwaggerUi::new("/docs").url("/openapi.json", api::ApiDoc::openapi()))
    }

    /// Serve until Ctrl-C is received.
    pub async fn run(self) -> Result<()> {
        let addr = self.address.clone();
        let app = self.app();
        info!(
            "Serving {} widgets and {} doodads",
            self.widgets.len().await,
            self.doodads.len().await
        );

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!("Listening on http://{addr}");
        info!("Swagger UI available at http://{addr}/docs/");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

/// Wrap `router` in the server-wide middleware: panic recovery, request
/// tracing and CORS.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_seeds_when_enabled() {
        let server = WidgetServer::new(&ServerConfig::default());

        assert_eq!(server.widgets().len().await, 2);
        assert_eq!(server.doodads().len().await, 2);
        assert_eq!(server.address(), "127.0.0.1:9000");
    }

    #[tokio::test]
    async fn test_new_without_seed_data() {
        let config = ServerConfig {
            seed_data: false,
            ..Default::default()
        };
        let server = WidgetServer::new(&config);

        assert!(server.widgets().is_empty().await);
        assert!(server.doodads().is_empty().await);
    }

    #[test]
    fn test_address_follows_config() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9100,
            ..Default::default()
        };

        let server = WidgetServer::new(&config);

        assert_eq!(server.address(), config.bind_address());
        assert_eq!(server.address(), "0.0.0.0:9100");
    }
}
