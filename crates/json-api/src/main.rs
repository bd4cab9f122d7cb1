//! Stayshop JSON API Server

use std::process::ExitCode;

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use stayshop_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

mod admin;
mod cart;
mod config;
mod customers;
mod extensions;
mod healthcheck;
mod observability;
mod orders;
mod products;
mod rooms;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Stayshop JSON API Server entry point
#[tokio::main]
pub async fn main() -> ExitCode {
    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(error) => {
            #[expect(
                clippy::print_stderr,
                reason = "logging not initialized yet, must use eprintln for config errors"
            )]
            {
                eprintln!("Configuration error: {error}");
            }

            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "the subscriber failed to install, so there is nowhere else to log"
        )]
        {
            eprintln!("{error}");
        }

        return ExitCode::FAILURE;
    }

    let cors = match config.cors.handler() {
        Ok(cors) => cors,
        Err(cors_error) => {
            error!("invalid FRONTEND_URL: {cors_error}");

            return ExitCode::FAILURE;
        }
    };

    let app = match AppContext::from_settings(config.app_settings()).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            return ExitCode::FAILURE;
        }
    };

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(State::from_app_context(app)))
        .push(router::app_router());

    let doc = OpenApi::new("Stayshop API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "customer_id",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-Customer-Id"))),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();
    let grace = config.server.shutdown_grace();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, grace).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // CORS sits on the service so preflight requests are answered even
    // where no route accepts OPTIONS.
    server.serve(Service::new(router).hoop(cors)).await;

    ExitCode::SUCCESS
}
