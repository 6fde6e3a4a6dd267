//! HTTP server construction and lifecycle.

use std::io;
use std::net::SocketAddr;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, HttpServer, web};
use tracing_actix_web::TracingLogger;

use crate::config::AppConfig;
use crate::handlers;
use crate::middleware::error::json_error_handler;
use crate::observability::RequestIdMiddleware;
use crate::state::AppState;

/// Failures that prevent the server from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Blog post store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Failed to bind HTTP listener: {0}")]
    Bind(#[from] io::Error),
}

/// Build the actix application for `state`.
pub fn build_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(RequestIdMiddleware)
        .wrap(TracingLogger::default())
        .app_data(web::Data::new(state))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .configure(handlers::configure_routes)
}

/// A started HTTP server.
pub struct RunningServer {
    addr: SocketAddr,
    handle: actix_web::dev::ServerHandle,
    task: tokio::task::JoinHandle<io::Result<()>>,
}

impl RunningServer {
    /// Address the listener is bound to.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Stop accepting connections, drain in-flight requests and wait for exit.
    pub async fn close(self) -> io::Result<()> {
        tracing::info!(addr = %self.addr, "Closing server");
        self.handle.stop(true).await;
        self.wait().await
    }

    /// Wait until the server exits on its own (e.g. on a shutdown signal).
    pub async fn wait(self) -> io::Result<()> {
        self.task.await.map_err(io::Error::other)?
    }
}

/// Connect the configured store and start serving.
pub async fn run_server(config: &AppConfig) -> Result<RunningServer, StartupError> {
    let state = AppState::from_config(config.database.as_ref()).await?;
    serve(config, state)
}

/// Start serving `state` on the address in `config`.
///
/// Must be called from within an actix runtime.
pub fn serve(config: &AppConfig, state: AppState) -> Result<RunningServer, StartupError> {
    let mut server = HttpServer::new(move || build_app(state.clone()))
        .shutdown_timeout(10)
        .bind((config.host.as_str(), config.port))?;

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let addr = server
        .addrs()
        .first()
        .copied()
        .ok_or_else(|| io::Error::new(io::ErrorKind::AddrNotAvailable, "no bound address"))?;

    let server = server.run();
    let handle = server.handle();
    let task = actix_rt::spawn(server);

    tracing::info!(%addr, "HTTP server started");
    Ok(RunningServer { addr, handle, task })
}
