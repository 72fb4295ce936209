//! HTTP server lifecycle - bind, serve, graceful stop.

use std::io;
use std::net::SocketAddr;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

/// A running server instance.
pub struct ServiceHandle {
    addr: SocketAddr,
    server: ServerHandle,
    task: tokio::task::JoinHandle<io::Result<()>>,
}

impl ServiceHandle {
    /// The address the server is actually bound to.
    ///
    /// Useful when the configured port is 0 and the OS picked one.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Gracefully stop the server, waiting for in-flight requests to finish.
    pub async fn stop(self) -> io::Result<()> {
        self.server.stop(true).await;
        self.task.await.map_err(io::Error::other)?
    }
}

/// Bind the configured address and start serving in a background task.
pub async fn start(config: AppConfig) -> io::Result<ServiceHandle> {
    let state = AppState::new(config.store.as_ref()).await;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    // Shutdown is driven through ServiceHandle::stop, not process signals.
    .disable_signals()
    .bind((config.host.as_str(), config.port))?;

    let addr = server
        .addrs()
        .first()
        .copied()
        .ok_or_else(|| io::Error::other("server bound no addresses"))?;

    let server = server.run();
    let handle = server.handle();

    // Spawn the server as a task so callers keep control of the runtime.
    let task = tokio::spawn(server);

    Ok(ServiceHandle {
        addr,
        server: handle,
        task,
    })
}
