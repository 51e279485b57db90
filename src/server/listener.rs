use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tracing::{debug, error, info};

use crate::config::{Config, ServeMode, ServerConfig};
use crate::content::ContentResolver;
use crate::http::connection::Connection;

/// Binds the listening socket with address reuse and the configured backlog.
pub async fn bind(cfg: &ServerConfig) -> anyhow::Result<TcpListener> {
    let addr = tokio::net::lookup_host(&cfg.listen_addr)
        .await
        .with_context(|| format!("invalid listen address {}", cfg.listen_addr))?
        .next()
        .with_context(|| format!("no address found for {}", cfg.listen_addr))?;

    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()
    } else {
        TcpSocket::new_v6()
    }
    .context("failed to create socket")?;

    socket
        .set_reuseaddr(true)
        .context("failed to set socket options")?;
    socket
        .bind(addr)
        .with_context(|| format!("bind failed on {}", addr))?;

    socket.listen(cfg.backlog).context("error in listen")
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(&cfg.server).await?;
    info!("Server started on {}", listener.local_addr()?);

    serve(listener, cfg).await
}

/// Accepts connections until the future is dropped. Accept errors are
/// logged and skipped.
pub async fn serve(listener: TcpListener, cfg: &Config) -> anyhow::Result<()> {
    let resolver = Arc::new(ContentResolver::new(
        cfg.static_files.root.clone(),
        cfg.static_files.index.clone(),
    ));

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Error accepting connection: {}", e);
                continue;
            }
        };
        debug!("Accepted connection from {}", peer);

        let conn = Connection::new(socket, resolver.clone(), cfg.server.read_buffer_size);

        match cfg.server.mode {
            ServeMode::Sequential => handle(conn, peer).await,
            ServeMode::Concurrent => {
                tokio::spawn(handle(conn, peer));
            }
        }
    }
}

async fn handle(conn: Connection<TcpStream>, peer: SocketAddr) {
    let served = conn.run().await;

    info!(
        %peer,
        method = %served.method,
        path = %served.path,
        status = served.status.as_u16(),
        outcome = ?served.outcome,
        bytes = served.bytes,
        delivered = served.delivered,
        "Served request"
    );
}
