use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::content::{ContentResolver, Outcome, ResolvedContent};
use crate::http::parser::parse_http_request;
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;

/// One accepted client connection, served exactly once.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    read_limit: usize,
    resolver: Arc<ContentResolver>,
}

pub enum ConnectionState {
    Accepted,
    Read(BytesMut),
    Parsed(Request),
    Resolved(Request, ResolvedContent),
    Responded(ServedResponse),
    Closed(ServedResponse),
}

/// Summary of what a connection was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServedResponse {
    pub method: String,
    /// Path the response was resolved from
    pub path: String,
    pub status: StatusCode,
    pub outcome: Outcome,
    /// Size of the serialized response
    pub bytes: usize,
    /// Whether the full response reached the stream
    pub delivered: bool,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, resolver: Arc<ContentResolver>, read_limit: usize) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(read_limit),
            read_limit,
            resolver,
        }
    }

    /// Drives the connection from `Accepted` to `Closed`.
    ///
    /// Always answers with a response unless the write itself fails, and
    /// always shuts the stream down afterwards.
    pub async fn run(mut self) -> ServedResponse {
        let mut state = ConnectionState::Accepted;

        loop {
            state = match state {
                ConnectionState::Accepted => ConnectionState::Read(self.read_request().await),

                ConnectionState::Read(raw) => ConnectionState::Parsed(parse_http_request(&raw)),

                ConnectionState::Parsed(req) => {
                    let path = req.effective_path(self.resolver.index());
                    let content = self.resolver.resolve(path).await;
                    ConnectionState::Resolved(req, content)
                }

                ConnectionState::Resolved(req, content) => {
                    ConnectionState::Responded(self.respond(req, content).await)
                }

                ConnectionState::Responded(served) => {
                    if let Err(e) = self.stream.shutdown().await {
                        debug!("Error closing connection: {}", e);
                    }
                    ConnectionState::Closed(served)
                }

                ConnectionState::Closed(served) => return served,
            };
        }
    }

    /// Performs the single bounded read. Errors and EOF produce an empty
    /// request, which later resolves to the index document.
    async fn read_request(&mut self) -> BytesMut {
        let mut temp = vec![0u8; self.read_limit];

        match self.stream.read(&mut temp).await {
            Ok(0) => debug!("Client sent no request bytes"),
            Ok(n) => self.buffer.extend_from_slice(&temp[..n]),
            Err(e) => warn!("Error reading request: {}", e),
        }

        self.buffer.split()
    }

    async fn respond(&mut self, req: Request, content: ResolvedContent) -> ServedResponse {
        let path = req.effective_path(self.resolver.index()).to_string();
        let outcome = content.outcome;

        let mut response = Response::from_content(content);
        if req.is_head() {
            response = response.into_head();
        }

        let mut writer = ResponseWriter::new(&response);
        let delivered = match writer.write_to_stream(&mut self.stream).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    path = %path,
                    written = writer.written(),
                    total = writer.len(),
                    "Error writing response: {}", e
                );
                false
            }
        };

        ServedResponse {
            method: req.method,
            path,
            status: response.status,
            outcome,
            bytes: writer.len(),
            delivered,
        }
    }
}
