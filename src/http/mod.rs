//! HTTP protocol implementation.
//!
//! This module implements the single-shot HTTP/1.1 exchange the server
//! speaks: one request line in, one response out, then the connection closes.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The connection handler implementing the request-response state machine
//! - **`parser`**: Extracts the method token and target path from the raw request bytes
//! - **`request`**: Parsed request representation and method tokens
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! Each accepted connection walks a strictly linear state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │  Accepted   │
//!        └──────┬──────┘
//!               │ one bounded read
//!               ▼
//!        ┌─────────────┐
//!        │    Read     │ ← read errors yield an empty request
//!        └──────┬──────┘
//!               │ request line parsed (never fails)
//!               ▼
//!        ┌─────────────┐
//!        │   Parsed    │
//!        └──────┬──────┘
//!               │ file loaded or 404 fallback
//!               ▼
//!        ┌─────────────┐
//!        │  Resolved   │
//!        └──────┬──────┘
//!               │ response written (errors logged)
//!               ▼
//!        ┌─────────────┐
//!        │  Responded  │
//!        └──────┬──────┘
//!               │ stream shut down unconditionally
//!               ▼
//!        ┌─────────────┐
//!        │   Closed    │
//!        └─────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use hearth::content::ContentResolver;
//! use hearth::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8000").await?;
//!     let resolver = Arc::new(ContentResolver::new(".", "index.html"));
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let served = Connection::new(socket, resolver.clone(), 1024).run().await;
//!         println!("{} {}", served.status.as_u16(), served.path);
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
