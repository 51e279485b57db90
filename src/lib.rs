//! Hearth - Minimal Static File Server
//!
//! Core library for request parsing, content resolution and response framing.

pub mod config;
pub mod content;
pub mod http;
pub mod server;
