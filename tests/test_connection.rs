mod common;

use std::sync::Arc;

use common::{header_count, header_value, split_response, Site, INDEX_HTML};
use hearth::content::{ContentResolver, MissReason, Outcome};
use hearth::http::connection::{Connection, ServedResponse};
use hearth::http::response::StatusCode;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Sends `request` over an in-memory stream and returns the raw response.
async fn exchange(site: &Site, request: &[u8]) -> (ServedResponse, Vec<u8>) {
    let resolver = Arc::new(ContentResolver::new(site.root(), "index.html"));
    let (mut client, server) = tokio::io::duplex(64 * 1024);

    client.write_all(request).await.unwrap();

    let conn = Connection::new(server, resolver, 1024);
    let mut raw = Vec::new();
    let (served, read) = tokio::join!(conn.run(), client.read_to_end(&mut raw));
    read.unwrap();

    (served, raw)
}

fn site() -> Site {
    Site::new("connection")
        .file("index.html", INDEX_HTML)
        .file("style.css", b"body { margin: 0; }")
}

#[tokio::test]
async fn test_serves_existing_index() {
    let site = site();
    let (served, raw) = exchange(&site, b"GET /index.html HTTP/1.1\r\n\r\n").await;
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 200 OK"));
    assert_eq!(header_value(&head, "Content-Type"), Some("text/html"));
    assert_eq!(body, INDEX_HTML);
    assert_eq!(body.len(), 50);
    assert_eq!(served.status, StatusCode::Ok);
    assert!(served.delivered);
    assert_eq!(served.bytes, raw.len());
}

#[tokio::test]
async fn test_missing_file_gets_404_page() {
    let site = site();
    let (served, raw) = exchange(&site, b"GET /missing.css HTTP/1.1\r\n\r\n").await;
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 404 Not Found"));
    assert_eq!(header_value(&head, "Content-Type"), Some("text/html"));
    assert!(String::from_utf8_lossy(&body).contains("404 Page Not Found"));
    assert_eq!(served.outcome, Outcome::Missing(MissReason::NotFound));
    assert_eq!(served.path, "missing.css");
}

#[tokio::test]
async fn test_empty_path_serves_index() {
    let site = site();
    let (served, raw) = exchange(&site, b"GET  HTTP/1.1\r\n\r\n").await;
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 200 OK"));
    assert_eq!(body, INDEX_HTML);
    assert_eq!(served.path, "index.html");
}

#[tokio::test]
async fn test_root_path_serves_index() {
    let site = site();
    let (_, raw) = exchange(&site, b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
    let (_, body) = split_response(&raw);

    assert_eq!(body, INDEX_HTML);
}

#[tokio::test]
async fn test_css_content_type() {
    let site = site();
    let (_, raw) = exchange(&site, b"GET /style.css HTTP/1.1\r\n\r\n").await;
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 200 OK"));
    assert_eq!(header_value(&head, "Content-Type"), Some("text/css"));
    assert_eq!(body, b"body { margin: 0; }".to_vec());
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let site = site();
    let request = b"GET /style.css HTTP/1.1\r\n\r\n";

    let (_, first) = exchange(&site, request).await;
    let (_, second) = exchange(&site, request).await;
    let (_, third) = exchange(&site, request).await;

    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[tokio::test]
async fn test_headers_appear_once_regardless_of_status() {
    let site = site();

    for request in [
        &b"GET /index.html HTTP/1.1\r\n\r\n"[..],
        &b"GET /nope.txt HTTP/1.1\r\n\r\n"[..],
        &b"garbage"[..],
    ] {
        let (_, raw) = exchange(&site, request).await;
        let (head, _) = split_response(&raw);

        assert_eq!(header_count(&head, "Content-Type"), 1);
        assert_eq!(header_count(&head, "Connection"), 1);
        assert_eq!(header_value(&head, "Connection"), Some("close"));
    }
}

#[tokio::test]
async fn test_head_request_has_no_body() {
    let site = site();
    let (served, raw) = exchange(&site, b"HEAD /index.html HTTP/1.1\r\n\r\n").await;
    let (head, body) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 200 OK"));
    assert_eq!(header_value(&head, "Content-Length"), Some("50"));
    assert!(body.is_empty());
    assert_eq!(served.method, "HEAD");
}

#[tokio::test]
async fn test_oversized_request_is_truncated_but_answered() {
    let site = site();
    let mut request = b"GET /style.css HTTP/1.1\r\nX-Filler: ".to_vec();
    request.extend(std::iter::repeat_n(b'x', 4000));
    request.extend_from_slice(b"\r\n\r\n");

    let (served, raw) = exchange(&site, &request).await;
    let (head, _) = split_response(&raw);

    assert!(head.starts_with("HTTP/1.1 200 OK"));
    assert_eq!(served.path, "style.css");
}

#[tokio::test]
async fn test_client_that_sends_nothing_gets_index() {
    let site = site();
    let resolver = Arc::new(ContentResolver::new(site.root(), "index.html"));
    let (mut client, server) = tokio::io::duplex(64 * 1024);

    client.shutdown().await.unwrap();

    let conn = Connection::new(server, resolver, 1024);
    let mut raw = Vec::new();
    let (served, read) = tokio::join!(conn.run(), client.read_to_end(&mut raw));
    read.unwrap();

    assert_eq!(served.method, "");
    assert_eq!(served.status, StatusCode::Ok);
    assert_eq!(split_response(&raw).1, INDEX_HTML);
}

#[tokio::test]
async fn test_write_failure_still_closes() {
    let site = site();
    let resolver = Arc::new(ContentResolver::new(site.root(), "index.html"));
    let (mut client, server) = tokio::io::duplex(16);

    client.write_all(b"GET /index.html").await.unwrap();
    drop(client);

    let served = Connection::new(server, resolver, 1024).run().await;

    assert!(!served.delivered);
    assert_eq!(served.status, StatusCode::Ok);
}
