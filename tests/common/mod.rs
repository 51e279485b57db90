//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A throwaway document root, removed on drop.
pub struct Site {
    root: PathBuf,
}

impl Site {
    pub fn new(name: &str) -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);
        let root = std::env::temp_dir().join(format!(
            "hearth-{}-{}-{}",
            name,
            std::process::id(),
            id
        ));
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(&root).unwrap();
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file(self, name: &str, contents: &[u8]) -> Self {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
        self
    }
}

impl Drop for Site {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

/// Splits a raw response into (head, body) at the first blank line.
pub fn split_response(raw: &[u8]) -> (String, Vec<u8>) {
    let pos = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header terminator");

    (
        String::from_utf8(raw[..pos].to_vec()).unwrap(),
        raw[pos + 4..].to_vec(),
    )
}

/// Number of header lines whose name matches `name`.
pub fn header_count(head: &str, name: &str) -> usize {
    head.lines()
        .skip(1)
        .filter(|line| {
            line.split_once(':')
                .map(|(k, _)| k.eq_ignore_ascii_case(name))
                .unwrap_or(false)
        })
        .count()
}

pub fn header_value<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.lines().skip(1).find_map(|line| {
        let (k, v) = line.split_once(':')?;
        k.eq_ignore_ascii_case(name).then(|| v.trim())
    })
}

/// 50 bytes of HTML.
pub const INDEX_HTML: &[u8] = b"<html><body><h1>Hello hearth!</h1></body></html>\n\n";
