//! Loading request targets from the document root.
//!
//! Every lookup produces a [`ResolvedContent`]; filesystem errors never
//! escape this module. Anything that is not a readable, non-empty file
//! under the root becomes the fixed 404 page.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};
use url::Url;

use crate::http::mime;
use crate::http::response::StatusCode;

/// Body served in place of missing content.
pub const NOT_FOUND_BODY: &str = "<h1 style='color:red;'>404 Page Not Found</h1>";

/// Why a lookup fell back to the 404 page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    /// No file at the resolved location
    NotFound,
    /// The file exists but has no content
    Empty,
    /// The file could not be read (permissions, directory, ...)
    Io,
    /// The target escapes the root or is not a plain relative path
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    Missing(MissReason),
}

/// Result of resolving one request target.
#[derive(Debug, Clone)]
pub struct ResolvedContent {
    pub status: StatusCode,
    pub body: Vec<u8>,
    /// Extension used for the content type; always `html` for misses.
    pub extension: Option<String>,
    pub outcome: Outcome,
}

impl ResolvedContent {
    pub fn found(body: Vec<u8>, extension: Option<String>) -> Self {
        Self {
            status: StatusCode::Ok,
            body,
            extension,
            outcome: Outcome::Found,
        }
    }

    pub fn missing(reason: MissReason) -> Self {
        Self {
            status: StatusCode::NotFound,
            body: NOT_FOUND_BODY.as_bytes().to_vec(),
            extension: Some("html".to_string()),
            outcome: Outcome::Missing(reason),
        }
    }

    pub fn content_type(&self) -> String {
        mime::content_type(self.extension.as_deref())
    }
}

/// Resolves request targets against a document root.
#[derive(Debug, Clone)]
pub struct ContentResolver {
    root: PathBuf,
    index: String,
}

impl ContentResolver {
    pub fn new(root: impl Into<PathBuf>, index: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            index: index.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Document served for an empty target.
    pub fn index(&self) -> &str {
        &self.index
    }

    /// Maps a request target onto a path under the root.
    ///
    /// Returns `None` if the target does not name a file below the root.
    pub fn locate(&self, target: &str) -> Option<PathBuf> {
        let relative = sanitize(target)?;
        Some(self.root.join(relative))
    }

    /// Loads `target`, converting every failure into the 404 page.
    pub async fn resolve(&self, target: &str) -> ResolvedContent {
        let Some(location) = self.locate(target) else {
            debug!(path = %target, "Rejected request path");
            return ResolvedContent::missing(MissReason::Rejected);
        };

        match tokio::fs::read(&location).await {
            Ok(body) if body.is_empty() => {
                debug!(file = %location.display(), "File is empty");
                ResolvedContent::missing(MissReason::Empty)
            }
            Ok(body) => {
                let extension = mime::extension_of(&location).map(str::to_owned);
                ResolvedContent::found(body, extension)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(file = %location.display(), "File not found");
                ResolvedContent::missing(MissReason::NotFound)
            }
            Err(e) => {
                warn!(file = %location.display(), error = %e, "Error reading file");
                ResolvedContent::missing(MissReason::Io)
            }
        }
    }
}

/// Normalizes a request target into a relative filesystem path.
///
/// The target is resolved as a URL path against `file:///`, which folds
/// `.` and `..` segments (including percent-encoded ones) at the root and
/// drops any query or fragment. After percent-decoding, every component
/// must be a plain name.
pub fn sanitize(target: &str) -> Option<PathBuf> {
    let base = Url::parse("file:///").ok()?;
    let trimmed = target.trim_start_matches(['/', '\\']);
    let url = base.join(&format!("/{trimmed}")).ok()?;
    let decoded = url.to_file_path().ok()?;

    let mut relative = PathBuf::new();
    for component in decoded.components() {
        match component {
            Component::RootDir => {}
            Component::Normal(part) => relative.push(part),
            _ => return None,
        }
    }

    if relative.as_os_str().is_empty() {
        None
    } else {
        Some(relative)
    }
}
