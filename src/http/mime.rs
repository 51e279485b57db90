//! Content type detection from file extensions.

use std::path::Path;

/// Content type used when a path has no extension.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Returns the text after the last `.` of the final path component.
///
/// `None` when the name has no dot or ends with one. A leading dot alone
/// (".profile") counts as an extension, matching how the server has
/// always derived content types.
pub fn extension_of(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    let (_, ext) = name.rsplit_once('.')?;

    if ext.is_empty() { None } else { Some(ext) }
}

/// Maps an extension to a `Content-Type` value.
///
/// Well known extensions get their registered type. Anything else is
/// reported as `text/<ext>`, and a missing extension as
/// [`FALLBACK_CONTENT_TYPE`].
pub fn content_type(ext: Option<&str>) -> String {
    let Some(ext) = ext else {
        return FALLBACK_CONTENT_TYPE.to_string();
    };

    let known = match ext.to_ascii_lowercase().as_str() {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" | "mjs" => "text/javascript",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "md" => "text/markdown",
        "json" => "application/json",
        "xml" => "application/xml",
        "pdf" => "application/pdf",
        "wasm" => "application/wasm",
        "zip" => "application/zip",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "mp3" => "audio/mpeg",
        "mp4" => "video/mp4",
        _ => return format!("text/{ext}"),
    };

    known.to_string()
}
