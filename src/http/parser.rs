use crate::http::request::Request;

/// Parses the request line of `buf` into a [`Request`].
///
/// Never fails: unparseable input yields an empty method and/or target.
pub fn parse_http_request(buf: &[u8]) -> Request {
    Request {
        method: parse_method(buf),
        target: parse_path(buf),
    }
}

/// Returns the token before the first space of the request line, or an
/// empty string when the line has no space.
pub fn parse_method(buf: &[u8]) -> String {
    let line = request_line(buf);

    match find_space(line, 0) {
        Some(end) => lossy(&line[..end]),
        None => String::new(),
    }
}

/// Returns the request target between the first and second space of the
/// request line, skipping the byte right after the first space (the
/// leading `/`).
///
/// Yields an empty string when either space is missing or the line ends
/// before the target starts.
pub fn parse_path(buf: &[u8]) -> String {
    let line = request_line(buf);

    let Some(first_space) = find_space(line, 0) else {
        return String::new();
    };

    // skip the space and the "/"
    let start = first_space + 2;
    if start > line.len() {
        return String::new();
    }

    match find_space(line, start) {
        Some(end) => lossy(&line[start..end]),
        None => String::new(),
    }
}

/// Bytes up to the first CR, LF or NUL.
fn request_line(buf: &[u8]) -> &[u8] {
    let end = buf
        .iter()
        .position(|&b| matches!(b, b'\r' | b'\n' | 0))
        .unwrap_or(buf.len());

    &buf[..end]
}

fn find_space(line: &[u8], from: usize) -> Option<usize> {
    line.get(from..)?
        .iter()
        .position(|&b| b == b' ')
        .map(|i| from + i)
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
