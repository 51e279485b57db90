/// HTTP request methods.
///
/// Every method is served as a plain retrieval. HEAD is the only one that
/// changes the response, by suppressing the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH
}

/// The parts of a request line the server acts on.
///
/// `target` is the path with its leading `/` stripped and may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Method token as sent by the client (e.g. "GET"), possibly empty
    pub method: String,
    /// Requested path without the leading "/" (e.g. "index.html")
    pub target: String,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - String representation of the method (case-sensitive, typically uppercase)
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the string matches a known method, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use hearth::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }
}

impl Request {
    pub fn new(method: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            target: target.into(),
        }
    }

    /// The recognized method, if the token is a known one.
    pub fn method(&self) -> Option<Method> {
        Method::from_str(&self.method)
    }

    pub fn is_head(&self) -> bool {
        self.method() == Some(Method::HEAD)
    }

    /// Path to resolve: the target, or `index` when the target is empty.
    ///
    /// # Example
    ///
    /// ```
    /// # use hearth::http::request::Request;
    /// assert_eq!(Request::new("GET", "").effective_path("index.html"), "index.html");
    /// assert_eq!(Request::new("GET", "a.css").effective_path("index.html"), "a.css");
    /// ```
    pub fn effective_path<'a>(&'a self, index: &'a str) -> &'a str {
        if self.target.is_empty() {
            index
        } else {
            &self.target
        }
    }
}
