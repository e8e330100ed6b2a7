use http::{Method, Uri};

/// Request metadata kept around for error reporting
///
/// Captured before the handler consumes the request, so the responder can
/// still say which route failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// HTTP method of the failed request
    pub method: Method,
    /// Full request URI
    pub uri: Uri,
}

impl RequestContext {
    /// Capture the context of an incoming request
    pub fn from_request<B>(request: &http::Request<B>) -> Self {
        Self {
            method: request.method().clone(),
            uri: request.uri().clone(),
        }
    }

    /// Request path without the query string
    pub fn path(&self) -> &str {
        self.uri.path()
    }
}

impl From<&http::request::Parts> for RequestContext {
    fn from(parts: &http::request::Parts) -> Self {
        Self {
            method: parts.method.clone(),
            uri: parts.uri.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_excludes_query() {
        let request = http::Request::builder()
            .method(Method::POST)
            .uri("/users?page=2")
            .body(())
            .unwrap();

        let ctx = RequestContext::from_request(&request);
        assert_eq!(ctx.method, Method::POST);
        assert_eq!(ctx.path(), "/users");
    }

    #[test]
    fn from_parts_matches_request() {
        let (parts, ()) = http::Request::builder()
            .uri("/dberror")
            .body(())
            .unwrap()
            .into_parts();

        let ctx = RequestContext::from(&parts);
        assert_eq!(ctx.method, Method::GET);
        assert_eq!(ctx.path(), "/dberror");
    }
}
