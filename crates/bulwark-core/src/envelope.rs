use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Message sent in place of any infrastructure error detail
pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "service temporarily unavailable";

/// Message sent in place of any unclassified error description
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Wire shape of every error response: `{"statusCode": <int>, "msg": <any>}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<M> {
    /// Numeric HTTP status, repeated in the body
    pub status_code: u16,
    /// Client-facing message or payload
    pub msg: M,
}

impl<M> Envelope<M> {
    /// Build an envelope whose `statusCode` mirrors `status`
    pub const fn new(status: StatusCode, msg: M) -> Self {
        Self {
            status_code: status.as_u16(),
            msg,
        }
    }
}

impl Envelope<&'static str> {
    /// Fixed body for masked infrastructure errors
    pub const fn service_unavailable() -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, SERVICE_UNAVAILABLE_MESSAGE)
    }

    /// Fixed body for masked unclassified errors
    pub const fn internal_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}
