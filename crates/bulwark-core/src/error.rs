use std::fmt;

use http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::context::RequestContext;
use crate::envelope::{Envelope, INTERNAL_ERROR_MESSAGE, SERVICE_UNAVAILABLE_MESSAGE};
use crate::sink::ErrorEvent;

/// Error returned by fallible route handlers
///
/// The variant is fixed at construction and is the only thing the responder
/// looks at, so an infrastructure failure is never mistaken for an error that
/// is safe to show the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Condition the caller caused or can act on; exposed in full
    #[error(transparent)]
    Business(#[from] BusinessError),

    /// A dependency failed; detail is logged, never sent
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    /// Anything else; treated as a server bug and masked
    #[error("{0:#}")]
    Unclassified(#[from] anyhow::Error),
}

impl ApiError {
    /// Shorthand for [`BusinessError::new`]
    pub fn business(status: StatusCode, payload: impl Into<Value>) -> Self {
        Self::Business(BusinessError::new(status, payload))
    }

    /// Shorthand for [`InfrastructureError::new`]
    pub fn infrastructure(service: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Infrastructure(InfrastructureError::new(service, detail))
    }

    /// Wrap any other error as unclassified
    pub fn unclassified(error: impl Into<anyhow::Error>) -> Self {
        Self::Unclassified(error.into())
    }

    /// HTTP status sent for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Business(e) => e.status,
            Self::Infrastructure(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Unclassified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Server-side record for this error, if it is one that gets logged
    ///
    /// Business errors produce nothing: the caller already sees everything.
    pub fn event(&self, ctx: &RequestContext) -> Option<ErrorEvent> {
        match self {
            Self::Business(_) => None,
            Self::Infrastructure(e) => Some(ErrorEvent::Infrastructure {
                service: e.service.clone(),
                detail: e.detail.clone(),
                path: ctx.path().to_owned(),
            }),
            Self::Unclassified(e) => Some(ErrorEvent::Unclassified {
                error: format!("{e:#}"),
                path: ctx.path().to_owned(),
            }),
        }
    }

    /// Body sent to the caller
    ///
    /// Infrastructure and unclassified errors collapse to a fixed message
    /// regardless of what they carry.
    pub fn into_envelope(self) -> Envelope<Value> {
        let status = self.status_code();
        match self {
            Self::Business(e) => Envelope::new(status, e.payload),
            Self::Infrastructure(_) => Envelope::new(status, Value::from(SERVICE_UNAVAILABLE_MESSAGE)),
            Self::Unclassified(_) => Envelope::new(status, Value::from(INTERNAL_ERROR_MESSAGE)),
        }
    }
}

/// Caller-actionable error with a payload that is safe to expose
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessError {
    status: StatusCode,
    payload: Value,
}

impl BusinessError {
    /// Create a business error from anything convertible to JSON
    pub fn new(status: StatusCode, payload: impl Into<Value>) -> Self {
        Self {
            status,
            payload: payload.into(),
        }
    }

    /// Create a business error from a serializable payload
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be represented as JSON
    pub fn from_serialize<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> serde_json::Result<Self> {
        Ok(Self {
            status,
            payload: serde_json::to_value(payload)?,
        })
    }

    /// Create a business error whose payload is the error's message
    pub fn from_error(status: StatusCode, error: &(dyn std::error::Error + '_)) -> Self {
        Self::new(status, error.to_string())
    }

    /// Status sent to the caller
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Payload sent as `msg`
    pub const fn payload(&self) -> &Value {
        &self.payload
    }
}

impl fmt::Display for BusinessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status.as_u16(), self.payload)
    }
}

impl std::error::Error for BusinessError {}

/// Failure of a dependency the caller cannot see (database, cache, ...)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("infrastructure error with service {service}: {detail}")]
pub struct InfrastructureError {
    service: String,
    detail: String,
}

impl InfrastructureError {
    pub fn new(service: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            detail: detail.into(),
        }
    }

    /// Name of the failed dependency
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Diagnostic text, for logs only
    pub fn detail(&self) -> &str {
        &self.detail
    }
}
