#![allow(clippy::must_use_candidate)]

//! Error kinds and response envelope shared by Bulwark handlers
//!
//! Nothing here depends on axum. The server crate turns these types into
//! actual HTTP responses.

mod context;
mod envelope;
mod error;
mod sink;

pub use context::RequestContext;
pub use envelope::{Envelope, INTERNAL_ERROR_MESSAGE, SERVICE_UNAVAILABLE_MESSAGE};
pub use error::{ApiError, BusinessError, InfrastructureError};
pub use sink::{ErrorEvent, EventSink, RecordingSink, SharedSink, TracingSink};
