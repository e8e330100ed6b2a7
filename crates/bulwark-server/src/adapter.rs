use std::future::Future;
use std::pin::Pin;

use axum::extract::{FromRef, Request};
use axum::handler::Handler;
use axum::response::Response;
use bulwark_core::{ApiError, RequestContext, SharedSink};

use crate::responder::respond;

/// Adapt a fallible handler into an axum handler
///
/// The wrapped handler receives the whole request and returns either a
/// finished response or an [`ApiError`]. Errors are passed to the
/// responder exactly once, with the sink taken from router state.
///
/// A handler must either succeed with a complete response or fail without
/// producing one; the adapter never merges the two.
pub const fn fallible<H>(handler: H) -> Fallible<H> {
    Fallible { handler }
}

/// Handler returned by [`fallible`]
#[derive(Debug, Clone, Copy)]
pub struct Fallible<H> {
    handler: H,
}

/// Type marker selecting the [`Fallible`] handler implementation
#[derive(Debug)]
pub enum FallibleMarker {}

impl<H, Fut, S> Handler<FallibleMarker, S> for Fallible<H>
where
    H: FnOnce(Request) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<Response, ApiError>> + Send + 'static,
    SharedSink: FromRef<S>,
    S: Send + Sync + 'static,
{
    type Future = Pin<Box<dyn Future<Output = Response> + Send>>;

    fn call(self, request: Request, state: S) -> Self::Future {
        let sink = SharedSink::from_ref(&state);
        let ctx = RequestContext::from_request(&request);
        let future = (self.handler)(request);

        Box::pin(async move {
            match future.await {
                Ok(response) => response,
                Err(error) => {
                    let mut response = Response::default();
                    if let Err(e) = respond(error, &ctx, sink.as_ref(), &mut response) {
                        tracing::error!(error = %e, path = %ctx.path(), "failed to serialize error response");
                    }
                    response
                }
            }
        })
    }
}
