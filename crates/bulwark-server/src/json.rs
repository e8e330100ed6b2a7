use axum::body::Body;
use axum::response::Response;
use http::header::{self, HeaderValue};
use http::StatusCode;
use serde::Serialize;

/// Write `value` as a JSON body with the given status
///
/// The status is set first, then `content-type`, then the body.
///
/// # Errors
///
/// Returns the serialization error unhandled. The status and header stay in
/// place and the body is left untouched.
pub fn write_json<T: Serialize + ?Sized>(
    response: &mut Response,
    status: StatusCode,
    value: &T,
) -> serde_json::Result<()> {
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let body = serde_json::to_vec(value)?;
    *response.body_mut() = Body::from(body);

    Ok(())
}

/// Build a fresh JSON response
///
/// # Errors
///
/// Returns the serialization error if `value` cannot be encoded
pub fn json_response<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> serde_json::Result<Response> {
    let mut response = Response::default();
    write_json(&mut response, status, value)?;
    Ok(response)
}
