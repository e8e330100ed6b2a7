use axum::response::Response;
use bulwark_core::{ApiError, EventSink, RequestContext};

use crate::json::write_json;

/// Translate a handler error into a response and at most one sink record
///
/// Business errors go out verbatim and are not recorded. Infrastructure
/// and unclassified errors are recorded with full detail and answered with
/// a fixed message.
///
/// # Errors
///
/// Returns the body serialization error. The status and `content-type`
/// are already on `response` by then, and no second attempt is made.
pub fn respond(
    error: ApiError,
    ctx: &RequestContext,
    sink: &dyn EventSink,
    response: &mut Response,
) -> serde_json::Result<()> {
    let status = error.status_code();

    if let Some(event) = error.event(ctx) {
        sink.record(event);
    }

    write_json(response, status, &error.into_envelope())
}

#[cfg(test)]
mod tests {
    use bulwark_core::{ErrorEvent, RecordingSink};
    use http::StatusCode;
    use serde_json::json;

    use super::*;

    fn ctx(path: &str) -> RequestContext {
        let request = http::Request::builder().uri(path).body(()).unwrap();
        RequestContext::from_request(&request)
    }

    async fn run(error: ApiError, path: &str, sink: &RecordingSink) -> (StatusCode, String) {
        let mut response = Response::default();
        respond(error, &ctx(path), sink, &mut response).unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn business_error_is_echoed_without_logging() {
        let sink = RecordingSink::new();
        let payload = json!({ "username": "username is required", "email": "email is invalid" });

        let (status, body) = run(
            ApiError::business(StatusCode::UNPROCESSABLE_ENTITY, payload.clone()),
            "/validationerror",
            &sink,
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body, json!({ "statusCode": 422, "msg": payload }));
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn business_plain_string_payload() {
        let sink = RecordingSink::new();

        let (status, body) = run(ApiError::business(StatusCode::NOT_FOUND, "no such user"), "/users/9", &sink).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, r#"{"statusCode":404,"msg":"no such user"}"#);
    }

    #[tokio::test]
    async fn infrastructure_detail_never_reaches_the_body() {
        let hostile = [
            "failed to connect to database",
            r#""},"msg":"leaked","x":{""#,
            "line\nbreak\t\\ and \u{0} nul",
            "",
        ];

        for detail in hostile {
            let sink = RecordingSink::new();
            let (status, body) = run(ApiError::infrastructure("Database", detail), "/dberror", &sink).await;

            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            assert_eq!(body, r#"{"statusCode":503,"msg":"service temporarily unavailable"}"#);
            assert_eq!(
                sink.events(),
                vec![ErrorEvent::Infrastructure {
                    service: "Database".to_owned(),
                    detail: detail.to_owned(),
                    path: "/dberror".to_owned(),
                }]
            );
        }
    }

    #[tokio::test]
    async fn unclassified_error_is_masked_and_logged() {
        let sink = RecordingSink::new();

        let (status, body) = run(
            ApiError::unclassified(anyhow::anyhow!("secret token abc123 rejected")),
            "/internalerror",
            &sink,
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"statusCode":500,"msg":"internal server error"}"#);
        assert_eq!(
            sink.events(),
            vec![ErrorEvent::Unclassified {
                error: "secret token abc123 rejected".to_owned(),
                path: "/internalerror".to_owned(),
            }]
        );
    }
}
