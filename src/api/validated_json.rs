//! JSON extractor that rejects invalid payloads before the handler runs.
//!
//! `ValidatedJson<T>` deserializes the request body like `axum::Json<T>`
//! and then runs the `validator` derive rules on the result. Malformed
//! JSON is a 400, a well-formed body that breaks a rule is a 422. Both
//! answer with the usual `ApiResponse` error envelope, so clients see
//! one error shape everywhere.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::dto::ApiResponse;

/// Extractor wrapper; the inner value has already passed validation.
///
/// ```ignore
/// async fn create_moto(
///     ValidatedJson(request): ValidatedJson<CreateMotoRequest>,
/// ) -> impl IntoResponse {
///     // request.placa is non-empty and at most 10 characters here
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

/// Why extraction failed.
pub enum ValidatedJsonRejection {
    /// Body was not parseable as the target type.
    BadJson(JsonRejection),
    /// Body parsed but broke one or more field rules.
    FailedValidation(ValidationErrors),
}

/// Flatten validator's per-field error map into one readable line.
///
/// Fields are sorted so the same invalid payload always produces the
/// same message.
fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = Vec::new();

    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (field, field_errors) in fields {
        for error in field_errors.iter() {
            let detail = match &error.message {
                Some(message) => message.to_string(),
                None => error.code.to_string(),
            };
            parts.push(format!("{field}: {detail}"));
        }
    }

    if parts.is_empty() {
        "Validation failed".to_string()
    } else {
        parts.join("; ")
    }
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadJson(rejection) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid JSON: {}", rejection),
            ),
            Self::FailedValidation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                describe_validation_errors(&errors),
            ),
        };
        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::BadJson)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::FailedValidation)?;

        Ok(ValidatedJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use serde_json::{json, Value};
    use tower::Service;

    use super::*;
    use crate::api::dto::CreateMotoRequest;

    async fn echo_placa(ValidatedJson(body): ValidatedJson<CreateMotoRequest>) -> String {
        body.placa
    }

    fn app() -> Router {
        Router::new().route("/motos", post(echo_placa))
    }

    async fn send_json(body: Body) -> axum::http::Response<Body> {
        let req = Request::builder()
            .method("POST")
            .uri("/motos")
            .header("content-type", "application/json")
            .body(body)
            .unwrap();
        app().into_service().call(req).await.unwrap()
    }

    async fn body_json(resp: axum::http::Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn valid_body_reaches_the_handler() {
        let payload = json!({"placa": "ABC1234", "modelo": "CG 160"});
        let resp = send_json(Body::from(payload.to_string())).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn malformed_json_is_400() {
        let resp = send_json(Body::from("{placa:")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("Invalid JSON"));
    }

    #[tokio::test]
    async fn rule_violation_is_422_and_names_the_field() {
        let payload = json!({"placa": "", "modelo": "CG 160"});
        let resp = send_json(Body::from(payload.to_string())).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("placa"));
    }

    #[tokio::test]
    async fn oversized_placa_is_422() {
        let payload = json!({"placa": "ABCDEFGHIJK", "modelo": "CG 160"});
        let resp = send_json(Body::from(payload.to_string())).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn error_message_lists_fields_in_stable_order() {
        use validator::Validate;

        #[derive(serde::Deserialize, Validate)]
        struct TwoFields {
            #[validate(length(min = 1))]
            alpha: String,
            #[validate(length(min = 1))]
            beta: String,
        }

        let bad = TwoFields {
            alpha: String::new(),
            beta: String::new(),
        };
        let errors = bad.validate().unwrap_err();
        let message = describe_validation_errors(&errors);
        let alpha_at = message.find("alpha").unwrap();
        let beta_at = message.find("beta").unwrap();
        assert!(alpha_at < beta_at);
    }
}
