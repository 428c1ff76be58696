//! Validating JSON extractor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Handlers that accept a creation payload take `ValidatedJson<T>` instead of
//! `Json<T>`. The body is parsed as untyped JSON first and then checked field
//! by field, so a rejection lists every failing field rather than the first
//! serde error.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use dto::{CreateUserDto, ValidationErrors};
use serde_json::{Value, json};

/// Types that can be built from a raw JSON payload after validation.
pub trait FromPayload: Sized {
    fn from_payload(payload: &Value) -> Result<Self, ValidationErrors>;
}

impl FromPayload for CreateUserDto {
    fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        CreateUserDto::from_payload(payload)
    }
}

pub struct ValidatedJson<T>(pub T);

pub enum ValidationRejection {
    /// Body missing, not JSON, or wrong content type.
    Json(JsonRejection),
    /// Body parsed but one or more fields failed their rules.
    Invalid(ValidationErrors),
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: FromPayload,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<Value>::from_request(req, state)
            .await
            .map_err(ValidationRejection::Json)?;
        T::from_payload(&payload)
            .map(Self)
            .map_err(ValidationRejection::Invalid)
    }
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Json(rejection) => {
                let status = rejection.status();
                (status, Json(json!({ "error": rejection.body_text(), "violations": [] }))).into_response()
            }
            Self::Invalid(errors) => {
                tracing::debug!(fields = ?errors.fields(), "payload rejected");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "validation failed", "violations": errors.violations })),
                )
                    .into_response()
            }
        }
    }
}
