use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use storyforge_core::error::StoryforgeError;

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if let Some(e) = self.0.downcast_ref::<StoryforgeError>() {
            match e {
                StoryforgeError::EmptyStory
                | StoryforgeError::InvalidMode(_)
                | StoryforgeError::UnsupportedModel(_)
                | StoryforgeError::InvalidSuggestions(_)
                | StoryforgeError::InvalidId(_)
                | StoryforgeError::InvalidStatus(_)
                | StoryforgeError::InvalidLevel(_)
                | StoryforgeError::NoSuggestionsTicked
                | StoryforgeError::NoAnalysisStaged
                | StoryforgeError::NoResultStaged(_)
                | StoryforgeError::SuggestionNotFound(_) => StatusCode::BAD_REQUEST,
                StoryforgeError::StoryNotFound(_) => StatusCode::NOT_FOUND,
                StoryforgeError::StoryExists(_)
                | StoryforgeError::OperationInFlight(_)
                | StoryforgeError::NoOperationInFlight(_) => StatusCode::CONFLICT,
                // Upstream failures keep the vendor's status where it is a
                // valid HTTP code; anything else degrades to 502.
                StoryforgeError::Upstream { status, .. } => StatusCode::from_u16(*status)
                    .unwrap_or(StatusCode::BAD_GATEWAY),
                StoryforgeError::MalformedUpstream(_) => StatusCode::BAD_GATEWAY,
                StoryforgeError::MissingCredential(_)
                | StoryforgeError::Io(_)
                | StoryforgeError::Yaml(_)
                | StoryforgeError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn empty_story_maps_to_400() {
        let err = AppError(StoryforgeError::EmptyStory.into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_mode_maps_to_400() {
        let err = AppError(StoryforgeError::InvalidMode("polish".into()).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unsupported_model_maps_to_400() {
        let err = AppError(StoryforgeError::UnsupportedModel("llama-3".into()).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_suggestions_maps_to_400() {
        let err = AppError(StoryforgeError::InvalidSuggestions("expected a sequence".into()).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn story_not_found_maps_to_404() {
        let err = AppError(StoryforgeError::StoryNotFound("us-1".into()).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn story_exists_maps_to_409() {
        let err = AppError(StoryforgeError::StoryExists("us-1".into()).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn missing_credential_maps_to_500() {
        let err = AppError(StoryforgeError::MissingCredential("OPENAI_API_KEY".into()).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn upstream_error_propagates_vendor_status() {
        let err = AppError(
            StoryforgeError::Upstream {
                status: 429,
                message: "quota exceeded".into(),
            }
            .into(),
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn upstream_error_with_bogus_status_degrades_to_502() {
        let err = AppError(
            StoryforgeError::Upstream {
                status: 42,
                message: "connection refused".into(),
            }
            .into(),
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn malformed_upstream_maps_to_502() {
        let err = AppError(StoryforgeError::MalformedUpstream("not JSON".into()).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn io_error_maps_to_500() {
        let io_err = std::io::Error::other("disk full");
        let err = AppError(StoryforgeError::Io(io_err).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn non_storyforge_error_maps_to_500() {
        let err = AppError(anyhow::anyhow!("something unexpected"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn response_body_contains_error_field() {
        let err = AppError(StoryforgeError::StoryNotFound("us-1".into()).into());
        let response = err.into_response();
        let ct = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .expect("should have content-type");
        assert!(
            ct.to_str().unwrap().contains("application/json"),
            "expected JSON content type, got {:?}",
            ct
        );
    }
}
