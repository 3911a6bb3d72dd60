//! The outbound leg of the prompt relay: one vendor call per request.

use serde_json::Value;
use storyforge_core::error::{Result, StoryforgeError};
use storyforge_core::relay::AssistRequest;
use storyforge_core::vendor::{Vendor, DEFAULT_MODEL};
use storyforge_core::{prompt, relay};

use crate::state::{Credentials, VendorBases};

/// Execute one assist request against the resolved vendor and return the
/// normalized response body.
///
/// Validation happens before any outbound traffic: an empty story, an
/// unknown operation mode, or an unsupported model never reaches a vendor.
pub async fn relay(
    http: &reqwest::Client,
    credentials: &Credentials,
    bases: &VendorBases,
    request: &AssistRequest,
) -> Result<Value> {
    if request.user_story.trim().is_empty() {
        return Err(StoryforgeError::EmptyStory);
    }

    let model = if request.llm_model.trim().is_empty() {
        DEFAULT_MODEL
    } else {
        request.llm_model.trim()
    };
    let vendor = Vendor::from_model(model)?;
    let key = credentials
        .for_vendor(vendor)
        .ok_or_else(|| StoryforgeError::MissingCredential(vendor.credential_env().to_string()))?;

    let prompt = prompt::build(request.operation_mode, &request.user_story, &request.suggestions)?;
    let url = vendor.request_url(bases.for_vendor(vendor), model, key);
    let body = vendor.request_body(model, &prompt, request.operation_mode.wants_json());

    tracing::debug!(vendor = %vendor, model, mode = %request.operation_mode, "dispatching assist request");

    let mut outbound = http.post(&url).json(&body);
    if vendor.uses_bearer_auth() {
        outbound = outbound.bearer_auth(key);
    }

    // Transport failures have no vendor status; report them as a bad gateway.
    let response = outbound.send().await.map_err(|e| StoryforgeError::Upstream {
        status: 502,
        message: e.to_string(),
    })?;

    let status = response.status();
    let payload: Value = response
        .json()
        .await
        .map_err(|e| StoryforgeError::MalformedUpstream(format!("{vendor} response is not JSON: {e}")))?;

    if !status.is_success() {
        let message = vendor
            .error_message(&payload)
            .unwrap_or_else(|| format!("{vendor} returned HTTP {status}"));
        tracing::warn!(vendor = %vendor, %status, "upstream request failed: {message}");
        return Err(StoryforgeError::Upstream {
            status: status.as_u16(),
            message,
        });
    }

    let text = vendor.extract_text(&payload)?;
    relay::normalize_output(request.operation_mode, &text)
}
