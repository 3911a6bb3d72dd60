use crate::error::{Result, StoryforgeError};
use serde_json::{json, Value};
use std::fmt;

// ---------------------------------------------------------------------------
// Vendor
// ---------------------------------------------------------------------------

/// Supported upstream LLM vendor families. Dispatch is an explicit table
/// keyed by this enum; model-name prefixes are consulted only in
/// [`Vendor::from_model`], never at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    /// Chat-completions style API: bearer auth, `messages` envelope.
    OpenAi,
    /// Generate-content style API: URL-embedded key, `contents/parts` envelope.
    Gemini,
}

/// Model used when the request leaves `llmModel` blank.
pub const DEFAULT_MODEL: &str = "gpt-4o";

impl Vendor {
    pub fn all() -> &'static [Vendor] {
        &[Vendor::OpenAi, Vendor::Gemini]
    }

    /// Resolve the vendor family from a model identifier. Unknown prefixes
    /// are a validation error surfaced before any outbound call.
    pub fn from_model(model: &str) -> Result<Self> {
        if model.starts_with("gpt") || model.starts_with("o1") || model.starts_with("o3") {
            Ok(Vendor::OpenAi)
        } else if model.starts_with("gemini") {
            Ok(Vendor::Gemini)
        } else {
            Err(StoryforgeError::UnsupportedModel(model.to_string()))
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Vendor::OpenAi => "openai",
            Vendor::Gemini => "gemini",
        }
    }

    /// Environment variable carrying this vendor's credential.
    pub fn credential_env(self) -> &'static str {
        match self {
            Vendor::OpenAi => "OPENAI_API_KEY",
            Vendor::Gemini => "GEMINI_API_KEY",
        }
    }

    pub fn default_base_url(self) -> &'static str {
        match self {
            Vendor::OpenAi => "https://api.openai.com",
            Vendor::Gemini => "https://generativelanguage.googleapis.com",
        }
    }

    /// Whether the credential travels as a bearer header. Gemini embeds the
    /// key in the URL instead.
    pub fn uses_bearer_auth(self) -> bool {
        matches!(self, Vendor::OpenAi)
    }

    /// Full request URL against the given base.
    pub fn request_url(self, base: &str, model: &str, key: &str) -> String {
        let base = base.trim_end_matches('/');
        match self {
            Vendor::OpenAi => format!("{base}/v1/chat/completions"),
            Vendor::Gemini => {
                format!("{base}/v1beta/models/{model}:generateContent?key={key}")
            }
        }
    }

    /// Vendor-specific request envelope around a single-turn prompt.
    pub fn request_body(self, model: &str, prompt: &str, json_mode: bool) -> Value {
        match self {
            Vendor::OpenAi => {
                let mut body = json!({
                    "model": model,
                    "messages": [{ "role": "user", "content": prompt }],
                    "temperature": 0.7,
                });
                if json_mode {
                    body["response_format"] = json!({ "type": "json_object" });
                }
                body
            }
            Vendor::Gemini => {
                let mut generation_config = json!({ "temperature": 0.7 });
                if json_mode {
                    generation_config["responseMimeType"] = json!("application/json");
                }
                json!({
                    "contents": [{ "parts": [{ "text": prompt }] }],
                    "generationConfig": generation_config,
                })
            }
        }
    }

    /// Unwrap the raw text payload from a successful vendor response.
    pub fn extract_text(self, body: &Value) -> Result<String> {
        let text = match self {
            Vendor::OpenAi => body
                .pointer("/choices/0/message/content")
                .and_then(Value::as_str),
            Vendor::Gemini => body
                .pointer("/candidates/0/content/parts/0/text")
                .and_then(Value::as_str),
        };
        text.map(str::to_string).ok_or_else(|| {
            StoryforgeError::MalformedUpstream(format!(
                "{self} response is missing the text payload"
            ))
        })
    }

    /// Best-effort error message from a non-2xx vendor response body.
    /// Both families use an `error.message` field.
    pub fn error_message(self, body: &Value) -> Option<String> {
        body.pointer("/error/message")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
