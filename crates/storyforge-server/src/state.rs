use std::path::PathBuf;
use storyforge_core::vendor::Vendor;

/// Per-vendor API keys, read from the environment at startup. A missing key
/// is only an error when a request actually targets that vendor.
#[derive(Clone, Default)]
pub struct Credentials {
    pub openai_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: std::env::var(Vendor::OpenAi.credential_env()).ok(),
            gemini_api_key: std::env::var(Vendor::Gemini.credential_env()).ok(),
        }
    }

    pub fn for_vendor(&self, vendor: Vendor) -> Option<&str> {
        match vendor {
            Vendor::OpenAi => self.openai_api_key.as_deref(),
            Vendor::Gemini => self.gemini_api_key.as_deref(),
        }
    }
}

/// Base URLs for the upstream vendors. Defaults to the real endpoints;
/// overridable so tests can point at a local mock server.
#[derive(Clone)]
pub struct VendorBases {
    pub openai: String,
    pub gemini: String,
}

impl Default for VendorBases {
    fn default() -> Self {
        Self {
            openai: Vendor::OpenAi.default_base_url().to_string(),
            gemini: Vendor::Gemini.default_base_url().to_string(),
        }
    }
}

impl VendorBases {
    pub fn for_vendor(&self, vendor: Vendor) -> &str {
        match vendor {
            Vendor::OpenAi => &self.openai,
            Vendor::Gemini => &self.gemini,
        }
    }
}

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub root: PathBuf,
    pub http: reqwest::Client,
    pub credentials: Credentials,
    pub bases: VendorBases,
}

impl AppState {
    pub fn new(root: PathBuf) -> Self {
        Self::with_upstream(root, Credentials::from_env(), VendorBases::default())
    }

    /// Construct with explicit credentials and vendor base URLs. Tests use
    /// this to inject a mock upstream instead of the real vendors.
    pub fn with_upstream(root: PathBuf, credentials: Credentials, bases: VendorBases) -> Self {
        Self {
            root,
            http: reqwest::Client::new(),
            credentials,
            bases,
        }
    }
}
