use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoryforgeError {
    #[error("user story is required")]
    EmptyStory,

    #[error("invalid operation mode: {0}")]
    InvalidMode(String),

    #[error("unsupported LLM model: {0}")]
    UnsupportedModel(String),

    #[error("invalid suggestions list: {0}")]
    InvalidSuggestions(String),

    #[error("missing credential: {0} is not set")]
    MissingCredential(String),

    #[error("LLM API error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("malformed upstream output: {0}")]
    MalformedUpstream(String),

    #[error("story not found: {0}")]
    StoryNotFound(String),

    #[error("story already exists: {0}")]
    StoryExists(String),

    #[error("invalid story id '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidId(String),

    #[error("invalid story status: {0}")]
    InvalidStatus(String),

    #[error("invalid quality level: {0}")]
    InvalidLevel(String),

    #[error("an operation is already in flight for mode '{0}'")]
    OperationInFlight(String),

    #[error("no operation in flight for mode '{0}'")]
    NoOperationInFlight(String),

    #[error("no analysis result is staged")]
    NoAnalysisStaged,

    #[error("no suggestions are ticked")]
    NoSuggestionsTicked,

    #[error("no result staged for mode '{0}'")]
    NoResultStaged(String),

    #[error("suggestion not found: {0}")]
    SuggestionNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoryforgeError>;
