use thiserror::Error;

/// LTB Errors
#[derive(Debug, Error)]
pub enum LtbError {
    #[error(
        "No API key found.\n\nOptions:\n  1. Set the ANTHROPIC_API_KEY environment variable\n  2. Run: ltb --setup-project\n  3. Add the key to your CI secrets"
    )]
    MissingApiKey,
    #[error("Memory directory not found: {dir}")]
    MemoryDirMissing { dir: String },
    #[error("No letter files found in {dir}")]
    NoLetterFiles { dir: String },
    #[error("No key provided, setup cancelled.")]
    SetupCancelled,
    #[error("API key contains characters that cannot be sent in an HTTP header.")]
    InvalidApiKey,
    #[error("Model {model} is not a supported model, double check your LTB_MODEL env var. Only {supported} are supported.")]
    UnsupportedModel { model: String, supported: String },
    #[error("Anthropic API request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected Anthropic API response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("The Anthropic API response contained no text content.")]
    EmptyResponse,
    #[error(transparent)]
    StdioError(#[from] std::io::Error),
}
