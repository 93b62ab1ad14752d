mod fallback;
mod google;
mod libre;

pub use fallback::FallbackTranslator;
pub use google::{GoogleGtxTranslator, parse_segments};
pub use libre::LibreTranslator;

use reqwest::StatusCode;

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub provider: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
    pub free_tier_available: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Nothing to translate")]
    EmptyInput,

    #[error("All translation providers failed")]
    AllProvidersFailed,
}

/// Map a non-success status to the matching error
pub(crate) fn check_status(status: StatusCode) -> Result<(), TranslateError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(TranslateError::RateLimitExceeded);
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(TranslateError::AuthenticationError);
    }

    if !status.is_success() {
        return Err(TranslateError::ApiError(format!("HTTP {}", status)));
    }

    Ok(())
}
