use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    LanguageCode, ProviderMetadata, TranslateError, Translation, Translator, check_status,
};

const PROVIDER: &str = "libre";

#[derive(Clone)]
pub struct LibreTranslator {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl LibreTranslator {
    pub fn new(client: reqwest::Client, api_url: String, api_key: Option<String>) -> Self {
        Self {
            client,
            api_url,
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }
}

#[derive(Serialize)]
struct LibreRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
struct LibreResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

#[async_trait]
impl Translator for LibreTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let request = LibreRequest {
            q: text,
            source: &from,
            target: &to,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self.client.post(&self.api_url).json(&request).send().await?;

        check_status(response.status())?;

        let body: LibreResponse =
            response.json().await.map_err(|e| TranslateError::InvalidResponse {
                provider: PROVIDER.to_string(),
                reason: format!("Failed to parse response: {}", e),
            })?;

        let translated_text = body
            .translated_text
            .filter(|t| !t.is_empty())
            .ok_or_else(|| TranslateError::InvalidResponse {
                provider: PROVIDER.to_string(),
                reason: "No translatedText in response".to_string(),
            })?;

        Ok(Translation {
            text: translated_text,
            from,
            to,
            provider: PROVIDER.to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "LibreTranslate".to_string(),
            requires_api_key: self.api_key.is_some(),
            free_tier_available: true,
        }
    }
}
