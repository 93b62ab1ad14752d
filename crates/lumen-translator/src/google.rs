use async_trait::async_trait;
use serde_json::Value;

use crate::{
    LanguageCode, ProviderMetadata, TranslateError, Translation, Translator, check_status,
};

const PROVIDER: &str = "google";

/// Keyless `translate_a/single` endpoint used by the web widget
#[derive(Clone)]
pub struct GoogleGtxTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleGtxTranslator {
    pub fn new(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }
}

#[async_trait]
impl Translator for GoogleGtxTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let params = [
            ("client", "gtx"),
            ("sl", from.as_str()),
            ("tl", to.as_str()),
            ("dt", "t"),
            ("q", text),
        ];

        let response = self.client.get(&self.api_url).query(&params).send().await?;

        check_status(response.status())?;

        let json: Value = response.json().await.map_err(|e| TranslateError::InvalidResponse {
            provider: PROVIDER.to_string(),
            reason: format!("Failed to parse response: {}", e),
        })?;

        let translated_text = parse_segments(&json)?;

        Ok(Translation {
            text: translated_text,
            from,
            to,
            provider: PROVIDER.to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google Translate (gtx)".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

/// Join the translated fragments of a `[[[translated, original, ...], ...], ...]` payload
pub fn parse_segments(json: &Value) -> Result<String, TranslateError> {
    let invalid = |reason: &str| TranslateError::InvalidResponse {
        provider: PROVIDER.to_string(),
        reason: reason.to_string(),
    };

    let segments = json
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("missing segment list"))?;

    let leading = segments
        .first()
        .and_then(|s| s.get(0))
        .and_then(Value::as_str)
        .unwrap_or_default();
    if leading.is_empty() {
        return Err(invalid("first segment has no translated text"));
    }

    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn single_segment() {
        let payload = json!([[["Bonjour", "Hello", null, null, 10]], null, "en"]);

        assert_eq!(parse_segments(&payload).unwrap(), "Bonjour");
    }

    #[test]
    fn segments_are_joined_in_order() {
        let payload = json!([
            [
                ["Good morning. ", "Bonjour. ", null],
                ["How are you?", "Comment allez-vous ?", null],
                [null, null, "Bonjour. Comment allez-vous ?"]
            ],
            null,
            "fr"
        ]);

        assert_eq!(
            parse_segments(&payload).unwrap(),
            "Good morning. How are you?"
        );
    }

    #[test]
    fn unexpected_shapes_are_errors() {
        for payload in [
            json!({ "sentences": [] }),
            json!([]),
            json!([[]]),
            json!([[[""]]]),
            json!([[[42, "Hello"]]]),
            json!("Bonjour"),
        ] {
            assert!(
                matches!(
                    parse_segments(&payload),
                    Err(TranslateError::InvalidResponse { .. })
                ),
                "accepted {}",
                payload
            );
        }
    }
}
