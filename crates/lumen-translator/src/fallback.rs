use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lumen_config::ProviderKind;
use lumen_config::translator::TranslatorConfig;

use crate::{
    GoogleGtxTranslator, LanguageCode, LibreTranslator, ProviderMetadata, TranslateError,
    Translation, Translator,
};

/// Tries each provider once, in order, and returns the first success.
///
/// Provider failures are logged and swallowed; only exhausting the whole
/// chain is reported to the caller.
#[derive(Clone)]
pub struct FallbackTranslator {
    providers: Vec<Arc<dyn Translator>>,
}

impl FallbackTranslator {
    pub fn new(providers: Vec<Arc<dyn Translator>>) -> Self {
        Self { providers }
    }

    pub fn from_config(config: &TranslatorConfig) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("lumen/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        let providers = config
            .providers
            .iter()
            .map(|kind| -> Arc<dyn Translator> {
                match kind {
                    ProviderKind::Google => Arc::new(GoogleGtxTranslator::new(
                        client.clone(),
                        config.google_url.clone(),
                    )),
                    ProviderKind::Libre => Arc::new(LibreTranslator::new(
                        client.clone(),
                        config.libre_url.clone(),
                        Some(config.libre_api_key.clone()),
                    )),
                }
            })
            .collect();

        Ok(Self::new(providers))
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[async_trait]
impl Translator for FallbackTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        for provider in &self.providers {
            let name = provider.metadata().name;
            match provider.translate(text, from.clone(), to.clone()).await {
                Ok(translation) => {
                    tracing::debug!("{} translated {} chars", name, text.chars().count());
                    return Ok(translation);
                }
                Err(e) => {
                    tracing::warn!("{} failed, trying next provider: {}", name, e);
                }
            }
        }

        Err(TranslateError::AllProvidersFailed)
    }

    fn metadata(&self) -> ProviderMetadata {
        let names: Vec<String> = self.providers.iter().map(|p| p.metadata().name).collect();

        ProviderMetadata {
            name: names.join(" -> "),
            requires_api_key: self.providers.iter().all(|p| p.metadata().requires_api_key),
            free_tier_available: self.providers.iter().any(|p| p.metadata().free_tier_available),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Provider that always answers the same way and counts its calls
    struct Scripted {
        name: &'static str,
        reply: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl Scripted {
        fn new(name: &'static str, reply: Option<&'static str>) -> Arc<Self> {
            Arc::new(Self {
                name,
                reply,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl Translator for Scripted {
        async fn translate(
            &self,
            _text: &str,
            from: LanguageCode,
            to: LanguageCode,
        ) -> Result<Translation, TranslateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Some(text) => Ok(Translation {
                    text: text.to_string(),
                    from,
                    to,
                    provider: self.name.to_string(),
                }),
                None => Err(TranslateError::ApiError("HTTP 500".to_string())),
            }
        }

        fn metadata(&self) -> ProviderMetadata {
            ProviderMetadata {
                name: self.name.to_string(),
                requires_api_key: false,
                free_tier_available: true,
            }
        }
    }

    #[tokio::test]
    async fn first_success_short_circuits() {
        let primary = Scripted::new("primary", Some("Hello"));
        let secondary = Scripted::new("secondary", Some("Hi"));
        let chain = FallbackTranslator::new(vec![primary.clone(), secondary.clone()]);

        let translation = chain
            .translate("Bonjour", "fr".into(), "en".into())
            .await
            .unwrap();

        assert_eq!(translation.text, "Hello");
        assert_eq!(translation.provider, "primary");
        assert_eq!(secondary.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn falls_through_to_next_provider() {
        let primary = Scripted::new("primary", None);
        let secondary = Scripted::new("secondary", Some("Hi"));
        let chain = FallbackTranslator::new(vec![primary.clone(), secondary.clone()]);

        let translation = chain
            .translate("Salut", "fr".into(), "en".into())
            .await
            .unwrap();

        assert_eq!(translation.provider, "secondary");
        assert_eq!(primary.calls.load(Ordering::SeqCst), 1);
        assert_eq!(secondary.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn exhausted_chain_reports_single_error() {
        let primary = Scripted::new("primary", None);
        let secondary = Scripted::new("secondary", None);
        let chain = FallbackTranslator::new(vec![primary.clone(), secondary.clone()]);

        let result = chain.translate("Salut", "fr".into(), "en".into()).await;

        assert!(matches!(result, Err(TranslateError::AllProvidersFailed)));
        assert_eq!(primary.calls.load(Ordering::SeqCst), 1);
        assert_eq!(secondary.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn blank_text_skips_providers() {
        let primary = Scripted::new("primary", Some("Hello"));
        let chain = FallbackTranslator::new(vec![primary.clone()]);

        let result = chain.translate("  \n ", "fr".into(), "en".into()).await;

        assert!(matches!(result, Err(TranslateError::EmptyInput)));
        assert_eq!(primary.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn builds_chain_in_configured_order() {
        let config = TranslatorConfig {
            providers: vec![ProviderKind::Libre, ProviderKind::Google],
            ..TranslatorConfig::default()
        };

        let chain = FallbackTranslator::from_config(&config).unwrap();

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.metadata().name, "LibreTranslate -> Google Translate (gtx)");
    }
}
