use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Google,
    Libre,
}

fn default_from_lang() -> String {
    "fr".to_string()
}

fn default_to_lang() -> String {
    "en".to_string()
}

fn default_providers() -> Vec<ProviderKind> {
    vec![ProviderKind::Google, ProviderKind::Libre]
}

fn default_google_url() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_libre_url() -> String {
    "https://libretranslate.de/translate".to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
    /// Providers in the order they are tried
    #[serde(default = "default_providers")]
    pub providers: Vec<ProviderKind>,
    #[serde(default = "default_google_url")]
    pub google_url: String,
    #[serde(default = "default_libre_url")]
    pub libre_url: String,
    #[serde(default)]
    pub libre_api_key: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            from_lang: default_from_lang(),
            to_lang: default_to_lang(),
            providers: default_providers(),
            google_url: default_google_url(),
            libre_url: default_libre_url(),
            libre_api_key: String::new(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}
