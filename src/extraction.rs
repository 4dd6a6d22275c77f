//! AI extraction of structured business facts from the free-text
//! business description answered during onboarding.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::Language;
use crate::error::{Result, TelarError};
use crate::profile::{AnswerValue, ProfileSnapshot};

/// Minimum description length worth sending for extraction.
pub const MIN_EXTRACTION_LENGTH: usize = 10;

/// Profile fields requested from the extraction service.
pub const EXTRACTION_FIELDS: [&str; 5] = [
    "brand_name",
    "products",
    "craft_type",
    "location",
    "unique_value",
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExtractionRequest<'a> {
    user_text: &'a str,
    fields_to_extract: Vec<&'static str>,
    language: &'static str,
}

/// Structured facts pulled out of a business description. Every field is
/// optional; the service returns null for anything not mentioned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ExtractedBusinessInfo {
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub products: Option<String>,
    #[serde(default)]
    pub craft_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub unique_value: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

impl ExtractedBusinessInfo {
    /// Merge extracted facts into the profile. Only fields the service
    /// actually returned are written; existing values are overwritten since
    /// the description is the fresher source.
    pub fn apply_to(&self, profile: &mut ProfileSnapshot) {
        let pairs = [
            ("brandName", &self.brand_name),
            ("products", &self.products),
            ("craftType", &self.craft_type),
            ("location", &self.location),
            ("uniqueValue", &self.unique_value),
        ];
        for (field, value) in pairs {
            if let Some(v) = value {
                if !v.trim().is_empty() {
                    profile.set(field, AnswerValue::from(v.clone()));
                }
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.brand_name.is_none()
            && self.products.is_none()
            && self.craft_type.is_none()
            && self.location.is_none()
            && self.unique_value.is_none()
    }
}

/// Extraction backend. The session controller calls this for answers of
/// kind `TextWithExtraction` after the answer itself is persisted, so an
/// extraction failure never loses the raw text.
pub trait BusinessExtractor: Send {
    fn extract(&self, text: &str, language: Language) -> Result<ExtractedBusinessInfo>;
}

/// HTTP extraction client against the AI service.
pub struct HttpExtractor {
    endpoint: String,
    token: Option<String>,
    http_client: reqwest::blocking::Client,
}

impl HttpExtractor {
    pub fn new(endpoint: &str, token: Option<&str>) -> Result<Self> {
        let http_client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| TelarError::Config(format!("HTTP client error: {e}")))?;
        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            http_client,
        })
    }
}

impl BusinessExtractor for HttpExtractor {
    fn extract(&self, text: &str, language: Language) -> Result<ExtractedBusinessInfo> {
        if text.trim().len() < MIN_EXTRACTION_LENGTH {
            return Err(TelarError::Extraction(format!(
                "description too short for extraction ({} chars)",
                text.trim().len()
            )));
        }

        let url = format!("{}/ai/extract-business-info", self.endpoint);
        debug!(url = %url, chars = text.len(), "requesting business info extraction");

        let request = ExtractionRequest {
            user_text: text,
            fields_to_extract: EXTRACTION_FIELDS.to_vec(),
            language: language.code(),
        };

        let mut builder = self.http_client.post(&url).json(&request);
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }

        let response = builder.send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(TelarError::Extraction(format!(
                "extraction service returned {status}: {body}"
            )));
        }

        let info: ExtractedBusinessInfo = response
            .json()
            .map_err(|e| TelarError::Extraction(format!("invalid extraction response: {e}")))?;

        info!(
            brand = info.brand_name.as_deref().unwrap_or("-"),
            craft = info.craft_type.as_deref().unwrap_or("-"),
            "extraction completed"
        );

        Ok(info)
    }
}

/// No-op extractor for sessions without an AI endpoint configured and for
/// tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExtractor;

impl BusinessExtractor for NoopExtractor {
    fn extract(&self, _text: &str, _language: Language) -> Result<ExtractedBusinessInfo> {
        Ok(ExtractedBusinessInfo::default())
    }
}
