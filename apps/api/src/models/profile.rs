//! Business profile — the validated, immutable input to asset generation.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::AppError;

/// Requested voice for the generated copy. Drives phrase selection in the
/// template backend and prompt conditioning in the Claude backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Bold,
    Technical,
}

impl Tone {
    /// Parses a tone string from the form. Unknown values fall back to
    /// professional — the form only ever submits the four known options.
    pub fn parse(raw: &str) -> Tone {
        match raw.trim().to_ascii_lowercase().as_str() {
            "friendly" => Tone::Friendly,
            "bold" => Tone::Bold,
            "technical" => Tone::Technical,
            _ => Tone::Professional,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Bold => "bold",
            Tone::Technical => "technical",
        }
    }
}

/// Raw request body for `POST /api/agent`.
///
/// All fields are optional at the serde layer so that a missing field is
/// reported as a validation error naming the field, not a deserialization
/// failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAssetsRequest {
    pub business_name: Option<String>,
    pub industry: Option<String>,
    pub target_audience: Option<String>,
    pub offer: Option<String>,
    pub tone: Option<String>,
    pub website: Option<String>,
}

/// A validated business profile. Immutable once constructed; created per
/// request and discarded after generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    pub business_name: String,
    pub industry: String,
    pub target_audience: String,
    pub offer: String,
    pub tone: Tone,
    /// Absent when the form left the field empty. Guaranteed to parse as a
    /// URL when present.
    pub website: Option<String>,
}

/// Validates a raw request into a `BusinessProfile`.
///
/// Rules: businessName / industry / targetAudience / offer must be non-empty
/// after trimming; tone defaults to professional; website may be absent or
/// empty, otherwise it must parse as a URL. The error message names every
/// offending field.
pub fn validate(request: GenerateAssetsRequest) -> Result<BusinessProfile, AppError> {
    let mut missing: Vec<&str> = Vec::new();

    let business_name = required(&request.business_name, "businessName", &mut missing);
    let industry = required(&request.industry, "industry", &mut missing);
    let target_audience = required(&request.target_audience, "targetAudience", &mut missing);
    let offer = required(&request.offer, "offer", &mut missing);

    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing or empty required field(s): {}",
            missing.join(", ")
        )));
    }

    let website = match request.website.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => {
            Url::parse(raw)
                .map_err(|_| AppError::Validation(format!("website is not a valid URL: {raw}")))?;
            Some(raw.to_string())
        }
    };

    let tone = request.tone.as_deref().map(Tone::parse).unwrap_or_default();

    Ok(BusinessProfile {
        business_name,
        industry,
        target_audience,
        offer,
        tone,
        website,
    })
}

/// Returns the trimmed value, recording the field as missing when absent or
/// blank. The caller checks `missing` before using any of the values.
fn required(value: &Option<String>, field: &'static str, missing: &mut Vec<&'static str>) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => {
            missing.push(field);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> GenerateAssetsRequest {
        GenerateAssetsRequest {
            business_name: Some("Acme Solar".to_string()),
            industry: Some("Solar".to_string()),
            target_audience: Some("CA property managers".to_string()),
            offer: Some("Cut bills 30%".to_string()),
            tone: Some("bold".to_string()),
            website: Some("https://acmesolar.example.com".to_string()),
        }
    }

    #[test]
    fn test_valid_request_produces_profile() {
        let profile = validate(full_request()).unwrap();
        assert_eq!(profile.business_name, "Acme Solar");
        assert_eq!(profile.tone, Tone::Bold);
        assert_eq!(
            profile.website.as_deref(),
            Some("https://acmesolar.example.com")
        );
    }

    #[test]
    fn test_missing_business_name_names_the_field() {
        let mut request = full_request();
        request.business_name = None;
        let err = validate(request).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("businessName"), "got: {msg}");
    }

    #[test]
    fn test_whitespace_only_field_counts_as_missing() {
        let mut request = full_request();
        request.offer = Some("   ".to_string());
        let err = validate(request).unwrap_err();
        assert!(err.to_string().contains("offer"));
    }

    #[test]
    fn test_all_required_fields_reported_together() {
        let request = GenerateAssetsRequest {
            business_name: None,
            industry: None,
            target_audience: None,
            offer: None,
            tone: None,
            website: None,
        };
        let msg = validate(request).unwrap_err().to_string();
        for field in ["businessName", "industry", "targetAudience", "offer"] {
            assert!(msg.contains(field), "missing {field} in: {msg}");
        }
    }

    #[test]
    fn test_tone_defaults_to_professional_when_absent() {
        let mut request = full_request();
        request.tone = None;
        assert_eq!(validate(request).unwrap().tone, Tone::Professional);
    }

    #[test]
    fn test_unknown_tone_falls_back_to_professional() {
        let mut request = full_request();
        request.tone = Some("sassy".to_string());
        assert_eq!(validate(request).unwrap().tone, Tone::Professional);
    }

    #[test]
    fn test_tone_parse_is_case_insensitive() {
        assert_eq!(Tone::parse("Bold"), Tone::Bold);
        assert_eq!(Tone::parse("FRIENDLY"), Tone::Friendly);
        assert_eq!(Tone::parse("technical"), Tone::Technical);
    }

    #[test]
    fn test_empty_website_is_no_website() {
        let mut request = full_request();
        request.website = Some(String::new());
        assert_eq!(validate(request).unwrap().website, None);
    }

    #[test]
    fn test_absent_website_is_no_website() {
        let mut request = full_request();
        request.website = None;
        assert_eq!(validate(request).unwrap().website, None);
    }

    #[test]
    fn test_malformed_website_is_rejected() {
        let mut request = full_request();
        request.website = Some("not a url".to_string());
        let err = validate(request).unwrap_err();
        assert!(err.to_string().contains("website"));
    }

    #[test]
    fn test_https_website_is_accepted() {
        let mut request = full_request();
        request.website = Some("https://example.com".to_string());
        assert_eq!(
            validate(request).unwrap().website.as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_request_deserializes_from_camel_case_json() {
        let json = serde_json::json!({
            "businessName": "Acme Solar",
            "industry": "Solar",
            "targetAudience": "CA property managers",
            "offer": "Cut bills 30%"
        });
        let request: GenerateAssetsRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.business_name.as_deref(), Some("Acme Solar"));
        assert!(request.tone.is_none());
        assert!(request.website.is_none());
    }
}
