//! Asset generation — orchestrates the request → bundle transformation.
//!
//! Flow: validated profile → backend call → shape check → bundle.
//! No partial bundles: a backend reply that violates the rendering invariant
//! is rejected whole.

use tracing::info;

use crate::errors::AppError;
use crate::generation::backend::TextBackend;
use crate::models::bundle::AssetBundle;
use crate::models::profile::BusinessProfile;

/// Runs one generation: delegates phrasing to the backend, then enforces the
/// bundle shape contract regardless of which backend produced it.
pub async fn generate_assets(
    backend: &dyn TextBackend,
    profile: &BusinessProfile,
) -> Result<AssetBundle, AppError> {
    info!(
        "Generating asset bundle for '{}' ({} tone) via {} backend",
        profile.business_name,
        profile.tone.as_str(),
        backend.name()
    );

    let bundle = backend.generate(profile).await?;

    let missing = bundle.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::Generation(format!(
            "{} backend returned an incomplete bundle: {}",
            backend.name(),
            missing.join(", ")
        )));
    }

    info!(
        "Bundle ready for '{}': {} emails, {} headlines, {} outreach rows",
        profile.business_name,
        bundle.emails.len(),
        bundle.ad_headlines.len(),
        bundle.personalized.len()
    );

    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::backend::TemplateBackend;
    use crate::models::bundle::{LandingCopy, LandingSection, OutreachRow};
    use crate::models::profile::Tone;
    use async_trait::async_trait;

    fn profile(tone: Tone) -> BusinessProfile {
        BusinessProfile {
            business_name: "Acme Solar".to_string(),
            industry: "Solar".to_string(),
            target_audience: "CA property managers".to_string(),
            offer: "Cut bills 30%".to_string(),
            tone,
            website: None,
        }
    }

    /// Backend that returns a bundle with an empty `emails` array — stands in
    /// for a model reply that parsed but violates the shape contract.
    struct IncompleteBackend;

    #[async_trait]
    impl TextBackend for IncompleteBackend {
        fn name(&self) -> &'static str {
            "incomplete"
        }

        async fn generate(&self, _profile: &BusinessProfile) -> Result<AssetBundle, AppError> {
            Ok(AssetBundle {
                icp: "icp".to_string(),
                value_prop: "value".to_string(),
                emails: vec![],
                ad_headlines: vec!["h".to_string()],
                landing: LandingCopy {
                    hero: "hero".to_string(),
                    sections: vec![LandingSection {
                        title: "t".to_string(),
                        body: "b".to_string(),
                    }],
                },
                discovery_questions: vec!["q".to_string()],
                call_script_bullets: vec!["c".to_string()],
                personalized: vec![OutreachRow {
                    company: "Acme Solar Prospect 1".to_string(),
                    contact_name: "Avery Collins".to_string(),
                    title: "Operations Manager".to_string(),
                    email: "avery@example.com".to_string(),
                    personalized_intro: "intro".to_string(),
                    email_variant: "Variant 1".to_string(),
                    cta: "cta".to_string(),
                }],
            })
        }
    }

    /// Backend that always fails — stands in for an unreachable API.
    struct FailingBackend;

    #[async_trait]
    impl TextBackend for FailingBackend {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn generate(&self, _profile: &BusinessProfile) -> Result<AssetBundle, AppError> {
            Err(AppError::Generation("backend unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_generate_with_template_backend_succeeds() {
        let bundle = generate_assets(&TemplateBackend, &profile(Tone::Bold))
            .await
            .unwrap();
        assert!(!bundle.icp.is_empty());
        assert!(!bundle.value_prop.is_empty());
        assert!(!bundle.emails.is_empty());
        assert!(!bundle.ad_headlines.is_empty());
        assert!(!bundle.landing.hero.is_empty());
        assert!(!bundle.discovery_questions.is_empty());
        assert!(!bundle.call_script_bullets.is_empty());
        assert!(bundle
            .personalized
            .iter()
            .any(|row| row.company.contains("Acme Solar")));
    }

    #[tokio::test]
    async fn test_incomplete_bundle_fails_closed() {
        let err = generate_assets(&IncompleteBackend, &profile(Tone::Professional))
            .await
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("incomplete bundle"), "got: {msg}");
        assert!(msg.contains("emails"), "got: {msg}");
    }

    #[tokio::test]
    async fn test_backend_failure_propagates_as_generation_error() {
        let err = generate_assets(&FailingBackend, &profile(Tone::Professional))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Generation(_)));
    }
}
