//! Text backends — pluggable, trait-based producers of asset bundles.
//!
//! Default: `TemplateBackend` (pure-Rust, deterministic, fully testable).
//! With `ANTHROPIC_API_KEY` set: `ClaudeBackend` (phrasing via Claude).
//!
//! `AppState` holds an `Arc<dyn TextBackend>`, selected once at startup.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::generation::prompts::{BUNDLE_PROMPT_TEMPLATE, BUNDLE_SYSTEM};
use crate::generation::templates::build_bundle;
use crate::generation::tone::voice_for;
use crate::llm_client::prompts::SHAPE_INSTRUCTION;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::bundle::AssetBundle;
use crate::models::profile::BusinessProfile;

/// The text backend trait. Implement this to swap backends without touching
/// the endpoint, handler, or generator code.
///
/// Carried in `AppState` as `Arc<dyn TextBackend>`.
#[async_trait]
pub trait TextBackend: Send + Sync {
    /// Short name for logs: "template" | "claude".
    fn name(&self) -> &'static str;

    async fn generate(&self, profile: &BusinessProfile) -> Result<AssetBundle, AppError>;
}

/// Deterministic template backend. Fast, no credential, byte-identical
/// output for identical input.
pub struct TemplateBackend;

#[async_trait]
impl TextBackend for TemplateBackend {
    fn name(&self) -> &'static str {
        "template"
    }

    async fn generate(&self, profile: &BusinessProfile) -> Result<AssetBundle, AppError> {
        Ok(build_bundle(profile))
    }
}

/// Claude-backed phrasing. One bounded call per generation; any failure
/// fails closed as a generation error, never a partial bundle.
pub struct ClaudeBackend {
    llm: LlmClient,
}

impl ClaudeBackend {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl TextBackend for ClaudeBackend {
    fn name(&self) -> &'static str {
        "claude"
    }

    async fn generate(&self, profile: &BusinessProfile) -> Result<AssetBundle, AppError> {
        let prompt = build_bundle_prompt(profile)?;
        self.llm
            .call_json::<AssetBundle>(&prompt, BUNDLE_SYSTEM)
            .await
            .map_err(|e| match e {
                LlmError::Timeout => {
                    AppError::Generation("bundle generation timed out".to_string())
                }
                other => AppError::Generation(format!("bundle generation call failed: {other}")),
            })
    }
}

/// Builds the bundle prompt by filling the template with the serialized
/// profile and tone calibration.
fn build_bundle_prompt(profile: &BusinessProfile) -> Result<String, AppError> {
    let profile_json = serde_json::to_string_pretty(profile)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize profile: {e}")))?;

    let voice = voice_for(profile.tone);
    let tone_json = serde_json::to_string(&serde_json::json!({
        "opener": voice.opener,
        "bridge": voice.bridge,
        "cta": voice.cta,
        "headline_lead": voice.headline_lead,
        "tagline": voice.tagline,
    }))
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize tone: {e}")))?;

    Ok(BUNDLE_PROMPT_TEMPLATE
        .replace("{shape_instruction}", SHAPE_INSTRUCTION)
        .replace("{profile_json}", &profile_json)
        .replace("{tone}", profile.tone.as_str())
        .replace("{tone_json}", &tone_json))
}
