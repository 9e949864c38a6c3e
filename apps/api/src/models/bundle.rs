//! Asset bundle — the full set of generated artifacts returned for one request.
//!
//! Field names are camelCase on the wire; the browser UI renders them as-is.

use serde::{Deserialize, Serialize};

/// One section of landing-page copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingSection {
    pub title: String,
    pub body: String,
}

/// Landing-page copy: a hero line plus ordered sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingCopy {
    pub hero: String,
    pub sections: Vec<LandingSection>,
}

/// One row of the personalized-outreach table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutreachRow {
    pub company: String,
    pub contact_name: String,
    pub title: String,
    pub email: String,
    pub personalized_intro: String,
    pub email_variant: String,
    pub cta: String,
}

/// The complete bundle of generated marketing assets.
///
/// Invariant: every array field is non-empty and every text field is
/// non-blank when a bundle is returned to a caller — the UI assumes
/// rendering-safe arrays. `missing_fields` checks this; the generator
/// rejects any bundle that fails it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBundle {
    pub icp: String,
    pub value_prop: String,
    pub emails: Vec<String>,
    pub ad_headlines: Vec<String>,
    pub landing: LandingCopy,
    pub discovery_questions: Vec<String>,
    pub call_script_bullets: Vec<String>,
    pub personalized: Vec<OutreachRow>,
}

impl AssetBundle {
    /// Returns the names of fields that violate the rendering invariant.
    /// Empty result means the bundle is safe to return.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.icp.trim().is_empty() {
            missing.push("icp");
        }
        if self.value_prop.trim().is_empty() {
            missing.push("valueProp");
        }
        if self.emails.is_empty() {
            missing.push("emails");
        }
        if self.ad_headlines.is_empty() {
            missing.push("adHeadlines");
        }
        if self.landing.hero.trim().is_empty() {
            missing.push("landing.hero");
        }
        if self.landing.sections.is_empty() {
            missing.push("landing.sections");
        }
        if self.discovery_questions.is_empty() {
            missing.push("discoveryQuestions");
        }
        if self.call_script_bullets.is_empty() {
            missing.push("callScriptBullets");
        }
        if self.personalized.is_empty() {
            missing.push("personalized");
        }
        missing
    }
}
