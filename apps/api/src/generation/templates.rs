//! Deterministic template backend internals — fixed templates parameterized
//! only by profile fields, so the same input always yields the same bundle.
//!
//! `{first_name}` and `{company}` inside email bodies are mail-merge tokens
//! left for the sending tool, not placeholders for this module to fill.

use crate::generation::tone::{voice_for, ToneVoice};
use crate::models::bundle::{AssetBundle, LandingCopy, LandingSection, OutreachRow};
use crate::models::profile::BusinessProfile;

/// Fixed personas for the placeholder outreach rows. No contact database
/// exists, so rows carry campaign context with stand-in people.
const OUTREACH_PERSONAS: &[(&str, &str)] = &[
    ("Avery Collins", "Operations Manager"),
    ("Jordan Blake", "Owner"),
    ("Riley Nakamura", "Head of Procurement"),
];

/// Assembles the full bundle from templates. Pure.
pub fn build_bundle(profile: &BusinessProfile) -> AssetBundle {
    let voice = voice_for(profile.tone);
    AssetBundle {
        icp: icp_text(profile),
        value_prop: value_prop_text(profile),
        emails: email_variants(profile, &voice),
        ad_headlines: ad_headlines(profile, &voice),
        landing: landing_copy(profile, &voice),
        discovery_questions: discovery_questions(profile),
        call_script_bullets: call_script_bullets(profile, &voice),
        personalized: outreach_rows(profile, &voice),
    }
}

fn icp_text(profile: &BusinessProfile) -> String {
    format!(
        "Ideal customer profile for {name}:\n\
         - Who: {audience}, active in {industry}.\n\
         - Pain: no dependable way to get \"{offer}\" without adding headcount or risk.\n\
         - Buying trigger: budget pressure, a stalled initiative, or a competitor already moving in {industry}.\n\
         - Decision style: wants proof and a low-commitment first step before a wider rollout.",
        name = profile.business_name,
        audience = profile.target_audience,
        industry = profile.industry,
        offer = profile.offer,
    )
}

fn value_prop_text(profile: &BusinessProfile) -> String {
    let mut text = format!(
        "{name} gives {audience} a direct path to \"{offer}\" — grounded in {industry} experience, without disrupting day-to-day operations.",
        name = profile.business_name,
        audience = profile.target_audience,
        offer = profile.offer,
        industry = profile.industry,
    );
    if let Some(website) = &profile.website {
        text.push_str(&format!(" Learn more at {website}."));
    }
    text
}

/// Three variants: pain-first, offer-first, short follow-up bump.
fn email_variants(profile: &BusinessProfile, voice: &ToneVoice) -> Vec<String> {
    let name = &profile.business_name;
    let audience = &profile.target_audience;
    let industry = &profile.industry;
    let offer = &profile.offer;
    vec![
        format!(
            "Subject: {offer} for {audience}\n\n\
             Hi {{first_name}},\n\n\
             {opener} most {audience} we talk to are leaving results on the table in {industry}.\n\
             {name} closes that gap: {offer}. {bridge} we do the heavy lifting and you keep the upside.\n\n\
             {cta}\n\n\
             — The {name} team",
            opener = voice.opener,
            bridge = voice.bridge,
            cta = voice.cta,
        ),
        format!(
            "Subject: A quick idea for {{company}}\n\n\
             Hi {{first_name}},\n\n\
             {opener} {name} built a repeatable way for {audience} to get \"{offer}\".\n\
             {bridge} a short pilot, measurable results, then you decide.\n\n\
             {cta}\n\n\
             — The {name} team",
            opener = voice.opener,
            bridge = voice.bridge,
            cta = voice.cta,
        ),
        format!(
            "Subject: Re: {offer}\n\n\
             Hi {{first_name}},\n\n\
             Floating this back up — if \"{offer}\" matters this quarter, {name} can show impact inside two weeks.\n\n\
             {cta}\n\n\
             — The {name} team",
            cta = voice.cta,
        ),
    ]
}

fn ad_headlines(profile: &BusinessProfile, voice: &ToneVoice) -> Vec<String> {
    let name = &profile.business_name;
    let audience = &profile.target_audience;
    let industry = &profile.industry;
    let offer = &profile.offer;
    vec![
        format!("{lead} {offer} — for {audience}", lead = voice.headline_lead),
        format!("{name}: {offer}"),
        format!("{audience}: {offer} starts here"),
        format!("{industry}, minus the guesswork — {name}"),
        format!("{offer}. {tagline}", tagline = voice.tagline),
    ]
}

fn landing_copy(profile: &BusinessProfile, voice: &ToneVoice) -> LandingCopy {
    let name = &profile.business_name;
    let audience = &profile.target_audience;
    let industry = &profile.industry;
    let offer = &profile.offer;
    let final_step = match &profile.website {
        Some(website) => format!("Visit {website} or reply to any of our emails to get started."),
        None => "Reply to any of our emails to get started.".to_string(),
    };
    LandingCopy {
        hero: format!("{name} — {offer} for {audience}. {tagline}", tagline = voice.tagline),
        sections: vec![
            LandingSection {
                title: format!("Built for {audience}"),
                body: format!(
                    "{industry} is crowded with promises. {name} focuses on the one that matters to {audience}: {offer}."
                ),
            },
            LandingSection {
                title: "What you get".to_string(),
                body: format!(
                    "A concrete plan for \"{offer}\", a named point of contact, and progress you can verify — not a black box."
                ),
            },
            LandingSection {
                title: "How it works".to_string(),
                body: format!(
                    "1. A short discovery call to confirm the fit.\n\
                     2. A scoped pilot with clear success criteria.\n\
                     3. {final_step}"
                ),
            },
        ],
    }
}

fn discovery_questions(profile: &BusinessProfile) -> Vec<String> {
    let audience = &profile.target_audience;
    let industry = &profile.industry;
    let offer = &profile.offer;
    vec![
        format!("What does \"{offer}\" translate to in your numbers today?"),
        format!("Who on your team owns outcomes like \"{offer}\"?"),
        format!("What have you already tried in {industry}, and where did it stall?"),
        format!("What would make this an obvious yes for {audience} like you?"),
        "What is the cost of waiting another quarter?".to_string(),
        "Who else needs to sign off before a pilot?".to_string(),
    ]
}

fn call_script_bullets(profile: &BusinessProfile, voice: &ToneVoice) -> Vec<String> {
    let name = &profile.business_name;
    let audience = &profile.target_audience;
    let industry = &profile.industry;
    let offer = &profile.offer;
    vec![
        format!("Open: one line on who {name} is and why you are calling."),
        format!("Hook: lead with the offer — \"{offer}\"."),
        format!("Qualify: confirm they match the profile ({audience})."),
        format!("Pain: ask where {industry} results fall short today."),
        format!("Close: {cta}", cta = voice.cta),
        "Log the outcome and book the follow-up before hanging up.".to_string(),
    ]
}

/// Placeholder prospect rows. Company names embed the business name so the
/// exported table is self-describing about which campaign it belongs to.
fn outreach_rows(profile: &BusinessProfile, voice: &ToneVoice) -> Vec<OutreachRow> {
    OUTREACH_PERSONAS
        .iter()
        .enumerate()
        .map(|(i, (contact_name, title))| {
            let company = format!("{} Prospect {}", profile.business_name, i + 1);
            let first_name = contact_name
                .split_whitespace()
                .next()
                .unwrap_or(contact_name)
                .to_ascii_lowercase();
            OutreachRow {
                email: format!("{first_name}@{}.example.com", slug(&company)),
                company,
                contact_name: contact_name.to_string(),
                title: title.to_string(),
                personalized_intro: format!(
                    "Noticed your team serves {audience} — {name} helps companies like yours get \"{offer}\".",
                    audience = profile.target_audience,
                    name = profile.business_name,
                    offer = profile.offer,
                ),
                email_variant: format!("Variant {}", (i % 3) + 1),
                cta: voice.cta.to_string(),
            }
        })
        .collect()
}

/// Lowercases and collapses non-alphanumeric runs to single dashes.
/// Used for placeholder email domains.
fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_dash = true; // suppress a leading dash
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::Tone;

    fn acme_profile(tone: Tone) -> BusinessProfile {
        BusinessProfile {
            business_name: "Acme Solar".to_string(),
            industry: "Solar".to_string(),
            target_audience: "CA property managers".to_string(),
            offer: "Cut bills 30%".to_string(),
            tone,
            website: None,
        }
    }

    #[test]
    fn test_same_input_yields_identical_bundles() {
        let profile = acme_profile(Tone::Professional);
        assert_eq!(build_bundle(&profile), build_bundle(&profile));
    }

    #[test]
    fn test_bundle_satisfies_rendering_invariant() {
        let bundle = build_bundle(&acme_profile(Tone::Bold));
        assert!(bundle.missing_fields().is_empty());
    }

    #[test]
    fn test_artifact_counts() {
        let bundle = build_bundle(&acme_profile(Tone::Friendly));
        assert_eq!(bundle.emails.len(), 3);
        assert_eq!(bundle.ad_headlines.len(), 5);
        assert_eq!(bundle.landing.sections.len(), 3);
        assert_eq!(bundle.discovery_questions.len(), 6);
        assert_eq!(bundle.call_script_bullets.len(), 6);
        assert_eq!(bundle.personalized.len(), 3);
    }

    #[test]
    fn test_tone_changes_emails_and_headlines() {
        let bold = build_bundle(&acme_profile(Tone::Bold));
        let professional = build_bundle(&acme_profile(Tone::Professional));
        assert_ne!(bold.emails[0], professional.emails[0]);
        assert_ne!(bold.ad_headlines[0], professional.ad_headlines[0]);
    }

    #[test]
    fn test_bold_email_carries_bold_cta() {
        let bundle = build_bundle(&acme_profile(Tone::Bold));
        assert!(bundle.emails[0].contains("Book a call today"));
    }

    #[test]
    fn test_outreach_company_contains_business_name() {
        let bundle = build_bundle(&acme_profile(Tone::Bold));
        assert!(bundle
            .personalized
            .iter()
            .any(|row| row.company.contains("Acme Solar")));
    }

    #[test]
    fn test_outreach_email_is_a_plausible_placeholder_address() {
        let bundle = build_bundle(&acme_profile(Tone::Professional));
        let row = &bundle.personalized[0];
        assert_eq!(row.email, "avery@acme-solar-prospect-1.example.com");
    }

    #[test]
    fn test_website_appears_in_value_prop_and_landing_when_present() {
        let mut profile = acme_profile(Tone::Professional);
        profile.website = Some("https://acmesolar.example.com".to_string());
        let bundle = build_bundle(&profile);
        assert!(bundle.value_prop.contains("https://acmesolar.example.com"));
        let steps = &bundle.landing.sections[2].body;
        assert!(steps.contains("https://acmesolar.example.com"));
    }

    #[test]
    fn test_icp_mentions_industry_and_audience() {
        let bundle = build_bundle(&acme_profile(Tone::Professional));
        assert!(bundle.icp.contains("Solar"));
        assert!(bundle.icp.contains("CA property managers"));
    }

    #[test]
    fn test_slug_collapses_punctuation_and_spaces() {
        assert_eq!(slug("Acme Solar Prospect 1"), "acme-solar-prospect-1");
        assert_eq!(slug("  A&B  Co. "), "a-b-co");
        assert_eq!(slug("Ünïcode Näme"), "n-code-n-me");
    }
}
