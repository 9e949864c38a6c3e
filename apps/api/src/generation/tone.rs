//! Tone calibration — maps the requested tone to the phrase sets used by the
//! template backend and to the guidance block sent to the Claude backend.

use crate::models::profile::Tone;

/// Phrase set for a single tone. Every field feeds at least one artifact so
/// switching tone observably changes the bundle — emails and ad headlines in
/// particular.
#[derive(Debug, Clone)]
pub struct ToneVoice {
    /// First line of a cold email, after the greeting.
    pub opener: &'static str,
    /// Connects the pain point to the offer inside email bodies.
    pub bridge: &'static str,
    /// Call to action, shared by emails, call script, and outreach rows.
    pub cta: &'static str,
    /// Leading flavor word(s) for ad headlines.
    pub headline_lead: &'static str,
    /// Closing tagline for the landing hero and the last ad headline.
    pub tagline: &'static str,
}

/// Returns the phrase set for a tone.
pub fn voice_for(tone: Tone) -> ToneVoice {
    match tone {
        Tone::Professional => ToneVoice {
            opener: "I'm reaching out because",
            bridge: "In practice that means",
            cta: "Would you be open to a brief call next week?",
            headline_lead: "Proven:",
            tagline: "Results you can plan around.",
        },
        Tone::Friendly => ToneVoice {
            opener: "Hope your week is going well —",
            bridge: "Here's the part we're excited about:",
            cta: "Got 15 minutes for a quick chat?",
            headline_lead: "Say hello to",
            tagline: "We make it easy.",
        },
        Tone::Bold => ToneVoice {
            opener: "Let's cut to the chase:",
            bridge: "No fine print:",
            cta: "Book a call today — this won't wait.",
            headline_lead: "Stop settling.",
            tagline: "Built to win.",
        },
        Tone::Technical => ToneVoice {
            opener: "I'll keep this concrete:",
            bridge: "The mechanics:",
            cta: "Happy to walk through the numbers on a short call.",
            headline_lead: "Measured:",
            tagline: "Verified in production, not in slides.",
        },
    }
}
