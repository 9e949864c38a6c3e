// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for bundle generation — enforces JSON-only output.
pub const BUNDLE_SYSTEM: &str =
    "You are an expert B2B marketing copywriter generating lead-generation \
    assets for a small business. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Bundle generation prompt template.
/// Replace: {shape_instruction}, {profile_json}, {tone}, {tone_json}
pub const BUNDLE_PROMPT_TEMPLATE: &str = r#"{shape_instruction}

BUSINESS PROFILE (the only source of facts — do NOT invent company details):
{profile_json}

TONE: write every artifact in a {tone} voice. Calibration examples:
{tone_json}

Generate the full marketing asset bundle. Return a JSON OBJECT with this EXACT schema (no extra fields):
{
  "icp": "multi-line ideal customer profile describing who buys and why",
  "valueProp": "one-paragraph value proposition",
  "emails": ["three cold-email variants, each with a Subject: line; use {first_name} and {company} as mail-merge tokens"],
  "adHeadlines": ["five short ad headlines"],
  "landing": {
    "hero": "landing-page hero line",
    "sections": [
      {"title": "section title", "body": "section body"}
    ]
  },
  "discoveryQuestions": ["six discovery-call questions"],
  "callScriptBullets": ["six call-script bullets from open to close"],
  "personalized": [
    {
      "company": "prospect company name that references the business's campaign",
      "contactName": "full name",
      "title": "job title",
      "email": "placeholder address under example.com",
      "personalizedIntro": "one-sentence opener tailored to the prospect",
      "emailVariant": "Variant 1 | Variant 2 | Variant 3",
      "cta": "call to action"
    }
  ]
}

HARD RULES:
1. Exactly 3 emails, 5 adHeadlines, at least 3 landing sections, 6 discoveryQuestions, 6 callScriptBullets, at least 3 personalized rows
2. Every personalized row's company must include the business name — there is no contact database, these are campaign placeholders
3. Use ONLY facts from the business profile — no invented metrics, clients, or locations
4. The tone must be audible in the emails and ad headlines, not just mentioned"#;
