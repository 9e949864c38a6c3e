//! CSV export of the personalized-outreach table.
//!
//! Quoting contract: fields containing the delimiter, quote, or a newline
//! are quoted and internal quotes doubled; everything else stays bare.
//! The csv crate's default writer implements exactly this.

use crate::errors::AppError;
use crate::models::bundle::OutreachRow;

/// Download filename served with the CSV attachment.
pub const CSV_FILE_NAME: &str = "leadgen_personalized_outreach.csv";

const CSV_HEADER: [&str; 7] = [
    "company",
    "contact_name",
    "title",
    "email",
    "personalized_intro",
    "email_variant",
    "cta",
];

/// Renders outreach rows as a CSV document with the documented header row.
pub fn personalized_to_csv(rows: &[OutreachRow]) -> Result<String, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("CSV write failed: {e}")))?;

    for row in rows {
        writer
            .write_record([
                row.company.as_str(),
                row.contact_name.as_str(),
                row.title.as_str(),
                row.email.as_str(),
                row.personalized_intro.as_str(),
                row.email_variant.as_str(),
                row.cta.as_str(),
            ])
            .map_err(|e| AppError::Internal(anyhow::anyhow!("CSV write failed: {e}")))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("CSV flush failed: {e}")))?;

    String::from_utf8(bytes)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("CSV output was not UTF-8: {e}")))
}
