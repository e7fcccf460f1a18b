//! Cover letter pipeline: validate → build prompt → one model call.

use tracing::info;

use crate::cover_letter::prompts::COVER_LETTER_PROMPT_TEMPLATE;
use crate::cover_letter::{CoverLetterFields, CoverLetterRequest, CoverLetterResult};
use crate::errors::AppError;
use crate::llm_client::TextGenerator;

/// Interpolates the four validated fields into the cover letter template.
///
/// Single pass over the template: field values are copied verbatim and never
/// rescanned for placeholders.
pub fn build_cover_letter_prompt(fields: &CoverLetterFields<'_>) -> String {
    let mut prompt = String::with_capacity(
        COVER_LETTER_PROMPT_TEMPLATE.len()
            + fields.company.len() * 2
            + fields.position.len()
            + fields.description.len()
            + fields.cv.len(),
    );
    let mut rest = COVER_LETTER_PROMPT_TEMPLATE;

    while let Some(open) = rest.find('{') {
        prompt.push_str(&rest[..open]);
        let tail = &rest[open..];
        let placeholder = tail.find('}').map(|close| &tail[..=close]);
        let value = match placeholder {
            Some("{company}") => Some(fields.company),
            Some("{position}") => Some(fields.position),
            Some("{description}") => Some(fields.description),
            Some("{cv}") => Some(fields.cv),
            _ => None,
        };
        match (placeholder, value) {
            (Some(placeholder), Some(value)) => {
                prompt.push_str(value);
                rest = &tail[placeholder.len()..];
            }
            _ => {
                prompt.push('{');
                rest = &tail[1..];
            }
        }
    }
    prompt.push_str(rest);

    prompt
}

/// Validates the request, then asks the generator for a letter.
///
/// Validation failures return before the generator is touched.
pub async fn generate_cover_letter(
    request: &CoverLetterRequest,
    generator: &dyn TextGenerator,
) -> Result<CoverLetterResult, AppError> {
    let fields = request.validate()?;
    let prompt = build_cover_letter_prompt(&fields);

    let cover_letter = generator.generate(&prompt).await?;

    info!(
        "Generated cover letter for {} at {} ({} chars)",
        fields.position,
        fields.company,
        cover_letter.len()
    );

    Ok(CoverLetterResult::new(cover_letter))
}
