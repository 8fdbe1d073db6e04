use crate::domain::PollDraft;
use pollbox_errors::AppError;

/// Lower-cases a voter email after a minimal syntactic check (presence of
/// `@`). Votes are deduplicated on the normalized form, so `A@x.com` and
/// `a@x.com` count as the same voter.
pub fn normalize_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim();
    if email.len() < 3 || !email.contains('@') {
        return Err(AppError::Validation(
            "A valid email address is required.".to_string(),
        ));
    }
    Ok(email.to_lowercase())
}

/// Turns raw create-poll input into a draft, or rejects it before anything
/// touches the store.
pub fn poll_draft(question: &str, options: &[String]) -> Result<PollDraft, AppError> {
    let question = question.trim();
    if question.is_empty() || options.len() < 2 {
        return Err(AppError::Validation(
            "Poll question and at least two options are required.".to_string(),
        ));
    }

    let trimmed: Vec<String> = options.iter().map(|o| o.trim().to_string()).collect();
    if trimmed.iter().any(|o| o.is_empty()) {
        return Err(AppError::Validation(
            "All options must be non-empty strings.".to_string(),
        ));
    }

    Ok(PollDraft {
        question: question.to_string(),
        options: trimmed,
    })
}
