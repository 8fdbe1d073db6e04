use serde::{Deserialize, Serialize};

use super::PollOption;

/// A poll as it appears in list views: no options attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollSummary {
    pub id: i32,
    pub question: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A poll with its options, ordered by option id ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollWithOptions {
    pub id: i32,
    pub question: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub options: Vec<PollOption>,
}

/// Validated input for a new poll: trimmed question plus at least two
/// trimmed, non-empty option texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollDraft {
    pub question: String,
    pub options: Vec<String>,
}
