use super::{db_error, validation};
use crate::domain::{CastOutcome, PollOption};
use crate::infrastructure::db::VoteRepository;
use pollbox_errors::AppError;
use sea_orm::SqlErr;

/// The vote transaction service: one vote per (poll, normalized email).
pub struct CastVote {
    votes: VoteRepository,
}

impl CastVote {
    pub fn new(votes: VoteRepository) -> Self {
        Self { votes }
    }

    /// The repository runs the check-insert-increment sequence in a single
    /// transaction. Two first-time votes racing for the same (poll, email)
    /// can both pass the read; the ledger's composite key then fails the
    /// later insert, which is reported as a duplicate like any other.
    pub async fn execute(&self, option_id: i32, voter_email: &str) -> Result<PollOption, AppError> {
        let email = validation::normalize_email(voter_email)?;

        match self.votes.cast(option_id, &email).await {
            Ok(CastOutcome::Counted(option)) => {
                tracing::info!("vote recorded for option {} on poll {}", option.id, option.poll_id);
                Ok(option)
            }
            Ok(CastOutcome::OptionMissing) => {
                Err(AppError::NotFound("Option not found".to_string()))
            }
            Ok(CastOutcome::AlreadyVoted) => Err(already_voted()),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(already_voted()),
                _ => Err(db_error(err)),
            },
        }
    }
}

fn already_voted() -> AppError {
    AppError::DuplicateVote("You have already voted on this poll.".to_string())
}
