mod cast_vote;
mod manage_polls;
pub mod validation;

pub use cast_vote::CastVote;
pub use manage_polls::ManagePolls;

fn db_error(err: sea_orm::DbErr) -> pollbox_errors::AppError {
    pollbox_errors::AppError::Database(err.to_string())
}
