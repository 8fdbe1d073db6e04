use super::entities::{poll_option, user_vote, Options, UserVotes};
use super::poll_repository::option_data;
use crate::domain::CastOutcome;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr, TransactionTrait};

#[derive(Clone)]
pub struct VoteRepository {
    db: DatabaseConnection,
}

impl VoteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// The vote unit: resolve the option, reject a repeat (poll, email)
    /// pair, append the ledger row and bump the count — atomically. The
    /// increment runs as `votes = votes + 1` in SQL, so concurrent votes
    /// for the same option cannot overwrite each other's counts.
    pub async fn cast(&self, option_id: i32, email: &str) -> Result<CastOutcome, DbErr> {
        let txn = self.db.begin().await?;

        let Some(option) = Options::find_by_id(option_id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(CastOutcome::OptionMissing);
        };

        let existing = UserVotes::find_by_id((option.poll_id, email.to_owned()))
            .one(&txn)
            .await?;
        if existing.is_some() {
            txn.rollback().await?;
            return Ok(CastOutcome::AlreadyVoted);
        }

        user_vote::ActiveModel {
            poll_id: Set(option.poll_id),
            user_email: Set(email.to_owned()),
            created_at: Set(Some(Utc::now())),
        }
        .insert(&txn)
        .await?;

        Options::update_many()
            .col_expr(
                poll_option::Column::Votes,
                Expr::col(poll_option::Column::Votes).add(1),
            )
            .filter(poll_option::Column::Id.eq(option_id))
            .exec(&txn)
            .await?;

        let updated = Options::find_by_id(option_id)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("option disappeared mid-vote".to_owned()))?;

        txn.commit().await?;
        Ok(CastOutcome::Counted(option_data(updated)))
    }
}
