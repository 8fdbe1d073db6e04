use super::entities::{poll, poll_option, Options, Polls};
use crate::domain::{PollDraft, PollOption, PollWithOptions};
use chrono::Utc;
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr, TransactionTrait};

#[derive(Clone)]
pub struct PollRepository {
    db: DatabaseConnection,
}

impl PollRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the poll and all of its options in one transaction; a failed
    /// option insert takes the poll row down with it.
    pub async fn create(&self, draft: &PollDraft) -> Result<PollWithOptions, DbErr> {
        let txn = self.db.begin().await?;

        let poll = poll::ActiveModel {
            question: Set(draft.question.clone()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut options = Vec::with_capacity(draft.options.len());
        for text in &draft.options {
            let option = poll_option::ActiveModel {
                poll_id: Set(poll.id),
                text: Set(text.clone()),
                votes: Set(0),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            options.push(option);
        }

        txn.commit().await?;
        Ok(assemble(poll, options))
    }

    pub async fn list(&self) -> Result<Vec<poll::Model>, DbErr> {
        Polls::find()
            .order_by_desc(poll::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    pub async fn find_with_options(&self, id: i32) -> Result<Option<PollWithOptions>, DbErr> {
        let Some(poll) = Polls::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let options = Options::find()
            .filter(poll_option::Column::PollId.eq(id))
            .order_by_asc(poll_option::Column::Id)
            .all(&self.db)
            .await?;

        Ok(Some(assemble(poll, options)))
    }

    /// Returns false when no poll row matched. Options and vote records go
    /// with the poll via `ON DELETE CASCADE`.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = Polls::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

fn assemble(poll: poll::Model, options: Vec<poll_option::Model>) -> PollWithOptions {
    PollWithOptions {
        id: poll.id,
        question: poll.question,
        created_at: poll.created_at,
        options: options.into_iter().map(option_data).collect(),
    }
}

pub(super) fn option_data(model: poll_option::Model) -> PollOption {
    PollOption {
        id: model.id,
        poll_id: model.poll_id,
        text: model.text,
        votes: model.votes,
    }
}
