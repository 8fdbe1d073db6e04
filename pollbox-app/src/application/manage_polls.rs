use super::{db_error, validation};
use crate::domain::{PollSummary, PollWithOptions};
use crate::infrastructure::db::PollRepository;
use pollbox_errors::AppError;

/// The poll CRUD service: create, list, fetch and (admin-only) delete.
pub struct ManagePolls {
    polls: PollRepository,
    admin_email: String,
}

impl ManagePolls {
    pub fn new(polls: PollRepository, admin_email: String) -> Self {
        Self {
            polls,
            admin_email: admin_email.to_lowercase(),
        }
    }

    pub async fn create(
        &self,
        question: &str,
        options: &[String],
    ) -> Result<PollWithOptions, AppError> {
        let draft = validation::poll_draft(question, options)?;
        let poll = self.polls.create(&draft).await.map_err(db_error)?;
        tracing::info!("created poll {} with {} options", poll.id, poll.options.len());
        Ok(poll)
    }

    pub async fn list(&self) -> Result<Vec<PollSummary>, AppError> {
        let polls = self.polls.list().await.map_err(db_error)?;
        Ok(polls
            .into_iter()
            .map(|p| PollSummary {
                id: p.id,
                question: p.question,
                created_at: p.created_at,
            })
            .collect())
    }

    pub async fn get(&self, id: i32) -> Result<PollWithOptions, AppError> {
        self.polls
            .find_with_options(id)
            .await
            .map_err(db_error)?
            .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))
    }

    /// The authorization here is a shared-secret email with no credential
    /// proof; it gates nothing security-critical and is compared only after
    /// normalization.
    pub async fn delete(&self, id: i32, requester_email: &str) -> Result<(), AppError> {
        let requester = requester_email.trim().to_lowercase();
        if requester.is_empty() {
            return Err(AppError::Validation(
                "Admin email is required to delete.".to_string(),
            ));
        }
        if requester != self.admin_email {
            tracing::warn!("delete attempt denied for poll {id} by email: {requester}");
            return Err(AppError::Forbidden(
                "Forbidden: You do not have permission to delete this poll.".to_string(),
            ));
        }

        if !self.polls.delete(id).await.map_err(db_error)? {
            return Err(AppError::NotFound("Poll not found".to_string()));
        }
        tracing::info!("poll {id} deleted by admin email: {requester}");
        Ok(())
    }
}
