use crate::application::{CastVote, ManagePolls};
use crate::infrastructure::db::{self, PollRepository, VoteRepository};
use sea_orm::{DatabaseConnection, DbErr};
use std::sync::Arc;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";

#[derive(Clone)]
pub struct AppContext {
    pub db: DatabaseConnection,
    pub manage_polls: Arc<ManagePolls>,
    pub cast_vote: Arc<CastVote>,
}

impl AppContext {
    pub fn new(db: DatabaseConnection, admin_email: String) -> Self {
        let polls = PollRepository::new(db.clone());
        let votes = VoteRepository::new(db.clone());
        Self {
            db,
            manage_polls: Arc::new(ManagePolls::new(polls, admin_email)),
            cast_vote: Arc::new(CastVote::new(votes)),
        }
    }

    /// Connects, migrates and wires the services from the environment.
    /// `DATABASE_URL` is mandatory; `ADMIN_EMAIL` falls back to the
    /// placeholder address the delete check compares against.
    pub async fn from_env() -> Result<Self, DbErr> {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let admin_email =
            std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string());

        let db = db::create_connection(&database_url).await?;
        db::run_migrations(&db).await?;
        tracing::info!("database connected and migrations applied");

        Ok(Self::new(db, admin_email))
    }
}
