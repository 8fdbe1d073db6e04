#![cfg(feature = "ssr")]

use pollbox_app::infrastructure::db::entities::{Options, Polls, UserVotes};
use pollbox_app::AppContext;
use pollbox_errors::AppError;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DbBackend, EntityTrait, Schema, Statement,
};

const ADMIN: &str = "admin@example.com";

// One pooled connection: the PRAGMA sticks, and every test statement sees
// the same in-memory database.
async fn test_context() -> AppContext {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.expect("sqlite connect");

    db.execute(Statement::from_string(
        DbBackend::Sqlite,
        "PRAGMA foreign_keys = ON;".to_owned(),
    ))
    .await
    .expect("enable foreign keys");

    let schema = Schema::new(DbBackend::Sqlite);
    for stmt in [
        schema.create_table_from_entity(Polls),
        schema.create_table_from_entity(Options),
        schema.create_table_from_entity(UserVotes),
    ] {
        db.execute(db.get_database_backend().build(&stmt))
            .await
            .expect("create table");
    }

    AppContext::new(db, ADMIN.to_string())
}

fn two_options() -> Vec<String> {
    vec!["Pizza".to_string(), "Pasta".to_string()]
}

#[tokio::test]
async fn create_poll_starts_all_options_at_zero() {
    let ctx = test_context().await;

    let poll = ctx
        .manage_polls
        .create("Pizza or Pasta?", &two_options())
        .await
        .unwrap();

    assert_eq!(poll.question, "Pizza or Pasta?");
    assert_eq!(poll.options.len(), 2);
    assert!(poll.options.iter().all(|o| o.votes == 0));

    let fetched = ctx.manage_polls.get(poll.id).await.unwrap();
    assert_eq!(fetched.options.len(), 2);
    // options come back in id order
    assert!(fetched.options.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn create_rejects_invalid_input_and_persists_nothing() {
    let ctx = test_context().await;

    let one_option = vec!["Only".to_string()];
    let blank_option = vec!["Pizza".to_string(), "   ".to_string()];

    for (question, options) in [
        ("", &two_options()),
        ("Q?", &one_option),
        ("Q?", &blank_option),
    ] {
        let err = ctx.manage_polls.create(question, options).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "{question:?} {options:?}");
    }

    assert!(ctx.manage_polls.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn repeat_vote_rejected_regardless_of_casing() {
    let ctx = test_context().await;
    let poll = ctx
        .manage_polls
        .create("Pizza or Pasta?", &two_options())
        .await
        .unwrap();
    let pizza = poll.options[0].id;

    let updated = ctx.cast_vote.execute(pizza, "a@x.com").await.unwrap();
    assert_eq!(updated.votes, 1);

    let err = ctx.cast_vote.execute(pizza, "A@X.com").await.unwrap_err();
    assert!(matches!(err, AppError::DuplicateVote(_)));

    // same email on the *other* option of the same poll is still a repeat
    let pasta = poll.options[1].id;
    let err = ctx.cast_vote.execute(pasta, " a@x.com ").await.unwrap_err();
    assert!(matches!(err, AppError::DuplicateVote(_)));

    let fetched = ctx.manage_polls.get(poll.id).await.unwrap();
    assert_eq!(fetched.options[0].votes, 1);
    assert_eq!(fetched.options[1].votes, 0);
}

#[tokio::test]
async fn distinct_emails_accumulate_independently() {
    let ctx = test_context().await;
    let poll = ctx
        .manage_polls
        .create("Pizza or Pasta?", &two_options())
        .await
        .unwrap();
    let (pizza, pasta) = (poll.options[0].id, poll.options[1].id);

    ctx.cast_vote.execute(pizza, "a@x.com").await.unwrap();
    ctx.cast_vote.execute(pasta, "b@x.com").await.unwrap();
    let third = ctx.cast_vote.execute(pizza, "c@x.com").await.unwrap();
    assert_eq!(third.votes, 2);

    let fetched = ctx.manage_polls.get(poll.id).await.unwrap();
    assert_eq!(fetched.options[0].votes, 2);
    assert_eq!(fetched.options[1].votes, 1);
}

#[tokio::test]
async fn concurrent_votes_same_email_admit_exactly_one() {
    let ctx = test_context().await;
    let poll = ctx
        .manage_polls
        .create("Pizza or Pasta?", &two_options())
        .await
        .unwrap();
    let pizza = poll.options[0].id;

    let (first, second) = tokio::join!(
        ctx.cast_vote.execute(pizza, "racer@x.com"),
        ctx.cast_vote.execute(pizza, "racer@x.com"),
    );

    let winners = [&first, &second].iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1);
    let loser = [first, second]
        .into_iter()
        .find(Result::is_err)
        .unwrap()
        .unwrap_err();
    assert!(matches!(loser, AppError::DuplicateVote(_)));

    let fetched = ctx.manage_polls.get(poll.id).await.unwrap();
    assert_eq!(fetched.options[0].votes, 1);
}

#[tokio::test]
async fn vote_on_unknown_option_is_not_found() {
    let ctx = test_context().await;
    let err = ctx.cast_vote.execute(9999, "a@x.com").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn invalid_email_is_rejected_before_the_store() {
    let ctx = test_context().await;
    let poll = ctx
        .manage_polls
        .create("Pizza or Pasta?", &two_options())
        .await
        .unwrap();

    let err = ctx
        .cast_vote
        .execute(poll.options[0].id, "not-an-email")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let votes = UserVotes::find().all(&ctx.db).await.unwrap();
    assert!(votes.is_empty());
}

#[tokio::test]
async fn delete_requires_the_admin_email() {
    let ctx = test_context().await;
    let poll = ctx
        .manage_polls
        .create("Pizza or Pasta?", &two_options())
        .await
        .unwrap();

    let err = ctx
        .manage_polls
        .delete(poll.id, "mallory@x.com")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
    assert!(ctx.manage_polls.get(poll.id).await.is_ok());

    let err = ctx.manage_polls.delete(poll.id, "  ").await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn admin_delete_cascades_to_options_and_votes() {
    let ctx = test_context().await;
    let poll = ctx
        .manage_polls
        .create("Pizza or Pasta?", &two_options())
        .await
        .unwrap();
    ctx.cast_vote
        .execute(poll.options[0].id, "a@x.com")
        .await
        .unwrap();

    // admin match is case-insensitive
    ctx.manage_polls.delete(poll.id, "Admin@Example.COM").await.unwrap();

    let err = ctx.manage_polls.get(poll.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(Options::find().all(&ctx.db).await.unwrap().is_empty());
    assert!(UserVotes::find().all(&ctx.db).await.unwrap().is_empty());

    let err = ctx.manage_polls.delete(poll.id, ADMIN).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn list_returns_newest_first_without_options() {
    let ctx = test_context().await;
    let first = ctx
        .manage_polls
        .create("First?", &two_options())
        .await
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = ctx
        .manage_polls
        .create("Second?", &two_options())
        .await
        .unwrap();

    let listed = ctx.manage_polls.list().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
}

#[tokio::test]
async fn pizza_pasta_walkthrough() {
    let ctx = test_context().await;
    let poll = ctx
        .manage_polls
        .create("Pizza or Pasta?", &two_options())
        .await
        .unwrap();
    let (pizza, pasta) = (poll.options[0].id, poll.options[1].id);

    assert_eq!(ctx.cast_vote.execute(pizza, "a@x.com").await.unwrap().votes, 1);

    let err = ctx.cast_vote.execute(pizza, "a@x.com").await.unwrap_err();
    assert!(matches!(err, AppError::DuplicateVote(_)));

    assert_eq!(ctx.cast_vote.execute(pasta, "b@x.com").await.unwrap().votes, 1);

    let fetched = ctx.manage_polls.get(poll.id).await.unwrap();
    let counts: Vec<i32> = fetched.options.iter().map(|o| o.votes).collect();
    assert_eq!(counts, vec![1, 1]);
}
