mod create;
mod home;
mod poll;

pub use create::{create_poll, CreatePollFn, CreatePollPage};
pub use home::{HomePage, ListPollsFn};
pub use poll::{cast_vote, delete_poll, get_poll, CastVoteFn, DeletePollFn, GetPollFn, PollPage};
