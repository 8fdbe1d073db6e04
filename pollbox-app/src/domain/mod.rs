mod poll;
mod poll_option;
mod vote;

pub use poll::{PollDraft, PollSummary, PollWithOptions};
pub use poll_option::PollOption;
pub use vote::CastOutcome;
