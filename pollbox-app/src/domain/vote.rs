use super::PollOption;

/// Outcome of the atomic vote unit.
#[derive(Debug, Clone)]
pub enum CastOutcome {
    /// The vote was recorded; the option carries its new count.
    Counted(PollOption),
    OptionMissing,
    AlreadyVoted,
}
