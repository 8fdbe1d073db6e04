mod create_poll_form;
mod error_display;
mod loading_spinner;
mod poll_detail;

pub use create_poll_form::CreatePollForm;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use poll_detail::PollDetail;
