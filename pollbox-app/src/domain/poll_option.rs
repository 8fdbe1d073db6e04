use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub id: i32,
    pub poll_id: i32,
    pub text: String,
    pub votes: i32,
}
