//! User progress record.

use serde::{Deserialize, Serialize};

/// A user's progress through the question track.
///
/// Owned and mutated by calling code; no bounds are enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    /// Index of the highest completed level.
    pub highest_completed: i64,
    /// Experience points.
    pub xp: i64,
    /// Remaining lives.
    pub lives: i64,
    /// Questions answered so far, in order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_questions: Option<Vec<i64>>,
}
