use serde::{Deserialize, Serialize};

/// One row of the user engagement aggregation, one per distinct user.
/// Engagement is likes plus retweets, summed upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStatsRow {
    pub user: String,
    pub total_engagement: i64,
    pub total_likes: i64,
}
