use serde::Serialize;

use crate::models::AnalysisData;

/// Scalar statistics for the summary card row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total_tweets: usize,
    pub unique_users: usize,
    pub avg_likes_per_tweet: f64,
}

impl SummaryStats {
    pub fn compute(data: &AnalysisData) -> Self {
        let total_tweets = data.tweets.len();
        let unique_users = data.user_stats.len();
        let total_likes: i64 = data.user_stats.iter().map(|row| row.total_likes).sum();

        // An empty archive reports 0.00 instead of dividing by zero.
        let avg_likes_per_tweet = if total_tweets == 0 {
            0.0
        } else {
            round2(total_likes as f64 / total_tweets as f64)
        };

        Self {
            total_tweets,
            unique_users,
            avg_likes_per_tweet,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
