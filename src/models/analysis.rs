use crate::models::{DailySentimentRow, TweetArchive, UserStatsRow, WordCountRow};

/// Immutable snapshot of every table the upstream pipeline produced.
///
/// Built once at startup by the data loader and passed by reference into
/// the chart builders and page assembly; nothing mutates it afterwards.
#[derive(Debug, Clone, Default)]
pub struct AnalysisData {
    pub word_counts: Vec<WordCountRow>,
    pub daily_sentiment: Vec<DailySentimentRow>,
    pub user_stats: Vec<UserStatsRow>,
    pub tweets: TweetArchive,
    /// First 1000 cleaned tweets, re-read separately. Feeds the planned
    /// emotion breakdown view; nothing renders it yet.
    pub emotion_sample: TweetArchive,
}
