// Row types for the batch-analysis outputs and the loaded data context

pub mod analysis;
pub mod daily_sentiment;
pub mod summary;
pub mod tweet_archive;
pub mod user_stats;
pub mod word_count;

pub use analysis::*;
pub use daily_sentiment::*;
pub use summary::*;
pub use tweet_archive::*;
pub use user_stats::*;
pub use word_count::*;
