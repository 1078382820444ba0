//! Chart builders: pure transformations from loaded tables to figure
//! specifications. Bar charts show the first N file rows with the subset
//! re-sorted ascending, so the largest of the shown rows lands at the top
//! of the axis; rows past the cutoff never chart.

pub mod figure;

pub use figure::{Axis, BarTrace, Figure, Layout, Line, Marker, ScatterTrace, Title};

use crate::models::{DailySentimentRow, UserStatsRow, WordCountRow};

/// Bars shown on the word frequency chart.
pub const TOP_WORD_BARS: usize = 20;
/// Bars shown on the user engagement chart.
pub const TOP_USER_BARS: usize = 10;

const WORD_BAR_COLOR: &str = "#1d7a8c";
const USER_BAR_COLOR: &str = "#9c179e";
const SENTIMENT_LINE_COLOR: &str = "#006699";
const SENTIMENT_MARKER_SIZE: u32 = 5;

/// Horizontal bar chart of word frequencies: first 20 file rows, subset
/// sorted ascending by count.
pub fn word_count_chart(rows: &[WordCountRow]) -> Figure<BarTrace> {
    let mut shown: Vec<&WordCountRow> = rows.iter().take(TOP_WORD_BARS).collect();
    shown.sort_by_key(|row| row.total_count);

    let x = shown.iter().map(|row| row.total_count).collect();
    let y = shown.iter().map(|row| row.word.clone()).collect();

    Figure::single(
        BarTrace::horizontal(x, y, WORD_BAR_COLOR),
        Layout::new("Top 20 Most Frequent Words").with_axes("Total Count", "Word"),
    )
}

/// Line chart of the daily average sentiment, points ordered by date.
pub fn sentiment_line_chart(rows: &[DailySentimentRow]) -> Figure<ScatterTrace> {
    let mut points: Vec<&DailySentimentRow> = rows.iter().collect();
    points.sort_by_key(|row| row.date);

    let x = points.iter().map(|row| row.date).collect();
    let y = points.iter().map(|row| row.avg_sentiment).collect();

    Figure::single(
        ScatterTrace::spline(x, y, SENTIMENT_LINE_COLOR, SENTIMENT_MARKER_SIZE),
        Layout::new("Daily Average Sentiment Trend")
            .with_axes("Date", "Average Sentiment Score"),
    )
}

/// Horizontal bar chart of user engagement: first 10 file rows, subset
/// sorted ascending by engagement.
pub fn user_engagement_chart(rows: &[UserStatsRow]) -> Figure<BarTrace> {
    let mut shown: Vec<&UserStatsRow> = rows.iter().take(TOP_USER_BARS).collect();
    shown.sort_by_key(|row| row.total_engagement);

    let x = shown.iter().map(|row| row.total_engagement).collect();
    let y = shown.iter().map(|row| row.user.clone()).collect();

    Figure::single(
        BarTrace::horizontal(x, y, USER_BAR_COLOR),
        Layout::new("Top 10 Most Engaged Users")
            .with_axes("Total Engagement (Likes + Retweets)", "User ID"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn word(word: &str, total_count: i64) -> WordCountRow {
        WordCountRow {
            word: word.to_string(),
            total_count,
        }
    }

    fn user(user: &str, total_engagement: i64) -> UserStatsRow {
        UserStatsRow {
            user: user.to_string(),
            total_engagement,
            total_likes: 0,
        }
    }

    fn sentiment(date: (i32, u32, u32), avg_sentiment: f64) -> DailySentimentRow {
        DailySentimentRow {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            avg_sentiment,
        }
    }

    #[test]
    fn test_word_chart_caps_at_twenty_bars_sorted_ascending() {
        let rows: Vec<WordCountRow> = (0..30)
            .map(|i| word(&format!("w{i}"), 500 - i * 10))
            .collect();

        let figure = word_count_chart(&rows);
        let trace = &figure.data[0];

        assert_eq!(trace.x.len(), 20);
        assert!(trace.x.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(*trace.x.last().unwrap(), 500);
    }

    #[test]
    fn test_word_chart_truncates_before_sorting() {
        // 20 rows counting down from 500, then a 21st row larger than most
        // of them. Selection is by file position, so it must not chart.
        let mut rows: Vec<WordCountRow> = (0..20)
            .map(|i| word(&format!("w{i}"), 500 - i * 20))
            .collect();
        rows.push(word("latecomer", 499));

        let figure = word_count_chart(&rows);
        let trace = &figure.data[0];

        assert_eq!(trace.y.len(), 20);
        assert!(!trace.y.contains(&"latecomer".to_string()));
        // The shown subset is still re-sorted ascending by count.
        assert!(trace.x.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_word_chart_keeps_all_rows_when_under_cap() {
        let rows = vec![word("a", 3), word("b", 9), word("c", 6)];

        let figure = word_count_chart(&rows);
        let trace = &figure.data[0];

        assert_eq!(trace.x, vec![3, 6, 9]);
        assert_eq!(trace.y, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_engagement_chart_caps_at_ten_bars_sorted_ascending() {
        let rows: Vec<UserStatsRow> = (0..15).map(|i| user(&format!("u{i}"), i * 7)).collect();

        let figure = user_engagement_chart(&rows);
        let trace = &figure.data[0];

        assert_eq!(trace.x.len(), 10);
        assert!(trace.x.windows(2).all(|pair| pair[0] <= pair[1]));
        // Only the first ten file rows are eligible.
        assert!(!trace.y.contains(&"u14".to_string()));
    }

    #[test]
    fn test_sentiment_chart_orders_points_by_date() {
        let rows = vec![
            sentiment((2020, 3, 1), 0.2),
            sentiment((2020, 1, 1), -0.4),
            sentiment((2020, 2, 1), 0.1),
        ];

        let figure = sentiment_line_chart(&rows);
        let trace = &figure.data[0];

        assert_eq!(trace.x.len(), 3);
        assert!(trace.x.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(trace.y, vec![-0.4, 0.1, 0.2]);
    }

    #[test]
    fn test_empty_tables_produce_empty_traces() {
        assert!(word_count_chart(&[]).data[0].x.is_empty());
        assert!(user_engagement_chart(&[]).data[0].x.is_empty());
        assert!(sentiment_line_chart(&[]).data[0].x.is_empty());
    }
}
