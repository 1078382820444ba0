//! Assembles the dashboard page: title, summary cards, a two-column chart
//! row and a full-width trend row. Figures are serialized once and bound
//! with inline `Plotly.newPlot` calls; the page itself is static.

use serde::Serialize;

use crate::charts::{self, Figure};
use crate::models::{AnalysisData, SummaryStats};
use crate::render::format::{format_average, thousands};

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.32.0.min.js";

pub const WORD_CHART_ID: &str = "word-count-chart";
pub const USER_CHART_ID: &str = "user-engagement-chart";
pub const SENTIMENT_CHART_ID: &str = "daily-sentiment-chart";

const STYLESHEET: &str = r#"
body { background-color: #f8f9fa; padding: 20px; margin: 0; font-family: "Helvetica Neue", Helvetica, Arial, sans-serif; }
h1 { text-align: center; color: #003366; margin-bottom: 30px; }
h2 { text-align: center; color: #333333; }
h3 { color: #333333; }
hr { border: none; border-top: 1px solid #ddd; margin: 30px 0; }
.summary-row { display: flex; justify-content: center; }
.stat-card { flex: 1; border: 1px solid #ddd; border-radius: 5px; padding: 10px; margin: 10px; text-align: center; background-color: #fff; }
.stat-card h3 { color: #003366; margin: 5px 0; }
.stat-card p { margin: 5px 0; }
.chart-row { display: flex; gap: 20px; }
.chart-col { flex: 1; min-width: 0; }
.chart { width: 100%; }
"#;

/// Render the whole dashboard to an HTML string. Called once at startup;
/// the result is served unchanged for the process lifetime.
pub fn render_dashboard(data: &AnalysisData) -> Result<String, serde_json::Error> {
    let summary = SummaryStats::compute(data);

    let word_block = chart_block(WORD_CHART_ID, &charts::word_count_chart(&data.word_counts))?;
    let user_block = chart_block(
        USER_CHART_ID,
        &charts::user_engagement_chart(&data.user_stats),
    )?;
    let sentiment_block = chart_block(
        SENTIMENT_CHART_ID,
        &charts::sentiment_line_chart(&data.daily_sentiment),
    )?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Social Media Analysis Dashboard</title>
<script src="{PLOTLY_CDN}" charset="utf-8"></script>
<style>{STYLESHEET}</style>
</head>
<body>
<h1>Social Media Analysis Dashboard</h1>

<h2>Key Metrics Summary</h2>
<div class="summary-row">
{cards}
</div>

<hr>

<div class="chart-row">
<section class="chart-col">
<h3>Text Analysis</h3>
{word_block}
</section>
<section class="chart-col">
<h3>User Performance</h3>
{user_block}
</section>
</div>

<hr>

<section>
<h3>Time-Series Analysis</h3>
{sentiment_block}
</section>
</body>
</html>
"#,
        cards = summary_cards(&summary),
    ))
}

fn summary_cards(summary: &SummaryStats) -> String {
    [
        stat_card(&thousands(summary.total_tweets), "Total Tweets Processed"),
        stat_card(&thousands(summary.unique_users), "Unique Users Analyzed"),
        stat_card(
            &format_average(summary.avg_likes_per_tweet),
            "Avg. Likes per Tweet",
        ),
    ]
    .join("\n")
}

fn stat_card(value: &str, label: &str) -> String {
    format!(
        r#"<div class="stat-card">
<h3>{value}</h3>
<p>{label}</p>
</div>"#
    )
}

fn chart_block<T: Serialize>(id: &str, figure: &Figure<T>) -> Result<String, serde_json::Error> {
    let spec = figure.to_json()?;
    Ok(format!(
        r#"<div id="{id}" class="chart"></div>
<script>
{{
  const fig = {spec};
  Plotly.newPlot("{id}", fig.data, fig.layout, {{ responsive: true }});
}}
</script>"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailySentimentRow, TweetArchive, UserStatsRow, WordCountRow};
    use chrono::NaiveDate;
    use csv::StringRecord;

    fn sample_data() -> AnalysisData {
        let headers = StringRecord::from(vec!["id", "text"]);
        let records = (0..1234)
            .map(|i| StringRecord::from(vec![i.to_string(), "tweet".to_string()]))
            .collect();

        AnalysisData {
            word_counts: vec![
                WordCountRow {
                    word: "the".to_string(),
                    total_count: 500,
                },
                WordCountRow {
                    word: "a".to_string(),
                    total_count: 450,
                },
            ],
            daily_sentiment: vec![DailySentimentRow {
                date: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
                avg_sentiment: 0.3,
            }],
            user_stats: vec![UserStatsRow {
                user: "user1".to_string(),
                total_engagement: 40,
                total_likes: 2468,
            }],
            tweets: TweetArchive::new(headers, records),
            emotion_sample: TweetArchive::default(),
        }
    }

    #[test]
    fn test_page_contains_all_three_chart_bindings() {
        let page = render_dashboard(&sample_data()).unwrap();

        for id in [WORD_CHART_ID, USER_CHART_ID, SENTIMENT_CHART_ID] {
            assert!(page.contains(&format!(r#"<div id="{id}" class="chart">"#)));
            assert!(page.contains(&format!(r#"Plotly.newPlot("{id}""#)));
        }
    }

    #[test]
    fn test_page_renders_formatted_summary_values() {
        let page = render_dashboard(&sample_data()).unwrap();

        // 1234 tweets, 1 user, 2468 likes / 1234 tweets = 2.00
        assert!(page.contains("1,234"));
        assert!(page.contains("Total Tweets Processed"));
        assert!(page.contains("Unique Users Analyzed"));
        assert!(page.contains("2.00"));
    }

    #[test]
    fn test_page_has_fixed_section_structure() {
        let page = render_dashboard(&sample_data()).unwrap();

        let title = page.find("<h1>Social Media Analysis Dashboard</h1>").unwrap();
        let summary = page.find("Key Metrics Summary").unwrap();
        let text = page.find("<h3>Text Analysis</h3>").unwrap();
        let users = page.find("<h3>User Performance</h3>").unwrap();
        let trend = page.find("<h3>Time-Series Analysis</h3>").unwrap();

        assert!(title < summary && summary < text && text < users && users < trend);
    }

    #[test]
    fn test_empty_data_still_renders() {
        let page = render_dashboard(&AnalysisData::default()).unwrap();

        assert!(page.contains("0.00"));
        assert!(page.contains(WORD_CHART_ID));
    }
}
