use std::fs::File;
use std::io;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::models::{AnalysisData, TweetArchive};

pub const WORD_COUNT_FILE: &str = "mapreduce_word_count.csv";
pub const DAILY_SENTIMENT_FILE: &str = "mapreduce_daily_sentiment.csv";
pub const USER_STATS_FILE: &str = "mapreduce_user_stats.csv";
pub const CLEANED_TWEETS_FILE: &str = "tweets_cleaned.csv";

/// Row cap for the second pass over the cleaned archive.
pub const EMOTION_SAMPLE_ROWS: usize = 1000;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Required input file not found: {} (produced by {produced_by})", .path.display())]
    MissingInput {
        path: PathBuf,
        produced_by: &'static str,
    },
    #[error("Failed to read {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Reads the pipeline's CSV outputs from a single directory into an
/// [`AnalysisData`] snapshot. Every file must exist up front; the first
/// missing or unreadable one aborts the load.
#[derive(Debug, Clone)]
pub struct DataLoader {
    data_dir: PathBuf,
}

impl DataLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn load(&self) -> Result<AnalysisData, LoadError> {
        let word_counts = self.read_rows(WORD_COUNT_FILE, "the word count aggregation step")?;
        let daily_sentiment =
            self.read_rows(DAILY_SENTIMENT_FILE, "the daily sentiment aggregation step")?;
        let user_stats = self.read_rows(USER_STATS_FILE, "the user engagement aggregation step")?;
        let tweets = self.read_archive(CLEANED_TWEETS_FILE, "the tweet preprocessing step", None)?;

        // Second pass over the cleaned archive, capped at 1000 rows.
        // TODO: swap for the pipeline's emotion_totals export once it exists.
        let emotion_sample = self.read_archive(
            CLEANED_TWEETS_FILE,
            "the tweet preprocessing step",
            Some(EMOTION_SAMPLE_ROWS),
        )?;
        info!(
            "Sampled {} cleaned tweets for emotion analysis",
            emotion_sample.len()
        );

        Ok(AnalysisData {
            word_counts,
            daily_sentiment,
            user_stats,
            tweets,
            emotion_sample,
        })
    }

    fn open(
        &self,
        file_name: &str,
        produced_by: &'static str,
    ) -> Result<(PathBuf, csv::Reader<File>), LoadError> {
        let path = self.data_dir.join(file_name);
        match csv::Reader::from_path(&path) {
            Ok(reader) => Ok((path, reader)),
            Err(err) => Err(classify_open_error(path, produced_by, err)),
        }
    }

    fn read_rows<T: DeserializeOwned>(
        &self,
        file_name: &str,
        produced_by: &'static str,
    ) -> Result<Vec<T>, LoadError> {
        let (path, mut reader) = self.open(file_name, produced_by)?;

        let mut rows = Vec::new();
        for result in reader.deserialize() {
            rows.push(result.map_err(|err| LoadError::Malformed {
                path: path.clone(),
                source: err,
            })?);
        }
        Ok(rows)
    }

    fn read_archive(
        &self,
        file_name: &str,
        produced_by: &'static str,
        limit: Option<usize>,
    ) -> Result<TweetArchive, LoadError> {
        let (path, mut reader) = self.open(file_name, produced_by)?;

        let headers = reader
            .headers()
            .map_err(|err| LoadError::Malformed {
                path: path.clone(),
                source: err,
            })?
            .clone();

        let mut records = Vec::new();
        for (index, result) in reader.records().enumerate() {
            if limit.is_some_and(|limit| index >= limit) {
                break;
            }
            records.push(result.map_err(|err| LoadError::Malformed {
                path: path.clone(),
                source: err,
            })?);
        }
        Ok(TweetArchive::new(headers, records))
    }
}

fn classify_open_error(path: PathBuf, produced_by: &'static str, err: csv::Error) -> LoadError {
    let not_found = matches!(
        err.kind(),
        csv::ErrorKind::Io(io_err) if io_err.kind() == io::ErrorKind::NotFound
    );

    if not_found {
        LoadError::MissingInput { path, produced_by }
    } else {
        LoadError::Malformed { path, source: err }
    }
}
