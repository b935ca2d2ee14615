//! Flat-file tables the service is trained and seeded from.
//!
//! Every table is read once at startup. Nothing is written back.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::AppResult;
use crate::models::{HabitRecord, ResponseRecord, SurveyRecord, Track};

pub const SURVEY_TABLE: &str = "habit_data.csv";
pub const HABIT_TABLE: &str = "habits_data.csv";
pub const MUSIC_TABLE: &str = "music_data.csv";
pub const RESPONSE_TABLE: &str = "responses.csv";

/// Deserializes every row of a headed CSV stream
pub fn read_table<T, R>(reader: R) -> AppResult<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    let rows = reader.deserialize().collect::<Result<Vec<T>, _>>()?;
    Ok(rows)
}

/// Opens and deserializes a CSV file
pub fn load_table<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_path(path)?;
    let rows = reader
        .into_deserialize()
        .collect::<Result<Vec<T>, _>>()?;

    tracing::debug!(path = %path.display(), rows = rows.len(), "Table loaded");

    Ok(rows)
}

/// All tables the service needs, as parsed rows
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub surveys: Vec<SurveyRecord>,
    pub habits: Vec<HabitRecord>,
    pub tracks: Vec<Track>,
    pub responses: Vec<ResponseRecord>,
}

impl Tables {
    /// Loads the four tables from `data_dir`
    pub fn load(data_dir: &Path) -> anyhow::Result<Self> {
        let path = |name: &str| -> PathBuf { data_dir.join(name) };

        let tables = Self {
            surveys: load(&path(SURVEY_TABLE))?,
            habits: load(&path(HABIT_TABLE))?,
            tracks: load(&path(MUSIC_TABLE))?,
            responses: load(&path(RESPONSE_TABLE))?,
        };

        tracing::info!(
            data_dir = %data_dir.display(),
            surveys = tables.surveys.len(),
            habits = tables.habits.len(),
            tracks = tables.tracks.len(),
            responses = tables.responses.len(),
            "Data tables loaded"
        );

        Ok(tables)
    }
}

fn load<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    load_table(path).map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))
}
