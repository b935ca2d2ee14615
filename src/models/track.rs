use serde::{Deserialize, Serialize};

/// Row of `music_data.csv`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Track {
    pub title: String,
    pub file_path: String,
    pub mood: String,
    pub feature1: f64,
    pub feature2: f64,
    pub feature3: f64,
}

impl Track {
    /// Audio feature vector used for similarity ranking
    pub fn features(&self) -> [f64; 3] {
        [self.feature1, self.feature2, self.feature3]
    }
}

/// What the client sees of a recommended track
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackSummary {
    pub title: String,
    pub file_path: String,
}

impl From<&Track> for TrackSummary {
    fn from(track: &Track) -> Self {
        Self {
            title: track.title.clone(),
            file_path: track.file_path.clone(),
        }
    }
}
