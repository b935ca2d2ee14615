use serde::Deserialize;

mod habit;
mod mood;
mod survey;
mod track;

pub use habit::{Habit, HabitRecord, Recommendation};
pub use mood::{Mood, Sentiment};
pub use survey::{Survey, SurveyRecord, SURVEY_FIELDS};
pub use track::{Track, TrackSummary};

/// Row of `responses.csv`
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseRecord {
    #[serde(rename = "Sentiment")]
    pub sentiment: String,
    #[serde(rename = "Response")]
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survey_record_into_parts() {
        let record = SurveyRecord {
            exercise_frequency: "Daily".to_string(),
            social_media_hours: "1-2 hours".to_string(),
            stress_level: "Low".to_string(),
            mindfulness_frequency: "Rarely".to_string(),
            recommended_habit: "Meditate".to_string(),
        };

        let (survey, label) = record.into_parts();
        assert_eq!(label, "Meditate");
        assert_eq!(survey.answers(), ["Daily", "1-2 hours", "Low", "Rarely"]);
    }

    #[test]
    fn test_track_summary_from_track() {
        let track = Track {
            title: "Sunrise".to_string(),
            file_path: "music/sunrise.mp3".to_string(),
            mood: "Relaxation".to_string(),
            feature1: 0.1,
            feature2: 0.2,
            feature3: 0.3,
        };

        let summary = TrackSummary::from(&track);
        assert_eq!(summary.title, "Sunrise");
        assert_eq!(summary.file_path, "music/sunrise.mp3");
        assert_eq!(track.features(), [0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_response_record_from_csv() {
        let data = "Sentiment,Response\nPositive,\"Great, keep going!\"\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let rows: Vec<ResponseRecord> = reader.deserialize().collect::<Result<_, _>>().unwrap();

        assert_eq!(rows[0].sentiment, "Positive");
        assert_eq!(rows[0].response, "Great, keep going!");
    }
}
