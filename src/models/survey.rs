use serde::Deserialize;

/// Names of the categorical survey columns, in feature order
pub const SURVEY_FIELDS: [&str; 4] = [
    "exercise_frequency",
    "social_media_hours",
    "stress_level",
    "mindfulness_frequency",
];

/// Lifestyle survey answers used to pick a habit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Survey {
    pub exercise_frequency: String,
    pub social_media_hours: String,
    pub stress_level: String,
    pub mindfulness_frequency: String,
}

impl Survey {
    /// Answers in `SURVEY_FIELDS` order
    pub fn answers(&self) -> [&str; 4] {
        [
            &self.exercise_frequency,
            &self.social_media_hours,
            &self.stress_level,
            &self.mindfulness_frequency,
        ]
    }
}

/// Row of `habit_data.csv`
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyRecord {
    pub exercise_frequency: String,
    pub social_media_hours: String,
    pub stress_level: String,
    pub mindfulness_frequency: String,
    pub recommended_habit: String,
}

impl SurveyRecord {
    /// Splits the row into the survey answers and its label
    pub fn into_parts(self) -> (Survey, String) {
        (
            Survey {
                exercise_frequency: self.exercise_frequency,
                social_media_hours: self.social_media_hours,
                stress_level: self.stress_level,
                mindfulness_frequency: self.mindfulness_frequency,
            },
            self.recommended_habit,
        )
    }
}
