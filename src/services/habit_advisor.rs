use thiserror::Error;

use crate::models::{Survey, SurveyRecord, SURVEY_FIELDS};

use super::decision_tree::{DecisionTree, LabelEncoder, TreeError};

/// Error types for the habit advisor
#[derive(Debug, Error, PartialEq)]
pub enum AdvisorError {
    #[error("{field} has no category '{value}'")]
    UnseenValue { field: &'static str, value: String },
    #[error("Failed to train habit model: {0}")]
    Training(#[from] TreeError),
    #[error("Model produced unknown habit code {0}")]
    UnknownHabit(usize),
}

/// Decision-tree habit recommender trained on survey answers
#[derive(Debug, Clone)]
pub struct HabitAdvisor {
    encoders: [LabelEncoder; 4],
    habits: LabelEncoder,
    tree: DecisionTree,
}

impl HabitAdvisor {
    /// Encodes every survey column and fits the tree
    pub fn train(records: &[SurveyRecord]) -> Result<Self, AdvisorError> {
        let column = |i: usize| {
            LabelEncoder::fit(records.iter().map(move |r| survey_answers(r)[i]))
        };
        let encoders = [column(0), column(1), column(2), column(3)];
        let habits = LabelEncoder::fit(records.iter().map(|r| r.recommended_habit.as_str()));

        let mut samples = Vec::with_capacity(records.len());
        let mut labels = Vec::with_capacity(records.len());
        for record in records {
            let answers = survey_answers(record);
            let encoded = encode(&encoders, answers)?;
            samples.push(encoded);
            let label = habits.transform(&record.recommended_habit).ok_or_else(|| {
                AdvisorError::UnseenValue {
                    field: "recommended_habit",
                    value: record.recommended_habit.clone(),
                }
            })?;
            labels.push(label);
        }

        let tree = DecisionTree::fit(&samples, &labels)?;

        tracing::info!(
            rows = records.len(),
            habits = habits.classes().len(),
            features = tree.n_features(),
            depth = tree.depth(),
            "Habit advisor trained"
        );

        let advisor = Self {
            encoders,
            habits,
            tree,
        };
        for (field, classes) in advisor.categories() {
            tracing::debug!(field, categories = ?classes, "Survey field encoded");
        }

        Ok(advisor)
    }

    /// Picks a habit for the given answers
    pub fn recommend(&self, survey: &Survey) -> Result<&str, AdvisorError> {
        let encoded = encode(&self.encoders, survey.answers())?;
        let code = self.tree.predict(&encoded);

        self.habits
            .inverse(code)
            .ok_or(AdvisorError::UnknownHabit(code))
    }

    /// Categories accepted for each survey field
    pub fn categories(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        SURVEY_FIELDS
            .iter()
            .copied()
            .zip(self.encoders.iter().map(LabelEncoder::classes))
    }
}

fn survey_answers(record: &SurveyRecord) -> [&str; 4] {
    [
        &record.exercise_frequency,
        &record.social_media_hours,
        &record.stress_level,
        &record.mindfulness_frequency,
    ]
}

fn encode(encoders: &[LabelEncoder; 4], answers: [&str; 4]) -> Result<Vec<f64>, AdvisorError> {
    encoders
        .iter()
        .zip(answers)
        .zip(SURVEY_FIELDS)
        .map(|((encoder, value), field)| {
            encoder
                .transform(value)
                .map(|code| code as f64)
                .ok_or_else(|| AdvisorError::UnseenValue {
                    field,
                    value: value.to_string(),
                })
        })
        .collect()
}
