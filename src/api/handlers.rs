use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::{Mood, Recommendation, Survey, TrackSummary};
use crate::services::{recommend_habits, writing, AdvisorError};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub input: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    pub mood: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub prompt: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub mood: Option<Value>,
    #[serde(default)]
    pub entry: String,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: &'static str,
}

/// Survey answers; fields stay untyped and are checked by hand so a missing
/// or non-string answer is a 400 rather than a body rejection
#[derive(Debug, Deserialize)]
pub struct HabitSurveyRequest {
    pub exercise_frequency: Option<Value>,
    pub social_media_hours: Option<Value>,
    pub stress_level: Option<Value>,
    pub mindfulness_frequency: Option<Value>,
}

impl HabitSurveyRequest {
    fn into_survey(self) -> AppResult<Survey> {
        let fields = [
            ("exercise_frequency", self.exercise_frequency),
            ("social_media_hours", self.social_media_hours),
            ("stress_level", self.stress_level),
            ("mindfulness_frequency", self.mindfulness_frequency),
        ];

        if fields.iter().any(|(_, value)| value.is_none()) {
            tracing::warn!("Habit survey missing fields");
            return Err(AppError::InvalidInput(
                "Invalid input. All fields are required.".to_string(),
            ));
        }

        let [exercise_frequency, social_media_hours, stress_level, mindfulness_frequency] =
            fields.map(|(field, value)| match value {
                Some(Value::String(answer)) => Ok(answer),
                other => Err(AppError::InvalidInput(format!(
                    "Invalid input value: {} has no category '{}'",
                    field,
                    other.unwrap_or(Value::Null)
                ))),
            });

        Ok(Survey {
            exercise_frequency: exercise_frequency?,
            social_media_hours: social_media_hours?,
            stress_level: stress_level?,
            mindfulness_frequency: mindfulness_frequency?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct HabitRecommendationResponse {
    pub recommended_habit: String,
}

#[derive(Debug, Deserialize)]
pub struct MusicRequest {
    pub mood: Option<Value>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct MusicResponse {
    pub recommendations: Vec<TrackSummary>,
}

#[derive(Debug, Deserialize)]
pub struct HabitClusteringRequest {
    /// Kept untyped so a non-numeric value is a 400 rather than a body rejection
    pub time_available: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct HabitClusteringResponse {
    pub recommendations: Vec<Recommendation>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Answer free text with a canned response matching its sentiment
pub async fn chatbot(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let input = match request.input {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(_) => return Err(AppError::InvalidInput("input must be a string.".to_string())),
    };

    let reply = state
        .inner
        .chatbot
        .reply(&input, &mut rand::thread_rng())?;

    Ok(Json(ChatResponse {
        response: reply.response.to_string(),
    }))
}

/// Provide a writing prompt for the user's mood
pub async fn writing_prompt(Json(request): Json<PromptRequest>) -> AppResult<Json<PromptResponse>> {
    let mood = parse_mood(request.mood.as_ref())?;
    let prompt = writing::writing_prompt(mood, &mut rand::thread_rng());
    Ok(Json(PromptResponse { prompt }))
}

/// Respond to a finished journal entry
pub async fn writing_feedback(
    Json(request): Json<FeedbackRequest>,
) -> AppResult<Json<FeedbackResponse>> {
    let mood = parse_mood(request.mood.as_ref())?;
    tracing::info!(?mood, entry_chars = request.entry.chars().count(), "Journal entry received");

    let feedback = writing::feedback(mood, &mut rand::thread_rng());
    Ok(Json(FeedbackResponse { feedback }))
}

/// Recommend a habit from the lifestyle survey
pub async fn recommend_habit(
    State(state): State<AppState>,
    Json(request): Json<HabitSurveyRequest>,
) -> AppResult<Json<HabitRecommendationResponse>> {
    let survey = request.into_survey()?;

    let habit = state.inner.advisor.recommend(&survey).map_err(|e| match e {
        AdvisorError::UnseenValue { .. } => {
            tracing::warn!(error = %e, "Habit survey rejected");
            AppError::InvalidInput(format!("Invalid input value: {}", e))
        }
        other => AppError::Internal(other.to_string()),
    })?;

    tracing::info!(recommended_habit = %habit, "Recommended habit");

    Ok(Json(HabitRecommendationResponse {
        recommended_habit: habit.to_string(),
    }))
}

/// Recommend music for a mood
pub async fn music_recommendation(
    State(state): State<AppState>,
    Json(request): Json<MusicRequest>,
) -> AppResult<Json<MusicResponse>> {
    let mood = match request.mood {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(mood)) => mood,
        Some(_) => return Err(AppError::InvalidInput("mood must be a string.".to_string())),
    };

    let tracks = state.inner.music.recommend(&mood, request.limit);

    if tracks.is_empty() {
        return Err(AppError::NotFound("No songs found for that mood.".to_string()));
    }

    Ok(Json(MusicResponse {
        recommendations: tracks.into_iter().map(TrackSummary::from).collect(),
    }))
}

/// Pack habits into the user's available time, shortest clusters first
pub async fn habit_clustering(
    State(state): State<AppState>,
    Json(request): Json<HabitClusteringRequest>,
) -> AppResult<Json<HabitClusteringResponse>> {
    let time_available = parse_time_available(request.time_available.as_ref())?;

    let recommendations = recommend_habits(&state.inner.habits, time_available);

    tracing::info!(
        time_available,
        clusters = recommendations.len(),
        "Habit clustering completed"
    );

    if recommendations.is_empty() {
        return Err(AppError::NotFound(
            "No habits fit within your available time.".to_string(),
        ));
    }

    Ok(Json(HabitClusteringResponse { recommendations }))
}

fn parse_mood(raw: Option<&Value>) -> AppResult<Mood> {
    raw.and_then(Value::as_str)
        .and_then(|mood| mood.parse::<Mood>().ok())
        .ok_or_else(|| {
            AppError::InvalidInput(
                "Invalid mood. Please choose from good, neutral, or bad.".to_string(),
            )
        })
}

fn parse_time_available(raw: Option<&Value>) -> AppResult<f64> {
    let time = raw
        .and_then(Value::as_f64)
        .ok_or_else(|| AppError::InvalidInput("time_available must be a number.".to_string()))?;

    if !time.is_finite() || time < 0.0 {
        return Err(AppError::InvalidInput(
            "time_available must not be negative.".to_string(),
        ));
    }

    Ok(time)
}
