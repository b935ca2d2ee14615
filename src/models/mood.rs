use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Self-reported mood used by the writing therapist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Good,
    Neutral,
    Bad,
}

impl FromStr for Mood {
    type Err = String;

    /// Case-insensitive; surrounding whitespace is not trimmed
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "good" => Ok(Mood::Good),
            "neutral" => Ok(Mood::Neutral),
            "bad" => Ok(Mood::Bad),
            other => Err(format!("unknown mood '{}'", other)),
        }
    }
}

/// Sentiment class detected from free text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Compound scores at or beyond this magnitude are non-neutral
    pub const THRESHOLD: f64 = 0.05;

    /// Classifies a VADER compound score
    pub fn from_compound(score: f64) -> Self {
        if score >= Self::THRESHOLD {
            Sentiment::Positive
        } else if score <= -Self::THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Parses the capitalized labels used in `responses.csv`
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Positive" => Some(Sentiment::Positive),
            "Neutral" => Some(Sentiment::Neutral),
            "Negative" => Some(Sentiment::Negative),
            _ => None,
        }
    }
}

impl Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Neutral => write!(f, "neutral"),
            Sentiment::Negative => write!(f, "negative"),
        }
    }
}
