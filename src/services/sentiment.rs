use vader_sentiment::SentimentIntensityAnalyzer;

/// Scores free text on the VADER compound scale, -1.0 to 1.0
#[cfg_attr(test, mockall::automock)]
pub trait SentimentScorer: Send + Sync {
    fn compound(&self, text: &str) -> f64;
}

/// Lexicon-based scorer backed by VADER
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderScorer;

impl SentimentScorer for VaderScorer {
    fn compound(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        // The analyzer only borrows the static lexicons, so building one per call is cheap
        let analyzer = SentimentIntensityAnalyzer::new();
        analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;

    #[test]
    fn test_vader_polarity() {
        let scorer = VaderScorer;
        assert!(scorer.compound("I love this, it is wonderful!") >= Sentiment::THRESHOLD);
        assert!(scorer.compound("This is terrible and I hate it.") <= -Sentiment::THRESHOLD);
    }

    #[test]
    fn test_vader_empty_text_is_neutral() {
        assert_eq!(
            Sentiment::from_compound(VaderScorer.compound("")),
            Sentiment::Neutral
        );
    }
}
