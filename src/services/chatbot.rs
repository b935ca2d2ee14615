use std::collections::HashMap;
use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{AppError, AppResult};
use crate::models::{ResponseRecord, Sentiment};

use super::sentiment::SentimentScorer;

/// A canned reply and the sentiment that selected it
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<'a> {
    pub sentiment: Sentiment,
    pub response: &'a str,
}

/// Sentiment-driven chatbot answering from fixed response pools
pub struct Chatbot {
    scorer: Arc<dyn SentimentScorer>,
    pools: HashMap<Sentiment, Vec<String>>,
}

impl Chatbot {
    /// Builds the pools from `responses.csv` rows.
    ///
    /// Rows whose sentiment label is not `Positive`, `Neutral` or `Negative`
    /// are skipped.
    pub fn new(scorer: Arc<dyn SentimentScorer>, records: &[ResponseRecord]) -> Self {
        let mut pools: HashMap<Sentiment, Vec<String>> = HashMap::new();
        let mut skipped = 0;

        for record in records {
            match Sentiment::from_label(&record.sentiment) {
                Some(sentiment) => pools
                    .entry(sentiment)
                    .or_default()
                    .push(record.response.clone()),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::warn!(skipped, "Ignored responses with unknown sentiment label");
        }

        let chatbot = Self { scorer, pools };
        for sentiment in [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative] {
            if chatbot.pool_size(sentiment) == 0 {
                tracing::warn!(%sentiment, "No chatbot responses for sentiment");
            }
        }

        chatbot
    }

    pub fn detect(&self, text: &str) -> Sentiment {
        Sentiment::from_compound(self.scorer.compound(text))
    }

    /// Picks a reply uniformly from the pool matching the text's sentiment
    pub fn reply<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> AppResult<Reply<'_>> {
        let sentiment = self.detect(text);
        tracing::info!(%sentiment, "Chatbot detected sentiment");

        let response = self
            .pools
            .get(&sentiment)
            .and_then(|pool| pool.choose(rng))
            .ok_or_else(|| {
                AppError::Internal(format!("No chatbot responses for {} sentiment", sentiment))
            })?;

        Ok(Reply {
            sentiment,
            response,
        })
    }

    pub fn pool_size(&self, sentiment: Sentiment) -> usize {
        self.pools.get(&sentiment).map_or(0, Vec::len)
    }
}
