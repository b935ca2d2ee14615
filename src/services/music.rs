use crate::models::Track;

/// Static catalog of tracks tagged with a mood
#[derive(Debug, Clone, Default)]
pub struct MusicLibrary {
    tracks: Vec<Track>,
}

impl MusicLibrary {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Tracks whose mood equals `mood` ignoring case, most typical first.
    ///
    /// Each match is scored by its mean cosine similarity to every match
    /// (itself included); equal scores keep catalog order. `limit` caps
    /// the result length.
    pub fn recommend(&self, mood: &str, limit: Option<usize>) -> Vec<&Track> {
        let mood = mood.to_lowercase();
        let matches: Vec<&Track> = self
            .tracks
            .iter()
            .filter(|t| t.mood.to_lowercase() == mood)
            .collect();

        let features: Vec<[f64; 3]> = matches.iter().map(|t| t.features()).collect();
        let mut scored: Vec<(&Track, f64)> = matches
            .iter()
            .zip(&features)
            .map(|(track, f)| {
                let total: f64 = features.iter().map(|g| cosine_similarity(f, g)).sum();
                (*track, total / features.len() as f64)
            })
            .collect();

        // Stable sort keeps catalog order among equal scores
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        scored
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|(track, _)| track)
            .collect()
    }
}

/// Cosine of the angle between two vectors; 0.0 if either has no length
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a < 1e-12 || norm_b < 1e-12 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
