use serde::{Deserialize, Serialize};

/// Root result from a whisper-style transcription run
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WhisperResponse {
    pub segments: Vec<WhisperSegment>,
    #[serde(default)]
    pub language: Option<String>,
}

/// A recognized segment grouping word-level timestamps
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WhisperSegment {
    #[serde(default)]
    pub words: Vec<WhisperWord>,
    /// Segment-level text (if provided), unused once words are flattened
    #[serde(default)]
    pub text: Option<String>,
}

/// A single recognized word with its timestamp pair
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WhisperWord {
    /// The word text - carries its own spacing/boundary markers
    pub word: String,
    /// Start timestamp in seconds
    pub start: f64,
    /// End timestamp in seconds
    pub end: f64,
    /// Recognition probability (0-1), only for some models
    #[serde(default)]
    pub probability: Option<f64>,
}

impl WhisperWord {
    /// Temporal midpoint of this word
    pub fn midpoint(&self) -> f64 {
        self.start + (self.end - self.start) / 2.0
    }
}

impl WhisperResponse {
    /// Flatten all segments into a single ordered word sequence
    pub fn into_words(self) -> Vec<WhisperWord> {
        self.segments
            .into_iter()
            .flat_map(|segment| segment.words)
            .collect()
    }
}
