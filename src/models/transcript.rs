use serde::{Deserialize, Serialize};

/// Sentinel speaker for words outside every diarization interval
pub const UNKNOWN_SPEAKER: &str = "UNKNOWN";

/// A transcribed word with its assigned speaker label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributedWord {
    /// The word text - immutable, never changed by the pipeline
    pub word: String,
    /// Start timestamp in seconds
    pub start: f64,
    /// End timestamp in seconds
    pub end: f64,
    /// Speaker label, or UNKNOWN_SPEAKER when unattributed
    pub speaker: String,
}

/// A maximal run of consecutive same-speaker words
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerTurn {
    pub speaker: String,
    /// Word texts concatenated in original order, trimmed
    pub text: String,
    /// Elapsed time of the first word, formatted H:MM:SS
    pub start_time: String,
}

/// Assembled speaker-attributed transcript
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeakerTranscript {
    /// All turns in chronological order
    pub turns: Vec<SpeakerTurn>,
    /// Distinct speaker labels in first-appearance order
    pub speakers: Vec<String>,
}

impl SpeakerTranscript {
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_transcript() {
        let transcript = SpeakerTranscript::default();
        assert!(transcript.is_empty());
        assert!(transcript.speakers.is_empty());
    }
}
