use serde::{Deserialize, Serialize};

/// A diarization interval attributed to one speaker label
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiarizationTurn {
    /// Start timestamp in seconds
    pub start: f64,
    /// End timestamp in seconds
    pub end: f64,
    /// Speaker label assigned by the diarizer (e.g. "SPEAKER_00")
    pub speaker: String,
}

impl DiarizationTurn {
    /// Whether the inclusive interval [start, end] contains the given instant
    pub fn contains(&self, instant: f64) -> bool {
        self.start <= instant && instant <= self.end
    }
}
