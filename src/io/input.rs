use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::models::{DiarizationTurn, StageEvaluations, WhisperResponse, WhisperWord};

/// Rejection reasons for malformed collaborator output
///
/// Raised only at this boundary; the pipeline itself never fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("entry {index} has a non-finite timestamp")]
    NonFiniteTimestamp { index: usize },
    #[error("entry {index} has a negative timestamp")]
    NegativeTimestamp { index: usize },
    #[error("entry {index} ends before it starts")]
    ReversedInterval { index: usize },
    #[error("diarization turn {index} has an empty speaker label")]
    EmptySpeaker { index: usize },
}

/// Parse a whisper-style transcription file into a flat word sequence
pub fn parse_whisper_file(path: &Path) -> Result<Vec<WhisperWord>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    parse_whisper_json(&content)
}

/// Parse whisper-style transcription JSON into a flat word sequence
pub fn parse_whisper_json(json: &str) -> Result<Vec<WhisperWord>> {
    let response: WhisperResponse =
        serde_json::from_str(json).context("Failed to parse transcription JSON")?;
    let words = response.into_words();
    validate_intervals(words.iter().map(|w| (w.start, w.end)))?;
    Ok(words)
}

/// Parse a diarization turn file (JSON array of start/end/speaker)
pub fn parse_diarization_file(path: &Path) -> Result<Vec<DiarizationTurn>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    parse_diarization_json(&content)
}

/// Parse diarization JSON into a turn sequence
pub fn parse_diarization_json(json: &str) -> Result<Vec<DiarizationTurn>> {
    let turns: Vec<DiarizationTurn> =
        serde_json::from_str(json).context("Failed to parse diarization JSON")?;
    validate_intervals(turns.iter().map(|t| (t.start, t.end)))?;
    for (index, turn) in turns.iter().enumerate() {
        if turn.speaker.trim().is_empty() {
            return Err(InputError::EmptySpeaker { index }.into());
        }
    }
    Ok(turns)
}

/// Parse a stage evaluation file (mapping keyed by the four stage keys)
pub fn parse_evaluations_file(path: &Path) -> Result<StageEvaluations> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    parse_evaluations_json(&content)
}

/// Parse stage evaluation JSON
pub fn parse_evaluations_json(json: &str) -> Result<StageEvaluations> {
    serde_json::from_str(json).context("Failed to parse evaluations JSON")
}

fn validate_intervals(
    intervals: impl Iterator<Item = (f64, f64)>,
) -> std::result::Result<(), InputError> {
    for (index, (start, end)) in intervals.enumerate() {
        if !start.is_finite() || !end.is_finite() {
            return Err(InputError::NonFiniteTimestamp { index });
        }
        if start < 0.0 || end < 0.0 {
            return Err(InputError::NegativeTimestamp { index });
        }
        if end < start {
            return Err(InputError::ReversedInterval { index });
        }
    }
    Ok(())
}
