pub mod balance;
pub mod role;
pub mod score;

pub use balance::*;
pub use role::*;
pub use score::*;

use serde::Serialize;

use crate::models::{DiarizationTurn, NegotiationInfo, SpeakerTranscript, StageEvaluations, WhisperWord};
use crate::stages::{attribute_speakers, segment_turns};

/// Everything the pipeline derives from one conversation
#[derive(Debug, Clone, Serialize)]
pub struct ConversationAnalysis {
    pub transcript: SpeakerTranscript,
    /// Resolved speaker label for our negotiator, if any
    pub rep_speaker: Option<String>,
    pub balance: ConversationBalance,
    pub score: ScoreBreakdown,
}

/// Run the full pipeline over one conversation's inputs.
///
/// Attribution, segmentation, role resolution, balance analysis, and score
/// aggregation, in that order. Pure over its inputs; safe to call
/// concurrently with owned input sequences. An empty word sequence flows
/// through as an empty transcript and a zero-balance score.
pub fn analyze_conversation(
    words: &[WhisperWord],
    diarization: &[DiarizationTurn],
    evaluations: &StageEvaluations,
    info: &NegotiationInfo,
    config: &ScoreConfig,
) -> ConversationAnalysis {
    let attributed = attribute_speakers(words, diarization);
    let transcript = segment_turns(&attributed);
    let rep_speaker = resolve_rep_speaker(&transcript.speakers, &info.sales_rep);
    let balance = analyze_balance(&transcript, rep_speaker.as_deref());
    let score = aggregate_score(evaluations, &balance, config);

    ConversationAnalysis {
        transcript,
        rep_speaker,
        balance,
        score,
    }
}
