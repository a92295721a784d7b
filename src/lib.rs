pub mod analysis;
pub mod io;
pub mod models;
pub mod stages;

pub use analysis::{
    aggregate_score, analyze_balance, analyze_conversation, count_words, resolve_rep_speaker,
    ConversationAnalysis, ConversationBalance, ScoreBreakdown, ScoreConfig,
};
pub use io::{
    parse_diarization_file, parse_diarization_json, parse_evaluations_file,
    parse_evaluations_json, parse_whisper_file, parse_whisper_json, render_transcript,
    write_transcript, AnalysisReport, InputError,
};
pub use models::{
    AttributedWord, DiarizationTurn, Grade, NegotiationInfo, NegotiationStage, SpeakerTranscript,
    SpeakerTurn, StageEvaluation, StageEvaluations, WhisperResponse, WhisperWord, UNKNOWN_SPEAKER,
};
pub use stages::{attribute_speakers, format_timestamp, segment_turns};
