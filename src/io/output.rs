use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::analysis::ConversationAnalysis;
use crate::models::{NegotiationInfo, SpeakerTurn};

/// Machine-readable analysis report
///
/// The shape consumed by report rendering, document export, and
/// aggregate-feedback views.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub negotiation: NegotiationInfo,
    pub transcript: Vec<SpeakerTurn>,
    pub rep_speaker: Option<String>,
    pub our_word_count: usize,
    pub client_word_count: usize,
    pub our_ratio_percent: f64,
    pub total_score: u32,
    pub score_components: Vec<String>,
}

impl AnalysisReport {
    /// Build a report from a finished analysis
    pub fn new(info: &NegotiationInfo, analysis: &ConversationAnalysis) -> Self {
        Self {
            negotiation: info.clone(),
            transcript: analysis.transcript.turns.clone(),
            rep_speaker: analysis.rep_speaker.clone(),
            our_word_count: analysis.balance.our_word_count,
            client_word_count: analysis.balance.client_word_count,
            our_ratio_percent: analysis.balance.our_ratio_percent,
            total_score: analysis.score.total_score,
            score_components: analysis.score.components.clone(),
        }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Format the assembled transcript as "{speaker} (H:MM:SS): {text}" lines
pub fn render_transcript(turns: &[SpeakerTurn]) -> String {
    let mut output = String::new();
    for turn in turns {
        output.push_str(&format!(
            "{} ({}): {}\n",
            turn.speaker, turn.start_time, turn.text
        ));
    }
    output
}

/// Write the human-readable transcript to a text file
pub fn write_transcript(turns: &[SpeakerTurn], path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    write!(file, "{}", render_transcript(turns))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze_conversation, ScoreConfig};
    use crate::models::{StageEvaluations, WhisperWord};

    fn turn(speaker: &str, text: &str, start_time: &str) -> SpeakerTurn {
        SpeakerTurn {
            speaker: speaker.to_string(),
            text: text.to_string(),
            start_time: start_time.to_string(),
        }
    }

    #[test]
    fn test_render_transcript_line_format() {
        let turns = vec![
            turn("SPEAKER_00", "Hithere", "0:00:00"),
            turn("SPEAKER_01", "hello", "0:00:05"),
        ];

        let rendered = render_transcript(&turns);

        assert_eq!(
            rendered,
            "SPEAKER_00 (0:00:00): Hithere\nSPEAKER_01 (0:00:05): hello\n"
        );
    }

    #[test]
    fn test_render_empty_transcript() {
        assert_eq!(render_transcript(&[]), "");
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let words = vec![WhisperWord {
            word: "hello".to_string(),
            start: 0.0,
            end: 0.5,
            probability: None,
        }];
        let info = NegotiationInfo {
            sales_rep: "Alice Chen".to_string(),
            ..Default::default()
        };
        let analysis = analyze_conversation(
            &words,
            &[],
            &StageEvaluations::default(),
            &info,
            &ScoreConfig::default(),
        );

        let report = AnalysisReport::new(&info, &analysis);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        report.write_json(&path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["total_score"], 0);
        assert_eq!(written["transcript"][0]["speaker"], "UNKNOWN");
        assert_eq!(written["negotiation"]["sales_rep"], "Alice Chen");
    }
}
