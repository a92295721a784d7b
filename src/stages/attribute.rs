use crate::models::{AttributedWord, DiarizationTurn, WhisperWord, UNKNOWN_SPEAKER};

/// Assign one speaker label to every transcribed word.
///
/// A word belongs to the first diarization turn, in the given turn order,
/// whose inclusive interval contains the word's temporal midpoint. When
/// turns overlap at the midpoint the earlier-listed turn wins; the scan
/// order is part of the contract. Words outside every interval get
/// UNKNOWN_SPEAKER.
pub fn attribute_speakers(
    words: &[WhisperWord],
    diarization: &[DiarizationTurn],
) -> Vec<AttributedWord> {
    words
        .iter()
        .map(|word| {
            let midpoint = word.midpoint();
            let speaker = diarization
                .iter()
                .find(|turn| turn.contains(midpoint))
                .map(|turn| turn.speaker.clone())
                .unwrap_or_else(|| UNKNOWN_SPEAKER.to_string());

            AttributedWord {
                word: word.word.clone(),
                start: word.start,
                end: word.end,
                speaker,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, start: f64, end: f64) -> WhisperWord {
        WhisperWord {
            word: text.to_string(),
            start,
            end,
            probability: None,
        }
    }

    fn turn(start: f64, end: f64, speaker: &str) -> DiarizationTurn {
        DiarizationTurn {
            start,
            end,
            speaker: speaker.to_string(),
        }
    }

    #[test]
    fn test_one_output_per_word_in_order() {
        let words = vec![
            word("Hi", 0.0, 0.5),
            word("there", 0.5, 1.0),
            word("friend", 1.2, 1.8),
        ];
        let diarization = vec![turn(0.0, 1.0, "SPEAKER_00"), turn(1.0, 2.0, "SPEAKER_01")];

        let attributed = attribute_speakers(&words, &diarization);

        assert_eq!(attributed.len(), 3);
        assert_eq!(attributed[0].word, "Hi");
        assert_eq!(attributed[0].speaker, "SPEAKER_00");
        assert_eq!(attributed[1].speaker, "SPEAKER_00");
        assert_eq!(attributed[2].speaker, "SPEAKER_01");
    }

    #[test]
    fn test_midpoint_containment_is_inclusive() {
        // Midpoint 0.5 lands exactly on the turn boundary
        let words = vec![word("edge", 0.0, 1.0)];
        let diarization = vec![turn(0.5, 2.0, "SPEAKER_00")];

        let attributed = attribute_speakers(&words, &diarization);

        assert_eq!(attributed[0].speaker, "SPEAKER_00");
    }

    #[test]
    fn test_overlapping_turns_resolve_by_scan_order() {
        let words = vec![word("hm", 1.0, 1.2)];
        let diarization = vec![
            turn(0.0, 5.0, "SPEAKER_01"),
            turn(0.5, 1.5, "SPEAKER_00"),
        ];

        let attributed = attribute_speakers(&words, &diarization);

        // The earlier-listed turn wins even though the second is tighter
        assert_eq!(attributed[0].speaker, "SPEAKER_01");
    }

    #[test]
    fn test_uncovered_word_is_unknown() {
        let words = vec![word("gap", 3.0, 3.4)];
        let diarization = vec![turn(0.0, 1.0, "SPEAKER_00")];

        let attributed = attribute_speakers(&words, &diarization);

        assert_eq!(attributed[0].speaker, UNKNOWN_SPEAKER);
    }

    #[test]
    fn test_empty_diarization_marks_everything_unknown() {
        let words = vec![word("a", 0.0, 0.2), word("b", 0.2, 0.4)];

        let attributed = attribute_speakers(&words, &[]);

        assert!(attributed.iter().all(|w| w.speaker == UNKNOWN_SPEAKER));
    }

    #[test]
    fn test_empty_words() {
        let diarization = vec![turn(0.0, 1.0, "SPEAKER_00")];
        assert!(attribute_speakers(&[], &diarization).is_empty());
    }
}
