use crate::models::{AttributedWord, SpeakerTranscript, SpeakerTurn};

/// Collapse consecutive same-speaker words into speaker turns.
///
/// Word texts are concatenated with no inserted separator; the source
/// tokens already carry any needed spacing. The accumulated text is
/// trimmed when a turn closes, and the final open turn is always flushed.
pub fn segment_turns(words: &[AttributedWord]) -> SpeakerTranscript {
    let mut transcript = SpeakerTranscript::default();

    let Some(first) = words.first() else {
        return transcript;
    };

    let mut current_speaker = first.speaker.clone();
    let mut current_text = String::new();
    let mut current_start = first.start;

    for word in words {
        if word.speaker != current_speaker {
            push_turn(&mut transcript, &current_speaker, &current_text, current_start);
            current_speaker = word.speaker.clone();
            current_text.clear();
            current_start = word.start;
        }
        current_text.push_str(&word.word);
    }
    push_turn(&mut transcript, &current_speaker, &current_text, current_start);

    transcript
}

fn push_turn(transcript: &mut SpeakerTranscript, speaker: &str, text: &str, start: f64) {
    if !transcript.speakers.iter().any(|s| s == speaker) {
        transcript.speakers.push(speaker.to_string());
    }
    transcript.turns.push(SpeakerTurn {
        speaker: speaker.to_string(),
        text: text.trim().to_string(),
        start_time: format_timestamp(start),
    });
}

/// Format elapsed seconds as H:MM:SS, truncated to whole seconds.
///
/// Hours are unbounded; minutes and seconds are zero-padded.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{}:{:02}:{:02}", hours, minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, start: f64, end: f64, speaker: &str) -> AttributedWord {
        AttributedWord {
            word: text.to_string(),
            start,
            end,
            speaker: speaker.to_string(),
        }
    }

    #[test]
    fn test_single_turn_concatenates_without_separator() {
        let words = vec![
            word("Hi", 0.0, 0.5, "SPEAKER_00"),
            word("there", 0.5, 1.0, "SPEAKER_00"),
        ];

        let transcript = segment_turns(&words);

        assert_eq!(transcript.turns.len(), 1);
        assert_eq!(transcript.turns[0].speaker, "SPEAKER_00");
        assert_eq!(transcript.turns[0].text, "Hithere");
        assert_eq!(transcript.turns[0].start_time, "0:00:00");
    }

    #[test]
    fn test_one_turn_per_maximal_run() {
        let words = vec![
            word(" a", 0.0, 0.2, "SPEAKER_00"),
            word(" b", 0.2, 0.4, "SPEAKER_00"),
            word(" c", 0.5, 0.7, "SPEAKER_01"),
            word(" d", 0.8, 1.0, "SPEAKER_00"),
        ];

        let transcript = segment_turns(&words);

        assert_eq!(transcript.turns.len(), 3);
        assert_eq!(transcript.turns[0].text, "a b");
        assert_eq!(transcript.turns[1].text, "c");
        assert_eq!(transcript.turns[2].text, "d");
        // Roster keeps first-appearance order, no duplicates
        assert_eq!(transcript.speakers, vec!["SPEAKER_00", "SPEAKER_01"]);
    }

    #[test]
    fn test_concatenated_turn_texts_reproduce_word_texts() {
        let words = vec![
            word("ab", 0.0, 0.2, "SPEAKER_00"),
            word("cd", 0.2, 0.4, "SPEAKER_01"),
            word("ef", 0.4, 0.6, "SPEAKER_01"),
            word("gh", 0.6, 0.8, "SPEAKER_00"),
        ];

        let transcript = segment_turns(&words);

        let joined: String = transcript.turns.iter().map(|t| t.text.as_str()).collect();
        let original: String = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(joined, original);
    }

    #[test]
    fn test_turn_start_time_is_first_word_of_run() {
        let words = vec![
            word("a", 0.0, 0.5, "SPEAKER_00"),
            word("b", 65.0, 65.5, "SPEAKER_01"),
        ];

        let transcript = segment_turns(&words);

        assert_eq!(transcript.turns[1].start_time, "0:01:05");
    }

    #[test]
    fn test_empty_input() {
        let transcript = segment_turns(&[]);
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0.0), "0:00:00");
        assert_eq!(format_timestamp(1.9), "0:00:01");
        assert_eq!(format_timestamp(65.0), "0:01:05");
        assert_eq!(format_timestamp(3661.0), "1:01:01");
        // Hours are unbounded, not wall-clock
        assert_eq!(format_timestamp(90_000.0), "25:00:00");
    }
}
