use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::SpeakerTranscript;

/// Speech-volume split between our negotiator and the client side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversationBalance {
    pub our_word_count: usize,
    pub client_word_count: usize,
    /// Share of all words spoken by our negotiator, 0 when there is no data
    pub our_ratio_percent: f64,
}

impl ConversationBalance {
    pub fn total_words(&self) -> usize {
        self.our_word_count + self.client_word_count
    }

    /// Whether any speech was counted at all
    pub fn has_data(&self) -> bool {
        self.total_words() > 0
    }
}

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\w+").expect("valid pattern"))
}

/// Count word tokens in a turn text.
///
/// A maximal run of word-class characters (letters, digits, underscore)
/// counts as one token; punctuation and whitespace separate and are not
/// counted.
pub fn count_words(text: &str) -> usize {
    word_pattern().find_iter(text).count()
}

/// Split total speech between the resolved representative and the client.
///
/// An unresolved representative (None) puts every word in the client
/// bucket. A transcript with no countable words yields a zero ratio,
/// never a division error.
pub fn analyze_balance(
    transcript: &SpeakerTranscript,
    rep_speaker: Option<&str>,
) -> ConversationBalance {
    let mut our_word_count = 0usize;
    let mut client_word_count = 0usize;

    for turn in &transcript.turns {
        let count = count_words(&turn.text);
        match rep_speaker {
            Some(rep) if turn.speaker == rep => our_word_count += count,
            _ => client_word_count += count,
        }
    }

    let total = our_word_count + client_word_count;
    let our_ratio_percent = if total == 0 {
        0.0
    } else {
        our_word_count as f64 / total as f64 * 100.0
    };

    ConversationBalance {
        our_word_count,
        client_word_count,
        our_ratio_percent,
    }
}
