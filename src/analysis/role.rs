/// Identify which transcript speaker label is "our" negotiator.
///
/// The discriminator is the first two characters of the representative
/// name's first whitespace-delimited token (the whole name when it has no
/// internal whitespace). The first roster label containing the
/// discriminator as a substring wins. A short or common fragment can match
/// the wrong label, and a name with no matching label leaves the role
/// unresolved - callers then count all speech as client speech.
pub fn resolve_rep_speaker(speakers: &[String], sales_rep: &str) -> Option<String> {
    let first_token = sales_rep.split_whitespace().next().unwrap_or("");
    let discriminator: String = first_token.chars().take(2).collect();

    if discriminator.is_empty() {
        return None;
    }

    speakers
        .iter()
        .find(|label| label.contains(&discriminator))
        .cloned()
}
