//! Text tokenization shared by every engine entry point.

/// Sample paragraph for demos and bring-up, before a real text is wired in.
pub const SAMPLE_PARAGRAPH: &str = "In a village of La Mancha, the name of which I have no \
desire to call to mind, there lived not long since one of those gentlemen that keep a lance \
in the lance-rack, an old buckler, a lean hack, and a greyhound for coursing.";

/// Split `text` into display tokens: runs of whitespace separate words,
/// empty tokens are dropped. Every way of loading text into the engine goes
/// through this same contract.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

/// Number of tokens [`tokenize`] would produce, without allocating.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
