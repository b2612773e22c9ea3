//! ORP (optimal recognition point) word splitting.
//!
//! Splits a word into the span before the focus character, the focus
//! character itself, and the span after it. The focus index is a
//! length-based heuristic approximating the word's optical center; leading
//! opening punctuation shifts the focus right without counting toward the
//! word's length.

/// Short grammatical words that read better with the focus nudged off the
/// first letter. Matched case-insensitively against the word with leading
/// punctuation already stripped.
const FUNCTION_WORDS: [&str; 26] = [
    "a", "an", "the", "and", "but", "or", "nor", "for", "yet", "so", "to", "of", "in", "on", "at",
    "by", "up", "i", "he", "we", "it", "is", "am", "be", "do", "as",
];

/// Opening punctuation and quote glyphs that may prefix a word.
const LEADING_PUNCTUATION: [char; 13] = [
    '"', '\u{201C}', '\u{201D}', '\'', '\u{2018}', '\u{2019}', '`', '(', '[', '{', '<', '¿', '¡',
];

/// Minimum effective length applied to function words so their focus does
/// not collapse to the first letter.
const FUNCTION_WORD_FLOOR: usize = 4;

/// A word divided around its focus character. All three parts borrow from
/// the input and reconstruct it exactly when concatenated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WordSplit<'a> {
    pub before: &'a str,
    pub focus: &'a str,
    pub after: &'a str,
}

impl WordSplit<'_> {
    pub const EMPTY: WordSplit<'static> = WordSplit {
        before: "",
        focus: "",
        after: "",
    };
}

/// Focus character index for a word with leading punctuation already
/// stripped. Uses only the character count of `content`.
pub fn focus_index(content: &str) -> usize {
    let mut len = content.chars().count();
    if is_function_word(content) {
        len = len.max(FUNCTION_WORD_FLOOR);
    }

    match len {
        0..=3 => 0,
        4..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        _ => 4,
    }
}

/// Number of leading opening-punctuation characters. Only a contiguous
/// prefix counts; punctuation inside the word is left alone.
pub fn leading_punctuation(word: &str) -> usize {
    word.chars()
        .take_while(|c| LEADING_PUNCTUATION.contains(c))
        .count()
}

/// Split `word` into before/focus/after spans around its focus character.
///
/// Leading punctuation shifts the focus right but does not count toward the
/// word's length. A word made entirely of punctuation keeps its first
/// character as the focus. The split always lands on character boundaries.
pub fn split(word: &str) -> WordSplit<'_> {
    if word.is_empty() {
        return WordSplit::EMPTY;
    }

    let leading = leading_punctuation(word);
    let content = &word[byte_offset(word, leading)..];

    let focus_char = if content.is_empty() {
        0
    } else {
        leading + focus_index(content)
    };

    let focus_start = byte_offset(word, focus_char);
    let focus_end = match word[focus_start..].chars().next() {
        Some(c) => focus_start + c.len_utf8(),
        None => focus_start,
    };

    WordSplit {
        before: &word[..focus_start],
        focus: &word[focus_start..focus_end],
        after: &word[focus_end..],
    }
}

fn is_function_word(content: &str) -> bool {
    FUNCTION_WORDS
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(content))
}

/// Byte offset of the `char_index`-th character, or the string's length when
/// the index runs past the end.
fn byte_offset(word: &str, char_index: usize) -> usize {
    word.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(word.len())
}
