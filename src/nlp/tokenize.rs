/// Common functional words that carry no matching signal.
/// Articles, pronouns, prepositions, auxiliaries, and question words.
pub const STOP_WORDS: &[&str] = &[
    // articles / determiners
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "each", "every",
    // pronouns
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "you", "your", "yours",
    "he", "him", "his", "she", "her", "hers", "it", "its", "they", "them", "their", "theirs",
    // prepositions / conjunctions
    "in", "on", "at", "to", "of", "for", "with", "from", "by", "about", "into", "onto", "over",
    "under", "up", "down", "out", "off", "as", "and", "or", "but", "if", "so", "than", "then",
    // auxiliaries
    "is", "am", "are", "was", "were", "be", "been", "being", "do", "does", "did", "have", "has",
    "had", "can", "could", "will", "would", "shall", "should", "may", "might", "must",
    // question words
    "what", "which", "who", "whom", "how", "where", "when", "why",
    // misc
    "not", "no", "there", "here", "just", "also", "very", "please",
];

/// Which characters survive punctuation stripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordChars {
    /// `[A-Za-z0-9_]` only. Accented and non-Latin letters are dropped.
    #[default]
    Ascii,
    /// Any alphanumeric code point, plus `_`.
    Unicode,
}

impl WordChars {
    fn keeps(self, c: char) -> bool {
        match self {
            WordChars::Ascii => c.is_ascii_alphanumeric() || c == '_',
            WordChars::Unicode => c.is_alphanumeric() || c == '_',
        }
    }
}

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Normalize text into significant terms using the default word-character class.
pub fn tokenize(text: &str) -> Vec<String> {
    tokenize_with(text, WordChars::default())
}

/// Lowercase, strip everything that is neither a word character nor
/// whitespace, split on whitespace runs, and drop stop-words.
/// Duplicates are kept in order.
pub fn tokenize_with(text: &str, chars: WordChars) -> Vec<String> {
    let clean: String = text
        .to_lowercase()
        .chars()
        .filter(|&c| chars.keeps(c) || c.is_whitespace())
        .collect();

    clean
        .split_whitespace()
        .filter(|t| !is_stop_word(t))
        .map(str::to_string)
        .collect()
}
