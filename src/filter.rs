use serde::Serialize;
use std::{collections::HashSet, sync::LazyLock};

/// English stopwords, lowercase.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
        "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his",
        "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself",
        "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
        "that", "that'll", "these", "those", "am", "is", "are", "was", "were", "be", "been",
        "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an", "the",
        "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
        "with", "about", "against", "between", "into", "through", "during", "before", "after",
        "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
        "again", "further", "then", "once", "here", "there", "when", "where", "why", "how",
        "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor",
        "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
        "just", "don", "don't", "should", "should've", "now", "d", "ll", "m", "o", "re", "ve",
        "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn", "doesn't",
        "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn",
        "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
        "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
    ]
    .into_iter()
    .collect()
});

/// Curly quotes that show up in prose alongside the ASCII set.
const CURLY_QUOTES: [char; 3] = ['\u{201c}', '\u{201d}', '\u{2019}'];

/// Which tokens are dropped before counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    None,
    Stopwords,
    Punctuation,
    Both,
}

impl FilterMode {
    pub const fn from_flags(stopwords: bool, punctuation: bool) -> Self {
        match (stopwords, punctuation) {
            (false, false) => Self::None,
            (true, false) => Self::Stopwords,
            (false, true) => Self::Punctuation,
            (true, true) => Self::Both,
        }
    }

    fn keeps(self) -> fn(&str) -> bool {
        match self {
            Self::None => |_| true,
            Self::Stopwords => |token| !is_stopword(token),
            Self::Punctuation => |token| !is_punctuation(token),
            Self::Both => |token| !is_stopword(token) && !is_punctuation(token),
        }
    }
}

pub fn is_stopword(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

/// A token is punctuation when it is exactly one ASCII punctuation character
/// or one of the curly quotes.
pub fn is_punctuation(token: &str) -> bool {
    let mut chars = token.chars();

    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_ascii_punctuation() || CURLY_QUOTES.contains(&c)
    )
}

/// Drops the tokens `mode` excludes. Order and duplicates are preserved.
pub fn filter(tokens: Vec<String>, mode: FilterMode) -> Vec<String> {
    if mode == FilterMode::None {
        return tokens;
    }

    let keeps = mode.keeps();
    tokens.into_iter().filter(|token| keeps(token)).collect()
}
