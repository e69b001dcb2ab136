// crates/domain/src/tokenize.rs
use regex::Regex;
use wordfreq_shared_kernel::Token;

/// Maximal runs of non-word characters act as separators. Word characters
/// are the Unicode word class: letters, digits, marks, underscore.
const WORD_BREAK: &str = r"\W+";

/// Splits lines into lowercased tokens.
///
/// Pure per line: no side effects, no state across calls. A line made
/// entirely of separators yields nothing.
pub struct Tokenizer {
    word_break: Regex,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self { word_break: Regex::new(WORD_BREAK).expect("word-break pattern compiles") }
    }

    /// Tokens of `line`, in order of appearance.
    ///
    /// Splitting can surface empty fragments at line boundaries; those are
    /// filtered, never counted. Case folding is `str::to_lowercase`, which
    /// is locale-independent.
    pub fn tokenize<'a>(&'a self, line: &'a str) -> impl Iterator<Item = Token> + 'a {
        self.word_break
            .split(line)
            .filter(|fragment| !fragment.is_empty())
            .map(|fragment| Token::new(fragment.to_lowercase()))
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
