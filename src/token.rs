/// Style class for a token: drives which color the theme applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleClass {
    Keyword,
    String,
    Number,
    Annotation,
    Comment,
    Plain,
}

/// One classified slice of a source line.
///
/// Tokens carry the exact text they were cut from; concatenating a line's
/// tokens in order reconstructs the line byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub class: StyleClass,
}

impl Token {
    pub fn new(text: impl Into<String>, class: StyleClass) -> Self {
        Token {
            text: text.into(),
            class,
        }
    }

    /// Unstyled token (identifiers, punctuation, whitespace).
    pub fn plain(text: impl Into<String>) -> Self {
        Token::new(text, StyleClass::Plain)
    }
}
