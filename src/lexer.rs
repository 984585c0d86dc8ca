use std::sync::LazyLock;

use rustc_hash::FxHashSet;

use crate::token::{StyleClass, Token};

/// Java reserved words (plus `String`, which reads like one in snippets).
static KEYWORDS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "public", "class", "static", "void", "int", "String", "new", "return", "if", "else",
        "for", "while", "do", "switch", "case", "break", "continue", "interface", "implements",
        "extends", "package", "import", "boolean", "char", "long", "float", "double", "null",
        "true", "false", "final", "private", "protected", "try", "catch", "throw", "throws",
        "byte", "short", "this", "super", "abstract", "synchronized",
    ]
    .into_iter()
    .collect()
});

#[must_use]
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}

/// Split one line into styled tokens with a single left-to-right scan.
///
/// Never fails: anything unrecognized falls through as a one-char
/// `StyleClass::Plain` token, and unterminated strings run to the end of
/// the line. A line whose first non-whitespace characters are `//` is one
/// Comment token covering the whole line, leading whitespace included;
/// a `//` reached mid-line starts a Comment only from that point.
#[must_use]
pub fn tokenize(line: &str) -> Vec<Token> {
    if line.trim_start().starts_with("//") {
        return vec![Token::new(line, StyleClass::Comment)];
    }
    Scanner::new(line).run()
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(line: &str) -> Self {
        Scanner {
            chars: line.chars().collect(),
            pos: 0,
        }
    }

    fn run(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                tokens.push(self.read_whitespace());
                continue;
            }
            if ch == '"' {
                tokens.push(self.read_string());
                continue;
            }
            if ch == '/' && self.peek_at(1) == Some('/') {
                let rest: String = self.chars[self.pos..].iter().collect();
                self.pos = self.chars.len();
                tokens.push(Token::new(rest, StyleClass::Comment));
                break;
            }
            if ch == '@' {
                tokens.push(self.read_annotation());
                continue;
            }
            if ch == '-' || ch.is_ascii_digit() {
                tokens.push(self.read_number());
                continue;
            }
            if ch.is_ascii_alphabetic() || ch == '_' {
                tokens.push(self.read_word());
                continue;
            }
            self.pos += 1;
            tokens.push(Token::plain(ch));
        }

        tokens
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn text(&self, start: usize) -> String {
        self.chars[start..self.pos].iter().collect()
    }

    fn read_whitespace(&mut self) -> Token {
        let start = self.pos;
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
        Token::plain(self.text(start))
    }

    fn read_string(&mut self) -> Token {
        let start = self.pos;
        self.pos += 1; // opening quote
        while let Some(ch) = self.peek() {
            if ch == '"' {
                break;
            }
            if ch == '\\' {
                // escape eats two chars; clamp so a trailing backslash can't overrun
                self.pos = (self.pos + 2).min(self.chars.len());
            } else {
                self.pos += 1;
            }
        }
        if self.peek() == Some('"') {
            self.pos += 1; // closing quote
        }
        Token::new(self.text(start), StyleClass::String)
    }

    fn read_annotation(&mut self) -> Token {
        let start = self.pos;
        self.pos += 1; // @
        while self.peek().is_some_and(is_word_char) {
            self.pos += 1;
        }
        Token::new(self.text(start), StyleClass::Annotation)
    }

    /// Greedy candidate: optional `-`, digits/dots, one optional L/l/F/f
    /// suffix. Kept as a Number only when it still ends in a digit;
    /// otherwise the first char alone becomes a plain token and the scan
    /// resumes right after it (so a lone `-` or a suffixed `5L` never
    /// classifies as a number).
    fn read_number(&mut self) -> Token {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.pos += 1;
        }
        while self.peek().is_some_and(|c| c.is_ascii_digit() || c == '.') {
            self.pos += 1;
        }
        if self.peek().is_some_and(|c| matches!(c, 'L' | 'l' | 'F' | 'f')) {
            self.pos += 1;
        }

        if self.chars[self.pos - 1].is_ascii_digit() {
            Token::new(self.text(start), StyleClass::Number)
        } else {
            self.pos = start + 1;
            Token::plain(self.chars[start])
        }
    }

    fn read_word(&mut self) -> Token {
        let start = self.pos;
        self.pos += 1;
        while self.peek().is_some_and(is_word_char) {
            self.pos += 1;
        }
        let word = self.text(start);
        if is_keyword(&word) {
            Token::new(word, StyleClass::Keyword)
        } else {
            Token::plain(word)
        }
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
