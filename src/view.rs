//! Line-numbered, syntax-colored rendering of a source snippet.
//!
//! A [`CodeView`] keeps the original text verbatim and derives the line
//! split once, up front. Rendering walks the lines and is recomputed per
//! call: Java lines go through the tokenizer, anything else is emitted as
//! is. The palette comes either from an explicit [`Theme`] or from the
//! view's [`ThemeWatch`].

use crate::clipboard;
use crate::lexer;
use crate::theme::{AnsiTheme, Theme};
use crate::token::Token;
use crate::watch::ThemeWatch;

/// Highlighting language for a snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Java,
    Text,
}

impl Lang {
    /// Language from a tag like a `--lang` value.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Lang> {
        match tag {
            "java" => Some(Lang::Java),
            "text" => Some(Lang::Text),
            _ => None,
        }
    }

    /// Detect language from a file extension.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Lang> {
        if path.ends_with(".java") {
            Some(Lang::Java)
        } else if path.ends_with(".txt")
            || path.ends_with(".text")
            || path.ends_with(".log")
            || path.ends_with(".md")
        {
            Some(Lang::Text)
        } else {
            None
        }
    }

    /// Upper-case badge for the header bar.
    #[must_use]
    pub fn badge(&self) -> &'static str {
        match self {
            Lang::Java => "JAVA",
            Lang::Text => "TEXT",
        }
    }
}

/// One renderable line: 1-based number plus its tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub number: usize,
    pub tokens: Vec<Token>,
}

/// A snippet prepared for display.
pub struct CodeView {
    source: String,
    lang: Lang,
    filename: Option<String>,
    max_lines: Option<usize>,
    header: bool,
    lines: Vec<String>,
    watch: ThemeWatch,
}

impl CodeView {
    #[must_use]
    pub fn new(source: impl Into<String>, lang: Lang) -> Self {
        let source = source.into();
        let lines = split_lines(&source);
        CodeView {
            source,
            lang,
            filename: None,
            max_lines: None,
            header: true,
            lines,
            watch: ThemeWatch::default(),
        }
    }

    /// Display name shown in the header bar.
    #[must_use]
    pub fn with_filename(mut self, name: impl Into<String>) -> Self {
        self.filename = Some(name.into());
        self
    }

    /// Clip the rendering after this many lines.
    #[must_use]
    pub fn with_max_lines(mut self, n: usize) -> Self {
        self.max_lines = Some(n);
        self
    }

    /// Show or hide the header bar (shown by default).
    #[must_use]
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Follow this watch for [`render_current`](Self::render_current).
    #[must_use]
    pub fn with_watch(mut self, watch: ThemeWatch) -> Self {
        self.watch = watch;
        self
    }

    /// The original text, untouched by newline normalization.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Normalized lines; a trailing newline yields a final empty line.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Tokenized table: one [`Row`] per line. Java lines are split by the
    /// scanner; other languages come back as a single verbatim token.
    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let tokens = match self.lang {
                    Lang::Java => lexer::tokenize(line),
                    Lang::Text => vec![Token::plain(line.clone())],
                };
                Row {
                    number: i + 1,
                    tokens,
                }
            })
            .collect()
    }

    /// Render the snippet with an explicit theme.
    #[must_use]
    pub fn render<T: Theme>(&self, theme: &T) -> String {
        let rows = self.rows();
        let total = rows.len();
        let shown = self.max_lines.map_or(total, |n| n.min(total));
        let width = gutter_width(total);

        let mut out = String::with_capacity(self.source.len() + total * 16);

        if self.header {
            out.push_str(theme.chrome());
            match &self.filename {
                Some(name) => {
                    out.push_str(&format!("{} · {} · {} lines", self.lang.badge(), name, total));
                }
                None => {
                    out.push_str(&format!("{} · {} lines", self.lang.badge(), total));
                }
            }
            out.push_str(theme.reset());
            out.push('\n');
        }

        for row in &rows[..shown] {
            out.push_str(theme.gutter());
            out.push_str(&format!("{:>w$} ", row.number, w = width - 1));
            out.push_str(theme.reset());
            for token in &row.tokens {
                out.push_str(theme.prefix(token.class));
                out.push_str(&token.text);
                out.push_str(theme.suffix(token.class));
            }
            out.push('\n');
        }

        if shown < total {
            out.push_str(theme.chrome());
            out.push_str(&format!("… ({} more lines)", total - shown));
            out.push_str(theme.reset());
            out.push('\n');
        }

        out
    }

    /// Render with the palette the watch currently points at.
    #[must_use]
    pub fn render_current(&self) -> String {
        self.render(&AnsiTheme::for_mode(self.watch.mode()))
    }

    /// Copy the original text (not the rendering) to the system clipboard.
    /// Best effort; failures are silent.
    pub fn copy_all(&self) {
        clipboard::copy(&self.source);
    }
}

/// CRLF and lone CR collapse to LF before splitting; the split keeps a
/// trailing empty line, so every snippet has at least one line.
fn split_lines(source: &str) -> Vec<String> {
    source
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(str::to_owned)
        .collect()
}

/// Gutter width: digits of the last line number plus padding, at least 4.
pub(crate) fn gutter_width(total: usize) -> usize {
    (total.to_string().len() + 1).max(4)
}
