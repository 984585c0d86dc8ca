//! Styling: map token classes to output styles (ANSI, or nothing for plain text).
//!
//! **Constructs highlighted (each has its own style):**
//! - **Keyword** — the Java reserved words (public, class, static, return, ...)
//! - **String** — `"..."` double-quoted literals, quotes included
//! - **Number** — numeric literals (42, 3.14, -5)
//! - **Annotation** — `@Name` markers
//! - **Comment** — `//` to end of line
//! - **Plain** — everything else; never wrapped in escapes
//!
//! Gutter (line numbers) and chrome (header bar, truncation notice) get
//! their own styles outside the token classes.

use crate::token::StyleClass;

/// Palette selector, derived from the ambient light/dark flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn from_light(light: bool) -> Self {
        if light { ThemeMode::Light } else { ThemeMode::Dark }
    }
}

/// Something that can map a style class to a prefix/suffix (e.g. ANSI codes).
pub trait Theme {
    /// Prefix to emit before a token with this class (e.g. ANSI color).
    fn prefix(&self, class: StyleClass) -> &str;
    /// Suffix to emit after the token (e.g. reset).
    fn suffix(&self, class: StyleClass) -> &str;
    /// Style for the line-number gutter.
    fn gutter(&self) -> &str {
        ""
    }
    /// Style for the header bar and truncation notice.
    fn chrome(&self) -> &str {
        ""
    }
    fn reset(&self) -> &str {
        ""
    }
}

/// ANSI theme for terminal output, one palette per [`ThemeMode`].
#[derive(Debug)]
pub struct AnsiTheme {
    reset: String,
    keyword: String,
    string: String,
    number: String,
    annotation: String,
    comment: String,
    gutter: String,
    chrome: String,
}

impl AnsiTheme {
    /// Palette for dark backgrounds.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            reset: "\x1b[0m".into(),
            keyword: "\x1b[38;5;117m".into(), // sky blue
            string: "\x1b[38;5;115m".into(),  // mint green
            number: "\x1b[38;5;221m".into(),  // amber
            annotation: "\x1b[38;5;218m".into(), // pink
            comment: "\x1b[38;5;246m".into(), // gray
            gutter: "\x1b[38;5;240m".into(),  // dim gray
            chrome: "\x1b[38;5;245m".into(),  // light gray
        }
    }

    /// Palette for light backgrounds.
    #[must_use]
    pub fn light() -> Self {
        Self {
            reset: "\x1b[0m".into(),
            keyword: "\x1b[38;5;26m".into(),  // blue
            string: "\x1b[38;5;124m".into(),  // dark red
            number: "\x1b[38;5;29m".into(),   // deep green
            annotation: "\x1b[38;5;91m".into(), // purple
            comment: "\x1b[38;5;35m".into(),  // green
            gutter: "\x1b[38;5;248m".into(),  // light gray
            chrome: "\x1b[38;5;242m".into(),  // slate gray
        }
    }

    /// No ANSI codes (plain text).
    #[must_use]
    pub fn none() -> Self {
        Self {
            reset: String::new(),
            keyword: String::new(),
            string: String::new(),
            number: String::new(),
            annotation: String::new(),
            comment: String::new(),
            gutter: String::new(),
            chrome: String::new(),
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => AnsiTheme::light(),
            ThemeMode::Dark => AnsiTheme::dark(),
        }
    }

    fn style(&self, class: StyleClass) -> &str {
        match class {
            StyleClass::Keyword => self.keyword.as_str(),
            StyleClass::String => self.string.as_str(),
            StyleClass::Number => self.number.as_str(),
            StyleClass::Annotation => self.annotation.as_str(),
            StyleClass::Comment => self.comment.as_str(),
            StyleClass::Plain => "",
        }
    }
}

impl Theme for AnsiTheme {
    fn prefix(&self, class: StyleClass) -> &str {
        self.style(class)
    }

    fn suffix(&self, class: StyleClass) -> &str {
        if self.style(class).is_empty() {
            ""
        } else {
            self.reset.as_str()
        }
    }

    fn gutter(&self) -> &str {
        self.gutter.as_str()
    }

    fn chrome(&self) -> &str {
        self.chrome.as_str()
    }

    fn reset(&self) -> &str {
        self.reset.as_str()
    }
}
