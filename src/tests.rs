use std::cell::Cell;
use std::rc::Rc;

use crate::cli::resolve_lang;
use crate::lexer::{is_keyword, tokenize};
use crate::theme::{AnsiTheme, Theme, ThemeMode};
use crate::token::{StyleClass, Token};
use crate::view::{CodeView, Lang, gutter_width};
use crate::watch::{ThemeFlag, ThemeWatch, light_background, theme_hint};

/// Helper: join token texts back into a line.
fn joined(line: &str) -> String {
    tokenize(line).into_iter().map(|t| t.text).collect()
}

/// Helper: drop ANSI escapes from a rendering.
fn strip_ansi(s: &str) -> String {
    regex::Regex::new(r"\x1b\[[0-9;]*m")
        .unwrap()
        .replace_all(s, "")
        .into_owned()
}

// ── Tokenizer: whole lines ───────────────────────────────────────

#[test]
fn empty_line_has_no_tokens() {
    assert!(tokenize("").is_empty());
}

#[test]
fn whitespace_only_line_is_one_plain_token() {
    assert_eq!(tokenize("   "), vec![Token::plain("   ")]);
}

#[test]
fn comment_line_is_one_token() {
    assert_eq!(
        tokenize("// increment the counter"),
        vec![Token::new("// increment the counter", StyleClass::Comment)]
    );
}

#[test]
fn indented_comment_keeps_its_whitespace() {
    assert_eq!(
        tokenize("    // note"),
        vec![Token::new("    // note", StyleClass::Comment)]
    );
}

#[test]
fn comment_after_code_starts_at_the_slashes() {
    let tokens = tokenize("int x; // done");
    assert_eq!(
        tokens.last(),
        Some(&Token::new("// done", StyleClass::Comment))
    );
    assert_eq!(tokens[0], Token::new("int", StyleClass::Keyword));
}

// ── Tokenizer: literals ──────────────────────────────────────────

#[test]
fn escaped_quote_stays_inside_string() {
    assert_eq!(
        tokenize(r#""a\"b""#),
        vec![Token::new(r#""a\"b""#, StyleClass::String)]
    );
}

#[test]
fn unterminated_string_runs_to_line_end() {
    assert_eq!(
        tokenize(r#""no end"#),
        vec![Token::new(r#""no end"#, StyleClass::String)]
    );
}

#[test]
fn trailing_backslash_cannot_overrun() {
    assert_eq!(
        tokenize(r#""ab\"#),
        vec![Token::new(r#""ab\"#, StyleClass::String)]
    );
}

#[test]
fn slashes_inside_strings_are_not_comments() {
    let tokens = tokenize(r#"url = "http://x"; // real"#);
    assert!(tokens.contains(&Token::new(r#""http://x""#, StyleClass::String)));
    assert_eq!(
        tokens.last(),
        Some(&Token::new("// real", StyleClass::Comment))
    );
}

#[test]
fn negative_number_is_one_token() {
    let tokens = tokenize("int x = -5;");
    assert!(tokens.contains(&Token::new("-5", StyleClass::Number)));
}

#[test]
fn minus_between_words_stays_alone() {
    assert_eq!(
        tokenize("a - b"),
        vec![
            Token::plain("a"),
            Token::plain(" "),
            Token::plain("-"),
            Token::plain(" "),
            Token::plain("b"),
        ]
    );
}

#[test]
fn decimal_and_dotted_runs_are_numbers() {
    assert_eq!(tokenize("3.14"), vec![Token::new("3.14", StyleClass::Number)]);
    assert_eq!(tokenize("1.2.3"), vec![Token::new("1.2.3", StyleClass::Number)]);
}

#[test]
fn suffixed_literal_degrades_to_plain_pieces() {
    assert_eq!(tokenize("5L"), vec![Token::plain("5"), Token::plain("L")]);
    assert_eq!(
        tokenize("2.5f"),
        vec![
            Token::plain("2"),
            Token::plain("."),
            Token::plain("5"),
            Token::plain("f"),
        ]
    );
}

#[test]
fn trailing_dot_degrades() {
    assert_eq!(tokenize("3."), vec![Token::plain("3"), Token::plain(".")]);
}

// ── Tokenizer: words and annotations ─────────────────────────────

#[test]
fn annotation_with_name() {
    assert_eq!(
        tokenize("@Override"),
        vec![Token::new("@Override", StyleClass::Annotation)]
    );
}

#[test]
fn bare_at_sign_is_an_annotation() {
    assert_eq!(tokenize("@"), vec![Token::new("@", StyleClass::Annotation)]);
}

#[test]
fn annotation_stops_at_non_word_chars() {
    let tokens = tokenize("@Test(timeout)");
    assert_eq!(tokens[0], Token::new("@Test", StyleClass::Annotation));
    assert_eq!(tokens[1], Token::plain("("));
}

#[test]
fn every_reserved_word_classifies() {
    const WORDS: [&str; 43] = [
        "public", "class", "static", "void", "int", "String", "new", "return", "if", "else",
        "for", "while", "do", "switch", "case", "break", "continue", "interface", "implements",
        "extends", "package", "import", "boolean", "char", "long", "float", "double", "null",
        "true", "false", "final", "private", "protected", "try", "catch", "throw", "throws",
        "byte", "short", "this", "super", "abstract", "synchronized",
    ];
    for word in WORDS {
        assert!(is_keyword(word), "{word} missing from the reserved set");
        assert_eq!(tokenize(word), vec![Token::new(word, StyleClass::Keyword)]);
    }
    assert!(!is_keyword("Public"));
    assert!(!is_keyword("integer"));
}

#[test]
fn identifiers_stay_plain() {
    assert_eq!(tokenize("counter1"), vec![Token::plain("counter1")]);
    assert_eq!(tokenize("_tmp"), vec![Token::plain("_tmp")]);
}

#[test]
fn non_ascii_degrades_per_char() {
    assert_eq!(
        tokenize("α β"),
        vec![Token::plain("α"), Token::plain(" "), Token::plain("β")]
    );
}

// ── Tokenizer: invariants ────────────────────────────────────────

#[test]
fn concatenation_reconstructs_every_line() {
    let lines = [
        "",
        "   ",
        "public static void main(String[] args) {",
        "    System.out.println(\"hello // not a comment\");",
        "for (int i = 0; i < -10; i--) { // loop",
        "@SuppressWarnings(\"unchecked\")",
        "double d = 3.14; long n = 5L;",
        "\t\tmixed\ttabs and spaces  ",
        "// whole line",
        "梅 = 1",
    ];
    for line in lines {
        assert_eq!(joined(line), line, "token texts must cover {line:?}");
    }
}

#[test]
fn tokenizing_twice_matches() {
    let line = "private final String name = \"x\"; // field";
    assert_eq!(tokenize(line), tokenize(line));
}

// ── Watch lifecycle ──────────────────────────────────────────────

#[test]
fn unchanged_value_does_not_notify() {
    let flag = ThemeFlag::new(false);
    let fired = Rc::new(Cell::new(0));
    let seen = Rc::clone(&fired);
    let _sub = flag.subscribe(move |_| seen.set(seen.get() + 1));

    flag.set_light(false);
    assert_eq!(fired.get(), 0);
    flag.set_light(true);
    assert_eq!(fired.get(), 1);
    flag.set_light(true);
    assert_eq!(fired.get(), 1);
}

#[test]
fn dropped_subscription_stops_callbacks() {
    let flag = ThemeFlag::new(false);
    let fired = Rc::new(Cell::new(0));
    let seen = Rc::clone(&fired);
    let sub = flag.subscribe(move |_| seen.set(seen.get() + 1));

    flag.set_light(true);
    drop(sub);
    flag.set_light(false);
    assert_eq!(fired.get(), 1);
    assert_eq!(flag.subscriber_count(), 0);
}

#[test]
fn subscription_may_outlive_the_flag() {
    let sub;
    {
        let flag = ThemeFlag::new(true);
        sub = flag.subscribe(|_| {});
        assert_eq!(flag.subscriber_count(), 1);
    }
    drop(sub); // flag is gone; drop must not panic
}

#[test]
fn watches_track_independently() {
    let flag = ThemeFlag::new(false);
    let first = ThemeWatch::attach(&flag);
    let second = ThemeWatch::attach(&flag);
    assert_eq!(flag.subscriber_count(), 2);

    drop(first);
    assert_eq!(flag.subscriber_count(), 1);
    flag.set_light(true);
    assert_eq!(second.mode(), ThemeMode::Light);
}

#[test]
fn fixed_watch_never_moves() {
    let watch = ThemeWatch::fixed(ThemeMode::Light);
    assert_eq!(watch.mode(), ThemeMode::Light);
}

#[test]
fn colorfgbg_backgrounds() {
    assert!(light_background("0;15"));
    assert!(light_background("1;7"));
    assert!(!light_background("15;0"));
    assert!(!light_background("default;default"));
}

#[test]
fn theme_hints() {
    assert_eq!(theme_hint("light"), Some(true));
    assert_eq!(theme_hint("DARK"), Some(false));
    assert_eq!(theme_hint("blue"), None);
}

// ── Viewer ───────────────────────────────────────────────────────

#[test]
fn carriage_returns_normalize() {
    let view = CodeView::new("a\r\nb\rc", Lang::Text);
    assert_eq!(view.lines(), ["a", "b", "c"]);
}

#[test]
fn source_stays_verbatim() {
    let view = CodeView::new("a\r\nb", Lang::Text);
    assert_eq!(view.source(), "a\r\nb");
    assert_eq!(view.lines(), ["a", "b"]);
}

#[test]
fn dropping_the_view_releases_its_subscription() {
    let flag = ThemeFlag::new(false);
    let view = CodeView::new("x", Lang::Java).with_watch(ThemeWatch::attach(&flag));
    assert_eq!(flag.subscriber_count(), 1);
    drop(view);
    assert_eq!(flag.subscriber_count(), 0);
}

#[test]
fn empty_source_still_has_one_row() {
    let view = CodeView::new("", Lang::Java);
    let rows = view.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].number, 1);
    assert!(rows[0].tokens.is_empty());
}

#[test]
fn text_mode_never_tokenizes() {
    let view = CodeView::new("int x = 1; // looks like java", Lang::Text);
    let rows = view.rows();
    assert_eq!(
        rows[0].tokens,
        vec![Token::plain("int x = 1; // looks like java")]
    );
}

#[test]
fn header_names_language_file_and_count() {
    let view = CodeView::new("int x;\nreturn x;", Lang::Java).with_filename("Main.java");
    let out = view.render(&AnsiTheme::none());
    assert!(out.starts_with("JAVA · Main.java · 2 lines\n"));

    let bare = CodeView::new("hello", Lang::Text);
    let out = bare.render(&AnsiTheme::none());
    assert!(out.starts_with("TEXT · 1 lines\n"));
}

#[test]
fn gutter_width_tracks_line_count() {
    assert_eq!(gutter_width(1), 4);
    assert_eq!(gutter_width(999), 4);
    assert_eq!(gutter_width(1000), 5);
}

#[test]
fn palettes_change_colors_only() {
    let source = "public class A {\n    // body\n    int n = -1;\n}";
    let view = CodeView::new(source, Lang::Java).with_filename("A.java");

    let dark = view.render(&AnsiTheme::dark());
    let light = view.render(&AnsiTheme::light());
    let plain = view.render(&AnsiTheme::none());

    assert_ne!(dark, light);
    assert_eq!(strip_ansi(&dark), plain);
    assert_eq!(strip_ansi(&light), plain);
}

#[test]
fn render_current_follows_the_flag() {
    let flag = ThemeFlag::new(false);
    let view = CodeView::new("return;", Lang::Java)
        .with_header(false)
        .with_watch(ThemeWatch::attach(&flag));

    let dark = view.render_current();
    assert!(dark.contains(AnsiTheme::dark().prefix(StyleClass::Keyword)));

    flag.set_light(true);
    let light = view.render_current();
    assert!(light.contains(AnsiTheme::light().prefix(StyleClass::Keyword)));
    assert_eq!(strip_ansi(&dark), strip_ansi(&light));
}

#[test]
fn copy_all_is_best_effort() {
    // no display server in CI; must still return quietly
    CodeView::new("class A {}", Lang::Java).copy_all();
}

// ── Language defaults ────────────────────────────────────────────

#[test]
fn unrecognized_files_fall_back_to_text() {
    assert_eq!(resolve_lang(None, Some("build.gradle")), Lang::Text);
    assert_eq!(resolve_lang(None, Some("Makefile")), Lang::Text);
}

#[test]
fn stdin_defaults_to_java() {
    assert_eq!(resolve_lang(None, None), Lang::Java);
}

#[test]
fn lang_flag_overrides_the_extension() {
    assert_eq!(resolve_lang(Some(Lang::Text), Some("Main.java")), Lang::Text);
    assert_eq!(resolve_lang(Some(Lang::Java), Some("notes.txt")), Lang::Java);
}
