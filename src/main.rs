use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use cpv::cli::{self, ThemeArg};
use cpv::clipboard;
use cpv::theme::{AnsiTheme, ThemeMode};
use cpv::view::CodeView;
use cpv::watch::{self, ThemeWatch};

fn read_source(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
    }
}

fn no_color() -> bool {
    env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

fn main() {
    let args = cli::parse_args();

    // (display name, contents) per input; no files means stdin
    let mut sources: Vec<(Option<String>, String)> = Vec::new();
    if args.files.is_empty() {
        match read_source("-") {
            Ok(text) => sources.push((None, text)),
            Err(e) => {
                eprintln!("cpv: stdin: {}", e);
                process::exit(1);
            }
        }
    } else {
        for path in &args.files {
            match read_source(path) {
                Ok(text) => {
                    let name = if path == "-" { None } else { Some(path.clone()) };
                    sources.push((name, text));
                }
                Err(e) => {
                    eprintln!("cpv: {}: {}", path, e);
                    process::exit(1);
                }
            }
        }
    }

    let plain = args.plain || no_color();
    let mode = match args.theme {
        ThemeArg::Dark => ThemeMode::Dark,
        ThemeArg::Light => ThemeMode::Light,
        ThemeArg::Auto => match watch::ambient_light() {
            Some(light) => ThemeMode::from_light(light),
            None => ThemeMode::Dark,
        },
    };

    for (idx, (name, text)) in sources.iter().enumerate() {
        if idx > 0 {
            println!();
        }

        let lang = cli::resolve_lang(args.lang, name.as_deref());

        let mut view = CodeView::new(text.clone(), lang).with_header(args.header);
        if let Some(name) = name {
            view = view.with_filename(name.clone());
        }
        if let Some(n) = args.max_lines {
            view = view.with_max_lines(n);
        }

        let rendered = if plain {
            view.render(&AnsiTheme::none())
        } else {
            view = view.with_watch(ThemeWatch::fixed(mode));
            view.render_current()
        };
        print!("{}", rendered);
    }

    if args.copy {
        let all: String = sources.iter().map(|(_, text)| text.as_str()).collect();
        clipboard::copy(&all);
    }
}
