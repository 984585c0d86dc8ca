use std::env;
use std::process;

use crate::view::Lang;

/// Palette choice from the command line; `Auto` probes the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeArg {
    Auto,
    Dark,
    Light,
}

#[derive(Debug)]
pub struct Args {
    pub files: Vec<String>,
    pub lang: Option<Lang>,
    pub theme: ThemeArg,
    pub plain: bool,
    pub max_lines: Option<usize>,
    pub copy: bool,
    pub header: bool,
}

pub fn parse_args() -> Args {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut files: Vec<String> = Vec::new();
    let mut lang: Option<Lang> = None;
    let mut theme = ThemeArg::Auto;
    let mut plain = false;
    let mut max_lines: Option<usize> = None;
    let mut copy = false;
    let mut header = true;

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];

        if arg == "--" {
            i += 1;
            // Everything after -- is a file operand
            while i < args.len() {
                files.push(args[i].clone());
                i += 1;
            }
            break;
        }

        if arg == "-l" || arg == "--lang" {
            i += 1;
            if i >= args.len() {
                eprintln!("cpv: {} requires an argument (java, text)", arg);
                process::exit(2);
            }
            lang = match Lang::parse(&args[i]) {
                Some(l) => Some(l),
                None => {
                    eprintln!("cpv: unknown language: {}", args[i]);
                    process::exit(2);
                }
            };
        } else if arg == "-t" || arg == "--theme" {
            i += 1;
            if i >= args.len() {
                eprintln!("cpv: {} requires an argument (dark, light, auto)", arg);
                process::exit(2);
            }
            theme = match args[i].as_str() {
                "dark" => ThemeArg::Dark,
                "light" => ThemeArg::Light,
                "auto" => ThemeArg::Auto,
                other => {
                    eprintln!("cpv: unknown theme: {}", other);
                    process::exit(2);
                }
            };
        } else if arg == "-n" || arg == "--max-lines" {
            i += 1;
            if i >= args.len() {
                eprintln!("cpv: {} requires an argument", arg);
                process::exit(2);
            }
            max_lines = match args[i].parse::<usize>() {
                Ok(n) if n > 0 => Some(n),
                _ => {
                    eprintln!("cpv: invalid line count: {}", args[i]);
                    process::exit(2);
                }
            };
        } else if arg == "--plain" {
            plain = true;
        } else if arg == "-c" || arg == "--copy" {
            copy = true;
        } else if arg == "--no-header" {
            header = false;
        } else if arg == "-h" || arg == "--help" {
            print_usage();
            process::exit(0);
        } else if arg == "-V" || arg == "--version" {
            println!("cpv {}", env!("CARGO_PKG_VERSION"));
            process::exit(0);
        } else if arg.starts_with('-') && arg.len() > 1 {
            eprintln!("cpv: unknown option: {}", arg);
            eprintln!("Try 'cpv --help' for usage.");
            process::exit(2);
        } else {
            files.push(arg.clone());
        }

        i += 1;
    }

    Args {
        files,
        lang,
        theme,
        plain,
        max_lines,
        copy,
        header,
    }
}

/// Language for one input: an explicit flag wins, then the file
/// extension. Unrecognized files read as text, stdin as java.
#[must_use]
pub fn resolve_lang(flag: Option<Lang>, name: Option<&str>) -> Lang {
    flag.unwrap_or_else(|| match name {
        Some(path) => Lang::from_path(path).unwrap_or(Lang::Text),
        None => Lang::Java,
    })
}

fn print_usage() {
    eprintln!(
        "cpv {} — code preview for the terminal",
        env!("CARGO_PKG_VERSION")
    );
    eprintln!();
    eprintln!("Usage: cpv [options] [file ...]");
    eprintln!("       cpv < Snippet.java            # stdin when no file is given");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -l, --lang <java|text>   Language (default: sniff extension; java for stdin)");
    eprintln!("  -t, --theme <dark|light|auto>");
    eprintln!("                           Palette; auto probes CPV_THEME, then COLORFGBG");
    eprintln!("      --plain              No colors (NO_COLOR does the same)");
    eprintln!("  -n, --max-lines <n>      Clip the preview after n lines");
    eprintln!("  -c, --copy               Also copy the original text to the clipboard");
    eprintln!("      --no-header          Omit the header bar");
    eprintln!("  -h, --help               Show this help");
    eprintln!("  -V, --version            Show version");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  cpv Main.java");
    eprintln!("  cpv -n 20 -t light src/Game.java");
    eprintln!("  git show HEAD:Main.java | cpv --plain");
}
