// hyphenable: Insert soft hyphens into text.
//
// Hyphenates each TEXT argument, or each stdin line when none are given,
// word by word and prints the result.
//
// Usage:
//   hyphenable [OPTIONS] [TEXT...]
//
// Options:
//   -l, --locale TAG        Locale (default: $HYPHENABLE_LOCALE, $LANG, fi)
//   -p, --patterns FILE     Liang pattern file for the locale
//   --min-length N          Leave words shorter than N graphemes alone (default: 0)
//   --marker STR            Marker to insert (default: U+00AD SOFT HYPHEN)
//   --visible               Show markers as '-'
//   --breaks                Print grapheme break indices of the hyphenated words
//   --no-ugly               Suppress ugly Finnish hyphenation points
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

use hyphenable::{HyphenationOptions, Hyphenator, LocaleTag};
use hyphenable_cli::{fatal, option_value};

fn print_help() {
    println!("hyphenable: Insert soft hyphens into text.");
    println!();
    println!("Usage: hyphenable [OPTIONS] [TEXT...]");
    println!();
    println!("If TEXT arguments are given, hyphenates each one.");
    println!("Otherwise reads text from stdin (one line at a time).");
    println!();
    println!("Options:");
    println!("  -l, --locale TAG        Locale (default: $HYPHENABLE_LOCALE, $LANG, fi)");
    println!("  -p, --patterns FILE     Liang pattern file for the locale");
    println!("  --min-length N          Leave words shorter than N graphemes alone (default: 0)");
    println!("  --marker STR            Marker to insert (default: U+00AD SOFT HYPHEN)");
    println!("  --visible               Show markers as '-'");
    println!("  --breaks                Print grapheme break indices of the hyphenated words");
    println!("  --no-ugly               Suppress ugly Finnish hyphenation points");
    println!("  -h, --help              Print this help");
    println!();
    println!("Environment:");
    println!("  HYPHENABLE_PATTERN_PATH Directory searched for <locale>.pat files");
    println!("  HYPHENABLE_LOG          Log filter (default: warn)");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if hyphenable_cli::wants_help(&args) {
        print_help();
        return;
    }

    hyphenable_cli::init_logging();

    let mut locale_arg: Option<String> = None;
    let mut pattern_file: Option<String> = None;
    let mut options = HyphenationOptions::default();
    let mut visible = false;
    let mut show_breaks = false;
    let mut no_ugly = false;
    let mut texts: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        if let Some((value, used)) = option_value(&args, i, &["-l", "--locale"]) {
            locale_arg = Some(value.to_string());
            i += used;
            continue;
        }
        if let Some((value, used)) = option_value(&args, i, &["-p", "--patterns"]) {
            pattern_file = Some(value.to_string());
            i += used;
            continue;
        }
        if let Some((value, used)) = option_value(&args, i, &["--min-length"]) {
            options.minimum_word_length = value
                .parse()
                .unwrap_or_else(|_| fatal("invalid number for --min-length"));
            i += used;
            continue;
        }
        if let Some((value, used)) = option_value(&args, i, &["--marker"]) {
            options.marker = value.to_string();
            i += used;
            continue;
        }
        match args[i].as_str() {
            "--visible" => visible = true,
            "--breaks" => show_breaks = true,
            "--no-ugly" => no_ugly = true,
            s if s.starts_with('-') && s.len() > 1 => fatal(&format!("unknown option {s}")),
            _ => texts.push(args[i].clone()),
        }
        i += 1;
    }

    let locale = hyphenable_cli::resolve_locale(locale_arg.as_deref()).unwrap_or_else(|e| fatal(&e));
    let mut hyphenator = hyphenable_cli::load_hyphenator(&locale, pattern_file.as_deref())
        .unwrap_or_else(|e| fatal(&e));
    hyphenator.set_options(options);
    if no_ugly {
        hyphenator.set_no_ugly_hyphenation(true);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let emit = |text: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let line = render_line(&hyphenator, &locale, text, visible, show_breaks);
        let _ = writeln!(out, "{line}");
    };

    if texts.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            emit(&line, &mut out);
        }
    } else {
        for text in &texts {
            emit(text, &mut out);
        }
    }
}

fn render_line(
    hyphenator: &Hyphenator,
    locale: &LocaleTag,
    text: &str,
    visible: bool,
    show_breaks: bool,
) -> String {
    if show_breaks {
        let positions: Vec<String> = hyphenator
            .word_break_set(text, locale)
            .map(|set| set.positions().map(|p| p.to_string()).collect())
            .unwrap_or_default();
        return format!("{text}\t{}", positions.join(","));
    }
    let hyphenated = hyphenator.hyphenate_by_word(text, locale);
    if visible {
        hyphenator.render_visible(&hyphenated)
    } else {
        hyphenated
    }
}
