// hyphenable-cli: shared utilities for the command-line tool.

use std::path::{Path, PathBuf};
use std::process;

use hyphenable::{HyphenableError, Hyphenator, LocaleTag};
use tracing_subscriber::EnvFilter;

/// Locale used when neither the command line nor the environment names one.
pub const DEFAULT_LOCALE: &str = "fi";

/// Pattern file extension searched for in pattern directories.
const PATTERN_EXT: &str = "pat";

/// Install a stderr log subscriber filtered by `HYPHENABLE_LOG`
/// (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_env("HYPHENABLE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Pick the locale tag to use.
///
/// Order: explicit argument, `HYPHENABLE_LOCALE`, `LANG`, [`DEFAULT_LOCALE`].
/// `LANG` values that do not parse (`C`, `POSIX`) are skipped.
pub fn resolve_locale(explicit: Option<&str>) -> Result<LocaleTag, String> {
    choose_locale(
        explicit,
        std::env::var("HYPHENABLE_LOCALE").ok().as_deref(),
        std::env::var("LANG").ok().as_deref(),
    )
}

fn choose_locale(
    explicit: Option<&str>,
    configured: Option<&str>,
    lang: Option<&str>,
) -> Result<LocaleTag, String> {
    if let Some(tag) = explicit.or(configured) {
        return LocaleTag::parse(tag).map_err(|e| format!("invalid locale {tag:?}: {e}"));
    }
    if let Some(tag) = lang.and_then(|l| LocaleTag::parse(l).ok()) {
        return Ok(tag);
    }
    LocaleTag::parse(DEFAULT_LOCALE).map_err(|e| e.to_string())
}

/// Build the handle, loading a pattern file for `locale` if one is given or
/// found.
///
/// Search order for patterns:
/// 1. `pattern_file` argument (if provided)
/// 2. `<HYPHENABLE_PATTERN_PATH>/<locale>.pat`
/// 3. `<HYPHENABLE_PATTERN_PATH>/<language>.pat`
///
/// Finnish needs no pattern file; a missing file for another locale is not
/// an error, the text is then passed through unchanged.
pub fn load_hyphenator(
    locale: &LocaleTag,
    pattern_file: Option<&str>,
) -> Result<Hyphenator, String> {
    let mut hyphenator = Hyphenator::new();

    let path = match pattern_file {
        Some(p) => Some(PathBuf::from(p)),
        None => std::env::var("HYPHENABLE_PATTERN_PATH")
            .ok()
            .and_then(|dir| find_pattern_file(Path::new(&dir), locale)),
    };

    if let Some(path) = path {
        let source = std::fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        hyphenator
            .load_patterns(&locale.to_string(), &source)
            .map_err(|e: HyphenableError| format!("{}: {e}", path.display()))?;
        tracing::debug!(path = %path.display(), locale = %locale, "loaded pattern file");
    } else if !hyphenator.is_supported(locale) {
        tracing::warn!(locale = %locale, "no hyphenation available, text passes through unchanged");
    }

    Ok(hyphenator)
}

/// The first existing pattern file for `locale` in `dir`.
fn find_pattern_file(dir: &Path, locale: &LocaleTag) -> Option<PathBuf> {
    pattern_candidates(dir, locale)
        .into_iter()
        .find(|path| path.is_file())
}

fn pattern_candidates(dir: &Path, locale: &LocaleTag) -> Vec<PathBuf> {
    let mut candidates = vec![dir.join(format!("{locale}.{PATTERN_EXT}"))];
    if !locale.is_language_only() {
        candidates.push(dir.join(format!("{}.{PATTERN_EXT}", locale.language())));
    }
    candidates
}

/// Take the value of option `name` at `args[i]`, accepting both
/// `--name VALUE` and `--name=VALUE`.
///
/// Returns the value and how many arguments it used.
pub fn option_value<'a>(args: &'a [String], i: usize, names: &[&str]) -> Option<(&'a str, usize)> {
    let arg = args[i].as_str();
    for name in names {
        if arg == *name {
            return match args.get(i + 1) {
                Some(value) => Some((value.as_str(), 2)),
                None => fatal(&format!("{name} requires a value")),
            };
        }
        if let Some(value) = arg
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
        {
            return Some((value, 1));
        }
    }
    None
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
