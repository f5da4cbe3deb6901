// Criterion benchmarks for hyphenable.
//
// The Finnish benchmarks need no data. The pattern benchmark reads
// `en-US.pat` from the directory named by HYPHENABLE_PATTERN_PATH; if the
// file is not found it prints a message and runs no-op iterations.
//
// Run:
//   cargo bench -p hyphenable --features handle
//   HYPHENABLE_PATTERN_PATH=/path/to/patterns cargo bench -p hyphenable --features handle

use criterion::{Criterion, criterion_group, criterion_main};
use hyphenable::{Hyphenator, LocaleTag};

const FINNISH_TEXT: &str = "Kissa istui ikkunalaudalla ja katseli lintuja, \
    jotka lensivät puutarhan yli kohti järveä. Saippuakauppias myi \
    kävelykeppejä ja käsityötaitoisten kyläläisten tuotteita.";

const ENGLISH_TEXT: &str = "The hyphenation algorithm consults an oracle for \
    every grapheme of the paragraph and inserts conditional breakpoints \
    wherever the typographical conventions of the language permit them.";

// ---------------------------------------------------------------------------
// Pattern discovery
// ---------------------------------------------------------------------------

fn find_patterns() -> Option<String> {
    let dir = std::env::var("HYPHENABLE_PATTERN_PATH").ok()?;
    let path = std::path::PathBuf::from(dir).join("en-US.pat");
    std::fs::read_to_string(path).ok()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Hyphenate a Finnish paragraph as one string.
fn bench_finnish_paragraph(c: &mut Criterion) {
    let hyphenator = Hyphenator::new();
    let fi = LocaleTag::parse("fi").expect("locale");

    c.bench_function("finnish_paragraph", |b| {
        b.iter(|| std::hint::black_box(hyphenator.hyphenate(FINNISH_TEXT, &fi)));
    });
}

/// Hyphenate the same paragraph word by word, skipping short words.
fn bench_finnish_by_word(c: &mut Criterion) {
    let hyphenator = Hyphenator::new();
    let fi = LocaleTag::parse("fi").expect("locale");

    c.bench_function("finnish_by_word_min5", |b| {
        b.iter(|| {
            std::hint::black_box(hyphenator.hyphenate_by_word_with_min(FINNISH_TEXT, &fi, 5))
        });
    });
}

/// Hyphenate an English paragraph with Liang patterns.
fn bench_pattern_paragraph(c: &mut Criterion) {
    let Some(source) = find_patterns() else {
        eprintln!(
            "[bench_pattern_paragraph] en-US.pat not found: skipping (set HYPHENABLE_PATTERN_PATH)"
        );
        c.bench_function("pattern_paragraph (skipped)", |b| b.iter(|| {}));
        return;
    };

    let mut hyphenator = Hyphenator::empty();
    let en = hyphenator
        .load_patterns("en-US", &source)
        .expect("failed to load en-US.pat");

    c.bench_function("pattern_paragraph", |b| {
        b.iter(|| std::hint::black_box(hyphenator.hyphenate_by_word(ENGLISH_TEXT, &en)));
    });
}

/// Unsupported locale: the cost of the support check alone.
fn bench_unsupported(c: &mut Criterion) {
    let hyphenator = Hyphenator::new();
    let sv = LocaleTag::parse("sv").expect("locale");

    c.bench_function("unsupported_locale", |b| {
        b.iter(|| std::hint::black_box(hyphenator.hyphenate(ENGLISH_TEXT, &sv)));
    });
}

criterion_group!(
    benches,
    bench_finnish_paragraph,
    bench_finnish_by_word,
    bench_pattern_paragraph,
    bench_unsupported
);
criterion_main!(benches);
