// Criterion benchmarks for tamamla-tr.
//
// Uses a synthetic dictionary built from Turkish syllables, so no external
// data files are needed.
//
// Run:
//   cargo bench -p tamamla-tr

use criterion::{Criterion, criterion_group, criterion_main};

use tamamla_tr::CompletionHandle;
use tamamla_tr::frequency::FrequencyTable;
use tamamla_trie::Trie;

// ---------------------------------------------------------------------------
// Synthetic dictionary
// ---------------------------------------------------------------------------

/// Cross three syllable sets into ~8k pronounceable pseudo-Turkish words.
fn build_wordlist() -> Vec<String> {
    const ONSETS: &[&str] = &[
        "ba", "ce", "\u{00E7}a", "de", "el", "ge", "\u{011F}\u{0131}", "ka", "ki", "ma", "ne",
        "o", "\u{00F6}z", "sa", "\u{015F}e", "ta", "u", "\u{00FC}z", "ya", "ze",
    ];
    const MIDDLES: &[&str] = &[
        "la", "le", "r\u{0131}", "ri", "ma", "me", "na", "ne", "ta", "te", "ka", "ke", "\u{015F}a",
        "\u{00E7}e", "da", "de", "sa", "se", "ya", "ye",
    ];
    const CODAS: &[&str] = &[
        "k", "l", "m", "n", "r", "s", "t", "z", "", "\u{015F}", "\u{011F}\u{0131}", "ci", "li",
        "lik", "siz", "ler", "lar", "de", "da", "mak",
    ];

    let mut words = Vec::new();
    for onset in ONSETS {
        for middle in MIDDLES {
            for coda in CODAS {
                words.push(format!("{onset}{middle}{coda}"));
            }
        }
    }
    words
}

fn build_handle(words: &[String]) -> CompletionHandle {
    let mut trie = Trie::new();
    for word in words {
        trie.insert(word).expect("synthetic word is valid");
    }
    let mut frequencies = FrequencyTable::new();
    for (i, word) in words.iter().enumerate() {
        // Deterministic spread of counts; duplicates from the syllable
        // cross-product keep their first count.
        frequencies.insert(word.clone(), (i % 997) as u64);
    }
    CompletionHandle::new(trie, frequencies)
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Build the full trie from the synthetic word list.
fn bench_trie_build(c: &mut Criterion) {
    let words = build_wordlist();
    c.bench_function("trie_build_8k_words", |b| {
        b.iter(|| {
            let mut trie = Trie::new();
            for word in &words {
                trie.insert(word).expect("synthetic word is valid");
            }
            std::hint::black_box(trie.node_count());
        });
    });
}

/// Suggest for every one-letter prefix (the worst case: widest subtrees).
fn bench_suggest_one_letter(c: &mut Criterion) {
    let words = build_wordlist();
    let handle = build_handle(&words);
    let prefixes: Vec<String> = tamamla_core::ALPHABET.iter().map(|c| c.to_string()).collect();

    c.bench_function("suggest_one_letter_prefixes", |b| {
        b.iter(|| {
            for prefix in &prefixes {
                std::hint::black_box(handle.suggest(prefix).expect("valid prefix"));
            }
        });
    });
}

/// Simulate typing a word one keystroke at a time, querying after each.
fn bench_suggest_incremental(c: &mut Criterion) {
    let words = build_wordlist();
    let handle = build_handle(&words);
    let typed = &words[words.len() / 2];

    c.bench_function("suggest_incremental_typing", |b| {
        b.iter(|| {
            let mut prefix = String::new();
            for ch in typed.chars() {
                prefix.push(ch);
                std::hint::black_box(handle.suggest(&prefix).expect("valid prefix"));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_trie_build,
    bench_suggest_one_letter,
    bench_suggest_incremental
);
criterion_main!(benches);
