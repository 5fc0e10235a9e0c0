// tamamla-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use tamamla_tr::CompletionHandle;
use tamamla_tr::frequency::FrequencyTable;
use tamamla_tr::wordlist::{self, InvalidWordPolicy};
use tamamla_trie::Trie;

/// Word-list file name.
const WORDS_FILE: &str = "words.txt";

/// Frequency-table file name (optional; without it every word scores 0).
const FREQUENCIES_FILE: &str = "frequencies.txt";

/// Search for dictionary files and create a CompletionHandle.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `TAMAMLA_DICT_PATH` environment variable
/// 3. `~/.tamamla`
/// 4. Current working directory
///
/// Words containing characters outside the Turkish alphabet are skipped
/// (real-world word lists carry stray punctuation and foreign words); the
/// skip count is reported on stderr.
pub fn load_handle(dict_path: Option<&str>) -> Result<CompletionHandle, String> {
    let search_paths = build_search_paths(dict_path);

    for dir in &search_paths {
        let words_path = dir.join(WORDS_FILE);
        if !words_path.is_file() {
            continue;
        }

        let mut trie = Trie::new();
        let stats =
            wordlist::load_words_from_path(&mut trie, &words_path, InvalidWordPolicy::Skip)
                .map_err(|e| format!("failed to load {}: {}", words_path.display(), e))?;
        if stats.skipped > 0 {
            eprintln!(
                "note: skipped {} word(s) with characters outside the alphabet",
                stats.skipped
            );
        }

        let frequencies_path = dir.join(FREQUENCIES_FILE);
        let frequencies = if frequencies_path.is_file() {
            FrequencyTable::from_path(&frequencies_path)
                .map_err(|e| format!("failed to load {}: {}", frequencies_path.display(), e))?
        } else {
            FrequencyTable::new()
        };

        return Ok(CompletionHandle::new(trie, frequencies));
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        WORDS_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of directories to search for dictionary files.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    // 2. TAMAMLA_DICT_PATH environment variable
    if let Ok(env_path) = std::env::var("TAMAMLA_DICT_PATH") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".tamamla"));
    }

    // 4. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
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
