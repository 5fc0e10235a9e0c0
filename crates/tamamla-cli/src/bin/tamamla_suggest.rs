// tamamla-suggest: ranked prefix completions for prefixes from stdin.
//
// Reads prefixes from stdin (one per line) and prints the completions the
// dictionary offers for each, ranked by usage frequency.
//
// Usage:
//   tamamla-suggest [-d DICT_PATH] [OPTIONS] [PREFIX...]
//
// Options:
//   -d, --dict-path PATH     Dictionary directory containing words.txt
//                            (and optionally frequencies.txt)
//   -n, --max-suggestions N  Maximum number of suggestions (default: 10)
//   -h, --help               Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = tamamla_cli::parse_dict_path(&args);

    if tamamla_cli::wants_help(&args) {
        println!("tamamla-suggest: Ranked prefix completions.");
        println!();
        println!("Usage: tamamla-suggest [-d DICT_PATH] [OPTIONS] [PREFIX...]");
        println!();
        println!("If PREFIX arguments are given, completes each prefix.");
        println!("Otherwise reads prefixes from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH     Dictionary directory containing words.txt");
        println!("  -n, --max-suggestions N  Maximum number of suggestions (default: 10)");
        println!("  -h, --help               Print this help");
        return;
    }

    let mut max_suggestions: usize = 10;
    let mut prefixes: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-n" || arg == "--max-suggestions" {
            if i + 1 < args.len() {
                max_suggestions = args[i + 1]
                    .parse()
                    .unwrap_or_else(|_| tamamla_cli::fatal("invalid number for --max-suggestions"));
                skip_next = true;
            } else {
                tamamla_cli::fatal("--max-suggestions requires a value");
            }
        } else if !arg.starts_with('-') {
            prefixes.push(arg.clone());
        }
    }

    let mut handle =
        tamamla_cli::load_handle(dict_path.as_deref()).unwrap_or_else(|e| tamamla_cli::fatal(&e));
    handle.set_max_suggestions(max_suggestions);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let suggest_prefix = |prefix: &str,
                          handle: &tamamla_tr::CompletionHandle,
                          out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        match handle.suggest(prefix) {
            Ok(suggestions) if suggestions.is_empty() => {
                let _ = writeln!(out, "{prefix}: (no suggestions)");
            }
            Ok(suggestions) => {
                let _ = writeln!(out, "{prefix}:");
                for (i, word) in suggestions.iter().enumerate() {
                    let _ = writeln!(out, "  {}. {word}", i + 1);
                }
            }
            Err(e) => {
                let _ = writeln!(out, "{prefix}: {e}");
            }
        }
    };

    if prefixes.is_empty() {
        // Read from stdin
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let prefix = line.trim();
            if prefix.is_empty() {
                continue;
            }
            suggest_prefix(prefix, &handle, &mut out);
        }
    } else {
        for prefix in &prefixes {
            suggest_prefix(prefix, &handle, &mut out);
        }
    }
}
