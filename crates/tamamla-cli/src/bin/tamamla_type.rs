// tamamla-type: line-driven typing session with live completions.
//
// Every character of an entered line is fed through the edit session:
// Turkish letters extend the current word, digits 1-9 replace it with the
// ranked suggestion at that position, '<' is backspace, and a space
// commits the word. An empty line also commits. After each line the
// committed text, the word in progress, and the numbered suggestions for
// it are printed.
//
// Usage:
//   tamamla-type [-d DICT_PATH]
//
// Commands:
//   :q   quit

use std::io::{self, BufRead, Write};

use tamamla_tr::session::{EditSession, SessionEvent};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = tamamla_cli::parse_dict_path(&args);

    if tamamla_cli::wants_help(&args) {
        println!("tamamla-type: Interactive typing session with completions.");
        println!();
        println!("Usage: tamamla-type [-d DICT_PATH]");
        println!();
        println!("Letters extend the current word, digits 1-9 pick the numbered");
        println!("suggestion, '<' is backspace, space or an empty line commits.");
        println!("Type :q to quit.");
        return;
    }

    let handle =
        tamamla_cli::load_handle(dict_path.as_deref()).unwrap_or_else(|e| tamamla_cli::fatal(&e));
    println!(
        "{} words loaded. Type to get completions, :q to quit.",
        handle.trie().word_count()
    );

    let mut session = EditSession::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    render(&session, &handle, &mut stdout);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };

        if line.trim() == ":q" {
            break;
        }

        if line.is_empty() {
            feed(&mut session, &handle, SessionEvent::Separator);
        } else {
            for c in line.chars() {
                let event = match c {
                    '1'..='9' => SessionEvent::Select(c as u8 - b'0'),
                    '<' => SessionEvent::Backspace,
                    c if c.is_whitespace() => SessionEvent::Separator,
                    c => SessionEvent::Letter(c),
                };
                feed(&mut session, &handle, event);
            }
        }

        render(&session, &handle, &mut stdout);
    }

    if !session.text().is_empty() {
        println!("\n{}", session.text());
    }
}

/// Apply one event, fetching the ranked list the event may select from.
fn feed(session: &mut EditSession, handle: &tamamla_tr::CompletionHandle, event: SessionEvent) {
    let ranked = match event {
        SessionEvent::Select(_) => suggestions_for(session.current_word(), handle),
        _ => Vec::new(),
    };
    session.apply(event, &ranked);
}

fn suggestions_for(prefix: &str, handle: &tamamla_tr::CompletionHandle) -> Vec<String> {
    // The session only ever holds alphabet letters, so the prefix cannot
    // be rejected; an empty list is fine either way.
    handle.suggest(prefix).unwrap_or_default()
}

fn render(session: &EditSession, handle: &tamamla_tr::CompletionHandle, stdout: &mut io::Stdout) {
    println!("----------------------------------------");
    println!("Text: {}", session.text());

    let current = session.current_word();
    if current.is_empty() {
        println!("(start typing a word)");
    } else {
        let suggestions = suggestions_for(current, handle);
        if suggestions.is_empty() {
            println!("[{current}] (no suggestions)");
        } else {
            println!("[{current}]");
            for (i, word) in suggestions.iter().enumerate() {
                println!("  {}. {word}", i + 1);
            }
        }
    }
    print!("> ");
    let _ = stdout.flush();
}
