//! CLI smoke entry point.
//!
//! # Responsibility
//! - Exercise the core store, filter and card projection end to end.
//! - Keep output deterministic apart from generated ids.
//!
//! Usage: `notepad_cli [--log-dir <abs-dir>] [query] [category]`

use notepad_core::{
    default_log_level, init_logging, NoteService, NoteStore, NotepadSession, ALL_CATEGORY,
};

/// Parsed command line.
#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    log_dir: Option<String>,
    query: String,
    category: String,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> CliArgs {
    let mut log_dir = None;
    let mut positional = Vec::new();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--log-dir" {
            log_dir = args.next();
        } else {
            positional.push(arg);
        }
    }

    let mut positional = positional.into_iter();
    CliArgs {
        log_dir,
        query: positional.next().unwrap_or_default(),
        category: positional
            .next()
            .unwrap_or_else(|| ALL_CATEGORY.to_string()),
    }
}

fn main() {
    let CliArgs {
        log_dir,
        query,
        category,
    } = parse_args(std::env::args().skip(1));

    if let Some(dir) = log_dir {
        if let Err(err) = init_logging(default_log_level(), &dir) {
            eprintln!("notepad_cli logging disabled: {err}");
        }
    }

    let service = NoteService::new(NoteStore::with_seed_notes());
    let mut session = NotepadSession::new();
    session.set_query(query);
    session.set_category(category);

    println!("notepad_core version={}", notepad_core::core_version());
    println!(
        "filter query=`{}` category=`{}` tabs={}",
        session.query(),
        session.category(),
        std::iter::once(ALL_CATEGORY.to_string())
            .chain(service.categories())
            .collect::<Vec<_>>()
            .join("|")
    );
    for card in session.visible_cards(&service) {
        println!(
            "- {} [{}] {}",
            card.title,
            card.category,
            card.preview.unwrap_or_default()
        );
    }
}
