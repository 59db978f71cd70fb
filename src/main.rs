//! WoF Solver CLI
//!
//! Command-line interface for board word suggestions.

use clap::{Parser, Subcommand};
use log::debug;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use wof_solver::{
    load_dictionary, Board, DictionaryIndex, LetterBoard, LetterStatus, QueryBuilder, WordSearch,
    DEFAULT_SUGGESTION_LIMIT,
};

const BANNER_TEXT: &str = include_str!("text/banner.txt");

/// Suggest words for a partially revealed word-guessing board
#[derive(Parser, Debug)]
#[command(name = "wof-solver", version, about, long_about = None)]
struct Args {
    /// Word list to search, one word per line (bundled list if omitted)
    #[arg(short, long, env = "WOF_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Maximum number of suggestions per word (0 = unlimited)
    #[arg(short, long, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
    limit: usize,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Suggest words for a single pattern such as "c__c_"
    Search {
        pattern: String,

        /// Letters already guessed and not in the word
        #[arg(short, long, default_value = "")]
        used: String,
    },
    /// Suggest words for every unsolved word of a board file
    Board {
        file: PathBuf,

        /// Letters already guessed and not on the board
        #[arg(short, long, default_value = "")]
        used: String,
    },
    /// Show dictionary statistics
    Stats,
}

/// A limit of 0 means "everything", i.e. the dictionary size.
fn effective_limit(limit: usize, index: &DictionaryIndex) -> usize {
    if limit == 0 {
        index.size()
    } else {
        limit
    }
}

fn letters(arg: &str) -> impl Iterator<Item = char> + '_ {
    arg.chars().filter(|c| c.is_alphabetic())
}

fn print_matches(pattern: &str, matches: &[&str]) {
    if matches.is_empty() {
        println!("{}: no matches", pattern.to_uppercase());
        return;
    }
    println!("{}: {} match(es)", pattern.to_uppercase(), matches.len());
    for (i, word) in matches.iter().enumerate() {
        if i > 0 && i % 8 == 0 {
            println!();
        }
        print!("{:>14}", word.to_uppercase());
    }
    println!();
}

fn print_suggestions(board: &Board, search: &WordSearch, letter_board: &LetterBoard, limit: usize) {
    let suggestions = board.suggestions(search, letter_board, limit);
    if suggestions.is_empty() {
        println!("No unsolved words on the board.");
        return;
    }
    for (word, matches) in &suggestions {
        print!("[row {}, col {}] ", word.row, word.column);
        print_matches(&word.pattern(), matches);
    }
}

fn print_letters(board: &Board, letter_board: &LetterBoard) {
    let mut correct = String::new();
    let mut wrong = String::new();
    let mut unknown = String::new();
    for (c, status) in letter_board.statuses(board) {
        match status {
            LetterStatus::Correct => correct.push(c),
            LetterStatus::Incorrect => wrong.push(c),
            LetterStatus::Unknown => unknown.push(c),
        }
    }
    println!("On board:  {}", correct.to_uppercase());
    println!("Wrong:     {}", wrong.to_uppercase());
    println!("Remaining: {}", unknown.to_uppercase());
}

fn run_interactive(index: &DictionaryIndex, mut limit: usize) -> io::Result<()> {
    for line in BANNER_TEXT.lines().take(6) {
        println!("{}", line);
    }
    println!("Loaded {} words.", index.size());
    println!("Type 'help' for commands.");
    println!();

    let search = WordSearch::new(index);
    let mut board = Board::new();
    let mut letter_board = LetterBoard::new();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => {
                println!("{}", BANNER_TEXT);
            }
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "find" | "f" => {
                let Some(pattern) = parts.get(1) else {
                    println!("Usage: find <pattern>");
                    println!("Example: find c__c_");
                    continue;
                };
                let query = QueryBuilder::from_pattern(pattern)
                    .add_used_letters(letter_board.used_letters(&board))
                    .build();
                let matches = search.search_limit(&query, effective_limit(limit, index));
                println!();
                print_matches(pattern, &matches);
                println!();
            }
            "wrong" | "w" => {
                for c in parts[1..].iter().flat_map(|&p| letters(p)) {
                    letter_board.mark_incorrect(c);
                }
                print_letters(&board, &letter_board);
            }
            "right" | "unmark" => {
                for c in parts[1..].iter().flat_map(|&p| letters(p)) {
                    letter_board.unmark(c);
                }
                print_letters(&board, &letter_board);
            }
            "letters" | "l" => {
                print_letters(&board, &letter_board);
            }
            "load" => {
                let Some(path) = parts.get(1) else {
                    println!("Usage: load <file>");
                    continue;
                };
                match std::fs::read_to_string(path)
                    .map_err(|e| e.to_string())
                    .and_then(|text| Board::parse(&text).map_err(|e| e.to_string()))
                {
                    Ok(loaded) => {
                        board = loaded;
                        println!("{}", board);
                        println!("{} word(s) on the board.", board.words().len());
                    }
                    Err(e) => println!("Could not load board: {}", e),
                }
            }
            "board" | "b" => {
                println!("{}", board);
            }
            "reveal" | "r" => {
                let parsed = match (parts.get(1), parts.get(2), parts.get(3)) {
                    (Some(row), Some(column), Some(letter)) => row
                        .parse::<usize>()
                        .ok()
                        .zip(column.parse::<usize>().ok())
                        .zip(letter.chars().next()),
                    _ => None,
                };
                let Some(((row, column), letter)) = parsed else {
                    println!("Usage: reveal <row> <col> <letter>");
                    continue;
                };
                match board.reveal(row, column, letter) {
                    Ok(()) => println!("{}", board),
                    Err(e) => println!("{}", e),
                }
            }
            "suggest" | "s" => {
                println!();
                print_suggestions(&board, &search, &letter_board, effective_limit(limit, index));
                println!();
            }
            "limit" => match parts.get(1).and_then(|s| s.parse().ok()) {
                Some(n) => {
                    limit = n;
                    let shown = if n == 0 { "unlimited".to_string() } else { n.to_string() };
                    println!("Suggestion limit: {}", shown);
                }
                None => println!("Usage: limit <n>"),
            },
            "reset" => {
                board.clear_letters();
                letter_board.reset();
                println!("Cleared board letters and wrong guesses.");
            }
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    debug!("Command line options: {:?}", args);

    let index = match &args.dictionary {
        Some(path) => DictionaryIndex::from_path(path)?,
        None => load_dictionary(),
    };
    let limit = effective_limit(args.limit, &index);

    match args.command {
        None => run_interactive(&index, args.limit)?,
        Some(Command::Search { pattern, used }) => {
            let query = QueryBuilder::from_pattern(&pattern)
                .add_used_letters(letters(&used))
                .build();
            let matches = WordSearch::new(&index).search_limit(&query, limit);
            print_matches(&pattern, &matches);
        }
        Some(Command::Board { file, used }) => {
            let board = Board::parse(&std::fs::read_to_string(file)?)?;
            let mut letter_board = LetterBoard::new();
            for c in letters(&used) {
                letter_board.mark_incorrect(c);
            }
            println!("{}", board);
            println!();
            print_suggestions(&board, &WordSearch::new(&index), &letter_board, limit);
        }
        Some(Command::Stats) => {
            println!("Total words: {}", index.size());
            for length in index.lengths() {
                println!("  {:>2} letters: {:>6}", length, index.bucket(length).len());
            }
        }
    }
    Ok(())
}
