use std::io::{self, BufRead};

use log::error;
use structopt::StructOpt;

use dict_tools::alphabet::{normalize, normalize_pattern, WILDCARD};
use dict_tools::wordlist::wordlist::{FileFormat, Wordlist};

/// Interactive frequency-ranked autocomplete over a dictionary file.
#[derive(StructOpt)]
struct Cli {
    /// The path to the dictionary file to read
    #[structopt(parse(from_os_str))]
    path: std::path::PathBuf,
    /// Column delimiter for dictionaries carrying a frequency column
    #[structopt(long)]
    delimiter: Option<char>,
    /// Zero-based column holding the word (used with --delimiter)
    #[structopt(long, default_value = "0")]
    word_column: usize,
    /// Zero-based column holding the frequency (used with --delimiter)
    #[structopt(long, default_value = "1")]
    freq_column: usize,
}

fn next_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    lines.next()?.ok()
}

fn main() {
    env_logger::init();
    let args = Cli::from_args();

    let format = match args.delimiter {
        Some(delimiter) => FileFormat::builder()
            .delimiter(delimiter)
            .word_column(args.word_column)
            .freq_column(args.freq_column)
            .build(),
        None => FileFormat::builder().build(),
    };

    let path = args.path.to_string_lossy();
    let wordlist = match Wordlist::from_file(&path, format) {
        Ok(wordlist) => wordlist,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("Enter a prefix/pattern to search for:");
        let query = match next_line(&mut lines) {
            Some(query) => query.trim().to_string(),
            None => break,
        };
        if query.is_empty() {
            continue;
        }

        println!("Enter a number of completions:");
        let count = match next_line(&mut lines) {
            Some(line) => line.trim().parse().unwrap_or(0),
            None => break,
        };

        let completions = if query.contains(WILDCARD) {
            wordlist.predict_underscores(&normalize_pattern(&query), count)
        } else {
            wordlist.predict_completions(&normalize(&query), count)
        };
        for completion in &completions {
            println!("{}", completion);
        }

        println!("Continue? (y/n)");
        match next_line(&mut lines) {
            Some(answer) if answer.trim().starts_with('y') => {}
            _ => break,
        }
    }
}
