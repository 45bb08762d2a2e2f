use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::Instant;

use delegate::delegate;
use log::{debug, info};
use serde_json::from_str;
use thiserror::Error;
use typed_builder::TypedBuilder;

use crate::alphabet::normalize;
use crate::wordlist::trie::Trie;

#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("could not read dictionary: {0}")]
    Io(#[from] std::io::Error),
    #[error("no words loaded from {path}")]
    EmptyDictionary { path: String },
}

/// Line layout of a dictionary file. Without a delimiter every line is one
/// word with frequency 1; with one, the word and frequency columns are split
/// out (defaults: columns 0 and 1).
#[derive(TypedBuilder)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
    #[builder(default, setter(strip_option))]
    freq_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<(&'a str, u64)> {
        match self.delimiter {
            None => Some((line, 1)),
            Some(delimiter) => {
                let columns = line.split(delimiter).collect::<Vec<_>>();
                let word = *columns.get(self.word_column.unwrap_or(0))?;
                let freq = *columns.get(self.freq_column.unwrap_or(1))?;
                Some((word, from_str::<u64>(freq.trim()).ok()?))
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct Wordlist {
    trie: Trie,
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Wordlist::default()
    }

    /// Reads `(word, frequency)` pairs line by line and inserts each into the
    /// trie. Lines that fail to parse, normalize to nothing, or repeat an
    /// earlier word are skipped and counted, never fatal.
    pub fn from_file(filename: &str, format: FileFormat) -> Result<Wordlist, WordlistError> {
        info!("reading words from {}", filename);

        let file = File::open(filename)?;
        let buf_reader = BufReader::new(file);

        let mut trie = Trie::new();
        let mut skipped: usize = 0;
        let start = Instant::now();

        for line in buf_reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            let parsed = format.parse_line(&line).and_then(|(word, freq)| {
                let word = normalize(word).trim().to_string();
                if word.is_empty() {
                    None
                } else {
                    Some((word, freq))
                }
            });
            match parsed {
                Some((word, freq)) => {
                    if trie.insert(&word, freq) {
                        if trie.len() % 100_000 == 0 {
                            debug!("{} {}", trie.len(), word);
                        }
                    } else {
                        skipped += 1;
                    }
                }
                None => skipped += 1,
            }
        }

        let elapsed = start.elapsed();
        info!(
            "read {} words in {:.3}s [{} skipped]",
            trie.len(),
            elapsed.as_secs_f64(),
            skipped
        );

        if trie.is_empty() {
            return Err(WordlistError::EmptyDictionary {
                path: filename.to_string(),
            });
        }
        Ok(Wordlist { trie })
    }

    delegate! {
        to self.trie {
            pub fn insert(&mut self, word: &str, freq: u64) -> bool;
            pub fn find(&self, word: &str) -> bool;
            pub fn predict_completions(&self, prefix: &str, count: usize) -> Vec<String>;
            pub fn predict_underscores(&self, pattern: &str, count: usize) -> Vec<String>;
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::wordlist::wordlist::{FileFormat, Wordlist, WordlistError};

    fn dict_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn wordlist_delegates_to_trie() {
        let mut wordlist = Wordlist::new();
        assert!(wordlist.is_empty());
        assert!(wordlist.insert("apple", 5));
        assert!(wordlist.find("apple"));
        assert_eq!(wordlist.predict_underscores("a___e", 1), vec!["apple"]);
        assert_eq!(wordlist.len(), 1);
    }

    #[test]
    fn plain_lines_load_with_unit_frequency() {
        let format = FileFormat::builder().build();
        assert_eq!(format.parse_line("apple"), Some(("apple", 1)));
    }

    #[test]
    fn delimited_lines_split_word_and_frequency() {
        let format = FileFormat::builder().delimiter(' ').build();
        assert_eq!(format.parse_line("apple 5"), Some(("apple", 5)));
        assert_eq!(format.parse_line("apple"), None);
        assert_eq!(format.parse_line("apple five"), None);
    }

    #[test]
    fn column_indices_are_configurable() {
        let format = FileFormat::builder()
            .delimiter(',')
            .word_column(1)
            .freq_column(0)
            .build();
        assert_eq!(format.parse_line("7,pear"), Some(("pear", 7)));
    }

    #[test]
    fn loads_a_frequency_dictionary() {
        let file = dict_file("apple 5\nappendage 4\nape 3\napparent 2\nbad line\n");
        let wordlist = Wordlist::from_file(
            file.path().to_str().unwrap(),
            FileFormat::builder().delimiter(' ').build(),
        )
        .unwrap();

        assert_eq!(wordlist.len(), 4);
        assert!(wordlist.find("apple"));
        assert_eq!(
            wordlist.predict_completions("ap", 4),
            vec!["apple", "appendage", "ape", "apparent"]
        );
    }

    #[test]
    fn duplicate_lines_are_skipped() {
        let file = dict_file("apple 5\napple 9\n");
        let wordlist = Wordlist::from_file(
            file.path().to_str().unwrap(),
            FileFormat::builder().delimiter(' ').build(),
        )
        .unwrap();
        assert_eq!(wordlist.len(), 1);
        assert_eq!(wordlist.predict_completions("a", 2), vec!["apple"]);
    }

    #[test]
    fn empty_dictionary_is_an_error() {
        let file = dict_file("");
        let err = Wordlist::from_file(
            file.path().to_str().unwrap(),
            FileFormat::builder().build(),
        )
        .unwrap_err();
        assert!(matches!(err, WordlistError::EmptyDictionary { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Wordlist::from_file(
            "/nonexistent/freq_dict.txt",
            FileFormat::builder().build(),
        )
        .unwrap_err();
        assert!(matches!(err, WordlistError::Io(_)));
    }
}
