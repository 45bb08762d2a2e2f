use crate::wordlist::trie::node::{self, Link};
use crate::wordlist::trie::pattern;
use crate::wordlist::trie::topk::TopK;

/// Ternary search trie over single-byte words, each carrying a positive
/// frequency. Completion queries rank by descending frequency with
/// alphabetical tie-break, most relevant first.
#[derive(Debug, Default)]
pub struct Trie {
    root: Link,
    words: usize,
}

impl Trie {
    pub fn new() -> Trie {
        Trie::default()
    }

    /// Adds `word` with `freq`. Empty words, non-positive frequencies and
    /// words already present are rejected without touching the tree.
    pub fn insert(&mut self, word: &str, freq: u64) -> bool {
        if word.is_empty() || freq == 0 || self.find(word) {
            return false;
        }
        node::insert_at(&mut self.root, word.as_bytes(), 0, freq);
        self.words += 1;
        true
    }

    /// True only if `word` was inserted as a complete entry.
    pub fn find(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        node::lookup(self.root.as_deref(), word.as_bytes())
            .map(|node| node.is_terminal)
            .unwrap_or(false)
    }

    /// Up to `count` words starting with `prefix`, most relevant first.
    /// The prefix itself is a candidate when it is a stored word.
    pub fn predict_completions(&self, prefix: &str, count: usize) -> Vec<String> {
        if prefix.is_empty() || count == 0 {
            return vec![];
        }
        let last = match node::lookup(self.root.as_deref(), prefix.as_bytes()) {
            Some(node) => node,
            None => return vec![],
        };

        let mut topk = TopK::new(count);
        let mut buf = prefix.as_bytes().to_vec();
        if last.is_terminal {
            topk.offer(&buf, last.freq);
        }
        node::collect_completions(last.next.as_deref(), &mut buf, &mut topk);
        topk.into_ranked()
    }

    /// Up to `count` words matching `pattern`, where `_` matches any single
    /// character. Every result has exactly the pattern's length. Ranking is
    /// the same as for prefix completions.
    pub fn predict_underscores(&self, pattern: &str, count: usize) -> Vec<String> {
        if count == 0 {
            return vec![];
        }
        let elements = match pattern::parse(pattern) {
            Some(elements) => elements,
            None => return vec![],
        };

        let mut topk = TopK::new(count);
        let mut buf = Vec::with_capacity(elements.len());
        node::collect_matches(self.root.as_deref(), &elements, 0, &mut buf, &mut topk);
        topk.into_ranked()
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}
