use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};

use crate::wordlist::trie::pattern::Element;
use crate::wordlist::trie::topk::TopK;

pub(crate) type Link = Option<Box<TrieNode>>;

/// One character position in the keyspace. `lesser`/`greater` form a
/// binary-search-ordered sibling set for the same position; `next` descends
/// to the following position. `freq` is meaningful only on terminal nodes.
pub(crate) struct TrieNode {
    pub(crate) label: u8,
    pub(crate) lesser: Link,
    pub(crate) greater: Link,
    pub(crate) next: Link,
    pub(crate) is_terminal: bool,
    pub(crate) freq: u64,
}

impl TrieNode {
    pub(crate) fn new(label: u8) -> TrieNode {
        TrieNode {
            label,
            lesser: None,
            greater: None,
            next: None,
            is_terminal: false,
            freq: 0,
        }
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("label", &(self.label as char))
            .field("is_terminal", &self.is_terminal)
            .field("freq", &self.freq)
            .finish()
    }
}

/// Extends the path for `word[idx..]`, creating nodes where the walk runs out
/// of links. Strictly-smaller labels route into `lesser`, strictly-greater
/// ones into `greater`; only a label match consumes a character.
pub(crate) fn insert_at(link: &mut Link, word: &[u8], idx: usize, freq: u64) {
    let node = link.get_or_insert_with(|| Box::new(TrieNode::new(word[idx])));
    match word[idx].cmp(&node.label) {
        Ordering::Less => insert_at(&mut node.lesser, word, idx, freq),
        Ordering::Greater => insert_at(&mut node.greater, word, idx, freq),
        Ordering::Equal => {
            if idx + 1 == word.len() {
                node.is_terminal = true;
                node.freq = freq;
            } else {
                insert_at(&mut node.next, word, idx + 1, freq);
            }
        }
    }
}

/// Walks to the node holding the last character of `word`, without requiring
/// it to be terminal. `word` must be non-empty. A missing turn or a label
/// mismatch ends the walk with `None`.
pub(crate) fn lookup<'a>(mut link: Option<&'a TrieNode>, word: &[u8]) -> Option<&'a TrieNode> {
    let mut idx = 0;
    while let Some(node) = link {
        match word[idx].cmp(&node.label) {
            Ordering::Less => link = node.lesser.as_deref(),
            Ordering::Greater => link = node.greater.as_deref(),
            Ordering::Equal => {
                if idx + 1 == word.len() {
                    return Some(node);
                }
                idx += 1;
                link = node.next.as_deref();
            }
        }
    }
    None
}

/// Visits every word in the subtree and feeds terminals to the selector.
/// Siblings are visited with `buf` as-is; the node's own label is appended
/// only for itself and its `next` subtree.
pub(crate) fn collect_completions(link: Option<&TrieNode>, buf: &mut Vec<u8>, topk: &mut TopK) {
    if let Some(node) = link {
        collect_completions(node.lesser.as_deref(), buf, topk);
        collect_completions(node.greater.as_deref(), buf, topk);

        buf.push(node.label);
        if node.is_terminal {
            topk.offer(buf, node.freq);
        }
        collect_completions(node.next.as_deref(), buf, topk);
        buf.pop();
    }
}

/// Matches `elements[idx..]` against the subtree. A wildcard explores both
/// sibling directions; a literal explores only the side its byte ordering
/// allows. Words are submitted exactly when the last element lands on a
/// terminal node, so every match has the pattern's length.
pub(crate) fn collect_matches(
    link: Option<&TrieNode>,
    elements: &[Element],
    idx: usize,
    buf: &mut Vec<u8>,
    topk: &mut TopK,
) {
    let node = match link {
        Some(node) => node,
        None => return,
    };
    let element = elements[idx];

    if element.admits_lesser(node.label) {
        collect_matches(node.lesser.as_deref(), elements, idx, buf, topk);
    }
    if element.admits_greater(node.label) {
        collect_matches(node.greater.as_deref(), elements, idx, buf, topk);
    }
    if element.matches(node.label) {
        buf.push(node.label);
        if idx + 1 == elements.len() {
            if node.is_terminal {
                topk.offer(buf, node.freq);
            }
        } else {
            collect_matches(node.next.as_deref(), elements, idx + 1, buf, topk);
        }
        buf.pop();
    }
}
