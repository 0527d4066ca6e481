//! Word dictionary backed by a character trie
//!
//! Dictionary files hold one word per line. Blank lines and lines starting
//! with `#` are ignored; surrounding whitespace is trimmed. Words consist of
//! CJK ideographs only, since the dictionary cutter never sees other text.

use crate::chars::is_ideograph;
use crate::error::{EngineError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Words shipped with the engine
const BUILTIN_WORDS: &str = include_str!("../data/builtin.dic");

#[derive(Debug, Default, Clone)]
struct Node {
    children: HashMap<char, Node>,
    terminal: bool,
}

/// Set of words supporting longest-match and prefix queries
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    root: Node,
    words: usize,
    longest: usize,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// The small general-purpose word list bundled with the engine
    pub fn builtin() -> Self {
        let mut dictionary = Self::new();
        if let Err(err) = dictionary.extend_from_text(BUILTIN_WORDS, "builtin") {
            warn!(%err, "bundled dictionary is malformed");
        }
        dictionary
    }

    /// Build a dictionary from a list of words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    /// Parse dictionary text
    pub fn parse(text: &str) -> Result<Self> {
        let mut dictionary = Self::new();
        dictionary.extend_from_text(text, "<text>")?;
        Ok(dictionary)
    }

    /// Load a dictionary file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut dictionary = Self::new();
        dictionary.extend_from_file(path)?;
        Ok(dictionary)
    }

    /// Add all words of a dictionary file
    pub fn extend_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| EngineError::IoError(format!("Failed to read dictionary {path:?}: {e}")))?;
        let added = self.extend_from_text(&text, &path.display().to_string())?;
        debug!(path = %path.display(), added, total = self.words, "loaded dictionary");
        Ok(added)
    }

    /// Add all words of dictionary text, returning how many were new
    pub fn extend_from_text(&mut self, text: &str, source_name: &str) -> Result<usize> {
        let mut added = 0;
        for (index, line) in text.lines().enumerate() {
            let entry = line.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            if entry.chars().any(char::is_whitespace) {
                return Err(EngineError::DictionaryError {
                    source_name: source_name.to_string(),
                    line: index + 1,
                    reason: format!("entry {entry:?} contains whitespace"),
                });
            }
            if let Some(ch) = entry.chars().find(|&ch| !is_ideograph(ch)) {
                return Err(EngineError::DictionaryError {
                    source_name: source_name.to_string(),
                    line: index + 1,
                    reason: format!("entry {entry:?} contains non-ideograph {ch:?}"),
                });
            }
            if self.insert(entry) {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Insert one word, returning false if it was already present or
    /// could never match
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        if !word.chars().all(is_ideograph) {
            warn!(word, "ignoring dictionary word with non-ideograph characters");
            return false;
        }

        let mut node = &mut self.root;
        let mut len = 0;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
            len += 1;
        }
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.words += 1;
        self.longest = self.longest.max(len);
        true
    }

    /// Merge another dictionary into this one
    pub fn merge(&mut self, other: &Dictionary) {
        let mut word = Vec::new();
        merge_node(self, &other.root, &mut word);
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words
    }

    /// Check if the dictionary has no words
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Length in characters of the longest word
    pub fn longest_word_len(&self) -> usize {
        self.longest
    }

    /// Check whether `word` is in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        self.find(&chars).is_some_and(|node| node.terminal)
    }

    /// Length of the longest word that is a prefix of `chars`, 0 if none
    pub fn longest_match(&self, chars: &[char]) -> usize {
        let mut node = &self.root;
        let mut best = 0;
        for (index, ch) in chars.iter().enumerate() {
            match node.children.get(ch) {
                Some(next) => node = next,
                None => break,
            }
            if node.terminal {
                best = index + 1;
            }
        }
        best
    }

    /// Whether `chars` is a strict prefix of at least one word
    pub fn is_proper_prefix(&self, chars: &[char]) -> bool {
        !chars.is_empty() && self.find(chars).is_some_and(|node| !node.children.is_empty())
    }

    fn find(&self, chars: &[char]) -> Option<&Node> {
        chars
            .iter()
            .try_fold(&self.root, |node, ch| node.children.get(ch))
    }
}

fn merge_node(target: &mut Dictionary, node: &Node, word: &mut Vec<char>) {
    if node.terminal {
        target.insert(&word.iter().collect::<String>());
    }
    for (&ch, child) in &node.children {
        word.push(ch);
        merge_node(target, child, word);
        word.pop();
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
