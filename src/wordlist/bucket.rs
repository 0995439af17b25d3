//! Fixed-length word buckets and the distinct/repeated letter split

use std::collections::{BTreeSet, HashSet};

/// Deduplicated words of one fixed letter count, kept in sorted order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBucket {
    len: usize,
    words: BTreeSet<String>,
}

impl WordBucket {
    /// Empty bucket for words of `len` letters
    pub fn new(len: usize) -> Self {
        Self {
            len,
            words: BTreeSet::new(),
        }
    }

    /// Keep only words of exactly `len` letters
    pub fn collect<I, S>(len: usize, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bucket = Self::new(len);
        bucket.extend(words);
        bucket
    }

    /// Add a word if it has the bucket's length.
    /// Returns false for wrong-length words and duplicates.
    pub fn insert(&mut self, word: &str) -> bool {
        if letter_count(word) != self.len {
            return false;
        }
        self.words.insert(word.to_string())
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    pub fn word_len(&self) -> usize {
        self.len
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Partition into words with pairwise distinct letters and the rest
    pub fn split_by_uniqueness(&self) -> UniquenessSplit {
        let mut split = UniquenessSplit {
            distinct: Self::new(self.len),
            repeat: Self::new(self.len),
        };
        for word in &self.words {
            let target = if has_distinct_letters(word) {
                &mut split.distinct
            } else {
                &mut split.repeat
            };
            target.words.insert(word.clone());
        }
        split
    }
}

impl<'a> IntoIterator for &'a WordBucket {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Result of `WordBucket::split_by_uniqueness`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniquenessSplit {
    /// every letter occurs once
    pub distinct: WordBucket,
    /// at least one letter repeats
    pub repeat: WordBucket,
}

/// Number of letters (Unicode scalar values) in a word
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

/// True if no letter occurs twice
pub fn has_distinct_letters(word: &str) -> bool {
    let mut seen = HashSet::new();
    word.chars().all(|c| seen.insert(c))
}
