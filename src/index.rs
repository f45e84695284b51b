//! Dictionary words grouped by signature.

use std::collections::{hash_map::DefaultHasher, HashMap};
use std::hash::BuildHasherDefault;

use log::{debug, warn};

use crate::signature::{word_signature, Signature};

type IndexMap = HashMap<Signature, Vec<Box<str>>, BuildHasherDefault<DefaultHasher>>;

/// Immutable map from a signature to every dictionary word that has it, in
/// dictionary order. Built once; safe to share between threads.
#[derive(Debug, Default)]
pub struct DictionaryIndex {
    entries: IndexMap,
    word_count: usize,
}

impl DictionaryIndex {
    pub fn build<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut entries = IndexMap::default();
        let mut word_count = 0;
        let mut skipped = 0;

        for word in words {
            let word = word.as_ref();
            let key = word_signature(word);
            // A word without letters would match the empty sub-signature forever.
            if key.is_empty() {
                skipped += 1;
                continue;
            }
            entries.entry(key).or_insert_with(Vec::new).push(word.into());
            word_count += 1;
        }

        if skipped > 0 {
            warn!("Skipped {} empty dictionary entries", skipped);
        }
        debug!(
            "Indexed {} words under {} signatures",
            word_count,
            entries.len()
        );

        DictionaryIndex {
            entries,
            word_count,
        }
    }

    /// The words filed under `sig`, if any.
    pub fn get(&self, sig: &Signature) -> Option<&[Box<str>]> {
        self.entries.get(sig).map(Vec::as_slice)
    }

    /// Like [`get`](Self::get), but an unknown signature yields no words.
    pub fn lookup(&self, sig: &Signature) -> &[Box<str>] {
        self.get(sig).unwrap_or(&[])
    }

    /// Number of distinct signatures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(found: &[Box<str>]) -> Vec<&str> {
        found.iter().map(|w| &**w).collect()
    }

    #[test]
    fn test_groups_in_dictionary_order() {
        let index = DictionaryIndex::build(vec!["tea", "dog", "Ate", "eat", "god"]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.word_count(), 5);
        assert_eq!(words(index.lookup(&word_signature("eta"))), vec!["tea", "Ate", "eat"]);
        assert_eq!(words(index.lookup(&word_signature("odg"))), vec!["dog", "god"]);
    }

    #[test]
    fn test_unknown_signature_is_empty() {
        let index = DictionaryIndex::build(vec!["cat"]);

        assert!(index.get(&word_signature("dog")).is_none());
        assert!(index.lookup(&word_signature("dog")).is_empty());
    }

    #[test]
    fn test_keeps_duplicates_and_skips_empty_words() {
        let index = DictionaryIndex::build(vec!["cat", "", "cat"]);

        assert_eq!(words(index.lookup(&word_signature("act"))), vec!["cat", "cat"]);
        assert!(index.lookup(&Signature::empty()).is_empty());
        assert_eq!(index.word_count(), 2);
    }
}
