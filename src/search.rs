//! The anagram search.
//!
//! A query's signature is peeled apart one word at a time: every non-empty
//! sub-signature of the letters still unused is looked up in the index, and
//! each matching word is put in front of every way of spelling what is left.
//! Any subset of the remaining letters may form the next word, so each level
//! tries all of them.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use log::debug;
use rayon::prelude::*;

use crate::combinations::combinations;
use crate::dictionary::Dictionary;
use crate::error::AnagramError;
use crate::index::DictionaryIndex;
use crate::signature::{sentence_signature, subtract, word_signature, Signature};

/// An ordered list of dictionary words.
pub type Sentence<'a> = Vec<&'a str>;

pub struct Anagrammer {
    words: Vec<Box<str>>,
    index: OnceLock<DictionaryIndex>,
}

impl Anagrammer {
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Box<str>>,
    {
        Anagrammer {
            words: words.into_iter().map(Into::into).collect(),
            index: OnceLock::new(),
        }
    }

    pub fn from_dictionary(dictionary: Dictionary) -> Self {
        Self::new(dictionary.words)
    }

    pub fn from_dictionary_path<P: AsRef<Path>>(path: P) -> Result<Self, AnagramError> {
        Ok(Self::from_dictionary(Dictionary::load_from_path(path)?))
    }

    /// Number of dictionary words, before any are dropped from the index.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The index, built on first use.
    pub fn index(&self) -> &DictionaryIndex {
        self.index.get_or_init(|| DictionaryIndex::build(&self.words))
    }

    /// Keeps only the words with `min_letters ..= max_letters` letters.
    pub fn restrict_letters(&mut self, min_letters: usize, max_letters: usize) {
        self.words.retain(|word| {
            let letters = word_signature(word).letter_count();
            letters >= min_letters && letters <= max_letters
        });
        self.index.take();
    }

    /// Every dictionary word with the same letters as `word`.
    pub fn word_anagrams(&self, word: &str) -> Vec<&str> {
        self.index()
            .lookup(&word_signature(word))
            .iter()
            .map(|w| &**w)
            .collect()
    }

    /// Every sentence of dictionary words using exactly the letters of `sentence`.
    ///
    /// The empty sentence has one anagram, itself. Different orders of the
    /// same words are different anagrams.
    pub fn sentence_anagrams<S: AsRef<str>>(
        &self,
        sentence: &[S],
    ) -> Result<Vec<Sentence<'_>>, AnagramError> {
        self.find_anagrams(sentence, 0, usize::MAX)
    }

    /// Like [`sentence_anagrams`](Self::sentence_anagrams), keeping only
    /// anagrams of `min_words ..= max_words` words.
    pub fn find_anagrams<S: AsRef<str>>(
        &self,
        sentence: &[S],
        min_words: usize,
        max_words: usize,
    ) -> Result<Vec<Sentence<'_>>, AnagramError> {
        if min_words > max_words {
            return Ok(Vec::new());
        }

        let index = self.index();
        let pool = sentence_signature(sentence);
        if pool.is_empty() {
            let found = if min_words == 0 { vec![Vec::new()] } else { Vec::new() };
            return Ok(found);
        }

        let branches: Vec<Signature> = combinations(&pool)
            .into_iter()
            .filter(|sub| !sub.is_empty() && !index.lookup(sub).is_empty())
            .collect();
        debug!("Searching {} ({} first-word signatures)", pool, branches.len());

        // Branches share nothing but the read-only index.
        let per_branch = branches
            .par_iter()
            .map(|sub| Search::new(index).branch(&pool, sub, max_words))
            .collect::<Result<Vec<_>, _>>()?;

        let found: Vec<Sentence<'_>> = per_branch
            .into_iter()
            .flatten()
            .filter(|sentence| sentence.len() >= min_words)
            .collect();
        debug!("Found {} anagrams of {}", found.len(), pool);
        Ok(found)
    }
}

/// One depth-first search, memoizing the sentences for each
/// (remaining letters, word budget) it has already solved.
struct Search<'a> {
    index: &'a DictionaryIndex,
    memo: HashMap<(Signature, usize), Vec<Sentence<'a>>>,
}

impl<'a> Search<'a> {
    fn new(index: &'a DictionaryIndex) -> Self {
        Search {
            index,
            memo: HashMap::new(),
        }
    }

    /// All spellings of `pool` in at most `budget` words.
    fn solve(&mut self, pool: &Signature, budget: usize) -> Result<Vec<Sentence<'a>>, AnagramError> {
        // Without this the empty sub-signature would recurse on `pool` forever.
        if pool.is_empty() {
            return Ok(vec![Vec::new()]);
        }
        if budget == 0 {
            return Ok(Vec::new());
        }

        // Every word uses at least one letter, so a larger budget changes nothing.
        let key = (pool.clone(), budget.min(pool.letter_count()));
        if let Some(found) = self.memo.get(&key) {
            return Ok(found.clone());
        }

        let mut found = Vec::new();
        for sub in combinations(pool) {
            if sub.is_empty() {
                continue;
            }
            found.extend(self.branch(pool, &sub, budget)?);
        }

        self.memo.insert(key, found.clone());
        Ok(found)
    }

    /// All spellings of `pool` whose first word has signature `first`.
    fn branch(
        &mut self,
        pool: &Signature,
        first: &Signature,
        budget: usize,
    ) -> Result<Vec<Sentence<'a>>, AnagramError> {
        let index = self.index;
        let words = index.lookup(first);
        if words.is_empty() || budget == 0 {
            return Ok(Vec::new());
        }

        let rest = subtract(pool, first)?;
        let tails = self.solve(&rest, budget - 1)?;

        let mut found = Vec::with_capacity(words.len() * tails.len());
        for word in words {
            for tail in &tails {
                let mut sentence = Vec::with_capacity(tail.len() + 1);
                sentence.push(&**word);
                sentence.extend_from_slice(tail);
                found.push(sentence);
            }
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn anagrammer() -> Anagrammer {
        Anagrammer::new(vec!["ate", "eat", "tea", "a", "I", "at", "it"])
    }

    fn as_set<'a>(found: Vec<Sentence<'a>>) -> HashSet<Sentence<'a>> {
        found.into_iter().collect()
    }

    #[test]
    fn test_word_anagrams() {
        let anagrammer = anagrammer();
        assert_eq!(anagrammer.word_anagrams("Eat"), vec!["ate", "eat", "tea"]);
        assert!(anagrammer.word_anagrams("dog").is_empty());
    }

    #[test]
    fn test_empty_sentence() {
        let anagrammer = anagrammer();
        let empty: [&str; 0] = [];
        let found = anagrammer.sentence_anagrams(&empty).unwrap();
        assert_eq!(found, vec![Vec::<&str>::new()]);
    }

    #[test]
    fn test_orderings_are_distinct() {
        let anagrammer = anagrammer();
        let found = anagrammer.sentence_anagrams(&["ita"]).unwrap();
        let expected: HashSet<Sentence> = vec![
            vec!["a", "it"],
            vec!["it", "a"],
            vec!["at", "I"],
            vec!["I", "at"],
        ]
        .into_iter()
        .collect();

        assert_eq!(found.len(), expected.len());
        assert_eq!(as_set(found), expected);
    }

    #[test]
    fn test_unspellable_is_empty() {
        assert!(anagrammer().sentence_anagrams(&["xyz"]).unwrap().is_empty());
    }

    #[test]
    fn test_word_bounds() {
        let anagrammer = anagrammer();

        let one_word = anagrammer.find_anagrams(&["tea"], 1, 1).unwrap();
        assert_eq!(as_set(one_word), as_set(vec![vec!["ate"], vec!["eat"], vec!["tea"]]));

        let two_words = anagrammer.find_anagrams(&["tea"], 2, 2).unwrap();
        assert!(two_words.is_empty());

        assert!(anagrammer.find_anagrams(&["ita"], 3, 2).unwrap().is_empty());
        let empty: [&str; 0] = [];
        assert!(anagrammer.find_anagrams(&empty, 1, 5).unwrap().is_empty());
    }

    #[test]
    fn test_restrict_letters_rebuilds_index() {
        let mut anagrammer = anagrammer();
        assert_eq!(anagrammer.index().word_count(), 7);

        anagrammer.restrict_letters(2, 2);
        assert_eq!(anagrammer.word_count(), 2);
        assert!(anagrammer.word_anagrams("eat").is_empty());

        let found = anagrammer.sentence_anagrams(&["ta"]).unwrap();
        assert_eq!(found, vec![vec!["at"]]);
    }
}
