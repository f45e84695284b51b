//! Letter-frequency signatures.
//!
//! A [`Signature`] is the sorted, zero-free list of `(letter, count)` pairs of a
//! piece of text, lowercased. Two texts are anagrams of each other exactly when
//! their signatures are equal.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::AnagramError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(Vec<(char, usize)>);

impl Signature {
    /// The signature of no letters at all.
    pub fn empty() -> Self {
        Signature(Vec::new())
    }

    /// Builds a signature from explicit pairs, checking every invariant.
    pub fn from_pairs(pairs: Vec<(char, usize)>) -> Result<Self, AnagramError> {
        for (i, &(letter, count)) in pairs.iter().enumerate() {
            if count == 0 {
                return Err(malformed(format!("letter {:?} has a zero count", letter)));
            }
            if letter.to_lowercase().ne(std::iter::once(letter)) {
                return Err(malformed(format!("letter {:?} is not lowercase", letter)));
            }
            if i > 0 && pairs[i - 1].0 >= letter {
                return Err(malformed(format!(
                    "letters {:?} and {:?} are not strictly ascending",
                    pairs[i - 1].0, letter
                )));
            }
        }
        Ok(Signature(pairs))
    }

    /// Only for pair lists already known to be canonical.
    pub(crate) fn from_sorted_unchecked(pairs: Vec<(char, usize)>) -> Self {
        Signature(pairs)
    }

    pub fn pairs(&self) -> &[(char, usize)] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of letters, counting repeats.
    pub fn letter_count(&self) -> usize {
        self.0.iter().map(|&(_, count)| count).sum()
    }

    /// Whether `other` can be subtracted from `self`.
    pub fn covers(&self, other: &Signature) -> bool {
        subtract(self, other).is_ok()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &(letter, count) in &self.0 {
            write!(f, "{}{}", letter, count)?;
        }
        Ok(())
    }
}

fn malformed(reason: String) -> AnagramError {
    AnagramError::MalformedSignature { reason }
}

/// Counts every character of `word` after lowercasing it.
///
/// Nothing is filtered: digits and punctuation are counted like letters.
pub fn word_signature(word: &str) -> Signature {
    let mut counts = BTreeMap::new();
    for c in word.chars() {
        for lc in c.to_lowercase() {
            *counts.entry(lc).or_insert(0) += 1;
        }
    }
    Signature(counts.into_iter().collect())
}

/// Signature of all the words of a sentence taken together.
pub fn sentence_signature<S: AsRef<str>>(sentence: &[S]) -> Signature {
    let joined: String = sentence.iter().map(AsRef::as_ref).collect();
    word_signature(&joined)
}

/// Removes the letters of `y` from `x`.
///
/// Fails with [`AnagramError::InvalidSubtraction`] when `y` asks for a letter
/// `x` lacks, or for more copies of it than `x` has.
pub fn subtract(x: &Signature, y: &Signature) -> Result<Signature, AnagramError> {
    let mut remaining = Vec::with_capacity(x.0.len());
    let mut taken = y.0.iter().peekable();

    for &(letter, count) in &x.0 {
        match taken.peek() {
            Some(&&(other, _)) if other < letter => break,
            Some(&&(other, requested)) if other == letter => {
                taken.next();
                if requested > count {
                    return Err(AnagramError::InvalidSubtraction {
                        letter,
                        available: count,
                        requested,
                    });
                }
                if count > requested {
                    remaining.push((letter, count - requested));
                }
            }
            _ => remaining.push((letter, count)),
        }
    }

    // Anything left in `y` is a letter `x` never had.
    if let Some(&(letter, requested)) = taken.next() {
        return Err(AnagramError::InvalidSubtraction {
            letter,
            available: 0,
            requested,
        });
    }

    Ok(Signature(remaining))
}
