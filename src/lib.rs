//! Find every anagram of a word or sentence among the words of a dictionary.
//!
//! ```
//! use sentence_anagrams::Anagrammer;
//!
//! let anagrammer = Anagrammer::new(vec!["ate", "eat", "tea"]);
//! assert_eq!(anagrammer.word_anagrams("Tea"), vec!["ate", "eat", "tea"]);
//! ```

pub mod combinations;
pub mod dictionary;
pub mod error;
pub mod index;
pub mod log;
pub mod search;
pub mod signature;

pub use crate::combinations::combinations;
pub use crate::dictionary::Dictionary;
pub use crate::error::AnagramError;
pub use crate::index::DictionaryIndex;
pub use crate::search::{Anagrammer, Sentence};
pub use crate::signature::{sentence_signature, subtract, word_signature, Signature};
