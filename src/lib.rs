//! Bloom filter backed dictionary for spell checking.
//!
//! Answers "is this word possibly in the dictionary?" with no false negatives
//! and a configurable false positive probability. Each word is hashed once
//! with a 128-bit hash; the `k` bit positions are derived from its two 64-bit
//! halves by double hashing.
//!
//! ```
//! use spell_bloom::{BloomFilter, SpellChecker};
//!
//! let mut dictionary = BloomFilter::with_expected_elements(10)?;
//! dictionary.add_to_dictionary("hello")?;
//!
//! assert!(dictionary.might_contain("hello")?);
//! assert!(dictionary.might_contain(None).is_err());
//! # Ok::<(), spell_bloom::BloomError>(())
//! ```

pub mod bloom_filters;
pub mod error;
pub mod hash;

pub use bloom_filters::{
    compute_parameters, BitArray, BloomFilter, FilterConfig, FilterOptions, SpellChecker,
};
pub use error::{BloomError, HashError};
pub use hash::{
    Hash128, HashFamily, HashFunction, Murmur3HashFunction, Xxh3HashFunction, DEFAULT_MURMUR3_SEED,
};

pub const DEFAULT_FALSE_POSITIVE_PROBABILITY: f64 = 0.1;
pub const DEFAULT_EXPECTED_INSERTED_ELEMENTS: u32 = 100_000;
