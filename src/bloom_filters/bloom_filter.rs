use tracing::{debug, trace};

use crate::bloom_filters::{BitArray, FilterConfig, FilterOptions, SpellChecker};
use crate::error::BloomError;
use crate::hash::{HashFamily, HashFunction, Murmur3HashFunction};

/// Bloom filter over a fixed size bit array.
///
/// Size and hash count are derived once from the target false positive
/// probability and the expected number of insertions. Inserted values are
/// always found again; values never inserted are reported as possibly present
/// with roughly the configured probability once the filter holds the expected
/// number of elements.
#[derive(Debug, Clone)]
pub struct BloomFilter<H = Murmur3HashFunction> {
    config: FilterConfig,
    storage: BitArray,
    hasher: H,
}

impl BloomFilter<Murmur3HashFunction> {
    /// p = 0.1, n = 100000
    pub fn new() -> Result<Self, BloomError> {
        Self::from_options(FilterOptions::default())
    }

    pub fn with_false_positive_probability(p: f64) -> Result<Self, BloomError> {
        Self::from_options(FilterOptions::new().false_positive_probability(p))
    }

    pub fn with_expected_elements(n: u32) -> Result<Self, BloomError> {
        Self::from_options(FilterOptions::new().expected_inserted_elements(n))
    }

    pub fn with_parameters(p: f64, n: u32) -> Result<Self, BloomError> {
        Self::from_options(
            FilterOptions::new()
                .false_positive_probability(p)
                .expected_inserted_elements(n),
        )
    }

    pub fn from_options(options: FilterOptions) -> Result<Self, BloomError> {
        Self::with_hasher(options, Murmur3HashFunction::default())
    }
}

impl<H: HashFunction> BloomFilter<H> {
    pub fn with_hasher(options: FilterOptions, hasher: H) -> Result<Self, BloomError> {
        let config = options.resolve()?;
        // size_bits is bounded by usize::MAX in compute_parameters
        let storage = BitArray::try_new(config.size_bits() as usize)?;
        debug!(
            p = config.false_positive_probability(),
            n = config.expected_inserted_elements(),
            m = config.size_bits(),
            k = config.hash_count(),
            "created bloom filter"
        );
        Ok(Self {
            config,
            storage,
            hasher,
        })
    }

    pub fn insert(&mut self, value: &[u8]) -> Result<(), BloomError> {
        let family = self.hash_family(value)?;
        for idx in family.indices(self.config.size_bits()) {
            self.storage.set(idx)?;
        }
        Ok(())
    }

    pub fn lookup(&self, value: &[u8]) -> Result<bool, BloomError> {
        let family = self.hash_family(value)?;
        for idx in family.indices(self.config.size_bits()) {
            if !self.storage.test(idx)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// The `k` derived hashes addressing `value`'s bits.
    pub fn hash_family(&self, value: &[u8]) -> Result<HashFamily, BloomError> {
        let hash = self.hasher.hash128(value)?;
        Ok(HashFamily::derive(hash, self.config.hash_count()))
    }

    /// The configured target probability, not a measured rate.
    pub fn false_positive_probability(&self) -> f64 {
        self.config.false_positive_probability()
    }

    pub fn expected_inserted_elements(&self) -> u32 {
        self.config.expected_inserted_elements()
    }

    pub fn size_bits(&self) -> u64 {
        self.config.size_bits()
    }

    pub fn hash_count(&self) -> u32 {
        self.config.hash_count()
    }

    pub fn bits_set(&self) -> usize {
        self.storage.count_ones()
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}

fn validate(word: Option<&str>) -> Result<&str, BloomError> {
    word.ok_or(BloomError::InvalidInput)
}

impl<H: HashFunction> SpellChecker for BloomFilter<H> {
    fn add_to_dictionary<'a>(
        &mut self,
        word: impl Into<Option<&'a str>>,
    ) -> Result<(), BloomError> {
        let word = validate(word.into())?;
        trace!(word, "adding word to dictionary");
        self.insert(word.as_bytes())
    }

    fn might_contain<'a>(&self, word: impl Into<Option<&'a str>>) -> Result<bool, BloomError> {
        let word = validate(word.into())?;
        self.lookup(word.as_bytes())
    }
}
