use std::f64::consts::LN_2;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::BloomError;
use crate::{DEFAULT_EXPECTED_INSERTED_ELEMENTS, DEFAULT_FALSE_POSITIVE_PROBABILITY};

/// Optimal bit array size `m` and hash function count `k` for a target
/// false positive probability `p` and `n` expected insertions.
pub fn compute_parameters(p: f64, n: u32) -> Result<(u64, u32), BloomError> {
    // NaN fails both comparisons
    if !(p > 0.0 && p < 1.0) {
        return Err(BloomError::InvalidFalsePositiveProbability { p });
    }
    if n == 0 {
        return Err(BloomError::InvalidExpectedElements);
    }

    let m = calculate_m(p, n)?;
    Ok((m, calculate_k(m, n)))
}

/// m = ceil(-n * ln(p) / (ln2)^2)
fn calculate_m(p: f64, n: u32) -> Result<u64, BloomError> {
    let bits = (-f64::from(n) * p.ln() / LN_2.powi(2)).ceil();
    if bits >= usize::MAX as f64 {
        return Err(BloomError::BitArrayTooLarge { bits });
    }
    // p < 1 makes ln(p) negative, so at least one bit
    Ok((bits as u64).max(1))
}

/// k = max(1, round(m/n * ln2))
fn calculate_k(m: u64, n: u32) -> u32 {
    let k = (m as f64 / f64::from(n) * LN_2).round() as u32;
    k.max(1)
}

/// Parameters of one filter, derived once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    false_positive_probability: f64,
    expected_inserted_elements: u32,
    size_bits: u64,
    hash_count: u32,
}

impl FilterConfig {
    pub fn new(p: f64, n: u32) -> Result<Self, BloomError> {
        let (size_bits, hash_count) = compute_parameters(p, n).map_err(|e| {
            warn!(p, n, error = %e, "rejected bloom filter configuration");
            e
        })?;
        Ok(Self {
            false_positive_probability: p,
            expected_inserted_elements: n,
            size_bits,
            hash_count,
        })
    }

    /// p
    pub fn false_positive_probability(&self) -> f64 {
        self.false_positive_probability
    }

    /// n
    pub fn expected_inserted_elements(&self) -> u32 {
        self.expected_inserted_elements
    }

    /// m
    pub fn size_bits(&self) -> u64 {
        self.size_bits
    }

    /// k
    pub fn hash_count(&self) -> u32 {
        self.hash_count
    }
}

/// User facing filter options. Unset fields fall back to the crate defaults.
///
/// Deserializes from e.g. `{"falsePositiveProbability": 0.01}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterOptions {
    pub false_positive_probability: Option<f64>,
    pub expected_inserted_elements: Option<u32>,
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn false_positive_probability(mut self, p: f64) -> Self {
        self.false_positive_probability = Some(p);
        self
    }

    pub fn expected_inserted_elements(mut self, n: u32) -> Self {
        self.expected_inserted_elements = Some(n);
        self
    }

    pub fn resolve(&self) -> Result<FilterConfig, BloomError> {
        FilterConfig::new(
            self.false_positive_probability
                .unwrap_or(DEFAULT_FALSE_POSITIVE_PROBABILITY),
            self.expected_inserted_elements
                .unwrap_or(DEFAULT_EXPECTED_INSERTED_ELEMENTS),
        )
    }
}
