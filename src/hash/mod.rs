//! 128-bit hashing and the hash family derived from it.
//!
//! A filter only needs a single 128-bit hash per word: the two 64-bit halves
//! feed the double hashing scheme in [`HashFamily::derive`], which yields the
//! `k` bit positions without `k` separate hash computations.

mod family;
mod murmur;
mod xxh3;

pub use self::family::HashFamily;
pub use self::murmur::{Murmur3HashFunction, DEFAULT_MURMUR3_SEED};
pub use self::xxh3::Xxh3HashFunction;

use crate::error::HashError;

/// Full output of one 128-bit hash computation, split in two 64-bit words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hash128 {
    first: u64,
    second: u64,
}

impl Hash128 {
    pub const fn of(first: u64, second: u64) -> Self {
        Self { first, second }
    }

    /// The low word goes first, the high word second.
    pub const fn from_u128(value: u128) -> Self {
        Self {
            first: value as u64,
            second: (value >> 64) as u64,
        }
    }

    pub const fn first(&self) -> u64 {
        self.first
    }

    pub const fn second(&self) -> u64 {
        self.second
    }
}

/// Deterministic byte sequence -> 128-bit hash.
///
/// Any implementation can back a filter as long as equal input always gives
/// equal output and the output is reasonably uniform. Bits written by a filter
/// are only meaningful to filters using the same hash function.
pub trait HashFunction {
    fn hash128(&self, data: &[u8]) -> Result<Hash128, HashError>;
}

impl<H: HashFunction + ?Sized> HashFunction for &H {
    fn hash128(&self, data: &[u8]) -> Result<Hash128, HashError> {
        (**self).hash128(data)
    }
}
