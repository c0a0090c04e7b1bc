use std::io::Cursor;

use murmur3::murmur3_x64_128;

use super::{Hash128, HashFunction};
use crate::error::HashError;

/// Seed used when none is given.
pub const DEFAULT_MURMUR3_SEED: u32 = 104_729;

/// MurmurHash3 x64 128-bit variant, the reference hash for the filter.
#[derive(Debug, Clone, Copy)]
pub struct Murmur3HashFunction {
    seed: u32,
}

impl Default for Murmur3HashFunction {
    fn default() -> Self {
        Self::with_seed(DEFAULT_MURMUR3_SEED)
    }
}

impl Murmur3HashFunction {
    pub fn with_seed(seed: u32) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl HashFunction for Murmur3HashFunction {
    fn hash128(&self, data: &[u8]) -> Result<Hash128, HashError> {
        let mut cursor = Cursor::new(data);
        murmur3_x64_128(&mut cursor, self.seed)
            .map(Hash128::from_u128)
            .map_err(|e| HashError::new("murmur3", e))
    }
}
