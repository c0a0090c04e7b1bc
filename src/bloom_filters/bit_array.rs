use bit_vec::BitVec;

use crate::error::BloomError;

/// Fixed size, zero initialized bit storage. Bits are never cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitArray {
    storage: BitVec,
}

impl BitArray {
    pub fn new(len: usize) -> Self {
        Self {
            storage: BitVec::from_elem(len, false),
        }
    }

    /// Like [`BitArray::new`], but reports a size the allocator cannot
    /// satisfy as [`BloomError::BitArrayTooLarge`] instead of aborting.
    pub fn try_new(len: usize) -> Result<Self, BloomError> {
        let blocks = len / 32 + usize::from(len % 32 != 0);
        let mut reservation: Vec<u32> = Vec::new();
        reservation
            .try_reserve_exact(blocks)
            .map_err(|_| BloomError::BitArrayTooLarge { bits: len as f64 })?;
        drop(reservation);
        Ok(Self::new(len))
    }

    pub fn set(&mut self, index: usize) -> Result<(), BloomError> {
        self.check(index)?;
        self.storage.set(index, true);
        Ok(())
    }

    pub fn test(&self, index: usize) -> Result<bool, BloomError> {
        self.storage.get(index).ok_or(BloomError::IndexOutOfRange {
            index,
            len: self.storage.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Number of bits currently set.
    pub fn count_ones(&self) -> usize {
        self.storage
            .blocks()
            .map(|block| block.count_ones() as usize)
            .sum()
    }

    fn check(&self, index: usize) -> Result<(), BloomError> {
        if index >= self.storage.len() {
            return Err(BloomError::IndexOutOfRange {
                index,
                len: self.storage.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unset() {
        let bits = BitArray::new(100);
        assert_eq!(bits.len(), 100);
        assert_eq!(bits.count_ones(), 0);
        assert!((0..100).all(|i| !bits.test(i).unwrap()));
    }

    #[test]
    fn try_new_allocates_zeroed_bits() {
        let bits = BitArray::try_new(100).unwrap();
        assert_eq!(bits, BitArray::new(100));
    }

    #[test]
    fn unallocatable_size_is_an_error() {
        let res = BitArray::try_new(usize::MAX);
        assert!(matches!(res, Err(BloomError::BitArrayTooLarge { .. })));
        assert!(res.unwrap_err().is_configuration());
    }

    #[test]
    fn set_is_idempotent() {
        let mut bits = BitArray::new(64);
        bits.set(5).unwrap();
        bits.set(5).unwrap();
        assert!(bits.test(5).unwrap());
        assert!(!bits.test(6).unwrap());
        assert_eq!(bits.count_ones(), 1);
    }

    #[test]
    fn last_bit_is_addressable() {
        let mut bits = BitArray::new(48);
        bits.set(47).unwrap();
        assert!(bits.test(47).unwrap());
    }

    #[test]
    fn out_of_range_access_fails() {
        let mut bits = BitArray::new(48);
        assert!(matches!(
            bits.set(48),
            Err(BloomError::IndexOutOfRange { index: 48, len: 48 })
        ));
        assert!(matches!(
            bits.test(1000),
            Err(BloomError::IndexOutOfRange { index: 1000, len: 48 })
        ));
        assert_eq!(bits.count_ones(), 0);
    }
}
