use super::Hash128;

/// The `k` values derived from one [`Hash128`] by double hashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashFamily {
    hashes: Vec<u64>,
}

impl HashFamily {
    /// g_i = h1 + i * h2 for i = 1..=k
    ///
    /// Arithmetic is unsigned 64-bit with wraparound, so every value is
    /// non-negative and reducing it modulo the bit array size is always valid.
    pub fn derive(hash: Hash128, k: u32) -> Self {
        let (h1, h2) = (hash.first(), hash.second());
        let hashes = (1..=u64::from(k))
            .map(|i| h1.wrapping_add(i.wrapping_mul(h2)))
            .collect();
        Self { hashes }
    }

    /// Maps every derived value onto `[0, m)`.
    ///
    /// `m` must be non-zero.
    pub fn indices(&self, m: u64) -> impl Iterator<Item = usize> + '_ {
        self.hashes.iter().map(move |hash| (hash % m) as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.hashes.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn derives_k_values() {
        let family = HashFamily::derive(Hash128::of(10, 3), 4);
        assert_eq!(family.len(), 4);
        assert_eq!(family.iter().collect::<Vec<_>>(), vec![13, 16, 19, 22]);
    }

    #[test]
    fn wraps_around_on_overflow() {
        let family = HashFamily::derive(Hash128::of(u64::MAX, u64::MAX), 3);
        // MAX + i * MAX == MAX - i (mod 2^64)
        assert_eq!(
            family.iter().collect::<Vec<_>>(),
            vec![u64::MAX - 1, u64::MAX - 2, u64::MAX - 3]
        );
    }

    #[test]
    fn overflowing_values_land_in_range() {
        let m = 47_926;
        let family = HashFamily::derive(Hash128::of(u64::MAX - 5, u64::MAX / 2 + 7), 32);
        for idx in family.indices(m) {
            assert!((idx as u64) < m, "index {} out of range", idx);
        }
    }

    #[test]
    fn zero_second_word_repeats_first() {
        let family = HashFamily::derive(Hash128::of(99, 0), 3);
        assert!(family.iter().all(|h| h == 99));
    }

    proptest! {
        #[test]
        fn indices_always_in_range(
            h1 in any::<u64>(),
            h2 in any::<u64>(),
            k in 1u32..64,
            m in 1u64..10_000_000,
        ) {
            let family = HashFamily::derive(Hash128::of(h1, h2), k);
            prop_assert_eq!(family.len(), k as usize);
            for idx in family.indices(m) {
                prop_assert!((idx as u64) < m);
            }
        }

        #[test]
        fn derivation_is_deterministic(h1 in any::<u64>(), h2 in any::<u64>(), k in 1u32..32) {
            let hash = Hash128::of(h1, h2);
            prop_assert_eq!(HashFamily::derive(hash, k), HashFamily::derive(hash, k));
        }
    }
}
