mod base;
mod bit_array;
mod bloom_filter;
mod parameters;

pub use self::base::SpellChecker;
pub use self::bit_array::BitArray;
pub use self::bloom_filter::BloomFilter;
pub use self::parameters::{compute_parameters, FilterConfig, FilterOptions};
