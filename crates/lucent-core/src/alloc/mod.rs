pub mod bit_set;

pub use bit_set::BitSet64;
