//! Bloom-filter pre-screen for dictionary membership
//!
//! Answers "might this token be a dictionary word" in O(k) without
//! touching the trie. The filter can false-positive but never
//! false-negates an added item, so it is only ever used to skip work on
//! clearly clean text, never as the positive authority.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Occupancy counters for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloomStats {
    /// Bit-array size in bits
    pub size: usize,
    /// Number of hash probes per item
    pub hash_count: u32,
    /// Items added so far
    pub item_count: usize,
    /// Bits currently set
    pub bits_set: usize,
    /// `bits_set / size`
    pub load_factor: f64,
    /// `load_factor ^ hash_count`
    pub estimated_false_positive_rate: f64,
}

/// Probabilistic set membership over strings
///
/// The whole state serializes with serde, so a sized filter can be
/// snapshotted to JSON and restored without re-adding items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloomFilter {
    bits: Vec<u8>,
    /// Size in bits, not bytes
    size: usize,
    hash_count: u32,
    /// For false-positive estimation only; correctness never depends on it
    item_count: usize,
}

impl BloomFilter {
    /// Size the filter for `expected_items` at the target false-positive
    /// rate: `m = -n·ln(p)/ln(2)²` bits and `k = (m/n)·ln(2)` probes.
    ///
    /// `expected_items` is clamped to at least 1 and `false_positive_rate`
    /// to (0, 1) so degenerate inputs still produce a usable filter.
    pub fn new(expected_items: usize, false_positive_rate: f64) -> Self {
        let n = expected_items.max(1) as f64;
        let p = false_positive_rate.clamp(f64::MIN_POSITIVE, 0.999_999);

        let size = (-n * p.ln() / std::f64::consts::LN_2.powi(2)).ceil() as usize;
        let size = size.max(8);
        let hash_count = ((size as f64 / n) * std::f64::consts::LN_2).ceil() as u32;
        let hash_count = hash_count.max(1);

        Self {
            bits: vec![0; size.div_ceil(8)],
            size,
            hash_count,
            item_count: 0,
        }
    }

    /// FNV-1a over the UTF-8 bytes
    fn hash1(&self, item: &str) -> u64 {
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in item.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x100_0000_01b3);
        }
        hash % self.size as u64
    }

    /// djb2 over the UTF-8 bytes
    fn hash2(&self, item: &str) -> u64 {
        let mut hash: u64 = 5381;
        for byte in item.bytes() {
            hash = hash.wrapping_shl(5).wrapping_add(hash).wrapping_add(u64::from(byte));
        }
        hash % self.size as u64
    }

    fn set_bit(bits: &mut [u8], index: usize) {
        bits[index / 8] |= 1 << (index % 8);
    }

    fn get_bit(&self, index: usize) -> bool {
        self.bits[index / 8] & (1 << (index % 8)) != 0
    }

    /// Double hashing: `h_i = (h1 + i·h2) mod m` for `i` in `[0, k)`
    fn probes(&self, item: &str) -> impl Iterator<Item = usize> + '_ {
        let h1 = self.hash1(item);
        let h2 = self.hash2(item);
        let size = self.size as u64;
        (0..u64::from(self.hash_count))
            .map(move |i| (h1.wrapping_add(i.wrapping_mul(h2)) % size) as usize)
    }

    /// Set all `k` probe bits for the item
    pub fn add(&mut self, item: &str) {
        let bits: Vec<usize> = self.probes(item).collect();
        for bit in bits {
            Self::set_bit(&mut self.bits, bit);
        }
        self.item_count += 1;
    }

    /// Add every item in the iterator
    pub fn add_all<'a, I: IntoIterator<Item = &'a str>>(&mut self, items: I) {
        for item in items {
            self.add(item);
        }
    }

    /// True when all probe bits are set. False means definitely absent.
    pub fn might_contain(&self, item: &str) -> bool {
        self.probes(item).all(|bit| self.get_bit(bit))
    }

    /// True when any item passes [`Self::might_contain`]
    pub fn might_contain_any<'a, I: IntoIterator<Item = &'a str>>(&self, items: I) -> bool {
        items.into_iter().any(|item| self.might_contain(item))
    }

    /// Clear all bits and the item counter
    pub fn clear(&mut self) {
        self.bits.fill(0);
        self.item_count = 0;
    }

    /// Expected false-positive rate at the current fill:
    /// `(1 - e^(-k·n/m))^k`
    pub fn current_false_positive_rate(&self) -> f64 {
        let ratio = self.item_count as f64 / self.size as f64;
        (1.0 - (-f64::from(self.hash_count) * ratio).exp()).powi(self.hash_count as i32)
    }

    /// Occupancy counters
    pub fn stats(&self) -> BloomStats {
        let bits_set = self.bits.iter().map(|b| b.count_ones() as usize).sum();
        let load_factor = bits_set as f64 / self.size as f64;
        BloomStats {
            size: self.size,
            hash_count: self.hash_count,
            item_count: self.item_count,
            bits_set,
            load_factor,
            estimated_false_positive_rate: load_factor.powi(self.hash_count as i32),
        }
    }

    fn check_shape(&self, other: &BloomFilter) -> Result<()> {
        if self.size != other.size || self.hash_count != other.hash_count {
            return Err(CoreError::ShapeMismatch {
                left_bits: self.size,
                left_hashes: self.hash_count,
                right_bits: other.size,
                right_hashes: other.hash_count,
            });
        }
        Ok(())
    }

    /// Bitwise OR of two same-shape filters; contains every item either did
    pub fn union(&self, other: &BloomFilter) -> Result<BloomFilter> {
        self.check_shape(other)?;
        let bits = self
            .bits
            .iter()
            .zip(&other.bits)
            .map(|(a, b)| a | b)
            .collect();
        Ok(BloomFilter {
            bits,
            size: self.size,
            hash_count: self.hash_count,
            item_count: self.item_count + other.item_count,
        })
    }

    /// Bitwise AND of two same-shape filters
    pub fn intersect(&self, other: &BloomFilter) -> Result<BloomFilter> {
        self.check_shape(other)?;
        let bits = self
            .bits
            .iter()
            .zip(&other.bits)
            .map(|(a, b)| a & b)
            .collect();
        Ok(BloomFilter {
            bits,
            size: self.size,
            hash_count: self.hash_count,
            item_count: self.item_count.min(other.item_count),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn no_false_negatives() {
        let words = ["damn", "hell", "merde", "scheiße", "साला", "கூதி"];
        let mut filter = BloomFilter::new(words.len(), 0.01);
        filter.add_all(words);
        for word in words {
            assert!(filter.might_contain(word), "lost {word}");
        }
    }

    #[test]
    fn absent_items_usually_rejected() {
        let mut filter = BloomFilter::new(100, 0.01);
        for i in 0..100 {
            filter.add(&format!("member-{i}"));
        }
        let false_positives = (0..1000)
            .filter(|i| filter.might_contain(&format!("outsider-{i}")))
            .count();
        // 1% target rate; allow a generous multiple before calling it broken
        assert!(false_positives < 100, "{false_positives} false positives");
    }

    #[test]
    fn sizing_follows_the_formulas() {
        let filter = BloomFilter::new(1000, 0.01);
        let stats = filter.stats();
        // m = ceil(-1000 * ln(0.01) / ln(2)^2) = 9586, k = ceil(m/n * ln 2) = 7
        assert_eq!(stats.size, 9586);
        assert_eq!(stats.hash_count, 7);
        assert_eq!(stats.item_count, 0);
        assert_eq!(stats.bits_set, 0);
    }

    #[test]
    fn degenerate_parameters_still_work() {
        let mut filter = BloomFilter::new(0, 0.01);
        filter.add("x");
        assert!(filter.might_contain("x"));
    }

    #[test]
    fn clear_resets_membership() {
        let mut filter = BloomFilter::new(10, 0.01);
        filter.add("damn");
        filter.clear();
        assert!(!filter.might_contain("damn"));
        assert_eq!(filter.stats().bits_set, 0);
    }

    #[test]
    fn union_contains_both_sides() {
        let mut left = BloomFilter::new(10, 0.01);
        let mut right = BloomFilter::new(10, 0.01);
        left.add("damn");
        right.add("hell");

        let combined = left.union(&right).unwrap();
        assert!(combined.might_contain("damn"));
        assert!(combined.might_contain("hell"));
        assert_eq!(combined.stats().item_count, 2);
    }

    #[test]
    fn intersect_keeps_only_shared_bits() {
        let mut left = BloomFilter::new(10, 0.01);
        let mut right = BloomFilter::new(10, 0.01);
        left.add("damn");
        left.add("hell");
        right.add("damn");

        let shared = left.intersect(&right).unwrap();
        assert!(shared.might_contain("damn"));
    }

    #[test]
    fn shape_mismatch_is_an_error() {
        let left = BloomFilter::new(10, 0.01);
        let right = BloomFilter::new(1000, 0.01);
        assert!(matches!(
            left.union(&right),
            Err(CoreError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            left.intersect(&right),
            Err(CoreError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn snapshot_restores_membership() {
        let mut filter = BloomFilter::new(50, 0.01);
        filter.add_all(["damn", "hell"]);

        let json = serde_json::to_string(&filter).unwrap();
        let restored: BloomFilter = serde_json::from_str(&json).unwrap();
        assert!(restored.might_contain("damn"));
        assert!(restored.might_contain("hell"));
        assert_eq!(restored.stats(), filter.stats());
    }

    proptest! {
        #[test]
        fn added_items_always_reported(words in proptest::collection::vec("[a-zA-Z0-9]{1,16}", 1..50)) {
            let mut filter = BloomFilter::new(words.len(), 0.01);
            for word in &words {
                filter.add(word);
            }
            for word in &words {
                prop_assert!(filter.might_contain(word));
            }
        }
    }
}
