//! Property-based tests for the streaming hasher.

use proptest::prelude::*;
use whirlpool::{hash_stream, Digest, Whirlpool, WhirlpoolHash};

fn arb_data() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..1024)
}

/// Sorted cut points into a message of `len` bytes.
fn arb_splits(len: usize, count: usize) -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..=len, count).prop_map(|mut splits| {
        splits.sort_unstable();
        splits
    })
}

fn data_and_splits() -> impl Strategy<Value = (Vec<u8>, Vec<usize>)> {
    arb_data().prop_flat_map(|data| {
        let len = data.len();
        (Just(data), arb_splits(len, 8))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn chunking_does_not_change_digest((data, splits) in data_and_splits()) {
        let mut hasher = Whirlpool::new();
        let mut prev = 0;
        for split in splits {
            hasher.update(&data[prev..split]);
            prev = split;
        }
        hasher.update(&data[prev..]);

        prop_assert_eq!(hasher.finalize(), Whirlpool::digest(&data));
    }

    #[test]
    fn digest_is_deterministic(data in arb_data()) {
        let a = WhirlpoolHash::digest(&data);
        let b = WhirlpoolHash::digest(&data);
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.as_bytes().len(), 64);
    }

    #[test]
    fn single_bit_flip_changes_digest(data in prop::collection::vec(any::<u8>(), 1..512), idx in any::<prop::sample::Index>(), bit in 0..8u8) {
        let mut flipped = data.clone();
        flipped[idx.index(data.len())] ^= 1 << bit;
        prop_assert_ne!(WhirlpoolHash::digest(&data), WhirlpoolHash::digest(&flipped));
    }

    #[test]
    fn appended_byte_changes_digest(data in arb_data(), extra in any::<u8>()) {
        let mut longer = data.clone();
        longer.push(extra);
        prop_assert_ne!(WhirlpoolHash::digest(&data), WhirlpoolHash::digest(&longer));
    }

    #[test]
    fn stream_limit_hashes_prefix(data in arb_data(), limit in 0..2048u64) {
        let expected = WhirlpoolHash::digest(&data[..data.len().min(limit as usize)]);
        prop_assert_eq!(hash_stream(&data[..], Some(limit)).unwrap(), expected);
    }

    #[test]
    fn hex_text_parses_back(data in arb_data()) {
        let hash = WhirlpoolHash::digest(&data);
        prop_assert_eq!(hash.to_string().parse::<WhirlpoolHash>().unwrap(), hash);
    }
}
