use proptest::prelude::*;

use ballotbox_types::{Tally, Timestamp};

proptest! {
    /// Tally total equals the sum of all individual counts.
    #[test]
    fn tally_total_is_sum_of_counts(counts in prop::collection::btree_map("[a-z]{1,8}", 0u64..100, 0..10)) {
        let mut tally = Tally::new();
        for (name, n) in &counts {
            for _ in 0..*n {
                tally.increment(name);
            }
        }
        let expected: u64 = counts.values().sum();
        prop_assert_eq!(tally.total(), expected);
    }

    /// Incrementing any name raises the total by exactly one.
    #[test]
    fn increment_adds_exactly_one(name in "[a-zA-Z]{1,12}", seed in 0u64..100) {
        let mut tally = Tally::new();
        for _ in 0..seed {
            tally.increment("base");
        }
        let before = tally.total();
        tally.increment(&name);
        prop_assert_eq!(tally.total(), before + 1);
        prop_assert!(tally.get(&name) >= 1);
    }

    /// Ranked entries are monotonically non-increasing by count.
    #[test]
    fn ranked_is_sorted_descending(counts in prop::collection::btree_map("[a-z]{1,8}", 1u64..50, 0..8)) {
        let mut tally = Tally::new();
        for (name, n) in &counts {
            for _ in 0..*n {
                tally.increment(name);
            }
        }
        let ranked = tally.ranked();
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
        prop_assert_eq!(ranked.len(), counts.len());
    }

    /// Tally JSON roundtrip preserves every count.
    #[test]
    fn tally_json_roundtrip(counts in prop::collection::btree_map("[a-z]{1,8}", 1u64..100, 0..8)) {
        let mut tally = Tally::new();
        for (name, n) in &counts {
            for _ in 0..*n {
                tally.increment(name);
            }
        }
        let encoded = serde_json::to_string(&tally).unwrap();
        let decoded: Tally = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, tally);
    }

    /// Timestamp ordering matches the underlying seconds.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }

    /// RFC 3339 rendering is stable for realistic instants and roundtrips
    /// through chrono's parser.
    #[test]
    fn timestamp_rfc3339_parses_back(secs in 0u64..4_102_444_800) {
        let ts = Timestamp::new(secs);
        let rendered = ts.to_rfc3339();
        let parsed = chrono::DateTime::parse_from_rfc3339(&rendered).unwrap();
        prop_assert_eq!(parsed.timestamp() as u64, secs);
    }
}
