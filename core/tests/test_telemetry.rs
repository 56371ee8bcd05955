#[cfg(test)]
mod tests {
    use abi_split_core::{
        entry_points::{from_packed, from_separate_with_empty_skip},
        dual::reencode,
        sink::MemorySink,
        telemetry::{CostCounters, CostSnapshot},
    };

    #[test]
    fn snapshot_reflects_counters() {
        let packed = reencode(b"abc", b"");
        let mut sink = MemorySink::new();
        let cost = from_packed(&packed, &mut sink).unwrap();
        let snap = CostSnapshot::from_counters(&cost);

        assert_eq!(snap.words_read, 4);
        assert_eq!(snap.words_written, 4);
        assert_eq!(snap.bytes_viewed, 3);
        assert_eq!(snap.bytes_copied, 3);
        assert_eq!(snap.padding_bytes, 29);
        assert!((snap.padding_ratio - 29.0 / 32.0).abs() < 1e-9);
        assert!(snap.sanity_check());
    }

    #[test]
    fn empty_call_has_zero_ratio() {
        let mut sink = MemorySink::new();
        let cost = from_separate_with_empty_skip(b"", b"", &mut sink);
        let snap: CostSnapshot = cost.into();

        assert_eq!(snap.padding_ratio, 0.0);
        assert_eq!(snap.segments_skipped, 2);
    }

    #[test]
    fn conversions_agree() {
        let cost = CostCounters {
            words_read: 2,
            bytes_copied: 5,
            padding_bytes: 27,
            ..Default::default()
        };
        let by_ref: CostSnapshot = (&cost).into();
        let by_value: CostSnapshot = cost.into();

        assert_eq!(by_ref, CostSnapshot::from_counters(&cost));
        assert_eq!(by_value, by_ref);
    }

    #[test]
    fn snapshot_json_roundtrip() {
        let cost = CostCounters { words_read: 3, words_written: 4, ..Default::default() };
        let snap = CostSnapshot::from_counters(&cost);

        let json = snap.to_json().unwrap();
        assert!(json.contains("\"words_read\":3"));

        let back: CostSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn merged_counters_across_calls() {
        let mut sink = MemorySink::new();
        let mut total = CostCounters::default();
        total += from_separate_with_empty_skip(b"x", b"", &mut sink);
        total += from_separate_with_empty_skip(b"", b"y", &mut sink);

        assert_eq!(total.words_written, 8);
        assert_eq!(total.segments_skipped, 2);
        assert_eq!(total.bytes_copied, 2);
    }
}
