// Decoder / reencoder tests against the canonical fixtures:
//
// * `decode`
// * `decode_optimized`
// * `decode_shared`
// * `reencode`

#[cfg(test)]
mod tests {
    use abi_split_core::{
        constants::EMPTY_PAIR_LEN,
        dual::{decode, decode_optimized, decode_shared, encoded_len, reencode, DualArray},
        segment::Segment,
        types::{AbiError, ErrorKind},
    };
    use bytes::Bytes;

    const SINGLE_BYTE_PAIR: &str = concat!(
        "0000000000000000000000000000000000000000000000000000000000000040",
        "0000000000000000000000000000000000000000000000000000000000000080",
        "0000000000000000000000000000000000000000000000000000000000000001",
        "3100000000000000000000000000000000000000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000001",
        "3200000000000000000000000000000000000000000000000000000000000000",
    );

    fn fixture() -> Vec<u8> {
        hex::decode(SINGLE_BYTE_PAIR).unwrap()
    }

    fn word(v: u64) -> [u8; 32] {
        let mut w = [0u8; 32];
        w[24..].copy_from_slice(&v.to_be_bytes());
        w
    }

// # ✅ 1. Fixture decodes to (0x31, 0x32)

    #[test]
    fn fixture_decodes() {
        let buf = fixture();
        assert_eq!(decode(&buf).unwrap(), DualArray::new(&[0x31], &[0x32]));
        assert_eq!(decode_optimized(&buf).unwrap(), DualArray::new(&[0x31], &[0x32]));
    }

// # ✅ 2. Reencode reproduces the fixture byte for byte

    #[test]
    fn fixture_reencodes() {
        assert_eq!(reencode(&[0x31], &[0x32]), fixture());
        assert_eq!(encoded_len(1, 1), fixture().len());
    }

// # ✅ 3. Empty buffer is two empty arrays

    #[test]
    fn empty_buffer_is_empty_pair() {
        assert_eq!(decode(&[]).unwrap(), DualArray::EMPTY);
        assert_eq!(decode_optimized(&[]).unwrap(), DualArray::EMPTY);
    }

// # ✅ 4. Both empty encodes to header + two zero lengths

    #[test]
    fn empty_pair_encoding() {
        let out = reencode(&[], &[]);
        assert_eq!(out.len(), EMPTY_PAIR_LEN);

        let mut expected = Vec::new();
        expected.extend_from_slice(&word(0x40));
        expected.extend_from_slice(&word(0x60));
        expected.extend_from_slice(&word(0));
        expected.extend_from_slice(&word(0));
        assert_eq!(out, expected);

        assert_eq!(decode(&out).unwrap(), DualArray::EMPTY);
    }

// # ✅ 5. Round trip across sizes, including word boundaries

    #[test]
    fn roundtrip_sizes() {
        for (la, lb) in [(0, 1), (1, 0), (31, 32), (32, 33), (64, 0), (1000, 7)] {
            let a: Vec<u8> = (0..la).map(|i| i as u8).collect();
            let b: Vec<u8> = (0..lb).map(|i| (i * 3) as u8).collect();
            let wire = reencode(&a, &b);

            assert_eq!(wire.len(), encoded_len(la, lb));
            assert_eq!(wire.len() % 32, 0);
            assert_eq!(decode(&wire).unwrap(), DualArray::new(&a, &b));
            assert_eq!(decode_optimized(&wire).unwrap(), DualArray::new(&a, &b));
        }
    }

// # ❌ 6. Any truncation before B's end is malformed

    #[test]
    fn truncated_fixture_is_malformed() {
        let buf = fixture();
        // B's content ends at 0xa1
        for len in 1..0xa1 {
            let err = decode(&buf[..len]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedInput, "len {}", len);
            let err = decode_optimized(&buf[..len]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedInput, "len {}", len);
        }
        for len in 0xa1..=buf.len() {
            assert_eq!(decode(&buf[..len]).unwrap(), DualArray::new(&[0x31], &[0x32]));
        }
    }

// # ✅ 7. Non-canonical but valid layout: general accepts, optimized refuses

    #[test]
    fn swapped_segments() {
        // B (empty) first at 0x40, A at 0x60
        let mut buf = Vec::new();
        buf.extend_from_slice(&word(0x60));
        buf.extend_from_slice(&word(0x40));
        buf.extend_from_slice(&word(0));
        buf.extend_from_slice(&word(1));
        buf.extend_from_slice(&[0x31; 32]);

        assert_eq!(decode(&buf).unwrap(), DualArray::new(&[0x31], &[]));
        assert_eq!(
            decode_optimized(&buf),
            Err(AbiError::UnsupportedShape { expected: 0x40, found: 0x60 })
        );
    }

// # ✅ 8. Both offsets may share one segment

    #[test]
    fn aliased_offsets() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&word(0x40));
        buf.extend_from_slice(&word(0x40));
        buf.extend_from_slice(&word(2));
        buf.extend_from_slice(b"hi");

        assert_eq!(decode(&buf).unwrap(), DualArray::new(b"hi", b"hi"));
        // optimized expects B after A's padded content
        assert!(decode_optimized(&buf).unwrap_err().is_malformed());
    }

// # ✅ 9. Optimized path ignores a non-canonical slot B

    #[test]
    fn optimized_ignores_slot_b() {
        let mut buf = reencode(b"A", b"B");
        buf[32..64].copy_from_slice(&word(0x40));

        assert_eq!(decode(&buf).unwrap(), DualArray::new(b"A", b"A"));
        assert_eq!(decode_optimized(&buf).unwrap(), DualArray::new(b"A", b"B"));
    }

// # ✅ 10. Shared decode slices the input allocation

    #[test]
    fn shared_decode_is_zero_copy() {
        let buf = Bytes::from(fixture());
        let pair = decode_shared(&buf).unwrap();

        assert_eq!(&pair.a[..], &[0x31]);
        assert_eq!(&pair.b[..], &[0x32]);
        assert_eq!(pair.a.as_ptr(), buf[0x60..].as_ptr());
        assert_eq!(pair.b.as_ptr(), buf[0xa0..].as_ptr());
        assert_eq!(pair.as_view(), decode(&buf).unwrap());

        assert_eq!(decode_shared(&Bytes::new()).unwrap(), Default::default());
    }

// # ✅ 11. Owned copies and tags

    #[test]
    fn owned_copy_and_segments() {
        let buf = reencode(b"", b"meta");
        let pair = decode(&buf).unwrap();

        assert_eq!(pair.segments(), (Segment::Empty, Segment::NonEmpty(b"meta")));

        let owned = pair.to_owned_buf();
        drop(buf);
        assert_eq!(&owned.b[..], b"meta");
        assert!(owned.a.is_empty());
    }
}
