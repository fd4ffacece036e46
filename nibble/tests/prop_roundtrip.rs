use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_roundtrip(codes in prop::collection::vec(0u8..=15, 0..1024)) {
        let packed = nibble::pack(&codes);
        prop_assert_eq!(packed.len(), nibble::packed_len(codes.len()));
        let unpacked = nibble::unpack(&packed, codes.len());
        prop_assert_eq!(unpacked, codes);
    }

    #[test]
    fn prop_odd_tail_padding_is_zero(codes in prop::collection::vec(0u8..=15, 1..1024)) {
        prop_assume!(codes.len() % 2 == 1);
        let packed = nibble::pack(&codes);
        prop_assert_eq!(packed.last().unwrap() & 0x0F, 0);
    }

    #[test]
    fn prop_unpack_never_exceeds_count(bytes in prop::collection::vec(any::<u8>(), 0..512), count in 0usize..2048) {
        let codes = nibble::unpack(&bytes, count);
        prop_assert!(codes.len() <= count);
        prop_assert!(codes.iter().all(|&c| c <= nibble::MAX_NIBBLE));
    }
}
