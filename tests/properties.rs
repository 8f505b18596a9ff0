use half::f16;
use nan_payload::{
    NanClass, NanLayout, classify_bits, decode, encode, is_negative_quiet_nan_bits,
    is_positive_quiet_nan_bits, is_quiet_nan_bits,
};
use proptest::prelude::*;

fn payload<T: NanLayout>() -> impl Strategy<Value = i64> {
    let max = T::MAX_PAYLOAD as i64;
    prop_oneof![1..=max, -max..=-1]
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 1_000, ..ProptestConfig::default() })]

    #[test]
    fn round_trip_double(p in payload::<f64>()) {
        let v: f64 = encode(p).unwrap();
        prop_assert!(v.is_nan());
        prop_assert_eq!(decode(v).unwrap(), p);
    }

    #[test]
    fn round_trip_single(p in payload::<f32>()) {
        let v: f32 = encode(p).unwrap();
        prop_assert!(v.is_nan());
        prop_assert_eq!(decode(v).unwrap(), p);
    }

    #[test]
    fn round_trip_half(p in payload::<f16>()) {
        let v: f16 = encode(p).unwrap();
        prop_assert!(v.is_nan());
        prop_assert_eq!(decode(v).unwrap(), p);
    }

    #[test]
    fn sign_follows_payload(p in payload::<f64>()) {
        let v: f64 = encode(p).unwrap();
        prop_assert_eq!(v.is_sign_negative(), p < 0);
    }

    #[test]
    fn oversized_payloads_fail(p in (1i64 << 22)..=i64::MAX, negate in any::<bool>()) {
        let p = if negate { -p } else { p };
        prop_assert!(encode::<f32>(p).is_err());
        prop_assert!(encode::<f16>(p).is_err());
    }

    #[test]
    fn double_predicates_agree(bits in any::<u64>()) {
        let quiet = is_quiet_nan_bits::<f64>(bits);
        let pos = is_positive_quiet_nan_bits::<f64>(bits);
        let neg = is_negative_quiet_nan_bits::<f64>(bits);
        prop_assert_eq!(quiet, pos || neg);
        prop_assert!(!(pos && neg));
        prop_assert_eq!(
            classify_bits::<f64>(bits) == NanClass::NotQuietNan,
            !quiet
        );
    }

    #[test]
    fn single_predicates_agree(bits in any::<u32>()) {
        let quiet = is_quiet_nan_bits::<f32>(bits);
        prop_assert_eq!(
            quiet,
            is_positive_quiet_nan_bits::<f32>(bits)
                || is_negative_quiet_nan_bits::<f32>(bits)
        );
        prop_assert_eq!(decode(f32::from_bits(bits)).is_ok(), matches!(
            classify_bits::<f32>(bits),
            NanClass::PositivePayload | NanClass::NegativePayload
        ));
    }

    #[test]
    fn quiet_nan_payloads_decode(payload_bits in 1u64..(1 << 51), sign in any::<bool>()) {
        let base = if sign { f64::NEG_QNAN_BASE } else { f64::POS_QNAN_BASE };
        let decoded = decode(f64::from_bits(base | payload_bits)).unwrap();
        prop_assert_eq!(decoded.unsigned_abs(), payload_bits);
        prop_assert_eq!(decoded < 0, sign);
    }
}
