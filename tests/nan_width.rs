use half::f16;
use nan_payload::{Error, NanLayout, NanWidth};

fn expected_pos_base<T: NanLayout>() -> u64 {
    let exponent_bits = T::TOTAL_BITS - T::PAYLOAD_BITS - 2;
    let exponent = ((1u64 << exponent_bits) - 1) << (T::PAYLOAD_BITS + 1);
    exponent | (1u64 << T::PAYLOAD_BITS)
}

#[test]
fn bases_match_ieee_layout() {
    assert_eq!(expected_pos_base::<f16>(), 0x7E00);
    assert_eq!(expected_pos_base::<f32>(), 0x7FC0_0000);
    assert_eq!(expected_pos_base::<f64>(), 0x7FF8_0000_0000_0000);

    for width in [NanWidth::Binary16, NanWidth::Binary32, NanWidth::Binary64] {
        let sign = 1u64 << (width.bits() - 1);
        assert_eq!(width.neg_qnan_base(), width.pos_qnan_base() | sign);
        assert_eq!(width.max_payload(), (1u64 << width.payload_bits()) - 1);
        assert_eq!(width.bits() as usize, width.len() * 8);
    }
}

#[test]
fn runtime_nans_match_layout() {
    assert_eq!(f64::NAN.to_bits(), f64::POS_QNAN_BASE);
    assert_eq!(f32::NAN.to_bits(), f32::POS_QNAN_BASE);
    assert_eq!(f16::NAN.to_bits(), f16::POS_QNAN_BASE);
}

#[test]
fn descriptor_agrees_with_layout() {
    assert_eq!(f16::WIDTH, NanWidth::Binary16);
    assert_eq!(NanWidth::Binary16.payload_bits(), 9);
    assert_eq!(NanWidth::Binary32.payload_bits(), 22);
    assert_eq!(NanWidth::Binary64.payload_bits(), 51);
    assert_eq!(NanWidth::Binary32.pos_qnan_base(), 0x7FC0_0000);
    assert_eq!(NanWidth::Binary16.neg_qnan_base(), 0xFE00);
    assert_eq!(f64::MAX_PAYLOAD, 0x7_FFFF_FFFF_FFFF);
}

#[test]
fn width_from_len() {
    assert_eq!(NanWidth::from_len(2).unwrap(), NanWidth::Binary16);
    assert_eq!(NanWidth::from_len(4).unwrap(), NanWidth::Binary32);
    assert_eq!(NanWidth::from_len(8).unwrap(), NanWidth::Binary64);
    assert!(matches!(NanWidth::from_len(16), Err(Error::InvalidLength(16))));
    assert!(matches!(NanWidth::from_len(0), Err(Error::InvalidLength(0))));
}

#[test]
fn width_display_and_hex() {
    assert_eq!(NanWidth::Binary32.to_string(), "binary32");
    assert_eq!(NanWidth::Binary16.hex_bits(0x7E01), "7e01");
    assert_eq!(NanWidth::Binary64.hex_bits(1), "0000000000000001");
}
