use core::{
    fmt,
    ops::{BitAnd, BitOr, Not},
};

use half::f16;

use crate::NanWidth;

/// An unsigned integer exactly as wide as one of the supported float formats.
pub trait RawBits:
    Copy
    + Eq
    + fmt::Debug
    + fmt::LowerHex
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
{
    /// Zero-extends to 64 bits.
    fn widen(self) -> u64;

    /// Keeps the low-order bits of `bits` that fit this width.
    fn truncate(bits: u64) -> Self;
}

macro_rules! impl_raw_bits {
    ($($ty:ty),*) => {
        $(
            impl RawBits for $ty {
                #[inline]
                fn widen(self) -> u64 { self as u64 }

                #[inline]
                fn truncate(bits: u64) -> Self { bits as $ty }
            }
        )*
    };
}

impl_raw_bits!(u16, u32, u64);

/// Quiet-NaN bit layout of one IEEE‑754 interchange format.
///
/// ```text
///  sign | exponent (all ones) | quiet | payload
///   1   |  5 / 8 / 11         |   1   | 9 / 22 / 51
/// ```
///
/// `POS_QNAN_BASE` and `NEG_QNAN_BASE` are both layout masks and the two
/// payload-less quiet NaNs the host itself produces for indeterminate
/// results. `PAYLOAD_BITS` is also the bit index of the quiet bit.
pub trait NanLayout: Copy {
    type Bits: RawBits;

    const WIDTH: NanWidth;
    const TOTAL_BITS: u32;
    const PAYLOAD_BITS: u32;
    /// Sign 0, exponent all ones, quiet bit 1, payload 0.
    const POS_QNAN_BASE: Self::Bits;
    /// `POS_QNAN_BASE` with the sign bit set.
    const NEG_QNAN_BASE: Self::Bits;
    const MAX_PAYLOAD: u64 = (1u64 << Self::PAYLOAD_BITS) - 1;

    /// Bit-exact reinterpretation; never canonicalizes a NaN.
    fn to_raw(self) -> Self::Bits;

    /// Bit-exact reinterpretation; never canonicalizes a NaN.
    fn from_raw(bits: Self::Bits) -> Self;

    /// Numeric value widened to `f64`, for diagnostics only.
    fn to_f64(self) -> f64;
}

impl NanLayout for f16 {
    type Bits = u16;

    const WIDTH: NanWidth = NanWidth::Binary16;
    const TOTAL_BITS: u32 = 16;
    const PAYLOAD_BITS: u32 = 9;
    const POS_QNAN_BASE: u16 = 0x7E00;
    const NEG_QNAN_BASE: u16 = 0xFE00;

    #[inline]
    fn to_raw(self) -> u16 { self.to_bits() }

    #[inline]
    fn from_raw(bits: u16) -> Self { f16::from_bits(bits) }

    fn to_f64(self) -> f64 { f64::from(self) }
}

impl NanLayout for f32 {
    type Bits = u32;

    const WIDTH: NanWidth = NanWidth::Binary32;
    const TOTAL_BITS: u32 = 32;
    const PAYLOAD_BITS: u32 = 22;
    const POS_QNAN_BASE: u32 = 0x7FC0_0000;
    const NEG_QNAN_BASE: u32 = 0xFFC0_0000;

    #[inline]
    fn to_raw(self) -> u32 { self.to_bits() }

    #[inline]
    fn from_raw(bits: u32) -> Self { f32::from_bits(bits) }

    fn to_f64(self) -> f64 { self as f64 }
}

impl NanLayout for f64 {
    type Bits = u64;

    const WIDTH: NanWidth = NanWidth::Binary64;
    const TOTAL_BITS: u32 = 64;
    const PAYLOAD_BITS: u32 = 51;
    const POS_QNAN_BASE: u64 = 0x7FF8_0000_0000_0000;
    const NEG_QNAN_BASE: u64 = 0xFFF8_0000_0000_0000;

    #[inline]
    fn to_raw(self) -> u64 { self.to_bits() }

    #[inline]
    fn from_raw(bits: u64) -> Self { f64::from_bits(bits) }

    fn to_f64(self) -> f64 { self }
}
