use core::fmt;

use dcbor::prelude::*;
use half::f16;

use crate::{Error, NanLayout, NanWidth, RawBits, Result, decode, encode};

/// A payload-carrying quiet NaN transported as a byte string under CBOR tag
/// 102 ("nan-bstr").
///
/// dCBOR reduces every NaN to `0x7E00` when it serializes a float, which
/// would erase the payload. Here the exact bit pattern travels big‑endian in
/// a 2, 4, or 8 byte string instead, and is validated on construction and
/// when decoding from CBOR.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NanBstr {
    width: NanWidth,
    bytes: ByteString,
}

impl NanBstr {
    // ───────────────────────────── Constructors ─────────────────────────────

    /// Construct from a big‑endian byte slice (length 2, 4, or 8).
    /// The bit pattern must be a quiet NaN that carries a payload.
    pub fn from_be_bytes(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let b = bytes.as_ref();
        let width = NanWidth::from_len(b.len())?;
        let bits = b.iter().fold(0u64, |acc, &byte| (acc << 8) | byte as u64);
        match width {
            NanWidth::Binary16 => check_bits::<f16>(bits)?,
            NanWidth::Binary32 => check_bits::<f32>(bits)?,
            NanWidth::Binary64 => check_bits::<f64>(bits)?,
        }
        Ok(Self { width, bytes: ByteString::from(b) })
    }

    /// Construct from a float that already carries a payload.
    pub fn from_float<T: NanLayout>(value: T) -> Result<Self> {
        let bits = value.to_raw().widen();
        Self::from_be_bytes(&bits.to_be_bytes()[8 - T::WIDTH.len()..])
    }

    /// Encode `payload` at width `T` and wrap the result.
    pub fn encode<T: NanLayout>(payload: i64) -> Result<Self> {
        Self::from_float(encode::<T>(payload)?)
    }

    // ───────────────────────────── Accessors ────────────────────────────────

    pub fn width(&self) -> NanWidth { self.width }

    /// Returns the raw bytes in big‑endian order.
    pub fn as_bytes(&self) -> &[u8] { self.bytes.data() }

    /// Returns the bit pattern, zero-extended to 64 bits.
    pub fn bits(&self) -> u64 {
        self.as_bytes()
            .iter()
            .fold(0u64, |acc, &byte| (acc << 8) | byte as u64)
    }

    /// Returns the sign bit (true if set), which is also the payload's sign.
    pub fn sign(&self) -> bool {
        (self.bits() >> (self.width.bits() - 1)) & 1 == 1
    }

    /// Returns the signed payload. Never zero.
    pub fn payload(&self) -> i64 {
        let magnitude = (self.bits() & !self.width.neg_qnan_base()) as i64;
        if self.sign() { -magnitude } else { magnitude }
    }

    /// Reinterpret as a float of width `T`; fails on a width mismatch.
    pub fn to_float<T: NanLayout>(&self) -> Result<T> {
        if self.width != T::WIDTH {
            return Err(Error::InvalidLength(self.bytes.len()));
        }
        Ok(T::from_raw(T::Bits::truncate(self.bits())))
    }
}

// ───────────────────────── CBOR Tagged Implementation ───────────────────────

impl CBORTagged for NanBstr {
    fn cbor_tags() -> Vec<Tag> {
        tags_for_values(&[bc_tags::TAG_NAN_BSTR])
    }
}

impl CBORTaggedEncodable for NanBstr {
    fn untagged_cbor(&self) -> CBOR {
        CBOR::from(self.bytes.clone())
    }
}

impl CBORTaggedDecodable for NanBstr {
    fn from_untagged_cbor(cbor: CBOR) -> dcbor::Result<Self> {
        let bs: ByteString =
            cbor.try_into().map_err(|_| dcbor::Error::WrongType)?;
        Ok(NanBstr::from_be_bytes(bs.data())?)
    }
}

impl From<NanBstr> for CBOR {
    fn from(value: NanBstr) -> Self {
        value.tagged_cbor()
    }
}

impl TryFrom<CBOR> for NanBstr {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(cbor)
    }
}

// ──────────────────────── Float Conversions ─────────────────────────────────

macro_rules! impl_float_conversions {
    ($($float:ty),*) => {
        $(
            impl TryFrom<$float> for NanBstr {
                type Error = Error;
                fn try_from(value: $float) -> Result<Self> {
                    Self::from_float(value)
                }
            }

            impl TryFrom<NanBstr> for $float {
                type Error = Error;
                fn try_from(value: NanBstr) -> Result<Self> {
                    value.to_float()
                }
            }
        )*
    };
}

impl_float_conversions!(f16, f32, f64);

// ───────────────────────────────── Display ──────────────────────────────────

impl fmt::Display for NanBstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NaN[{}]: payload={} bits={}",
            self.width.bits(),
            self.payload(),
            hex::encode(self.as_bytes()),
        )
    }
}

// ────────────────────────────── Internals ───────────────────────────────────

fn check_bits<T: NanLayout>(bits: u64) -> Result<()> {
    decode(T::from_raw(T::Bits::truncate(bits))).map(|_| ())
}
