use core::fmt;

use half::f16;

use crate::{Error, NanLayout, RawBits, Result};

/// Width of the IEEE‑754 interchange format a NaN pattern belongs to.
///
/// This is the run-time counterpart of [`NanLayout`]: the generic codec never
/// consults it, but byte-oriented code that only learns the width from a
/// length (such as [`NanBstr`](crate::NanBstr)) does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NanWidth {
    /// 2-octet IEEE‑754 binary16 (aka half, f16)
    Binary16,
    /// 4-octet IEEE‑754 binary32 (aka single, f32)
    Binary32,
    /// 8-octet IEEE‑754 binary64 (aka double, f64)
    Binary64,
}

#[allow(clippy::len_without_is_empty)]
impl NanWidth {
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            2 => Ok(Self::Binary16),
            4 => Ok(Self::Binary32),
            8 => Ok(Self::Binary64),
            _ => Err(Error::InvalidLength(len)),
        }
    }

    pub fn len(self) -> usize {
        match self {
            Self::Binary16 => 2,
            Self::Binary32 => 4,
            Self::Binary64 => 8,
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            Self::Binary16 => f16::TOTAL_BITS,
            Self::Binary32 => f32::TOTAL_BITS,
            Self::Binary64 => f64::TOTAL_BITS,
        }
    }

    /// Number of low-order bits available to an application payload.
    pub fn payload_bits(self) -> u32 {
        match self {
            Self::Binary16 => f16::PAYLOAD_BITS,
            Self::Binary32 => f32::PAYLOAD_BITS,
            Self::Binary64 => f64::PAYLOAD_BITS,
        }
    }

    /// Largest payload magnitude this width can carry.
    pub fn max_payload(self) -> u64 {
        match self {
            Self::Binary16 => f16::MAX_PAYLOAD,
            Self::Binary32 => f32::MAX_PAYLOAD,
            Self::Binary64 => f64::MAX_PAYLOAD,
        }
    }

    pub fn pos_qnan_base(self) -> u64 {
        match self {
            Self::Binary16 => f16::POS_QNAN_BASE.widen(),
            Self::Binary32 => f32::POS_QNAN_BASE.widen(),
            Self::Binary64 => f64::POS_QNAN_BASE.widen(),
        }
    }

    pub fn neg_qnan_base(self) -> u64 {
        match self {
            Self::Binary16 => f16::NEG_QNAN_BASE.widen(),
            Self::Binary32 => f32::NEG_QNAN_BASE.widen(),
            Self::Binary64 => f64::NEG_QNAN_BASE.widen(),
        }
    }

    /// Renders `bits` as big-endian hex, one byte per two digits, trimmed to
    /// this width.
    pub fn hex_bits(self, bits: u64) -> String {
        hex::encode(&bits.to_be_bytes()[8 - self.len()..])
    }
}

impl fmt::Display for NanWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "binary{}", self.bits())
    }
}
