use crate::NanLayout;

/// Where a bit pattern falls with respect to payload-carrying quiet NaNs.
///
/// Every bit pattern of a given width is in exactly one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NanClass {
    /// A number, an infinity, or a signaling NaN.
    NotQuietNan,
    /// One of the two payload-less quiet NaNs the host emits on its own.
    RuntimeNan,
    /// A quiet NaN with the sign bit clear and a non-zero payload.
    PositivePayload,
    /// A quiet NaN with the sign bit set and a non-zero payload.
    NegativePayload,
}

/// True for either payload-less quiet NaN, e.g. the result of `0.0 / 0.0`.
pub fn is_reserved_runtime_nan_bits<T: NanLayout>(bits: T::Bits) -> bool {
    bits == T::POS_QNAN_BASE || bits == T::NEG_QNAN_BASE
}

/// True for any quiet NaN of either sign, payload-bearing or not.
pub fn is_quiet_nan_bits<T: NanLayout>(bits: T::Bits) -> bool {
    bits & T::POS_QNAN_BASE == T::POS_QNAN_BASE
}

pub fn is_positive_quiet_nan_bits<T: NanLayout>(bits: T::Bits) -> bool {
    bits & T::NEG_QNAN_BASE == T::POS_QNAN_BASE
}

pub fn is_negative_quiet_nan_bits<T: NanLayout>(bits: T::Bits) -> bool {
    bits & T::NEG_QNAN_BASE == T::NEG_QNAN_BASE
}

pub fn classify_bits<T: NanLayout>(bits: T::Bits) -> NanClass {
    if is_reserved_runtime_nan_bits::<T>(bits) {
        NanClass::RuntimeNan
    } else if is_positive_quiet_nan_bits::<T>(bits) {
        NanClass::PositivePayload
    } else if is_negative_quiet_nan_bits::<T>(bits) {
        NanClass::NegativePayload
    } else {
        NanClass::NotQuietNan
    }
}

pub fn is_reserved_runtime_nan<T: NanLayout>(value: T) -> bool {
    is_reserved_runtime_nan_bits::<T>(value.to_raw())
}

pub fn is_quiet_nan<T: NanLayout>(value: T) -> bool {
    is_quiet_nan_bits::<T>(value.to_raw())
}

pub fn is_positive_quiet_nan<T: NanLayout>(value: T) -> bool {
    is_positive_quiet_nan_bits::<T>(value.to_raw())
}

pub fn is_negative_quiet_nan<T: NanLayout>(value: T) -> bool {
    is_negative_quiet_nan_bits::<T>(value.to_raw())
}

pub fn classify<T: NanLayout>(value: T) -> NanClass {
    classify_bits::<T>(value.to_raw())
}
