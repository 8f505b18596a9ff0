use crate::{
    Error, NanLayout, RawBits, Result, is_negative_quiet_nan_bits,
    is_quiet_nan_bits, is_reserved_runtime_nan_bits,
};

/// Encodes `payload` as a quiet NaN of width `T`.
///
/// The magnitude goes into the payload bits and the sign into the sign bit,
/// so `encode::<f64>(-1)` is `0xFFF8_0000_0000_0001`.
///
/// Fails with [`Error::ReservedPayload`] for `0`, and with
/// [`Error::PayloadTooLarge`] when the magnitude exceeds
/// [`NanLayout::MAX_PAYLOAD`].
pub fn encode<T: NanLayout>(payload: i64) -> Result<T> {
    let magnitude = payload.unsigned_abs();
    if magnitude == 0 {
        return Err(Error::ReservedPayload);
    }
    if magnitude > T::MAX_PAYLOAD {
        return Err(Error::PayloadTooLarge {
            magnitude,
            capacity: T::MAX_PAYLOAD,
            width: T::WIDTH,
        });
    }
    let base = if payload >= 0 {
        T::POS_QNAN_BASE
    } else {
        T::NEG_QNAN_BASE
    };
    Ok(T::from_raw(base | T::Bits::truncate(magnitude)))
}

/// Recovers the payload [`encode`] stored in `value`.
///
/// Fails with [`Error::NotAQuietNan`] unless `value` is a quiet NaN, and with
/// [`Error::ReservedPayload`] for the payload-less NaNs the host produces
/// itself, so a successful result is always a payload `encode` accepts.
pub fn decode<T: NanLayout>(value: T) -> Result<i64> {
    let bits = value.to_raw();
    if !is_quiet_nan_bits::<T>(bits) {
        return Err(Error::NotAQuietNan {
            value: value.to_f64(),
            width: T::WIDTH,
            bits: T::WIDTH.hex_bits(bits.widen()),
        });
    }
    if is_reserved_runtime_nan_bits::<T>(bits) {
        return Err(Error::ReservedPayload);
    }
    // At most 51 bits, so the cast is lossless.
    let magnitude = (bits & !T::NEG_QNAN_BASE).widen() as i64;
    if is_negative_quiet_nan_bits::<T>(bits) {
        Ok(-magnitude)
    } else {
        Ok(magnitude)
    }
}
