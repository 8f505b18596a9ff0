use crate::NanWidth;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("CBOR error ({0})")]
    Cbor(#[from] dcbor::Error),

    #[error("invalid NaN length: expected 2, 4, or 8 bytes, got {0} bytes")]
    InvalidLength(usize),

    #[error("payload magnitude 0 is reserved for the runtime's own NaN")]
    ReservedPayload,

    #[error("payload magnitude {magnitude} exceeds the {width} capacity of {capacity}")]
    PayloadTooLarge {
        magnitude: u64,
        capacity: u64,
        width: NanWidth,
    },

    #[error("not a quiet NaN: {value} ({width} bits 0x{bits})")]
    NotAQuietNan {
        value: f64,
        width: NanWidth,
        bits: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for String {
    fn from(err: Error) -> Self { err.to_string() }
}

impl From<Error> for dcbor::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Cbor(err) => err,
            _ => dcbor::Error::msg(err),
        }
    }
}
