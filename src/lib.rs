//! Signed integer payloads carried inside IEEE‑754 quiet NaNs.
//!
//! A quiet NaN leaves every fraction bit below the quiet bit free. This crate
//! stores the magnitude of an application payload in those bits and its sign
//! in the sign bit of the NaN, for binary16 (`half::f16`), binary32 (`f32`)
//! and binary64 (`f64`):
//!
//! | width | payload bits | largest magnitude |
//! |-------|--------------|-------------------|
//! | 16    | 9            | 2⁹ − 1            |
//! | 32    | 22           | 2²² − 1           |
//! | 64    | 51           | 2⁵¹ − 1           |
//!
//! Magnitude 0 is never encoded: the two payload-less quiet NaNs
//! (`0x7FF8…` and `0xFFF8…` for binary64) are what the host produces for
//! indeterminate results such as `0.0 / 0.0`, and must stay distinguishable
//! from application payloads.
//!
//! ```
//! use nan_payload::{decode, encode, is_reserved_runtime_nan};
//!
//! let tagged: f64 = encode(-42).unwrap();
//! assert!(tagged.is_nan());
//! assert_eq!(tagged.to_bits(), 0xFFF8_0000_0000_002A);
//! assert_eq!(decode(tagged).unwrap(), -42);
//!
//! assert!(is_reserved_runtime_nan(f64::NAN));
//! assert!(decode(f64::NAN).is_err());
//! ```
//!
//! dCBOR canonicalizes every NaN it serializes, so [`NanBstr`] is provided to
//! move a payload-bearing NaN through CBOR as a tag‑102 byte string without
//! losing its bits.

mod nan_layout;
pub use nan_layout::*;
mod nan_width;
pub use nan_width::*;
mod classify;
pub use classify::*;
mod codec;
pub use codec::*;
mod nan_bstr;
pub use nan_bstr::*;
mod error;
pub use error::*;
