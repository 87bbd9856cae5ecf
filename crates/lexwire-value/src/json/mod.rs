//! JSON decode/encode for [`AnyValue`](crate::AnyValue).

pub mod decoder;
pub mod encoder;
pub mod error;

pub use decoder::{decode, decode_str};
pub use encoder::{encode, encode_pretty, encode_stable, JsonEncoder};
pub use error::ValueError;
