//! Block-exact base64 codec.
//!
//! Converts byte buffers whose length is an exact multiple of 3 into
//! base64 symbols (4 per block) and symbol buffers whose length is an
//! exact multiple of 4 back into bytes. There is no padding handling,
//! no whitespace tolerance, and no streaming: callers that deal with
//! arbitrary-length input are responsible for chunking and for the
//! final short block.
//!
//! Each direction comes in two strategies, selectable by name
//! ([`encode_sequential`], [`encode_packed`], [`decode_sequential`],
//! [`decode_packed`]) or through [`Strategy`] and the [`encode`] /
//! [`decode`] entry points. The encoders are byte-identical; the
//! decoders differ only in how much of a failing block's output slot
//! they may have written (see the per-function docs).

mod alphabet;
mod convenience;
mod encoding;

pub use convenience::{decode_to_vec, encode_to_string};
pub use encoding::{
    DecodeError, Strategy, decode_packed, decode_sequential, decoded_len, encode_packed,
    encode_sequential, encoded_len,
};

/// Encodes `input` into `output` with the given strategy.
///
/// # Panics
///
/// Panics if `input.len()` is not a multiple of 3 or `output.len()` is
/// not exactly `encoded_len(input.len())`.
pub fn encode(input: &[u8], output: &mut [u8], strategy: Strategy) {
    match strategy {
        Strategy::Sequential => encoding::encode_sequential(input, output),
        Strategy::Packed => encoding::encode_packed(input, output),
    }
}

/// Decodes `input` into `output` with the given strategy.
///
/// # Panics
///
/// Panics if `input.len()` is not a multiple of 4 or `output.len()` is
/// not exactly `decoded_len(input.len())`.
pub fn decode(input: &[u8], output: &mut [u8], strategy: Strategy) -> Result<(), DecodeError> {
    match strategy {
        Strategy::Sequential => encoding::decode_sequential(input, output),
        Strategy::Packed => encoding::decode_packed(input, output),
    }
}
