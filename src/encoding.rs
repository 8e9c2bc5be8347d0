use crate::alphabet::{SYMBOLS, VALUES};

/// Errors that can occur during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a byte that is not a base64 symbol
    InvalidSymbol,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::InvalidSymbol => write!(f, "invalid symbol in input"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Selects how a codec call extracts bits within each block.
///
/// "Packed" means word-level bit packing (a 24-bit accumulator per
/// block), not concurrent execution. The two encoders produce identical
/// output; the two decoders differ only in their failure contract (see
/// [`decode_sequential`] and [`decode_packed`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Extract each 6-bit group directly from the source bytes.
    Sequential,
    /// Assemble a 24-bit word per block, then extract all groups from it.
    Packed,
}

/// Number of symbols produced for `len` input bytes (`len % 3 == 0`).
pub const fn encoded_len(len: usize) -> usize {
    len / 3 * 4
}

/// Number of bytes produced for `len` input symbols (`len % 4 == 0`).
pub const fn decoded_len(len: usize) -> usize {
    len / 4 * 3
}

/// Encodes `input` into `output`, one 6-bit group at a time.
///
/// Processes strictly block by block: 3 input bytes become 4 output
/// symbols. No padding is appended.
///
/// # Panics
///
/// Panics if `input.len()` is not a multiple of 3 or `output.len()` is
/// not exactly `encoded_len(input.len())`.
pub fn encode_sequential(input: &[u8], output: &mut [u8]) {
    assert_eq!(input.len() % 3, 0, "input length must be a multiple of 3");
    assert_eq!(
        output.len(),
        encoded_len(input.len()),
        "output must hold 4 symbols per 3-byte block"
    );

    for (block, out) in input.chunks_exact(3).zip(output.chunks_exact_mut(4)) {
        out[0] = SYMBOLS[(block[0] >> 2) as usize];
        out[1] = SYMBOLS[((block[0] << 4 | block[1] >> 4) & 0x3F) as usize];
        out[2] = SYMBOLS[((block[1] << 2 | block[2] >> 6) & 0x3F) as usize];
        out[3] = SYMBOLS[(block[2] & 0x3F) as usize];
    }
}

/// Encodes `input` into `output` via a 24-bit accumulator per block.
///
/// Byte-identical to [`encode_sequential`]; the accumulator trades a
/// little extra arithmetic for fewer dependent loads.
///
/// # Panics
///
/// Same length contract as [`encode_sequential`].
pub fn encode_packed(input: &[u8], output: &mut [u8]) {
    assert_eq!(input.len() % 3, 0, "input length must be a multiple of 3");
    assert_eq!(
        output.len(),
        encoded_len(input.len()),
        "output must hold 4 symbols per 3-byte block"
    );

    for (block, out) in input.chunks_exact(3).zip(output.chunks_exact_mut(4)) {
        let word = (block[0] as u32) << 16 | (block[1] as u32) << 8 | block[2] as u32;
        out[0] = SYMBOLS[(word >> 18) as usize];
        out[1] = SYMBOLS[(word >> 12 & 0x3F) as usize];
        out[2] = SYMBOLS[(word >> 6 & 0x3F) as usize];
        out[3] = SYMBOLS[(word & 0x3F) as usize];
    }
}

/// Decodes `input` into `output`, validating symbols just in time.
///
/// Within each block the order is: validate symbols 0 and 1, write
/// byte 0, validate symbol 2, write byte 1, validate symbol 3, write
/// byte 2. A failing block may therefore have some of its output bytes
/// already written when the error is returned — callers must not read
/// the failing block's slot. Earlier blocks stay written; the call
/// returns at the first invalid block without scanning further.
///
/// # Panics
///
/// Panics if `input.len()` is not a multiple of 4 or `output.len()` is
/// not exactly `decoded_len(input.len())`.
pub fn decode_sequential(input: &[u8], output: &mut [u8]) -> Result<(), DecodeError> {
    assert_eq!(input.len() % 4, 0, "input length must be a multiple of 4");
    assert_eq!(
        output.len(),
        decoded_len(input.len()),
        "output must hold 3 bytes per 4-symbol block"
    );

    for (block, out) in input.chunks_exact(4).zip(output.chunks_exact_mut(3)) {
        let a = VALUES[block[0] as usize];
        let b = VALUES[block[1] as usize];
        if a >= 64 || b >= 64 {
            return Err(DecodeError::InvalidSymbol);
        }
        out[0] = a << 2 | b >> 4;

        let c = VALUES[block[2] as usize];
        if c >= 64 {
            return Err(DecodeError::InvalidSymbol);
        }
        out[1] = b << 4 | c >> 2;

        let d = VALUES[block[3] as usize];
        if d >= 64 {
            return Err(DecodeError::InvalidSymbol);
        }
        out[2] = c << 6 | d;
    }
    Ok(())
}

/// Decodes `input` into `output`, validating each block atomically.
///
/// All four symbols of a block are checked before any of its bytes is
/// written: valid values fit in 6 bits, so ORing the four lookups and
/// testing against 0xC0 catches any sentinel in one comparison. On
/// failure the failing block's output slot is left untouched; earlier
/// blocks stay written and the call returns immediately. This is a
/// stronger atomicity guarantee than [`decode_sequential`].
///
/// # Panics
///
/// Same length contract as [`decode_sequential`].
pub fn decode_packed(input: &[u8], output: &mut [u8]) -> Result<(), DecodeError> {
    assert_eq!(input.len() % 4, 0, "input length must be a multiple of 4");
    assert_eq!(
        output.len(),
        decoded_len(input.len()),
        "output must hold 3 bytes per 4-symbol block"
    );

    for (block, out) in input.chunks_exact(4).zip(output.chunks_exact_mut(3)) {
        let a = VALUES[block[0] as usize];
        let b = VALUES[block[1] as usize];
        let c = VALUES[block[2] as usize];
        let d = VALUES[block[3] as usize];
        if (a | b | c | d) & 0xC0 != 0 {
            return Err(DecodeError::InvalidSymbol);
        }
        let word = (a as u32) << 18 | (b as u32) << 12 | (c as u32) << 6 | d as u32;
        out[0] = (word >> 16) as u8;
        out[1] = (word >> 8) as u8;
        out[2] = word as u8;
    }
    Ok(())
}
