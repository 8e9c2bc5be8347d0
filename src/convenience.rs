//! Allocating wrappers over the slice-based codec routines.

use crate::encoding::{DecodeError, Strategy, decoded_len, encoded_len};

/// Encodes `data` into a freshly allocated `String`.
///
/// # Panics
///
/// Panics if `data.len()` is not a multiple of 3.
///
/// # Example
/// ```
/// use base64_block::{Strategy, encode_to_string};
///
/// let encoded = encode_to_string(b"Man", Strategy::Packed);
/// assert_eq!(encoded, "TWFu");
/// ```
pub fn encode_to_string(data: &[u8], strategy: Strategy) -> String {
    let mut output = vec![0u8; encoded_len(data.len())];
    crate::encode(data, &mut output, strategy);
    // The alphabet is ASCII.
    String::from_utf8(output).expect("base64 symbols are ASCII")
}

/// Decodes `encoded` into a freshly allocated `Vec<u8>`.
///
/// # Panics
///
/// Panics if `encoded.len()` is not a multiple of 4.
///
/// # Example
/// ```
/// use base64_block::{Strategy, decode_to_vec};
///
/// let decoded = decode_to_vec(b"TWFu", Strategy::Sequential).unwrap();
/// assert_eq!(decoded, b"Man");
/// ```
pub fn decode_to_vec(encoded: &[u8], strategy: Strategy) -> Result<Vec<u8>, DecodeError> {
    let mut output = vec![0u8; decoded_len(encoded.len())];
    crate::decode(encoded, &mut output, strategy)?;
    Ok(output)
}
