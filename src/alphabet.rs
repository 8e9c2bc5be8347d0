/// The standard base64 alphabet: `A-Z`, `a-z`, `0-9`, `+`, `/`.
///
/// Index i is the canonical symbol for 6-bit value i.
pub(crate) const SYMBOLS: [u8; 64] =
    *b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Reverse-lookup result for bytes that are not base64 symbols.
///
/// The value is load-bearing twice over: it is greater than 63, so a
/// single `>= 64` comparison rejects it, and `99 & 0xC0 != 0`, so the
/// packed decoder can OR four lookups together and test the whole block
/// against the 0xC0 mask in one go. A replacement sentinel must keep
/// both properties.
pub(crate) const INVALID: u8 = 99;

/// Maps every byte to its 6-bit value, or [`INVALID`] for bytes outside
/// the alphabet.
pub(crate) const VALUES: [u8; 256] = build_values();

const fn build_values() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < SYMBOLS.len() {
        table[SYMBOLS[i] as usize] = i as u8;
        i += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_distinct() {
        let mut seen = [false; 256];
        for &s in &SYMBOLS {
            assert!(!seen[s as usize], "duplicate symbol {}", s as char);
            seen[s as usize] = true;
        }
    }

    #[test]
    fn test_values_inverts_symbols() {
        for (i, &s) in SYMBOLS.iter().enumerate() {
            assert_eq!(VALUES[s as usize], i as u8);
        }
    }

    #[test]
    fn test_non_alphabet_bytes_map_to_sentinel() {
        for b in 0..=255u8 {
            if !SYMBOLS.contains(&b) {
                assert_eq!(VALUES[b as usize], INVALID, "byte 0x{:02X}", b);
            }
        }
    }

    #[test]
    fn test_sentinel_fails_both_validation_styles() {
        assert!(INVALID >= 64);
        assert_ne!(INVALID & 0xC0, 0);
    }

    #[test]
    fn test_table_edges() {
        assert_eq!(VALUES[b'A' as usize], 0);
        assert_eq!(VALUES[b'Z' as usize], 25);
        assert_eq!(VALUES[b'a' as usize], 26);
        assert_eq!(VALUES[b'z' as usize], 51);
        assert_eq!(VALUES[b'0' as usize], 52);
        assert_eq!(VALUES[b'9' as usize], 61);
        assert_eq!(VALUES[b'+' as usize], 62);
        assert_eq!(VALUES[b'/' as usize], 63);
        // Padding is not part of the alphabet here.
        assert_eq!(VALUES[b'=' as usize], INVALID);
        assert_eq!(VALUES[b' ' as usize], INVALID);
    }
}
