use crate::{
    Alphabet, AlphabetRegistry, DecodeError, PrintableStringConverter, decode, decoded_len,
    encode, encoded_len,
};

fn get_alphabet(name: &str) -> Alphabet {
    AlphabetRegistry::load_default().unwrap().build(name).unwrap()
}

/// Alphabet of `len` distinct code points starting at U+4E00.
fn cjk_alphabet(len: usize) -> Alphabet {
    let symbols: Vec<char> = (0x4E00u32..).filter_map(char::from_u32).take(len).collect();
    Alphabet::new(symbols).unwrap()
}

/// Deterministic filler so failures are reproducible.
fn pseudo_random_bytes(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 16) as u8
        })
        .collect()
}

const SAMPLE: [u8; 8] = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0];

#[test]
fn test_encode_decode_empty() {
    for name in ["ascii", "hex", "decimal", "unicode", "binary"] {
        let alphabet = get_alphabet(name);
        assert_eq!(encode(b"", &alphabet), "");
        assert_eq!(decode("", &alphabet).unwrap(), Vec::<u8>::new());
    }
}

#[test]
fn test_hex_scenario() {
    let hex = get_alphabet("hex");
    assert_eq!(encode(&SAMPLE, &hex), "123456789ABCDEF0");
    assert_eq!(decode("123456789ABCDEF0", &hex).unwrap(), SAMPLE);
}

#[test]
fn test_decimal_scenario() {
    let decimal = get_alphabet("decimal");
    let data = [0b0010_1001u8, 0b1100_1011, 0b1011_1000];
    assert_eq!(encode(&data, &decimal), "12345670");
    assert_eq!(decode("12345670", &decimal).unwrap(), data);
}

#[test]
fn test_ascii_scenario() {
    let ascii = get_alphabet("ascii");
    assert_eq!(encode(&SAMPLE, &ascii), "%D27?*K]XP!");
    assert_eq!(decode("%D27?*K]XP!", &ascii).unwrap(), SAMPLE);

    // The registry entry and the built-in default agree.
    let converter = PrintableStringConverter::new();
    assert_eq!(converter.to_printable_string(&SAMPLE), encode(&SAMPLE, &ascii));
}

#[test]
fn test_unicode_scenario() {
    let unicode = get_alphabet("unicode");
    assert_eq!(encode(&SAMPLE, &unicode), "1AB⚠⚡♨OMG⚒⚓⚔ZYX0");
    assert_eq!(decode("1AB⚠⚡♨OMG⚒⚓⚔ZYX0", &unicode).unwrap(), SAMPLE);
}

#[test]
fn test_base64_symbols_match_rfc4648_unpadded() {
    let base64 = get_alphabet("base64");
    let encoded = encode(b"Hello, World!", &base64);
    assert_eq!(encoded, "SGVsbG8sIFdvcmxkIQ");
    assert_eq!(decode(&encoded, &base64).unwrap(), b"Hello, World!");
}

#[test]
fn test_hangul_one_symbol_per_byte() {
    let hangul = get_alphabet("hangul");
    let data: Vec<u8> = (0..=255).collect();
    let encoded = encode(&data, &hangul);
    assert_eq!(encoded.chars().count(), 256);
    assert_eq!(encoded.chars().next(), Some('가'));
    assert_eq!(decode(&encoded, &hangul).unwrap(), data);
}

#[test]
fn test_length_laws_hold_for_many_sizes() {
    for size in [1usize, 2, 3, 5, 8, 10, 16, 31, 32, 33, 63, 64, 94, 127, 128, 255, 256, 1000] {
        let alphabet = cjk_alphabet(size);
        let k = alphabet.bit_width();

        for len in 0..40 {
            let data = pseudo_random_bytes(len, size as u32 + len as u32);
            let encoded = encode(&data, &alphabet);
            let symbols = encoded.chars().count();

            assert_eq!(symbols, encoded_len(len, k), "size {} len {}", size, len);
            let width = k.max(1) as usize;
            assert_eq!(symbols, (8 * len).div_ceil(width));

            let decoded = decode(&encoded, &alphabet).unwrap();
            assert_eq!(decoded.len(), decoded_len(symbols, k));
            assert_eq!(decoded.len(), width * symbols / 8);
        }
    }
}

#[test]
fn test_roundtrip_for_narrow_alphabets() {
    // Up to 8 bits per symbol the padding never reaches a whole byte, so the
    // input comes back exactly.
    for size in [2usize, 4, 8, 10, 16, 32, 64, 94, 128, 256] {
        let alphabet = cjk_alphabet(size);
        for len in 0..50 {
            let data = pseudo_random_bytes(len, len as u32 * 31 + size as u32);
            let encoded = encode(&data, &alphabet);
            assert_eq!(decode(&encoded, &alphabet).unwrap(), data, "size {} len {}", size, len);
        }
    }
}

#[test]
fn test_roundtrip_for_wide_alphabets_pads_with_zero_bytes() {
    // 16 bits per symbol: one byte needs one symbol, which decodes to two.
    let wide = cjk_alphabet(1 << 16);
    assert_eq!(wide.bit_width(), 16);

    let encoded = encode(&[0xAB], &wide);
    assert_eq!(encoded.chars().count(), 1);
    assert_eq!(decode(&encoded, &wide).unwrap(), vec![0xAB, 0x00]);

    let data = pseudo_random_bytes(64, 7);
    let encoded = encode(&data, &wide);
    assert_eq!(decode(&encoded, &wide).unwrap(), data);
}

#[test]
fn test_truncated_symbols_never_produced() {
    let decimal = get_alphabet("decimal");
    let data = pseudo_random_bytes(300, 99);
    let encoded = encode(&data, &decimal);
    assert!(!encoded.contains('8'));
    assert!(!encoded.contains('9'));
    assert!(encoded.chars().all(|c| ('0'..='7').contains(&c)));

    let ascii = get_alphabet("ascii");
    let encoded = encode(&data, &ascii);
    let cutoff = ascii.symbols()[63];
    assert!(encoded.chars().all(|c| c <= cutoff));
}

#[test]
fn test_truncated_symbols_rejected() {
    let ascii = get_alphabet("ascii");
    // '`' sits at index 63 and is the last usable symbol; 'a' is index 64.
    assert!(decode("``", &ascii).is_ok());
    let err = decode("``a", &ascii).unwrap_err();
    let DecodeError::UnknownSymbol {
        symbol, position, ..
    } = err;
    assert_eq!(symbol, 'a');
    assert_eq!(position, 2);
}

#[test]
fn test_degenerate_alphabet() {
    let unary = cjk_alphabet(1);
    let data = pseudo_random_bytes(5, 3);
    let encoded = encode(&data, &unary);
    assert_eq!(encoded, "一".repeat(40));
    assert_eq!(decode(&encoded, &unary).unwrap(), vec![0; 5]);

    // Degenerate decoding keeps whole groups of 8 only.
    let truncated: String = encoded.chars().take(19).collect();
    assert_eq!(decode(&truncated, &unary).unwrap(), vec![0, 0]);
}

#[test]
fn test_trailing_symbols_beyond_power_of_two_ignored() {
    // 3 symbols resolve to 2; 'c' is unreachable.
    let alphabet: Alphabet = "abc".parse().unwrap();
    assert_eq!(alphabet.bit_width(), 1);
    assert_eq!(encode(&[0b1010_0101], &alphabet), "babaabab");
    assert!(decode("c", &alphabet).is_err());
}

#[test]
fn test_decode_with_wrong_alphabet() {
    let hex = get_alphabet("hex");
    let lower = get_alphabet("hex_lower");
    let encoded = encode(&SAMPLE, &hex);
    assert!(decode(&encoded, &lower).is_err());
}
