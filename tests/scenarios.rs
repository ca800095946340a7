//! Public API scenarios: registry, converter, free functions and streaming
//! used together the way a downstream crate would.

use printable_string::prelude::*;
use printable_string::{AlphabetConfig, PrintableAscii, decoded_len, encoded_len};
use std::io::Cursor;

const SAMPLE: [u8; 8] = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0];

#[test]
fn test_converter_with_registry_alphabet() {
    let registry = AlphabetRegistry::load_default().unwrap();
    let converter = PrintableStringConverter::with_alphabet(registry.build("hex").unwrap());

    let text = converter.to_printable_string(&SAMPLE);
    assert_eq!(text, "123456789ABCDEF0");
    assert_eq!(converter.from_printable_string(&text).unwrap(), SAMPLE);
}

#[test]
fn test_closure_and_struct_providers_agree() {
    let from_struct = PrintableStringConverter::from_provider(&PrintableAscii).unwrap();
    let closure = || printable_string::ASCII_PRINTABLE.chars().collect::<Vec<char>>();
    let from_closure = PrintableStringConverter::from_provider(&closure).unwrap();

    assert_eq!(
        from_struct.to_printable_string(&SAMPLE),
        from_closure.to_printable_string(&SAMPLE)
    );
    assert_eq!(from_struct.to_printable_string(&SAMPLE), "%D27?*K]XP!");
}

#[test]
fn test_free_functions_take_explicit_width() {
    let symbols: Vec<char> = "0123456789ABCDEF".chars().collect();
    assert_eq!(to_printable_string(&SAMPLE, &symbols, 4).unwrap(), "123456789ABCDEF0");

    // A narrower width than the alphabet supports is allowed.
    let binary = to_printable_string(&[0xA5], &symbols, 1).unwrap();
    assert_eq!(binary, "10100101");
    assert_eq!(from_printable_string(&binary, &symbols, 1).unwrap(), vec![0xA5]);

    // 2^5 symbols are not available.
    assert!(matches!(
        to_printable_string(&SAMPLE, &symbols, 5),
        Err(ConfigError::BitWidthOutOfRange { bit_width: 5, available: 16 })
    ));
    assert!(from_printable_string("12", &symbols, 5).is_err());
}

#[test]
fn test_length_helpers_match_output() {
    let registry = AlphabetRegistry::load_default().unwrap();
    for name in registry.names() {
        let alphabet = registry.build(&name).unwrap();
        let k = alphabet.bit_width();
        let encoded = encode(&SAMPLE, &alphabet);
        assert_eq!(encoded.chars().count(), encoded_len(SAMPLE.len(), k), "{}", name);
        assert_eq!(
            decode(&encoded, &alphabet).unwrap().len(),
            decoded_len(encoded_len(SAMPLE.len(), k), k),
            "{}",
            name
        );
    }
}

#[test]
fn test_registry_merge_overrides_alphabet() {
    let mut registry = AlphabetRegistry::load_default().unwrap();
    let custom = AlphabetRegistry::from_toml(
        r#"
[settings]
default_alphabet = "hex"

[alphabets.hex]
chars = "zyxwvutsrqponmlk"
"#,
    )
    .unwrap();
    registry.merge(custom);

    assert_eq!(registry.default_name(), "hex");
    assert_eq!(registry.get("hex"), Some(&AlphabetConfig::from_chars("zyxwvutsrqponmlk")));
    let hex = registry.build("hex").unwrap();
    assert_eq!(encode(&[0x01], &hex), "zy");
}

#[test]
fn test_unknown_alphabet_error() {
    let registry = AlphabetRegistry::load_default().unwrap();
    match registry.build("decimel") {
        Err(Error::NotFound(e)) => {
            assert_eq!(e.name, "decimel");
            assert_eq!(e.suggestion.as_deref(), Some("decimal"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_streaming_roundtrip_through_api() {
    let registry = AlphabetRegistry::load_default().unwrap();
    let alphabet = registry.build("decimal").unwrap();
    // 3 bytes per 8 symbols, so a multiple of 3 comes back exactly.
    let data: Vec<u8> = (0..3 * 5000).map(|i| (i * 13 % 256) as u8).collect();

    let mut encoded = Vec::new();
    let symbols = StreamingEncoder::new(&alphabet, &mut encoded)
        .encode(&mut Cursor::new(&data))
        .unwrap();
    assert_eq!(symbols, encoded_len(data.len(), 3));

    let mut decoded = Vec::new();
    let bytes = StreamingDecoder::new(&alphabet, &mut decoded)
        .decode(&mut Cursor::new(&encoded))
        .unwrap();
    assert_eq!(bytes, data.len());
    assert_eq!(decoded, data);
}
