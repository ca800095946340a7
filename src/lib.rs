//! Reversible encoding of binary data into strings over any alphabet.
//!
//! An alphabet of `L` symbols is truncated to its largest power-of-two prefix
//! `2^k`, and the input is read as one MSB-first bitstream in `k`-bit groups.
//! Hex digits give `k = 4`, decimal digits give `k = 3` (only `0`-`7` are
//! used) and the printable ASCII default gives `k = 6`.
//!
//! ```
//! use printable_string::{Alphabet, decode, encode};
//!
//! let decimal: Alphabet = "0123456789".parse().unwrap();
//! let encoded = encode(&[0b0010_1001, 0b1100_1011, 0b1011_1000], &decimal);
//! assert_eq!(encoded, "12345670");
//! assert_eq!(decode(&encoded, &decimal).unwrap(), [0x29, 0xCB, 0xB8]);
//! ```

mod converter;
mod core;
mod encoders;
pub mod prelude;

pub use crate::converter::PrintableStringConverter;
pub use crate::core::alphabet::{
    ASCII_PRINTABLE, Alphabet, AlphabetProvider, MAX_ALPHABET_LEN, MAX_BIT_WIDTH, PrintableAscii,
    resolve,
};
pub use crate::core::config::{AlphabetConfig, AlphabetRegistry, DEFAULT_ALPHABET, Settings};
pub use crate::encoders::algorithms::chunked::{
    decoded_len, encoded_len, from_printable_string, to_printable_string,
};
pub use crate::encoders::algorithms::{
    AlphabetNotFoundError, ConfigError, DecodeError, Error, find_closest_alphabet,
};
pub use crate::encoders::streaming::{StreamError, StreamingDecoder, StreamingEncoder};

/// Encodes binary data using the specified alphabet.
///
/// Produces exactly `ceil(8 * data.len() / k)` symbols, zero-filling the last
/// group.
///
/// # Arguments
///
/// * `data` - The binary data to encode
/// * `alphabet` - The alphabet to use for encoding
pub fn encode(data: &[u8], alphabet: &Alphabet) -> String {
    encoders::algorithms::chunked::encode_chunked(data, alphabet)
}

/// Decodes a string back to binary data using the specified alphabet.
///
/// Produces exactly `floor(k * symbols / 8)` bytes; leftover bits are
/// dropped.
///
/// # Errors
///
/// Returns `DecodeError::UnknownSymbol` if the input contains a symbol
/// outside the alphabet's power-of-two prefix.
pub fn decode(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    encoders::algorithms::chunked::decode_chunked(encoded, alphabet)
}

#[cfg(test)]
mod tests;
