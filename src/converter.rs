use crate::core::alphabet::{Alphabet, AlphabetProvider};
use crate::encoders::algorithms::chunked;
use crate::encoders::algorithms::errors::{ConfigError, DecodeError};

/// Converts bytes to printable strings and back with one fixed alphabet.
///
/// The alphabet is resolved when the converter is built, so each call only
/// does the bit packing. A converter is immutable and `Send + Sync`.
///
/// # Example
///
/// ```
/// use printable_string::PrintableStringConverter;
///
/// let hex = PrintableStringConverter::from_provider(&|| "0123456789ABCDEF".chars().collect())
///     .unwrap();
/// assert_eq!(hex.to_printable_string(&[0xCA, 0xFE]), "CAFE");
/// assert_eq!(hex.from_printable_string("CAFE").unwrap(), vec![0xCA, 0xFE]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrintableStringConverter {
    alphabet: Alphabet,
}

impl PrintableStringConverter {
    /// A converter over the printable ASCII alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        PrintableStringConverter { alphabet }
    }

    /// Builds a converter from a custom alphabet source.
    pub fn from_provider<P: AlphabetProvider + ?Sized>(provider: &P) -> Result<Self, ConfigError> {
        Ok(Self::with_alphabet(Alphabet::from_provider(provider)?))
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Encodes `bytes`, producing `ceil(8 * len / bit_width)` symbols.
    pub fn to_printable_string(&self, bytes: &[u8]) -> String {
        chunked::encode_chunked(bytes, &self.alphabet)
    }

    /// Decodes `text`, producing `floor(bit_width * len / 8)` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownSymbol`] for the first symbol outside
    /// the effective alphabet.
    pub fn from_printable_string(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        chunked::decode_chunked(text, &self.alphabet)
    }
}
