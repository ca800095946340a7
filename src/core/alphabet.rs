use std::collections::HashMap;
use std::str::FromStr;

use crate::encoders::algorithms::errors::ConfigError;

/// The 94 printable ASCII characters, `!` through `~`.
///
/// Only the first 64 are reachable by the codec.
pub const ASCII_PRINTABLE: &str = "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

/// Alphabets of this many symbols or more are rejected.
pub const MAX_ALPHABET_LEN: usize = 1 << 31;

/// Largest bit width a symbol may carry.
pub const MAX_BIT_WIDTH: u32 = 30;

/// Supplies the ordered symbol list an [`Alphabet`] is built from.
///
/// Implemented for any `Fn() -> Vec<char>`, so a closure is enough to plug in
/// a custom alphabet.
pub trait AlphabetProvider {
    fn get_alphabet(&self) -> Vec<char>;
}

impl<F> AlphabetProvider for F
where
    F: Fn() -> Vec<char>,
{
    fn get_alphabet(&self) -> Vec<char> {
        self()
    }
}

/// Provider for [`ASCII_PRINTABLE`], the default alphabet.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintableAscii;

impl AlphabetProvider for PrintableAscii {
    fn get_alphabet(&self) -> Vec<char> {
        ASCII_PRINTABLE.chars().collect()
    }
}

/// Computes `(effective_size, bit_width)` for an alphabet of `len` symbols.
///
/// `effective_size` is the largest power of two not above `len` and
/// `bit_width` is its base-2 logarithm.
///
/// # Errors
///
/// Returns [`ConfigError::EmptyAlphabet`] for `len == 0` and
/// [`ConfigError::AlphabetTooLarge`] for `len >= 2^31`.
pub fn resolve(len: usize) -> Result<(usize, u32), ConfigError> {
    if len == 0 {
        return Err(ConfigError::EmptyAlphabet);
    }
    if len >= MAX_ALPHABET_LEN {
        return Err(ConfigError::AlphabetTooLarge { len });
    }

    Ok(highest_power_of_two(len))
}

/// `(2^k, k)` for the highest set bit `k` of a non-zero `len`.
const fn highest_power_of_two(len: usize) -> (usize, u32) {
    let bit_width = usize::BITS - 1 - len.leading_zeros();
    (1usize << bit_width, bit_width)
}

/// An ordered symbol set together with its resolved power-of-two prefix.
///
/// The effective size, bit width and reverse lookup table are computed once
/// in the constructor; an `Alphabet` is immutable afterwards and can be
/// shared freely between threads.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    symbol_to_index: HashMap<char, usize>,
    effective_size: usize,
    bit_width: u32,
}

impl Alphabet {
    /// Creates an alphabet from an ordered list of symbols.
    ///
    /// Symbols past the largest power-of-two prefix are kept but never used.
    /// Duplicate symbols are accepted; decoding maps them to their first
    /// position.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `symbols` is empty or has `2^31` or more
    /// entries.
    pub fn new(symbols: Vec<char>) -> Result<Self, ConfigError> {
        let (effective_size, bit_width) = resolve(symbols.len())?;
        Ok(Self::from_resolved(symbols, effective_size, bit_width))
    }

    /// `effective_size` and `bit_width` must come from resolving
    /// `symbols.len()`.
    fn from_resolved(symbols: Vec<char>, effective_size: usize, bit_width: u32) -> Self {
        let mut symbol_to_index = HashMap::with_capacity(effective_size);
        for (i, &c) in symbols[..effective_size].iter().enumerate() {
            symbol_to_index.entry(c).or_insert(i);
        }

        if symbols.len() > effective_size {
            log::debug!(
                "alphabet of {} symbols truncated to {} ({} ignored)",
                symbols.len(),
                effective_size,
                symbols.len() - effective_size
            );
        }
        log::debug!(
            "resolved alphabet: len={} effective_size={} bit_width={}",
            symbols.len(),
            effective_size,
            bit_width
        );

        Alphabet {
            symbols,
            symbol_to_index,
            effective_size,
            bit_width,
        }
    }

    /// Builds an alphabet from whatever `provider` returns.
    pub fn from_provider<P: AlphabetProvider + ?Sized>(provider: &P) -> Result<Self, ConfigError> {
        Self::new(provider.get_alphabet())
    }

    /// The default alphabet: printable ASCII, truncated to 64 symbols.
    pub fn ascii_printable() -> Self {
        let symbols: Vec<char> = ASCII_PRINTABLE.chars().collect();
        // 94 symbols: non-empty and far below the size limit.
        let (effective_size, bit_width) = highest_power_of_two(symbols.len());
        Self::from_resolved(symbols, effective_size, bit_width)
    }

    /// Every symbol supplied, including any past the cutoff.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// The power-of-two prefix the codec actually uses.
    pub fn effective_symbols(&self) -> &[char] {
        &self.symbols[..self.effective_size]
    }

    /// Number of symbols supplied.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; an empty alphabet cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn effective_size(&self) -> usize {
        self.effective_size
    }

    /// Bits carried by one symbol, `log2(effective_size)`.
    pub fn bit_width(&self) -> u32 {
        self.bit_width
    }

    /// Returns the index of `c` within the effective prefix.
    pub fn decode_char(&self, c: char) -> Option<usize> {
        self.symbol_to_index.get(&c).copied()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::ascii_printable()
    }
}

impl FromStr for Alphabet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_powers_of_two() {
        assert_eq!(resolve(1).unwrap(), (1, 0));
        assert_eq!(resolve(2).unwrap(), (2, 1));
        assert_eq!(resolve(16).unwrap(), (16, 4));
        assert_eq!(resolve(64).unwrap(), (64, 6));
    }

    #[test]
    fn test_resolve_truncates() {
        assert_eq!(resolve(3).unwrap(), (2, 1));
        assert_eq!(resolve(10).unwrap(), (8, 3));
        assert_eq!(resolve(94).unwrap(), (64, 6));
        assert_eq!(resolve(127).unwrap(), (64, 6));
        assert_eq!(resolve(MAX_ALPHABET_LEN - 1).unwrap(), (1 << 30, 30));
    }

    #[test]
    fn test_resolve_rejects_bounds() {
        assert_eq!(resolve(0), Err(ConfigError::EmptyAlphabet));
        assert_eq!(
            resolve(MAX_ALPHABET_LEN),
            Err(ConfigError::AlphabetTooLarge {
                len: MAX_ALPHABET_LEN
            })
        );
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        assert_eq!(Alphabet::new(Vec::new()).unwrap_err(), ConfigError::EmptyAlphabet);
        assert!("".parse::<Alphabet>().is_err());
    }

    #[test]
    fn test_ascii_printable_matches_resolver() {
        let fast = Alphabet::ascii_printable();
        let slow = Alphabet::from_provider(&PrintableAscii).unwrap();
        assert_eq!(fast.len(), 94);
        assert_eq!((fast.effective_size(), fast.bit_width()), resolve(94).unwrap());
        assert_eq!(fast.effective_size(), slow.effective_size());
        assert_eq!(fast.bit_width(), slow.bit_width());
        assert_eq!(fast.effective_symbols(), slow.effective_symbols());
        for &c in fast.symbols() {
            assert_eq!(fast.decode_char(c), slow.decode_char(c));
        }
    }

    #[test]
    fn test_lookup_limited_to_prefix() {
        let alphabet: Alphabet = "0123456789".parse().unwrap();
        assert_eq!(alphabet.effective_size(), 8);
        assert_eq!(alphabet.bit_width(), 3);
        assert_eq!(alphabet.decode_char('7'), Some(7));
        assert_eq!(alphabet.decode_char('8'), None);
        assert_eq!(alphabet.decode_char('9'), None);
        assert_eq!(alphabet.effective_symbols().last(), Some(&'7'));
    }

    #[test]
    fn test_duplicates_resolve_to_first_position() {
        let alphabet: Alphabet = "abca".parse().unwrap();
        assert_eq!(alphabet.decode_char('a'), Some(0));
        assert_eq!(alphabet.decode_char('c'), Some(2));
    }

    #[test]
    fn test_closure_provider() {
        let provider = || "⚠⚡♨⚒".chars().collect::<Vec<char>>();
        let alphabet = Alphabet::from_provider(&provider).unwrap();
        assert_eq!(alphabet.bit_width(), 2);
        assert_eq!(alphabet.decode_char('⚒'), Some(3));
    }
}
