use std::collections::HashMap;

use crate::core::alphabet::{Alphabet, MAX_BIT_WIDTH};

pub use super::errors::{ConfigError, DecodeError, Error};

/// Bits the cursor advances per symbol.
///
/// A single-symbol alphabet has a bit width of 0 but still spends one symbol
/// per input bit.
fn cursor_width(bit_width: u32) -> u32 {
    bit_width.max(1)
}

/// Mask selecting a symbol index out of the accumulator.
fn index_mask(bit_width: u32) -> u64 {
    (1u64 << bit_width) - 1
}

/// Number of symbols [`to_printable_string`] produces for `byte_len` bytes.
pub fn encoded_len(byte_len: usize, bit_width: u32) -> usize {
    (byte_len * 8).div_ceil(cursor_width(bit_width) as usize)
}

/// Number of bytes [`from_printable_string`] produces for `symbol_len` symbols.
pub fn decoded_len(symbol_len: usize, bit_width: u32) -> usize {
    symbol_len * cursor_width(bit_width) as usize / 8
}

fn check_bit_width(symbols: &[char], bit_width: u32) -> Result<(), ConfigError> {
    if bit_width > MAX_BIT_WIDTH || symbols.len() < (1usize << bit_width) {
        return Err(ConfigError::BitWidthOutOfRange {
            bit_width,
            available: symbols.len(),
        });
    }
    Ok(())
}

/// Encodes `data` as symbols from the first `2^bit_width` entries of
/// `symbols`, without building an [`Alphabet`].
///
/// # Errors
///
/// Returns [`ConfigError::BitWidthOutOfRange`] when `symbols` is shorter than
/// `2^bit_width` or `bit_width` exceeds 30.
pub fn to_printable_string(
    data: &[u8],
    symbols: &[char],
    bit_width: u32,
) -> Result<String, ConfigError> {
    check_bit_width(symbols, bit_width)?;
    Ok(encode_with(data, &symbols[..1 << bit_width], bit_width))
}

/// Decodes `data` against the first `2^bit_width` entries of `symbols`,
/// without building an [`Alphabet`].
///
/// # Errors
///
/// Returns [`Error::Config`] for an invalid `(symbols, bit_width)` pair and
/// [`Error::Decode`] for a symbol outside the effective prefix.
pub fn from_printable_string(data: &str, symbols: &[char], bit_width: u32) -> Result<Vec<u8>, Error> {
    check_bit_width(symbols, bit_width)?;
    let effective = &symbols[..1 << bit_width];

    let mut lookup = HashMap::with_capacity(effective.len());
    for (i, &c) in effective.iter().enumerate() {
        lookup.entry(c).or_insert(i);
    }

    Ok(decode_with(data, effective, bit_width, |c| {
        lookup.get(&c).copied()
    })?)
}

pub fn encode_chunked(data: &[u8], alphabet: &Alphabet) -> String {
    encode_with(data, alphabet.effective_symbols(), alphabet.bit_width())
}

pub fn decode_chunked(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    decode_with(
        encoded,
        alphabet.effective_symbols(),
        alphabet.bit_width(),
        |c| alphabet.decode_char(c),
    )
}

/// Bit cursor for the encode direction.
///
/// Bytes go in MSB-first; a symbol comes out each time `width` bits are
/// buffered. State survives across calls, so feeding a stream in arbitrary
/// slices produces the same output as a single call.
#[derive(Debug, Clone)]
pub(crate) struct SymbolPacker {
    bit_buffer: u64,
    bits_in_buffer: u32,
    width: u32,
    mask: u64,
}

impl SymbolPacker {
    pub(crate) fn new(bit_width: u32) -> Self {
        SymbolPacker {
            bit_buffer: 0,
            bits_in_buffer: 0,
            width: cursor_width(bit_width),
            mask: index_mask(bit_width),
        }
    }

    /// `effective` must hold exactly `2^bit_width` symbols.
    pub(crate) fn push_bytes(&mut self, data: &[u8], effective: &[char], out: &mut String) {
        for &byte in data {
            self.bit_buffer = (self.bit_buffer << 8) | u64::from(byte);
            self.bits_in_buffer += 8;

            while self.bits_in_buffer >= self.width {
                self.bits_in_buffer -= self.width;
                let index = ((self.bit_buffer >> self.bits_in_buffer) & self.mask) as usize;
                out.push(effective[index]);
            }
            // Never more than width + 7 live bits.
            self.bit_buffer &= (1u64 << self.bits_in_buffer) - 1;
        }
    }

    /// Flushes a short final group, zero-filled on the right.
    pub(crate) fn finish(self, effective: &[char], out: &mut String) {
        if self.bits_in_buffer > 0 {
            let shift = self.width - self.bits_in_buffer;
            let index = ((self.bit_buffer << shift) & self.mask) as usize;
            out.push(effective[index]);
        }
    }
}

/// Bit cursor for the decode direction.
#[derive(Debug, Clone)]
pub(crate) struct ByteUnpacker {
    bit_buffer: u64,
    bits_in_buffer: u32,
    width: u32,
}

impl ByteUnpacker {
    pub(crate) fn new(bit_width: u32) -> Self {
        ByteUnpacker {
            bit_buffer: 0,
            bits_in_buffer: 0,
            width: cursor_width(bit_width),
        }
    }

    pub(crate) fn push_index(&mut self, index: usize, out: &mut Vec<u8>) {
        self.bit_buffer = (self.bit_buffer << self.width) | index as u64;
        self.bits_in_buffer += self.width;

        while self.bits_in_buffer >= 8 {
            self.bits_in_buffer -= 8;
            out.push(((self.bit_buffer >> self.bits_in_buffer) & 0xFF) as u8);
        }
        self.bit_buffer &= (1u64 << self.bits_in_buffer) - 1;
    }

    /// Bits that did not fill a whole byte. They are dropped.
    pub(crate) fn leftover_bits(&self) -> u32 {
        self.bits_in_buffer
    }
}

fn encode_with(data: &[u8], effective: &[char], bit_width: u32) -> String {
    let output_chars = encoded_len(data.len(), bit_width);
    let mut result = String::with_capacity(output_chars);

    let mut packer = SymbolPacker::new(bit_width);
    packer.push_bytes(data, effective, &mut result);
    packer.finish(effective, &mut result);

    log::trace!(
        "encoded {} bytes into {} symbols (bit width {})",
        data.len(),
        output_chars,
        bit_width
    );
    result
}

fn decode_with<F>(
    encoded: &str,
    effective: &[char],
    bit_width: u32,
    lookup: F,
) -> Result<Vec<u8>, DecodeError>
where
    F: Fn(char) -> Option<usize>,
{
    let symbol_count = encoded.chars().count();
    let mut result = Vec::with_capacity(decoded_len(symbol_count, bit_width));
    let mut unpacker = ByteUnpacker::new(bit_width);

    for (position, c) in encoded.chars().enumerate() {
        let index = lookup(c)
            .ok_or_else(|| DecodeError::unknown_symbol(c, position, encoded, effective))?;
        unpacker.push_index(index, &mut result);
    }

    log::trace!(
        "decoded {} symbols into {} bytes (bit width {}, {} bits dropped)",
        symbol_count,
        result.len(),
        bit_width,
        unpacker.leftover_bits()
    );
    Ok(result)
}
