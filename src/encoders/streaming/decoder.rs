use crate::core::alphabet::Alphabet;
use crate::encoders::algorithms::DecodeError;
use crate::encoders::algorithms::chunked::ByteUnpacker;
use crate::encoders::algorithms::errors::MAX_ECHO_CHARS;
use std::io::{Read, Write};

use super::StreamError;

const CHUNK_SIZE: usize = 4096; // 4KB chunks

/// Streaming decoder for processing large amounts of encoded data efficiently.
///
/// Input is read as UTF-8 in chunks; a code point split across two reads is
/// held back until the rest of it arrives. Line breaks are skipped unless the
/// alphabet itself uses them, and skipped line breaks do not count towards
/// error positions.
///
/// Decoded bytes are written chunk by chunk, so when an unknown symbol turns
/// up the writer already holds everything decoded from earlier reads.
pub struct StreamingDecoder<'a, W: Write> {
    alphabet: &'a Alphabet,
    writer: W,
}

impl<'a, W: Write> StreamingDecoder<'a, W> {
    /// Creates a new streaming decoder.
    ///
    /// # Arguments
    ///
    /// * `alphabet` - The alphabet used for encoding
    /// * `writer` - The destination for decoded output
    pub fn new(alphabet: &'a Alphabet, writer: W) -> Self {
        StreamingDecoder { alphabet, writer }
    }

    /// Decodes everything `reader` yields and returns the number of bytes
    /// written.
    pub fn decode<R: Read>(&mut self, reader: &mut R) -> Result<usize, StreamError> {
        let mut unpacker = ByteUnpacker::new(self.alphabet.bit_width());

        let mut buffer = vec![0u8; CHUNK_SIZE];
        let mut pending: Vec<u8> = Vec::with_capacity(CHUNK_SIZE + 4);
        let mut decoded = Vec::with_capacity(CHUNK_SIZE);
        // Head of the stream, echoed back in decode errors.
        let mut echo = String::new();
        let mut position = 0;
        let mut offset = 0;
        let mut bytes_written = 0;

        loop {
            let bytes_read = reader.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            pending.extend_from_slice(&buffer[..bytes_read]);

            let valid_up_to = match std::str::from_utf8(&pending) {
                Ok(text) => text.len(),
                Err(e) if e.error_len().is_none() => e.valid_up_to(),
                Err(e) => {
                    return Err(StreamError::InvalidUtf8 {
                        offset: offset + e.valid_up_to(),
                    });
                }
            };

            // The prefix was validated above.
            let text = std::str::from_utf8(&pending[..valid_up_to])
                .map_err(|e| StreamError::InvalidUtf8 {
                    offset: offset + e.valid_up_to(),
                })?;

            decoded.clear();
            position = self.decode_text(text, position, &mut echo, &mut unpacker, &mut decoded)?;
            self.writer.write_all(&decoded)?;
            bytes_written += decoded.len();

            offset += valid_up_to;
            pending.drain(..valid_up_to);
        }

        if !pending.is_empty() {
            return Err(StreamError::InvalidUtf8 { offset });
        }
        self.writer.flush()?;

        log::debug!(
            "streamed {} symbols into {} bytes ({} bits dropped)",
            position,
            bytes_written,
            unpacker.leftover_bits()
        );
        Ok(bytes_written)
    }

    fn decode_text(
        &self,
        text: &str,
        mut position: usize,
        echo: &mut String,
        unpacker: &mut ByteUnpacker,
        out: &mut Vec<u8>,
    ) -> Result<usize, DecodeError> {
        for c in text.chars() {
            let index = self.alphabet.decode_char(c);
            if index.is_none() && (c == '\n' || c == '\r') {
                continue;
            }
            if position <= MAX_ECHO_CHARS {
                echo.push(c);
            }

            match index {
                Some(index) => unpacker.push_index(index, out),
                None => {
                    return Err(DecodeError::unknown_symbol(
                        c,
                        position,
                        echo,
                        self.alphabet.effective_symbols(),
                    ));
                }
            }
            position += 1;
        }
        Ok(position)
    }

    /// Consumes the decoder, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
