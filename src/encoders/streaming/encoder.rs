use crate::core::alphabet::Alphabet;
use crate::encoders::algorithms::chunked::SymbolPacker;
use std::io::{Read, Write};

const CHUNK_SIZE: usize = 4096; // 4KB chunks

/// Streaming encoder for processing large amounts of data efficiently.
///
/// Reads the input in chunks and carries the bit cursor across chunk
/// boundaries, so the output is identical to a one-shot
/// [`encode`](crate::encode) of the whole input.
pub struct StreamingEncoder<'a, W: Write> {
    alphabet: &'a Alphabet,
    writer: W,
}

impl<'a, W: Write> StreamingEncoder<'a, W> {
    /// Creates a new streaming encoder.
    ///
    /// # Arguments
    ///
    /// * `alphabet` - The alphabet to encode with
    /// * `writer` - The destination for encoded output
    pub fn new(alphabet: &'a Alphabet, writer: W) -> Self {
        StreamingEncoder { alphabet, writer }
    }

    /// Encodes everything `reader` yields and returns the number of symbols
    /// written.
    pub fn encode<R: Read>(&mut self, reader: &mut R) -> std::io::Result<usize> {
        let effective = self.alphabet.effective_symbols();
        let mut packer = SymbolPacker::new(self.alphabet.bit_width());

        let mut buffer = vec![0u8; CHUNK_SIZE];
        let mut encoded = String::new();
        let mut symbols_written = 0;
        let mut bytes_read_total = 0;

        loop {
            let bytes_read = reader.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            bytes_read_total += bytes_read;

            encoded.clear();
            packer.push_bytes(&buffer[..bytes_read], effective, &mut encoded);
            symbols_written += encoded.chars().count();
            self.writer.write_all(encoded.as_bytes())?;
        }

        encoded.clear();
        packer.finish(effective, &mut encoded);
        symbols_written += encoded.chars().count();
        self.writer.write_all(encoded.as_bytes())?;
        self.writer.flush()?;

        log::debug!(
            "streamed {} bytes into {} symbols",
            bytes_read_total,
            symbols_written
        );
        Ok(symbols_written)
    }

    /// Consumes the encoder, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
