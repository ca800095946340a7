use printable_string::{AlphabetRegistry, StreamingDecoder, decode};
use std::io::Write;

use super::{open_reader, open_writer, read_input};
use crate::cli::{args::DecodeArgs, config::create_alphabet, global::GlobalArgs};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    registry: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let alphabet = create_alphabet(registry, args.alphabet.as_deref())?;

    if args.stream {
        if let Some(path) = &args.file {
            super::check_file_size(path, global)?;
        }
        let mut reader = open_reader(args.file.as_ref())?;
        let mut writer = open_writer(args.output.as_ref())?;
        let written = StreamingDecoder::new(&alphabet, &mut writer).decode(&mut reader)?;
        writer.flush()?;
        log::info!("streamed {} bytes", written);
        return Ok(());
    }

    let input = read_input(args.file.as_ref(), global)?;
    let text = String::from_utf8(input).map_err(|_| "Input must be valid UTF-8 for decoding")?;
    // Only line breaks outside the alphabet are dropped; a space may be a symbol.
    let symbols: String = text
        .chars()
        .filter(|&c| !matches!(c, '\n' | '\r') || alphabet.decode_char(c).is_some())
        .collect();
    let data = decode(&symbols, &alphabet)?;
    log::info!("decoded {} bytes", data.len());

    let mut writer = open_writer(args.output.as_ref())?;
    if args.hex {
        writeln!(writer, "{}", hex::encode(&data))?;
    } else {
        writer.write_all(&data)?;
    }
    writer.flush()?;

    Ok(())
}
