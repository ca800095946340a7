use printable_string::{AlphabetRegistry, StreamingEncoder, encode};
use std::io::Write;

use super::{open_reader, open_writer, read_input};
use crate::cli::{args::EncodeArgs, config::create_alphabet, global::GlobalArgs};

pub fn handle(
    args: EncodeArgs,
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
        let written = {
            let mut encoder = StreamingEncoder::new(&alphabet, &mut writer);
            encoder.encode(&mut reader)?
        };
        if args.output.is_none() {
            writeln!(writer)?;
        }
        writer.flush()?;
        log::info!("streamed {} symbols", written);
        return Ok(());
    }

    let data = read_input(args.file.as_ref(), global)?;
    let encoded = encode(&data, &alphabet);
    log::info!("encoded {} bytes into {} symbols", data.len(), encoded.chars().count());

    let mut writer = open_writer(args.output.as_ref())?;
    if args.output.is_some() {
        writer.write_all(encoded.as_bytes())?;
    } else {
        writeln!(writer, "{}", encoded)?;
    }
    writer.flush()?;

    Ok(())
}
