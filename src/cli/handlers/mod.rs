pub mod config;
pub mod decode;
pub mod encode;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::cli::global::GlobalArgs;

/// Reads the whole input, honouring `--max-size` and `--force`.
pub(crate) fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        check_file_size(file_path, global)?;
        return Ok(fs::read(file_path)?);
    }

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;

    if global.max_size > 0 && buffer.len() > global.max_size && !global.force {
        return Err(format!(
            "Input size ({} bytes) exceeds maximum ({} bytes). Use --force to process anyway.",
            buffer.len(),
            global.max_size
        )
        .into());
    }

    Ok(buffer)
}

/// Rejects files over `--max-size` unless `--force` is given.
pub(crate) fn check_file_size(
    file_path: &Path,
    global: &GlobalArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if global.max_size == 0 {
        return Ok(());
    }

    let file_size = fs::metadata(file_path)?.len() as usize;
    if file_size <= global.max_size {
        return Ok(());
    }

    if global.force {
        log::warn!(
            "processing large file ({} bytes, limit: {} bytes)",
            file_size,
            global.max_size
        );
        Ok(())
    } else {
        Err(format!(
            "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
            file_size, global.max_size
        )
        .into())
    }
}

/// Opens the input for streaming: the file if given, stdin otherwise.
pub(crate) fn open_reader(file: Option<&PathBuf>) -> io::Result<Box<dyn Read>> {
    Ok(match file {
        Some(path) => Box::new(io::BufReader::new(fs::File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    })
}

/// Opens the output: the file if given, stdout otherwise.
pub(crate) fn open_writer(output: Option<&PathBuf>) -> io::Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(io::BufWriter::new(fs::File::create(path)?)),
        None => Box::new(io::BufWriter::new(io::stdout().lock())),
    })
}
