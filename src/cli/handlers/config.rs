use printable_string::{AlphabetConfig, AlphabetRegistry, resolve};
use serde::Serialize;

use crate::cli::args::ConfigAction;

/// One row of `config list`.
#[derive(Serialize)]
struct AlphabetSummary {
    name: String,
    size: usize,
    effective_size: usize,
    bit_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

pub fn handle(
    action: ConfigAction,
    registry: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::List { json } => handle_list(json, registry),
        ConfigAction::Show { alphabet } => handle_show(&alphabet, registry),
    }
}

fn summarize(name: &str, config: &AlphabetConfig) -> Result<AlphabetSummary, Box<dyn std::error::Error>> {
    let size = config.symbol_count();
    let (effective_size, bit_width) =
        resolve(size).map_err(|e| format!("Alphabet '{}' is invalid: {}", name, e))?;
    Ok(AlphabetSummary {
        name: name.to_string(),
        size,
        effective_size,
        bit_width,
        description: config.description.clone(),
    })
}

fn handle_list(json: bool, registry: &AlphabetRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let mut summaries = Vec::new();
    for name in registry.names() {
        if let Some(config) = registry.get(&name) {
            match summarize(&name, config) {
                Ok(summary) => summaries.push(summary),
                Err(e) => log::warn!("skipping {}", e),
            }
        }
    }

    if json {
        let output = serde_json::json!({
            "default": registry.default_name(),
            "alphabets": summaries,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Available alphabets:\n");
    for s in &summaries {
        let marker = if s.name == registry.default_name() { "*" } else { " " };
        println!(
            "{} {:<12} {:>6} -> {:<6} k={:<2}  {}",
            marker,
            s.name,
            s.size,
            s.effective_size,
            s.bit_width,
            s.description.as_deref().unwrap_or("")
        );
    }

    Ok(())
}

fn handle_show(name: &str, registry: &AlphabetRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let alphabet = registry.build(name)?;
    let config = registry.get(name).ok_or_else(|| format!("Alphabet '{}' not found", name))?;

    println!("Alphabet: {}", name);
    if let Some(description) = &config.description {
        println!("  Description: {}", description);
    }
    if !config.chars.is_empty() {
        println!("  Type: Explicit character set");
    } else if let (Some(start), Some(length)) = (&config.start, config.length) {
        println!("  Type: Range-based");
        println!("  Start: {} (U+{:04X})", start, start.chars().next().map_or(0, u32::from));
        println!("  Length: {}", length);
    }
    println!("  Size: {} symbols", alphabet.len());
    println!("  Effective size: {} symbols", alphabet.effective_size());
    println!("  Bit width: {}", alphabet.bit_width());

    let preview: String = alphabet.effective_symbols().iter().take(64).collect();
    let suffix = if alphabet.effective_size() > 64 { "..." } else { "" };
    println!("  Symbols: {}{}", preview, suffix);

    let ignored = alphabet.len() - alphabet.effective_size();
    if ignored > 0 {
        println!("  Unused: {} trailing symbols past the power-of-two cutoff", ignored);
    }

    Ok(())
}
