use printable_string::{Alphabet, AlphabetRegistry};

use crate::cli::global::GlobalArgs;

/// Loads the registry with user overrides, then merges `--config` on top.
pub fn load_registry(global: &GlobalArgs) -> Result<AlphabetRegistry, Box<dyn std::error::Error>> {
    let mut registry = AlphabetRegistry::load_with_overrides()?;

    if let Some(path) = &global.config {
        let raw = path.to_string_lossy();
        let expanded = shellexpand::tilde(raw.as_ref());
        let extra = AlphabetRegistry::load_from_file(std::path::Path::new(expanded.as_ref()))
            .map_err(|e| format!("Cannot load alphabets from '{}': {}", raw, e))?;
        log::debug!("merging {} alphabets from --config", extra.alphabets.len());
        registry.merge(extra);
    }

    Ok(registry)
}

/// Builds the named alphabet, or the registry default when no name is given.
pub fn create_alphabet(
    registry: &AlphabetRegistry,
    name: Option<&str>,
) -> Result<Alphabet, Box<dyn std::error::Error>> {
    let name = name.unwrap_or_else(|| registry.default_name());
    log::debug!("using alphabet '{}'", name);
    Ok(registry.build(name)?)
}
