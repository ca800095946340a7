pub mod chunked;
pub mod errors;

// Re-export error types for public API
pub use errors::{
    AlphabetNotFoundError, ConfigError, DecodeError, Error, find_closest_alphabet,
};
