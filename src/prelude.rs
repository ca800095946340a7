//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use printable_string::prelude::*;
//!
//! let registry = AlphabetRegistry::load_default().unwrap();
//! let hex = registry.build("hex").unwrap();
//! assert_eq!(encode(b"\xCA\xFE", &hex), "CAFE");
//! ```

pub use crate::{
    Alphabet,
    AlphabetProvider,
    // Config
    AlphabetRegistry,
    ConfigError,
    DecodeError,
    Error,
    PrintableStringConverter,
    // Streaming
    StreamingDecoder,
    StreamingEncoder,
    // Core encoding/decoding
    decode,
    encode,
    from_printable_string,
    to_printable_string,
};
