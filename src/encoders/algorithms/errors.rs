use std::fmt;

/// Longest input echoed back in a decode error.
pub(crate) const MAX_ECHO_CHARS: usize = 60;
/// Longest symbol list shown in a hint.
const MAX_HINT_CHARS: usize = 80;

/// Errors raised while building an alphabet or validating an explicit
/// `(symbols, bit_width)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The alphabet has no symbols
    EmptyAlphabet,
    /// The alphabet has `2^31` or more symbols
    AlphabetTooLarge { len: usize },
    /// The bit width needs more symbols than the alphabet supplies
    BitWidthOutOfRange { bit_width: u32, available: usize },
    /// A range-defined alphabet could not be generated
    InvalidRange { reason: String },
}

impl ConfigError {
    pub fn invalid_range(reason: impl Into<String>) -> Self {
        ConfigError::InvalidRange {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();
        write_header(f, use_color)?;

        match self {
            ConfigError::EmptyAlphabet => {
                writeln!(f, "alphabet is empty")?;
                write_hint(f, use_color, "supply at least one symbol")
            }
            ConfigError::AlphabetTooLarge { len } => {
                writeln!(f, "alphabet has {} symbols", len)?;
                write_hint(f, use_color, "alphabets must have fewer than 2^31 symbols")
            }
            ConfigError::BitWidthOutOfRange {
                bit_width,
                available,
            } => {
                writeln!(
                    f,
                    "bit width {} is out of range for {} symbols",
                    bit_width, available
                )?;
                write_hint(
                    f,
                    use_color,
                    "a bit width of k needs at least 2^k symbols and k may not exceed 30",
                )
            }
            ConfigError::InvalidRange { reason } => {
                write!(f, "invalid alphabet range: {}", reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors that can occur during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a symbol outside the effective alphabet
    UnknownSymbol {
        symbol: char,
        position: usize,
        input: String,
        valid_symbols: String,
    },
}

impl DecodeError {
    /// Create an UnknownSymbol error with context.
    ///
    /// `position` counts characters, not bytes.
    pub fn unknown_symbol(symbol: char, position: usize, input: &str, valid: &[char]) -> Self {
        let display_input = truncate_chars(input, MAX_ECHO_CHARS);
        let valid_symbols: String = valid.iter().collect();

        DecodeError::UnknownSymbol {
            symbol,
            position,
            input: display_input,
            valid_symbols,
        }
    }

    /// The character position of the offending symbol.
    pub fn position(&self) -> usize {
        match self {
            DecodeError::UnknownSymbol { position, .. } => *position,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::UnknownSymbol {
                symbol,
                position,
                input,
                valid_symbols,
            } => {
                write_header(f, use_color)?;
                writeln!(f, "unknown symbol '{}' at position {}", symbol, position)?;
                writeln!(f)?;

                // The caret is only meaningful while the position is inside
                // the echoed prefix.
                writeln!(f, "  {}", input)?;
                if *position < input.chars().count() {
                    write!(f, "  {}", " ".repeat(*position))?;
                    if use_color {
                        writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                    } else {
                        writeln!(f, "^")?;
                    }
                }
                writeln!(f)?;

                let hint = format!(
                    "valid symbols: {}",
                    truncate_chars(valid_symbols, MAX_HINT_CHARS)
                );
                write_hint(f, use_color, &hint)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Error when a named alphabet is not in the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl AlphabetNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for AlphabetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        write_header(f, use_color)?;
        writeln!(f, "alphabet '{}' not found", self.name)?;
        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            write_hint(f, use_color, &format!("did you mean '{}'?", suggestion))?;
            writeln!(f)?;
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1m`printable-string config list`\x1b[0m to see all alphabets"
            )
        } else {
            write!(
                f,
                "      run `printable-string config list` to see all alphabets"
            )
        }
    }
}

impl std::error::Error for AlphabetNotFoundError {}

/// Any error the crate can return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Config(ConfigError),
    Decode(DecodeError),
    NotFound(AlphabetNotFoundError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => e.fmt(f),
            Error::Decode(e) => e.fmt(f),
            Error::NotFound(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(e) => Some(e),
            Error::Decode(e) => Some(e),
            Error::NotFound(e) => Some(e),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Error::Decode(e)
    }
}

impl From<AlphabetNotFoundError> for Error {
    fn from(e: AlphabetNotFoundError) -> Self {
        Error::NotFound(e)
    }
}

fn write_header(f: &mut fmt::Formatter<'_>, use_color: bool) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;31merror:\x1b[0m ")
    } else {
        write!(f, "error: ")
    }
}

fn write_hint(f: &mut fmt::Formatter<'_>, use_color: bool, hint: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", hint)
    } else {
        write!(f, "hint: {}", hint)
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte_index, _)) => format!("{}...", &s[..byte_index]),
        None => s.to_string(),
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();

    if s1.is_empty() {
        return len2;
    }
    if len2 == 0 {
        return s1.chars().count();
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching alphabet name
pub fn find_closest_alphabet(name: &str, available: &[String]) -> Option<String> {
    // 1-2 edits for short names, up to 3 for longer ones
    let threshold = if name.chars().count() < 5 { 2 } else { 3 };

    let mut best_match = None;
    let mut best_distance = usize::MAX;

    for candidate in available {
        let distance = levenshtein_distance(name, candidate);
        if distance < best_distance && distance <= threshold {
            best_distance = distance;
            best_match = Some(candidate.clone());
        }
    }

    best_match
}
