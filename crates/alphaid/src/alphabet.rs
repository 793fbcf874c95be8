//! Alphabets: the symbol sets identifiers are drawn from.
//!
//! The named constants cover the common ASCII sets. Any other string can be
//! used as an alphabet as long as it holds between 1 and 255 symbols; the
//! limit keeps every index addressable by a single random byte.

use crate::error::{IdError, Result};

/// Largest number of symbols an alphabet may hold.
pub const MAX_SYMBOLS: usize = 255;

pub const ASCII_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const ASCII_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const ASCII_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const HEX_DIGITS: &str = "0123456789abcdefABCDEF";
pub const OCT_DIGITS: &str = "01234567";
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// URL-safe symbols `[A-Za-z0-9_-]`. 64 symbols, the default alphabet.
pub const URL_SAFE: &str = "_-0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Digits, letters, punctuation and ASCII whitespace.
pub const PRINTABLE: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~ \t\n\r\x0b\x0c";

/// Named alphabets, addressable by their kebab-case name.
pub const NAMED: &[(&str, &str)] = &[
    ("lowercase", ASCII_LOWERCASE),
    ("uppercase", ASCII_UPPERCASE),
    ("letters", ASCII_LETTERS),
    ("digits", DIGITS),
    ("hex", HEX_DIGITS),
    ("oct", OCT_DIGITS),
    ("punctuation", PUNCTUATION),
    ("url-safe", URL_SAFE),
    ("printable", PRINTABLE),
];

/// Look up a named alphabet.
pub fn named(name: &str) -> Option<&'static str> {
    NAMED
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, symbols)| *symbols)
}

/// A validated, ordered set of symbols.
///
/// Symbols are Unicode scalar values, so the size limit counts characters
/// rather than UTF-8 bytes. Repeated symbols are kept as-is and are drawn
/// proportionally more often.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from the characters of `symbols`.
    pub fn new(symbols: &str) -> Result<Self> {
        Self::from_symbols(symbols.chars().collect())
    }

    /// Build an alphabet from an explicit symbol list.
    pub fn from_symbols(symbols: Vec<char>) -> Result<Self> {
        check_size(symbols.len())?;
        Ok(Self { symbols })
    }

    /// Look up a named alphabet (see [`NAMED`]).
    pub fn named(name: &str) -> Result<Self> {
        let symbols = named(name).ok_or_else(|| IdError::UnknownAlphabet(name.to_string()))?;
        Self::new(symbols)
    }

    /// The default URL-safe alphabet.
    pub fn url_safe() -> Self {
        Self {
            symbols: URL_SAFE.chars().collect(),
        }
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Bits of entropy per symbol, `log2(len)`.
    pub fn bits_per_symbol(&self) -> f64 {
        (self.symbols.len() as f64).log2()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::url_safe()
    }
}

impl std::str::FromStr for Alphabet {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Validate a symbol count against the 1..=255 range.
pub(crate) fn check_size(len: usize) -> Result<()> {
    if len == 0 {
        return Err(IdError::EmptyAlphabet);
    }
    if len > MAX_SYMBOLS {
        return Err(IdError::AlphabetTooLarge(len));
    }
    Ok(())
}
