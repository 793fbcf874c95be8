//! alphaid: random identifiers from arbitrary alphabets.
//!
//! Identifiers are drawn symbol by symbol from an alphabet of 1 to 255
//! symbols. Each symbol is an independent, uniform draw: sizes that are not a
//! power of two go through rejection sampling instead of a biased remainder.
//!
//! Two modes share the same sampling code and differ only in their byte
//! source: [`generate`] reads the operating system CSPRNG, while
//! [`generate_unsecure`] uses a fast per-thread PRNG.
//!
//! ```no_run
//! let token = alphaid::generate(32, None)?;
//! let pin = alphaid::generate(6, Some(alphaid::alphabet::DIGITS))?;
//! # Ok::<(), alphaid::IdError>(())
//! ```

pub mod alphabet;
pub mod error;
pub mod generator;
pub mod sampler;
pub mod source;

pub use alphabet::Alphabet;
pub use error::{IdError, Result};
pub use generator::{Generator, GeneratorBuilder};
pub use sampler::BatchPolicy;
pub use source::Mode;

/// Generate a secure identifier of `length` symbols.
///
/// `alphabet` defaults to [`alphabet::URL_SAFE`] when `None`.
pub fn generate(length: usize, alphabet: Option<&str>) -> Result<String> {
    generate_in(Mode::Secure, length, alphabet)
}

/// Generate an identifier of `length` symbols from the fast, non-cryptographic
/// source. Not suitable for secrets.
///
/// `alphabet` defaults to [`alphabet::URL_SAFE`] when `None`.
pub fn generate_unsecure(length: usize, alphabet: Option<&str>) -> Result<String> {
    generate_in(Mode::Fast, length, alphabet)
}

fn generate_in(mode: Mode, length: usize, alphabet: Option<&str>) -> Result<String> {
    let alphabet = alphabet.unwrap_or(alphabet::URL_SAFE);
    let symbols: Vec<char> = alphabet.chars().collect();
    source::with_source(mode, |rng| {
        sampler::sample(rng, &symbols, length, BatchPolicy::default())
    })
}

/// Convert a signed length into a usable one.
///
/// Fails with [`IdError::InvalidLength`] for zero and negative values.
pub fn checked_length(length: i64) -> Result<usize> {
    if length <= 0 {
        return Err(IdError::InvalidLength(length));
    }
    usize::try_from(length).map_err(|_| IdError::InvalidLength(length))
}
