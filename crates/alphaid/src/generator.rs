//! Configured identifier generators.
//!
//! A [`Generator`] bundles an alphabet, a randomness mode and a batch policy.
//! It holds no mutable state, so one instance can be shared freely between
//! threads.

use rand::RngCore;

use crate::alphabet::Alphabet;
use crate::error::{IdError, Result};
use crate::sampler::{self, BatchPolicy};
use crate::source::{self, Mode};

/// Generates identifiers from a fixed alphabet and mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Generator {
    alphabet: Alphabet,
    mode: Mode,
    policy: BatchPolicy,
}

impl Generator {
    /// URL-safe alphabet, secure mode, default batch policy.
    pub fn new() -> Self {
        Self {
            alphabet: Alphabet::default(),
            mode: Mode::Secure,
            policy: BatchPolicy::default(),
        }
    }

    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn batch_policy(&self) -> BatchPolicy {
        self.policy
    }

    /// Generate one identifier of `length` symbols from the configured source.
    pub fn generate(&self, length: usize) -> Result<String> {
        source::with_source(self.mode, |rng| self.generate_with(rng, length))
    }

    /// Generate one identifier using a caller-supplied byte source.
    ///
    /// The configured mode is ignored. Useful with a seeded RNG when output
    /// must be reproducible.
    pub fn generate_with<R: RngCore + ?Sized>(&self, rng: &mut R, length: usize) -> Result<String> {
        sampler::sample(rng, self.alphabet.symbols(), length, self.policy)
    }

    /// Generate `count` identifiers, stopping at the first failure.
    pub fn generate_many(&self, count: usize, length: usize) -> Result<Vec<String>> {
        if length == 0 {
            return Err(IdError::InvalidLength(0));
        }
        source::with_source(self.mode, |rng| {
            (0..count)
                .map(|_| self.generate_with(&mut *rng, length))
                .collect()
        })
    }

    /// Bits of entropy in an identifier of `length` symbols.
    pub fn entropy_bits(&self, length: usize) -> f64 {
        length as f64 * self.alphabet.bits_per_symbol()
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Generator`]. The alphabet is validated in
/// [`GeneratorBuilder::build`].
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    alphabet: AlphabetSpec,
    mode: Mode,
    policy: BatchPolicy,
}

#[derive(Debug, Clone)]
enum AlphabetSpec {
    Default,
    Literal(String),
    Named(String),
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        Self {
            alphabet: AlphabetSpec::Default,
            mode: Mode::Secure,
            policy: BatchPolicy::default(),
        }
    }

    /// Use the characters of `symbols` as the alphabet.
    pub fn alphabet(mut self, symbols: impl Into<String>) -> Self {
        self.alphabet = AlphabetSpec::Literal(symbols.into());
        self
    }

    /// Use a named alphabet such as `"hex"` or `"url-safe"`.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.alphabet = AlphabetSpec::Named(name.into());
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn secure(self) -> Self {
        self.mode(Mode::Secure)
    }

    pub fn unsecure(self) -> Self {
        self.mode(Mode::Fast)
    }

    pub fn batch_policy(mut self, policy: BatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(self) -> Result<Generator> {
        let alphabet = match self.alphabet {
            AlphabetSpec::Default => Alphabet::default(),
            AlphabetSpec::Literal(symbols) => Alphabet::new(&symbols)?,
            AlphabetSpec::Named(name) => Alphabet::named(&name)?,
        };
        log::debug!(
            "built {} generator over {} symbols",
            self.mode,
            alphabet.len()
        );
        Ok(Generator {
            alphabet,
            mode: self.mode,
            policy: self.policy,
        })
    }
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
