//! Random byte sources.
//!
//! Secure mode reads the operating system's cryptographic random source via
//! `rand`. Fast mode uses a per-thread `SmallRng` seeded once from OS
//! entropy: statistically random, but predictable to anyone who learns its
//! state.

use std::cell::RefCell;

use rand::rngs::{OsRng, SmallRng};
use rand::{RngCore, SeedableRng};

use crate::error::Result;

/// Which randomness source a generation call draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Operating system CSPRNG. Suitable for tokens, secrets and session IDs.
    #[default]
    Secure,
    /// Non-cryptographic PRNG. For test fixtures and display IDs only.
    Fast,
}

impl Mode {
    pub fn is_secure(self) -> bool {
        matches!(self, Mode::Secure)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Secure => "secure",
            Mode::Fast => "fast",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

thread_local! {
    static FAST_RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_entropy());
}

/// Run `f` with the byte source for `mode`.
///
/// A nested fast-mode call made from inside `f` gets its own freshly seeded
/// `SmallRng`, since the thread's generator is already lent out.
pub fn with_source<T>(mode: Mode, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
    match mode {
        Mode::Secure => f(&mut OsRng),
        Mode::Fast => FAST_RNG.with(|cell| match cell.try_borrow_mut() {
            Ok(mut rng) => f(&mut *rng),
            Err(_) => {
                log::trace!("fast source busy on this thread, seeding a nested SmallRng");
                f(&mut SmallRng::from_entropy())
            }
        }),
    }
}

/// Fill a buffer with random bytes from the source for `mode`.
pub fn fill_random(mode: Mode, buf: &mut [u8]) -> Result<()> {
    with_source(mode, |rng| rng.try_fill_bytes(buf))?;
    Ok(())
}
