//! Unbiased alphabet sampling.
//!
//! Maps random bytes to alphabet indices with no modulo bias. Alphabets whose
//! size is a power of two take one byte per symbol and mask it. Every other
//! size masks each byte down to the smallest `2^k - 1` covering the alphabet
//! and rejects values that fall past the end, drawing bytes in batches and
//! refilling as needed.
//!
//! `byte % n` is never used: for any `n` that does not divide 256 it favours
//! the low indices.

use rand::RngCore;
use zeroize::Zeroizing;

use crate::alphabet::check_size;
use crate::error::{IdError, Result};

/// Controls how many random bytes are requested per refill in the rejection
/// path.
///
/// Any batch size of at least one byte produces correct output; the policy
/// only trades wasted bytes against the number of calls into the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchPolicy {
    /// Batch size as a multiple of the requested length.
    pub ratio: f64,
    /// Lower bound on the batch size, in bytes.
    pub min_batch: usize,
}

impl BatchPolicy {
    pub const DEFAULT_RATIO: f64 = 1.5;
    pub const DEFAULT_MIN_BATCH: usize = 32;
    /// Hard ceiling on a single batch, in bytes.
    pub const MAX_BATCH: usize = 64 * 1024;

    pub fn new(ratio: f64, min_batch: usize) -> Self {
        Self { ratio, min_batch }
    }

    /// Number of bytes to draw per batch for an identifier of `length`.
    ///
    /// `ceil(length * ratio)`, raised to `min_batch` and to at least one byte,
    /// then capped at four times the length (never below
    /// [`Self::DEFAULT_MIN_BATCH`]) and at [`Self::MAX_BATCH`]. A negative or
    /// non-finite ratio counts as 1.0.
    pub fn batch_size(&self, length: usize) -> usize {
        let ratio = if self.ratio.is_finite() && self.ratio >= 0.0 {
            self.ratio
        } else {
            1.0
        };
        let scaled = (length as f64 * ratio).ceil() as usize;
        let upper = length
            .saturating_mul(4)
            .clamp(Self::DEFAULT_MIN_BATCH, Self::MAX_BATCH);
        scaled.max(self.min_batch).clamp(1, upper)
    }
}

impl Default for BatchPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RATIO, Self::DEFAULT_MIN_BATCH)
    }
}

/// Smallest mask of the form `2^k - 1` that is `>= n - 1`.
///
/// `n` must be in `1..=255`.
pub fn mask_for(n: usize) -> u8 {
    debug_assert!((1..=255).contains(&n));
    let top = (n - 1) as u8;
    (0xFFu32 >> top.leading_zeros()) as u8
}

/// Draw `length` symbols uniformly and independently from `symbols`.
pub fn sample<R: RngCore + ?Sized>(
    rng: &mut R,
    symbols: &[char],
    length: usize,
    policy: BatchPolicy,
) -> Result<String> {
    let mut out = String::with_capacity(length);
    sample_indices(rng, symbols.len(), length, policy, |index| {
        out.push(symbols[index])
    })?;
    Ok(out)
}

/// Emit `length` uniform indices in `0..n` through `emit`.
///
/// This is the byte-level core shared by every mode; callers choose the
/// source, this function owns the mapping.
pub fn sample_indices<R, F>(
    rng: &mut R,
    n: usize,
    length: usize,
    policy: BatchPolicy,
    mut emit: F,
) -> Result<()>
where
    R: RngCore + ?Sized,
    F: FnMut(usize),
{
    if length == 0 {
        return Err(IdError::InvalidLength(0));
    }
    check_size(n)?;

    let mask = mask_for(n);

    if n.is_power_of_two() {
        let mut bytes = Zeroizing::new(vec![0u8; length]);
        rng.try_fill_bytes(&mut bytes)?;
        for &byte in bytes.iter() {
            emit((byte & mask) as usize);
        }
        return Ok(());
    }

    let mut bytes = Zeroizing::new(vec![0u8; policy.batch_size(length)]);
    let mut accepted = 0;
    let mut refills = 0u32;

    while accepted < length {
        rng.try_fill_bytes(&mut bytes)?;
        refills += 1;
        for &byte in bytes.iter() {
            let index = (byte & mask) as usize;
            if index < n {
                emit(index);
                accepted += 1;
                if accepted == length {
                    break;
                }
            }
        }
    }

    log::trace!(
        "sampled {length} symbols from alphabet of {n} (mask {mask:#04x}, {refills} batch(es) of {} bytes)",
        bytes.len()
    );
    Ok(())
}
