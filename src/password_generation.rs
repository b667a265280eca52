//! Utilities for generating passwords.

use rand::{CryptoRng, RngCore};

use crate::{GenerationError, GenerationErrorRepr, Secret};

/// Build a password of `len` characters, each drawn from `alphabet` with `rng`.
///
/// Every character is an independent, uniform draw from `alphabet`; repeats are allowed, and a
/// character that appears twice in `alphabet` is twice as likely to be picked.
///
/// Errors from `rng` are returned rather than papered over. `rand`'s own `Uniform` sampler goes
/// through the infallible `next_u64`, which panics when `OsRng` can't reach the OS, so indices
/// are drawn by `sample_index` instead.
pub fn generate_random_password<R>(
    rng: &mut R,
    alphabet: &[char],
    len: usize,
) -> Result<Secret, GenerationError>
where
    R: RngCore + CryptoRng,
{
    if alphabet.is_empty() {
        return Err(GenerationErrorRepr::EmptyAlphabet.into());
    }
    log::debug!(
        "sampling {} characters from an alphabet of {}",
        len,
        alphabet.len()
    );

    let mut secret = Secret(String::new());
    for _ in 0..len {
        let idx = sample_index(rng, alphabet.len()).map_err(GenerationErrorRepr::EntropySource)?;
        secret.0.push(alphabet[idx]);
    }
    Ok(secret)
}

/// Draw an index uniformly from `0..bound`.
///
/// 64-bit words in the top `2^64 mod bound` values are rejected and redrawn, so that the
/// accepted range is an exact multiple of `bound` and `% bound` is unbiased.
pub(crate) fn sample_index<R>(rng: &mut R, bound: usize) -> Result<usize, rand::Error>
where
    R: RngCore + ?Sized,
{
    assert!(bound > 0, "cannot sample from an empty range");
    let bound = bound as u64;
    let rem = (u64::MAX % bound + 1) % bound;
    let zone = u64::MAX - rem;
    loop {
        let mut buf = [0u8; 8];
        rng.try_fill_bytes(&mut buf)?;
        let word = u64::from_le_bytes(buf);
        if word <= zone {
            return Ok((word % bound) as usize);
        }
        log::trace!("rejected out-of-zone draw for bound {}", bound);
    }
}
