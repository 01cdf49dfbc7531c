//! The seeded random source generators draw from.
//!
//! Generators are expected to be reproducible: the same seed must always give
//! the same test. When no seed is given explicitly it is derived from the
//! command line, so rerunning the exact same command recreates the test.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

pub type JudgeRng = ChaCha8Rng;

pub fn seeded(seed: u64) -> JudgeRng {
    debug!(seed, "seeding random source");
    ChaCha8Rng::seed_from_u64(seed)
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// A stable digest of `args` (FNV-1a, with a separator after every argument so
/// that `["ab", "c"]` and `["a", "bc"]` differ).
pub fn seed_from_args<I, S>(args: I) -> u64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut hash = FNV_OFFSET;
    for arg in args {
        for &b in arg.as_ref().as_bytes().iter().chain(&[0u8]) {
            hash ^= u64::from(b);
            hash = hash.wrapping_mul(FNV_PRIME);
        }
    }
    hash
}

/// `args` without the flags in `ignored`, whether given as `--flag value` or
/// `--flag=value`. Options that don't change what a generator prints, such as
/// logging, are dropped this way before deriving a seed.
pub fn without_flags<I, S>(args: I, ignored: &[&str]) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut kept = Vec::new();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let s = arg.as_ref();
        if ignored.iter().any(|&flag| flag == s) {
            // The value is the next argument
            args.next();
            continue;
        }
        let inline = ignored
            .iter()
            .any(|&flag| s.strip_prefix(flag).map_or(false, |rest| rest.starts_with('=')));
        if !inline {
            kept.push(s.to_string());
        }
    }
    kept
}
