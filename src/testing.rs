//! Helpers for `quickcheck` properties in crates built on this one.

use quickcheck::{Arbitrary, Gen};
use rand::{rngs::StdRng, SeedableRng};

// `Gen` contains a rng, but it's a private member so this method is used to get
// a standard rng generated from `Gen`
pub fn std_rng(g: &mut Gen) -> StdRng {
    let mut seed = [0u8; 32];
    for i in 0..32 {
        seed[i] = Arbitrary::arbitrary(g);
    }
    StdRng::from_seed(seed)
}
