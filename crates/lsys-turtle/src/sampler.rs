//! Parameter sampling.

use lsys_types::Param;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draw a value for `param`: fixed values come back unchanged, ranges yield
/// a uniform value in `[min, max]`.
pub fn sample<R: Rng + ?Sized>(param: Param, rng: &mut R) -> f64 {
    match param {
        Param::Fixed(v) => v,
        Param::Range(..) => {
            let (lo, hi) = (param.min(), param.max());
            if lo < hi {
                rng.gen_range(lo..=hi)
            } else {
                lo
            }
        }
    }
}

/// Reproducible generator for a given seed.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator seeded from the operating system.
pub fn entropy_rng() -> StdRng {
    StdRng::from_entropy()
}
