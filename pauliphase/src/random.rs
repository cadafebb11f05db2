//! Uniform sampling of phases with [rand].

use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::phase::Phase;

impl Distribution<Phase> for StandardUniform {
    /// Draws two fair bits and uses them as the low and high bit of the code.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Phase {
        let lo: bool = Distribution::<bool>::sample(self, rng);
        let hi: bool = Distribution::<bool>::sample(self, rng);
        Phase::wrapping(lo as u8 | (hi as u8) << 1)
    }
}
