use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rsb_core::Probability;

/// Epsilon-greedy throw selection.
///
/// Owns its RNG so one session's randomness is independent of any other;
/// [`Self::seeded`] pins the stream for reproducible play, otherwise
/// entropy comes from the OS.
#[derive(Debug)]
pub struct Policy {
    epsilon: Probability,
    rng: SmallRng,
}

impl Policy {
    pub fn new(epsilon: Probability) -> Self {
        Self {
            epsilon,
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
    pub fn seeded(epsilon: Probability, seed: u64) -> Self {
        Self {
            epsilon,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    /// Uniformly random throw, used for exploration and warm-up rounds.
    pub fn explore(&mut self) -> Throw {
        *Throw::all()
            .choose(&mut self.rng)
            .expect("three throws to choose from")
    }
    /// Explore with probability epsilon, otherwise exploit the table.
    pub fn choose(&mut self, table: &mut Table, state: State) -> Throw {
        if self.rng.random::<Probability>() < self.epsilon {
            log::trace!("explore at {}", state);
            self.explore()
        } else {
            log::trace!("exploit at {}", state);
            table.best(state)
        }
    }
}
