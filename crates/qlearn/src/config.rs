use rsb_core::*;

/// Session-scoped hyperparameters, fixed at agent construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Throws per side folded into the state key (H).
    pub history: usize,
    /// Learning rate (α).
    pub alpha: Utility,
    /// Discount factor (γ).
    pub gamma: Utility,
    /// Exploration rate (ε).
    pub epsilon: Probability,
    /// Seed for the policy RNG; None draws entropy from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history: HISTORY_LENGTH,
            alpha: LEARNING_RATE,
            gamma: DISCOUNT_FACTOR,
            epsilon: EXPLORATION_RATE,
            seed: None,
        }
    }
}

impl Config {
    /// Reject configurations the state encoding or update rule cannot honor.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.history < 1 || self.history > MAX_HISTORY {
            anyhow::bail!("history length {} outside 1..={}", self.history, MAX_HISTORY);
        }
        if !(0. ..=1.).contains(&self.alpha) {
            anyhow::bail!("learning rate {} outside [0, 1]", self.alpha);
        }
        if !(0. ..=1.).contains(&self.gamma) {
            anyhow::bail!("discount factor {} outside [0, 1]", self.gamma);
        }
        if !(0. ..=1.).contains(&self.epsilon) {
            anyhow::bail!("exploration rate {} outside [0, 1]", self.epsilon);
        }
        Ok(())
    }
}
