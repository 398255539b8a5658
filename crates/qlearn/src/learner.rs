use crate::*;
use rsb_core::Utility;

/// One-step tabular Q-learning backup.
///
/// `q' = (1 - α)·q + α·(r + γ·max)` where `max` is the highest value in
/// the record being written. The bootstrap deliberately reads the same
/// state's own record rather than a distinct successor state's; changing
/// it to a two-state Bellman update changes the learned dynamics.
#[derive(Debug, Clone, Copy)]
pub struct Learner {
    /// Learning rate (α).
    pub alpha: Utility,
    /// Discount factor (γ).
    pub gamma: Utility,
}

impl Learner {
    /// Fold one observed reward into the estimate for (state, throw).
    pub fn update(&self, table: &mut Table, state: State, throw: Throw, reward: Utility) {
        let record = table.get_or_init(state);
        let current = record[usize::from(throw)];
        let future = record.iter().copied().fold(Utility::MIN, Utility::max);
        let updated = (1. - self.alpha) * current + self.alpha * (reward + self.gamma * future);
        record[usize::from(throw)] = updated;
        log::debug!(
            "update {} {} r {:+} q {:.4} -> {:.4}",
            state,
            throw,
            reward,
            current,
            updated
        );
    }
}
