use crate::*;
use rsb_core::Utility;

/// Result of a single round from the agent's perspective.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Judge a round given the opponent's throw and ours.
    ///
    /// Total over all 9 pairs: equal throws draw, a throw that beats the
    /// opponent's wins, anything else loses.
    pub fn judge(opponent: Throw, agent: Throw) -> Self {
        if agent == opponent {
            Self::Draw
        } else if agent.beats(&opponent) {
            Self::Win
        } else {
            Self::Loss
        }
    }
    /// Reward signal driving the Q-update.
    pub fn utility(&self) -> Utility {
        match self {
            Self::Win => 1.,
            Self::Draw => 0.,
            Self::Loss => -1.,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaustive_grid() {
        for opponent in Throw::all() {
            for agent in Throw::all() {
                let expected = if agent == opponent {
                    0.
                } else if agent == opponent.counter() {
                    1.
                } else {
                    -1.
                };
                assert!(Outcome::judge(opponent, agent).utility() == expected);
            }
        }
    }

    #[test]
    fn spot_checks() {
        assert!(Outcome::judge(Throw::S, Throw::R).utility() == 1.);
        assert!(Outcome::judge(Throw::R, Throw::S).utility() == -1.);
        assert!(Outcome::judge(Throw::P, Throw::P).utility() == 0.);
    }
}
