use crate::*;

/// Discrete state key folded from the two history windows.
///
/// The opponent's window comes first, then the agent's, each oldest to
/// newest, packed as base-4 digits (throw + 1) into a `u32`. The +1 offset
/// keeps the encoding prefix-free across window lengths, so the shorter
/// keys seen during warm-up can never collide with fully-formed ones.
///
/// Equal window contents in equal order always produce equal keys; any
/// difference in content or order produces a different key. With the
/// offset, 2H digits fit in a `u32` up to H = 8 (see `MAX_HISTORY`).
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct State(u32);

impl From<(&Recall, &Recall)> for State {
    fn from((opponent, agent): (&Recall, &Recall)) -> Self {
        Self(
            opponent
                .iter()
                .chain(agent.iter())
                .map(u8::from)
                .map(u32::from)
                .fold(0, |key, digit| key * 4 + digit + 1),
        )
    }
}

/// Renders the combined throw sequence, opponent window then agent window.
impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut digits = Vec::new();
        let mut key = self.0;
        while key > 0 {
            digits.push((key % 4) as u8 - 1);
            key /= 4;
        }
        for digit in digits.into_iter().rev() {
            write!(f, "{}", Throw::from(digit))?;
        }
        Ok(())
    }
}
