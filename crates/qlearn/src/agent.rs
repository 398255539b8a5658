use crate::*;

/// A single-session Q-learning player.
///
/// Owns every piece of state the learning loop mutates: both history
/// windows, the Q-table, the policy RNG, and the pending transition
/// awaiting its reward. One agent serves one opponent; concurrent
/// sessions are independent instances, and dropping the agent ends the
/// session. Nothing is persisted.
///
/// # Protocol
///
/// The caller (a match driver) invokes [`Self::act`] once per round with
/// the opponent's previous throw and plays whatever comes back. Because
/// the reward for a throw is only knowable once the opponent responds,
/// each call first settles the previous round's transition, then selects
/// the next throw:
///
/// 1. push the opponent's throw into their window
/// 2. if both windows are full and a transition is pending, judge the
///    round we just learned the result of and back up its reward
/// 3. select the next throw (uniform-random during warm-up, epsilon-greedy
///    after), push it into our window, and remember the current state as
///    the next pending transition
///
/// Transitions recorded strictly before both windows fill are never
/// trained on; the final warm-up transition settles on the first full
/// round.
#[derive(Debug)]
pub struct Agent {
    seen: Recall,
    mine: Recall,
    table: Table,
    policy: Policy,
    learner: Learner,
    pending: Option<State>,
}

impl Agent {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            seen: Recall::new(config.history),
            mine: Recall::new(config.history),
            table: Table::default(),
            policy: match config.seed {
                Some(seed) => Policy::seeded(config.epsilon, seed),
                None => Policy::new(config.epsilon),
            },
            learner: Learner {
                alpha: config.alpha,
                gamma: config.gamma,
            },
            pending: None,
        })
    }

    /// Next throw, given the opponent's previous one.
    ///
    /// `None` means "opening call of the session, no prior throw exists".
    /// Passing `None` on any later call is a usage error, not a session
    /// reset; discard the agent and construct a fresh one instead.
    pub fn act(&mut self, seen: Option<Throw>) -> anyhow::Result<Throw> {
        match seen {
            None if self.mine.is_empty() => Ok(self.open()),
            None => anyhow::bail!("empty throw after the opening call"),
            Some(throw) => Ok(self.react(throw)),
        }
    }

    /// Wire entry point: one token in, one throw out.
    ///
    /// Accepts the single-character encoding (`"r"`, `"P"`, ...) or the
    /// empty sentinel for the opening call. Unrecognized tokens fail fast.
    pub fn reply(&mut self, token: &str) -> anyhow::Result<Throw> {
        match token.trim() {
            "" => self.act(None),
            t => self.act(Some(Throw::try_from(t).map_err(anyhow::Error::msg)?)),
        }
    }

    /// Read-only view of the learned values, for diagnostics and drivers.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Opening round: nothing to learn from yet.
    fn open(&mut self) -> Throw {
        let throw = self.policy.explore();
        self.mine.push(throw);
        throw
    }

    /// Every round after the first: record, settle one step behind, select.
    fn react(&mut self, seen: Throw) -> Throw {
        self.seen.push(seen);
        let current = State::from((&self.seen, &self.mine));
        let throw = if self.warming() {
            self.policy.explore()
        } else {
            if let Some(previous) = self.pending {
                let mine = self.mine.last().expect("throws precede a full window");
                let reward = Outcome::judge(seen, mine).utility();
                self.learner.update(&mut self.table, previous, mine, reward);
            }
            self.policy.choose(&mut self.table, current)
        };
        self.mine.push(throw);
        self.pending = Some(current);
        throw
    }

    /// True until both windows hold a full history.
    fn warming(&self) -> bool {
        !self.seen.is_full() || !self.mine.is_full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(config: Config) -> Agent {
        Agent::new(Config {
            seed: Some(1738),
            ..config
        })
        .unwrap()
    }

    #[test]
    fn opening_round_touches_nothing() {
        let mut agent = seeded(Config::default());
        let throw = agent.act(None).unwrap();
        assert!(Throw::all().contains(&throw));
        assert!(agent.table.is_empty());
        assert!(agent.pending.is_none());
    }

    #[test]
    fn sentinel_after_opening_is_an_error() {
        let mut agent = seeded(Config::default());
        agent.act(None).unwrap();
        assert!(agent.act(None).is_err());
    }

    #[test]
    fn garbage_tokens_fail_fast() {
        let mut agent = seeded(Config::default());
        assert!(agent.reply("").is_ok());
        assert!(agent.reply("lizard").is_err());
        assert!(agent.reply("rock").is_ok());
    }

    #[test]
    fn windows_stay_bounded() {
        let mut agent = seeded(Config::default());
        agent.act(None).unwrap();
        for _ in 0..20 {
            agent.act(Some(Throw::R)).unwrap();
            assert!(agent.seen.len() <= 3);
            assert!(agent.mine.len() <= 3);
        }
    }

    #[test]
    fn warm_up_never_writes_the_table() {
        let mut agent = seeded(Config::default());
        agent.act(None).unwrap();
        // H = 3: rounds 2 and 3 still have short windows
        agent.act(Some(Throw::R)).unwrap();
        assert!(agent.table.is_empty());
        agent.act(Some(Throw::P)).unwrap();
        assert!(agent.table.is_empty());
    }

    #[test]
    fn first_full_round_settles_the_last_warmup_transition() {
        let mut agent = seeded(Config::default());
        agent.act(None).unwrap();
        agent.act(Some(Throw::R)).unwrap();
        agent.act(Some(Throw::P)).unwrap();
        let pending = agent.pending.unwrap();
        agent.act(Some(Throw::S)).unwrap();
        // the round-3 state (partial windows) received the one update so far
        assert!(agent.table.get(pending).is_some());
    }

    #[test]
    fn greedy_tiebreak_opens_with_rock() {
        // H = 1, ε = 0: the second decision is pure argmax over an
        // all-zero record, which the fixed order resolves to R
        let mut agent = seeded(Config {
            history: 1,
            epsilon: 0.,
            ..Config::default()
        });
        agent.act(None).unwrap();
        assert!(agent.act(Some(Throw::R)).unwrap() == Throw::R);
    }

    #[test]
    fn seeded_sessions_reproduce() {
        let script = [Throw::R, Throw::P, Throw::S, Throw::R, Throw::R, Throw::P];
        let mut a = seeded(Config::default());
        let mut b = seeded(Config::default());
        assert!(a.act(None).unwrap() == b.act(None).unwrap());
        for throw in script {
            assert!(a.act(Some(throw)).unwrap() == b.act(Some(throw)).unwrap());
        }
    }

    #[test]
    fn converges_on_the_counter_to_a_constant_opponent() {
        // against an opponent who always throws Rock, the learned policy
        // should trend toward Paper; exploration keeps a random floor, so
        // assert a strong majority over the tail rather than every round
        let mut agent = seeded(Config {
            history: 1,
            ..Config::default()
        });
        agent.act(None).unwrap();
        let throws = (0..1000)
            .map(|_| agent.act(Some(Throw::R)).unwrap())
            .collect::<Vec<_>>();
        let paper = throws
            .iter()
            .rev()
            .take(100)
            .filter(|&&t| t == Throw::P)
            .count();
        assert!(paper > 50, "paper in last 100 rounds: {}", paper);
    }
}
