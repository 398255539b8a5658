use rsb_core::Arbitrary;

/// A throw in Rock-Paper-Scissors.
///
/// The three throws form a cycle: R beats S, S beats P, P beats R.
/// The enumeration order of [`Self::all`] (R, then P, then S) is the single
/// fixed tie-break order used everywhere one throw must be chosen among
/// equals, which keeps seeded sessions reproducible.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Throw {
    #[default]
    R = 0,
    P = 1,
    S = 2,
}

impl Throw {
    /// All three throws in canonical (tie-break) order.
    pub const fn all() -> [Throw; 3] {
        [Throw::R, Throw::P, Throw::S]
    }
    /// Standard beats-relation: R beats S, S beats P, P beats R.
    pub fn beats(&self, other: &Throw) -> bool {
        matches!(
            (self, other),
            (Throw::R, Throw::S) | (Throw::S, Throw::P) | (Throw::P, Throw::R)
        )
    }
    /// The throw that beats this one.
    pub fn counter(&self) -> Throw {
        match self {
            Throw::R => Throw::P,
            Throw::P => Throw::S,
            Throw::S => Throw::R,
        }
    }
}

/// u8 isomorphism
impl From<u8> for Throw {
    fn from(n: u8) -> Throw {
        match n {
            0 => Throw::R,
            1 => Throw::P,
            2 => Throw::S,
            _ => unreachable!("invalid throw"),
        }
    }
}
impl From<Throw> for u8 {
    fn from(t: Throw) -> u8 {
        t as u8
    }
}

/// index into per-state value records
impl From<Throw> for usize {
    fn from(t: Throw) -> usize {
        t as usize
    }
}

/// str isomorphism
impl TryFrom<&str> for Throw {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "r" | "rock" => Ok(Throw::R),
            "p" | "paper" => Ok(Throw::P),
            "s" | "scissors" => Ok(Throw::S),
            _ => Err(format!("invalid throw str: {}", s)),
        }
    }
}

impl std::fmt::Display for Throw {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Throw::R => write!(f, "R"),
            Throw::P => write!(f, "P"),
            Throw::S => write!(f, "S"),
        }
    }
}

impl Arbitrary for Throw {
    fn random() -> Self {
        use rand::seq::IndexedRandom;
        *Throw::all()
            .choose(&mut rand::rng())
            .expect("three throws to choose from")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for throw in Throw::all() {
            assert!(throw == Throw::from(u8::from(throw)));
        }
    }

    #[test]
    fn bijective_str() {
        for throw in Throw::all() {
            assert!(throw == Throw::try_from(throw.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!(Throw::try_from("lizard").is_err());
        assert!(Throw::try_from("").is_err());
    }

    #[test]
    fn arbitrary_is_valid() {
        for _ in 0..8 {
            assert!(Throw::all().contains(&Throw::random()));
        }
    }

    #[test]
    fn beats_is_cyclic() {
        for throw in Throw::all() {
            assert!(throw.counter().beats(&throw));
            assert!(!throw.beats(&throw.counter()));
            assert!(!throw.beats(&throw));
        }
    }
}
