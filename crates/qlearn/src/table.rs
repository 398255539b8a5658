use crate::*;
use rsb_core::THROWS;
use rsb_core::Utility;
use std::collections::BTreeMap;

/// Lazily-populated mapping from state to per-throw value estimates.
///
/// Records are created all-zero on first access and never evicted; the
/// table grows monotonically over a session, bounded by the 3^(2H)
/// reachable keys. `BTreeMap` keeps iteration and debug output in a
/// stable order, while tie-breaks in [`Self::best`] come from the fixed
/// [`Throw::all`] enumeration rather than map order.
#[derive(Debug, Default, Clone)]
pub struct Table {
    estimates: BTreeMap<State, [Utility; THROWS]>,
}

impl Table {
    /// Existing record for this state, or a fresh all-zero one.
    pub fn get_or_init(&mut self, state: State) -> &mut [Utility; THROWS] {
        self.estimates.entry(state).or_default()
    }
    /// Read-only view of a record; None if the state was never touched.
    pub fn get(&self, state: State) -> Option<&[Utility; THROWS]> {
        self.estimates.get(&state)
    }
    /// Number of states visited so far.
    pub fn len(&self) -> usize {
        self.estimates.len()
    }
    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }
    /// Highest-valued throw for this state under strict comparison.
    ///
    /// Ties resolve to the first maximum in R, P, S order, so a fresh
    /// all-zero record yields R. Touching the record here mirrors the
    /// lazy-initialization contract: greedy reads also create entries.
    pub fn best(&mut self, state: State) -> Throw {
        let record = *self.get_or_init(state);
        Throw::all()
            .into_iter()
            .fold(Throw::R, |best, throw| {
                if record[usize::from(throw)] > record[usize::from(best)] {
                    throw
                } else {
                    best
                }
            })
    }
}
