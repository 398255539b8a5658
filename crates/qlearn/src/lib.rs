//! Tabular Q-learning agent for Rock-Paper-Scissors.
//!
//! The agent learns an opponent's behavioral pattern online: each round's
//! state is the pair of bounded move-history windows (theirs and ours),
//! selection is epsilon-greedy over a lazily-populated Q-table, and the
//! one-step backup lands one round late because a throw's reward is only
//! knowable once the opponent responds to it.
//!
//! # Module Structure
//!
//! Each file maps to one responsibility of the learning loop:
//! - [`Throw`] — the three-symbol action alphabet and its beats-relation
//! - [`Outcome`] — win/draw/loss judgment and the ±1/0 reward signal
//! - [`Recall`] — bounded oldest-first history windows
//! - [`State`] — collision-free key packed from both windows
//! - [`Table`] — per-state value records with a fixed R, P, S tie-break
//! - [`Policy`] — epsilon-greedy selection over the table, seedable RNG
//! - [`Learner`] — the `(1 - α)·q + α·(r + γ·max)` backup
//! - [`Config`] — session hyperparameters, validated at construction
//! - [`Agent`] — per-invocation protocol tying the above together
//!
//! # Example
//!
//! ```
//! use rsb_qlearn::Agent;
//! use rsb_qlearn::Config;
//! use rsb_qlearn::Throw;
//!
//! let mut agent = Agent::new(Config {
//!     seed: Some(7),
//!     ..Config::default()
//! })?;
//! let opening = agent.act(None)?;
//! let next = agent.act(Some(Throw::R))?;
//! assert!(Throw::all().contains(&opening));
//! assert!(Throw::all().contains(&next));
//! # Ok::<(), anyhow::Error>(())
//! ```

mod agent;
mod config;
mod learner;
mod outcome;
mod policy;
mod recall;
mod state;
mod table;
mod throw;

pub use agent::*;
pub use config::*;
pub use learner::*;
pub use outcome::*;
pub use policy::*;
pub use recall::*;
pub use state::*;
pub use table::*;
pub use throw::*;
