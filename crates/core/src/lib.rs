//! Core type aliases, traits, and constants for roboshambo.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the roboshambo workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Q-value estimates, rewards, and payoffs.
pub type Utility = f32;
/// Exploration rates and sampling probabilities.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// STATE SPACE PARAMETERS
// ============================================================================
/// Number of previous throws per side folded into the state key.
pub const HISTORY_LENGTH: usize = 3;
/// Hard cap on history length: 2H base-4 digits must fit in a u32 state key.
pub const MAX_HISTORY: usize = 8;
/// Number of distinct throws (rock, paper, scissors).
pub const THROWS: usize = 3;

// ============================================================================
// Q-LEARNING HYPERPARAMETERS
// One-step tabular backup: q' = (1 - α)·q + α·(r + γ·max).
// ============================================================================
/// Learning rate (α) - weight of the new sample against the old estimate.
pub const LEARNING_RATE: Utility = 0.15;
/// Discount factor (γ) - weight of the bootstrapped future value.
pub const DISCOUNT_FACTOR: Utility = 0.8;
/// Exploration rate (ε) - probability of a uniformly random throw.
pub const EXPLORATION_RATE: Probability = 0.1;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "telemetry")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
