//! Estimates a hero's probability of winning a live Texas Hold'em hand.
//!
//! The caller owns a [`equity::Session`] holding whatever the table shows:
//! the hero's hole cards, the community cards revealed so far, and the
//! number of players still in the hand. An [`equity::Estimator`] reads the
//! session and runs Monte Carlo deals over the unseen remainder of the
//! deck, scoring every completion with the approximate evaluator in
//! [`cards`]. The crate has no network, file, or page-scraping surface;
//! feeding the session and rendering the probability are the embedding
//! application's job.

pub mod cards;
pub mod equity;
pub mod error;

pub use error::Error;

/// Win-probability estimates, in [0, 1].
pub type Probability = f64;

/// Monte Carlo deals per estimate unless the caller overrides.
pub const TRIALS: usize = 10_000;

/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Initialize terminal logging for the CLI.
#[cfg(feature = "cli")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
