//! # Bestiary
//!
//! A procedural monster generator for old-school tabletop campaigns.
//!
//! ## Architecture Overview
//!
//! Bestiary synthesizes complete creature records (combat statistics,
//! narrative descriptions, encounter frequencies, treasure hoards, and lair
//! descriptions) from a small set of seed templates plus weighted random
//! tables. The crate is organized around a few key concepts:
//!
//! - **Model**: immutable value objects describing requests and the
//!   generated records ([`Monster`] and its sub-blocks)
//! - **Synthesis Engine**: the per-request orchestrator that dispatches
//!   between template-based and fully random synthesis
//! - **Specialist Generators**: leaf components deriving encounter,
//!   treasure, and lair details from a creature's characteristics
//! - **Static Tables**: process-wide read-only lookup data driving every
//!   weighted choice
//!
//! Every generation call is a pure function of its inputs and a random
//! source; nothing is persisted and no call mutates shared state. Callers
//! supply a seeded [`rand::rngs::StdRng`] (see
//! [`generation::utils::seed_rng`]) when reproducible output is wanted.

pub mod generation;
pub mod model;

pub use generation::{EncounterGenerator, LairGenerator, MonsterGenerator, TreasureGenerator};
pub use model::{
    Algorithm, ChallengeRating, Complexity, EncounterInfo, Environment, GenerationFilters,
    GenerationRequest, LairInfo, LairSize, Monster, MonsterStats, MonsterType, TreasureInfo,
};

/// Core error type for the bestiary crate.
#[derive(thiserror::Error, Debug)]
pub enum BestiaryError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A request field held a value outside its fixed enumeration
    #[error("Invalid request value: {0}")]
    InvalidValue(String),

    /// Monster synthesis failed; the whole batch is abandoned
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the bestiary codebase.
pub type BestiaryResult<T> = Result<T, BestiaryError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed generation policy constants.
///
/// These are deliberate design choices of the synthesis engine, not
/// configuration knobs.
pub mod policy {
    /// Probability that the `balanced` algorithm takes the template path.
    pub const BALANCED_TEMPLATE_CHANCE: f64 = 0.7;

    /// Probability of prefixing a randomly synthesized name with a modifier.
    pub const NAME_PREFIX_CHANCE: f64 = 0.6;

    /// Probability of appending a root word to a randomly synthesized name.
    pub const NAME_SUFFIX_CHANCE: f64 = 0.4;

    /// Probability that a `moderate` overlay grants an extra ability.
    pub const MODERATE_EXTRA_ABILITY_CHANCE: f64 = 0.4;

    /// Probability that a `complex` overlay prefixes the template name.
    pub const COMPLEX_NAME_PREFIX_CHANCE: f64 = 0.5;

    /// Probability that a type-affinity ability is picked up.
    pub const TYPE_ABILITY_CHANCE: f64 = 0.5;

    /// Per-currency inclusion chance for hoard coin entries.
    pub const HOARD_COIN_CHANCE: f64 = 0.6;

    /// Lair chance is always clamped into this inclusive range.
    pub const LAIR_CHANCE_MIN: u8 = 5;
    /// See [`LAIR_CHANCE_MIN`].
    pub const LAIR_CHANCE_MAX: u8 = 95;
}
