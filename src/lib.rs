//! Population-based Ant Colony Optimization as an EDA sampling model.
//!
//! Provides a probabilistic model over permutation-encoded search spaces
//! for Estimation-of-Distribution Algorithms:
//!
//! - **EDA contract**: [`eda::SamplingModel`], the `initialize` / `update` /
//!   `sample` seam an outer optimization loop drives.
//! - **PACO**: [`paco::PacoModel`], a pheromone table derived from a
//!   bounded, age-ordered population of accepted permutations, sampled by
//!   an ant walk with the pseudo-random-proportional rule.
//!
//! # Architecture
//!
//! The crate contains no domain-specific concepts and owns no random
//! number generator: callers pass one to every `sample` call. Problems
//! plug in through [`paco::PermutationProblem`]; evaluation and selection
//! of individuals stay with the caller.

pub mod eda;
pub mod error;
pub mod paco;

pub use error::{EdaError, Result};
