//! Population-based Ant Colony Optimization (PACO) sampling model.
//!
//! A probabilistic model for permutation EDAs. The pheromone table is
//! derived from which consecutive pairs occur in a bounded, age-ordered
//! population of accepted permutations; new permutations are built by an
//! ant walk using the pseudo-random-proportional rule.
//!
//! # Key Types
//!
//! - [`PacoConfig`]: Model parameters (length, population capacity, q0, beta, tau_max)
//! - [`PacoModel`]: The sampling model (`initialize`, `update`, `sample`)
//! - [`PermutationProblem`]: Problem hooks (permutation view, heuristic cost, append hook)
//! - [`NodeSet`]: O(1) removable set of unplaced nodes used by each ant
//! - [`BoundedEdgeMultiset`]: Per-source sorted edge counts backing the pheromone table
//!
//! # References
//!
//! - Guntsch & Middendorf (2002), "A Population Based Approach for ACO"
//! - Dorigo & Gambardella (1997), "Ant Colony System"

mod config;
mod edge_set;
mod model;
mod node_set;
mod types;

pub use config::{PacoConfig, MAX_EDGE_SLOTS, MAX_LENGTH};
pub use edge_set::{walk_edges, BoundedEdgeMultiset, Source};
pub use model::PacoModel;
pub use node_set::NodeSet;
pub use types::{HeuristicPermutation, PermutationProblem, PlainPermutation};
