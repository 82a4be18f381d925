//! Estimation-of-Distribution Algorithm (EDA) model contract.
//!
//! An EDA replaces recombination with a learned probabilistic model: the
//! outer loop feeds accepted individuals to the model and samples new
//! candidates from it. This module defines the seam between that loop and
//! a model; [`crate::paco::PacoModel`] is one implementation.
//!
//! # References
//!
//! - Larrañaga & Lozano (2002), *Estimation of Distribution Algorithms*
//! - Ceberio, Irurozki, Mendiburu & Lozano (2012), "A review on Estimation
//!   of Distribution Algorithms in Permutation-based Combinatorial
//!   Optimization Problems"

use rand::Rng;

use crate::error::Result;

/// A probabilistic model that learns from selected individuals and samples
/// new ones.
///
/// One instance is not safe to drive from several threads at once; callers
/// serialize `update` and `sample` calls.
pub trait SamplingModel {
    /// The individual representation.
    type Solution;

    /// Forgets everything learned so far.
    fn initialize(&mut self);

    /// Writes a newly sampled individual into `dest`.
    fn sample<R: Rng>(&mut self, dest: &mut Self::Solution, rng: &mut R) -> Result<()>;

    /// Learns from `selected`, in iteration order.
    fn update<'a, I>(&mut self, selected: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Self::Solution>,
        Self::Solution: 'a;
}
