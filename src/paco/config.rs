//! PACO configuration.

use crate::error::{EdaError, Result};

/// Largest supported permutation length.
pub const MAX_LENGTH: usize = 1_000_000;

/// Largest number of edge slots, `(length + 1) * capacity`, a model may
/// allocate.
pub const MAX_EDGE_SLOTS: usize = 1 << 28;

/// Configuration for the population-based ACO sampling model.
///
/// # Examples
///
/// ```
/// use u_paco::paco::PacoConfig;
///
/// let config = PacoConfig::default()
///     .with_length(20)
///     .with_capacity(8)
///     .with_q0(0.5)
///     .with_beta(1.0)
///     .with_tau_max(1.0);
/// assert!(config.validate().is_ok());
/// assert!((config.tau0() - 1.0 / 19.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PacoConfig {
    /// Permutation length `L`. Must be in `[2, MAX_LENGTH]`.
    pub length: usize,

    /// Population capacity `K`: how many accepted permutations contribute
    /// pheromone at once.
    pub capacity: usize,

    /// Probability of a greedy (exploiting) construction step, in `[0, 1]`.
    ///
    /// `1.0` always picks the most desirable candidate; `0.0` always draws
    /// proportionally to desirability.
    pub q0: f64,

    /// Heuristic exponent. `0.0` ignores the heuristic cost entirely.
    pub beta: f64,

    /// Pheromone of an edge used by every population member.
    /// Must be at least `1 / (L - 1)`.
    pub tau_max: f64,
}

impl Default for PacoConfig {
    fn default() -> Self {
        Self {
            length: 10,
            capacity: 5,
            q0: 0.9,
            beta: 2.0,
            tau_max: 1.0,
        }
    }
}

impl PacoConfig {
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_q0(mut self, q0: f64) -> Self {
        self.q0 = q0;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_tau_max(mut self, tau_max: f64) -> Self {
        self.tau_max = tau_max;
        self
    }

    /// Initial (and minimum) pheromone: `1 / (L - 1)`.
    pub fn tau0(&self) -> f64 {
        1.0 / (self.length as f64 - 1.0)
    }

    /// Pheromone added per population member using an edge:
    /// `(tau_max - tau0) / K`.
    pub fn pheromone_step(&self) -> f64 {
        (self.tau_max - self.tau0()) / self.capacity as f64
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.length < 2 || self.length > MAX_LENGTH {
            return Err(EdaError::invalid(
                "length",
                format!("must be in [2, {MAX_LENGTH}], got {}", self.length),
            ));
        }
        if self.capacity == 0 {
            return Err(EdaError::invalid("capacity", "must be positive"));
        }
        match (self.length + 1).checked_mul(self.capacity) {
            Some(slots) if slots <= MAX_EDGE_SLOTS => {}
            _ => {
                return Err(EdaError::invalid(
                    "capacity",
                    format!(
                        "{} edge slots per source over {} sources exceeds {MAX_EDGE_SLOTS}",
                        self.capacity,
                        self.length + 1
                    ),
                ))
            }
        }
        if !self.q0.is_finite() || !(0.0..=1.0).contains(&self.q0) {
            return Err(EdaError::invalid(
                "q0",
                format!("must be in [0, 1], got {}", self.q0),
            ));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(EdaError::invalid(
                "beta",
                format!("must be finite and non-negative, got {}", self.beta),
            ));
        }
        let tau0 = self.tau0();
        if !tau0.is_finite() || tau0 <= 0.0 {
            return Err(EdaError::invalid(
                "tau0",
                format!("derived value {tau0} must be finite and positive"),
            ));
        }
        if !self.tau_max.is_finite() || self.tau_max < tau0 {
            return Err(EdaError::invalid(
                "tau_max",
                format!("must be finite and at least {tau0}, got {}", self.tau_max),
            ));
        }
        let step = self.pheromone_step();
        if !step.is_finite() || step <= 0.0 {
            return Err(EdaError::invalid(
                "pheromone_step",
                format!("derived value {step} must be finite and positive"),
            ));
        }
        Ok(())
    }
}
