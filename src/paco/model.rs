//! Population-based ACO sampling model.
//!
//! # Algorithm
//!
//! Pheromone is not evaporated but derived: the pheromone of edge `a -> b`
//! is `tau0 + count(a, b) * step`, where `count` is how many members of the
//! current population contain `b` directly after `a` (or start with `b`
//! when `a` is the virtual start). The population is an age-ordered ring
//! buffer of `K` permutations; when full, the oldest member leaves.
//!
//! An ant builds a permutation one position at a time. At each step it
//! exploits with probability `q0` (take the candidate maximizing
//! `tau * cost^-beta`) and otherwise explores (draw a candidate with
//! probability proportional to that desirability).
//!
//! # References
//!
//! - Guntsch & Middendorf (2002), "A Population Based Approach for ACO"
//! - Dorigo & Gambardella (1997), "Ant Colony System" (pseudo-random
//!   proportional rule)

use rand::Rng;
use tracing::{debug, trace};

use super::config::PacoConfig;
use super::edge_set::{BoundedEdgeMultiset, Source};
use super::node_set::NodeSet;
use super::types::PermutationProblem;
use crate::eda::SamplingModel;
use crate::error::{EdaError, Result};

/// PACO sampling model over permutations of `0..L`.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_paco::paco::{PacoConfig, PacoModel, PlainPermutation};
///
/// let config = PacoConfig::default().with_length(6).with_capacity(3);
/// let mut model = PacoModel::new(PlainPermutation, config).unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
///
/// model.update([&vec![0, 1, 2, 3, 4, 5]]).unwrap();
///
/// let mut ant = vec![0; 6];
/// model.sample(&mut ant, &mut rng).unwrap();
/// let mut sorted = ant.clone();
/// sorted.sort_unstable();
/// assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct PacoModel<P> {
    problem: P,
    config: PacoConfig,
    tau0: f64,
    pheromone_step: f64,
    edges: BoundedEdgeMultiset,
    nodes: NodeSet,
    /// Ring buffer slots; only the first `population_len` hold members.
    population: Vec<Vec<usize>>,
    population_len: usize,
    write_index: usize,
    cumulative: Vec<f64>,
    seen: Vec<bool>,
}

impl<P: PermutationProblem> PacoModel<P> {
    /// Creates an initialized model with an empty population.
    ///
    /// Fails with [`EdaError::InvalidArgument`] if `config` does not
    /// validate.
    pub fn new(problem: P, config: PacoConfig) -> Result<Self> {
        config.validate()?;
        let length = config.length;
        let capacity = config.capacity;
        debug!(
            length,
            capacity,
            q0 = config.q0,
            beta = config.beta,
            tau_max = config.tau_max,
            "created PACO model"
        );
        Ok(Self {
            problem,
            tau0: config.tau0(),
            pheromone_step: config.pheromone_step(),
            edges: BoundedEdgeMultiset::new(length, capacity),
            nodes: NodeSet::new(length),
            population: Vec::with_capacity(capacity),
            population_len: 0,
            write_index: 0,
            cumulative: Vec::with_capacity(length),
            seen: vec![false; length],
            config,
        })
    }

    pub fn config(&self) -> &PacoConfig {
        &self.config
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Minimum pheromone `1 / (L - 1)`.
    pub fn tau0(&self) -> f64 {
        self.tau0
    }

    pub fn tau_max(&self) -> f64 {
        self.config.tau_max
    }

    pub fn pheromone_step(&self) -> f64 {
        self.pheromone_step
    }

    /// Read-only view of the edge counts behind the pheromone table.
    pub fn edges(&self) -> &BoundedEdgeMultiset {
        &self.edges
    }

    /// Number of members currently in the population (at most `K`).
    pub fn population_len(&self) -> usize {
        self.population_len
    }

    /// Iterates population members from oldest to newest.
    pub fn population(&self) -> impl Iterator<Item = &[usize]> + '_ {
        let capacity = self.config.capacity;
        let oldest = if self.population_len == capacity {
            self.write_index
        } else {
            0
        };
        (0..self.population_len).map(move |i| self.population[(oldest + i) % capacity].as_slice())
    }

    /// Pheromone of edge `from -> to`: `tau0 + count * step`.
    pub fn pheromone(&self, from: Source, to: usize) -> f64 {
        self.tau0 + self.edges.get_count(from, to) as f64 * self.pheromone_step
    }

    /// Clears the pheromone table and empties the population.
    pub fn initialize(&mut self) {
        self.edges.clear();
        self.population_len = 0;
        self.write_index = 0;
        debug!("initialized PACO model");
    }

    /// Adds each selected individual to the population, in order.
    ///
    /// When the population is full, the oldest member's edges are retracted
    /// before the newcomer takes its slot. Each individual is validated as
    /// a permutation of `0..L` before any state changes; earlier individuals
    /// of the same batch stay applied when a later one is rejected.
    pub fn update<'a, I>(&mut self, selected: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a P::Solution>,
        P::Solution: 'a,
    {
        let capacity = self.config.capacity;
        for solution in selected {
            let permutation = self.problem.permutation(solution);
            check_permutation(permutation, &mut self.seen)?;

            let slot = self.write_index;
            if self.population_len == capacity {
                self.edges.remove_permutation(&self.population[slot])?;
                trace!(slot, "evicted oldest population member");
            }
            if slot < self.population.len() {
                self.population[slot].copy_from_slice(permutation);
            } else {
                self.population.push(permutation.to_vec());
            }
            self.edges.add_permutation(&self.population[slot])?;

            if self.population_len < capacity {
                self.population_len += 1;
            }
            self.write_index = (slot + 1) % capacity;
        }
        Ok(())
    }

    /// Constructs one permutation into `dest` by an ant walk.
    ///
    /// Fails with [`EdaError::LengthMismatch`] if the permutation view of
    /// `dest` does not have length `L`.
    pub fn sample<R: Rng>(&mut self, dest: &mut P::Solution, rng: &mut R) -> Result<()> {
        let length = self.config.length;
        let actual = self.problem.permutation(dest).len();
        if actual != length {
            return Err(EdaError::LengthMismatch {
                expected: length,
                actual,
            });
        }

        self.nodes.fill(rng);
        let mut last = Source::Start;

        for position in 0..length - 1 {
            let explore = rng.random::<f64>() >= self.config.q0;
            let chosen = if explore {
                self.explore_step(last, dest, position, rng)
            } else {
                self.exploit_step(last, dest, position)
            };
            self.commit(chosen, dest, position);
            last = Source::Node(chosen);
        }

        if let Some(node) = self.nodes.delete_last() {
            self.problem.permutation_mut(dest)[length - 1] = node;
            self.problem.on_append(node, dest, length - 1);
        }
        Ok(())
    }

    /// `tau(from, candidate) * cost^-beta`.
    fn desirability(
        &self,
        from: Source,
        candidate: usize,
        dest: &P::Solution,
        position: usize,
    ) -> f64 {
        let tau = self.pheromone(from, candidate);
        if self.config.beta == 0.0 {
            return tau;
        }
        let cost = self.problem.append_cost(candidate, dest, position);
        tau * cost.powf(-self.config.beta)
    }

    /// Greedy choice. Among equal desirabilities the last enumerated
    /// candidate wins; NaN values never win.
    fn exploit_step(&self, from: Source, dest: &P::Solution, position: usize) -> usize {
        let mut best = self.nodes.get_at(0);
        let mut best_value = f64::NEG_INFINITY;
        for candidate in self.nodes.iter() {
            let value = self.desirability(from, candidate, dest, position);
            if value >= best_value {
                best = candidate;
                best_value = value;
            }
        }
        best
    }

    /// Roulette choice proportional to desirability.
    fn explore_step<R: Rng>(
        &mut self,
        from: Source,
        dest: &P::Solution,
        position: usize,
        rng: &mut R,
    ) -> usize {
        self.cumulative.clear();
        let mut total = 0.0;
        for slot in 0..self.nodes.len() {
            let candidate = self.nodes.get_at(slot);
            total += self.desirability(from, candidate, dest, position);
            self.cumulative.push(total);
        }
        // rounding must never let the target overshoot the last entry
        if let Some(tail) = self.cumulative.last_mut() {
            *tail = f64::INFINITY;
        }

        let target = rng.random::<f64>() * total;
        let slot = self
            .cumulative
            .partition_point(|&c| c <= target)
            .min(self.nodes.len() - 1);
        self.nodes.get_at(slot)
    }

    fn commit(&mut self, node: usize, dest: &mut P::Solution, position: usize) {
        self.problem.permutation_mut(dest)[position] = node;
        self.problem.on_append(node, dest, position);
        self.nodes.delete_node(node);
    }
}

impl<P: PermutationProblem> SamplingModel for PacoModel<P> {
    type Solution = P::Solution;

    fn initialize(&mut self) {
        PacoModel::initialize(self);
    }

    fn sample<R: Rng>(&mut self, dest: &mut P::Solution, rng: &mut R) -> Result<()> {
        PacoModel::sample(self, dest, rng)
    }

    fn update<'a, I>(&mut self, selected: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a P::Solution>,
        P::Solution: 'a,
    {
        PacoModel::update(self, selected)
    }
}

/// Checks that `permutation` contains every value of `0..seen.len()` once.
/// `seen` is scratch space and is left all `false`.
fn check_permutation(permutation: &[usize], seen: &mut [bool]) -> Result<()> {
    let length = seen.len();
    if permutation.len() != length {
        return Err(EdaError::LengthMismatch {
            expected: length,
            actual: permutation.len(),
        });
    }
    let mut offending = None;
    for &value in permutation {
        match seen.get_mut(value) {
            Some(flag) if !*flag => *flag = true,
            _ => {
                offending = Some(value);
                break;
            }
        }
    }
    seen.fill(false);
    match offending {
        Some(value) => Err(EdaError::InvalidPermutation { value, length }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paco::{HeuristicPermutation, PlainPermutation};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;

    fn model(length: usize, capacity: usize) -> PacoModel<PlainPermutation> {
        let config = PacoConfig::default()
            .with_length(length)
            .with_capacity(capacity)
            .with_tau_max(1.0);
        PacoModel::new(PlainPermutation, config).unwrap()
    }

    fn is_permutation(p: &[usize]) -> bool {
        let mut sorted = p.to_vec();
        sorted.sort_unstable();
        sorted.iter().enumerate().all(|(i, &v)| i == v)
    }

    fn all_edges(length: usize) -> impl Iterator<Item = (Source, usize)> {
        (0..length)
            .map(|to| (Source::Start, to))
            .chain((0..length).flat_map(move |from| (0..length).map(move |to| (Source::Node(from), to))))
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = PacoConfig::default().with_length(1);
        assert!(matches!(
            PacoModel::new(PlainPermutation, config),
            Err(EdaError::InvalidArgument { name: "length", .. })
        ));
    }

    #[test]
    fn test_initial_pheromone_is_tau0() {
        let model = model(5, 3);
        assert!((model.tau0() - 0.25).abs() < 1e-12);
        for (from, to) in all_edges(5) {
            assert_eq!(model.pheromone(from, to), model.tau0());
        }
    }

    #[test]
    fn test_full_population_reaches_tau_max() {
        let mut model = model(4, 3);
        let p = vec![1, 3, 0, 2];
        model.update([&p, &p, &p]).unwrap();
        assert!((model.pheromone(Source::Start, 1) - model.tau_max()).abs() < 1e-12);
        assert!((model.pheromone(Source::Node(3), 0) - model.tau_max()).abs() < 1e-12);
        assert_eq!(model.pheromone(Source::Node(1), 0), model.tau0());
    }

    #[test]
    fn test_pheromone_stays_in_bounds() {
        let mut model = model(6, 4);
        let mut rng = StdRng::seed_from_u64(9);
        let mut ant = vec![0; 6];
        for _ in 0..30 {
            model.sample(&mut ant, &mut rng).unwrap();
            model.update([&ant]).unwrap();
            for (from, to) in all_edges(6) {
                let tau = model.pheromone(from, to);
                assert!(tau >= model.tau0() - 1e-12 && tau <= model.tau_max() + 1e-12);
            }
        }
    }

    #[test]
    fn test_population_grows_to_capacity() {
        let mut model = model(4, 3);
        let members = [vec![0, 1, 2, 3], vec![1, 2, 3, 0], vec![2, 3, 0, 1]];
        for (i, member) in members.iter().enumerate() {
            model.update([member]).unwrap();
            assert_eq!(model.population_len(), i + 1);
        }
        let listed: Vec<Vec<usize>> = model.population().map(<[usize]>::to_vec).collect();
        assert_eq!(listed, members.to_vec());
    }

    #[test]
    fn test_overflow_evicts_oldest() {
        let mut model = model(4, 2);
        let first = vec![0, 1, 2, 3];
        let second = vec![3, 2, 1, 0];
        let third = vec![1, 0, 3, 2];
        model.update([&first, &second]).unwrap();
        assert_eq!(model.edges().get_count(Source::Start, 0), 1);
        assert_eq!(model.edges().get_count(Source::Node(0), 1), 1);

        model.update([&third]).unwrap();
        assert_eq!(model.population_len(), 2);
        // first's edges are gone, second's remain, third's are in
        assert_eq!(model.edges().get_count(Source::Start, 0), 0);
        assert_eq!(model.edges().get_count(Source::Node(2), 3), 0);
        assert_eq!(model.edges().get_count(Source::Start, 3), 1);
        assert_eq!(model.edges().get_count(Source::Node(2), 1), 1);
        assert_eq!(model.edges().get_count(Source::Start, 1), 1);
        assert_eq!(model.edges().get_count(Source::Node(0), 3), 1);
        // 1 -> 0 is used by both second and third
        assert_eq!(model.edges().get_count(Source::Node(1), 0), 2);

        let listed: Vec<Vec<usize>> = model.population().map(<[usize]>::to_vec).collect();
        assert_eq!(listed, vec![second, third]);
    }

    #[test]
    fn test_eviction_matches_fresh_model() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut aged = model(7, 3);
        let mut ant = vec![0; 7];
        let mut history = Vec::new();
        for _ in 0..10 {
            aged.sample(&mut ant, &mut rng).unwrap();
            aged.update([&ant]).unwrap();
            history.push(ant.clone());
        }

        let mut fresh = model(7, 3);
        fresh.update(&history[history.len() - 3..]).unwrap();
        assert_eq!(aged.edges(), fresh.edges());
    }

    #[test]
    fn test_initialize_resets_everything() {
        let mut model = model(5, 2);
        model.update([&vec![4, 3, 2, 1, 0], &vec![0, 1, 2, 3, 4]]).unwrap();
        model.initialize();
        assert_eq!(model.population_len(), 0);
        assert_eq!(model.population().count(), 0);
        assert_eq!(model.edges(), &BoundedEdgeMultiset::new(5, 2));

        // slots are reused without retracting stale members
        model.update([&vec![2, 0, 1, 4, 3]]).unwrap();
        assert_eq!(model.population_len(), 1);
        assert_eq!(model.edges().get_count(Source::Start, 2), 1);
    }

    #[test]
    fn test_update_rejects_non_permutations() {
        let mut model = model(4, 2);
        let before = model.edges().clone();
        assert_eq!(
            model.update([&vec![0, 1, 1, 3]]),
            Err(EdaError::InvalidPermutation {
                value: 1,
                length: 4
            })
        );
        assert_eq!(
            model.update([&vec![0, 1, 2, 7]]),
            Err(EdaError::InvalidPermutation {
                value: 7,
                length: 4
            })
        );
        assert_eq!(
            model.update([&vec![0, 1, 2]]),
            Err(EdaError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(model.edges(), &before);
        assert_eq!(model.population_len(), 0);
    }

    #[test]
    fn test_sample_rejects_wrong_length() {
        let mut model = model(4, 2);
        let mut rng = StdRng::seed_from_u64(0);
        let mut ant = vec![0; 3];
        assert_eq!(
            model.sample(&mut ant, &mut rng),
            Err(EdaError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_greedy_without_heuristic_yields_permutations() {
        // all pheromones equal: variation comes only from the shuffled order
        let config = PacoConfig::default()
            .with_length(4)
            .with_capacity(2)
            .with_q0(1.0)
            .with_beta(0.0);
        let mut model = PacoModel::new(PlainPermutation, config).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut ant = vec![0; 4];
        let mut distinct = std::collections::HashSet::new();
        for _ in 0..50 {
            model.sample(&mut ant, &mut rng).unwrap();
            assert!(is_permutation(&ant));
            distinct.insert(ant.clone());
        }
        assert!(distinct.len() > 1);
    }

    #[test]
    fn test_greedy_tie_goes_to_last_enumerated() {
        let config = PacoConfig::default()
            .with_length(9)
            .with_capacity(2)
            .with_q0(1.0)
            .with_beta(0.0);
        let mut model = PacoModel::new(PlainPermutation, config).unwrap();
        let mut rng = StdRng::seed_from_u64(31);
        let dest = vec![0; 9];
        for _ in 0..5 {
            model.nodes.fill(&mut rng);
            let nodes = model.nodes.clone();
            let expected = nodes.get_at(nodes.len() - 1);
            assert_eq!(model.exploit_step(Source::Start, &dest, 0), expected);
        }
    }

    #[test]
    fn test_greedy_follows_saturated_trail() {
        let config = PacoConfig::default()
            .with_length(6)
            .with_capacity(2)
            .with_q0(1.0)
            .with_beta(0.0);
        let mut model = PacoModel::new(PlainPermutation, config).unwrap();
        let trail = vec![4, 2, 0, 5, 1, 3];
        model.update([&trail]).unwrap();

        let mut rng = StdRng::seed_from_u64(17);
        let mut ant = vec![0; 6];
        for _ in 0..10 {
            model.sample(&mut ant, &mut rng).unwrap();
            assert_eq!(ant, trail);
        }
    }

    #[test]
    fn test_greedy_follows_heuristic() {
        // cost grows with distance from the previous value: greedy walks 0,1,2,...
        let problem = HeuristicPermutation::new(|candidate: usize, placed: &[usize]| {
            match placed.last() {
                Some(&prev) if candidate > prev => (candidate - prev) as f64,
                Some(_) => 100.0,
                None => 1.0 + candidate as f64,
            }
        });
        let config = PacoConfig::default()
            .with_length(8)
            .with_capacity(2)
            .with_q0(1.0)
            .with_beta(3.0);
        let mut model = PacoModel::new(problem, config).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let mut ant = vec![0; 8];
        model.sample(&mut ant, &mut rng).unwrap();
        assert_eq!(ant, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn test_exploration_prefers_pheromone() {
        let config = PacoConfig::default()
            .with_length(5)
            .with_capacity(1)
            .with_q0(0.0)
            .with_beta(0.0)
            .with_tau_max(100.0);
        let mut model = PacoModel::new(PlainPermutation, config).unwrap();
        model.update([&vec![3, 1, 4, 0, 2]]).unwrap();

        let mut rng = StdRng::seed_from_u64(8);
        let mut ant = vec![0; 5];
        let mut starts_with_trail = 0;
        for _ in 0..200 {
            model.sample(&mut ant, &mut rng).unwrap();
            assert!(is_permutation(&ant));
            if ant[0] == 3 {
                starts_with_trail += 1;
            }
        }
        // start -> 3 carries 100 of 101 total weight
        assert!(starts_with_trail > 180, "got {starts_with_trail}");
    }

    struct Recording {
        cost_calls: RefCell<Vec<(usize, usize)>>,
        appended: RefCell<Vec<usize>>,
    }

    impl PermutationProblem for Recording {
        type Solution = Vec<usize>;

        fn permutation<'a>(&self, solution: &'a Vec<usize>) -> &'a [usize] {
            solution
        }

        fn permutation_mut<'a>(&self, solution: &'a mut Vec<usize>) -> &'a mut [usize] {
            solution
        }

        fn append_cost(&self, candidate: usize, _solution: &Vec<usize>, position: usize) -> f64 {
            self.cost_calls.borrow_mut().push((candidate, position));
            1.0 + candidate as f64
        }

        fn on_append(&self, candidate: usize, solution: &mut Vec<usize>, position: usize) {
            assert_eq!(solution[position], candidate);
            self.appended.borrow_mut().push(candidate);
        }
    }

    #[test]
    fn test_append_cost_only_for_unplaced_candidates() {
        let problem = Recording {
            cost_calls: RefCell::new(Vec::new()),
            appended: RefCell::new(Vec::new()),
        };
        let config = PacoConfig::default()
            .with_length(7)
            .with_capacity(3)
            .with_q0(0.5)
            .with_beta(1.0);
        let mut model = PacoModel::new(problem, config).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        let mut ant = vec![0; 7];
        model.sample(&mut ant, &mut rng).unwrap();

        let problem = model.problem();
        assert_eq!(*problem.appended.borrow(), ant);
        for &(candidate, position) in problem.cost_calls.borrow().iter() {
            assert!(position < 6, "forced last step needs no cost");
            assert!(
                !ant[..position].contains(&candidate),
                "cost asked for placed node {candidate} at {position}"
            );
        }
        // every step scores each remaining candidate once
        let expected: usize = (2..=7).sum();
        assert_eq!(problem.cost_calls.borrow().len(), expected);
    }

    #[test]
    fn test_zero_beta_skips_heuristic() {
        let problem = Recording {
            cost_calls: RefCell::new(Vec::new()),
            appended: RefCell::new(Vec::new()),
        };
        let config = PacoConfig::default().with_length(5).with_beta(0.0);
        let mut model = PacoModel::new(problem, config).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut ant = vec![0; 5];
        model.sample(&mut ant, &mut rng).unwrap();
        assert!(model.problem().cost_calls.borrow().is_empty());
        assert_eq!(model.problem().appended.borrow().len(), 5);
    }

    #[test]
    fn test_overflowing_desirability_still_samples() {
        let problem = HeuristicPermutation::new(|_candidate: usize, _placed: &[usize]| 1e-300);
        let config = PacoConfig::default()
            .with_length(6)
            .with_q0(0.0)
            .with_beta(10.0);
        let mut model = PacoModel::new(problem, config).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let mut ant = vec![0; 6];
        for _ in 0..20 {
            model.sample(&mut ant, &mut rng).unwrap();
            assert!(is_permutation(&ant));
        }
    }

    #[test]
    fn test_sampling_model_trait() {
        fn drive<M: SamplingModel<Solution = Vec<usize>>>(model: &mut M, len: usize) -> Vec<usize> {
            let mut rng = StdRng::seed_from_u64(12);
            model.initialize();
            let mut ant = vec![0; len];
            model.sample(&mut ant, &mut rng).unwrap();
            model.update([&ant]).unwrap();
            ant
        }
        let mut model = model(9, 4);
        let ant = drive(&mut model, 9);
        assert!(is_permutation(&ant));
        assert_eq!(model.population_len(), 1);
    }

    #[test]
    fn test_minimal_eda_loop_improves() {
        // minimize displacement from the identity permutation
        fn cost(p: &[usize]) -> usize {
            p.iter().enumerate().map(|(i, &v)| i.abs_diff(v)).sum()
        }
        let config = PacoConfig::default()
            .with_length(8)
            .with_capacity(5)
            .with_q0(0.3)
            .with_beta(0.0)
            .with_tau_max(5.0);
        let mut model = PacoModel::new(PlainPermutation, config).unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut best = usize::MAX;
        let mut ant = vec![0; 8];
        for _ in 0..500 {
            model.sample(&mut ant, &mut rng).unwrap();
            let c = cost(&ant);
            if c <= best {
                best = c;
                model.update([&ant]).unwrap();
            }
        }
        assert!(best <= 12, "expected a near-sorted permutation, got cost {best}");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn prop_sample_is_permutation(
            length in 2usize..40,
            capacity in 1usize..6,
            q0 in 0.0f64..=1.0,
            beta in 0.0f64..4.0,
            seed in any::<u64>(),
        ) {
            let config = PacoConfig::default()
                .with_length(length)
                .with_capacity(capacity)
                .with_q0(q0)
                .with_beta(beta)
                .with_tau_max(2.0);
            let problem = HeuristicPermutation::new(|candidate: usize, _placed: &[usize]| {
                1.0 + (candidate % 7) as f64
            });
            let mut model = PacoModel::new(problem, config).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut ant = vec![0; length];
            for _ in 0..capacity + 2 {
                model.sample(&mut ant, &mut rng).unwrap();
                prop_assert!(is_permutation(&ant));
                model.update([&ant]).unwrap();
            }
            prop_assert_eq!(model.population_len(), capacity);
        }
    }
}
