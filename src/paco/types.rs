//! Problem-side extension points for the PACO model.

/// Ties a concrete solution representation to the PACO model.
///
/// The model only ever sees permutations of `0..L`. A problem whose native
/// solution is something richer (a schedule, a route with loads, ...)
/// exposes the permutation backing it and may steer construction with a
/// heuristic cost.
///
/// # Examples
///
/// ```ignore
/// struct Tsp { distances: Vec<Vec<f64>> }
///
/// impl PermutationProblem for Tsp {
///     type Solution = Vec<usize>;
///
///     fn permutation<'a>(&self, tour: &'a Vec<usize>) -> &'a [usize] { tour }
///     fn permutation_mut<'a>(&self, tour: &'a mut Vec<usize>) -> &'a mut [usize] { tour }
///
///     fn append_cost(&self, candidate: usize, tour: &Vec<usize>, position: usize) -> f64 {
///         match position {
///             0 => 1.0,
///             _ => self.distances[tour[position - 1]][candidate].max(1e-9),
///         }
///     }
/// }
/// ```
pub trait PermutationProblem {
    /// The solution representation.
    type Solution;

    /// Read view of the permutation backing `solution`.
    fn permutation<'a>(&self, solution: &'a Self::Solution) -> &'a [usize];

    /// Write view of the permutation backing `solution`. The model fills it
    /// position by position during construction.
    fn permutation_mut<'a>(&self, solution: &'a mut Self::Solution) -> &'a mut [usize];

    /// Heuristic cost of placing `candidate` at `position`, given the
    /// partially built `solution` whose positions `0..position` are final.
    ///
    /// Must be finite and strictly positive. The default returns `1.0`,
    /// which disables heuristic influence.
    fn append_cost(&self, _candidate: usize, _solution: &Self::Solution, _position: usize) -> f64 {
        1.0
    }

    /// Called after `candidate` has been written at `position`.
    ///
    /// The default is a no-op.
    fn on_append(&self, _candidate: usize, _solution: &mut Self::Solution, _position: usize) {}
}

/// A problem whose solutions are bare permutations, with no heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPermutation;

impl PermutationProblem for PlainPermutation {
    type Solution = Vec<usize>;

    fn permutation<'a>(&self, solution: &'a Vec<usize>) -> &'a [usize] {
        solution
    }

    fn permutation_mut<'a>(&self, solution: &'a mut Vec<usize>) -> &'a mut [usize] {
        solution
    }
}

/// Bare permutations steered by a cost closure.
///
/// The closure receives the candidate and the already placed prefix and
/// must return a finite, strictly positive cost.
///
/// ```
/// use u_paco::paco::{HeuristicPermutation, PermutationProblem};
///
/// // prefer candidates close to the previously placed value
/// let problem = HeuristicPermutation::new(|candidate: usize, placed: &[usize]| {
///     match placed.last() {
///         Some(&prev) => 1.0 + prev.abs_diff(candidate) as f64,
///         None => 1.0,
///     }
/// });
/// let partial = vec![3, 0, 0, 0];
/// assert_eq!(problem.append_cost(1, &partial, 1), 3.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HeuristicPermutation<F> {
    cost: F,
}

impl<F> HeuristicPermutation<F>
where
    F: Fn(usize, &[usize]) -> f64,
{
    pub fn new(cost: F) -> Self {
        Self { cost }
    }
}

impl<F> PermutationProblem for HeuristicPermutation<F>
where
    F: Fn(usize, &[usize]) -> f64,
{
    type Solution = Vec<usize>;

    fn permutation<'a>(&self, solution: &'a Vec<usize>) -> &'a [usize] {
        solution
    }

    fn permutation_mut<'a>(&self, solution: &'a mut Vec<usize>) -> &'a mut [usize] {
        solution
    }

    fn append_cost(&self, candidate: usize, solution: &Vec<usize>, position: usize) -> f64 {
        (self.cost)(candidate, &solution[..position])
    }
}
