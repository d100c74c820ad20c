//! Enumeration of all assignments in binary counting order.
//!
//! Row `i` is the `N`-bit binary number `i`: the most significant bit belongs to the first
//! variable, and a set bit means `true`. The first row is therefore all-false and the last
//! row all-true.

use std::iter::FusedIterator;

use crate::eval::Assignment;
use crate::types::Var;

/// Upper bound on the number of enumerated variables (one per lowercase letter).
pub const MAX_VARIABLES: usize = 26;

/// Lazy iterator over all `2^N` assignments of a variable list.
#[derive(Debug, Clone)]
pub struct Assignments {
    vars: Vec<Var>,
    front: u64,
    back: u64,
}

/// Enumerates every assignment of `variables` in binary counting order.
///
/// # Panics
///
/// Panics if more than [`MAX_VARIABLES`] variables are given.
///
/// # Examples
///
/// ```
/// use truth_table::enumerate::enumerate;
/// use truth_table::types::Var;
///
/// let rows: Vec<Vec<bool>> = enumerate(&[Var::new('p'), Var::new('q')])
///     .map(|a| a.values().collect())
///     .collect();
/// assert_eq!(
///     rows,
///     vec![
///         vec![false, false],
///         vec![false, true],
///         vec![true, false],
///         vec![true, true],
///     ]
/// );
/// ```
pub fn enumerate(variables: &[Var]) -> Assignments {
    assert!(
        variables.len() <= MAX_VARIABLES,
        "Cannot enumerate more than {} variables, got {}",
        MAX_VARIABLES,
        variables.len()
    );
    Assignments {
        vars: variables.to_vec(),
        front: 0,
        back: 1 << variables.len(),
    }
}

impl Assignments {
    /// Variables in enumeration order.
    pub fn variables(&self) -> &[Var] {
        &self.vars
    }

    /// Total number of rows, independent of iteration progress.
    pub fn total(&self) -> u64 {
        1 << self.vars.len()
    }

    /// The assignment of row `index`, or `None` if out of range.
    pub fn nth_assignment(&self, index: u64) -> Option<Assignment> {
        if index >= self.total() {
            return None;
        }
        let n = self.vars.len();
        Some(
            self.vars
                .iter()
                .enumerate()
                .map(|(i, &var)| (var, (index >> (n - 1 - i)) & 1 == 1))
                .collect(),
        )
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let assignment = self.nth_assignment(self.front);
        self.front += 1;
        assignment
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.back - self.front) as usize;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Assignments {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.nth_assignment(self.back)
    }
}

impl ExactSizeIterator for Assignments {}

impl FusedIterator for Assignments {}
