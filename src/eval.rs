//! Postfix evaluation against a single variable assignment.

use std::fmt;

use log::trace;

use crate::error::EvalError;
use crate::postfix::Postfix;
use crate::types::{Operator, Token, Var};

/// One total valuation of the declared variables, in declaration order.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct Assignment {
    values: Vec<(Var, bool)>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `var` to `value`, replacing an existing binding.
    pub fn set(&mut self, var: Var, value: bool) {
        match self.values.iter_mut().find(|(v, _)| *v == var) {
            Some(slot) => slot.1 = value,
            None => self.values.push((var, value)),
        }
    }

    pub fn get(&self, var: Var) -> Option<bool> {
        self.values
            .iter()
            .find(|(v, _)| *v == var)
            .map(|&(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Var, bool)> + '_ {
        self.values.iter().copied()
    }

    /// Values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        self.values.iter().map(|&(_, value)| value)
    }
}

impl FromIterator<(Var, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Var, bool)>>(iter: I) -> Self {
        let mut assignment = Assignment::new();
        for (var, value) in iter {
            assignment.set(var, value);
        }
        assignment
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", var, if value { 'T' } else { 'F' })?;
        }
        write!(f, "}}")
    }
}

/// Evaluates a postfix token sequence under `assignment`.
///
/// The sequence is only borrowed, so one conversion can be evaluated for every row.
/// Binary operators take the first popped value as their right operand.
pub fn evaluate(postfix: &[Token], assignment: &Assignment) -> Result<bool, EvalError> {
    let mut stack: Vec<bool> = Vec::with_capacity(postfix.len() / 2 + 1);

    for &token in postfix {
        match token {
            Token::Var(var) => {
                let value = assignment
                    .get(var)
                    .ok_or(EvalError::UnboundVariable(var))?;
                stack.push(value);
            }
            Token::Op(Operator::Not) => {
                let value = stack.pop().ok_or(EvalError::Malformed { remaining: 0 })?;
                stack.push(!value);
            }
            Token::Op(
                op @ (Operator::And
                | Operator::Or
                | Operator::Xor
                | Operator::Implies
                | Operator::Iff),
            ) => {
                let right = stack.pop().ok_or(EvalError::Malformed { remaining: 0 })?;
                let left = stack.pop().ok_or(EvalError::Malformed { remaining: 1 })?;
                stack.push(op.apply2(left, right));
            }
            Token::Op(Operator::Open | Operator::Close) => {
                return Err(EvalError::Malformed {
                    remaining: stack.len(),
                });
            }
        }
    }

    match stack.as_slice() {
        [value] => {
            trace!("evaluate({}) under {} -> {}", DisplayTokens(postfix), assignment, value);
            Ok(*value)
        }
        _ => Err(EvalError::Malformed {
            remaining: stack.len(),
        }),
    }
}

impl Postfix {
    /// Evaluates this expression under `assignment`.
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        evaluate(self.tokens(), assignment)
    }
}

struct DisplayTokens<'a>(&'a [Token]);

impl fmt::Display for DisplayTokens<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.0 {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
