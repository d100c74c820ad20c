//! Error types for parsing, evaluation and table construction.

use thiserror::Error;

use crate::types::{Operator, Var};

/// Malformed expression text.
///
/// Positions are character (not byte) offsets into the normalized expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expression is empty")]
    Empty,

    #[error("Unexpected character {ch:?} at position {position}")]
    UnexpectedChar { ch: char, position: usize },

    #[error("Closing parenthesis at position {position} has no matching '('")]
    UnmatchedClose { position: usize },

    #[error("Opening parenthesis at position {position} is never closed")]
    UnclosedOpen { position: usize },

    #[error("Empty parentheses at position {position}")]
    EmptyGroup { position: usize },

    #[error("Operator '{op}' at position {position} is missing an operand")]
    MissingOperand { op: Operator, position: usize },

    #[error("Missing operator before position {position}")]
    MissingOperator { position: usize },
}

/// Failure while evaluating a postfix sequence.
///
/// After validation these are unreachable from [`build_table`][crate::table::build_table];
/// seeing one means the caller broke the evaluator's contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Variable '{0}' has no value in the assignment")]
    UnboundVariable(Var),

    #[error("Malformed postfix sequence: {remaining} value(s) left on the stack")]
    Malformed { remaining: usize },
}

/// Reasons a truth table could not be produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("No expressions to evaluate")]
    NoExpressions,

    #[error("Variable count must be in 1..={max}, got {count}")]
    InvalidVariableCount { count: usize, max: usize },

    #[error("Variable '{0}' is declared more than once")]
    DuplicateVariable(Var),

    #[error("Expression \"{expression}\" uses undeclared variable '{variable}' (allowed: {})", format_vars(.declared))]
    UndeclaredVariable {
        expression: String,
        variable: Var,
        declared: Vec<Var>,
    },

    /// Positions in `source` index into `normalized`, not into `expression`.
    #[error("Expression \"{expression}\" is malformed: {source} (in normalized form \"{normalized}\")")]
    Parse {
        expression: String,
        normalized: String,
        source: ParseError,
    },

    #[error("Failed to evaluate \"{expression}\": {source}")]
    Evaluation {
        expression: String,
        source: EvalError,
    },
}

/// Invalid [`TableConfig`][crate::config::TableConfig] variable pool.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Variable pool is empty")]
    EmptyPool,

    #[error("Invalid variable name {0:?} in pool")]
    InvalidName(char),

    #[error("Duplicate variable '{0}' in pool")]
    Duplicate(Var),
}

fn format_vars(vars: &[Var]) -> String {
    let names: Vec<String> = vars.iter().map(|v| v.to_string()).collect();
    format!("{{{}}}", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undeclared_message() {
        let err = TableError::UndeclaredVariable {
            expression: "p & r".to_string(),
            variable: Var::new('r'),
            declared: vec![Var::new('p'), Var::new('q')],
        };
        assert_eq!(
            err.to_string(),
            "Expression \"p & r\" uses undeclared variable 'r' (allowed: {p, q})"
        );
    }

    #[test]
    fn test_parse_message() {
        let err = TableError::Parse {
            expression: "( p".to_string(),
            normalized: "(p".to_string(),
            source: ParseError::UnclosedOpen { position: 0 },
        };
        assert_eq!(
            err.to_string(),
            "Expression \"( p\" is malformed: Opening parenthesis at position 0 is never closed \
             (in normalized form \"(p\")"
        );
    }
}
