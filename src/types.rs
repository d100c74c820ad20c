//! Core vocabulary: variables, operators and tokens.
//!
//! Every expression is reduced to a sequence of [`Token`]s over a closed operator alphabet.
//! Operators carry their precedence, arity and canonical symbol as data, so the converter
//! and the evaluator dispatch on them with exhaustive matches only.
use std::fmt;

/// A propositional variable: a single lowercase ASCII letter.
///
/// # Invariants
///
/// - The wrapped character is always in `'a'..='z'`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Var(char);

impl Var {
    /// Creates a new variable with the given name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a lowercase ASCII letter.
    pub fn new(name: char) -> Self {
        assert!(
            name.is_ascii_lowercase(),
            "Variable names must be lowercase ASCII letters, got {:?}",
            name
        );
        Var(name)
    }

    /// Creates a new variable, or `None` if `name` is not a lowercase ASCII letter.
    pub fn try_new(name: char) -> Option<Self> {
        if name.is_ascii_lowercase() {
            Some(Var(name))
        } else {
            None
        }
    }

    /// Returns the variable name.
    pub fn name(self) -> char {
        self.0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Var> for char {
    fn from(var: Var) -> Self {
        var.0
    }
}

/// Logical connectives and grouping markers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    Not,
    And,
    Or,
    Xor,
    Implies,
    Iff,
    Open,
    Close,
}

impl Operator {
    pub const ALL: [Operator; 8] = [
        Operator::Not,
        Operator::And,
        Operator::Or,
        Operator::Xor,
        Operator::Implies,
        Operator::Iff,
        Operator::Open,
        Operator::Close,
    ];

    /// Binding strength. Grouping markers have the sentinel rank 0.
    pub const fn precedence(self) -> u8 {
        match self {
            Operator::Not => 4,
            Operator::And => 3,
            Operator::Or | Operator::Xor => 2,
            Operator::Implies | Operator::Iff => 1,
            Operator::Open | Operator::Close => 0,
        }
    }

    /// Number of operands, 0 for grouping markers.
    pub const fn arity(self) -> usize {
        match self {
            Operator::Not => 1,
            Operator::And | Operator::Or | Operator::Xor | Operator::Implies | Operator::Iff => 2,
            Operator::Open | Operator::Close => 0,
        }
    }

    pub const fn is_right_associative(self) -> bool {
        matches!(self, Operator::Not)
    }

    pub const fn is_grouping(self) -> bool {
        matches!(self, Operator::Open | Operator::Close)
    }

    /// Canonical symbol of the operator.
    pub const fn symbol(self) -> char {
        match self {
            Operator::Not => '!',
            Operator::And => '&',
            Operator::Or => '|',
            Operator::Xor => '⊕',
            Operator::Implies => '→',
            Operator::Iff => '↔',
            Operator::Open => '(',
            Operator::Close => ')',
        }
    }

    /// Parses a canonical symbol. Aliases are not accepted here, see [`normalize`][crate::normalize::normalize].
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Operator::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Applies a binary connective.
    ///
    /// # Panics
    ///
    /// Panics if the operator is not binary.
    pub fn apply2(self, left: bool, right: bool) -> bool {
        match self {
            Operator::And => left && right,
            Operator::Or => left || right,
            Operator::Xor => left != right,
            Operator::Implies => !left || right,
            Operator::Iff => left == right,
            Operator::Not | Operator::Open | Operator::Close => {
                panic!("{:?} is not a binary operator", self)
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single lexical unit of a normalized expression.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    Var(Var),
    Op(Operator),
}

impl Token {
    /// Maps a canonical character to a token.
    pub fn from_char(ch: char) -> Option<Self> {
        Var::try_new(ch)
            .map(Token::Var)
            .or_else(|| Operator::from_symbol(ch).map(Token::Op))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Var(var) => write!(f, "{}", var),
            Token::Op(op) => write!(f, "{}", op),
        }
    }
}

impl From<Var> for Token {
    fn from(var: Var) -> Self {
        Token::Var(var)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Op(op)
    }
}
