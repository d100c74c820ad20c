//! Infix to postfix conversion (shunting-yard).
//!
//! The converter keeps two stacks: the output queue and the operator stack.
//!
//! - A variable goes straight to the output.
//! - A binary operator first pops every stacked operator of greater or equal precedence,
//!   so operators of equal rank associate to the left.
//! - `!` is a prefix operator and is pushed without popping anything, which makes it
//!   right-associative: `!!p` becomes `p ! !`.
//! - `(` is always pushed; `)` pops until the matching `(` and discards both.
//! - At the end of input the remaining operators are popped to the output.
//!
//! Alongside the stacks the converter tracks whether it expects an operand or an operator
//! next. This rejects unbalanced parentheses, dangling operators and juxtaposed operands,
//! so every [`Postfix`] it returns evaluates to exactly one value.
//!
//! Positions in errors are token indices, which equal character positions in the
//! normalized expression.

use std::fmt;

use log::trace;

use crate::error::ParseError;
use crate::types::{Operator, Token};

/// A well-formed expression in reverse Polish order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl AsRef<[Token]> for Postfix {
    fn as_ref(&self) -> &[Token] {
        &self.tokens
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// Converts an infix token sequence into postfix order.
pub fn to_postfix(tokens: &[Token]) -> Result<Postfix, ParseError> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<(Operator, usize)> = Vec::with_capacity(tokens.len() / 2 + 1);
    let mut expect_operand = true;

    for (position, &token) in tokens.iter().enumerate() {
        trace!(
            "to_postfix: token = {}, output = {:?}, stack = {:?}",
            token,
            output,
            stack
        );
        match token {
            Token::Var(_) => {
                if !expect_operand {
                    return Err(ParseError::MissingOperator { position });
                }
                output.push(token);
                expect_operand = false;
            }

            Token::Op(op @ (Operator::Not | Operator::Open)) => {
                if !expect_operand {
                    return Err(ParseError::MissingOperator { position });
                }
                stack.push((op, position));
            }

            Token::Op(Operator::Close) => {
                if expect_operand {
                    return Err(match stack.last() {
                        Some(&(Operator::Open, open)) => ParseError::EmptyGroup { position: open },
                        Some(&(op, at)) => ParseError::MissingOperand { op, position: at },
                        None => ParseError::UnmatchedClose { position },
                    });
                }
                loop {
                    match stack.pop() {
                        Some((Operator::Open, _)) => break,
                        Some((op, _)) => output.push(Token::Op(op)),
                        None => return Err(ParseError::UnmatchedClose { position }),
                    }
                }
            }

            Token::Op(
                op @ (Operator::And
                | Operator::Or
                | Operator::Xor
                | Operator::Implies
                | Operator::Iff),
            ) => {
                if expect_operand {
                    return Err(ParseError::MissingOperand { op, position });
                }
                while let Some(&(top, _)) = stack.last() {
                    if top.is_grouping() || top.precedence() < op.precedence() {
                        break;
                    }
                    stack.pop();
                    output.push(Token::Op(top));
                }
                stack.push((op, position));
                expect_operand = true;
            }
        }
    }

    if expect_operand {
        return Err(match stack.last() {
            None => ParseError::Empty,
            Some(&(Operator::Open, position)) => ParseError::UnclosedOpen { position },
            Some(&(op, position)) => ParseError::MissingOperand { op, position },
        });
    }

    while let Some((op, position)) = stack.pop() {
        if op == Operator::Open {
            return Err(ParseError::UnclosedOpen { position });
        }
        output.push(Token::Op(op));
    }

    trace!("to_postfix -> {:?}", output);
    Ok(Postfix { tokens: output })
}
