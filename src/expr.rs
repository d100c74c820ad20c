//! Expression records and the list a front end keeps between table generations.

use std::collections::BTreeSet;
use std::fmt;

use log::debug;

use crate::config::TableConfig;
use crate::error::{ParseError, TableError};
use crate::normalize::lex;
use crate::postfix::{to_postfix, Postfix};
use crate::table::TruthTable;
use crate::types::{Token, Var};
use crate::vars::token_variables;

/// An immutable, well-formed expression.
///
/// Keeps the text as the user typed it for display, alongside the derived tokens and the
/// variables they reference.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Expression {
    display: String,
    tokens: Vec<Token>,
    variables: BTreeSet<Var>,
}

impl Expression {
    /// Parses `display`, rejecting text that does not convert to a well-formed postfix form.
    pub fn parse(display: impl Into<String>) -> Result<Self, ParseError> {
        let display = display.into();
        let tokens = lex(&display)?;
        to_postfix(&tokens)?;
        let variables = token_variables(&tokens);
        Ok(Self {
            display,
            tokens,
            variables,
        })
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn variables(&self) -> &BTreeSet<Var> {
        &self.variables
    }

    pub fn to_postfix(&self) -> Result<Postfix, ParseError> {
        to_postfix(&self.tokens)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}

/// The active expression list together with its declared variable count.
///
/// Changing the variable count clears the list, since validity is scoped to the declared set.
#[derive(Debug, Clone)]
pub struct ExpressionList {
    config: TableConfig,
    count: usize,
    expressions: Vec<Expression>,
}

impl ExpressionList {
    /// Empty list over the first `count` variables of the default pool.
    pub fn new(count: usize) -> Result<Self, TableError> {
        Self::with_config(TableConfig::default(), count)
    }

    pub fn with_config(config: TableConfig, count: usize) -> Result<Self, TableError> {
        config.declared(count)?;
        Ok(Self {
            config,
            count,
            expressions: Vec::new(),
        })
    }

    pub fn variable_count(&self) -> usize {
        self.count
    }

    pub fn declared(&self) -> &[Var] {
        &self.config.pool[..self.count]
    }

    /// Changes the declared variable count and drops every expression.
    pub fn set_variable_count(&mut self, count: usize) -> Result<(), TableError> {
        self.config.declared(count)?;
        if count != self.count {
            debug!(
                "variable count {} -> {}, clearing {} expression(s)",
                self.count,
                count,
                self.expressions.len()
            );
        }
        self.count = count;
        self.expressions.clear();
        Ok(())
    }

    /// Commits an expression to the end of the list.
    ///
    /// Only syntax is checked here; declared variables are checked when the table is built.
    pub fn push(&mut self, display: impl Into<String>) -> Result<&Expression, ParseError> {
        let expression = Expression::parse(display)?;
        self.expressions.push(expression);
        Ok(&self.expressions[self.expressions.len() - 1])
    }

    pub fn remove(&mut self, index: usize) -> Option<Expression> {
        if index < self.expressions.len() {
            Some(self.expressions.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.expressions.clear();
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expression> {
        self.expressions.iter()
    }

    pub fn build_table(&self) -> Result<TruthTable, TableError> {
        let displays: Vec<&str> = self.expressions.iter().map(|e| e.display()).collect();
        self.config.build_table(self.count, &displays)
    }
}
