//! Table configuration: the variable pool and the symbols used to render values.

use std::collections::HashSet;

use crate::error::{ConfigError, TableError};
use crate::types::Var;

/// Default pool of variable names, selected by count from the front.
pub const DEFAULT_POOL: &str = "pqrst";

/// Configuration for truth table construction.
///
/// Use `TableConfig::default()` for the `p, q, r, s, t` pool rendered with `T`/`F`.
///
/// # Examples
///
/// ```
/// use truth_table::config::TableConfig;
///
/// let config = TableConfig::with_pool("pqrstu").unwrap();
/// let declared = config.declared(6).unwrap();
/// assert_eq!(declared.len(), 6);
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TableConfig {
    /// Ordered pool of variable names (default: `p, q, r, s, t`)
    pub pool: Vec<Var>,
    /// Symbol for a true cell (default: `'T'`)
    pub true_symbol: char,
    /// Symbol for a false cell (default: `'F'`)
    pub false_symbol: char,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            pool: DEFAULT_POOL.chars().map(Var::new).collect(),
            true_symbol: 'T',
            false_symbol: 'F',
        }
    }
}

impl TableConfig {
    /// Default configuration with a custom variable pool.
    pub fn with_pool(names: &str) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        let mut pool = Vec::new();
        for ch in names.chars().filter(|c| !c.is_whitespace()) {
            let var = Var::try_new(ch).ok_or(ConfigError::InvalidName(ch))?;
            if !seen.insert(var) {
                return Err(ConfigError::Duplicate(var));
            }
            pool.push(var);
        }
        if pool.is_empty() {
            return Err(ConfigError::EmptyPool);
        }
        Ok(Self {
            pool,
            ..Self::default()
        })
    }

    pub fn max_variables(&self) -> usize {
        self.pool.len()
    }

    /// The first `count` variables of the pool.
    pub fn declared(&self, count: usize) -> Result<&[Var], TableError> {
        if count == 0 || count > self.pool.len() {
            return Err(TableError::InvalidVariableCount {
                count,
                max: self.pool.len(),
            });
        }
        Ok(&self.pool[..count])
    }

    pub fn symbol(&self, value: bool) -> char {
        if value {
            self.true_symbol
        } else {
            self.false_symbol
        }
    }
}
