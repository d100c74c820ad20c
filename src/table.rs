//! Truth table construction.
//!
//! [`build_table`] validates every expression against the declared variables, converts each
//! one to postfix exactly once, and then evaluates the cached postfix sequences for every
//! assignment in enumeration order. Any failure aborts the whole build: there are no
//! partial tables.

use std::fmt;

use log::{debug, trace};

use crate::config::TableConfig;
use crate::enumerate::{enumerate, MAX_VARIABLES};
use crate::error::TableError;
use crate::normalize::{normalize, tokenize};
use crate::postfix::{to_postfix, Postfix};
use crate::types::Var;
use crate::vars::{extract_variables, first_undeclared};

/// Semantic status of an expression over all assignments.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classification {
    /// True under every assignment.
    Tautology,
    /// False under every assignment.
    Contradiction,
    /// Both true and false occur.
    Contingency,
}

/// A complete truth table.
///
/// # Invariants
///
/// - `headers` lists the declared variables followed by each expression's display string
/// - every row has exactly `headers.len()` cells
/// - there are exactly `2^N` rows, `N` being the number of declared variables
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TruthTable {
    headers: Vec<String>,
    num_variables: usize,
    rows: Vec<Vec<bool>>,
    true_symbol: char,
    false_symbol: char,
}

impl TruthTable {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    pub fn num_expressions(&self) -> usize {
        self.headers.len() - self.num_variables
    }

    pub fn symbol(&self, value: bool) -> char {
        if value {
            self.true_symbol
        } else {
            self.false_symbol
        }
    }

    /// Cells of row `index` rendered as display symbols.
    pub fn row_symbols(&self, index: usize) -> Option<Vec<char>> {
        self.rows
            .get(index)
            .map(|row| row.iter().map(|&v| self.symbol(v)).collect())
    }

    /// All rows rendered as display symbols.
    pub fn symbol_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&v| self.symbol(v).to_string()).collect())
            .collect()
    }

    /// Column `index` across all rows (variables first, then expressions).
    pub fn column(&self, index: usize) -> Option<Vec<bool>> {
        if index >= self.headers.len() {
            return None;
        }
        Some(self.rows.iter().map(|row| row[index]).collect())
    }

    /// Column with the given header, the first one if headers repeat.
    pub fn column_by_header(&self, header: &str) -> Option<Vec<bool>> {
        let index = self.headers.iter().position(|h| h == header)?;
        self.column(index)
    }

    /// Column of the `index`-th expression.
    pub fn expression_column(&self, index: usize) -> Option<Vec<bool>> {
        if index >= self.num_expressions() {
            return None;
        }
        self.column(self.num_variables + index)
    }

    /// Number of rows where the `index`-th expression is true.
    pub fn count_true(&self, index: usize) -> Option<usize> {
        self.expression_column(index)
            .map(|column| column.into_iter().filter(|&v| v).count())
    }

    pub fn classify(&self, index: usize) -> Option<Classification> {
        let count = self.count_true(index)?;
        Some(if count == self.num_rows() {
            Classification::Tautology
        } else if count == 0 {
            Classification::Contradiction
        } else {
            Classification::Contingency
        })
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| h.chars().count().max(1))
            .collect();

        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, &w)| format!("{:^w$}", h, w = w))
            .collect();
        writeln!(f, "{}", header.join(" | "))?;

        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        writeln!(f, "{}", rule.join("-+-"))?;

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(&v, &w)| format!("{:^w$}", self.symbol(v), w = w))
                .collect();
            writeln!(f, "{}", cells.join(" | "))?;
        }
        Ok(())
    }
}

/// Builds the truth table of `expressions` over `declared`, rendered with `T`/`F`.
///
/// # Errors
///
/// - [`TableError::NoExpressions`] if `expressions` is empty
/// - [`TableError::UndeclaredVariable`] for the first expression (in list order) that uses a
///   variable outside `declared`
/// - [`TableError::DuplicateVariable`] if `declared` repeats a variable
/// - [`TableError::Parse`] if an expression is malformed
///
/// # Examples
///
/// ```
/// use truth_table::table::build_table;
/// use truth_table::types::Var;
///
/// let declared = [Var::new('p'), Var::new('q')];
/// let table = build_table(&declared, &["p & q", "p | q"]).unwrap();
/// assert_eq!(table.headers(), &["p", "q", "p & q", "p | q"]);
/// assert_eq!(table.row_symbols(2).unwrap(), vec!['T', 'F', 'F', 'T']);
/// ```
pub fn build_table<S: AsRef<str>>(
    declared: &[Var],
    expressions: &[S],
) -> Result<TruthTable, TableError> {
    build_table_with(declared, expressions, &TableConfig::default())
}

/// Builds the truth table for the first `count` variables of the default pool `p, q, r, s, t`.
pub fn validate_and_build_table<S: AsRef<str>>(
    count: usize,
    expressions: &[S],
) -> Result<TruthTable, TableError> {
    TableConfig::default().build_table(count, expressions)
}

impl TableConfig {
    /// Builds the truth table for the first `count` variables of this pool.
    pub fn build_table<S: AsRef<str>>(
        &self,
        count: usize,
        expressions: &[S],
    ) -> Result<TruthTable, TableError> {
        let declared = self.declared(count)?;
        build_table_with(declared, expressions, self)
    }
}

fn build_table_with<S: AsRef<str>>(
    declared: &[Var],
    expressions: &[S],
    config: &TableConfig,
) -> Result<TruthTable, TableError> {
    debug!(
        "build_table(declared = {:?}, {} expression(s))",
        declared,
        expressions.len()
    );

    if expressions.is_empty() {
        return Err(TableError::NoExpressions);
    }
    if declared.len() > MAX_VARIABLES {
        return Err(TableError::InvalidVariableCount {
            count: declared.len(),
            max: MAX_VARIABLES,
        });
    }
    for (i, &var) in declared.iter().enumerate() {
        if declared[..i].contains(&var) {
            return Err(TableError::DuplicateVariable(var));
        }
    }

    // Validate everything before converting anything.
    for expression in expressions {
        let expression: &str = expression.as_ref();
        let used = extract_variables(expression);
        if let Some(variable) = first_undeclared(&used, declared) {
            debug!("'{}' is not declared in \"{}\"", variable, expression);
            return Err(TableError::UndeclaredVariable {
                expression: expression.to_string(),
                variable,
                declared: declared.to_vec(),
            });
        }
    }

    let mut compiled: Vec<(&str, Postfix)> = Vec::with_capacity(expressions.len());
    for expression in expressions {
        let expression: &str = expression.as_ref();
        let normalized = normalize(expression);
        let postfix = tokenize(&normalized)
            .and_then(|tokens| to_postfix(&tokens))
            .map_err(|source| TableError::Parse {
                expression: expression.to_string(),
                normalized: normalized.clone(),
                source,
            })?;
        trace!("\"{}\" -> {}", expression, postfix);
        compiled.push((expression, postfix));
    }

    let headers: Vec<String> = declared
        .iter()
        .map(|v| v.to_string())
        .chain(compiled.iter().map(|(display, _)| display.to_string()))
        .collect();

    let assignments = enumerate(declared);
    let mut rows: Vec<Vec<bool>> = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        let mut row: Vec<bool> = Vec::with_capacity(headers.len());
        row.extend(assignment.values());
        for (display, postfix) in &compiled {
            let value = postfix
                .evaluate(&assignment)
                .map_err(|source| TableError::Evaluation {
                    expression: display.to_string(),
                    source,
                })?;
            row.push(value);
        }
        debug_assert_eq!(row.len(), headers.len());
        rows.push(row);
    }

    debug!(
        "build_table -> {} row(s) x {} column(s)",
        rows.len(),
        headers.len()
    );

    Ok(TruthTable {
        headers,
        num_variables: declared.len(),
        rows,
        true_symbol: config.true_symbol,
        false_symbol: config.false_symbol,
    })
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::error::ParseError;
    use crate::types::Operator;

    fn vars(names: &str) -> Vec<Var> {
        names.chars().map(Var::new).collect()
    }

    fn symbols(table: &TruthTable) -> Vec<String> {
        (0..table.num_rows())
            .map(|i| table.row_symbols(i).unwrap().into_iter().collect())
            .collect()
    }

    #[test]
    fn test_and() {
        let table = build_table(&vars("pq"), &["p & q"]).unwrap();
        assert_eq!(symbols(&table), vec!["FFF", "FTF", "TFF", "TTT"]);
    }

    #[test]
    fn test_or() {
        let table = build_table(&vars("pq"), &["p | q"]).unwrap();
        assert_eq!(symbols(&table), vec!["FFF", "FTT", "TFT", "TTT"]);
    }

    #[test]
    fn test_not() {
        let table = validate_and_build_table(1, &["!p"]).unwrap();
        assert_eq!(table.headers(), &["p", "!p"]);
        assert_eq!(symbols(&table), vec!["FT", "TF"]);
    }

    #[test]
    fn test_precedence() {
        let table = validate_and_build_table(3, &["p & q | r"]).unwrap();
        // Rows are indexed by the binary number pqr.
        assert_eq!(table.row_symbols(0b101).unwrap(), vec!['T', 'F', 'T', 'T']);
        assert_eq!(table.row_symbols(0b100).unwrap(), vec!['T', 'F', 'F', 'F']);
    }

    #[test]
    fn test_multiple_expressions() {
        let table = validate_and_build_table(2, &["p & q", "p | q"]).unwrap();
        assert_eq!(table.headers(), &["p", "q", "p & q", "p | q"]);
        assert_eq!(table.row_symbols(2).unwrap(), vec!['T', 'F', 'F', 'T']);
        assert_eq!(table.num_expressions(), 2);
    }

    #[test]
    fn test_headers_keep_display_form() {
        let table = validate_and_build_table(2, &["¬p V q"]).unwrap();
        assert_eq!(table.headers()[2], "¬p V q");
        assert_eq!(
            table.column_by_header("¬p V q").unwrap(),
            vec![true, true, false, true]
        );
    }

    #[test]
    fn test_shape() {
        for n in 1..=5 {
            let table = validate_and_build_table(n, &["p", "!p", "p ↔ p"]).unwrap();
            assert_eq!(table.num_rows(), 1 << n);
            assert!(table.rows().iter().all(|row| row.len() == table.headers().len()));
        }
    }

    #[test]
    fn test_no_expressions() {
        let empty: [&str; 0] = [];
        for n in 1..=5 {
            assert_eq!(
                validate_and_build_table(n, &empty),
                Err(TableError::NoExpressions)
            );
        }
    }

    #[test]
    fn test_undeclared_variable() {
        let err = validate_and_build_table(2, &["p & r"]).unwrap_err();
        assert_eq!(
            err,
            TableError::UndeclaredVariable {
                expression: "p & r".to_string(),
                variable: Var::new('r'),
                declared: vars("pq"),
            }
        );
    }

    #[test]
    fn test_undeclared_fails_fast_in_list_order() {
        let err = validate_and_build_table(2, &["p", "q & s", "r"]).unwrap_err();
        match err {
            TableError::UndeclaredVariable {
                expression,
                variable,
                ..
            } => {
                assert_eq!(expression, "q & s");
                assert_eq!(variable, Var::new('s'));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validation_precedes_parsing() {
        // The first expression is malformed, but the undeclared variable wins.
        let err = validate_and_build_table(2, &["p &", "t"]).unwrap_err();
        assert!(matches!(err, TableError::UndeclaredVariable { .. }));
    }

    #[test]
    fn test_parse_error() {
        let err = validate_and_build_table(2, &["p & q", "(p | q"]).unwrap_err();
        assert_eq!(
            err,
            TableError::Parse {
                expression: "(p | q".to_string(),
                normalized: "(p|q".to_string(),
                source: ParseError::UnclosedOpen { position: 0 },
            }
        );
        let err = validate_and_build_table(2, &["p # q"]).unwrap_err();
        assert_eq!(
            err,
            TableError::Parse {
                expression: "p # q".to_string(),
                normalized: "p#q".to_string(),
                source: ParseError::UnexpectedChar { ch: '#', position: 1 },
            }
        );
        let err = validate_and_build_table(2, &["p → "]).unwrap_err();
        assert_eq!(
            err,
            TableError::Parse {
                expression: "p → ".to_string(),
                normalized: "p→".to_string(),
                source: ParseError::MissingOperand {
                    op: Operator::Implies,
                    position: 1
                },
            }
        );
    }

    #[test]
    fn test_duplicate_declared_variable() {
        let p = Var::new('p');
        assert_eq!(
            build_table(&[p, p], &["p"]),
            Err(TableError::DuplicateVariable(p))
        );
        assert_eq!(
            build_table(&vars("pqp"), &["p & q"]),
            Err(TableError::DuplicateVariable(p))
        );
    }

    #[test]
    fn test_duplicate_in_public_pool() {
        let mut config = TableConfig::default();
        config.pool = vars("pp");
        assert_eq!(
            config.build_table(2, &["p"]),
            Err(TableError::DuplicateVariable(Var::new('p')))
        );
    }

    #[test]
    fn test_invalid_count() {
        assert_eq!(
            validate_and_build_table(0, &["p"]),
            Err(TableError::InvalidVariableCount { count: 0, max: 5 })
        );
        assert_eq!(
            validate_and_build_table(6, &["p"]),
            Err(TableError::InvalidVariableCount { count: 6, max: 5 })
        );
    }

    #[test]
    fn test_classify() {
        let table = validate_and_build_table(2, &["p | !p", "p & !p", "p → q"]).unwrap();
        assert_eq!(table.classify(0), Some(Classification::Tautology));
        assert_eq!(table.classify(1), Some(Classification::Contradiction));
        assert_eq!(table.classify(2), Some(Classification::Contingency));
        assert_eq!(table.classify(3), None);
        assert_eq!(table.count_true(2), Some(3));
    }

    #[test]
    fn test_custom_symbols() {
        let config = TableConfig {
            true_symbol: '1',
            false_symbol: '0',
            ..TableConfig::default()
        };
        let table = config.build_table(1, &["p"]).unwrap();
        assert_eq!(table.symbol_rows(), vec![vec!["0", "0"], vec!["1", "1"]]);
    }

    #[test]
    fn test_display() {
        let table = validate_and_build_table(1, &["!p"]).unwrap();
        assert_eq!(table.to_string(), "p | !p\n--+---\nF | T \nT | F \n");
    }
}
