//! # truth-table: propositional logic truth tables
//!
//! **`truth-table`** turns textual boolean expressions over a small set of declared variables
//! into complete truth tables.
//!
//! ## Pipeline
//!
//! 1. **Normalize** raw text: strip whitespace, rewrite operator aliases (`¬`, `V`, `->`, ...)
//!    to the canonical alphabet ([`normalize`]).
//! 2. **Validate** that every referenced variable is declared ([`vars`]).
//! 3. **Tokenize** and **convert** to postfix with a shunting-yard pass ([`postfix`]).
//! 4. **Enumerate** all `2^N` assignments in binary counting order ([`enumerate`]) and
//!    **evaluate** the cached postfix form for each one ([`eval`]).
//! 5. **Assemble** headers and rows ([`table`]).
//!
//! ## Operators
//!
//! | Symbol | Meaning | Aliases | Precedence |
//! |---|---|---|---|
//! | `!` | NOT | `¬`, `~` | 4 |
//! | `&` | AND | `∧` | 3 |
//! | `\|` | OR | `V`, `∨` | 2 |
//! | `⊕` | XOR | `^` | 2 |
//! | `→` | IMPLIES | `->` | 1 |
//! | `↔` | IFF | `<->` | 1 |
//!
//! Binary operators of equal precedence associate to the left.
//!
//! ## Basic Usage
//!
//! ```rust
//! use truth_table::table::validate_and_build_table;
//!
//! // Declare p and q, evaluate two expressions.
//! let table = validate_and_build_table(2, &["p & q", "p -> q"]).unwrap();
//!
//! assert_eq!(table.headers(), &["p", "q", "p & q", "p -> q"]);
//! assert_eq!(table.num_rows(), 4);
//!
//! // Row order is binary counting: FF, FT, TF, TT.
//! assert_eq!(table.row_symbols(2).unwrap(), vec!['T', 'F', 'F', 'F']);
//! println!("{}", table);
//! ```

pub mod config;
pub mod enumerate;
pub mod error;
pub mod eval;
pub mod expr;
pub mod normalize;
pub mod postfix;
pub mod table;
pub mod types;
pub mod vars;

pub use crate::error::{ConfigError, EvalError, ParseError, TableError};
pub use crate::table::{build_table, validate_and_build_table, TruthTable};
pub use crate::vars::extract_variables;
