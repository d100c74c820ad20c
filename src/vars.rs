use std::collections::BTreeSet;

use crate::normalize::normalize;
use crate::types::{Token, Var};

/// Collects the distinct variables referenced by `expr`, regardless of operator context.
///
/// The input is normalized first, so the `V` alias is never mistaken for a variable.
/// Characters that are not variables are ignored; rejecting them is the tokenizer's job.
///
/// # Examples
///
/// ```
/// use truth_table::types::Var;
/// use truth_table::vars::extract_variables;
///
/// let vars = extract_variables("(q V p) & !q");
/// assert_eq!(vars.into_iter().collect::<Vec<_>>(), vec![Var::new('p'), Var::new('q')]);
/// ```
pub fn extract_variables(expr: &str) -> BTreeSet<Var> {
    normalize(expr).chars().filter_map(Var::try_new).collect()
}

/// Same as [`extract_variables`], for an already tokenized expression.
pub fn token_variables(tokens: &[Token]) -> BTreeSet<Var> {
    tokens
        .iter()
        .filter_map(|token| match token {
            Token::Var(var) => Some(*var),
            Token::Op(_) => None,
        })
        .collect()
}

/// First variable of `used` that is not in `declared`, in sorted order.
pub fn first_undeclared(used: &BTreeSet<Var>, declared: &[Var]) -> Option<Var> {
    used.iter().copied().find(|var| !declared.contains(var))
}
