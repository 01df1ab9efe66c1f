use crate::{Result, perm::PermTable};

/// Outcome of a completeness check. Missing a permutation is a normal
/// negative result, not an error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Verification {
    Complete,
    /// First permutation (in enumeration order) absent from the candidate.
    Missing(String),
}

/// Checks that every permutation of `1..n` occurs in `candidate` as a
/// contiguous substring, stopping at the first miss.
pub fn verify_superperm(n: usize, candidate: &str) -> Result<Verification> {
    let perms = PermTable::new(n)?;
    for perm in perms.digit_strings() {
        if !candidate.contains(&perm) {
            return Ok(Verification::Missing(perm));
        }
    }
    Ok(Verification::Complete)
}
