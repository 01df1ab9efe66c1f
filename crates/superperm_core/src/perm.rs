use crate::{Error, Result};

/// Symbols are rendered as single digit characters, which caps n at nine.
/// The O(n!^2) instance makes anything past n=7 unusable anyway.
const MAX_SYMBOLS: usize = 9;

/// All `n!` permutations of `n` symbols in lexicographic order.
///
/// The enumeration index is the node identity in the ATSP graph and, with
/// its doubled partner, in the symmetric TSP graph. Symbols are `0..n-1`
/// internally; [`PermTable::digit_strings`] renders them 1-based.
pub struct PermTable {
    n: usize,
    perms: Vec<Vec<u8>>,
}

impl PermTable {
    pub fn new(n: usize) -> Result<Self> {
        if n < 1 || n > MAX_SYMBOLS {
            return Err(Error::invalid_input(format!(
                "n must be in 1..={MAX_SYMBOLS}, got {n}"
            )));
        }

        let mut perms = Vec::new();
        let mut current: Vec<u8> = (0..n as u8).collect();
        loop {
            perms.push(current.clone());
            if !next_permutation(&mut current) {
                break;
            }
        }

        Ok(Self { n, perms })
    }

    /// Number of symbols.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of permutations (`n!`).
    pub fn len(&self) -> usize {
        self.perms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.perms.is_empty()
    }

    pub fn perm(&self, index: usize) -> &[u8] {
        &self.perms[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.perms.iter().map(Vec::as_slice)
    }

    /// Every permutation as a string of 1-based symbol digits, in
    /// enumeration order. The constructor bound keeps every symbol a
    /// single digit.
    pub fn digit_strings(&self) -> Vec<String> {
        self.perms
            .iter()
            .map(|perm| perm.iter().map(|&s| (b'1' + s) as char).collect())
            .collect()
    }
}

/// Longest suffix of `p` matching a prefix of `q`.
///
/// Scans candidate lengths from the longest down, so the first hit is the
/// maximal overlap. That ordering is what keeps stitched strings minimal.
pub fn overlap(p: &str, q: &str) -> usize {
    let max = p.len().min(q.len());
    for i in (1..=max).rev() {
        if p[p.len() - i..] == q[..i] {
            return i;
        }
    }
    0
}

fn next_permutation(perm: &mut [u8]) -> bool {
    if perm.len() < 2 {
        return false;
    }

    let mut i = perm.len() - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    let mut j = perm.len() - 1;
    while perm[j] <= perm[i - 1] {
        j -= 1;
    }
    perm.swap(i - 1, j);
    perm[i..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::{PermTable, overlap};
    use crate::Error;

    #[test]
    fn enumerates_in_lexicographic_order() {
        let table = PermTable::new(3).expect("build table");
        let perms: Vec<&[u8]> = table.iter().collect();
        assert_eq!(
            perms,
            vec![
                &[0, 1, 2][..],
                &[0, 2, 1],
                &[1, 0, 2],
                &[1, 2, 0],
                &[2, 0, 1],
                &[2, 1, 0],
            ]
        );
    }

    #[test]
    fn digit_strings_are_one_based() {
        let table = PermTable::new(3).expect("build table");
        assert_eq!(
            table.digit_strings(),
            vec!["123", "132", "213", "231", "312", "321"]
        );
    }

    #[test]
    fn single_symbol_table_is_trivial() {
        let table = PermTable::new(1).expect("build table");
        assert_eq!(table.len(), 1);
        assert_eq!(table.perm(0), &[0]);
        assert_eq!(table.digit_strings(), vec!["1"]);
    }

    #[test]
    fn out_of_range_symbol_counts_are_rejected() {
        assert!(matches!(PermTable::new(0), Err(Error::InvalidInput(_))));
        assert!(matches!(PermTable::new(10), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn overlap_picks_the_maximal_match() {
        assert_eq!(overlap("123", "231"), 2);
        assert_eq!(overlap("123", "312"), 1);
        assert_eq!(overlap("123", "213"), 0);
        assert_eq!(overlap("123", "123"), 3);
        // Repeated symbols admit several valid lengths; the longest wins.
        assert_eq!(overlap("2121", "1212"), 3);
        assert_eq!(overlap("1212", "1212"), 4);
    }

    #[test]
    fn overlap_is_bounded_by_the_shorter_string() {
        assert_eq!(overlap("12", "21321"), 1);
        assert_eq!(overlap("", "123"), 0);
    }
}
