use rayon::prelude::*;

use crate::perm::PermTable;

/// Asymmetric distance matrix over the permutation graph.
///
/// `distance(p, q)` is the number of symbols that must be appended to a
/// string ending in permutation `p` so that it ends in permutation `q`,
/// i.e. `n` minus their maximal suffix/prefix overlap. The lexicographically
/// first ("ordered") permutation is an absorbing terminal: every edge into
/// it costs 0, so an optimal Hamiltonian path may stop there for free.
pub struct AtspMatrix {
    buffer: i64,
    infinity: i64,
    rows: Vec<Vec<i64>>,
}

impl AtspMatrix {
    /// Builds the full `n! x n!` matrix. Rows are independent, so they are
    /// computed in parallel.
    pub fn build(perms: &PermTable) -> Self {
        let n = perms.n();
        let buffer = (3 * n + 1) as i64;
        // Exceeds any finite tour weight for the supported range of n.
        let infinity = (buffer + n as i64) * perms.len() as i64;
        let ordered: Vec<u8> = (0..n as u8).collect();

        let rows: Vec<Vec<i64>> = (0..perms.len())
            .into_par_iter()
            .map(|p| {
                let from = perms.perm(p);
                (0..perms.len())
                    .map(|q| transition_cost(from, perms.perm(q), &ordered, infinity))
                    .collect()
            })
            .collect();

        Self {
            buffer,
            infinity,
            rows,
        }
    }

    /// Per-edge constant added by the node-doubling conversion.
    pub fn buffer(&self) -> i64 {
        self.buffer
    }

    /// Sentinel weight for forbidden edges.
    pub fn infinity(&self) -> i64 {
        self.infinity
    }

    /// Number of permutations (`n!`).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn distance(&self, p: usize, q: usize) -> i64 {
        self.rows[p][q]
    }
}

/// Smallest shift `i` with `p[i..] == q[..n-i]`, scanning upward so the
/// first hit corresponds to the maximal overlap. `i = n` always matches
/// (empty overlap), so the sentinel is only reachable for degenerate input.
fn transition_cost(p: &[u8], q: &[u8], ordered: &[u8], infinity: i64) -> i64 {
    if q == ordered {
        return 0;
    }

    let n = p.len();
    for i in 0..=n {
        if p[i..] == q[..n - i] {
            return i as i64;
        }
    }
    infinity
}
