use log::debug;

use crate::{
    Error, Result,
    perm::{PermTable, overlap},
};

/// Decodes a symmetric-TSP tour over the doubled node set into a
/// superpermutation string.
///
/// The tour must visit all `2 * n!` nodes. Out-copy nodes sit on one
/// parity of the tour (which one depends on where the solver started), so
/// the decoder keeps the parity whose first node is an out-copy, checks
/// that the result visits every permutation exactly once, and stitches the
/// permutation strings with maximal overlap.
pub fn decode_tour(n: usize, tour: &[usize]) -> Result<String> {
    let perms = PermTable::new(n)?;
    let strings = perms.digit_strings();
    let count = perms.len();

    let expected = count * 2;
    if tour.len() != expected {
        return Err(Error::invalid_data(format!(
            "tour visits {} nodes, expected {expected}",
            tour.len()
        )));
    }

    let order = atsp_order(tour, count)?;

    let mut result = strings[order[0]].clone();
    for window in order.windows(2) {
        let prev = &strings[window[0]];
        let curr = &strings[window[1]];
        let shared = overlap(prev, curr);
        result.push_str(&curr[shared..]);
    }

    debug!("decode: n={n} perms={count} length={}", result.len());
    Ok(result)
}

/// Undoes the node doubling: extracts the out-copy parity and checks it
/// covers `0..count` exactly once.
fn atsp_order(tour: &[usize], count: usize) -> Result<Vec<usize>> {
    let start = usize::from(tour[0] >= count);

    let mut seen = vec![false; count];
    let mut order = Vec::with_capacity(count);
    for (step, &node) in tour.iter().skip(start).step_by(2).enumerate() {
        if node >= count {
            return Err(Error::invalid_data(format!(
                "node {node} at tour position {} is not an out-copy node (expected < {count})",
                start + step * 2
            )));
        }
        if seen[node] {
            return Err(Error::invalid_data(format!(
                "tour visits out-copy node {node} twice"
            )));
        }
        seen[node] = true;
        order.push(node);
    }

    Ok(order)
}
