use log::info;
use tsplib::problem::{
    DisplayDataType, EdgeWeightFormat, EdgeWeightType, NodeCoordType, TsplibProblem,
    TsplibProblemType,
};

use crate::{Result, atsp::AtspMatrix, perm::PermTable};

/// Builds the symmetric TSP instance whose optimal tour encodes a minimal
/// superpermutation on `n` symbols.
///
/// Node doubling (Jonker-Volgenant): each permutation `p` becomes an
/// out-copy `p` and an in-copy `n! + p`. The only finite edges are
/// `p -> n!+q` with weight `atsp(p, q) + buffer` (0 when `p == q`, pairing
/// the two copies); everything same-polarity is the sentinel. The buffer
/// constant cancels between finite tours but keeps them all cheaper than
/// any forbidden edge.
///
/// Instance size is `2 * n!` nodes with an `O(n!^2)` weight section; that
/// growth is inherent to the reduction.
pub fn build_instance(n: usize) -> Result<TsplibProblem> {
    let perms = PermTable::new(n)?;
    let atsp = AtspMatrix::build(&perms);
    let dimension = perms.len() * 2;

    let mut problem = TsplibProblem::new(format!("minsuperperm{n}"), TsplibProblemType::Tsp);
    problem.dimension = Some(dimension);
    problem.edge_weight_type = Some(EdgeWeightType::Explicit);
    problem.edge_weight_format = Some(EdgeWeightFormat::UpperRow);
    problem.node_coord_type = Some(NodeCoordType::NoCoords);
    problem.display_data_type = Some(DisplayDataType::NoDisplay);
    problem.edge_weight_section = symmetric_upper_rows(&atsp);

    info!(
        "instance: n={n} perms={} dimension={dimension} buffer={} infinity={}",
        perms.len(),
        atsp.buffer(),
        atsp.infinity()
    );

    Ok(problem)
}

/// Upper-triangular rows (one per node except the last) of the doubled
/// weight matrix: out-copies first, then in-copies.
fn symmetric_upper_rows(atsp: &AtspMatrix) -> Vec<Vec<i64>> {
    let count = atsp.len();
    let infinity = atsp.infinity();
    let buffer = atsp.buffer();

    let mut rows = Vec::with_capacity(count * 2 - 1);

    // Out-copy rows: a same-polarity sentinel run, then the in-copy block.
    for i in 0..count {
        let mut row = vec![infinity; count - i - 1];
        row.reserve(count);
        for j in 0..count {
            row.push(if i == j { 0 } else { atsp.distance(i, j) + buffer });
        }
        rows.push(row);
    }

    // In-copy rows only face other in-copies: all sentinel.
    for i in (1..count).rev() {
        rows.push(vec![infinity; i]);
    }

    rows
}
