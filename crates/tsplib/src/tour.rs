//! Solver tour parsing.
//!
//! Two formats are accepted and normalized to a 0-based visiting order:
//! Concorde `.sol` output (a node-count token followed by exactly that many
//! 0-based node ids) and TSPLIB tour files (`TOUR_SECTION` with 1-based ids
//! and a `-1` terminator). The format is detected from the file content.

use std::{fs, path::Path};

use crate::{TsplibError, TsplibResult};

const TOUR_SECTION_HEADER: &str = "TOUR_SECTION";
const TOUR_END_MARKER: &str = "-1";
const EOF_MARKER: &str = "EOF";
const TSPLIB_NODE_ID_OFFSET: usize = 1;

/// A solver-produced tour, 0-based regardless of source format.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SolverTour {
    pub dimension: Option<usize>,
    /// Node identifiers in visiting order.
    pub nodes: Vec<usize>,
}

impl SolverTour {
    /// Reads and parses a tour file from disk.
    pub fn from_file(path: &Path) -> TsplibResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    /// Parses tour text, auto-detecting Concorde vs TSPLIB layout.
    pub fn from_text(text: &str) -> TsplibResult<Self> {
        let is_tsplib = text
            .lines()
            .any(|line| line.trim().eq_ignore_ascii_case(TOUR_SECTION_HEADER));

        if is_tsplib {
            Self::parse_tsplib(text)
        } else {
            Self::parse_concorde(text)
        }
    }

    fn parse_concorde(text: &str) -> TsplibResult<Self> {
        let mut tokens = text.split_whitespace();
        let count_token = tokens
            .next()
            .ok_or_else(|| TsplibError::invalid_data("Empty solution file"))?;
        let count: usize = count_token.parse().map_err(|e| {
            TsplibError::invalid_data(format!("Bad node count '{count_token}': {e}"))
        })?;

        let mut nodes = Vec::with_capacity(count);
        for token in tokens {
            let id: usize = token.parse().map_err(|e| {
                TsplibError::invalid_data(format!("Bad tour token '{token}': {e}"))
            })?;
            nodes.push(id);
        }

        if nodes.len() != count {
            return Err(TsplibError::invalid_data(format!(
                "Node count is {count}, but the solution lists {} nodes",
                nodes.len()
            )));
        }

        Ok(Self {
            dimension: Some(count),
            nodes,
        })
    }

    /// Parsing is intentionally permissive: unknown headers are ignored and
    /// non-positive node ids in `TOUR_SECTION` (except the `-1` terminator)
    /// are skipped.
    fn parse_tsplib(text: &str) -> TsplibResult<Self> {
        let mut tour = Self::default();
        let mut in_tour_section = false;
        let mut tour_terminated = false;

        for raw_line in text.lines() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            if line.eq_ignore_ascii_case(EOF_MARKER) {
                break;
            }

            if !in_tour_section {
                if line.eq_ignore_ascii_case(TOUR_SECTION_HEADER) {
                    in_tour_section = true;
                    continue;
                }

                if let Some((key, value)) = line
                    .split_once(':')
                    .or_else(|| line.split_once('='))
                    .map(|(key, value)| (key.trim().to_ascii_uppercase(), value.trim()))
                {
                    match key.as_str() {
                        "TYPE" => {
                            if !value.eq_ignore_ascii_case("TOUR") {
                                return Err(TsplibError::invalid_data(format!(
                                    "Unsupported tour TYPE '{value}'"
                                )));
                            }
                        }
                        "DIMENSION" => {
                            let parsed = value.parse::<usize>().map_err(|e| {
                                TsplibError::invalid_data(format!(
                                    "Bad DIMENSION value '{value}': {e}"
                                ))
                            })?;
                            tour.dimension = Some(parsed);
                        }
                        _ => {}
                    }
                }

                continue;
            }

            for token in line.split_whitespace() {
                if token == TOUR_END_MARKER || token.eq_ignore_ascii_case(EOF_MARKER) {
                    tour_terminated = true;
                    break;
                }

                let id: isize = token.parse().map_err(|e| {
                    TsplibError::invalid_data(format!("Bad tour token '{token}': {e}"))
                })?;

                if id < TSPLIB_NODE_ID_OFFSET as isize {
                    continue;
                }
                tour.nodes.push(id as usize - TSPLIB_NODE_ID_OFFSET);
            }

            if tour_terminated {
                break;
            }
        }

        if !in_tour_section {
            return Err(TsplibError::invalid_data("Missing TOUR_SECTION"));
        }

        if let Some(dimension) = tour.dimension
            && dimension != tour.nodes.len()
        {
            return Err(TsplibError::invalid_data(format!(
                "DIMENSION is {dimension}, but TOUR_SECTION has {} nodes",
                tour.nodes.len()
            )));
        }

        Ok(tour)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        path::PathBuf,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::SolverTour;
    use crate::TsplibError;

    fn unique_temp_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("tsplib-tests-{name}-{nanos}"))
    }

    #[test]
    fn parses_concorde_sol_with_leading_count() {
        let tour = SolverTour::from_text("4\n0 2 1 3\n").expect("parse sol text");
        assert_eq!(tour.dimension, Some(4));
        assert_eq!(tour.nodes, vec![0, 2, 1, 3]);
    }

    #[test]
    fn concorde_count_mismatch_is_rejected() {
        let err = SolverTour::from_text("3\n0 2 1 3\n").expect_err("count mismatch");
        assert!(matches!(err, TsplibError::InvalidData(_)));
    }

    #[test]
    fn empty_solution_is_rejected() {
        let err = SolverTour::from_text("  \n").expect_err("empty file");
        assert!(matches!(err, TsplibError::InvalidData(_)));
    }

    #[test]
    fn parses_tsplib_tour_and_converts_to_zero_based() {
        let text = "NAME : problem.42.tour\nCOMMENT : Length = 42\nTYPE : TOUR\nDIMENSION : 3\nTOUR_SECTION\n2\n1\n3\n-1\nEOF\n";
        let tour = SolverTour::from_text(text).expect("parse tsplib tour");
        assert_eq!(tour.dimension, Some(3));
        assert_eq!(tour.nodes, vec![1, 0, 2]);
    }

    #[test]
    fn tsplib_tour_skips_non_positive_non_terminator_ids() {
        let tour =
            SolverTour::from_text("TOUR_SECTION\n0\n-5\n2\n1\n-1\nEOF\n").expect("parse tour");
        assert_eq!(tour.nodes, vec![1, 0]);
    }

    #[test]
    fn tsplib_dimension_mismatch_is_rejected() {
        let err = SolverTour::from_text("DIMENSION : 5\nTOUR_SECTION\n1\n2\n-1\n")
            .expect_err("dimension mismatch");
        assert!(matches!(err, TsplibError::InvalidData(_)));
    }

    #[test]
    fn from_file_reads_sol_from_disk() {
        let dir = unique_temp_dir("sol-file");
        fs::create_dir_all(&dir).expect("create temp dir");

        let path = dir.join("run.sol");
        fs::write(&path, "2\n1 0\n").expect("write sol file");

        let tour = SolverTour::from_file(&path).expect("parse sol file");
        assert_eq!(tour.nodes, vec![1, 0]);

        fs::remove_dir_all(&dir).expect("cleanup temp dir");
    }
}
