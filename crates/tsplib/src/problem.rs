use std::{
    fmt::{Display, Formatter},
    fs,
    path::Path,
};

use crate::{TsplibResult, spec_writer::SpecWriter};

/// TSPLIB `TYPE` values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TsplibProblemType {
    Tsp,
    Atsp,
    Tour,
}

impl Display for TsplibProblemType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::Tsp => "TSP",
            Self::Atsp => "ATSP",
            Self::Tour => "TOUR",
        };
        write!(f, "{value}")
    }
}

/// TSPLIB `EDGE_WEIGHT_TYPE` values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EdgeWeightType {
    Explicit,
}

impl Display for EdgeWeightType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explicit => write!(f, "EXPLICIT"),
        }
    }
}

/// TSPLIB `EDGE_WEIGHT_FORMAT` values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EdgeWeightFormat {
    FullMatrix,
    UpperRow,
    LowerRow,
    UpperDiagRow,
    LowerDiagRow,
}

impl Display for EdgeWeightFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::FullMatrix => "FULL_MATRIX",
            Self::UpperRow => "UPPER_ROW",
            Self::LowerRow => "LOWER_ROW",
            Self::UpperDiagRow => "UPPER_DIAG_ROW",
            Self::LowerDiagRow => "LOWER_DIAG_ROW",
        };
        write!(f, "{value}")
    }
}

/// TSPLIB `NODE_COORD_TYPE` values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeCoordType {
    TwodCoords,
    ThreedCoords,
    NoCoords,
}

impl Display for NodeCoordType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::TwodCoords => "TWOD_COORDS",
            Self::ThreedCoords => "THREED_COORDS",
            Self::NoCoords => "NO_COORDS",
        };
        write!(f, "{value}")
    }
}

/// TSPLIB `DISPLAY_DATA_TYPE` values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DisplayDataType {
    CoordDisplay,
    TwodDisplay,
    NoDisplay,
}

impl Display for DisplayDataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::CoordDisplay => "COORD_DISPLAY",
            Self::TwodDisplay => "TWOD_DISPLAY",
            Self::NoDisplay => "NO_DISPLAY",
        };
        write!(f, "{value}")
    }
}

/// TSPLIB problem model for explicit-weight instances.
///
/// `Display` renders the full file text; `edge_weight_section` rows are
/// emitted verbatim, so their shape must already match
/// `edge_weight_format` (e.g. one row per node except the last for
/// `UPPER_ROW`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TsplibProblem {
    pub name: String,
    pub problem_type: TsplibProblemType,
    pub comment_lines: Vec<String>,
    pub dimension: Option<usize>,
    pub edge_weight_type: Option<EdgeWeightType>,
    pub edge_weight_format: Option<EdgeWeightFormat>,
    pub node_coord_type: Option<NodeCoordType>,
    pub display_data_type: Option<DisplayDataType>,
    pub edge_weight_section: Vec<Vec<i64>>,
    pub emit_eof: bool,
}

impl TsplibProblem {
    pub fn new(name: impl Into<String>, problem_type: TsplibProblemType) -> Self {
        Self {
            name: name.into(),
            problem_type,
            comment_lines: Vec::new(),
            dimension: None,
            edge_weight_type: None,
            edge_weight_format: None,
            node_coord_type: None,
            display_data_type: None,
            edge_weight_section: Vec::new(),
            emit_eof: true,
        }
    }

    pub fn write_to_file(&self, path: &Path) -> TsplibResult<()> {
        fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl Display for TsplibProblem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut writer = SpecWriter::new(f);

        writer.kv_colon("NAME", &self.name)?;
        writer.kv_colon("TYPE", self.problem_type)?;

        for comment in &self.comment_lines {
            writer.kv_colon("COMMENT", comment)?;
        }

        writer.opt_kv_colon("DIMENSION", self.dimension)?;
        writer.opt_kv_colon("EDGE_WEIGHT_TYPE", self.edge_weight_type)?;
        writer.opt_kv_colon("EDGE_WEIGHT_FORMAT", self.edge_weight_format)?;
        writer.opt_kv_colon("NODE_COORD_TYPE", self.node_coord_type)?;
        writer.opt_kv_colon("DISPLAY_DATA_TYPE", self.display_data_type)?;

        if !self.edge_weight_section.is_empty() {
            writer.line("EDGE_WEIGHT_SECTION")?;
            for row in &self.edge_weight_section {
                writer.row(row)?;
            }
        }

        if self.emit_eof {
            writer.line("EOF")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        path::PathBuf,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::{
        DisplayDataType, EdgeWeightFormat, EdgeWeightType, NodeCoordType, TsplibProblem,
        TsplibProblemType,
    };

    fn unique_temp_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("tsplib-tests-{name}-{nanos}"))
    }

    #[test]
    fn display_emits_header_fields_and_weight_section() {
        let mut problem = TsplibProblem::new("sample", TsplibProblemType::Tsp);
        problem.comment_lines.push("first".to_string());
        problem.comment_lines.push("second".to_string());
        problem.dimension = Some(3);
        problem.edge_weight_type = Some(EdgeWeightType::Explicit);
        problem.edge_weight_format = Some(EdgeWeightFormat::FullMatrix);
        problem.node_coord_type = Some(NodeCoordType::NoCoords);
        problem.display_data_type = Some(DisplayDataType::NoDisplay);
        problem.edge_weight_section = vec![vec![0, 7, 3], vec![7, 0, 5], vec![3, 5, 0]];

        let text = problem.to_string();
        assert!(text.contains("NAME: sample"));
        assert!(text.contains("TYPE: TSP"));
        assert!(text.contains("COMMENT: first"));
        assert!(text.contains("COMMENT: second"));
        assert!(text.contains("DIMENSION: 3"));
        assert!(text.contains("EDGE_WEIGHT_TYPE: EXPLICIT"));
        assert!(text.contains("EDGE_WEIGHT_FORMAT: FULL_MATRIX"));
        assert!(text.contains("NODE_COORD_TYPE: NO_COORDS"));
        assert!(text.contains("DISPLAY_DATA_TYPE: NO_DISPLAY"));
        assert!(text.contains("EDGE_WEIGHT_SECTION\n0 7 3\n7 0 5\n3 5 0\n"));
        assert!(text.ends_with("EOF\n"));
    }

    #[test]
    fn display_keeps_headers_before_sections() {
        let mut problem = TsplibProblem::new("sample", TsplibProblemType::Tsp);
        problem.dimension = Some(4);
        problem.edge_weight_type = Some(EdgeWeightType::Explicit);
        problem.edge_weight_format = Some(EdgeWeightFormat::UpperRow);
        problem.edge_weight_section = vec![vec![1, 2, 3], vec![4, 5], vec![6]];

        let text = problem.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "NAME: sample");
        assert_eq!(lines[1], "TYPE: TSP");
        assert_eq!(lines[2], "DIMENSION: 4");
        assert_eq!(lines[3], "EDGE_WEIGHT_TYPE: EXPLICIT");
        assert_eq!(lines[4], "EDGE_WEIGHT_FORMAT: UPPER_ROW");
        assert_eq!(lines[5], "EDGE_WEIGHT_SECTION");
        assert_eq!(lines[6], "1 2 3");
        assert_eq!(lines[7], "4 5");
        assert_eq!(lines[8], "6");
        assert_eq!(lines[9], "EOF");
    }

    #[test]
    fn write_to_file_round_trips_text() {
        let dir = unique_temp_dir("problem-writer");
        fs::create_dir_all(&dir).expect("create temp dir");

        let mut problem = TsplibProblem::new("disk", TsplibProblemType::Tsp);
        problem.dimension = Some(2);
        problem.edge_weight_type = Some(EdgeWeightType::Explicit);
        problem.edge_weight_format = Some(EdgeWeightFormat::UpperRow);
        problem.edge_weight_section = vec![vec![9]];

        let path = dir.join("disk.tsp");
        problem.write_to_file(&path).expect("write problem file");

        let text = fs::read_to_string(&path).expect("read problem file");
        assert_eq!(text, problem.to_string());

        fs::remove_dir_all(&dir).expect("cleanup temp dir");
    }
}
