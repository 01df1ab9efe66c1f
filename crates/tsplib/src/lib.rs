//! `tsplib` models the file formats at the solver boundary: TSPLIB
//! problem files with explicit edge weights, and the tour output produced
//! by symmetric TSP solvers (Concorde `.sol` files and TSPLIB tour files).
//!
//! # Quickstart
//!
//! ```no_run
//! use tsplib::problem::{EdgeWeightFormat, EdgeWeightType, TsplibProblem, TsplibProblemType};
//!
//! fn main() -> tsplib::TsplibResult<()> {
//!     let mut problem = TsplibProblem::new("triangle", TsplibProblemType::Tsp);
//!     problem.dimension = Some(3);
//!     problem.edge_weight_type = Some(EdgeWeightType::Explicit);
//!     problem.edge_weight_format = Some(EdgeWeightFormat::UpperRow);
//!     problem.edge_weight_section = vec![vec![7, 3], vec![5]];
//!     problem.write_to_file(std::path::Path::new("triangle.tsp"))?;
//!     Ok(())
//! }
//! ```

pub mod problem;
pub mod tour;

mod error;
mod spec_writer;

pub use error::{TsplibError, TsplibResult};
