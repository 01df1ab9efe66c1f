//! Minimal superpermutations via reduction to symmetric TSP.
//!
//! The minimal superpermutation problem on `n` symbols is encoded as an
//! asymmetric TSP over all `n!` permutations (edge weight = symbols that
//! must be appended to move from one permutation to the next), converted to
//! a symmetric instance by node doubling, and written out in TSPLIB format
//! for an external solver. The solver's tour is decoded back into a
//! superpermutation by stitching permutations with maximal suffix/prefix
//! overlap, and any candidate string can be verified for completeness.

pub mod cli;
pub mod logging;

mod atsp;
mod decode;
mod error;
mod instance;
mod perm;
mod verify;

pub use atsp::AtspMatrix;
pub use decode::decode_tour;
pub use error::{Error, Result};
pub use instance::build_instance;
pub use perm::{PermTable, overlap};
pub use verify::{Verification, verify_superperm};
