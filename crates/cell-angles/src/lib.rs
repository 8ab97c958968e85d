//! Umbrella crate for the `cell-angles` workspace.
//!
//! Re-exports the building blocks and adds the pipeline that turns a label
//! image plus a user polyline into the boundary records of a cell file:
//!
//! 1. labels crossed by the polyline, first-encounter order ([`extract_labels`]),
//! 2. centroid path, optionally smoothed ([`build_path_curve`], [`smooth_path`]),
//! 3. per adjacent pair: wall pixels, wall ends, inner/outer points and angle
//!    ([`analyze_boundary`]).
//!
//! The run stops appending records at the first pair whose inner or outer
//! point cannot be found and reports it in [`Outcome::Aborted`].

mod pipeline;
mod report;

pub use ca_boundary::*;
pub use ca_core::*;
pub use ca_raster::*;
pub use ca_regions::*;

pub use pipeline::{
    AnalysisOptions, BoundaryRecord, CellFile, Outcome, TISSUE_PRESETS, analyze_cell_file,
    analyze_cell_file_with, compute_cell_file_boundaries,
};
pub use report::{BoundaryRow, LOG_HEADER};
