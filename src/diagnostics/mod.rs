//! Serializable reports produced by the line tools.
//!
//! `ScanReport` bundles the grid summary, the found lines with derived
//! geometry and a per-stage timing breakdown.

pub mod report;
pub mod timing;

pub use report::{InputDescriptor, LineDescriptor, ScanReport};
pub use timing::{StageTiming, TimingBreakdown};
