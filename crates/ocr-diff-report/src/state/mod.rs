//! State management for an interactive report.

mod report_state;

pub use report_state::{BoundTargets, ReportState};
