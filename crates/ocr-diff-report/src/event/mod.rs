//! Events emitted by the report state.

mod report_event;

pub use report_event::ReportEvent;
