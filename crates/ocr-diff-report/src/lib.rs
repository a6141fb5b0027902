//! # ocr-diff-report
//!
//! Interaction layer for OCR evaluation reports: the static HTML page that
//! compares a ground truth text with an OCR result.
//!
//! Two behaviors make the report interactive:
//!
//! - **Diff group highlighting**: both sides of an aligned difference share a
//!   class token (e.g. `cdiff12`). Hovering either side highlights every
//!   member of the group and shows the segment label in the panel's status box.
//! - **Table sorting**: clicking a header cell sorts the table body by that
//!   column in natural order (numbers by value, case and accents ignored),
//!   alternating ascending and descending per header.
//!
//! ## Design Principles
//!
//! The crate owns no rendering and no event loop. It operates on an in-memory
//! [`Document`] built by the host and is **instrumented**: every action
//! mutates the document in place and returns [`ReportEvent`]s describing the
//! change, so a host can mirror them into a live page.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ocr_diff_report::{Document, ReportAction, ReportState};
//! use ocr_report_config::ReportConventions;
//!
//! let document: Document = build_report_tree();
//! let mut report = ReportState::new(document, &ReportConventions::default());
//!
//! // Map pointer/click input to actions
//! for event in report.handle_action(ReportAction::PointerEnter(span)) {
//!     bridge.send(event.to_json()?);
//! }
//!
//! // Write the current state back out
//! let html = report.document().to_html();
//! ```

pub mod action;
pub mod event;
pub mod highlight;
pub mod model;
pub mod sort;
pub mod state;
pub mod traits;

// Re-export commonly used types
pub use action::ReportAction;
pub use event::ReportEvent;
pub use highlight::{resolve_diff_group_token, DiffHighlighter};
pub use model::{ClassList, Document, DomError, ElementData, NodeId, NodeKind};
pub use sort::{natural_cmp, SortDirection, TableSorter};
pub use state::{BoundTargets, ReportState};
pub use traits::{GlobalStatusElement, ScopedStatusBox, StatusTarget};
