//! Report Actions
//!
//! Tagged user interactions the report state can process. The host maps its
//! own input events (a browser bridge, a test driver, a replay log) to these
//! actions and dispatches them.

use crate::model::NodeId;

/// User interactions on a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportAction {
    /// Pointer moved onto an element
    PointerEnter(NodeId),
    /// Pointer moved off an element
    PointerLeave(NodeId),
    /// Element was clicked
    Click(NodeId),
}

impl ReportAction {
    /// Node the action happened on
    pub fn target(&self) -> NodeId {
        match *self {
            ReportAction::PointerEnter(node)
            | ReportAction::PointerLeave(node)
            | ReportAction::Click(node) => node,
        }
    }

    /// Check if this action is a pointer movement
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            ReportAction::PointerEnter(_) | ReportAction::PointerLeave(_)
        )
    }
}
