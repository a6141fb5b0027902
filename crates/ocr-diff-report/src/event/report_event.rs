//! Events emitted by the report state for the host to observe.

use crate::model::NodeId;
use crate::sort::SortDirection;
use serde::Serialize;

/// Events describing what an action changed in the document.
///
/// The document is mutated in place; events let a host mirror the changes
/// (for example into a live page) without diffing the tree.
///
/// # Example
///
/// ```ignore
/// for event in report.handle_action(ReportAction::PointerEnter(span)) {
///     match event {
///         ReportEvent::StatusChanged { target, text } => {
///             bridge.set_text(target, &text);
///         }
///         other => bridge.forward(other.to_json()?),
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReportEvent {
    /// The highlight class was added to every member of a diff group.
    GroupHighlighted {
        /// Shared diff group class token.
        token: String,
        /// Group members in document order.
        elements: Vec<NodeId>,
    },

    /// The highlight class was removed from every member of a diff group.
    GroupCleared { token: String, elements: Vec<NodeId> },

    /// A status display now shows `text` (empty when cleared).
    StatusChanged { target: NodeId, text: String },

    /// The body rows of a table were reordered.
    RowsSorted {
        table: NodeId,
        /// Zero-based column index of the clicked header.
        column: usize,
        direction: SortDirection,
        /// Number of rows reordered.
        rows: usize,
    },
}

impl ReportEvent {
    /// Serialize the event as a JSON object tagged by `type`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_event_json_shape() {
        let mut doc = Document::new();
        let status = doc.append_element(doc.root(), "span", "status-box").unwrap();

        let event = ReportEvent::StatusChanged {
            target: status,
            text: "line 4".to_string(),
        };
        assert_eq!(
            event.to_json().unwrap(),
            format!(
                r#"{{"type":"status_changed","target":{},"text":"line 4"}}"#,
                status.index()
            )
        );
    }

    #[test]
    fn test_sort_event_json_shape() {
        let doc = Document::new();
        let event = ReportEvent::RowsSorted {
            table: doc.root(),
            column: 2,
            direction: SortDirection::Descending,
            rows: 3,
        };
        assert_eq!(
            event.to_json().unwrap(),
            r#"{"type":"rows_sorted","table":0,"column":2,"direction":"descending","rows":3}"#
        );
    }
}
