//! Hover highlighting of diff groups.

use super::group_token::resolve_diff_group_token;
use crate::event::ReportEvent;
use crate::model::{Document, NodeId};
use crate::traits::{status_target_for, StatusTarget};
use ocr_report_config::ReportConventions;

/// Highlights every member of a diff group while one of them is hovered.
///
/// Groups are looked up by scanning the document on every event; no node
/// references survive between events.
#[derive(Debug)]
pub struct DiffHighlighter {
    highlight_class: String,
    segment_attribute: String,
    status: Box<dyn StatusTarget>,
}

impl DiffHighlighter {
    /// Create a highlighter following the given conventions.
    pub fn new(conventions: &ReportConventions) -> Self {
        Self::with_status_target(conventions, status_target_for(conventions))
    }

    /// Create a highlighter with a custom status display strategy.
    pub fn with_status_target(
        conventions: &ReportConventions,
        status: Box<dyn StatusTarget>,
    ) -> Self {
        Self {
            highlight_class: conventions.highlight_class.clone(),
            segment_attribute: conventions.segment_attribute.clone(),
            status,
        }
    }

    /// Diff group token of `element`, if it has one.
    pub fn group_token(&self, document: &Document, element: NodeId) -> Option<String> {
        let classes = document.class_list(element)?.to_string();
        resolve_diff_group_token(&classes).map(str::to_string)
    }

    /// Pointer entered `element`: highlight its group and show its segment.
    pub fn enter(&self, document: &mut Document, element: NodeId) -> Vec<ReportEvent> {
        let Some(token) = self.group_token(document, element) else {
            log::debug!("No diff group on {}, nothing to highlight", element);
            return Vec::new();
        };

        let elements = document.elements_with_class(&token);
        for &member in &elements {
            if let Some(classes) = document.class_list_mut(member) {
                classes.add(&self.highlight_class);
            }
        }
        log::debug!("Highlighted {} element(s) of {}", elements.len(), token);

        let mut events = vec![ReportEvent::GroupHighlighted { token, elements }];

        let segment_id = document
            .attribute(element, &self.segment_attribute)
            .map(str::to_string);
        if let Some(segment_id) = segment_id {
            events.extend(self.set_status(document, element, &segment_id));
        }
        events
    }

    /// Pointer left `element`: clear its group and the status display.
    pub fn leave(&self, document: &mut Document, element: NodeId) -> Vec<ReportEvent> {
        let Some(token) = self.group_token(document, element) else {
            log::debug!("No diff group on {}, nothing to clear", element);
            return Vec::new();
        };

        let elements = document.elements_with_class(&token);
        for &member in &elements {
            if let Some(classes) = document.class_list_mut(member) {
                classes.remove(&self.highlight_class);
            }
        }

        let mut events = vec![ReportEvent::GroupCleared { token, elements }];
        events.extend(self.set_status(document, element, ""));
        events
    }

    fn set_status(
        &self,
        document: &mut Document,
        element: NodeId,
        text: &str,
    ) -> Option<ReportEvent> {
        let target = self.status.resolve(document, element)?;
        if let Err(e) = document.set_text_content(target, text) {
            log::warn!("Failed to update status display {}: {}", target, e);
            return None;
        }
        Some(ReportEvent::StatusChanged {
            target,
            text: text.to_string(),
        })
    }
}
