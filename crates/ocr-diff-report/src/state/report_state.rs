//! Main state for an interactive report.

use crate::action::ReportAction;
use crate::event::ReportEvent;
use crate::highlight::DiffHighlighter;
use crate::model::{Document, NodeId};
use crate::sort::TableSorter;
use crate::traits::StatusTarget;
use ocr_report_config::ReportConventions;
use std::collections::BTreeSet;

/// Nodes that received interaction bindings when the report was wired up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundTargets {
    /// Diff elements listening for pointer enter/leave, in node order.
    pub pointer: Vec<NodeId>,
    /// Header cells listening for clicks, in node order.
    pub click: Vec<NodeId>,
}

/// A rendered report made interactive.
///
/// Bindings are established once in [`ReportState::new`], mirroring the
/// page's ready handler: elements added to the document afterwards do not
/// react to actions.
#[derive(Debug)]
pub struct ReportState {
    document: Document,
    highlighter: DiffHighlighter,
    sorter: TableSorter,
    pointer_targets: BTreeSet<NodeId>,
    click_targets: BTreeSet<NodeId>,
}

impl ReportState {
    /// Wire up a rendered report.
    pub fn new(document: Document, conventions: &ReportConventions) -> Self {
        let highlighter = DiffHighlighter::new(conventions);
        Self::with_highlighter(document, conventions, highlighter)
    }

    /// Wire up a rendered report with a custom status display strategy.
    pub fn with_status_target(
        document: Document,
        conventions: &ReportConventions,
        status: Box<dyn StatusTarget>,
    ) -> Self {
        let highlighter = DiffHighlighter::with_status_target(conventions, status);
        Self::with_highlighter(document, conventions, highlighter)
    }

    fn with_highlighter(
        document: Document,
        conventions: &ReportConventions,
        highlighter: DiffHighlighter,
    ) -> Self {
        let pointer_targets: BTreeSet<NodeId> = document
            .elements_with_class(&conventions.diff_class)
            .into_iter()
            .collect();
        let click_targets: BTreeSet<NodeId> =
            document.elements_by_tag("th").into_iter().collect();

        log::info!(
            "Report ready: {} diff element(s), {} sortable header(s)",
            pointer_targets.len(),
            click_targets.len()
        );

        Self {
            document,
            highlighter,
            sorter: TableSorter::new(),
            pointer_targets,
            click_targets,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Give the (possibly mutated) document back to the host.
    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn sorter(&self) -> &TableSorter {
        &self.sorter
    }

    pub fn bound_targets(&self) -> BoundTargets {
        BoundTargets {
            pointer: self.pointer_targets.iter().copied().collect(),
            click: self.click_targets.iter().copied().collect(),
        }
    }

    /// Handle an action, returning any resulting events.
    ///
    /// Actions on nodes without a matching binding are ignored. Handling
    /// never fails: anything that cannot be applied degrades to no change.
    pub fn handle_action(&mut self, action: ReportAction) -> Vec<ReportEvent> {
        let target = action.target();
        let bound = if action.is_pointer() {
            self.pointer_targets.contains(&target)
        } else {
            self.click_targets.contains(&target)
        };
        if !bound {
            log::trace!("Ignoring {:?}: no binding on {}", action, target);
            return Vec::new();
        }

        match action {
            ReportAction::PointerEnter(node) => self.highlighter.enter(&mut self.document, node),
            ReportAction::PointerLeave(node) => self.highlighter.leave(&mut self.document, node),
            ReportAction::Click(node) => self
                .sorter
                .sort_by_header(&mut self.document, node)
                .into_iter()
                .collect(),
        }
    }
}
