//! Trait for locating the status display of a hovered diff element.

use crate::model::{Document, NodeId};
use ocr_report_config::{ReportConventions, StatusScope};

/// Resolves where a diff element's segment label is displayed.
///
/// Implement this trait when a report lays out its status displays in a way
/// the built-in strategies do not cover. The strategy is chosen once, when
/// the report is wired up.
///
/// # Example
///
/// ```ignore
/// use ocr_diff_report::{Document, NodeId, StatusTarget};
///
/// /// Always show the label in the page footer.
/// #[derive(Debug)]
/// struct FooterStatus;
///
/// impl StatusTarget for FooterStatus {
///     fn resolve(&self, document: &Document, _element: NodeId) -> Option<NodeId> {
///         document.elements_by_tag("footer").into_iter().next()
///     }
/// }
/// ```
pub trait StatusTarget: std::fmt::Debug + Send + Sync {
    /// Status display for `element`, if the document has one.
    fn resolve(&self, document: &Document, element: NodeId) -> Option<NodeId>;
}

/// Status box scoped to the nearest enclosing container.
///
/// Walks the ancestors of the hovered element and picks the first status box
/// found below the nearest ancestor that has one. Several diff panels on one
/// page each keep their own display.
#[derive(Debug, Clone)]
pub struct ScopedStatusBox {
    status_box_class: String,
}

impl ScopedStatusBox {
    pub fn new(status_box_class: impl Into<String>) -> Self {
        Self {
            status_box_class: status_box_class.into(),
        }
    }
}

impl StatusTarget for ScopedStatusBox {
    fn resolve(&self, document: &Document, element: NodeId) -> Option<NodeId> {
        document.ancestors(element).find_map(|container| {
            document.find_descendant(container, |e| e.classes.contains(&self.status_box_class))
        })
    }
}

/// Single page-wide status element, looked up by id.
///
/// This is the layout of older reports with one diff panel.
#[derive(Debug, Clone)]
pub struct GlobalStatusElement {
    element_id: String,
}

impl GlobalStatusElement {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }
}

impl StatusTarget for GlobalStatusElement {
    fn resolve(&self, document: &Document, _element: NodeId) -> Option<NodeId> {
        document.element_by_id(&self.element_id)
    }
}

/// Build the status strategy selected by the conventions.
pub fn status_target_for(conventions: &ReportConventions) -> Box<dyn StatusTarget> {
    match conventions.status_scope {
        StatusScope::Container => Box::new(ScopedStatusBox::new(&conventions.status_box_class)),
        StatusScope::Global => Box::new(GlobalStatusElement::new(&conventions.status_element_id)),
    }
}
