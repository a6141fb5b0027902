//! Document model of a rendered report.

mod class_list;
mod document;
mod markup;

pub use class_list::ClassList;
pub use document::{Document, DomError, ElementData, NodeId, NodeKind};
