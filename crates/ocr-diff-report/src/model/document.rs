//! Arena-backed document tree of a rendered report.

use super::ClassList;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Address of a node in a [`Document`].
///
/// Ids stay valid for the lifetime of the document; detached nodes keep their
/// slot in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors raised while building or restructuring a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("Unknown node {0}")]
    UnknownNode(NodeId),

    #[error("Node {0} is not an element")]
    NotAnElement(NodeId),

    #[error("The document root cannot be moved")]
    CannotMoveRoot,

    #[error("Appending {child} to {parent} would create a cycle")]
    WouldCreateCycle { parent: NodeId, child: NodeId },

    #[error("Node {child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },

    #[error("Node {child} listed more than once for {parent}")]
    DuplicateChild { parent: NodeId, child: NodeId },
}

/// Element payload: tag, classes and the remaining attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// Lower-case tag name.
    pub tag: String,
    pub classes: ClassList,
    /// Attributes other than `class`, in insertion order.
    attributes: Vec<(String, String)>,
}

impl ElementData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            classes: ClassList::default(),
            attributes: Vec::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        if name == "class" {
            self.classes = ClassList::parse(value);
            return;
        }
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Synthetic root holding the top-level nodes.
    Document,
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A report document: a tree of elements and text nodes.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    /// Text nodes dropped by `set_text_content`, reused by later writes.
    spare_text: Vec<NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
            spare_text: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of arena slots, attached or not.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // === Construction ===

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element(ElementData::new(tag)))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_string()))
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.check(parent)?;
        self.check(child)?;
        if child == self.root() {
            return Err(DomError::CannotMoveRoot);
        }
        if matches!(self.nodes[parent.0].kind, NodeKind::Text(_)) {
            return Err(DomError::NotAnElement(parent));
        }
        if child == parent || self.ancestors(parent).any(|a| a == child) {
            return Err(DomError::WouldCreateCycle { parent, child });
        }

        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    /// Create an element with the given classes and append it to `parent`.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        classes: &str,
    ) -> Result<NodeId, DomError> {
        let element = self.create_element(tag);
        self.set_attribute(element, "class", classes)?;
        self.append_child(parent, element)?;
        Ok(element)
    }

    /// Create a text node and append it to `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> Result<NodeId, DomError> {
        let node = self.create_text(text);
        self.append_child(parent, node)?;
        Ok(node)
    }

    /// Set an attribute. Setting `class` replaces the whole class list.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.check(node)?;
        match &mut self.nodes[node.0].kind {
            NodeKind::Element(element) => {
                element.set_attribute(name, value);
                Ok(())
            }
            _ => Err(DomError::NotAnElement(node)),
        }
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != node);
        }
    }

    fn check(&self, node: NodeId) -> Result<(), DomError> {
        if node.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(DomError::UnknownNode(node))
        }
    }

    // === Accessors ===

    pub fn kind(&self, node: NodeId) -> Option<&NodeKind> {
        self.nodes.get(node.0).map(|n| &n.kind)
    }

    pub fn element(&self, node: NodeId) -> Option<&ElementData> {
        match self.kind(node)? {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut ElementData> {
        match &mut self.nodes.get_mut(node.0)?.kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|e| e.tag.as_str())
    }

    pub fn class_list(&self, node: NodeId) -> Option<&ClassList> {
        self.element(node).map(|e| &e.classes)
    }

    pub fn class_list_mut(&mut self, node: NodeId) -> Option<&mut ClassList> {
        self.element_mut(node).map(|e| &mut e.classes)
    }

    pub fn has_class(&self, node: NodeId, token: &str) -> bool {
        self.class_list(node).is_some_and(|c| c.contains(token))
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?.attribute(name)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0)?.parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Element children of `node`, skipping text.
    pub fn element_children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(node)
            .iter()
            .copied()
            .filter(move |&c| self.element(c).is_some())
    }

    /// Element children with the given tag.
    pub fn children_by_tag<'a>(
        &'a self,
        node: NodeId,
        tag: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.element_children(node)
            .filter(move |&c| self.tag_name(c) == Some(tag))
    }

    /// Position of `node` among its parent's element children.
    pub fn element_index(&self, node: NodeId) -> Option<usize> {
        let parent = self.parent(node)?;
        self.element_children(parent).position(|c| c == node)
    }

    // === Traversal ===

    /// Ancestors of `node`, nearest first, ending at the root.
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(node), move |&n| self.parent(n))
    }

    /// All nodes below `node` in document order.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            result.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        result
    }

    /// Nearest element, starting with `node` itself, that satisfies `predicate`.
    pub fn closest<F>(&self, node: NodeId, predicate: F) -> Option<NodeId>
    where
        F: Fn(&ElementData) -> bool,
    {
        std::iter::once(node)
            .chain(self.ancestors(node))
            .find(|&n| self.element(n).is_some_and(&predicate))
    }

    /// First descendant element of `node` in document order that satisfies `predicate`.
    pub fn find_descendant<F>(&self, node: NodeId, predicate: F) -> Option<NodeId>
    where
        F: Fn(&ElementData) -> bool,
    {
        self.descendants(node)
            .into_iter()
            .find(|&n| self.element(n).is_some_and(&predicate))
    }

    /// Attached elements carrying the exact class token, in document order.
    pub fn elements_with_class(&self, token: &str) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|&n| self.has_class(n, token))
            .collect()
    }

    /// Attached elements with the given tag, in document order.
    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|&n| self.tag_name(n) == Some(tag))
            .collect()
    }

    /// First attached element whose `id` attribute equals `id`.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_descendant(self.root(), |e| e.attribute("id") == Some(id))
    }

    // === Text ===

    /// Concatenated text of `node` and everything below it.
    pub fn text_content(&self, node: NodeId) -> String {
        match self.kind(node) {
            Some(NodeKind::Text(text)) => text.clone(),
            Some(_) => self
                .descendants(node)
                .into_iter()
                .filter_map(|n| match self.kind(n) {
                    Some(NodeKind::Text(text)) => Some(text.as_str()),
                    _ => None,
                })
                .collect(),
            None => String::new(),
        }
    }

    /// Replace all children of `node` with a single text node (none if `text`
    /// is empty).
    ///
    /// A lone text child is updated in place. Text nodes removed here go back
    /// to a spare pool and may be handed out again by a later call, so ids of
    /// removed text children must not be kept.
    pub fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<(), DomError> {
        self.check(node)?;
        if let NodeKind::Text(existing) = &mut self.nodes[node.0].kind {
            *existing = text.to_string();
            return Ok(());
        }

        let lone_child = match self.nodes[node.0].children.as_slice() {
            [only] => Some(*only),
            _ => None,
        };
        if let (Some(only), false) = (lone_child, text.is_empty()) {
            if let NodeKind::Text(existing) = &mut self.nodes[only.0].kind {
                *existing = text.to_string();
                return Ok(());
            }
        }

        for child in std::mem::take(&mut self.nodes[node.0].children) {
            self.nodes[child.0].parent = None;
            if matches!(self.nodes[child.0].kind, NodeKind::Text(_)) {
                self.spare_text.push(child);
            }
        }
        if text.is_empty() {
            return Ok(());
        }

        match self.take_spare_text() {
            Some(spare) => {
                self.nodes[spare.0].kind = NodeKind::Text(text.to_string());
                self.nodes[spare.0].parent = Some(node);
                self.nodes[node.0].children.push(spare);
            }
            None => {
                self.append_text(node, text)?;
            }
        }
        Ok(())
    }

    /// Pop a spare text slot that has not been re-attached since it was freed.
    fn take_spare_text(&mut self) -> Option<NodeId> {
        while let Some(id) = self.spare_text.pop() {
            let node = &self.nodes[id.0];
            if node.parent.is_none() && matches!(node.kind, NodeKind::Text(_)) {
                return Some(id);
            }
        }
        None
    }

    // === Reordering ===

    /// Move `ordered` to the end of `parent`'s children, in that order, as one
    /// update. Children not listed keep their relative order in front.
    ///
    /// Every id must be a current child of `parent` and appear at most once;
    /// otherwise nothing is changed.
    pub fn reorder_children(&mut self, parent: NodeId, ordered: &[NodeId]) -> Result<(), DomError> {
        self.check(parent)?;
        let mut listed = HashSet::with_capacity(ordered.len());
        for &child in ordered {
            if self.parent(child) != Some(parent) {
                return Err(DomError::NotAChild { parent, child });
            }
            if !listed.insert(child) {
                return Err(DomError::DuplicateChild { parent, child });
            }
        }

        let mut children: Vec<NodeId> = self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .filter(|c| !listed.contains(c))
            .collect();
        children.extend_from_slice(ordered);
        self.nodes[parent.0].children = children;
        Ok(())
    }
}
