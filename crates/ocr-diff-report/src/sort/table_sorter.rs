//! Sorting of table body rows by a clicked header column.

use super::natural_cmp;
use crate::event::ReportEvent;
use crate::model::{Document, NodeId};
use serde::Serialize;
use std::collections::HashMap;

/// Order in which rows were arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sorts table rows when a header cell is clicked.
///
/// Every header owns an "ascending" flag, unset until its first click. Each
/// click flips the flag, so a header sorts ascending, then descending, then
/// ascending again, independently of clicks on other headers.
#[derive(Debug, Clone, Default)]
pub struct TableSorter {
    ascending: HashMap<NodeId, bool>,
}

impl TableSorter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored flag of `header` (false before its first click).
    pub fn is_ascending(&self, header: NodeId) -> bool {
        self.ascending.get(&header).copied().unwrap_or(false)
    }

    /// Sort the body rows of the table enclosing `header` by its column.
    ///
    /// Only the table's first `tbody` is sorted; rows of any further bodies
    /// keep their order.
    ///
    /// Returns `None` without touching any state if the header is not inside
    /// a table with a `tbody`.
    pub fn sort_by_header(&mut self, document: &mut Document, header: NodeId) -> Option<ReportEvent> {
        let table = document.closest(header, |e| e.tag == "table")?;
        let column = document.element_index(header)?;
        let Some(tbody) = document.children_by_tag(table, "tbody").next() else {
            log::debug!("Table {} has no body, nothing to sort", table);
            return None;
        };

        let snapshot: &Document = document;
        let mut rows: Vec<(NodeId, String)> = snapshot
            .children_by_tag(tbody, "tr")
            .map(|row| (row, cell_key(snapshot, row, column)))
            .collect();
        rows.sort_by(|(_, a), (_, b)| natural_cmp(a, b));

        let ascending = !self.is_ascending(header);
        self.ascending.insert(header, ascending);
        if !ascending {
            rows.reverse();
        }

        let ordered: Vec<NodeId> = rows.into_iter().map(|(row, _)| row).collect();
        if let Err(e) = document.reorder_children(tbody, &ordered) {
            log::warn!("Failed to reorder rows of {}: {}", table, e);
            return None;
        }

        let direction = if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };
        log::debug!(
            "Sorted {} row(s) of {} by column {} ({:?})",
            ordered.len(),
            table,
            column,
            direction
        );

        Some(ReportEvent::RowsSorted {
            table,
            column,
            direction,
            rows: ordered.len(),
        })
    }
}

/// Lower-cased text of the `column`-th data cell of `row`, empty if absent.
fn cell_key(document: &Document, row: NodeId, column: usize) -> String {
    document
        .children_by_tag(row, "td")
        .nth(column)
        .map(|cell| document.text_content(cell).to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Table {
        doc: Document,
        headers: Vec<NodeId>,
        tbody: NodeId,
    }

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        let mut doc = Document::new();
        let table = doc.append_element(doc.root(), "table", "table").unwrap();
        let thead = doc.append_element(table, "thead", "").unwrap();
        let head_row = doc.append_element(thead, "tr", "").unwrap();
        let headers = headers
            .iter()
            .map(|h| {
                let th = doc.append_element(head_row, "th", "").unwrap();
                doc.append_text(th, h).unwrap();
                th
            })
            .collect();
        let tbody = doc.append_element(table, "tbody", "").unwrap();
        for row in rows {
            let tr = doc.append_element(tbody, "tr", "").unwrap();
            for cell in row.iter() {
                let td = doc.append_element(tr, "td", "").unwrap();
                doc.append_text(td, cell).unwrap();
            }
        }
        Table {
            doc,
            headers,
            tbody,
        }
    }

    fn column(t: &Table, index: usize) -> Vec<String> {
        t.doc
            .children_by_tag(t.tbody, "tr")
            .map(|row| cell_key(&t.doc, row, index))
            .collect()
    }

    #[test]
    fn test_numeric_column_toggles() {
        let mut t = table(&["n"], &[&["10"], &["2"], &["1"]]);
        let mut sorter = TableSorter::new();

        let event = sorter.sort_by_header(&mut t.doc, t.headers[0]);
        assert_eq!(column(&t, 0), vec!["1", "2", "10"]);
        assert!(matches!(
            event,
            Some(ReportEvent::RowsSorted {
                column: 0,
                direction: SortDirection::Ascending,
                rows: 3,
                ..
            })
        ));

        let event = sorter.sort_by_header(&mut t.doc, t.headers[0]);
        assert_eq!(column(&t, 0), vec!["10", "2", "1"]);
        assert!(matches!(
            event,
            Some(ReportEvent::RowsSorted {
                direction: SortDirection::Descending,
                ..
            })
        ));
    }

    #[test]
    fn test_case_insensitive_first_click() {
        let mut t = table(&["word"], &[&["Banana"], &["apple"]]);
        TableSorter::new().sort_by_header(&mut t.doc, t.headers[0]);
        assert_eq!(column(&t, 0), vec!["apple", "banana"]);
    }

    #[test]
    fn test_headers_keep_independent_flags() {
        let mut t = table(
            &["gt", "ocr", "count"],
            &[&["b", "x", "3"], &["a", "z", "1"], &["c", "y", "2"]],
        );
        let mut sorter = TableSorter::new();
        let (a, b) = (t.headers[0], t.headers[2]);

        sorter.sort_by_header(&mut t.doc, a);
        let after_first = sorter.is_ascending(a);
        assert!(after_first);

        sorter.sort_by_header(&mut t.doc, b);
        assert_eq!(column(&t, 2), vec!["1", "2", "3"]);
        assert_eq!(sorter.is_ascending(a), after_first);

        sorter.sort_by_header(&mut t.doc, a);
        assert!(!sorter.is_ascending(a));
        assert!(sorter.is_ascending(b));
        assert_eq!(column(&t, 0), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_rows_are_moved_not_recreated() {
        let mut t = table(&["n"], &[&["2"], &["1"]]);
        let before: Vec<NodeId> = t.doc.children_by_tag(t.tbody, "tr").collect();

        TableSorter::new().sort_by_header(&mut t.doc, t.headers[0]);
        let after: Vec<NodeId> = t.doc.children_by_tag(t.tbody, "tr").collect();
        assert_eq!(after, vec![before[1], before[0]]);
        assert_eq!(t.doc.text_content(after[0]), "1");
    }

    #[test]
    fn test_ties_keep_document_order_when_ascending() {
        let mut t = table(&["k", "id"], &[&["b", "1"], &["a", "2"], &["B", "3"]]);
        TableSorter::new().sort_by_header(&mut t.doc, t.headers[0]);
        assert_eq!(column(&t, 1), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_missing_cells_sort_as_empty() {
        let mut t = table(&["a", "b"], &[&["x", "2"], &["y"], &["z", "1"]]);
        TableSorter::new().sort_by_header(&mut t.doc, t.headers[1]);
        assert_eq!(column(&t, 0), vec!["y", "z", "x"]);
    }

    #[test]
    fn test_header_outside_table_is_a_no_op() {
        let mut doc = Document::new();
        let th = doc.append_element(doc.root(), "th", "").unwrap();
        let mut sorter = TableSorter::new();

        assert_eq!(sorter.sort_by_header(&mut doc, th), None);
        assert!(!sorter.is_ascending(th));
    }

    #[test]
    fn test_table_without_body_is_a_no_op() {
        let mut doc = Document::new();
        let table = doc.append_element(doc.root(), "table", "").unwrap();
        let tr = doc.append_element(table, "tr", "").unwrap();
        let th = doc.append_element(tr, "th", "").unwrap();

        assert_eq!(TableSorter::new().sort_by_header(&mut doc, th), None);
    }

    #[test]
    fn test_only_first_body_is_sorted() {
        let mut t = table(&["n"], &[&["3"], &["1"], &["2"]]);
        let table = t.doc.parent(t.tbody).unwrap();
        let second = t.doc.append_element(table, "tbody", "").unwrap();
        for n in ["9", "7", "8"] {
            let tr = t.doc.append_element(second, "tr", "").unwrap();
            let td = t.doc.append_element(tr, "td", "").unwrap();
            t.doc.append_text(td, n).unwrap();
        }

        let event = TableSorter::new().sort_by_header(&mut t.doc, t.headers[0]);
        assert!(matches!(event, Some(ReportEvent::RowsSorted { rows: 3, .. })));
        assert_eq!(column(&t, 0), vec!["1", "2", "3"]);
        assert_eq!(t.doc.text_content(second), "978");
    }
}
