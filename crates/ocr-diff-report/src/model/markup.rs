//! HTML serialization of a document.

use super::{Document, NodeId, NodeKind};

/// Elements that never have content or an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

impl Document {
    /// Serialize the whole document.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for &child in self.children(self.root()) {
            self.write_node(child, &mut out);
        }
        out
    }

    /// Serialize `node` including its own tag.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_node(node, &mut out);
        out
    }

    fn write_node(&self, node: NodeId, out: &mut String) {
        match self.kind(node) {
            Some(NodeKind::Text(text)) => escape_into(text, false, out),
            Some(NodeKind::Element(element)) => {
                out.push('<');
                out.push_str(&element.tag);
                if !element.classes.is_empty() {
                    out.push_str(" class=\"");
                    escape_into(&element.classes.to_string(), true, out);
                    out.push('"');
                }
                for (name, value) in element.attributes() {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_into(value, true, out);
                    out.push('"');
                }
                out.push('>');

                if VOID_ELEMENTS.contains(&element.tag.as_str()) {
                    return;
                }
                for &child in self.children(node) {
                    self.write_node(child, out);
                }
                out.push_str("</");
                out.push_str(&element.tag);
                out.push('>');
            }
            Some(NodeKind::Document) => {
                for &child in self.children(node) {
                    self.write_node(child, out);
                }
            }
            None => {}
        }
    }
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' if !attribute => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialize_report_fragment() {
        let mut doc = Document::new();
        let p = doc.append_element(doc.root(), "p", "gt").unwrap();
        let span = doc.append_element(p, "span", "cdiff0 diff").unwrap();
        doc.set_attribute(span, "data-segment-id", "line \"1\"").unwrap();
        doc.append_text(span, "<&>").unwrap();
        doc.append_element(p, "br", "").unwrap();

        assert_eq!(
            doc.to_html(),
            "<p class=\"gt\"><span class=\"cdiff0 diff\" data-segment-id=\"line &quot;1&quot;\">&lt;&amp;&gt;</span><br></p>"
        );
        assert_eq!(
            doc.outer_html(span),
            "<span class=\"cdiff0 diff\" data-segment-id=\"line &quot;1&quot;\">&lt;&amp;&gt;</span>"
        );
    }
}
