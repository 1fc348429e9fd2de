//! HTML5 serialization of a node tree.
//!
//! Follows the HTML fragment serialization rules: void elements (content
//! model `Nothing`) are emitted without an end tag, attribute values are
//! double-quoted and escaped, text is entity-escaped except inside the
//! raw-text elements `script` and `style`.
//!
//! https://html.spec.whatwg.org/multipage/parsing.html#serialising-html-fragments

use crate::node::Node;

impl Node {
    /// Serialize this subtree to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Serialize this subtree, appending to `out`.
    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => {
                out.push_str(&html_escape::encode_text(&text.content));
            }
            Node::Element(element) => {
                let tag = &element.descriptor.tag;
                out.push('<');
                out.push_str(tag);
                for attr in &element.attrs {
                    out.push(' ');
                    out.push_str(&attr.name);
                    out.push_str("=\"");
                    out.push_str(&html_escape::encode_double_quoted_attribute(&attr.value));
                    out.push('"');
                }
                out.push('>');

                // Void elements have no end tag and never any content.
                if element.descriptor.content.is_void() {
                    return;
                }

                let raw_text = matches!(&**tag, "script" | "style");
                for child in &element.children {
                    match child {
                        Node::Text(text) if raw_text => out.push_str(&text.content),
                        _ => child.write_html(out),
                    }
                }

                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Attribute;
    use conform_traits::{CategorySet, ContentModel, ElementDescriptor, local_name};

    static P: ElementDescriptor = ElementDescriptor {
        tag: local_name!("p"),
        categories: CategorySet::FLOW.union(CategorySet::PALPABLE),
        content: ContentModel::Categories(CategorySet::PHRASING),
    };
    static BR: ElementDescriptor = ElementDescriptor {
        tag: local_name!("br"),
        categories: CategorySet::FLOW.union(CategorySet::PHRASING),
        content: ContentModel::Nothing,
    };
    static STYLE: ElementDescriptor = ElementDescriptor {
        tag: local_name!("style"),
        categories: CategorySet::METADATA,
        content: ContentModel::Text,
    };

    #[test]
    fn serializes_elements_and_text() {
        let tree = Node::element(
            &P,
            vec![
                Node::text("a "),
                Node::element(&BR, vec![]),
                Node::text(" b"),
            ],
        );
        assert_eq!(tree.to_html(), "<p>a <br> b</p>");
    }

    #[test]
    fn escapes_text_and_attributes() {
        let tree = Node::element_with_attrs(
            &P,
            vec![Attribute::new(local_name!("title"), "a \"b\" <c>")],
            vec![Node::text("1 < 2 & 3")],
        );
        let html = tree.to_html();
        assert!(html.starts_with("<p title=\""));
        assert!(!html.contains("\"b\" <c>\""));
        assert!(html.contains("1 &lt; 2 &amp; 3"));
    }

    #[test]
    fn raw_text_elements_are_not_escaped() {
        let tree = Node::element(&STYLE, vec![Node::text("a > b { color: red }")]);
        assert_eq!(tree.to_html(), "<style>a > b { color: red }</style>");
    }
}
