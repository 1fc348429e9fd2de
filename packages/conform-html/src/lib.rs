//! HTML element catalog for the Conform content-model engine.
//!
//! [conform-dom](https://docs.rs/conform-dom) validates trees against
//! element descriptors but ships none of its own; this crate supplies the
//! descriptors for the HTML vocabulary ([`elements`]) plus convenience
//! constructors for building trees by tag name:
//!
//! ```
//! use conform_html::{create_element, text};
//! use conform_dom::validate;
//!
//! let tree = create_element(
//!     "ul",
//!     vec![create_element("li", vec![text("first")]).unwrap()],
//! )
//! .unwrap();
//!
//! let report = validate(&tree).unwrap();
//! assert!(report.ok());
//! ```
//!
//! Elements can also be referenced directly as statics
//! (`elements::DIV`), which skips the fallible lookup entirely.

use conform_dom::{Attribute, Node};
use thiserror::Error;

pub mod elements;
pub use elements::descriptor;

pub use conform_dom::{
    Diagnostic, DiagnosticKind, Severity, ValidateError, ValidationReport, Validator, validate,
};
pub use conform_traits::{CategorySet, ContentCategory, ContentModel, ElementDescriptor};

/// The tag name does not belong to the shipped element catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown element tag <{tag}>")]
pub struct UnknownTagError {
    pub tag: String,
}

/// Creates an element node by tag name.
pub fn create_element(tag: &str, children: Vec<Node>) -> Result<Node, UnknownTagError> {
    let descriptor = elements::descriptor(tag).ok_or_else(|| UnknownTagError {
        tag: tag.to_string(),
    })?;
    Ok(Node::element(descriptor, children))
}

/// Creates an element node by tag name, with attributes.
pub fn create_element_with_attrs(
    tag: &str,
    attrs: Vec<Attribute>,
    children: Vec<Node>,
) -> Result<Node, UnknownTagError> {
    let descriptor = elements::descriptor(tag).ok_or_else(|| UnknownTagError {
        tag: tag.to_string(),
    })?;
    Ok(Node::element_with_attrs(descriptor, attrs, children))
}

/// Creates a text node.
pub fn text(content: impl Into<String>) -> Node {
    Node::text(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_element_rejects_unknown_tags() {
        let err = create_element("marquee", vec![]).unwrap_err();
        assert_eq!(err.tag, "marquee");
    }

    #[test]
    fn create_element_uses_catalog_descriptors() {
        let node = create_element("div", vec![]).unwrap();
        let element = node.downcast_element().unwrap();
        assert!(std::ptr::eq(element.descriptor, &elements::DIV));
    }
}
