//! The Conform content-model engine.
//!
//! This crate implements validation of a candidate document tree against
//! the WHATWG content-model rules: which categories of content each
//! element belongs to, what each element is permitted to contain, and the
//! handful of irregular ordering/cardinality rules (captions, summaries,
//! table sections) that category sets cannot express.
//!
//! The engine knows nothing about concrete HTML elements: element kinds
//! reach it as [`ElementDescriptor`] values, normally from the
//! [conform-html](https://docs.rs/conform-html) catalog crate. Build a
//! [`Node`] tree bottom-up, hand it to [`validate`], and inspect the
//! returned [`ValidationReport`]:
//!
//! ```
//! use conform_dom::{Node, validate};
//! use conform_traits::{CategorySet, ContentModel, ElementDescriptor, local_name};
//!
//! static DIV: ElementDescriptor = ElementDescriptor {
//!     tag: local_name!("div"),
//!     categories: CategorySet::FLOW,
//!     content: ContentModel::Categories(CategorySet::FLOW),
//! };
//!
//! let tree = Node::element(&DIV, vec![Node::element(&DIV, vec![])]);
//! let report = validate(&tree).unwrap();
//! assert!(report.ok());
//! ```
//!
//! Validation is synchronous, pure and collect-all: the whole tree is
//! walked and every violation is reported in one pass. Also here, because
//! they operate on the same tree: HTML serialization ([`Node::to_html`])
//! and form entry-list construction ([`form`]).

/// The nodes themselves, and their data.
pub mod node;

mod validator;

mod rules;

mod diagnostics;

mod serialize;

/// Form-data entry list construction.
pub mod form;

pub use diagnostics::{Diagnostic, DiagnosticKind, Severity, ValidateError, ValidationReport};
pub use node::{Attribute, ElementNodeData, Node, TextNodeData, TreeTraverser};
pub use validator::{DEFAULT_MAX_DEPTH, Validator, validate};

pub use conform_traits::{
    CategorySet, ContentCategory, ContentModel, CustomContentRule, ElementDescriptor, RejectReason,
    Verdict,
};
pub use markup5ever::{LocalName, local_name};
