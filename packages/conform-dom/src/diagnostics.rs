use std::fmt;

use conform_traits::{CategorySet, CustomContentRule};
use markup5ever::LocalName;
use thiserror::Error;

/// How serious a [`Diagnostic`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The tree violates the content-model rules.
    Error,
    /// Suspicious but not a violation.
    Warning,
}

/// What a [`Diagnostic`] is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The child's categories do not intersect the permitted set.
    DisallowedChild {
        /// The categories the effective content model permits here.
        allowed: CategorySet,
    },
    /// A text node under a model that does not admit character data.
    TextNotAllowed,
    /// An element child under a `Text` or `Nothing` model.
    ElementNotAllowed,
    /// An ordering or cardinality constraint of a custom rule failed.
    CardinalityViolation { rule: CustomContentRule },
    /// A transparent element with no non-transparent ancestor: nothing to
    /// inherit, so its children are unconstrained.
    TransparentRoot,
}

impl DiagnosticKind {
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticKind::TransparentRoot => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// A single rule violation or notable condition found during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// The element whose content model was being checked.
    pub parent: LocalName,
    /// The offending child's tag, or `None` for text nodes (and for
    /// diagnostics about the parent itself, like `TransparentRoot`).
    pub child: Option<LocalName>,
    /// The child's ordinal position among its siblings, numbered from 0.
    pub position: usize,
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parent = &self.parent;
        let position = self.position;
        match &self.kind {
            DiagnosticKind::DisallowedChild { allowed } => {
                let child = self.child.as_deref().unwrap_or("text");
                write!(
                    f,
                    "<{child}> is not allowed as a child of <{parent}> (position {position}; permitted: {allowed:?})"
                )
            }
            DiagnosticKind::TextNotAllowed => write!(
                f,
                "text is not allowed inside <{parent}> (position {position})"
            ),
            DiagnosticKind::ElementNotAllowed => {
                let child = self.child.as_deref().unwrap_or("text");
                write!(
                    f,
                    "<{parent}> cannot contain element children, found <{child}> (position {position})"
                )
            }
            DiagnosticKind::CardinalityViolation { rule } => {
                let child = self.child.as_deref().unwrap_or("text");
                write!(
                    f,
                    "<{child}> at position {position} violates the {rule:?} rule of <{parent}>"
                )
            }
            DiagnosticKind::TransparentRoot => write!(
                f,
                "transparent element <{parent}> has no non-transparent ancestor; its content is unconstrained"
            ),
        }
    }
}

/// The outcome of validating one tree.
///
/// Diagnostics are collected for the whole tree in document order; a
/// structural violation never aborts the walk, so callers see every
/// problem in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    /// `true` iff no error-severity diagnostic was recorded. Warnings do
    /// not affect the outcome.
    pub fn ok(&self) -> bool {
        !self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// The error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// The warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }
}

/// A broken invariant inside the validator itself.
///
/// This is deliberately not a [`Diagnostic`]: it indicates a bug in the
/// tree-construction layer or a defensive limit being hit, never a
/// conformance problem with the HTML being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidateError {
    #[error("maximum tree depth of {limit} exceeded")]
    DepthExceeded { limit: usize },
}
