use conform_traits::{CategorySet, ContentModel, RejectReason, Verdict};
use smallvec::SmallVec;

use crate::diagnostics::{Diagnostic, DiagnosticKind, ValidateError, ValidationReport};
use crate::node::{ElementNodeData, Node};
use crate::rules;

/// Default cap on tree depth. Real documents nest a few dozen levels at
/// most; hitting this indicates a runaway tree-construction layer, so the
/// validator fails closed rather than recording a diagnostic.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options for a validation run.
///
/// Validation is pure computation over the borrowed tree: no I/O, no
/// retained state, and descriptors are read-only shared data, so separate
/// runs may proceed concurrently on separate threads.
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    /// Maximum tree depth before the run aborts with
    /// [`ValidateError::DepthExceeded`].
    pub max_depth: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Validate a tree against its content-model rules.
    ///
    /// Every parent/child relationship in the tree is checked and every
    /// violation recorded; a violation never aborts the walk. The only
    /// `Err` case is a broken internal invariant, which is a bug in the
    /// tree-construction layer rather than a conformance problem.
    pub fn validate(&self, root: &Node) -> Result<ValidationReport, ValidateError> {
        let mut cx = ValidationContext {
            ancestors: SmallVec::new(),
            diagnostics: Vec::new(),
            max_depth: self.max_depth,
        };
        if let Node::Element(element) = root {
            cx.check_element(element, 0)?;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            diagnostics = cx.diagnostics.len(),
            "content-model validation finished"
        );
        Ok(ValidationReport {
            diagnostics: cx.diagnostics,
        })
    }
}

/// Validate a tree with the default options.
pub fn validate(root: &Node) -> Result<ValidationReport, ValidateError> {
    Validator::new().validate(root)
}

/// Per-call state threaded through the recursive walk.
///
/// `ancestors` is the stack transparency resolves against; it only ever
/// holds non-transparent models (pushed on descent into a non-transparent
/// element, popped on return).
struct ValidationContext<'doc> {
    ancestors: SmallVec<[&'doc ContentModel; 8]>,
    diagnostics: Vec<Diagnostic>,
    max_depth: usize,
}

impl<'doc> ValidationContext<'doc> {
    fn check_element(
        &mut self,
        element: &'doc ElementNodeData,
        depth: usize,
    ) -> Result<(), ValidateError> {
        if depth >= self.max_depth {
            #[cfg(feature = "tracing")]
            tracing::warn!(tag = %element.descriptor.tag, limit = self.max_depth, "tree depth limit hit");
            return Err(ValidateError::DepthExceeded {
                limit: self.max_depth,
            });
        }

        // Resolve the effective content rule: the element's own model, or
        // for transparent elements the nearest non-transparent ancestor's.
        let own = &element.descriptor.content;
        let effective = if own.is_transparent() {
            let inherited = self.ancestors.last().copied();
            if inherited.is_none() {
                // Transparent all the way up: nothing to inherit, so the
                // children are unconstrained. Allowed, but worth flagging.
                #[cfg(feature = "tracing")]
                tracing::warn!(tag = %element.descriptor.tag, "transparent element at the root");
                self.diagnostics.push(Diagnostic {
                    kind: DiagnosticKind::TransparentRoot,
                    parent: element.descriptor.tag.clone(),
                    child: None,
                    position: 0,
                });
            }
            inherited
        } else {
            Some(own)
        };

        if let Some(model) = effective {
            self.check_children(model, element);
        }

        // Ordering and cardinality constraints bind only the child list of
        // the element that owns the rule, never through transparency:
        // positions in a different child list are meaningless.
        if let ContentModel::Custom(rule) = *own {
            rules::check_sequence(rule, element, &mut self.diagnostics);
        }

        let pushed = !own.is_transparent();
        if pushed {
            self.ancestors.push(own);
        }
        for child in &element.children {
            if let Node::Element(data) = child {
                self.check_element(data, depth + 1)?;
            }
        }
        if pushed {
            self.ancestors.pop();
        }

        Ok(())
    }

    /// Check each of `parent`'s children, in document order, against the
    /// effective content model.
    fn check_children(&mut self, model: &ContentModel, parent: &ElementNodeData) {
        for (position, child) in parent.children.iter().enumerate() {
            // Inter-element whitespace is not content. `Nothing` is the
            // exception: a void element may not have children at all.
            if let Node::Text(text) = child {
                if text.is_whitespace() && !matches!(model, ContentModel::Nothing) {
                    continue;
                }
            }

            let verdict = match model {
                ContentModel::Custom(rule) => rules::admits_child(*rule, child),
                // The ancestor stack never holds transparent models, so
                // the remaining cases all resolve locally.
                simple => simple
                    .accepts(child.categories(), child.is_text())
                    .unwrap_or(Verdict::Allowed),
            };

            let Verdict::Rejected(reason) = verdict else {
                continue;
            };
            let kind = match reason {
                RejectReason::DisallowedChild => DiagnosticKind::DisallowedChild {
                    allowed: match model {
                        ContentModel::Categories(set) => *set,
                        ContentModel::Custom(rule) => rules::admitted_categories(*rule),
                        _ => CategorySet::empty(),
                    },
                },
                RejectReason::TextNotAllowed => DiagnosticKind::TextNotAllowed,
                RejectReason::ElementNotAllowed => DiagnosticKind::ElementNotAllowed,
            };
            self.diagnostics.push(Diagnostic {
                kind,
                parent: parent.descriptor.tag.clone(),
                child: child.tag().cloned(),
                position,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conform_traits::{CustomContentRule, ElementDescriptor, local_name};

    static DIV: ElementDescriptor = ElementDescriptor {
        tag: local_name!("div"),
        categories: CategorySet::FLOW.union(CategorySet::PALPABLE),
        content: ContentModel::Categories(CategorySet::FLOW),
    };
    static SPAN: ElementDescriptor = ElementDescriptor {
        tag: local_name!("span"),
        categories: CategorySet::FLOW
            .union(CategorySet::PHRASING)
            .union(CategorySet::PALPABLE),
        content: ContentModel::Categories(CategorySet::PHRASING),
    };
    static BR: ElementDescriptor = ElementDescriptor {
        tag: local_name!("br"),
        categories: CategorySet::FLOW.union(CategorySet::PHRASING),
        content: ContentModel::Nothing,
    };
    static TITLE: ElementDescriptor = ElementDescriptor {
        tag: local_name!("title"),
        categories: CategorySet::METADATA,
        content: ContentModel::Text,
    };
    static A: ElementDescriptor = ElementDescriptor {
        tag: local_name!("a"),
        categories: CategorySet::FLOW
            .union(CategorySet::PHRASING)
            .union(CategorySet::INTERACTIVE)
            .union(CategorySet::PALPABLE),
        content: ContentModel::Transparent,
    };
    static UL: ElementDescriptor = ElementDescriptor {
        tag: local_name!("ul"),
        categories: CategorySet::FLOW.union(CategorySet::PALPABLE),
        content: ContentModel::Custom(CustomContentRule::ListContainer),
    };
    static LI: ElementDescriptor = ElementDescriptor {
        tag: local_name!("li"),
        categories: CategorySet::empty(),
        content: ContentModel::Categories(CategorySet::FLOW.union(CategorySet::PHRASING)),
    };

    #[test]
    fn flow_child_inside_flow_container() {
        let tree = Node::element(&DIV, vec![Node::element(&SPAN, vec![Node::text("hi")])]);
        let report = validate(&tree).unwrap();
        assert!(report.ok());
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn empty_children_are_always_valid() {
        let report = validate(&Node::element(&DIV, vec![])).unwrap();
        assert!(report.ok());
    }

    #[test]
    fn list_rejects_non_list_item() {
        let tree = Node::element(&UL, vec![Node::element(&DIV, vec![])]);
        let report = validate(&tree).unwrap();
        assert!(!report.ok());
        assert_eq!(report.diagnostics.len(), 1);
        let diagnostic = &report.diagnostics[0];
        assert!(matches!(
            diagnostic.kind,
            DiagnosticKind::DisallowedChild { .. }
        ));
        assert_eq!(&*diagnostic.parent, "ul");
        assert_eq!(diagnostic.child.as_deref(), Some("div"));
        assert_eq!(diagnostic.position, 0);
    }

    #[test]
    fn list_accepts_list_items() {
        let tree = Node::element(
            &UL,
            vec![
                Node::element(&LI, vec![Node::text("one")]),
                Node::element(&LI, vec![Node::text("two")]),
            ],
        );
        let report = validate(&tree).unwrap();
        assert!(report.ok());
    }

    #[test]
    fn void_element_rejects_text() {
        let tree = Node::element(&BR, vec![Node::text("stray")]);
        let report = validate(&tree).unwrap();
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].kind, DiagnosticKind::TextNotAllowed);
    }

    #[test]
    fn void_element_rejects_whitespace_too() {
        let tree = Node::element(&BR, vec![Node::text("  ")]);
        let report = validate(&tree).unwrap();
        assert!(!report.ok());
    }

    #[test]
    fn text_model_rejects_elements() {
        let tree = Node::element(&TITLE, vec![Node::element(&SPAN, vec![])]);
        let report = validate(&tree).unwrap();
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(
            report.diagnostics[0].kind,
            DiagnosticKind::ElementNotAllowed
        );
    }

    #[test]
    fn whitespace_between_list_items_is_fine() {
        let tree = Node::element(
            &UL,
            vec![
                Node::text("\n  "),
                Node::element(&LI, vec![]),
                Node::text("\n"),
            ],
        );
        let report = validate(&tree).unwrap();
        assert!(report.ok());
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn transparent_root_warns_but_passes() {
        let tree = Node::element(&A, vec![Node::element(&DIV, vec![])]);
        let report = validate(&tree).unwrap();
        assert!(report.ok());
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].kind, DiagnosticKind::TransparentRoot);
    }

    #[test]
    fn transparent_element_inherits_ancestor_rule() {
        // span only accepts phrasing; div is not phrasing, and the
        // transparent anchor must not launder it.
        let tree = Node::element(
            &SPAN,
            vec![Node::element(&A, vec![Node::element(&DIV, vec![])])],
        );
        let report = validate(&tree).unwrap();
        assert!(!report.ok());
        assert_eq!(report.diagnostics.len(), 1);
        let diagnostic = &report.diagnostics[0];
        assert_eq!(&*diagnostic.parent, "a");
        assert_eq!(diagnostic.child.as_deref(), Some("div"));
    }

    #[test]
    fn depth_limit_fails_closed() {
        let mut tree = Node::element(&DIV, vec![]);
        for _ in 0..10 {
            tree = Node::element(&DIV, vec![tree]);
        }
        let result = Validator::with_max_depth(5).validate(&tree);
        assert_eq!(result, Err(ValidateError::DepthExceeded { limit: 5 }));
    }

    #[test]
    fn all_violations_are_collected_in_one_pass() {
        let tree = Node::element(
            &UL,
            vec![
                Node::element(&DIV, vec![]),
                Node::element(&LI, vec![]),
                Node::text("loose text"),
                Node::element(&SPAN, vec![]),
            ],
        );
        let report = validate(&tree).unwrap();
        assert_eq!(report.diagnostics.len(), 3);
        assert_eq!(report.diagnostics[0].position, 0);
        assert_eq!(report.diagnostics[1].position, 2);
        assert_eq!(report.diagnostics[2].position, 3);
    }

    #[test]
    fn validation_is_idempotent() {
        let tree = Node::element(
            &UL,
            vec![Node::element(&DIV, vec![]), Node::element(&LI, vec![])],
        );
        let first = validate(&tree).unwrap();
        let second = validate(&tree).unwrap();
        assert_eq!(first, second);
    }
}
