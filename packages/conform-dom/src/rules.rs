//! The rule table for irregular content models.
//!
//! A handful of elements carry ordering or cardinality constraints that a
//! category set cannot express ("a `summary` must be the first child",
//! "at most one `caption`"). Each such constraint is a
//! [`CustomContentRule`] entry handled here, and nowhere else, so the
//! whole set is reviewable in one file. The rule contents follow the
//! per-element content models in the WHATWG HTML spec:
//!
//! https://html.spec.whatwg.org/multipage/#toc-semantics

use conform_traits::{CategorySet, CustomContentRule, RejectReason, Verdict};
use markup5ever::local_name;

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::node::{ElementNodeData, Node};

/// Whether a rule admits the given child at all, ignoring position.
///
/// This is the half of a custom rule that transparency inherits: a
/// transparent element inside a rule-owning ancestor filters its children
/// through this test, while the ordering half ([`check_sequence`]) binds
/// only the rule-owning element's own child list.
pub(crate) fn admits_child(rule: CustomContentRule, child: &Node) -> Verdict {
    match child {
        Node::Text(_) => {
            if allows_text(rule) {
                Verdict::Allowed
            } else {
                Verdict::Rejected(RejectReason::TextNotAllowed)
            }
        }
        Node::Element(el) => {
            if admits_element(rule, el) {
                Verdict::Allowed
            } else {
                Verdict::Rejected(RejectReason::DisallowedChild)
            }
        }
    }
}

/// Rules whose element otherwise accepts flow content admit character
/// data; the purely structural containers do not.
fn allows_text(rule: CustomContentRule) -> bool {
    matches!(
        rule,
        CustomContentRule::DetailsContent
            | CustomContentRule::FigureContent
            | CustomContentRule::FieldsetContent
    )
}

fn admits_element(rule: CustomContentRule, el: &ElementNodeData) -> bool {
    let tag = &el.descriptor.tag;
    let categories = el.descriptor.categories;
    let script_supporting = categories.contains(CategorySet::SCRIPT_SUPPORTING);
    match rule {
        CustomContentRule::ListContainer => script_supporting || *tag == local_name!("li"),
        CustomContentRule::DescriptionList => {
            script_supporting || matches!(&**tag, "dt" | "dd" | "div")
        }
        CustomContentRule::SelectContainer => {
            script_supporting || matches!(&**tag, "option" | "optgroup" | "hr")
        }
        CustomContentRule::OptionGroup => {
            script_supporting || categories.contains(CategorySet::OPTION_GROUP_CONTENT)
        }
        CustomContentRule::DetailsContent => {
            *tag == local_name!("summary") || categories.contains(CategorySet::FLOW)
        }
        CustomContentRule::FigureContent => {
            *tag == local_name!("figcaption") || categories.contains(CategorySet::FLOW)
        }
        CustomContentRule::TableContent => {
            script_supporting
                || matches!(&**tag, "caption" | "colgroup" | "thead" | "tbody" | "tfoot" | "tr")
        }
        CustomContentRule::TableRowGroup => script_supporting || *tag == local_name!("tr"),
        CustomContentRule::TableRow => script_supporting || matches!(&**tag, "td" | "th"),
        CustomContentRule::ColumnGroup => matches!(&**tag, "col" | "template"),
        CustomContentRule::FieldsetContent => {
            *tag == local_name!("legend") || categories.contains(CategorySet::FLOW)
        }
        CustomContentRule::PictureContent => {
            script_supporting || matches!(&**tag, "source" | "img")
        }
        CustomContentRule::HtmlContent => matches!(&**tag, "head" | "body"),
        CustomContentRule::HeadContent => {
            script_supporting || categories.contains(CategorySet::METADATA)
        }
    }
}

/// The categories a rule admits, for diagnostic messages. Tag-specific
/// admissions (`li`, `summary`, ...) have no category and do not appear.
pub(crate) fn admitted_categories(rule: CustomContentRule) -> CategorySet {
    match rule {
        CustomContentRule::ListContainer
        | CustomContentRule::DescriptionList
        | CustomContentRule::SelectContainer
        | CustomContentRule::TableContent
        | CustomContentRule::TableRowGroup
        | CustomContentRule::TableRow
        | CustomContentRule::PictureContent => CategorySet::SCRIPT_SUPPORTING,
        CustomContentRule::OptionGroup => {
            CategorySet::OPTION_GROUP_CONTENT.union(CategorySet::SCRIPT_SUPPORTING)
        }
        CustomContentRule::DetailsContent
        | CustomContentRule::FigureContent
        | CustomContentRule::FieldsetContent => CategorySet::FLOW,
        CustomContentRule::ColumnGroup | CustomContentRule::HtmlContent => CategorySet::empty(),
        CustomContentRule::HeadContent => {
            CategorySet::METADATA.union(CategorySet::SCRIPT_SUPPORTING)
        }
    }
}

/// Check a rule's ordering and cardinality constraints over the
/// rule-owning element's child list.
///
/// Admission of individual children is assumed to have been checked
/// already; this pass only looks at positions and counts. Positions in
/// diagnostics index the full child list, numbered from 0.
pub(crate) fn check_sequence(
    rule: CustomContentRule,
    parent: &ElementNodeData,
    diagnostics: &mut Vec<Diagnostic>,
) {
    match rule {
        // Pure container rules: no ordering constraints.
        CustomContentRule::ListContainer
        | CustomContentRule::SelectContainer
        | CustomContentRule::OptionGroup
        | CustomContentRule::TableRowGroup
        | CustomContentRule::TableRow
        | CustomContentRule::ColumnGroup => {}

        // The first name-value group must be named: a dd must not open the list.
        CustomContentRule::DescriptionList => {
            let first_group_child = content_children(parent)
                .find(|(_, node)| matches!(node.tag().map(|t| &**t), Some("dt" | "dd")));
            if let Some((position, node)) = first_group_child {
                if node.tag().map(|t| &**t) == Some("dd") {
                    push_violation(diagnostics, rule, parent, Some(node), position);
                }
            }
        }

        // Exactly one summary, and it must be the first child.
        CustomContentRule::DetailsContent => {
            let mut seen_summary = false;
            let mut first = true;
            for (position, node) in content_children(parent) {
                let is_summary = node.tag().map(|t| &**t) == Some("summary");
                if is_summary && (seen_summary || !first) {
                    push_violation(diagnostics, rule, parent, Some(node), position);
                }
                seen_summary |= is_summary;
                first = false;
            }
            if !seen_summary {
                push_violation(diagnostics, rule, parent, None, 0);
            }
        }

        // At most one figcaption, as either the first or the last child.
        CustomContentRule::FigureContent => {
            let content: Vec<(usize, &Node)> = content_children(parent).collect();
            let mut seen_caption = false;
            for (index, &(position, node)) in content.iter().enumerate() {
                if node.tag().map(|t| &**t) != Some("figcaption") {
                    continue;
                }
                let first_or_last = index == 0 || index == content.len() - 1;
                if seen_caption || !first_or_last {
                    push_violation(diagnostics, rule, parent, Some(node), position);
                }
                seen_caption = true;
            }
        }

        // In this order: caption? colgroup* thead? (tbody* | tr+) tfoot?,
        // with at most one caption, thead and tfoot, and tbody/tr unmixed.
        CustomContentRule::TableContent => {
            let mut last_rank = 0u8;
            let mut seen_caption = false;
            let mut seen_thead = false;
            let mut seen_tfoot = false;
            let mut body_kind: Option<&str> = None;
            for (position, node) in content_children(parent) {
                let Some(tag) = node.tag() else { continue };
                let rank = match &**tag {
                    "caption" => 0,
                    "colgroup" => 1,
                    "thead" => 2,
                    "tbody" | "tr" => 3,
                    "tfoot" => 4,
                    _ => continue,
                };
                if rank < last_rank {
                    push_violation(diagnostics, rule, parent, Some(node), position);
                    continue;
                }
                last_rank = rank;
                let duplicate = match &**tag {
                    "caption" => std::mem::replace(&mut seen_caption, true),
                    "thead" => std::mem::replace(&mut seen_thead, true),
                    "tfoot" => std::mem::replace(&mut seen_tfoot, true),
                    "tbody" | "tr" => {
                        let mixed = body_kind.is_some_and(|kind| kind != &**tag);
                        body_kind.get_or_insert(&**tag);
                        mixed
                    }
                    _ => false,
                };
                if duplicate {
                    push_violation(diagnostics, rule, parent, Some(node), position);
                }
            }
        }

        // Optional legend, at most one, and only as the first child.
        CustomContentRule::FieldsetContent => {
            let mut seen_legend = false;
            let mut first = true;
            for (position, node) in content_children(parent) {
                if node.tag().map(|t| &**t) == Some("legend") && (seen_legend || !first) {
                    push_violation(diagnostics, rule, parent, Some(node), position);
                }
                seen_legend |= node.tag().map(|t| &**t) == Some("legend");
                first = false;
            }
        }

        // Zero or more sources, then exactly one img.
        CustomContentRule::PictureContent => {
            let mut seen_img = false;
            for (position, node) in content_children(parent) {
                match node.tag().map(|t| &**t) {
                    Some("source") if seen_img => {
                        push_violation(diagnostics, rule, parent, Some(node), position);
                    }
                    Some("img") => {
                        if seen_img {
                            push_violation(diagnostics, rule, parent, Some(node), position);
                        }
                        seen_img = true;
                    }
                    _ => {}
                }
            }
            if !seen_img {
                push_violation(diagnostics, rule, parent, None, 0);
            }
        }

        // A head followed by a body, nothing else.
        CustomContentRule::HtmlContent => {
            let content: Vec<(usize, &Node)> = content_children(parent).collect();
            for (index, &(position, node)) in content.iter().enumerate() {
                let expected = match index {
                    0 => Some("head"),
                    1 => Some("body"),
                    _ => None,
                };
                if node.tag().map(|t| &**t) != expected {
                    push_violation(diagnostics, rule, parent, Some(node), position);
                }
            }
            if content.len() < 2 {
                push_violation(diagnostics, rule, parent, None, 0);
            }
        }

        // Exactly one title, at most one base.
        CustomContentRule::HeadContent => {
            let mut seen_title = false;
            let mut seen_base = false;
            for (position, node) in content_children(parent) {
                let duplicate = match node.tag().map(|t| &**t) {
                    Some("title") => std::mem::replace(&mut seen_title, true),
                    Some("base") => std::mem::replace(&mut seen_base, true),
                    _ => false,
                };
                if duplicate {
                    push_violation(diagnostics, rule, parent, Some(node), position);
                }
            }
            if !seen_title {
                push_violation(diagnostics, rule, parent, None, 0);
            }
        }
    }
}

/// Children that count for ordering purposes: non-whitespace text and
/// element children that are not script-supporting (script-supporting
/// elements may appear anywhere the rules below allow them at all).
fn content_children(parent: &ElementNodeData) -> impl Iterator<Item = (usize, &Node)> {
    parent
        .children
        .iter()
        .enumerate()
        .filter(|(_, child)| match child {
            Node::Text(text) => !text.is_whitespace(),
            Node::Element(el) => !el
                .descriptor
                .categories
                .contains(CategorySet::SCRIPT_SUPPORTING),
        })
}

fn push_violation(
    diagnostics: &mut Vec<Diagnostic>,
    rule: CustomContentRule,
    parent: &ElementNodeData,
    child: Option<&Node>,
    position: usize,
) {
    diagnostics.push(Diagnostic {
        kind: DiagnosticKind::CardinalityViolation { rule },
        parent: parent.descriptor.tag.clone(),
        child: child.and_then(|node| node.tag().cloned()),
        position,
    });
}
