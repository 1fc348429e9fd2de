//! Whole-document conformance fixtures against the shipped catalog.

use conform_dom::form::{Entry, FormMethod, construct_entry_list, form_method};
use conform_dom::{Attribute, DiagnosticKind, Node, local_name, validate};
use conform_html::{create_element, create_element_with_attrs, text};
use conform_traits::CustomContentRule;

fn el(tag: &str, children: Vec<Node>) -> Node {
    create_element(tag, children).unwrap()
}

#[test]
fn a_complete_document_is_conformant() {
    let document = el(
        "html",
        vec![
            el("head", vec![el("title", vec![text("Hello")])]),
            el(
                "body",
                vec![
                    el("h1", vec![text("Hello")]),
                    el(
                        "p",
                        vec![
                            text("Some "),
                            el("a", vec![el("em", vec![text("linked")])]),
                            text(" text."),
                        ],
                    ),
                    el(
                        "ul",
                        vec![
                            el("li", vec![text("first")]),
                            el("li", vec![text("second")]),
                        ],
                    ),
                ],
            ),
        ],
    );

    let report = validate(&document).unwrap();
    assert!(report.ok(), "unexpected diagnostics: {:?}", report.diagnostics);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn list_container_rejects_a_div() {
    let tree = el("ul", vec![el("div", vec![])]);
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
fn transparent_element_at_the_root_warns() {
    let tree = el("ins", vec![el("div", vec![])]);
    let report = validate(&tree).unwrap();

    assert!(report.ok());
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].kind, DiagnosticKind::TransparentRoot);
}

#[test]
fn void_element_with_text_child() {
    let tree = el("br", vec![text("oops")]);
    let report = validate(&tree).unwrap();

    assert!(!report.ok());
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].kind, DiagnosticKind::TextNotAllowed);
}

#[test]
fn two_summaries_in_details() {
    let tree = el(
        "details",
        vec![
            el("summary", vec![text("one")]),
            el("summary", vec![text("two")]),
        ],
    );
    let report = validate(&tree).unwrap();

    assert!(!report.ok());
    assert_eq!(report.diagnostics.len(), 1);
    let diagnostic = &report.diagnostics[0];
    assert_eq!(
        diagnostic.kind,
        DiagnosticKind::CardinalityViolation {
            rule: CustomContentRule::DetailsContent
        }
    );
    assert_eq!(diagnostic.position, 1);
}

#[test]
fn anchors_do_not_launder_non_phrasing_content() {
    let bad = el("p", vec![el("a", vec![el("div", vec![])])]);
    let report = validate(&bad).unwrap();
    assert!(!report.ok());
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(&*report.diagnostics[0].parent, "a");

    let good = el("p", vec![el("a", vec![el("span", vec![text("ok")])])]);
    assert!(validate(&good).unwrap().ok());
}

#[test]
fn table_section_ordering() {
    let good = el(
        "table",
        vec![
            el("caption", vec![text("totals")]),
            el("colgroup", vec![el("col", vec![])]),
            el("thead", vec![el("tr", vec![el("th", vec![text("a")])])]),
            el("tbody", vec![el("tr", vec![el("td", vec![text("1")])])]),
            el("tfoot", vec![el("tr", vec![el("td", vec![text("1")])])]),
        ],
    );
    assert!(validate(&good).unwrap().ok());

    let bad = el(
        "table",
        vec![
            el("tbody", vec![]),
            el("caption", vec![text("too late")]),
        ],
    );
    let report = validate(&bad).unwrap();
    assert!(!report.ok());
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(
        report.diagnostics[0].kind,
        DiagnosticKind::CardinalityViolation {
            rule: CustomContentRule::TableContent
        }
    );
    assert_eq!(report.diagnostics[0].position, 1);
}

#[test]
fn head_requires_a_title() {
    let report = validate(&el("head", vec![el("meta", vec![])])).unwrap();
    assert!(!report.ok());
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].child, None);
}

#[test]
fn figcaption_must_be_first_or_last() {
    let good = el(
        "figure",
        vec![
            el("img", vec![]),
            el("figcaption", vec![text("a photo")]),
        ],
    );
    assert!(validate(&good).unwrap().ok());

    let bad = el(
        "figure",
        vec![
            el("img", vec![]),
            el("figcaption", vec![text("a photo")]),
            el("img", vec![]),
        ],
    );
    assert!(!validate(&bad).unwrap().ok());
}

#[test]
fn select_accepts_only_listbox_content() {
    let good = el(
        "select",
        vec![
            el("option", vec![text("a")]),
            el("hr", vec![]),
            el("optgroup", vec![el("option", vec![text("b")])]),
        ],
    );
    assert!(validate(&good).unwrap().ok());

    let report = validate(&el("select", vec![el("div", vec![])])).unwrap();
    assert!(!report.ok());
}

#[test]
fn picture_needs_sources_before_one_img() {
    let good = el(
        "picture",
        vec![el("source", vec![]), el("img", vec![])],
    );
    assert!(validate(&good).unwrap().ok());

    let report = validate(&el(
        "picture",
        vec![el("img", vec![]), el("source", vec![])],
    ))
    .unwrap();
    assert!(!report.ok());
    assert_eq!(report.diagnostics[0].position, 1);
}

#[test]
fn whitespace_between_structural_children_is_ignored() {
    let tree = el(
        "table",
        vec![
            text("\n  "),
            el("tbody", vec![]),
            text("\n"),
        ],
    );
    assert!(validate(&tree).unwrap().ok());
}

#[test]
fn serializes_a_validated_document() {
    let document = el(
        "html",
        vec![
            el("head", vec![el("title", vec![text("T")])]),
            el(
                "body",
                vec![el(
                    "p",
                    vec![text("1 < 2"), el("br", vec![]), text("yes & no")],
                )],
            ),
        ],
    );
    assert!(validate(&document).unwrap().ok());
    assert_eq!(
        document.to_html(),
        "<html><head><title>T</title></head><body><p>1 &lt; 2<br>yes &amp; no</p></body></html>"
    );
}

#[test]
fn form_subtree_produces_its_entry_list() {
    let form = create_element_with_attrs(
        "form",
        vec![Attribute::new(local_name!("method"), "post")],
        vec![
            create_element_with_attrs(
                "input",
                vec![
                    Attribute::new(local_name!("name"), "user"),
                    Attribute::new(local_name!("value"), "ada"),
                ],
                vec![],
            )
            .unwrap(),
            el(
                "div",
                vec![
                    create_element_with_attrs(
                        "textarea",
                        vec![Attribute::new(local_name!("name"), "bio")],
                        vec![text("born 1815")],
                    )
                    .unwrap(),
                ],
            ),
        ],
    )
    .unwrap();

    assert!(validate(&form).unwrap().ok());
    assert_eq!(
        form_method(form.downcast_element().unwrap()),
        FormMethod::Post
    );
    let entries = construct_entry_list(&form);
    assert_eq!(
        entries.0,
        vec![Entry::new("user", "ada"), Entry::new("bio", "born 1815")]
    );
}
