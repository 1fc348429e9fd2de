//! The form-data entry list: the ordered name/value pairs a form subtree
//! would submit.
//!
//! https://html.spec.whatwg.org/multipage/form-control-infrastructure.html#constructing-the-form-data-set

use core::str::FromStr;

use conform_traits::CategorySet;
use markup5ever::local_name;

use crate::node::{ElementNodeData, Node, TreeTraverser};

/// Constructs the entry list for a form subtree.
///
/// Walks the subtree in tree order and collects an entry for every
/// submittable element that takes part in submission:
///
/// - the element must have a non-empty `name`;
/// - disabled elements are skipped;
/// - checkboxes and radio buttons contribute only when checked, with a
///   value defaulting to "on";
/// - otherwise the value is the `value` attribute, or for text containers
///   like `textarea` the element's text content.
pub fn construct_entry_list(form: &Node) -> EntryList {
    let mut entry_list = EntryList::new();

    for node in TreeTraverser::new(form) {
        let Some(element) = node.downcast_element() else {
            continue;
        };
        if !element
            .descriptor
            .categories
            .contains(CategorySet::SUBMITTABLE)
        {
            continue;
        }
        if element.has_attr(local_name!("disabled")) {
            continue;
        }

        let element_type = element.attr(local_name!("type"));

        // If the field is a checkbox or radio button whose checkedness is
        // false, then continue.
        let checkable = matches!(element_type, Some("checkbox" | "radio"));
        if checkable && !element.has_attr(local_name!("checked")) {
            continue;
        }

        // If the field element does not have a name attribute specified,
        // or its name attribute's value is the empty string, then continue.
        let Some(name) = element.attr(local_name!("name")) else {
            continue;
        };
        if name.is_empty() {
            continue;
        }

        if checkable {
            // If the field element has a value attribute specified, then
            // let value be the value of that attribute; otherwise, let
            // value be the string "on".
            let value = element.attr(local_name!("value")).unwrap_or("on");
            entry_list.0.push(Entry::new(name, value));
        } else if let Some(value) = element.attr(local_name!("value")) {
            entry_list.0.push(Entry::new(name, value));
        } else {
            // Text containers (textarea) carry their value as content.
            entry_list.0.push(Entry::new(name, &element.text_content()));
        }
    }

    entry_list
}

/// Normalizes line endings in a string for form submission.
///
/// Replaces every occurrence of U+000D (CR) not followed by U+000A (LF),
/// and every occurrence of U+000A (LF) not preceded by U+000D (CR), by a
/// CRLF pair.
fn normalize_line_endings(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(current) = chars.next() {
        match (current, chars.peek()) {
            ('\r', Some('\n')) => {
                result.push_str("\r\n");
                chars.next();
            }
            ('\r' | '\n', _) => {
                result.push_str("\r\n");
            }
            _ => result.push(current),
        }
    }

    result
}

/// Encodes a list of name-value pairs as `text/plain`.
///
/// https://html.spec.whatwg.org/multipage/form-control-infrastructure.html#text/plain-encoding-algorithm
pub fn encode_text_plain(input: &[(String, String)]) -> String {
    let mut out = String::new();
    for (name, value) in input {
        out.push_str(name);
        out.push('=');
        out.push_str(value);
        out.push_str("\r\n");
    }
    out
}

/// The submission method a form element declares, defaulting to GET for
/// a missing or invalid `method` attribute.
pub fn form_method(form: &ElementNodeData) -> FormMethod {
    form.attr(local_name!("method"))
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

/// The form submission HTTP method.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FormMethod {
    #[default]
    Get,
    Post,
    Dialog,
}

impl FromStr for FormMethod {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "get" => FormMethod::Get,
            "post" => FormMethod::Post,
            "dialog" => FormMethod::Dialog,
            _ => return Err(()),
        })
    }
}

/// A list of form entries used for form submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryList(pub Vec<Entry>);

impl EntryList {
    /// Creates a new empty EntryList
    pub fn new() -> Self {
        EntryList(Vec::new())
    }

    /// Converts the entry list to a vector of name-value pairs with
    /// normalized line endings
    pub fn convert_to_list_of_name_value_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|entry| {
                let name = normalize_line_endings(&entry.name);
                let value = normalize_line_endings(&entry.value);
                (name, value)
            })
            .collect()
    }
}

/// A single form entry consisting of a name and value
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entry {
    pub name: String,
    pub value: String,
}

impl Entry {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}
