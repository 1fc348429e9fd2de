use markup5ever::LocalName;

use crate::{CategorySet, ContentModel};

/// Everything the engine needs to know about one element kind.
///
/// Descriptors are the fixed interface between the engine and an element
/// catalog: the catalog supplies one constant `ElementDescriptor` per
/// element kind (typically as a `static`, using the `local_name!` atom
/// macro for the tag) and the engine only ever borrows them. A descriptor
/// never changes after construction, so validation runs may share them
/// freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementDescriptor {
    /// The element's tag name.
    pub tag: LocalName,
    /// The categories the element itself belongs to when used as a child.
    pub categories: CategorySet,
    /// What the element is permitted to contain.
    pub content: ContentModel,
}

impl ElementDescriptor {
    pub const fn new(tag: LocalName, categories: CategorySet, content: ContentModel) -> Self {
        Self {
            tag,
            categories,
            content,
        }
    }
}
