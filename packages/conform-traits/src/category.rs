use bitflags::bitflags;

/// A WHATWG content category.
///
/// Each element belongs to zero or more categories, and most content models
/// are expressed as "children must belong to at least one of these
/// categories". The vocabulary is closed: it is fixed by the HTML spec and
/// is not extensible at runtime.
///
/// https://html.spec.whatwg.org/multipage/dom.html#kinds-of-content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentCategory {
    Metadata,
    Flow,
    Sectioning,
    /// Not a category in the spec's main list, but elements like `body`,
    /// `td` and `fieldset` scope headings/outlines the same way, and some
    /// content models refer to it.
    SectioningRoot,
    Heading,
    Phrasing,
    Embedded,
    Interactive,
    Palpable,
    ScriptSupporting,
    FormAssociated,
    Listed,
    Labelable,
    Submittable,
    Resettable,
    /// Option-group inner content: what an `optgroup` may contain.
    OptionGroupContent,
}

bitflags! {
    /// A set of [`ContentCategory`] values, stored as a bitset.
    ///
    /// The category count is small (well under 32), so membership, union
    /// and intersection are single integer operations. All operations are
    /// `const`, which lets element descriptors be built in `static`s.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CategorySet: u32 {
        const METADATA = 1 << 0;
        const FLOW = 1 << 1;
        const SECTIONING = 1 << 2;
        const SECTIONING_ROOT = 1 << 3;
        const HEADING = 1 << 4;
        const PHRASING = 1 << 5;
        const EMBEDDED = 1 << 6;
        const INTERACTIVE = 1 << 7;
        const PALPABLE = 1 << 8;
        const SCRIPT_SUPPORTING = 1 << 9;
        const FORM_ASSOCIATED = 1 << 10;
        const LISTED = 1 << 11;
        const LABELABLE = 1 << 12;
        const SUBMITTABLE = 1 << 13;
        const RESETTABLE = 1 << 14;
        const OPTION_GROUP_CONTENT = 1 << 15;
    }
}

impl From<ContentCategory> for CategorySet {
    fn from(category: ContentCategory) -> Self {
        match category {
            ContentCategory::Metadata => CategorySet::METADATA,
            ContentCategory::Flow => CategorySet::FLOW,
            ContentCategory::Sectioning => CategorySet::SECTIONING,
            ContentCategory::SectioningRoot => CategorySet::SECTIONING_ROOT,
            ContentCategory::Heading => CategorySet::HEADING,
            ContentCategory::Phrasing => CategorySet::PHRASING,
            ContentCategory::Embedded => CategorySet::EMBEDDED,
            ContentCategory::Interactive => CategorySet::INTERACTIVE,
            ContentCategory::Palpable => CategorySet::PALPABLE,
            ContentCategory::ScriptSupporting => CategorySet::SCRIPT_SUPPORTING,
            ContentCategory::FormAssociated => CategorySet::FORM_ASSOCIATED,
            ContentCategory::Listed => CategorySet::LISTED,
            ContentCategory::Labelable => CategorySet::LABELABLE,
            ContentCategory::Submittable => CategorySet::SUBMITTABLE,
            ContentCategory::Resettable => CategorySet::RESETTABLE,
            ContentCategory::OptionGroupContent => CategorySet::OPTION_GROUP_CONTENT,
        }
    }
}

impl CategorySet {
    /// Whether the element this set describes belongs to the given category.
    pub fn has(&self, category: ContentCategory) -> bool {
        self.contains(category.into())
    }
}
