use crate::CategorySet;

/// What an element is permitted to contain.
///
/// Content models are data, not code: the engine interprets them. The one
/// escape hatch is [`ContentModel::Custom`], which names an entry in the
/// engine's rule table for the handful of elements whose ordering or
/// cardinality constraints cannot be expressed as a category set.
///
/// https://html.spec.whatwg.org/multipage/dom.html#content-models
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentModel {
    /// The element must have no children at all (void elements, `iframe`).
    Nothing,
    /// Children may only be character data, no element children (`title`,
    /// `textarea`, and the raw-text elements `script`/`style`).
    Text,
    /// The element imposes no restriction of its own; its children are
    /// judged against the nearest non-transparent ancestor's model
    /// (`a`, `ins`, `del`, `map`, `object`, the media elements).
    Transparent,
    /// Every element child must belong to at least one of these categories.
    Categories(CategorySet),
    /// Delegate to a named rule in the engine's rule table.
    Custom(CustomContentRule),
}

impl ContentModel {
    /// Resolve this model against a prospective child, where the model can
    /// be resolved locally.
    ///
    /// Returns `None` for [`ContentModel::Transparent`] (resolution needs
    /// ancestor context) and [`ContentModel::Custom`] (resolution needs the
    /// rule table). Both of those live in the validator.
    pub fn accepts(&self, child_categories: CategorySet, child_is_text: bool) -> Option<Verdict> {
        match *self {
            ContentModel::Nothing => Some(Verdict::Rejected(if child_is_text {
                RejectReason::TextNotAllowed
            } else {
                RejectReason::ElementNotAllowed
            })),
            ContentModel::Text => Some(if child_is_text {
                Verdict::Allowed
            } else {
                Verdict::Rejected(RejectReason::ElementNotAllowed)
            }),
            ContentModel::Categories(allowed) => Some(if child_is_text {
                // Character data is phrasing content.
                if allowed.contains(CategorySet::PHRASING) {
                    Verdict::Allowed
                } else {
                    Verdict::Rejected(RejectReason::TextNotAllowed)
                }
            } else if allowed.intersects(child_categories) {
                Verdict::Allowed
            } else {
                Verdict::Rejected(RejectReason::DisallowedChild)
            }),
            ContentModel::Transparent | ContentModel::Custom(_) => None,
        }
    }

    pub fn is_transparent(&self) -> bool {
        matches!(self, ContentModel::Transparent)
    }

    /// Whether elements with this model are serialized as void elements.
    pub fn is_void(&self) -> bool {
        matches!(self, ContentModel::Nothing)
    }
}

/// Identifier for an irregular content rule.
///
/// These are the elements whose content models carry ordering or
/// cardinality constraints beyond "children belong to these categories".
/// The set is closed and matched exhaustively by the engine's rule table,
/// so every irregular rule is reviewable in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomContentRule {
    /// `ul`, `ol`, `menu`: `li` children, plus script-supporting elements.
    ListContainer,
    /// `dl`: `dt`/`dd`/`div` children; a `dd` must not open the list.
    DescriptionList,
    /// `select`: `option`, `optgroup` and `hr` children.
    SelectContainer,
    /// `optgroup`: option-group inner content only.
    OptionGroup,
    /// `details`: exactly one `summary`, first, then flow content.
    DetailsContent,
    /// `figure`: at most one `figcaption`, first or last, flow otherwise.
    FigureContent,
    /// `table`: caption? colgroup* thead? (tbody* | tr+) tfoot?.
    TableContent,
    /// `thead`/`tbody`/`tfoot`: `tr` children.
    TableRowGroup,
    /// `tr`: `td`/`th` children.
    TableRow,
    /// `colgroup`: `col` and `template` children only.
    ColumnGroup,
    /// `fieldset`: optional `legend` first, then flow content.
    FieldsetContent,
    /// `picture`: `source`* then exactly one `img`.
    PictureContent,
    /// `html`: a `head` followed by a `body`.
    HtmlContent,
    /// `head`: metadata content with exactly one `title`, at most one `base`.
    HeadContent,
}

/// The outcome of testing one child against one content rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allowed,
    Rejected(RejectReason),
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allowed)
    }
}

/// Why a child was rejected by a content rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The child's categories do not intersect the permitted set.
    DisallowedChild,
    /// Text under a model that does not admit character data.
    TextNotAllowed,
    /// An element child under a `Text` or `Nothing` model.
    ElementNotAllowed,
}
