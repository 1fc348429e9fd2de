//! Static element descriptors for the HTML vocabulary.
//!
//! One descriptor per element, with the categories and content model the
//! WHATWG HTML spec assigns it, grouped the way the spec's semantics
//! chapters are. The handful of elements with irregular content models
//! point at the engine's rule table via [`CustomContentRule`].
//!
//! https://html.spec.whatwg.org/multipage/semantics.html

use conform_traits::{CategorySet, ContentModel, CustomContentRule, ElementDescriptor};
use markup5ever::local_name;

// Category sets shared by many elements.
const TEXT_LEVEL: CategorySet = CategorySet::FLOW
    .union(CategorySet::PHRASING)
    .union(CategorySet::PALPABLE);
const FLOW_PALPABLE: CategorySet = CategorySet::FLOW.union(CategorySet::PALPABLE);
const SECTIONING: CategorySet = CategorySet::FLOW
    .union(CategorySet::SECTIONING)
    .union(CategorySet::PALPABLE);
const HEADING: CategorySet = CategorySet::FLOW
    .union(CategorySet::HEADING)
    .union(CategorySet::PALPABLE);
const EMBEDDED: CategorySet = CategorySet::FLOW
    .union(CategorySet::PHRASING)
    .union(CategorySet::EMBEDDED)
    .union(CategorySet::PALPABLE);
const FORM_CONTROL: CategorySet = TEXT_LEVEL
    .union(CategorySet::INTERACTIVE)
    .union(CategorySet::FORM_ASSOCIATED)
    .union(CategorySet::LISTED)
    .union(CategorySet::LABELABLE);

// Content models shared by most regular elements. Text is flow content,
// and text allowance rides on phrasing membership, so the flow model
// carries both bits (every phrasing element is also flow, so this admits
// no extra elements).
const FLOW_CONTENT: ContentModel =
    ContentModel::Categories(CategorySet::FLOW.union(CategorySet::PHRASING));
const PHRASING_CONTENT: ContentModel = ContentModel::Categories(CategorySet::PHRASING);

macro_rules! descriptors {
    ($($(#[$meta:meta])* $name:ident = ($tag:tt, $categories:expr, $content:expr);)+) => {
        $($(#[$meta])*
        pub static $name: ElementDescriptor = ElementDescriptor {
            tag: local_name!($tag),
            categories: $categories,
            content: $content,
        };)+

        /// Every descriptor in the catalog.
        pub static ALL: &[&ElementDescriptor] = &[$(&$name),+];

        /// Look up the descriptor for a tag name.
        pub fn descriptor(tag: &str) -> Option<&'static ElementDescriptor> {
            Some(match tag {
                $($tag => &$name,)+
                _ => return None,
            })
        }
    };
}

descriptors! {
    // The document element
    HTML = ("html", CategorySet::empty(), ContentModel::Custom(CustomContentRule::HtmlContent));

    // Document metadata
    HEAD = ("head", CategorySet::empty(), ContentModel::Custom(CustomContentRule::HeadContent));
    TITLE = ("title", CategorySet::METADATA, ContentModel::Text);
    BASE = ("base", CategorySet::METADATA, ContentModel::Nothing);
    LINK = ("link", CategorySet::METADATA, ContentModel::Nothing);
    META = ("meta", CategorySet::METADATA, ContentModel::Nothing);
    STYLE = ("style", CategorySet::METADATA, ContentModel::Text);

    // Sections
    BODY = ("body", CategorySet::SECTIONING_ROOT, FLOW_CONTENT);
    ARTICLE = ("article", SECTIONING, FLOW_CONTENT);
    SECTION = ("section", SECTIONING, FLOW_CONTENT);
    NAV = ("nav", SECTIONING, FLOW_CONTENT);
    ASIDE = ("aside", SECTIONING, FLOW_CONTENT);
    H1 = ("h1", HEADING, PHRASING_CONTENT);
    H2 = ("h2", HEADING, PHRASING_CONTENT);
    H3 = ("h3", HEADING, PHRASING_CONTENT);
    H4 = ("h4", HEADING, PHRASING_CONTENT);
    H5 = ("h5", HEADING, PHRASING_CONTENT);
    H6 = ("h6", HEADING, PHRASING_CONTENT);
    HEADER = ("header", FLOW_PALPABLE, FLOW_CONTENT);
    FOOTER = ("footer", FLOW_PALPABLE, FLOW_CONTENT);
    ADDRESS = ("address", FLOW_PALPABLE, FLOW_CONTENT);

    // Grouping content
    P = ("p", FLOW_PALPABLE, PHRASING_CONTENT);
    HR = ("hr", CategorySet::FLOW, ContentModel::Nothing);
    PRE = ("pre", FLOW_PALPABLE, PHRASING_CONTENT);
    BLOCKQUOTE = ("blockquote", FLOW_PALPABLE.union(CategorySet::SECTIONING_ROOT), FLOW_CONTENT);
    OL = ("ol", FLOW_PALPABLE, ContentModel::Custom(CustomContentRule::ListContainer));
    UL = ("ul", FLOW_PALPABLE, ContentModel::Custom(CustomContentRule::ListContainer));
    MENU = ("menu", FLOW_PALPABLE, ContentModel::Custom(CustomContentRule::ListContainer));
    LI = ("li", CategorySet::empty(), FLOW_CONTENT);
    DL = ("dl", FLOW_PALPABLE, ContentModel::Custom(CustomContentRule::DescriptionList));
    DT = ("dt", CategorySet::empty(), FLOW_CONTENT);
    DD = ("dd", CategorySet::empty(), FLOW_CONTENT);
    FIGURE = ("figure", FLOW_PALPABLE.union(CategorySet::SECTIONING_ROOT), ContentModel::Custom(CustomContentRule::FigureContent));
    FIGCAPTION = ("figcaption", CategorySet::empty(), FLOW_CONTENT);
    MAIN = ("main", FLOW_PALPABLE, FLOW_CONTENT);
    DIV = ("div", FLOW_PALPABLE, FLOW_CONTENT);

    // Text-level semantics
    A = ("a", TEXT_LEVEL.union(CategorySet::INTERACTIVE), ContentModel::Transparent);
    EM = ("em", TEXT_LEVEL, PHRASING_CONTENT);
    STRONG = ("strong", TEXT_LEVEL, PHRASING_CONTENT);
    SMALL = ("small", TEXT_LEVEL, PHRASING_CONTENT);
    S = ("s", TEXT_LEVEL, PHRASING_CONTENT);
    CITE = ("cite", TEXT_LEVEL, PHRASING_CONTENT);
    Q = ("q", TEXT_LEVEL, PHRASING_CONTENT);
    DFN = ("dfn", TEXT_LEVEL, PHRASING_CONTENT);
    ABBR = ("abbr", TEXT_LEVEL, PHRASING_CONTENT);
    DATA = ("data", TEXT_LEVEL, PHRASING_CONTENT);
    TIME = ("time", TEXT_LEVEL, PHRASING_CONTENT);
    CODE = ("code", TEXT_LEVEL, PHRASING_CONTENT);
    VAR = ("var", TEXT_LEVEL, PHRASING_CONTENT);
    SAMP = ("samp", TEXT_LEVEL, PHRASING_CONTENT);
    KBD = ("kbd", TEXT_LEVEL, PHRASING_CONTENT);
    SUB = ("sub", TEXT_LEVEL, PHRASING_CONTENT);
    SUP = ("sup", TEXT_LEVEL, PHRASING_CONTENT);
    I = ("i", TEXT_LEVEL, PHRASING_CONTENT);
    B = ("b", TEXT_LEVEL, PHRASING_CONTENT);
    U = ("u", TEXT_LEVEL, PHRASING_CONTENT);
    MARK = ("mark", TEXT_LEVEL, PHRASING_CONTENT);
    BDI = ("bdi", TEXT_LEVEL, PHRASING_CONTENT);
    BDO = ("bdo", TEXT_LEVEL, PHRASING_CONTENT);
    SPAN = ("span", TEXT_LEVEL, PHRASING_CONTENT);
    BR = ("br", CategorySet::FLOW.union(CategorySet::PHRASING), ContentModel::Nothing);
    WBR = ("wbr", CategorySet::FLOW.union(CategorySet::PHRASING), ContentModel::Nothing);

    // Edits
    INS = ("ins", TEXT_LEVEL, ContentModel::Transparent);
    DEL = ("del", CategorySet::FLOW.union(CategorySet::PHRASING), ContentModel::Transparent);

    // Embedded content
    PICTURE = ("picture", CategorySet::FLOW.union(CategorySet::PHRASING).union(CategorySet::EMBEDDED), ContentModel::Custom(CustomContentRule::PictureContent));
    SOURCE = ("source", CategorySet::empty(), ContentModel::Nothing);
    IMG = ("img", EMBEDDED.union(CategorySet::INTERACTIVE).union(CategorySet::FORM_ASSOCIATED), ContentModel::Nothing);
    IFRAME = ("iframe", EMBEDDED.union(CategorySet::INTERACTIVE), ContentModel::Nothing);
    EMBED = ("embed", EMBEDDED.union(CategorySet::INTERACTIVE), ContentModel::Nothing);
    OBJECT = ("object", EMBEDDED.union(CategorySet::LISTED).union(CategorySet::FORM_ASSOCIATED), ContentModel::Transparent);
    VIDEO = ("video", EMBEDDED.union(CategorySet::INTERACTIVE), ContentModel::Transparent);
    AUDIO = ("audio", EMBEDDED.union(CategorySet::INTERACTIVE), ContentModel::Transparent);
    TRACK = ("track", CategorySet::empty(), ContentModel::Nothing);
    MAP = ("map", TEXT_LEVEL, ContentModel::Transparent);
    AREA = ("area", CategorySet::FLOW.union(CategorySet::PHRASING), ContentModel::Nothing);
    CANVAS = ("canvas", EMBEDDED, ContentModel::Transparent);

    // Tabular data
    TABLE = ("table", FLOW_PALPABLE, ContentModel::Custom(CustomContentRule::TableContent));
    CAPTION = ("caption", CategorySet::empty(), FLOW_CONTENT);
    COLGROUP = ("colgroup", CategorySet::empty(), ContentModel::Custom(CustomContentRule::ColumnGroup));
    COL = ("col", CategorySet::empty(), ContentModel::Nothing);
    TBODY = ("tbody", CategorySet::empty(), ContentModel::Custom(CustomContentRule::TableRowGroup));
    THEAD = ("thead", CategorySet::empty(), ContentModel::Custom(CustomContentRule::TableRowGroup));
    TFOOT = ("tfoot", CategorySet::empty(), ContentModel::Custom(CustomContentRule::TableRowGroup));
    TR = ("tr", CategorySet::empty(), ContentModel::Custom(CustomContentRule::TableRow));
    TD = ("td", CategorySet::SECTIONING_ROOT, FLOW_CONTENT);
    TH = ("th", CategorySet::empty(), FLOW_CONTENT);

    // Forms
    FORM = ("form", FLOW_PALPABLE, FLOW_CONTENT);
    LABEL = ("label", TEXT_LEVEL.union(CategorySet::INTERACTIVE).union(CategorySet::FORM_ASSOCIATED), PHRASING_CONTENT);
    INPUT = ("input", FORM_CONTROL.union(CategorySet::SUBMITTABLE).union(CategorySet::RESETTABLE), ContentModel::Nothing);
    BUTTON = ("button", FORM_CONTROL.union(CategorySet::SUBMITTABLE), PHRASING_CONTENT);
    SELECT = ("select", FORM_CONTROL.union(CategorySet::SUBMITTABLE).union(CategorySet::RESETTABLE), ContentModel::Custom(CustomContentRule::SelectContainer));
    DATALIST = ("datalist", CategorySet::FLOW.union(CategorySet::PHRASING), PHRASING_CONTENT);
    OPTGROUP = ("optgroup", CategorySet::empty(), ContentModel::Custom(CustomContentRule::OptionGroup));
    OPTION = ("option", CategorySet::OPTION_GROUP_CONTENT, ContentModel::Text);
    TEXTAREA = ("textarea", FORM_CONTROL.union(CategorySet::SUBMITTABLE).union(CategorySet::RESETTABLE), ContentModel::Text);
    OUTPUT = ("output", TEXT_LEVEL.union(CategorySet::FORM_ASSOCIATED).union(CategorySet::LISTED).union(CategorySet::LABELABLE).union(CategorySet::RESETTABLE), PHRASING_CONTENT);
    PROGRESS = ("progress", TEXT_LEVEL.union(CategorySet::LABELABLE), PHRASING_CONTENT);
    METER = ("meter", TEXT_LEVEL.union(CategorySet::LABELABLE), PHRASING_CONTENT);
    FIELDSET = ("fieldset", FLOW_PALPABLE.union(CategorySet::SECTIONING_ROOT).union(CategorySet::FORM_ASSOCIATED).union(CategorySet::LISTED), ContentModel::Custom(CustomContentRule::FieldsetContent));
    LEGEND = ("legend", CategorySet::empty(), PHRASING_CONTENT);

    // Interactive elements
    DETAILS = ("details", FLOW_PALPABLE.union(CategorySet::SECTIONING_ROOT).union(CategorySet::INTERACTIVE), ContentModel::Custom(CustomContentRule::DetailsContent));
    SUMMARY = ("summary", CategorySet::empty(), PHRASING_CONTENT);
    DIALOG = ("dialog", CategorySet::FLOW.union(CategorySet::SECTIONING_ROOT), FLOW_CONTENT);

    // Scripting
    SCRIPT = ("script", CategorySet::METADATA.union(CategorySet::FLOW).union(CategorySet::PHRASING).union(CategorySet::SCRIPT_SUPPORTING), ContentModel::Text);
    NOSCRIPT = ("noscript", CategorySet::METADATA.union(CategorySet::FLOW).union(CategorySet::PHRASING), ContentModel::Transparent);
    TEMPLATE = ("template", CategorySet::METADATA.union(CategorySet::FLOW).union(CategorySet::PHRASING).union(CategorySet::SCRIPT_SUPPORTING), ContentModel::Categories(CategorySet::METADATA.union(CategorySet::FLOW).union(CategorySet::PHRASING)));
    SLOT = ("slot", CategorySet::FLOW.union(CategorySet::PHRASING), ContentModel::Transparent);
}
