//! Shared vocabulary for the Conform content-model engine.
//!
//! This crate defines the data the engine operates on and nothing else:
//! the closed set of WHATWG content categories ([`ContentCategory`],
//! [`CategorySet`]), the per-element content models ([`ContentModel`]),
//! and the element descriptor record ([`ElementDescriptor`]) through which
//! an element catalog describes its elements to the engine.
//!
//! The validation algorithm itself lives in the `conform-dom` crate; a
//! catalog of descriptors for the HTML vocabulary lives in `conform-html`.

mod category;
pub use category::{CategorySet, ContentCategory};

mod model;
pub use model::{ContentModel, CustomContentRule, RejectReason, Verdict};

mod descriptor;
pub use descriptor::ElementDescriptor;

pub use markup5ever::{LocalName, local_name};
