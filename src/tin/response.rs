//! Classification of SOAP responses into result values or faults.

use std::sync::LazyLock;

use roxmltree::Document;
use tracing::warn;

use crate::core::NodePath;

static FAULT_MATCHER: LazyLock<NodePath> = LazyLock::new(|| NodePath::new(["Fault"]));
static FAULT_CODE: LazyLock<NodePath> = LazyLock::new(|| NodePath::new(["Fault", "faultcode"]));
static FAULT_STRING: LazyLock<NodePath> =
    LazyLock::new(|| NodePath::new(["Fault", "faultstring"]));

/// What a response document turned out to contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The valid matcher hit; one trimmed text value per extractor, in order.
    Valid(Vec<String>),
    /// A SOAP fault was found.
    Fault { code: String, string: String },
    /// Neither shape matched.
    Unmatched,
}

impl Extraction {
    pub fn is_fault(&self) -> bool {
        !matches!(self, Self::Valid(_))
    }
}

/// Classify `doc` and pull out the relevant text values.
///
/// When `valid_matcher` selects an element, each of `valid_extractors` is
/// evaluated in order. Otherwise the document is searched for a SOAP
/// `Fault`. Missing elements yield empty strings. A document matching
/// neither shape gives [`Extraction::Unmatched`] rather than an error.
pub fn extract(
    doc: &Document<'_>,
    valid_matcher: &NodePath,
    valid_extractors: &[NodePath],
) -> Extraction {
    if valid_matcher.select(doc).is_some() {
        return Extraction::Valid(valid_extractors.iter().map(|p| p.text(doc)).collect());
    }

    if FAULT_MATCHER.select(doc).is_some() {
        return Extraction::Fault {
            code: FAULT_CODE.text(doc),
            string: FAULT_STRING.text(doc),
        };
    }

    warn!(
        root = doc.root_element().tag_name().name(),
        matcher = %valid_matcher,
        "response matched neither the result nor the fault shape"
    );
    Extraction::Unmatched
}
