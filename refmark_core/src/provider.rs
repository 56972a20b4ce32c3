use std::fmt::Display;
use std::ops::Range;
use std::sync::Arc;

use crate::Element;

/// A semantic reference produced by a provider for a matched element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
	/// Byte range of the reference inside the element's text.
	pub range: Range<usize>,
	/// Symbolic target the range points at: a file path, a class name, a
	/// properties-file key. The registry never interprets this.
	pub target: String,
}

/// A capability object that produces references for elements routed to it.
///
/// Providers are opaque to the registry: it only stores them, decides which
/// ones apply to a queried element, and hands them back. Invoking them and
/// merging their output is the consumer's business.
pub trait ReferenceProvider: Send + Sync {
	/// Produce the references this provider recognizes in `element`.
	fn references(&self, element: &dyn Element) -> Vec<Reference>;
}

/// Shared handle under which providers are registered and returned.
pub type ProviderRef = Arc<dyn ReferenceProvider>;

/// A process-wide symbolic identity under which a provider can be installed
/// once and fetched back by later registration calls, instead of duplicating
/// its filter logic at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProviderType(pub &'static str);

impl ProviderType {
	/// Resolves class names in attribute values.
	pub const CLASS_REFERENCES: ProviderType = ProviderType("class-references");
	/// Resolves CSS class and id selectors.
	pub const CSS_CLASS_OR_ID: ProviderType = ProviderType("css-class-or-id");
	/// Resolves paths that may contain runtime expressions.
	pub const DYNAMIC_PATH_REFERENCES: ProviderType = ProviderType("dynamic-path-references");
	/// Resolves static include/file paths.
	pub const PATH_REFERENCES: ProviderType = ProviderType("path-references");
	/// Resolves keys into properties files.
	pub const PROPERTIES_FILE_KEYS: ProviderType = ProviderType("properties-file-keys");
	/// Resolves URIs and namespace locations.
	pub const URI_REFERENCES: ProviderType = ProviderType("uri-references");
}

impl Display for ProviderType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}
