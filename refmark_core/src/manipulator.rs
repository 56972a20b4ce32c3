use std::ops::Range;
use std::sync::Arc;

use crate::Element;
use crate::ElementClass;
use crate::RefmarkResult;

/// A capability object that reads and edits the textual content of a
/// specific element kind.
///
/// Like providers, manipulators are opaque to the registry: it only routes a
/// queried element to the nearest registered one.
pub trait ContentManipulator: Send + Sync {
	/// The byte range of the element's editable content within its text
	/// (e.g. the inside of an attribute value's quotes).
	fn content_range(&self, element: &dyn Element) -> Range<usize>;

	/// Produce the element's new text with `range` replaced by `new_content`.
	fn replace_content(
		&self,
		element: &dyn Element,
		range: Range<usize>,
		new_content: &str,
	) -> RefmarkResult<String>;
}

/// Shared handle under which manipulators are registered and returned.
pub type ManipulatorRef = Arc<dyn ContentManipulator>;

/// Insertion-ordered table of `(class, manipulator)` entries.
///
/// Lookup is a linear first-assignable scan: the earliest entry whose class
/// is assignable from the queried element's class wins, so registration
/// order doubles as priority order. Keep it a list; a map would lose that.
#[derive(Default)]
pub struct ManipulatorTable {
	entries: Vec<(&'static ElementClass, ManipulatorRef)>,
}

impl ManipulatorTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append an entry. Later entries only apply to element classes no
	/// earlier entry covers.
	pub fn register(&mut self, class: &'static ElementClass, manipulator: ManipulatorRef) {
		self.entries.push((class, manipulator));
	}

	/// The nearest manipulator for `element`, or `None` when its class has no
	/// content-editing support. Absence is a normal outcome, not an error.
	pub fn lookup(&self, element: &dyn Element) -> Option<ManipulatorRef> {
		let class = element.class();

		self.entries
			.iter()
			.find(|(entry_class, _)| entry_class.is_assignable_from(class))
			.map(|(_, manipulator)| Arc::clone(manipulator))
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}
}
