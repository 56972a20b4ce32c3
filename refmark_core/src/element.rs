use crate::ElementClass;

/// The host tree contract.
///
/// The syntax tree is owned by the host; the registry only reads it through
/// this trait during filter evaluation and the upward scope walk. `parent`
/// returns `None` at the containment root.
pub trait Element {
	/// The element's runtime class tag.
	fn class(&self) -> &'static ElementClass;

	/// The element's name, for node kinds that have one: a tag's local name,
	/// or the key of the attribute an attribute value belongs to. Named
	/// bindings match against this.
	fn name(&self) -> Option<&str> {
		None
	}

	/// The namespace URI the element is declared in, if any.
	fn namespace(&self) -> Option<&str> {
		None
	}

	/// The element's own text, for node kinds that carry some.
	fn text(&self) -> Option<&str> {
		None
	}

	/// The immediately containing element, or `None` at the tree root.
	fn parent(&self) -> Option<&dyn Element>;
}

/// Walk `distance` containment steps up from `element`. Returns `None` when
/// the walk runs past the tree root.
pub fn ancestor(element: &dyn Element, distance: usize) -> Option<&dyn Element> {
	let mut current = element;

	for _ in 0..distance {
		current = current.parent()?;
	}

	Some(current)
}
