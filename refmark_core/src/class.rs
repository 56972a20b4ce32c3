use std::fmt::Display;
use std::hash::Hash;
use std::hash::Hasher;

/// A static type tag standing in for an element's runtime class.
///
/// Hosts describe their syntax-tree node kinds as a hierarchy of `'static`
/// class tags: each class optionally names the class it specializes, and
/// [`is_assignable_from`](ElementClass::is_assignable_from) walks that chain.
/// The registry keys its bindings, manipulator entries, and temp scopes by
/// these tags, so two elements dispatch identically exactly when they report
/// the same class.
///
/// Identity is by address: two `ElementClass` values are the same class only
/// when they are the same static. The shipped markup hierarchy lives in
/// [`crate::classes`].
#[derive(Debug)]
pub struct ElementClass {
	name: &'static str,
	parent: Option<&'static ElementClass>,
}

impl ElementClass {
	/// Create a class tag. Pass `Some(parent)` for a class that specializes
	/// another, `None` for a hierarchy root.
	pub const fn new(name: &'static str, parent: Option<&'static ElementClass>) -> Self {
		Self { name, parent }
	}

	/// The class name, used in diagnostics and log output.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// The class this one specializes, if any.
	pub fn parent(&self) -> Option<&'static ElementClass> {
		self.parent
	}

	/// True when `other` is this class or one of its descendants.
	pub fn is_assignable_from(&self, other: &'static ElementClass) -> bool {
		let mut current = Some(other);

		while let Some(class) = current {
			if std::ptr::eq(self, class) {
				return true;
			}

			current = class.parent;
		}

		false
	}
}

impl PartialEq for ElementClass {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self, other)
	}
}

impl Eq for ElementClass {}

impl Hash for ElementClass {
	fn hash<H: Hasher>(&self, state: &mut H) {
		std::ptr::from_ref(self).hash(state);
	}
}

impl Display for ElementClass {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.name)
	}
}
