use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use crate::Element;
use crate::ElementClass;
use crate::ElementFilter;
use crate::RefmarkError;
use crate::RefmarkResult;
use crate::binding::ClassBindings;
use crate::binding::SimpleBinding;
use crate::classes;
use crate::manipulator::ManipulatorRef;
use crate::manipulator::ManipulatorTable;
use crate::provider::ProviderRef;
use crate::provider::ProviderType;

/// The capability-dispatch registry.
///
/// Registration populates the registry during a single-threaded
/// initialization phase (`&mut self` methods); afterwards it is read-only
/// and, behind an `Arc`, can be queried from many threads at once — every
/// query method takes `&self`, holds no locks, and performs no I/O.
///
/// Queries route a syntax-tree element to the providers and manipulators
/// registered for its class, its name, and its position:
///
/// - [`providers_for`](Registry::providers_for) walks the containment
///   hierarchy upwards, consulting the bindings applicable at each level,
///   until it has processed the first element whose class is not a *temp
///   scope* (a class that must never terminate the walk, like a token nested
///   inside the expression that really owns the reference).
/// - [`manipulator_for`](Registry::manipulator_for) finds the nearest
///   registered content manipulator for the element's class.
///
/// Lookup misses are empty results, never errors. The only query error is a
/// caller passing a `hint` class inconsistent with the element (rejected
/// before the walk starts). Invalid registrations are logged and skipped so
/// one bad filter cannot poison the rest of the configuration.
pub struct Registry {
	temp_scopes: Vec<&'static ElementClass>,
	// Ordered by first registration so walk results are deterministic.
	bindings: Vec<(&'static ElementClass, ClassBindings)>,
	classless: SimpleBinding,
	manipulators: ManipulatorTable,
	by_type: HashMap<ProviderType, ProviderRef>,
}

impl Registry {
	/// An empty registry. `temp_scopes` lists the classes that must not
	/// terminate the scope walk; assignability applies, so listing a class
	/// covers its descendants too.
	pub fn new(temp_scopes: impl IntoIterator<Item = &'static ElementClass>) -> Self {
		Self {
			temp_scopes: temp_scopes.into_iter().collect(),
			bindings: Vec::new(),
			classless: SimpleBinding::new(),
			manipulators: ManipulatorTable::new(),
			by_type: HashMap::new(),
		}
	}

	/// Register an unnamed provider under `scope`. With `scope == None` the
	/// provider lands on the class-less fallback list consulted for every
	/// query regardless of element class. An invalid `filter` is logged and
	/// the registration skipped.
	pub fn register_provider(
		&mut self,
		scope: Option<&'static ElementClass>,
		filter: Option<ElementFilter>,
		provider: ProviderRef,
	) {
		if !self.accept_filter(&filter, scope) {
			return;
		}

		match scope {
			Some(class) => self.class_bindings_mut(class).simple_mut().register(filter, provider),
			None => self.classless.register(filter, provider),
		}
	}

	/// Register a named provider under `scope`. The first named registration
	/// for a class creates its named binding; later ones extend it, so all
	/// rules for one class share a single name index. `names == None` is a
	/// wildcard rule matching every name, still gated by `filter`.
	pub fn register_named_provider(
		&mut self,
		scope: &'static ElementClass,
		names: Option<&[&str]>,
		filter: Option<ElementFilter>,
		case_sensitive: bool,
		provider: ProviderRef,
	) {
		if !self.accept_filter(&filter, Some(scope)) {
			return;
		}

		self.class_bindings_mut(scope)
			.named_mut()
			.register(names, filter, case_sensitive, provider);
	}

	/// Named registration under the shipped attribute-value class; the
	/// common case for markup wiring.
	pub fn register_attribute_value_provider(
		&mut self,
		names: Option<&[&str]>,
		filter: Option<ElementFilter>,
		case_sensitive: bool,
		provider: ProviderRef,
	) {
		self.register_named_provider(
			&classes::ATTRIBUTE_VALUE,
			names,
			filter,
			case_sensitive,
			provider,
		);
	}

	/// Named registration under the shipped tag class.
	pub fn register_tag_provider(
		&mut self,
		names: Option<&[&str]>,
		filter: Option<ElementFilter>,
		case_sensitive: bool,
		provider: ProviderRef,
	) {
		self.register_named_provider(&classes::TAG, names, filter, case_sensitive, provider);
	}

	/// Install `provider` under a symbolic token. Last write wins.
	pub fn register_type_provider(&mut self, token: ProviderType, provider: ProviderRef) {
		self.by_type.insert(token, provider);
	}

	/// The provider previously installed under `token`, or `None`. Callers
	/// must treat `None` as "no provider available", not as a failure.
	pub fn provider_by_type(&self, token: ProviderType) -> Option<ProviderRef> {
		self.by_type.get(&token).map(Arc::clone)
	}

	/// Append a manipulator entry for `class`. Entries registered earlier
	/// take priority over later ones covering the same elements.
	pub fn register_manipulator(&mut self, class: &'static ElementClass, manipulator: ManipulatorRef) {
		self.manipulators.register(class, manipulator);
	}

	/// The nearest registered content manipulator for `element`, if any.
	pub fn manipulator_for(&self, element: &dyn Element) -> Option<ManipulatorRef> {
		self.manipulators.lookup(element)
	}

	/// All providers applicable to `element`, in discovery order.
	///
	/// The walk starts at `element` and climbs the containment hierarchy. At
	/// each level it consults the bindings of every registered class
	/// assignable from the current node's class (or only the `hint` class's
	/// bindings when a hint is given), then the class-less bindings, then
	/// moves to the parent. It stops once the node just processed is not a
	/// temp scope — that boundary node is included, so the tree root still
	/// gets one pass. Duplicates are kept: a provider registered twice under
	/// compatible scopes appears twice.
	///
	/// A `hint` class not assignable from the element's own class is a
	/// contract violation and is rejected before the walk begins. A hint that
	/// was never registered yields `Ok` with an empty list.
	pub fn providers_for(
		&self,
		element: &dyn Element,
		hint: Option<&'static ElementClass>,
	) -> RefmarkResult<Vec<ProviderRef>> {
		if let Some(hint) = hint {
			if !hint.is_assignable_from(element.class()) {
				return Err(RefmarkError::HintMismatch {
					hint: hint.name(),
					actual: element.class().name(),
				});
			}
		}

		let mut found = Vec::new();
		let mut current = element;

		loop {
			match hint {
				Some(hint) => {
					if hint.is_assignable_from(current.class()) {
						if let Some(bindings) = self.class_bindings(hint) {
							bindings.collect(current, current, &mut found);
						}
					}
				}
				None => {
					for (class, bindings) in &self.bindings {
						if class.is_assignable_from(current.class()) {
							bindings.collect(current, current, &mut found);
						}
					}
				}
			}

			self.classless.collect(current, current, &mut found);

			if self.is_scope_final(current.class()) {
				break;
			}

			match current.parent() {
				Some(parent) => current = parent,
				None => break,
			}
		}

		Ok(found)
	}

	/// True when `class` terminates the scope walk, i.e. it is not covered by
	/// any temp-scope class.
	fn is_scope_final(&self, class: &'static ElementClass) -> bool {
		!self.temp_scopes.iter().any(|temp| temp.is_assignable_from(class))
	}

	fn class_bindings(&self, class: &'static ElementClass) -> Option<&ClassBindings> {
		self.bindings
			.iter()
			.find(|(entry_class, _)| *entry_class == class)
			.map(|(_, bindings)| bindings)
	}

	fn class_bindings_mut(&mut self, class: &'static ElementClass) -> &mut ClassBindings {
		if let Some(position) = self
			.bindings
			.iter()
			.position(|(entry_class, _)| *entry_class == class)
		{
			return &mut self.bindings[position].1;
		}

		self.bindings.push((class, ClassBindings::default()));
		let position = self.bindings.len() - 1;
		&mut self.bindings[position].1
	}

	fn accept_filter(
		&self,
		filter: &Option<ElementFilter>,
		scope: Option<&'static ElementClass>,
	) -> bool {
		let Some(filter) = filter else {
			return true;
		};

		if let Err(error) = filter.validate() {
			warn!(
				%error,
				scope = scope.map_or("<any>", ElementClass::name),
				"skipping provider registration with invalid filter"
			);
			return false;
		}

		true
	}
}

impl Default for Registry {
	/// A registry with the markup default temp scope: identifiers never
	/// terminate the walk.
	fn default() -> Self {
		Self::new([&classes::IDENTIFIER])
	}
}
