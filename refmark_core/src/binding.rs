use std::collections::HashMap;
use std::sync::Arc;

use crate::Element;
use crate::ElementFilter;
use crate::provider::ProviderRef;

/// One registration: an optional filter gating a provider.
struct FilteredProvider {
	filter: Option<ElementFilter>,
	provider: ProviderRef,
}

impl FilteredProvider {
	fn collect(&self, element: &dyn Element, context: &dyn Element, out: &mut Vec<ProviderRef>) {
		let accepted = self
			.filter
			.as_ref()
			.is_none_or(|filter| filter.matches(element, context));

		if accepted {
			out.push(Arc::clone(&self.provider));
		}
	}
}

/// The unnamed binding strategy: every registered provider fires whenever its
/// filter (if any) matches, in registration order.
#[derive(Default)]
pub(crate) struct SimpleBinding {
	providers: Vec<FilteredProvider>,
}

impl SimpleBinding {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn register(&mut self, filter: Option<ElementFilter>, provider: ProviderRef) {
		self.providers.push(FilteredProvider { filter, provider });
	}

	pub(crate) fn collect(
		&self,
		element: &dyn Element,
		context: &dyn Element,
		out: &mut Vec<ProviderRef>,
	) {
		for entry in &self.providers {
			entry.collect(element, context, out);
		}
	}
}

/// The named binding strategy, for element kinds that expose a name.
///
/// Rules are indexed by name so that collection never scans all of them:
/// case-sensitive rules under the exact name, case-insensitive rules under
/// the lowercased name, and rules registered without a name list in a
/// wildcard set that matches every name. Rules on the same binding may mix
/// case policies. Matching rules still apply their own filter before their
/// provider is appended, and appends happen in registration order.
#[derive(Default)]
pub(crate) struct NamedBinding {
	rules: Vec<FilteredProvider>,
	exact: HashMap<String, Vec<usize>>,
	folded: HashMap<String, Vec<usize>>,
	wildcard: Vec<usize>,
}

impl NamedBinding {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn register(
		&mut self,
		names: Option<&[&str]>,
		filter: Option<ElementFilter>,
		case_sensitive: bool,
		provider: ProviderRef,
	) {
		let index = self.rules.len();
		self.rules.push(FilteredProvider { filter, provider });

		let Some(names) = names else {
			self.wildcard.push(index);
			return;
		};

		for name in names {
			if case_sensitive {
				self.exact.entry((*name).to_string()).or_default().push(index);
			} else {
				self.folded.entry(name.to_lowercase()).or_default().push(index);
			}
		}
	}

	pub(crate) fn collect(
		&self,
		element: &dyn Element,
		context: &dyn Element,
		out: &mut Vec<ProviderRef>,
	) {
		let mut indices: Vec<usize> = Vec::new();

		// An element without a name only matches wildcard rules.
		if let Some(name) = element.name() {
			if let Some(found) = self.exact.get(name) {
				indices.extend_from_slice(found);
			}

			if let Some(found) = self.folded.get(&name.to_lowercase()) {
				indices.extend_from_slice(found);
			}
		}

		indices.extend_from_slice(&self.wildcard);
		indices.sort_unstable();

		for index in indices {
			self.rules[index].collect(element, context, out);
		}
	}
}

/// The bindings registered under one scope class. Both strategies may be
/// present; the unnamed one is consulted first.
#[derive(Default)]
pub(crate) struct ClassBindings {
	pub(crate) simple: Option<SimpleBinding>,
	pub(crate) named: Option<NamedBinding>,
}

impl ClassBindings {
	pub(crate) fn collect(
		&self,
		element: &dyn Element,
		context: &dyn Element,
		out: &mut Vec<ProviderRef>,
	) {
		if let Some(binding) = &self.simple {
			binding.collect(element, context, out);
		}

		if let Some(binding) = &self.named {
			binding.collect(element, context, out);
		}
	}

	pub(crate) fn simple_mut(&mut self) -> &mut SimpleBinding {
		self.simple.get_or_insert_with(SimpleBinding::new)
	}

	pub(crate) fn named_mut(&mut self) -> &mut NamedBinding {
		self.named.get_or_insert_with(NamedBinding::new)
	}
}
