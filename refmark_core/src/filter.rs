use crate::Element;
use crate::ElementClass;
use crate::RefmarkError;
use crate::RefmarkResult;
use crate::element::ancestor;

/// A composable boolean test over an element and its context, used to gate
/// provider applicability.
///
/// Filters are immutable trees built once at registration time and
/// interpreted at query time. Evaluation is pure and total: a well-formed
/// filter never panics and always terminates. The one malformed shape — an
/// [`Ancestor`](ElementFilter::Ancestor) with distance zero — is rejected by
/// [`validate`](ElementFilter::validate) when the filter is registered, never
/// at evaluation time.
///
/// An *absent* filter (`Option::<ElementFilter>::None` on a binding) is the
/// identity: it accepts everything.
#[derive(Debug, Clone)]
pub enum ElementFilter {
	/// The candidate's class is the given class or a descendant of it.
	ClassIs(&'static ElementClass),
	/// The candidate's text (falling back to its name) equals any of the
	/// given strings. Exact match, no normalization.
	TextEquals(Vec<String>),
	/// The candidate's namespace equals any of the given URIs.
	NamespaceIs(Vec<String>),
	/// Walk `distance` containment steps up from the *context* element and
	/// evaluate `inner` against that ancestor. Walking past the root is
	/// `false`, never an error.
	Ancestor {
		distance: usize,
		inner: Box<ElementFilter>,
	},
	/// Inverts `inner`.
	Not(Box<ElementFilter>),
	/// All inner filters hold. Empty is vacuously true.
	And(Vec<ElementFilter>),
	/// Any inner filter holds. Empty is vacuously false.
	Or(Vec<ElementFilter>),
}

impl ElementFilter {
	pub fn class_is(class: &'static ElementClass) -> Self {
		Self::ClassIs(class)
	}

	pub fn text_equals(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self::TextEquals(values.into_iter().map(Into::into).collect())
	}

	pub fn namespace_is(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self::NamespaceIs(values.into_iter().map(Into::into).collect())
	}

	pub fn ancestor(distance: usize, inner: ElementFilter) -> Self {
		Self::Ancestor {
			distance,
			inner: Box::new(inner),
		}
	}

	pub fn not(inner: ElementFilter) -> Self {
		Self::Not(Box::new(inner))
	}

	pub fn and(filters: impl IntoIterator<Item = ElementFilter>) -> Self {
		Self::And(filters.into_iter().collect())
	}

	pub fn or(filters: impl IntoIterator<Item = ElementFilter>) -> Self {
		Self::Or(filters.into_iter().collect())
	}

	/// Evaluate this filter against `(candidate, context)`.
	///
	/// During the registry's scope walk both arguments are the node currently
	/// being consulted; they are kept separate so ancestor tests stay anchored
	/// to the position the binding was matched at.
	pub fn matches(&self, candidate: &dyn Element, context: &dyn Element) -> bool {
		match self {
			ElementFilter::ClassIs(class) => class.is_assignable_from(candidate.class()),
			ElementFilter::TextEquals(values) => candidate
				.text()
				.or_else(|| candidate.name())
				.is_some_and(|text| values.iter().any(|value| value == text)),
			ElementFilter::NamespaceIs(values) => candidate
				.namespace()
				.is_some_and(|uri| values.iter().any(|value| value == uri)),
			ElementFilter::Ancestor { distance, inner } => match ancestor(context, *distance) {
				Some(scope) => inner.matches(scope, scope),
				None => false,
			},
			ElementFilter::Not(inner) => !inner.matches(candidate, context),
			ElementFilter::And(filters) => {
				filters.iter().all(|filter| filter.matches(candidate, context))
			}
			ElementFilter::Or(filters) => {
				filters.iter().any(|filter| filter.matches(candidate, context))
			}
		}
	}

	/// Check the filter tree for shapes that cannot be evaluated sensibly.
	/// Called once per registration; the registry logs and skips registrations
	/// whose filter fails here.
	pub fn validate(&self) -> RefmarkResult<()> {
		match self {
			ElementFilter::Ancestor { distance: 0, .. } => Err(RefmarkError::InvalidFilter(
				"ancestor distance must be at least 1".into(),
			)),
			ElementFilter::Ancestor { inner, .. } | ElementFilter::Not(inner) => inner.validate(),
			ElementFilter::And(filters) | ElementFilter::Or(filters) => {
				filters.iter().try_for_each(ElementFilter::validate)
			}
			ElementFilter::ClassIs(_)
			| ElementFilter::TextEquals(_)
			| ElementFilter::NamespaceIs(_) => Ok(()),
		}
	}
}
