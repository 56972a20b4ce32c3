use std::ops::Range;
use std::sync::Arc;

use crate::ContentManipulator;
use crate::Element;
use crate::ElementClass;
use crate::ManipulatorRef;
use crate::ProviderRef;
use crate::Reference;
use crate::ReferenceProvider;
use crate::RefmarkResult;

/// A stack-built test element. Parents are plain references, so chains are
/// declared leaf-last inside each test:
///
/// ```ignore
/// let root = TestElement::new(&classes::DOCUMENT);
/// let tag = TestElement::new(&classes::TAG).named("useBean").inside(&root);
/// ```
pub(crate) struct TestElement<'a> {
	class: &'static ElementClass,
	name: Option<&'a str>,
	namespace: Option<&'a str>,
	text: Option<&'a str>,
	parent: Option<&'a TestElement<'a>>,
}

impl<'a> TestElement<'a> {
	pub(crate) fn new(class: &'static ElementClass) -> Self {
		Self {
			class,
			name: None,
			namespace: None,
			text: None,
			parent: None,
		}
	}

	pub(crate) fn named(mut self, name: &'a str) -> Self {
		self.name = Some(name);
		self
	}

	pub(crate) fn in_namespace(mut self, uri: &'a str) -> Self {
		self.namespace = Some(uri);
		self
	}

	pub(crate) fn with_text(mut self, text: &'a str) -> Self {
		self.text = Some(text);
		self
	}

	pub(crate) fn inside(mut self, parent: &'a TestElement<'a>) -> Self {
		self.parent = Some(parent);
		self
	}
}

impl Element for TestElement<'_> {
	fn class(&self) -> &'static ElementClass {
		self.class
	}

	fn name(&self) -> Option<&str> {
		self.name
	}

	fn namespace(&self) -> Option<&str> {
		self.namespace
	}

	fn text(&self) -> Option<&str> {
		self.text
	}

	fn parent(&self) -> Option<&dyn Element> {
		self.parent.map(|parent| parent as &dyn Element)
	}
}

/// A provider that labels its output, so tests can read back which providers
/// fired and in what order.
pub(crate) struct LabelledProvider(pub(crate) &'static str);

impl ReferenceProvider for LabelledProvider {
	fn references(&self, _element: &dyn Element) -> Vec<Reference> {
		vec![Reference {
			range: 0..0,
			target: self.0.to_string(),
		}]
	}
}

pub(crate) fn provider(label: &'static str) -> ProviderRef {
	Arc::new(LabelledProvider(label))
}

/// The labels of the providers in `found`, in order.
pub(crate) fn labels(found: &[ProviderRef], element: &dyn Element) -> Vec<String> {
	found
		.iter()
		.flat_map(|provider| provider.references(element))
		.map(|reference| reference.target)
		.collect()
}

/// A manipulator distinguished by the fixed content range it reports.
pub(crate) struct FixedRangeManipulator(pub(crate) Range<usize>);

impl ContentManipulator for FixedRangeManipulator {
	fn content_range(&self, _element: &dyn Element) -> Range<usize> {
		self.0.clone()
	}

	fn replace_content(
		&self,
		element: &dyn Element,
		range: Range<usize>,
		new_content: &str,
	) -> RefmarkResult<String> {
		let text = element.text().unwrap_or_default();
		let mut replaced = String::new();
		replaced.push_str(&text[..range.start]);
		replaced.push_str(new_content);
		replaced.push_str(&text[range.end..]);
		Ok(replaced)
	}
}

pub(crate) fn manipulator(range: Range<usize>) -> ManipulatorRef {
	Arc::new(FixedRangeManipulator(range))
}

pub(crate) const JSP_URI: &str = "http://java.sun.com/JSP/Page";
