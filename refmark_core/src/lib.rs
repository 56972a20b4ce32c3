//! `refmark_core` is the capability-dispatch registry at the heart of the
//! [refmark](https://github.com/refmark/refmark) markup tooling. Given a
//! syntax-tree element, it determines which registered *reference providers*
//! and *content manipulators* apply to it, in a deterministic order, without
//! every provider having to inspect every element.
//!
//! ## Dispatch pipeline
//!
//! ```text
//! Host syntax-tree element
//!   → Class tags (explicit type-tag hierarchy with assignability)
//!   → Bindings (unnamed: filter-gated; named: name-indexed + filter-gated)
//!   → Scope walk (climb containment until the first non-temp-scope element)
//!   → Ordered provider list handed back to the consumer
//! ```
//!
//! ## Modules
//!
//! - [`classes`] — The shipped markup class hierarchy (tags, attributes,
//!   attribute values, tokens, DTD declarations, ...).
//! - Everything else is re-exported at the crate root.
//!
//! ## Key Types
//!
//! - [`Registry`] — Owns all bindings; registration happens during a
//!   single-threaded init phase, queries are lock-free reads afterwards.
//! - [`ElementFilter`] — A composable boolean predicate over element class,
//!   text, namespace, and ancestry, gating provider applicability.
//! - [`Element`] — The read-only contract the host tree implements.
//! - [`ReferenceProvider`] / [`ContentManipulator`] — The opaque capability
//!   contracts the registry routes work to.
//! - [`ProviderType`] — Symbolic tokens for fetching back a previously
//!   installed provider during wiring.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use refmark_core::classes;
//! use refmark_core::{Element, ElementFilter, Reference, ReferenceProvider, Registry};
//!
//! struct BeanClassProvider;
//!
//! impl ReferenceProvider for BeanClassProvider {
//! 	fn references(&self, element: &dyn Element) -> Vec<Reference> {
//! 		let Some(text) = element.text() else {
//! 			return vec![];
//! 		};
//! 		vec![Reference { range: 0..text.len(), target: text.to_string() }]
//! 	}
//! }
//!
//! let mut registry = Registry::default();
//! registry.register_attribute_value_provider(
//! 	Some(&["class", "type"]),
//! 	Some(ElementFilter::ancestor(
//! 		2,
//! 		ElementFilter::and([
//! 			ElementFilter::text_equals(["useBean"]),
//! 			ElementFilter::namespace_is(["http://java.sun.com/JSP/Page"]),
//! 		]),
//! 	)),
//! 	true,
//! 	Arc::new(BeanClassProvider),
//! );
//! ```

pub use class::*;
pub use element::*;
pub use error::*;
pub use filter::*;
pub use manipulator::*;
pub use provider::*;
pub use registry::*;

mod binding;
mod class;
pub mod classes;
mod element;
mod error;
mod filter;
mod manipulator;
mod provider;
mod registry;

#[cfg(test)]
mod __fixtures;
