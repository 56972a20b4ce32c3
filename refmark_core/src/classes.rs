//! The standard markup class hierarchy.
//!
//! These tags cover the node kinds a markup tree (HTML/XML and templated
//! dialects) exposes to the registry. Hosts with richer trees can declare
//! their own [`ElementClass`] statics and parent them anywhere in this
//! hierarchy, or keep a fully separate one.

use crate::ElementClass;

/// Root of the hierarchy; every shipped class descends from it.
pub static ELEMENT: ElementClass = ElementClass::new("element", None);

/// A whole document, the containment root in most trees.
pub static DOCUMENT: ElementClass = ElementClass::new("document", Some(&ELEMENT));

/// A markup tag, e.g. `<jsp:useBean ...>`.
pub static TAG: ElementClass = ElementClass::new("tag", Some(&ELEMENT));

/// An attribute key/value pair inside a tag.
pub static ATTRIBUTE: ElementClass = ElementClass::new("attribute", Some(&ELEMENT));

/// The value half of an attribute; the usual target of named bindings.
pub static ATTRIBUTE_VALUE: ElementClass = ElementClass::new("attribute-value", Some(&ELEMENT));

/// A lexer-level token that survived into the tree.
pub static TOKEN: ElementClass = ElementClass::new("token", Some(&ELEMENT));

/// An identifier token. Nested inside larger expressions, so it is the
/// default temp scope: the provider walk keeps climbing past it.
pub static IDENTIFIER: ElementClass = ElementClass::new("identifier", Some(&TOKEN));

/// Character data between tags.
pub static TEXT: ElementClass = ElementClass::new("text", Some(&ELEMENT));

/// A comment node.
pub static COMMENT: ElementClass = ElementClass::new("comment", Some(&ELEMENT));

/// A `<!DOCTYPE ...>` declaration.
pub static DOCTYPE: ElementClass = ElementClass::new("doctype", Some(&ELEMENT));

/// An entity reference such as `&amp;`.
pub static ENTITY_REF: ElementClass = ElementClass::new("entity-ref", Some(&ELEMENT));

/// A DTD `<!ELEMENT ...>` declaration.
pub static ELEMENT_DECL: ElementClass = ElementClass::new("element-decl", Some(&ELEMENT));

/// A DTD `<!ATTLIST ...>` declaration.
pub static ATTLIST_DECL: ElementClass = ElementClass::new("attlist-decl", Some(&ELEMENT));

/// The content model inside an element declaration.
pub static CONTENT_SPEC: ElementClass = ElementClass::new("content-spec", Some(&ELEMENT));

/// A plain-text file treated as a single element.
pub static PLAIN_TEXT_FILE: ElementClass = ElementClass::new("plain-text-file", Some(&ELEMENT));

/// A string literal inside embedded script or expression content.
pub static STRING_LITERAL: ElementClass = ElementClass::new("string-literal", Some(&ELEMENT));
