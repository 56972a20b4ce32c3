use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum RefmarkError {
	#[error("invalid element filter: {0}")]
	#[diagnostic(
		code(refmark::invalid_filter),
		help("ancestor filters need a distance of at least 1; use 2 to test the grandparent")
	)]
	InvalidFilter(String),

	#[error("hint class `{hint}` is not assignable from element class `{actual}`")]
	#[diagnostic(
		code(refmark::hint_mismatch),
		help("pass the element's own class (or one of its ancestors) as the hint, or no hint at all")
	)]
	HintMismatch {
		hint: &'static str,
		actual: &'static str,
	},

	#[error("content change failed for `{class}` element: {reason}")]
	#[diagnostic(code(refmark::content_change))]
	ContentChange {
		class: &'static str,
		reason: String,
	},
}

pub type RefmarkResult<T> = Result<T, RefmarkError>;
