//! Errors raised while turning shorthand strings into a query tree.

use thiserror::Error;

/// A shorthand string could not be parsed.
///
/// Carries the offending shorthand string, the character offset where the
/// problem was detected, and the reason. Parsing stops at the first error.
///
/// # Example
///
/// ```
/// use igqloo::{parse_fields, ParseErrorKind};
///
/// let err = parse_fields(["posts(first)"]).unwrap_err();
/// assert_eq!(err.spec, "posts(first)");
/// assert_eq!(err.position, 5);
/// assert!(matches!(err.reason, ParseErrorKind::MalformedFilter(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse '{spec}' at position {position}: {reason}")]
pub struct ParseError {
    /// The shorthand string being parsed.
    pub spec: String,
    /// Character offset into `spec`.
    pub position: usize,
    /// What went wrong.
    pub reason: ParseErrorKind,
}

impl ParseError {
    pub fn new(spec: impl Into<String>, position: usize, reason: ParseErrorKind) -> Self {
        ParseError {
            spec: spec.into(),
            position,
            reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A connector with nothing after it, or an empty shorthand string.
    #[error("expected a field name")]
    EmptySegment,

    #[error("'(' is never closed")]
    UnclosedParen,

    #[error("')' without a matching '('")]
    UnmatchedParen,

    /// Anything other than a connector or another annotation after `)`.
    #[error("unexpected text after ')'")]
    TrailingText,

    #[error("empty annotation '()'")]
    EmptyAnnotation,

    /// Annotation that is neither `name as alias` nor `key:value`.
    #[error("malformed filter '{0}', expected 'key:value' or 'name as alias'")]
    MalformedFilter(String),

    #[error("filter key is empty")]
    EmptyFilterKey,

    #[error("filter value is empty")]
    EmptyFilterValue,

    #[error("alias target is empty")]
    EmptyAliasTarget,

    #[error("alias is empty")]
    EmptyAlias,
}
