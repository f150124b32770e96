use crate::{
    ast::{Batch, ChunkKind, NodeId, QueryTree},
    error::{ParseError, ParseErrorKind},
    lexer::Lexer,
};
use regex::Regex;
use std::sync::OnceLock;

/// Case-insensitive ` as ` between an alias target and the alias.
fn alias_separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new("(?i) as ").expect("alias separator pattern is valid"))
}

/// Parsed contents of a parenthesized annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// `key:value`, split on the first `:`
    Filter { key: String, value: String },

    /// `target as alias`, split on the first ` as ` in any case. The target
    /// may be a dotted path relative to the annotated field.
    Alias { target: String, alias: String },
}

impl Annotation {
    /// Alias syntax wins over filter syntax, so `a as b:c` aliases `a` as `b:c`.
    pub fn parse(body: &str) -> Result<Self, ParseErrorKind> {
        if let Some(m) = alias_separator().find(body) {
            let target = &body[..m.start()];
            let alias = &body[m.end()..];

            if target.is_empty() || target.split('.').any(str::is_empty) {
                return Err(ParseErrorKind::EmptyAliasTarget);
            }
            if alias.is_empty() {
                return Err(ParseErrorKind::EmptyAlias);
            }
            return Ok(Annotation::Alias {
                target: target.to_string(),
                alias: alias.to_string(),
            });
        }

        let (key, value) = body
            .split_once(':')
            .ok_or_else(|| ParseErrorKind::MalformedFilter(body.to_string()))?;

        if key.is_empty() {
            return Err(ParseErrorKind::EmptyFilterKey);
        }
        if value.is_empty() {
            return Err(ParseErrorKind::EmptyFilterValue);
        }
        Ok(Annotation::Filter {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

/// One validated tree mutation.
#[derive(Debug)]
enum Action {
    /// Resolve under the current node
    Descend(String),
    /// Resolve under the node current at the start of the batch
    Sibling(String),
    Annotate(Annotation),
}

/// Applies shorthand strings to a caller-owned [`QueryTree`].
///
/// Every shorthand string starts addressing from the root. A string is
/// checked completely before the tree is touched, so a failed parse leaves
/// the tree as it was.
///
/// # Example
///
/// ```
/// use igqloo::{Parser, QueryTree};
///
/// let mut tree = QueryTree::new();
/// let mut parser = Parser::new(&mut tree);
/// parser.parse_field("user.name").unwrap();
/// parser.parse_field("user.posts(first:5)").unwrap();
///
/// assert_eq!(tree.to_string(), r#"query{user{name,posts(first:"5")}}"#);
/// ```
pub struct Parser<'t> {
    tree: &'t mut QueryTree,
}

impl<'t> Parser<'t> {
    pub fn new(tree: &'t mut QueryTree) -> Self {
        Parser { tree }
    }

    fn plan_batch(spec: &str, batch: Batch) -> Result<Vec<Action>, ParseError> {
        batch
            .into_iter()
            .map(|chunk| match chunk.kind {
                ChunkKind::PlainName(name) | ChunkKind::Descend(name) => Ok(Action::Descend(name)),
                ChunkKind::Sibling(name) => Ok(Action::Sibling(name)),
                ChunkKind::Annotation(body) => Annotation::parse(&body)
                    .map(Action::Annotate)
                    .map_err(|reason| ParseError::new(spec, chunk.position, reason)),
            })
            .collect()
    }

    fn apply(&mut self, plan: Vec<Vec<Action>>) -> NodeId {
        let mut current = self.tree.root();

        for batch in plan {
            let parent = current;
            for action in batch {
                tracing::trace!(?action, "applying chunk");
                match action {
                    Action::Descend(name) => {
                        current = self.tree.resolve_path(current, &name);
                    }
                    Action::Sibling(name) => {
                        current = self.tree.resolve_path(parent, &name);
                    }
                    Action::Annotate(Annotation::Filter { key, value }) => {
                        self.tree.set_filter(current, &key, &value);
                    }
                    Action::Annotate(Annotation::Alias { target, alias }) => {
                        current = self.tree.resolve_path(current, &target);
                        self.tree.set_alias(current, &alias);
                    }
                }
            }
        }

        current
    }

    /// Parses one shorthand string into the tree.
    ///
    /// Returns the node the string ended on.
    pub fn parse_field(&mut self, spec: &str) -> Result<NodeId, ParseError> {
        let plan = Lexer::new(spec)
            .tokenize()?
            .into_iter()
            .map(|batch| Self::plan_batch(spec, batch))
            .collect::<Result<Vec<_>, _>>()?;

        let node = self.apply(plan);
        tracing::debug!(spec, nodes = self.tree.len(), "parsed field");
        Ok(node)
    }

    /// Parses shorthand strings in order, stopping at the first error.
    ///
    /// Strings before the failing one stay applied.
    pub fn parse_fields<I, S>(&mut self, fields: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for field in fields {
            self.parse_field(field.as_ref())?;
        }
        Ok(())
    }
}

/// Builds a fresh tree from shorthand strings.
///
/// Any error discards the whole tree.
///
/// ```
/// let tree = igqloo::parse_fields(["user.name", "user.posts(first:5),comments.body"]).unwrap();
/// assert_eq!(
///     tree.to_string(),
///     r#"query{user{name,posts(first:"5"),comments{body}}}"#,
/// );
/// ```
pub fn parse_fields<I, S>(fields: I) -> Result<QueryTree, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tree = QueryTree::new();
    Parser::new(&mut tree).parse_fields(fields)?;
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_separator_is_case_insensitive() {
        assert_eq!(
            Annotation::parse("author AS a"),
            Ok(Annotation::Alias {
                target: "author".into(),
                alias: "a".into(),
            })
        );
    }

    #[test]
    fn test_filter_splits_on_first_colon() {
        assert_eq!(
            Annotation::parse("after:2024:01"),
            Ok(Annotation::Filter {
                key: "after".into(),
                value: "2024:01".into(),
            })
        );
    }

    #[test]
    fn test_missing_alias_separator_falls_through_to_filter() {
        assert_eq!(
            Annotation::parse("author a"),
            Err(ParseErrorKind::MalformedFilter("author a".into()))
        );
    }
}
