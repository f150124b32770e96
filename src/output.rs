//! Query document serialization.
//!
//! Rendering is depth-first and order-preserving, with no whitespace:
//!
//! 1. the root emits `query`
//! 2. an aliased node emits `alias:`
//! 3. a named node emits its name
//! 4. filters render as `(key:"value"...)`
//! 5. children render as `{child,child}` in first-referenced order
//!
//! Filter values are written between double quotes as given; escaping is the
//! caller's business.
//!
//! # Argument separator
//!
//! By default consecutive filters are written with nothing between them,
//! e.g. `posts(first:"5"after:"x")`. A GraphQL lexer accepts this because the
//! closing quote ends the string token and commas are insignificant, so the
//! separator is configurable rather than fixed.
//!
//! ```
//! use igqloo::output::{to_query_with, PrintOptions};
//!
//! let tree = igqloo::parse_fields(["posts(first:5)(after:x)"]).unwrap();
//! assert_eq!(tree.to_string(), r#"query{posts(first:"5"after:"x")}"#);
//!
//! let options = PrintOptions::comma_separated();
//! assert_eq!(
//!     to_query_with(&tree, &options),
//!     r#"query{posts(first:"5",after:"x")}"#,
//! );
//! ```

use crate::ast::{NodeId, QueryTree};

/// Settings for [`QueryPrinter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintOptions {
    /// Written between consecutive filter entries of one node
    pub argument_separator: String,
}

impl PrintOptions {
    pub fn comma_separated() -> Self {
        PrintOptions {
            argument_separator: ",".to_string(),
        }
    }
}

pub struct QueryPrinter {
    options: PrintOptions,
}

impl QueryPrinter {
    pub fn new(options: PrintOptions) -> Self {
        QueryPrinter { options }
    }

    /// Renders the whole tree, starting with `query`.
    pub fn print(&self, tree: &QueryTree) -> String {
        self.print_node(tree, tree.root())
    }

    /// Renders the subtree rooted at `id`.
    pub fn print_node(&self, tree: &QueryTree, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(tree, id, &mut out);
        out
    }

    fn write_node(&self, tree: &QueryTree, id: NodeId, out: &mut String) {
        let node = tree.node(id);

        if node.is_root() {
            out.push_str("query");
        }
        if let Some(alias) = node.alias() {
            out.push_str(alias);
            out.push(':');
        }
        if let Some(name) = node.name() {
            out.push_str(name);
        }

        if node.has_filters() {
            let entries: Vec<String> = node
                .filters()
                .map(|(key, value)| format!("{key}:\"{value}\""))
                .collect();
            out.push('(');
            out.push_str(&entries.join(&self.options.argument_separator));
            out.push(')');
        }

        let children = node.children();
        if !children.is_empty() {
            out.push('{');
            for (i, &child) in children.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                self.write_node(tree, child, out);
            }
            out.push('}');
        }
    }
}

/// Renders `tree` with default options.
pub fn to_query(tree: &QueryTree) -> String {
    QueryPrinter::new(PrintOptions::default()).print(tree)
}

pub fn to_query_with(tree: &QueryTree, options: &PrintOptions) -> String {
    QueryPrinter::new(options.clone()).print(tree)
}
