//! # igqloo - Query Tree
//!
//! Types shared by the lexer, parser and printer.
//!
//! - **[node]** - the query tree: an arena of named fields with aliases and
//!   filter arguments
//! - **[tokens]** - chunks produced by the lexer from one shorthand string
//!
//! ## Shorthand
//!
//! ```text
//! user.posts(first:5),comments.body
//! ```
//!
//! `.` descends into a field, `,` adds a sibling under the field that was
//! current before the last `.`, and a parenthesized suffix is either a filter
//! (`key:value`) or an alias (`name as alias`). The example builds
//!
//! ```text
//! query{user{posts(first:"5"),comments{body}}}
//! ```
pub mod node;
pub mod tokens;

pub use node::{Node, NodeId, QueryTree};
pub use tokens::{Batch, Chunk, ChunkKind};
