pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;
#[cfg(feature = "cli")]
pub mod transport;

pub use ast::{Chunk, ChunkKind, Node, NodeId, QueryTree};
pub use error::{ParseError, ParseErrorKind};
pub use lexer::Lexer;
pub use output::{to_query, to_query_with, PrintOptions, QueryPrinter};
pub use parser::{parse_fields, Annotation, Parser};
