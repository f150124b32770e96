//! Turn shorthand fields into a query document

use super::CliError;
use crate::output::{to_query_with, PrintOptions};
use std::io::BufRead;

/// Options for building a query
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Shorthand strings, applied in order
    pub fields: Vec<String>,
    /// Separate filter arguments with commas
    pub comma_args: bool,
}

/// Reads one shorthand string per non-blank line.
pub fn read_fields(reader: impl BufRead) -> Result<Vec<String>, CliError> {
    let mut fields = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let field = line.trim();
        if !field.is_empty() {
            fields.push(field.to_string());
        }
    }
    Ok(fields)
}

/// Parse every field into a fresh tree and serialize it
pub fn build_query(options: &BuildOptions) -> Result<String, CliError> {
    if options.fields.is_empty() {
        return Err(CliError::NoFields);
    }

    let tree = crate::parse_fields(&options.fields)?;

    let print_options = if options.comma_args {
        PrintOptions::comma_separated()
    } else {
        PrintOptions::default()
    };
    Ok(to_query_with(&tree, &print_options))
}
