pub mod diagnostics;
pub mod dump;
pub mod lexer;
pub mod parser;
pub mod span;

pub use diagnostics::{render_error, ParseError};
pub use parser::ast::{Node, NodeId, ParseSession};
pub use parser::{DriverState, Parsed, Parser};

/// Lex and parse a complete source string (lex → token stream → batch
/// parse), returning every top-level unit in source order. Interactive
/// callers that want one unit at a time build a [`Parser`] instead and call
/// [`Parser::parse_unit`] themselves.
pub fn parse_source(
    source: &str,
    session: &mut ParseSession,
) -> Result<Vec<NodeId>, ParseError> {
    let mut parser = Parser::from_source(source, session)?;
    parser.parse_all()
}
