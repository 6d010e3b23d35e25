pub mod stream;
pub mod token;

pub use stream::TokenStream;
pub use token::Token;

use crate::diagnostics::ParseError;
use crate::span::{Span, Spanned};
use logos::Logos;

pub fn lex(source: &str) -> Result<Vec<Spanned<Token>>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(Token::Comment) => continue,
            Ok(tok) => tokens.push(Spanned::new(tok, Span::new(span.start, span.end))),
            Err(()) => {
                return Err(ParseError::Lex {
                    found: source[span.start..span.end].to_string(),
                    span: Span::new(span.start, span.end),
                });
            }
        }
    }

    Ok(tokens)
}
