use super::token::Token;
use crate::span::{Span, Spanned};
use tracing::trace;

/// Cursor over a lexed token vector.
///
/// `advance()` moves to the next token, `current()` re-reads it, and both
/// return `None` once the input is exhausted. `push_back()` unreads exactly
/// one token: the single slot of lookahead the dangling-else rule needs.
/// Calling it twice without an intervening `advance()`, or reading
/// `current()` before the first `advance()`, is a contract violation and
/// panics.
pub struct TokenStream {
    tokens: Vec<Spanned<Token>>,
    cursor: usize,
    started: bool,
    pushed_back: bool,
    eof: Span,
}

impl TokenStream {
    pub fn new(tokens: Vec<Spanned<Token>>, source_len: usize) -> Self {
        Self {
            tokens,
            cursor: 0,
            started: false,
            pushed_back: false,
            eof: Span::new(source_len, source_len),
        }
    }

    /// The token most recently delivered by `advance()`.
    pub fn current(&self) -> Option<&Spanned<Token>> {
        assert!(self.started, "current() before the first advance()");
        self.tokens.get(self.cursor)
    }

    pub fn advance(&mut self) -> Option<&Spanned<Token>> {
        if !self.started {
            self.started = true;
        } else if self.cursor < self.tokens.len() {
            self.cursor += 1;
        }
        self.pushed_back = false;
        let tok = self.tokens.get(self.cursor);
        if let Some(tok) = tok {
            trace!(token = %tok.node, "advance");
        }
        tok
    }

    /// Unread the current token: `current()` returns its predecessor again
    /// and the next `advance()` re-delivers the unread token.
    pub fn push_back(&mut self) {
        assert!(
            !self.pushed_back,
            "push_back() twice without an intervening advance()"
        );
        assert!(
            self.started && self.cursor > 0,
            "push_back() with no token to unread"
        );
        self.cursor -= 1;
        self.pushed_back = true;
        trace!("push_back");
    }

    /// Span one past the last byte of the source, for end-of-input reports.
    pub fn eof_span(&self) -> Span {
        self.eof
    }
}
