pub mod ast;

use crate::diagnostics::ParseError;
use crate::lexer::{Token, TokenStream};
use crate::span::Span;
use ast::{Node, NodeId, ParseSession};
use tracing::debug;

/// What one [`Parser::parse_unit`] call produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parsed {
    /// One top-level unit: a statement, an extern prototype, or a function.
    Unit(NodeId),
    /// A bare `;` — a silent unit boundary, not a unit.
    Skip,
    /// End of input.
    Eof,
}

/// Driver state, observable between `parse_unit` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    HaveUnit,
    EndOfInput,
    Fatal,
}

/// Binding strength of a binary operator, or `None` for any other token.
/// Higher binds tighter; all operators are left-associative.
fn precedence(op: char) -> Option<i32> {
    match op {
        '+' | '-' => Some(10),
        '*' | '/' => Some(20),
        _ => None,
    }
}

/// Recursive-descent parser over a [`TokenStream`], allocating nodes into a
/// caller-owned [`ParseSession`].
///
/// Position convention, shared with every parse function below: a function
/// is entered with the first token of its construct current and returns
/// with the last token it recognized still current; the caller advances
/// past it. Primaries are the exception — they leave the first token
/// *after* themselves current, which is what the binary-operator loop
/// inspects.
pub struct Parser<'s> {
    tokens: TokenStream,
    session: &'s mut ParseSession,
    state: DriverState,
}

impl<'s> Parser<'s> {
    pub fn new(tokens: TokenStream, session: &'s mut ParseSession) -> Self {
        Self { tokens, session, state: DriverState::Idle }
    }

    /// Lex `source` and build a parser over the result.
    pub fn from_source(source: &str, session: &'s mut ParseSession) -> Result<Self, ParseError> {
        let tokens = crate::lexer::lex(source)?;
        Ok(Self::new(TokenStream::new(tokens, source.len()), session))
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// The session nodes are allocated into; lets interactive callers hand
    /// each unit to a downstream stage while the parser lives on.
    pub fn session(&self) -> &ParseSession {
        self.session
    }

    /// Parse one top-level unit: advance the stream once, then dispatch on
    /// the current token. A grammar error poisons the driver — every later
    /// call reports [`ParseError::Aborted`].
    pub fn parse_unit(&mut self) -> Result<Parsed, ParseError> {
        if self.state == DriverState::Fatal {
            return Err(ParseError::Aborted);
        }
        self.tokens.advance();
        let result = self.dispatch();
        self.state = match &result {
            Ok(Parsed::Unit(_)) => DriverState::HaveUnit,
            Ok(Parsed::Skip) => DriverState::Idle,
            Ok(Parsed::Eof) => DriverState::EndOfInput,
            Err(_) => DriverState::Fatal,
        };
        if let Ok(parsed) = &result {
            debug!(?parsed, "parsed top-level unit");
        }
        result
    }

    /// Batch protocol: drain the stream, collecting every unit in source
    /// order. Empty input and bare `;`s yield an empty sequence.
    pub fn parse_all(&mut self) -> Result<Vec<NodeId>, ParseError> {
        let mut units = Vec::new();
        loop {
            match self.parse_unit()? {
                Parsed::Unit(id) => units.push(id),
                Parsed::Skip => {}
                Parsed::Eof => return Ok(units),
            }
        }
    }

    fn dispatch(&mut self) -> Result<Parsed, ParseError> {
        let Some(curr) = self.tokens.current() else {
            return Ok(Parsed::Eof);
        };
        match curr.node {
            Token::Semicolon => Ok(Parsed::Skip),
            Token::Ident(_) | Token::Number(_) | Token::LParen | Token::If | Token::LBrace => {
                Ok(Parsed::Unit(self.parse_statement()?))
            }
            Token::Extern => Ok(Parsed::Unit(self.parse_extern()?)),
            Token::Def => Ok(Parsed::Unit(self.parse_function()?)),
            _ => Err(self.unexpected("top-level unit")),
        }
    }

    // Statement := Expression ";"
    //            | "if" "(" Expression ")" Statement ("else" Statement)?
    //            | "{" Statement* "}"
    fn parse_statement(&mut self) -> Result<NodeId, ParseError> {
        let Some(curr) = self.tokens.current() else {
            return Err(self.unexpected("statement"));
        };
        match curr.node {
            Token::Ident(_) | Token::Number(_) | Token::LParen => {
                let expr = self.parse_expression()?;
                if !self.at(&Token::Semicolon) {
                    return Err(self.expected("statement", "';'"));
                }
                // The expression itself is the statement; the ';' stays
                // current for the caller to step over.
                Ok(expr)
            }
            Token::If => {
                self.tokens.advance();
                self.expect(Token::LParen, "'('", "if condition")?;
                let cond = self.parse_expression()?;
                self.expect(Token::RParen, "')'", "if condition")?;
                let then_branch = self.parse_statement()?;
                // Dangling else: peek one token past the then-branch. If it
                // is not `else`, unread it so the caller sees it unconsumed.
                // This binds an `else` to the nearest unmatched `if`.
                self.tokens.advance();
                let else_branch = if self.at(&Token::Else) {
                    self.tokens.advance();
                    Some(self.parse_statement()?)
                } else {
                    self.tokens.push_back();
                    None
                };
                Ok(self.session.alloc(Node::If { cond, then_branch, else_branch }))
            }
            Token::LBrace => {
                let mut stmts = Vec::new();
                loop {
                    self.tokens.advance();
                    if self.at(&Token::RBrace) {
                        break;
                    }
                    stmts.push(self.parse_statement()?);
                }
                Ok(self.session.alloc(Node::Block { stmts }))
            }
            _ => Err(self.unexpected("statement")),
        }
    }

    // Expression := BinaryExpression
    fn parse_expression(&mut self) -> Result<NodeId, ParseError> {
        self.parse_binary_expr(0)
    }

    // BinaryExpression := Primary (op BinaryExpression)*
    //
    // Precedence climbing: only an operator binding strictly tighter than
    // `min_prec` is consumed here; an equal-precedence operator is left for
    // the enclosing call, which is what folds 1-2-3 into (1-2)-3. Tokens
    // that are not known binary operators end the loop without error — the
    // caller decides whether a ';' or ')' there is legal.
    fn parse_binary_expr(&mut self, min_prec: i32) -> Result<NodeId, ParseError> {
        let mut lhs = self.parse_primary()?;
        loop {
            let Some(op) = self.current_op() else { break };
            let Some(prec) = precedence(op) else { break };
            if prec <= min_prec {
                break;
            }
            self.tokens.advance();
            let rhs = self.parse_binary_expr(prec)?;
            lhs = self.session.alloc(Node::Binary { op, lhs, rhs });
        }
        Ok(lhs)
    }

    // Primary := identifier
    //          | identifier "(" (Expression ("," Expression)*)? ")"
    //          | number
    //          | "(" Expression ")"
    fn parse_primary(&mut self) -> Result<NodeId, ParseError> {
        let curr = match self.tokens.current() {
            Some(tok) => tok.node.clone(),
            None => return Err(self.unexpected("expression")),
        };
        match curr {
            Token::Ident(name) => {
                self.tokens.advance();
                if !self.at(&Token::LParen) {
                    return Ok(self.session.alloc(Node::Variable(name)));
                }
                self.tokens.advance();
                let mut args = Vec::new();
                if !self.at(&Token::RParen) {
                    loop {
                        args.push(self.parse_expression()?);
                        match self.tokens.current().map(|t| &t.node) {
                            Some(Token::Comma) => {
                                self.tokens.advance();
                            }
                            Some(Token::RParen) => break,
                            _ => return Err(self.unexpected("argument list")),
                        }
                    }
                }
                self.tokens.advance();
                Ok(self.session.alloc(Node::Call { callee: name, args }))
            }
            Token::Number(value) => {
                self.tokens.advance();
                Ok(self.session.alloc(Node::Number(value)))
            }
            Token::LParen => {
                self.tokens.advance();
                // Grouping only affects the parse; no node records the parens.
                let inner = self.parse_expression()?;
                self.expect(Token::RParen, "')'", "parenthesized expression")?;
                Ok(inner)
            }
            _ => Err(self.unexpected("expression")),
        }
    }

    // FunctionPrototype := identifier "(" (identifier ("," identifier)*)? ")"
    //
    // Leaves the token after ')' current. Duplicate parameter names are not
    // checked here; that belongs to a later stage.
    fn parse_prototype(&mut self) -> Result<NodeId, ParseError> {
        let name = match self.tokens.current().map(|t| &t.node) {
            Some(Token::Ident(name)) => name.clone(),
            _ => return Err(self.expected("function prototype", "an identifier")),
        };
        self.tokens.advance();
        self.expect(Token::LParen, "'('", "function prototype")?;
        let mut params = Vec::new();
        if !self.at(&Token::RParen) {
            loop {
                match self.tokens.current().map(|t| &t.node) {
                    Some(Token::Ident(param)) => params.push(param.clone()),
                    _ => return Err(self.expected("parameter list", "an identifier")),
                }
                self.tokens.advance();
                match self.tokens.current().map(|t| &t.node) {
                    Some(Token::Comma) => {
                        self.tokens.advance();
                    }
                    Some(Token::RParen) => break,
                    _ => return Err(self.unexpected("parameter list")),
                }
            }
        }
        self.tokens.advance();
        Ok(self.session.alloc(Node::Prototype { name, params }))
    }

    // Extern := "extern" FunctionPrototype ";"
    fn parse_extern(&mut self) -> Result<NodeId, ParseError> {
        self.tokens.advance();
        let prototype = self.parse_prototype()?;
        if !self.at(&Token::Semicolon) {
            return Err(self.expected("extern declaration", "';'"));
        }
        Ok(prototype)
    }

    // Function := "def" FunctionPrototype Statement
    fn parse_function(&mut self) -> Result<NodeId, ParseError> {
        self.tokens.advance();
        let prototype = self.parse_prototype()?;
        let body = self.parse_statement()?;
        Ok(self.session.alloc(Node::Function { prototype, body }))
    }

    /// The current token's operator character, if it is an operator.
    fn current_op(&self) -> Option<char> {
        match self.tokens.current()?.node {
            Token::Op(c) => Some(c),
            _ => None,
        }
    }

    /// True when the current token equals `tok`.
    fn at(&self, tok: &Token) -> bool {
        self.tokens.current().is_some_and(|t| &t.node == tok)
    }

    /// Require `tok` as the current token and advance past it.
    fn expect(
        &mut self,
        tok: Token,
        expected: &'static str,
        context: &'static str,
    ) -> Result<(), ParseError> {
        if !self.at(&tok) {
            return Err(self.expected(context, expected));
        }
        self.tokens.advance();
        Ok(())
    }

    fn found(&self) -> String {
        match self.tokens.current() {
            Some(tok) => tok.node.to_string(),
            None => "end of input".to_string(),
        }
    }

    fn span_here(&self) -> Span {
        match self.tokens.current() {
            Some(tok) => tok.span,
            None => self.tokens.eof_span(),
        }
    }

    fn unexpected(&self, context: &'static str) -> ParseError {
        ParseError::unexpected(context, self.found(), self.span_here())
    }

    fn expected(&self, context: &'static str, expected: &'static str) -> ParseError {
        ParseError::expected(context, expected, self.found(), self.span_here())
    }
}
