//! Token cursor for the parser.
//!
//! Provides the current token, one token of lookahead, consumption and
//! in-place re-tagging. Never moves backwards.

use tally_ir::{Span, Token, TokenKind};

/// Tokens of one line plus a cursor position.
///
/// Invariant: the last token is `Eol` and the cursor never moves past it,
/// so `current()` and `peek()` are always valid.
#[derive(Clone, Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    /// Wrap a token list, appending `Eol` if it is missing.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eol) {
            let end = tokens.last().map_or(0, |t| t.span.end);
            tokens.push(Token::new(TokenKind::Eol, Span::new(end, end)));
        }
        TokenStream { tokens, pos: 0 }
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// The token after `current()`; `Eol` once at the end.
    #[inline]
    pub fn peek(&self) -> &Token {
        let idx = (self.pos + 1).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eol)
    }

    /// Consume the current token and return it. At `Eol` the cursor stays.
    pub fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Change the tag of the current token before it is consumed.
    pub fn retag_current(&mut self, kind: TokenKind) {
        self.tokens[self.pos].kind = kind;
    }
}
