//! Recursive descent parser for tally.
//!
//! Grammar (one line):
//!
//! ```text
//! root := IDENT "=" expr
//!       | expr [ "," FORMAT ]
//! expr := NUM | STR | IDENT
//!       | "(" unop expr ")"
//!       | "(" expr ")"
//!       | "(" expr binop expr ")"
//!       | "(" expr "?" expr ":" expr ")"
//! ```
//!
//! Every compound expression is fully parenthesized, so there is no
//! precedence and no backtracking: after the first subexpression inside a
//! `(`, the next token alone decides between grouping, a binary operator
//! and a conditional. Grouping parentheses produce no node.
//!
//! On error, partially built subtrees are simply dropped on the way out.

use tally_diagnostic::{LangError, SyntaxError, TypeError};
use tally_ir::{Control, FormatSpec, Leaf, Node, Root, Span, Token, TokenKind};
use tally_lexer::TokenStream;
use tally_stack::ensure_sufficient_stack;

/// Identifiers that are boolean literals and can never be assigned.
const RESERVED: [(&str, TokenKind); 2] = [("true", TokenKind::True), ("false", TokenKind::False)];

fn reserved_kind(text: &str) -> Option<TokenKind> {
    RESERVED
        .iter()
        .find(|(word, _)| *word == text)
        .map(|(_, kind)| *kind)
}

/// Lex and parse one input line.
#[tracing::instrument(level = "trace", skip(control))]
pub fn parse_line(source: &str, control: &Control) -> Result<Root, LangError> {
    control.checkpoint()?;
    let tokens = tally_lexer::lex(source)?;
    let root = Parser::new(tokens, control).parse_root()?;
    tracing::debug!(tree = %root.sexpr(), "parsed line");
    Ok(root)
}

/// Parser state.
pub struct Parser<'c> {
    tokens: TokenStream,
    control: &'c Control,
}

impl<'c> Parser<'c> {
    pub fn new(tokens: TokenStream, control: &'c Control) -> Self {
        Parser { tokens, control }
    }

    /// Parse a whole line: an assignment or an expression with an optional
    /// trailing format specifier.
    pub fn parse_root(&mut self) -> Result<Root, LangError> {
        self.control.checkpoint()?;

        if self.tokens.check(TokenKind::Ident) && self.tokens.peek_kind() == TokenKind::Assign {
            return self.parse_assignment();
        }

        let expr = self.parse_expr()?;
        if self.tokens.is_at_end() {
            return Ok(Root::expr(expr, None));
        }

        if !self.tokens.check(TokenKind::Comma) {
            return Err(self.trailing_input());
        }
        self.tokens.advance();

        let format = self.parse_format_spec()?;
        self.expect_eol()?;
        Ok(Root::expr(expr, Some(format)))
    }

    fn parse_assignment(&mut self) -> Result<Root, LangError> {
        let target = self.tokens.advance();
        let name = target.text().to_owned();
        if reserved_kind(&name).is_some() {
            return Err(TypeError::ReservedName {
                name,
                span: target.span,
            }
            .into());
        }
        self.tokens.advance(); // `=`

        let value = self.parse_expr()?;
        self.expect_eol()?;

        let target = Node::leaf(Leaf::Ident(name), target.span);
        Ok(Root::assign(target, value))
    }

    /// `FORMAT` after the separator: an identifier spelled `d`, `x`, `X`,
    /// `b` or `B`, re-tagged as a format specifier.
    fn parse_format_spec(&mut self) -> Result<Node, LangError> {
        let current = self.tokens.current();
        if current.kind != TokenKind::Ident {
            return Err(self.unexpected());
        }
        let Some(spec) = FormatSpec::from_text(current.text()) else {
            return Err(SyntaxError::InvalidFormatSpec {
                text: current.text().to_owned(),
                span: current.span,
            }
            .into());
        };

        self.tokens.retag_current(TokenKind::FmtSpec);
        let token = self.tokens.advance();
        Ok(Node::leaf(Leaf::Fmt(spec), token.span))
    }

    /// Parse one expression.
    pub fn parse_expr(&mut self) -> Result<Node, LangError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<Node, LangError> {
        self.control.checkpoint()?;

        match self.tokens.current_kind() {
            TokenKind::Num | TokenKind::Str | TokenKind::Ident => self.parse_leaf(),
            TokenKind::LParen => self.parse_parenthesized(),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_leaf(&mut self) -> Result<Node, LangError> {
        if self.tokens.check(TokenKind::Ident) {
            if let Some(kind) = reserved_kind(self.tokens.current().text()) {
                self.tokens.retag_current(kind);
            }
        }

        let token = self.tokens.advance();
        let leaf = match token.kind {
            TokenKind::Num => Leaf::Int(int_value(&token)?),
            TokenKind::Str => Leaf::Str(token.text().as_bytes().to_vec()),
            TokenKind::True => Leaf::Bool(true),
            TokenKind::False => Leaf::Bool(false),
            TokenKind::Ident => Leaf::Ident(token.text().to_owned()),
            other => {
                tracing::error!(token = ?other, "leaf requested for non-literal token");
                return Err(LangError::internal(format!("cannot build a leaf from {other}")));
            }
        };
        Ok(Node::leaf(leaf, token.span))
    }

    /// Everything starting with `(`.
    fn parse_parenthesized(&mut self) -> Result<Node, LangError> {
        let open = self.tokens.advance();

        if let Some(op) = self.tokens.current_kind().unary_op() {
            self.tokens.advance();
            let operand = self.parse_expr()?;
            let close = self.expect_rparen()?;
            return Ok(Node::unary(op, operand, open.span.merge(close)));
        }

        let first = self.parse_expr()?;
        let next = self.tokens.current_kind();

        if next == TokenKind::RParen {
            // Pure grouping: the parentheses leave no trace in the tree.
            self.tokens.advance();
            return Ok(first);
        }

        if let Some(op) = next.binary_op() {
            self.tokens.advance();
            let second = self.parse_expr()?;
            let close = self.expect_rparen()?;
            return Ok(Node::binary(op, first, second, open.span.merge(close)));
        }

        if next == TokenKind::Question {
            self.tokens.advance();
            let then_branch = self.parse_expr()?;
            if !self.tokens.check(TokenKind::Colon) {
                let current = self.tokens.current();
                return Err(SyntaxError::ExpectedColon {
                    found: current.kind,
                    span: current.span,
                }
                .into());
            }
            self.tokens.advance();
            let else_branch = self.parse_expr()?;
            let close = self.expect_rparen()?;
            return Ok(Node::ternary(
                first,
                then_branch,
                else_branch,
                open.span.merge(close),
            ));
        }

        Err(self.expected_rparen())
    }

    fn expect_rparen(&mut self) -> Result<Span, LangError> {
        if self.tokens.check(TokenKind::RParen) {
            Ok(self.tokens.advance().span)
        } else {
            Err(self.expected_rparen())
        }
    }

    fn expect_eol(&self) -> Result<(), LangError> {
        if self.tokens.is_at_end() {
            Ok(())
        } else {
            Err(self.trailing_input())
        }
    }

    #[cold]
    fn unexpected(&self) -> LangError {
        let current = self.tokens.current();
        SyntaxError::UnexpectedToken {
            found: current.kind,
            span: current.span,
        }
        .into()
    }

    #[cold]
    fn expected_rparen(&self) -> LangError {
        let current = self.tokens.current();
        SyntaxError::ExpectedRParen {
            found: current.kind,
            span: current.span,
        }
        .into()
    }

    #[cold]
    fn trailing_input(&self) -> LangError {
        let current = self.tokens.current();
        SyntaxError::TrailingInput {
            found: current.kind,
            span: current.span,
        }
        .into()
    }
}

fn int_value(token: &Token) -> Result<i32, LangError> {
    token.int.ok_or_else(|| {
        tracing::error!(text = token.text(), "number token without a value");
        LangError::internal(format!("number token `{}` has no value", token.text()))
    })
}
