//! Lexer tokens.
//!
//! A token is a [`TokenKind`] tag plus the text it was lexed from, when the
//! text matters (numbers, strings, identifiers, format specifiers). The
//! parser may re-tag an identifier before consuming it: `true`/`false`
//! become boolean literals and a one-letter identifier after `,` becomes a
//! format specifier.

use std::fmt;

use crate::{BinaryOp, Span, UnaryOp};

/// Token tag.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals and names
    Num,
    Str,
    Ident,
    FmtSpec,
    True,
    False,

    // Grouping
    LParen,
    RParen,

    // Binary operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Amp,
    Pipe,
    Lt,
    Gt,
    Tilde,

    // Unary operators
    Underscore,
    Bang,

    // Punctuation
    Question,
    Colon,
    Assign,
    Comma,

    /// End of the input line. Always the last token of a stream.
    Eol,
}

impl TokenKind {
    /// Binary operator denoted by this token, if any.
    pub const fn binary_op(self) -> Option<BinaryOp> {
        match self {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Mod),
            TokenKind::Amp => Some(BinaryOp::And),
            TokenKind::Pipe => Some(BinaryOp::Or),
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::Tilde => Some(BinaryOp::Eq),
            _ => None,
        }
    }

    /// Unary operator denoted by this token, if any.
    pub const fn unary_op(self) -> Option<UnaryOp> {
        match self {
            TokenKind::Underscore => Some(UnaryOp::Neg),
            TokenKind::Bang => Some(UnaryOp::Not),
            _ => None,
        }
    }

    pub const fn is_binop(self) -> bool {
        self.binary_op().is_some()
    }

    pub const fn is_unop(self) -> bool {
        self.unary_op().is_some()
    }

    /// Human-readable description used in syntax errors.
    pub const fn describe(self) -> &'static str {
        match self {
            TokenKind::Num => "number",
            TokenKind::Str => "string",
            TokenKind::Ident => "identifier",
            TokenKind::FmtSpec => "format specifier",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Percent => "`%`",
            TokenKind::Amp => "`&`",
            TokenKind::Pipe => "`|`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::Tilde => "`~`",
            TokenKind::Underscore => "`_`",
            TokenKind::Bang => "`!`",
            TokenKind::Question => "`?`",
            TokenKind::Colon => "`:`",
            TokenKind::Assign => "`=`",
            TokenKind::Comma => "`,`",
            TokenKind::Eol => "end of line",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A lexed token.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text for numbers, identifiers and format specifiers; the
    /// contents between the quotes for strings.
    pub text: Option<String>,
    /// Value of a `Num` token, range-checked by the lexer.
    pub int: Option<i32>,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            text: None,
            int: None,
            span,
        }
    }

    pub fn with_text(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: Some(text.into()),
            int: None,
            span,
        }
    }

    pub fn number(value: i32, text: impl Into<String>, span: Span) -> Self {
        Token {
            int: Some(value),
            ..Token::with_text(TokenKind::Num, text, span)
        }
    }

    /// Token text, or the empty string for punctuation.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}
