//! Lexer for one line of tally input, using logos.
//!
//! The whole line is lexed up front into a [`TokenStream`], which the
//! parser walks with a current token and one token of lookahead. The
//! stream always ends in [`TokenKind::Eol`].
//!
//! `true` and `false` are lexed as plain identifiers; the parser decides
//! whether they are literals or a (rejected) assignment target.

mod stream;

pub use stream::TokenStream;

use logos::Logos;
use tally_diagnostic::SyntaxError;
use tally_ir::{Span, Token, TokenKind};

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    // === Literals ===
    #[regex("[0-9]+")]
    Num,

    #[regex(r#""[^"]*""#)]
    Str,

    // Opening quote with no closing quote before the end of the line.
    #[regex(r#""[^"]*"#)]
    UnterminatedStr,

    #[regex("[A-Za-z][A-Za-z0-9_]*")]
    Ident,

    // === Grouping ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // === Operators ===
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("~")]
    Tilde,
    #[token("_")]
    Underscore,
    #[token("!")]
    Bang,

    // === Punctuation ===
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("=")]
    Assign,
    #[token(",")]
    Comma,
}

/// Lex one input line.
///
/// Fails on the first character that starts no token, on an unterminated
/// string, or on an integer literal that does not fit in an `i32`.
#[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
pub fn lex(source: &str) -> Result<TokenStream, SyntaxError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let slice = lexer.slice();

        let Ok(raw) = result else {
            let ch = slice.chars().next().unwrap_or('\u{FFFD}');
            return Err(SyntaxError::InvalidCharacter { ch, span });
        };

        tokens.push(convert(raw, slice, span)?);
    }

    let end = Span::from_range(source.len()..source.len());
    tokens.push(Token::new(TokenKind::Eol, end));
    tracing::trace!(count = tokens.len(), "lexed line");

    Ok(TokenStream::new(tokens))
}

fn convert(raw: RawToken, slice: &str, span: Span) -> Result<Token, SyntaxError> {
    let kind = match raw {
        RawToken::Num => {
            let value = slice
                .parse::<i32>()
                .map_err(|_| SyntaxError::IntegerOutOfRange {
                    text: slice.to_owned(),
                    span,
                })?;
            return Ok(Token::number(value, slice, span));
        }
        RawToken::Str => {
            let contents = &slice[1..slice.len() - 1];
            return Ok(Token::with_text(TokenKind::Str, contents, span));
        }
        RawToken::UnterminatedStr => return Err(SyntaxError::UnterminatedString { span }),
        RawToken::Ident => return Ok(Token::with_text(TokenKind::Ident, slice, span)),

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Tilde => TokenKind::Tilde,
        RawToken::Underscore => TokenKind::Underscore,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Question => TokenKind::Question,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Comma => TokenKind::Comma,
    };
    Ok(Token::new(kind, span))
}
