//! Parser for quoted option literals used by enum/set column specifications.
//!
//! Decodes strings of the shape `'opt1','opt2''embedded',...` — single
//! quoted, comma separated, with `''` as an escaped literal quote — into the
//! ordered list of option values. The grammar:
//!
//! ```text
//! OPTIONS      := OPTION (COMMA OPTION)*      (empty input → empty list)
//! OPTION       := QUOTE OPTION_VALUE QUOTE
//! OPTION_VALUE := (PARTIAL | QUOTE QUOTE | COMMA)*
//! ```
//!
//! A `QUOTE QUOTE` pair inside an option value contributes one literal quote
//! character; a bare comma inside an option value is preserved literally.

/// Lexical classes of the option grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Quote,
    Comma,
    /// Maximal run of characters that are neither quote nor comma.
    Partial,
}

#[derive(Debug, Clone, PartialEq)]
struct Token {
    kind: TokenKind,
    text: String,
    /// 1-based character offset of the token's first character.
    offset: usize,
}

/// Error type for option literal parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OptionsError {
    /// A token that the grammar cannot accept at its position.
    #[error("unexpected {kind:?} token {text:?} at character {offset}")]
    UnexpectedToken {
        kind: TokenKind,
        text: String,
        offset: usize,
    },

    /// Input ended inside an option (e.g. an unterminated quote).
    #[error("unexpected end of option list")]
    UnexpectedEnd,

    /// A column type string that is not a `keyword(...)` specification.
    #[error("malformed {keyword} specification: {spec:?}")]
    MalformedSpec { keyword: &'static str, spec: String },
}

/// Parse an option literal into its option values.
///
/// ```
/// use lorem_core::options::parse;
///
/// assert_eq!(parse("'a','b'").unwrap(), vec!["a", "b"]);
/// assert_eq!(parse("'a''b'").unwrap(), vec!["a'b"]);
/// assert!(parse("'a','b").is_err());
/// ```
pub fn parse(input: &str) -> Result<Vec<String>, OptionsError> {
    Parser::new(tokenize(input)).options()
}

/// Extract the option list from an `enum('a','b',...)` column type string.
pub fn parse_enum_spec(spec: &str) -> Result<Vec<String>, OptionsError> {
    parse(unwrap_spec(spec, "enum")?)
}

/// Extract the option list from a `set('a','b',...)` column type string.
pub fn parse_set_spec(spec: &str) -> Result<Vec<String>, OptionsError> {
    parse(unwrap_spec(spec, "set")?)
}

fn unwrap_spec<'a>(spec: &'a str, keyword: &'static str) -> Result<&'a str, OptionsError> {
    spec.strip_prefix(keyword)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| OptionsError::MalformedSpec {
            keyword,
            spec: spec.to_string(),
        })
}

fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut partial = String::new();
    let mut partial_offset = 0;

    for (position, c) in input.chars().enumerate() {
        let offset = position + 1;
        let kind = match c {
            '\'' => Some(TokenKind::Quote),
            ',' => Some(TokenKind::Comma),
            _ => None,
        };

        match kind {
            Some(kind) => {
                if !partial.is_empty() {
                    tokens.push(Token {
                        kind: TokenKind::Partial,
                        text: std::mem::take(&mut partial),
                        offset: partial_offset,
                    });
                }
                tokens.push(Token {
                    kind,
                    text: c.to_string(),
                    offset,
                });
            }
            None => {
                if partial.is_empty() {
                    partial_offset = offset;
                }
                partial.push(c);
            }
        }
    }

    if !partial.is_empty() {
        tokens.push(Token {
            kind: TokenKind::Partial,
            text: partial,
            offset: partial_offset,
        });
    }

    tokens
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    fn peek_kind_at(&self, ahead: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + ahead).map(|t| t.kind)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, OptionsError> {
        match self.advance() {
            None => Err(OptionsError::UnexpectedEnd),
            Some(token) if token.kind == kind => Ok(token),
            Some(token) => Err(OptionsError::UnexpectedToken {
                kind: token.kind,
                text: token.text,
                offset: token.offset,
            }),
        }
    }

    /// `OPTIONS := OPTION (COMMA OPTION)*`, empty input allowed.
    fn options(mut self) -> Result<Vec<String>, OptionsError> {
        let mut options = Vec::new();
        if self.peek_kind().is_none() {
            return Ok(options);
        }

        options.push(self.option()?);
        while self.peek_kind().is_some() {
            self.expect(TokenKind::Comma)?;
            options.push(self.option()?);
        }

        Ok(options)
    }

    /// `OPTION := QUOTE OPTION_VALUE QUOTE`
    fn option(&mut self) -> Result<String, OptionsError> {
        self.expect(TokenKind::Quote)?;

        let mut value = String::new();
        loop {
            match self.peek_kind() {
                Some(TokenKind::Partial) => {
                    if let Some(token) = self.advance() {
                        value.push_str(&token.text);
                    }
                }
                Some(TokenKind::Comma) => {
                    self.advance();
                    value.push(',');
                }
                Some(TokenKind::Quote) => {
                    // A quote pair is an escaped literal quote; a lone quote
                    // terminates the option value.
                    if self.peek_kind_at(1) == Some(TokenKind::Quote) {
                        self.advance();
                        self.advance();
                        value.push('\'');
                    } else {
                        break;
                    }
                }
                None => break,
            }
        }

        self.expect(TokenKind::Quote)?;
        Ok(value)
    }
}
