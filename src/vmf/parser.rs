//! Recursive-descent parser for the VMF block grammar.
//!
//! ```text
//! file     := block*
//! block    := literal '{' ( property | block )* '}'
//! property := string string
//! string   := '"' ( '\' any | [^"] )* '"'
//! ```
//!
//! Whitespace, including newlines, is insignificant between tokens. There are no comments.

use crate::errors::{ParseError, ParseErrorKind};
use crate::vmf::block::Block;

/// Deepest block nesting accepted. Real maps never go past four or five levels.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Cursor over one VMF source string.
///
/// All parse state lives here, so several files can be parsed at once.
pub struct Parser<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser positioned at the start of `source`.
    /// A leading UTF-8 byte order mark is skipped.
    pub fn new(source: &'a str) -> Self {
        Self {
            source: source.strip_prefix('\u{feff}').unwrap_or(source),
            pos: 0,
            line: 1,
            depth: 0,
        }
    }

    /// Current line number (1-indexed).
    pub const fn line(&self) -> usize {
        self.line
    }

    pub const fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.line)
    }

    /// Advance past whitespace, counting newlines. Returns the number of characters skipped.
    pub fn skip_whitespace(&mut self) -> usize {
        let mut skipped = 0;
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
            skipped += 1;
        }
        skipped
    }

    /// Read a run of characters up to whitespace, `{` or end of input.
    ///
    /// Returns an empty string when positioned on one of those delimiters.
    pub fn read_literal(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '{' {
                break;
            }
            self.bump();
        }
        self.source[start..self.pos].to_string()
    }

    /// Read a `"`-delimited string. A backslash makes the following character literal.
    pub fn read_quoted_string(&mut self) -> Result<String, ParseError> {
        if self.peek() != Some('"') {
            return Err(self.error(ParseErrorKind::ExpectedQuote));
        }
        self.bump();

        let mut string = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error(ParseErrorKind::UnterminatedString(string))),
                Some('\\') => match self.bump() {
                    Some(escaped) => string.push(escaped),
                    None => {
                        return Err(self.error(ParseErrorKind::UnterminatedString(string)));
                    },
                },
                Some('"') => return Ok(string),
                Some(c) => string.push(c),
            }
        }
    }

    /// Read a `"key" "value"` pair.
    pub fn read_property(&mut self) -> Result<(String, String), ParseError> {
        let key = self.read_quoted_string()?;
        self.skip_whitespace();

        if self.peek() != Some('"') {
            return Err(self.error(ParseErrorKind::MissingValue(key)));
        }
        let value = self.read_quoted_string()?;

        Ok((key, value))
    }

    /// Read one block and everything nested inside it.
    ///
    /// Returns `Ok(None)` when no block name is available, which at the top level
    /// means the input is exhausted.
    pub fn read_block(&mut self) -> Result<Option<Block>, ParseError> {
        self.skip_whitespace();
        let name = self.read_literal();
        if name.is_empty() {
            return Ok(None);
        }

        self.skip_whitespace();
        if self.peek() != Some('{') {
            return Err(self.error(ParseErrorKind::ExpectedOpenBrace(name)));
        }
        // an unterminated block is reported where it was opened, not at EOF
        let open_line = self.line;
        self.bump();

        let mut block = Block::new(name);
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('}') => {
                    self.bump();
                    return Ok(Some(block));
                },
                Some('"') => {
                    let (key, value) = self.read_property()?;
                    block.properties.insert(key, value);
                },
                Some(_) => {
                    if self.depth >= MAX_NESTING_DEPTH {
                        return Err(self.error(ParseErrorKind::NestingTooDeep(block.name)));
                    }
                    self.depth += 1;
                    let child = self.read_block();
                    self.depth -= 1;
                    match child? {
                        Some(child) => block.children.push(child),
                        None => return Err(self.error(ParseErrorKind::MissingBlockName)),
                    }
                },
                None => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnterminatedBlock(block.name),
                        open_line,
                    ));
                },
            }
        }
    }
}

/// Parse a whole VMF document into its top-level blocks, in file order.
///
/// The first syntax fault aborts the parse; nothing parsed before it is returned.
pub fn parse_blocks(source: &str) -> Result<Vec<Block>, ParseError> {
    let mut parser = Parser::new(source);
    let mut blocks = Vec::new();

    while let Some(block) = parser.read_block()? {
        blocks.push(block);
    }

    // read_block only stops early on a '{' with no name in front of it
    if !parser.at_end() {
        return Err(parser.error(ParseErrorKind::MissingBlockName));
    }

    Ok(blocks)
}
