use crate::tokenizer::char_utils::*;
use crate::tokenizer::source::LookAhead;
use alloc::collections::VecDeque;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use log::warn;
use yev_common::TokenType::{
    BlockEnd, BlockEntry, BlockMappingStart, BlockSequenceStart, DocumentEnd, DocumentStart,
    FlowEntry, FlowMappingEnd, FlowMappingStart, FlowSequenceEnd, FlowSequenceStart, Key,
    StreamEnd, StreamStart, Value,
};
use yev_common::{
    ChompIndicator, Marker, ScalarStyle, ScanResult, Span, TokenType, YamlError, YamlResult,
};

/// Simple keys may not be longer than this many characters.
const MAX_SIMPLE_KEY_LEN: usize = 1024;

#[derive(Clone, PartialEq, Debug)]
pub struct Token {
    pub span: Span,
    pub token_type: TokenType,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct SimpleKey {
    possible: bool,
    required: bool,
    token_number: usize,
    mark: Marker,
}

impl SimpleKey {
    fn new(mark: Marker) -> SimpleKey {
        SimpleKey {
            possible: false,
            required: false,
            token_number: 0,
            mark,
        }
    }
}

/// Turns characters into YAML tokens.
///
/// The scanner keeps a queue of tokens because a `:` found after a simple key
/// retroactively inserts `KEY` (and possibly `BLOCK-MAPPING-START`) in front of
/// the tokens of that key. Tokens are handed out only when no pending simple key
/// could still change them.
pub struct Scanner<S> {
    src: S,
    pub(crate) mark: Marker,
    tokens: VecDeque<Token>,
    pub(crate) error: Option<YamlError>,

    simple_keys: Vec<SimpleKey>,
    indents: Vec<isize>,
    tokens_available: bool,
    simple_key_allowed: bool,
    pub(crate) stream_start_produced: bool,
    pub(crate) stream_end_produced: bool,
    leading_whitespace: bool,

    adjacent_value_allowed_at: usize,
    tokens_parsed: usize,
    flow_level: u32,
    indent: isize,
}

impl<S: LookAhead> Scanner<S> {
    pub fn new(src: S) -> Scanner<S> {
        Scanner {
            src,
            mark: Marker {
                pos: 0,
                line: 1,
                col: 0,
            },
            tokens: VecDeque::new(),
            error: None,
            simple_keys: Vec::new(),
            indents: Vec::new(),

            tokens_available: false,
            simple_key_allowed: true,
            stream_start_produced: false,
            stream_end_produced: false,
            leading_whitespace: true,

            adjacent_value_allowed_at: usize::MAX,
            tokens_parsed: 0,
            flow_level: 0,
            indent: -1,
        }
    }

    #[must_use]
    pub fn mark(&self) -> Marker {
        self.mark
    }

    #[must_use]
    pub fn get_error(&self) -> Option<YamlError> {
        self.error.clone()
    }

    fn get_span(&self, start: Marker) -> Span {
        Span {
            start,
            end: self.mark,
        }
    }

    #[inline]
    fn col(&self) -> isize {
        self.mark.col as isize
    }

    /// Next token, or `None` once `STREAM-END` was handed out.
    ///
    /// # Errors
    /// Returns the first lexical error found in the input.
    pub fn next_token(&mut self) -> YamlResult<Option<Token>> {
        if self.stream_end_produced {
            return Ok(None);
        }

        if !self.tokens_available {
            self.fetch_more_tokens()?;
        }

        let Some(tok) = self.tokens.pop_front() else {
            return Err(YamlError::new_str(
                self.mark,
                "did not find expected <stream end>",
            ));
        };
        self.tokens_available = false;
        self.tokens_parsed += 1;

        if tok.token_type == StreamEnd {
            self.stream_end_produced = true;
        }
        Ok(Some(tok))
    }

    fn fetch_more_tokens(&mut self) -> ScanResult {
        let mut need_more;
        loop {
            if self.tokens.is_empty() {
                need_more = true;
            } else {
                need_more = false;
                self.stale_simple_keys()?;
                for sk in &self.simple_keys {
                    if sk.possible && sk.token_number == self.tokens_parsed {
                        need_more = true;
                        break;
                    }
                }
            }

            if !need_more {
                break;
            }

            self.fetch_next_token()?;
        }
        self.tokens_available = true;

        Ok(())
    }

    fn fetch_next_token(&mut self) -> ScanResult {
        if !self.stream_start_produced {
            self.fetch_stream_start();
            return Ok(());
        }

        self.skip_to_next_token();
        self.stale_simple_keys()?;

        let mark = self.mark;
        self.unroll_indent(mark.col as isize);

        self.src.lookahead(4);
        if self.src.end_of_input() {
            return self.fetch_stream_end();
        }
        if self.src.next_is('\0') {
            return Err(YamlError::new_str(
                self.mark,
                "control characters are not allowed",
            ));
        }

        if self.mark.col == 0 {
            if self.src.next_is('%') {
                return self.fetch_directive();
            } else if self.src.next_is_document_start() {
                return self.fetch_document_indicator(DocumentStart);
            } else if self.src.next_is_document_end() {
                self.fetch_document_indicator(DocumentEnd)?;
                return self.finish_document_end();
            }
        }

        self.fetch_main_loop()
    }

    fn fetch_main_loop(&mut self) -> ScanResult {
        let c = self.src.peek();
        let nc = self.src.peek_nth(1);
        match c {
            '[' => self.fetch_flow_collection_start(FlowSequenceStart),
            '{' => self.fetch_flow_collection_start(FlowMappingStart),
            ']' => self.fetch_flow_collection_end(FlowSequenceEnd),
            '}' => self.fetch_flow_collection_end(FlowMappingEnd),
            ',' => self.fetch_flow_entry(),
            '-' if is_blank_or_breakz(nc) => self.fetch_block_entry(),
            '?' if is_blank_or_breakz(nc) => self.fetch_key(),
            ':' if is_blank_or_breakz(nc) => self.fetch_value(),
            ':' if self.flow_level > 0
                && (is_flow(nc) || self.mark.pos == self.adjacent_value_allowed_at) =>
            {
                self.fetch_value()
            }
            '*' => self.fetch_anchor(true),
            '&' => self.fetch_anchor(false),
            '!' => self.fetch_tag(),
            '|' if self.flow_level == 0 => self.fetch_block_scalar(true),
            '>' if self.flow_level == 0 => self.fetch_block_scalar(false),
            '\'' => self.fetch_flow_scalar(true),
            '"' => self.fetch_flow_scalar(false),
            '\t' => Err(YamlError::new_str(
                self.mark,
                "found a tab character where an indentation space is expected",
            )),
            '%' | '@' | '`' | '|' | '>' | '#' => Err(YamlError::new_str(
                self.mark,
                &format!("found character `{c}` that cannot start any token"),
            )),
            _ => self.fetch_plain_scalar(),
        }
    }

    fn fetch_stream_start(&mut self) {
        let mark = self.mark;
        self.indent = -1;
        self.stream_start_produced = true;
        self.simple_key_allowed = true;
        self.tokens.push_back(Token {
            span: Span::empty(mark),
            token_type: StreamStart,
        });
        self.simple_keys.push(SimpleKey::new(Marker::default()));
    }

    fn fetch_stream_end(&mut self) -> ScanResult {
        // force new line
        if self.mark.col != 0 {
            self.mark.col = 0;
            self.mark.line += 1;
        }

        // No more context will come. A required simple key without its ':' is an error.
        for sk in &mut self.simple_keys {
            if sk.required && sk.possible {
                return Err(YamlError::new_str(
                    self.mark,
                    "while scanning a simple key, could not find expected ':'",
                ));
            }
            sk.possible = false;
        }

        self.unroll_indent(-1);
        self.simple_key_allowed = false;
        self.tokens.push_back(Token {
            span: Span::empty(self.mark),
            token_type: StreamEnd,
        });
        Ok(())
    }

    fn fetch_document_indicator(&mut self, token_type: TokenType) -> ScanResult {
        self.unroll_indent(-1);
        self.remove_simple_key()?;
        self.simple_key_allowed = false;

        let mark = self.mark;
        self.skip_n_non_blank(3);

        let span = self.get_span(mark);
        self.tokens.push_back(Token { span, token_type });
        Ok(())
    }

    /// Only blanks and a comment may follow `...` on its line.
    fn finish_document_end(&mut self) -> ScanResult {
        self.skip_blanks();
        if self.src.next_is('#') {
            self.skip_comment();
        }
        if !self.src.next_is_breakz() {
            return Err(YamlError::new_str(
                self.mark,
                "invalid content after document end marker",
            ));
        }
        Ok(())
    }

    fn fetch_directive(&mut self) -> ScanResult {
        self.unroll_indent(-1);
        self.remove_simple_key()?;
        self.simple_key_allowed = false;

        if let Some(tok) = self.scan_directive()? {
            self.tokens.push_back(tok);
        }
        Ok(())
    }

    fn scan_directive(&mut self) -> YamlResult<Option<Token>> {
        let start_mark = self.mark;
        self.skip_non_blank();

        let name = self.scan_directive_name()?;
        let token_type = match name.as_str() {
            "YAML" => Some(self.scan_version_directive_value(&start_mark)?),
            "TAG" => Some(self.scan_tag_directive_value(&start_mark)?),
            _ => {
                warn!("ignoring unknown directive %{name} at {start_mark}");
                self.src.lookahead(1);
                while !self.src.next_is_breakz() {
                    self.skip_non_blank();
                    self.src.lookahead(1);
                }
                None
            }
        };
        let span = self.get_span(start_mark);

        self.skip_blanks();
        if self.src.next_is('#') {
            self.skip_comment();
        }
        if !self.src.next_is_breakz() {
            return Err(YamlError::new_str(
                start_mark,
                "while scanning a directive, did not find expected comment or line break",
            ));
        }
        if self.src.next_is_break() {
            self.src.lookahead(2);
            self.skip_linebreak();
        }

        Ok(token_type.map(|token_type| Token { span, token_type }))
    }

    fn scan_directive_name(&mut self) -> YamlResult<String> {
        let start_mark = self.mark;
        let mut name = String::new();
        self.src.lookahead(1);
        while is_word_char(self.src.peek()) {
            name.push(self.src.peek());
            self.skip_non_blank();
            self.src.lookahead(1);
        }

        if name.is_empty() {
            return Err(YamlError::new_str(
                start_mark,
                "while scanning a directive, could not find expected directive name",
            ));
        }
        if !self.src.next_is_blank_or_breakz() {
            return Err(YamlError::new_str(
                start_mark,
                "while scanning a directive, found unexpected non-alphabetical character",
            ));
        }
        Ok(name)
    }

    fn scan_version_directive_value(&mut self, mark: &Marker) -> YamlResult<TokenType> {
        self.skip_blanks();

        let major = self.scan_version_directive_number(mark)?;
        if !self.src.next_is('.') {
            return Err(YamlError::new_str(
                *mark,
                "while scanning a %YAML directive, did not find expected digit or '.' character",
            ));
        }
        self.skip_non_blank();
        let minor = self.scan_version_directive_number(mark)?;

        Ok(TokenType::VersionDirective { major, minor })
    }

    fn scan_version_directive_number(&mut self, mark: &Marker) -> YamlResult<u32> {
        let mut val = 0u32;
        let mut length = 0usize;
        self.src.lookahead(1);
        while let Some(digit) = self.src.peek().to_digit(10) {
            if length == 9 {
                return Err(YamlError::new_str(
                    *mark,
                    "while scanning a %YAML directive, found extremely long version number",
                ));
            }
            length += 1;
            val = val * 10 + digit;
            self.skip_non_blank();
            self.src.lookahead(1);
        }

        if length == 0 {
            return Err(YamlError::new_str(
                *mark,
                "while scanning a %YAML directive, did not find expected version number",
            ));
        }
        Ok(val)
    }

    fn scan_tag_directive_value(&mut self, mark: &Marker) -> YamlResult<TokenType> {
        self.skip_blanks();
        let handle = self.scan_tag_handle(true, mark)?;

        self.src.lookahead(1);
        if !self.src.next_is_blank() {
            return Err(YamlError::new_str(
                *mark,
                "while scanning a %TAG directive, did not find expected whitespace",
            ));
        }
        self.skip_blanks();

        let prefix = self.scan_tag_uri(true, "", mark)?;
        if prefix.is_empty() {
            return Err(YamlError::new_str(
                *mark,
                "while scanning a %TAG directive, did not find expected tag prefix",
            ));
        }

        self.src.lookahead(1);
        if !self.src.next_is_blank_or_breakz() {
            return Err(YamlError::new_str(
                *mark,
                "while scanning a %TAG directive, did not find expected whitespace or line break",
            ));
        }
        Ok(TokenType::TagDirective { handle, prefix })
    }

    fn fetch_anchor(&mut self, alias: bool) -> ScanResult {
        self.save_simple_key()?;
        self.simple_key_allowed = false;

        let tok = self.scan_anchor(alias)?;
        self.tokens.push_back(tok);
        Ok(())
    }

    fn scan_anchor(&mut self, alias: bool) -> YamlResult<Token> {
        let start_mark = self.mark;
        let mut string = String::new();

        self.skip_non_blank();
        self.src.lookahead(1);
        while is_word_char(self.src.peek()) {
            string.push(self.src.peek());
            self.skip_non_blank();
            self.src.lookahead(1);
        }

        let ends_properly = self.src.next_is_blank_or_breakz() || "?:,]}%@`".contains(self.src.peek());
        if string.is_empty() || !ends_properly {
            let what = if alias { "an alias" } else { "an anchor" };
            return Err(YamlError::new_str(
                start_mark,
                &format!("while scanning {what}, did not find expected alphabetic or numeric character"),
            ));
        }

        let token_type = if alias {
            TokenType::Alias(string)
        } else {
            TokenType::Anchor(string)
        };
        Ok(Token {
            span: self.get_span(start_mark),
            token_type,
        })
    }

    fn fetch_tag(&mut self) -> ScanResult {
        self.save_simple_key()?;
        self.simple_key_allowed = false;

        let tok = self.scan_tag()?;
        self.tokens.push_back(tok);
        Ok(())
    }

    fn scan_tag(&mut self) -> YamlResult<Token> {
        let start_mark = self.mark;
        let handle;
        let suffix;

        self.src.lookahead(2);
        if self.src.peek_nth(1) == '<' {
            // verbatim `!<uri>`
            self.skip_n_non_blank(2);
            suffix = self.scan_tag_uri(true, "", &start_mark)?;
            if suffix.is_empty() {
                return Err(YamlError::new_str(
                    start_mark,
                    "while scanning a tag, did not find expected tag URI",
                ));
            }
            self.src.lookahead(1);
            if !self.src.next_is('>') {
                return Err(YamlError::new_str(
                    start_mark,
                    "while scanning a tag, did not find the expected '>'",
                ));
            }
            self.skip_non_blank();
            handle = String::new();
        } else {
            let first = self.scan_tag_handle(false, &start_mark)?;
            if first.len() > 1 && first.ends_with('!') {
                // `!handle!suffix` or `!!suffix`
                suffix = self.scan_tag_uri(false, "", &start_mark)?;
                if suffix.is_empty() {
                    return Err(YamlError::new_str(
                        start_mark,
                        "while scanning a tag, did not find expected tag URI",
                    ));
                }
                handle = first;
            } else {
                // `!suffix`, where the word characters already read belong to the suffix
                let tail = self.scan_tag_uri(false, &first[1..], &start_mark)?;
                if tail.is_empty() {
                    // the non-specific tag `!`
                    handle = String::new();
                    suffix = String::from("!");
                } else {
                    handle = String::from("!");
                    suffix = tail;
                }
            }
        }

        self.src.lookahead(1);
        if self.src.next_is_blank_or_breakz() || (self.flow_level > 0 && self.src.next_is_flow()) {
            Ok(Token {
                span: self.get_span(start_mark),
                token_type: TokenType::Tag { handle, suffix },
            })
        } else {
            Err(YamlError::new_str(
                start_mark,
                "while scanning a tag, did not find expected whitespace or line break",
            ))
        }
    }

    fn scan_tag_handle(&mut self, directive: bool, mark: &Marker) -> YamlResult<String> {
        let mut string = String::new();
        self.src.lookahead(1);
        if !self.src.next_is('!') {
            let what = if directive {
                "while scanning a %TAG directive"
            } else {
                "while scanning a tag"
            };
            return Err(YamlError::new_str(
                *mark,
                &format!("{what}, did not find expected '!'"),
            ));
        }

        string.push('!');
        self.skip_non_blank();
        self.src.lookahead(1);
        while is_word_char(self.src.peek()) {
            string.push(self.src.peek());
            self.skip_non_blank();
            self.src.lookahead(1);
        }

        if self.src.next_is('!') {
            string.push('!');
            self.skip_non_blank();
        } else if directive && string != "!" {
            // A %TAG handle is either `!`, `!!` or `!name!`.
            return Err(YamlError::new_str(
                *mark,
                "while parsing a %TAG directive, did not find expected '!'",
            ));
        }
        Ok(string)
    }

    /// Reads URI characters after `head`, decoding `%XX` escapes. Directive prefixes and
    /// verbatim tags accept every URI character, shorthand suffixes stop at flow indicators.
    fn scan_tag_uri(&mut self, uri_chars: bool, head: &str, mark: &Marker) -> YamlResult<String> {
        let mut string = String::from(head);
        self.src.lookahead(1);
        loop {
            let c = self.src.peek();
            let allowed = if uri_chars {
                is_uri_char(c)
            } else {
                is_tag_char(c)
            };
            if !allowed {
                break;
            }
            if c == '%' {
                self.scan_uri_escapes(&mut string, mark)?;
            } else {
                string.push(c);
                self.skip_non_blank();
            }
            self.src.lookahead(1);
        }
        Ok(string)
    }

    fn scan_uri_escapes(&mut self, string: &mut String, mark: &Marker) -> ScanResult {
        let mut escaped = String::new();
        loop {
            self.src.lookahead(3);
            let (hi, lo) = (self.src.peek_nth(1), self.src.peek_nth(2));
            if !self.src.next_is('%') || as_hex(hi).is_none() || as_hex(lo).is_none() {
                return Err(YamlError::new_str(
                    *mark,
                    "while parsing a tag, did not find URI escaped octet",
                ));
            }
            escaped.push('%');
            escaped.push(hi);
            escaped.push(lo);
            self.skip_n_non_blank(3);

            self.src.lookahead(1);
            if !self.src.next_is('%') {
                break;
            }
        }

        let decoded = urlencoding::decode(&escaped).map_err(|_| {
            YamlError::new_str(*mark, "while parsing a tag, found an invalid UTF-8 sequence")
        })?;
        string.push_str(&decoded);
        Ok(())
    }

    fn fetch_flow_collection_start(&mut self, token_type: TokenType) -> ScanResult {
        self.save_simple_key()?;
        self.increase_flow_level()?;
        self.simple_key_allowed = true;

        let start_mark = self.mark;
        self.skip_non_blank();

        let span = self.get_span(start_mark);
        self.tokens.push_back(Token { span, token_type });
        Ok(())
    }

    fn fetch_flow_collection_end(&mut self, token_type: TokenType) -> ScanResult {
        self.remove_simple_key()?;
        self.decrease_flow_level();
        self.simple_key_allowed = false;

        let start_mark = self.mark;
        self.skip_non_blank();
        // `[a]:b` and `{"a":b}` style adjacent values
        self.adjacent_value_allowed_at = self.mark.pos;

        let span = self.get_span(start_mark);
        self.tokens.push_back(Token { span, token_type });
        Ok(())
    }

    fn fetch_flow_entry(&mut self) -> ScanResult {
        self.remove_simple_key()?;
        self.simple_key_allowed = true;

        let start_mark = self.mark;
        self.skip_non_blank();

        self.tokens.push_back(Token {
            span: self.get_span(start_mark),
            token_type: FlowEntry,
        });
        Ok(())
    }

    fn increase_flow_level(&mut self) -> ScanResult {
        self.simple_keys.push(SimpleKey::new(Marker::default()));
        self.flow_level = self
            .flow_level
            .checked_add(1)
            .ok_or_else(|| YamlError::new_str(self.mark, "recursion limit exceeded"))?;
        Ok(())
    }

    fn decrease_flow_level(&mut self) {
        if self.flow_level > 0 {
            self.flow_level -= 1;
            self.simple_keys.pop();
        }
    }

    fn fetch_block_entry(&mut self) -> ScanResult {
        if self.flow_level > 0 {
            return Err(YamlError::new_str(
                self.mark,
                r#""-" is only valid inside a block"#,
            ));
        }
        if !self.simple_key_allowed {
            return Err(YamlError::new_str(
                self.mark,
                "block sequence entries are not allowed in this context",
            ));
        }

        let mark = self.mark;
        self.roll_indent(mark.col as isize, None, BlockSequenceStart, mark);
        self.remove_simple_key()?;
        self.simple_key_allowed = true;

        self.skip_non_blank();
        self.tokens.push_back(Token {
            span: self.get_span(mark),
            token_type: BlockEntry,
        });
        Ok(())
    }

    fn fetch_key(&mut self) -> ScanResult {
        let start_mark = self.mark;
        if self.flow_level == 0 {
            if !self.simple_key_allowed {
                return Err(YamlError::new_str(
                    start_mark,
                    "mapping keys are not allowed in this context",
                ));
            }
            self.roll_indent(start_mark.col as isize, None, BlockMappingStart, start_mark);
        }

        self.remove_simple_key()?;
        self.simple_key_allowed = self.flow_level == 0;

        self.skip_non_blank();
        self.tokens.push_back(Token {
            span: self.get_span(start_mark),
            token_type: Key,
        });
        Ok(())
    }

    fn fetch_value(&mut self) -> ScanResult {
        let start_mark = self.mark;
        let sk = self
            .simple_keys
            .last()
            .cloned()
            .unwrap_or_else(|| SimpleKey::new(start_mark));

        if sk.possible {
            // insert simple key
            let tok = Token {
                span: Span::empty(sk.mark),
                token_type: Key,
            };
            self.insert_token(sk.token_number, tok);

            // Add the BLOCK-MAPPING-START token if needed.
            self.roll_indent(
                sk.mark.col as isize,
                Some(sk.token_number),
                BlockMappingStart,
                sk.mark,
            );
            if let Some(last) = self.simple_keys.last_mut() {
                last.possible = false;
            }
            self.simple_key_allowed = false;
        } else {
            // The ':' indicator follows a complex key.
            if self.flow_level == 0 {
                if !self.simple_key_allowed {
                    return Err(YamlError::new_str(
                        start_mark,
                        "mapping values are not allowed in this context",
                    ));
                }
                self.roll_indent(start_mark.col as isize, None, BlockMappingStart, start_mark);
            }
            self.simple_key_allowed = self.flow_level == 0;
        }

        self.skip_non_blank();
        self.tokens.push_back(Token {
            span: self.get_span(start_mark),
            token_type: Value,
        });
        Ok(())
    }

    fn insert_token(&mut self, token_number: usize, tok: Token) {
        let pos = token_number.saturating_sub(self.tokens_parsed);
        self.tokens.insert(pos.min(self.tokens.len()), tok);
    }

    fn roll_indent(&mut self, col: isize, number: Option<usize>, token_type: TokenType, mark: Marker) {
        if self.flow_level > 0 {
            return;
        }

        if self.indent < col {
            self.indents.push(self.indent);
            self.indent = col;
            let tok = Token {
                span: Span::empty(mark),
                token_type,
            };
            match number {
                Some(n) => self.insert_token(n, tok),
                None => self.tokens.push_back(tok),
            }
        }
    }

    fn unroll_indent(&mut self, col: isize) {
        if self.flow_level > 0 {
            return;
        }
        while self.indent > col {
            self.tokens.push_back(Token {
                span: Span::empty(self.mark),
                token_type: BlockEnd,
            });
            self.indent = self.indents.pop().unwrap_or(-1);
        }
    }

    fn save_simple_key(&mut self) -> ScanResult {
        if self.simple_key_allowed {
            let required = self.flow_level == 0 && self.indent == self.col();
            let sk = SimpleKey {
                possible: true,
                required,
                token_number: self.tokens_parsed + self.tokens.len(),
                mark: self.mark,
            };

            self.remove_simple_key()?;
            if let Some(last) = self.simple_keys.last_mut() {
                *last = sk;
            }
        }
        Ok(())
    }

    fn remove_simple_key(&mut self) -> ScanResult {
        if let Some(last) = self.simple_keys.last_mut() {
            if last.possible && last.required {
                return Err(YamlError::new_str(
                    self.mark,
                    "while scanning a simple key, could not find expected ':'",
                ));
            }
            last.possible = false;
        }
        Ok(())
    }

    fn stale_simple_keys(&mut self) -> ScanResult {
        for sk in &mut self.simple_keys {
            if sk.possible
                && (sk.mark.line < self.mark.line || sk.mark.pos + MAX_SIMPLE_KEY_LEN < self.mark.pos)
            {
                if sk.required {
                    return Err(YamlError::new_str(
                        self.mark,
                        "while scanning a simple key, could not find expected ':'",
                    ));
                }
                sk.possible = false;
            }
        }
        Ok(())
    }

    fn fetch_block_scalar(&mut self, literal: bool) -> ScanResult {
        self.remove_simple_key()?;
        self.simple_key_allowed = true;

        let tok = self.scan_block_scalar(literal)?;
        self.tokens.push_back(tok);
        Ok(())
    }

    fn scan_block_scalar(&mut self, literal: bool) -> YamlResult<Token> {
        let start_mark = self.mark;
        let mut chomping = ChompIndicator::Clip;
        let mut increment = 0usize;
        let mut indent = 0usize;
        let mut string = String::new();
        let mut leading_break = String::new();
        let mut trailing_breaks = String::new();
        let mut leading_blank = false;

        // indicator
        self.skip_non_blank();
        self.src.lookahead(1);

        if self.src.next_is('+') || self.src.next_is('-') {
            chomping = self.scan_chomping();
            if self.src.next_is_digit() {
                increment = self.scan_block_indent_indicator(&start_mark)?;
            }
        } else if self.src.next_is_digit() {
            increment = self.scan_block_indent_indicator(&start_mark)?;
            if self.src.next_is('+') || self.src.next_is('-') {
                chomping = self.scan_chomping();
            }
        }

        self.skip_blanks();
        if self.src.next_is('#') {
            self.skip_comment();
        }
        if !self.src.next_is_breakz() {
            return Err(YamlError::new_str(
                start_mark,
                "while scanning a block scalar, did not find expected comment or line break",
            ));
        }
        if self.src.next_is_break() {
            self.src.lookahead(2);
            self.skip_linebreak();
        }

        if increment > 0 {
            indent = if self.indent >= 0 {
                self.indent as usize + increment
            } else {
                increment
            };
        }

        // Scan the leading line breaks and determine the indentation level if needed.
        self.block_scalar_breaks(&mut indent, &mut trailing_breaks)?;

        self.src.lookahead(1);
        while self.mark.col as usize == indent && !self.src.next_is('\0') {
            // We are at the beginning of a non-empty line.
            let trailing_blank = self.src.next_is_blank();
            if !literal && !leading_break.is_empty() && !leading_blank && !trailing_blank {
                if trailing_breaks.is_empty() {
                    string.push(' ');
                }
                leading_break.clear();
            } else {
                string.push_str(&leading_break);
                leading_break.clear();
            }

            string.push_str(&trailing_breaks);
            trailing_breaks.clear();

            leading_blank = self.src.next_is_blank();

            while !self.src.next_is_breakz() {
                string.push(self.src.peek());
                self.skip_non_blank();
                self.src.lookahead(1);
            }

            self.src.lookahead(2);
            if self.src.next_is('\0') {
                break;
            }
            self.read_break(&mut leading_break);

            // Eat the following indentation spaces and line breaks.
            self.block_scalar_breaks(&mut indent, &mut trailing_breaks)?;
        }

        // Chomp the tail.
        if chomping != ChompIndicator::Strip {
            string.push_str(&leading_break);
        }
        if chomping == ChompIndicator::Keep {
            string.push_str(&trailing_breaks);
        }

        let style = if literal {
            ScalarStyle::Literal
        } else {
            ScalarStyle::Folded
        };
        Ok(Token {
            span: self.get_span(start_mark),
            token_type: TokenType::Scalar {
                style,
                value: string,
            },
        })
    }

    fn scan_chomping(&mut self) -> ChompIndicator {
        let chomping = if self.src.next_is('+') {
            ChompIndicator::Keep
        } else {
            ChompIndicator::Strip
        };
        self.skip_non_blank();
        self.src.lookahead(1);
        chomping
    }

    fn scan_block_indent_indicator(&mut self, start_mark: &Marker) -> YamlResult<usize> {
        if self.src.next_is('0') {
            return Err(YamlError::new_str(
                *start_mark,
                "while scanning a block scalar, found an indentation indicator equal to 0",
            ));
        }
        let increment = self.src.peek().to_digit(10).unwrap_or(1) as usize;
        self.skip_non_blank();
        self.src.lookahead(1);
        Ok(increment)
    }

    fn block_scalar_breaks(&mut self, indent: &mut usize, breaks: &mut String) -> ScanResult {
        let mut max_indent = 0usize;
        loop {
            self.src.lookahead(1);
            while (*indent == 0 || (self.mark.col as usize) < *indent) && self.src.next_is(' ') {
                self.skip_blank();
                self.src.lookahead(1);
            }

            if self.mark.col as usize > max_indent {
                max_indent = self.mark.col as usize;
            }

            if (*indent == 0 || (self.mark.col as usize) < *indent) && self.src.next_is('\t') {
                return Err(YamlError::new_str(
                    self.mark,
                    "while scanning a block scalar, found a tab character where an indentation space is expected",
                ));
            }

            if !self.src.next_is_break() {
                break;
            }

            self.src.lookahead(2);
            self.read_break(breaks);
        }

        if *indent == 0 {
            *indent = max_indent.max((self.indent + 1) as usize).max(1);
        }
        Ok(())
    }

    fn fetch_flow_scalar(&mut self, single: bool) -> ScanResult {
        self.save_simple_key()?;
        self.simple_key_allowed = false;

        let tok = self.scan_flow_scalar(single)?;

        // A key in a flow mapping may be followed by ':' without a space.
        self.adjacent_value_allowed_at = self.mark.pos;
        self.tokens.push_back(tok);
        Ok(())
    }

    fn scan_flow_scalar(&mut self, single: bool) -> YamlResult<Token> {
        let start_mark = self.mark;
        let mut string = String::new();
        let mut leading_break = String::new();
        let mut trailing_breaks = String::new();
        let mut whitespaces = String::new();
        let mut leading_blanks;

        // opening quote
        self.skip_non_blank();

        loop {
            self.src.lookahead(4);

            if self.mark.col == 0 && self.src.next_is_document_indicator() {
                return Err(YamlError::new_str(
                    start_mark,
                    "while scanning a quoted scalar, found unexpected document indicator",
                ));
            }
            if self.src.end_of_input() {
                return Err(YamlError::new_str(
                    start_mark,
                    "while scanning a quoted scalar, found unexpected end of stream",
                ));
            }
            if self.src.next_is('\0') {
                return Err(YamlError::new_str(
                    self.mark,
                    "control characters are not allowed",
                ));
            }

            leading_blanks = false;

            // Consume non-blank characters.
            while !self.src.next_is_blank_or_breakz() {
                match self.src.peek() {
                    '\'' if single && self.src.peek_nth(1) == '\'' => {
                        string.push('\'');
                        self.skip_n_non_blank(2);
                    }
                    '\'' if single => break,
                    '"' if !single => break,
                    '\\' if !single && is_break(self.src.peek_nth(1)) => {
                        // escaped line break
                        self.skip_non_blank();
                        self.src.lookahead(2);
                        self.skip_linebreak();
                        leading_blanks = true;
                        break;
                    }
                    '\\' if !single => {
                        self.resolve_flow_scalar_escape_sequence(&mut string, &start_mark)?;
                    }
                    c => {
                        string.push(c);
                        self.skip_non_blank();
                    }
                }
                self.src.lookahead(2);
            }

            // Check if we are at the end of the scalar.
            self.src.lookahead(1);
            if (single && self.src.next_is('\'')) || (!single && self.src.next_is('"')) {
                break;
            }

            // Consume blank characters.
            while self.src.next_is_blank() || self.src.next_is_break() {
                if self.src.next_is_blank() {
                    if !leading_blanks {
                        whitespaces.push(self.src.peek());
                    }
                    self.skip_blank();
                } else {
                    self.src.lookahead(2);
                    if leading_blanks {
                        self.read_break(&mut trailing_breaks);
                    } else {
                        whitespaces.clear();
                        self.read_break(&mut leading_break);
                        leading_blanks = true;
                    }
                }
                self.src.lookahead(1);
            }

            // Join the whitespaces or fold line breaks.
            if leading_blanks {
                if leading_break.is_empty() {
                    string.push_str(&trailing_breaks);
                    trailing_breaks.clear();
                } else {
                    if trailing_breaks.is_empty() {
                        string.push(' ');
                    } else {
                        string.push_str(&trailing_breaks);
                        trailing_breaks.clear();
                    }
                    leading_break.clear();
                }
            } else {
                string.push_str(&whitespaces);
                whitespaces.clear();
            }
        }

        // closing quote
        self.skip_non_blank();

        let style = if single {
            ScalarStyle::SingleQuoted
        } else {
            ScalarStyle::DoubleQuoted
        };
        Ok(Token {
            span: self.get_span(start_mark),
            token_type: TokenType::Scalar {
                style,
                value: string,
            },
        })
    }

    fn resolve_flow_scalar_escape_sequence(
        &mut self,
        string: &mut String,
        start_mark: &Marker,
    ) -> ScanResult {
        self.src.lookahead(2);
        let (simple, code_length) = match self.src.peek_nth(1) {
            '0' => (Some('\0'), 0),
            'a' => (Some('\x07'), 0),
            'b' => (Some('\x08'), 0),
            't' | '\t' => (Some('\t'), 0),
            'n' => (Some('\n'), 0),
            'v' => (Some('\x0b'), 0),
            'f' => (Some('\x0c'), 0),
            'r' => (Some('\r'), 0),
            'e' => (Some('\x1b'), 0),
            ' ' => (Some(' '), 0),
            '"' => (Some('"'), 0),
            '/' => (Some('/'), 0),
            '\\' => (Some('\\'), 0),
            'N' => (Some('\u{85}'), 0),
            '_' => (Some('\u{a0}'), 0),
            'L' => (Some('\u{2028}'), 0),
            'P' => (Some('\u{2029}'), 0),
            'x' => (None, 2),
            'u' => (None, 4),
            'U' => (None, 8),
            _ => {
                return Err(YamlError::new_str(
                    *start_mark,
                    "while parsing a quoted scalar, found unknown escape character",
                ))
            }
        };
        self.skip_n_non_blank(2);

        if let Some(ch) = simple {
            string.push(ch);
            return Ok(());
        }

        let value = self.scan_escape_code(code_length, start_mark)?;
        let ch = if code_length == 4 && (0xD800..=0xDBFF).contains(&value) {
            // UTF-16 surrogate pair written as two `\u` escapes
            self.src.lookahead(2);
            if self.src.next_is('\\') && self.src.peek_nth(1) == 'u' {
                self.skip_n_non_blank(2);
                let low = self.scan_escape_code(4, start_mark)?;
                if (0xDC00..=0xDFFF).contains(&low) {
                    char::from_u32(0x10000 + ((value - 0xD800) << 10) + (low - 0xDC00))
                } else {
                    None
                }
            } else {
                None
            }
        } else {
            char::from_u32(value)
        };

        match ch {
            Some(ch) => {
                string.push(ch);
                Ok(())
            }
            None => Err(YamlError::new_str(
                *start_mark,
                "while parsing a quoted scalar, found invalid Unicode character escape code",
            )),
        }
    }

    fn scan_escape_code(&mut self, length: usize, start_mark: &Marker) -> YamlResult<u32> {
        self.src.lookahead(length);
        let mut value = 0u32;
        for i in 0..length {
            let Some(digit) = as_hex(self.src.peek_nth(i)) else {
                return Err(YamlError::new_str(
                    *start_mark,
                    "while parsing a quoted scalar, did not find expected hexadecimal number",
                ));
            };
            value = (value << 4) + digit;
        }
        self.skip_n_non_blank(length);
        Ok(value)
    }

    fn fetch_plain_scalar(&mut self) -> ScanResult {
        self.save_simple_key()?;
        self.simple_key_allowed = false;

        let tok = self.scan_plain_scalar()?;
        self.tokens.push_back(tok);
        Ok(())
    }

    fn scan_plain_scalar(&mut self) -> YamlResult<Token> {
        let indent = self.indent + 1;
        let start_mark = self.mark;
        let mut end_mark = self.mark;

        let mut string = String::new();
        let mut leading_break = String::new();
        let mut trailing_breaks = String::new();
        let mut whitespaces = String::new();
        let mut leading_blanks = false;
        let in_flow = self.flow_level > 0;

        loop {
            self.src.lookahead(4);
            if self.mark.col == 0 && self.src.next_is_document_indicator() {
                break;
            }
            if self.src.next_is('#') {
                break;
            }

            while !self.src.next_is_blank_or_breakz() && self.src.next_can_be_plain_scalar(in_flow) {
                if leading_blanks || !whitespaces.is_empty() {
                    if leading_blanks {
                        if trailing_breaks.is_empty() {
                            string.push(' ');
                        } else {
                            string.push_str(&trailing_breaks);
                            trailing_breaks.clear();
                        }
                        leading_break.clear();
                        leading_blanks = false;
                    } else {
                        string.push_str(&whitespaces);
                        whitespaces.clear();
                    }
                }

                string.push(self.src.peek());
                self.skip_non_blank();
                self.src.lookahead(2);
            }
            end_mark = self.mark;

            // Is it the end?
            if !(self.src.next_is_blank() || self.src.next_is_break()) {
                break;
            }

            // Consume blank characters.
            while self.src.next_is_blank() || self.src.next_is_break() {
                if self.src.next_is_blank() {
                    if leading_blanks && self.col() < indent && self.src.next_is('\t') {
                        return Err(YamlError::new_str(
                            start_mark,
                            "while scanning a plain scalar, found a tab character that violates indentation",
                        ));
                    }
                    if !leading_blanks {
                        whitespaces.push(self.src.peek());
                    }
                    self.skip_blank();
                } else {
                    self.src.lookahead(2);
                    if leading_blanks {
                        self.read_break(&mut trailing_breaks);
                    } else {
                        whitespaces.clear();
                        self.read_break(&mut leading_break);
                        leading_blanks = true;
                    }
                }
                self.src.lookahead(1);
            }

            // check indentation level
            if self.flow_level == 0 && self.col() < indent {
                break;
            }
        }

        if leading_blanks {
            self.simple_key_allowed = true;
        }

        Ok(Token {
            span: Span::new(start_mark, end_mark),
            token_type: TokenType::Scalar {
                style: ScalarStyle::Plain,
                value: string,
            },
        })
    }

    fn skip_to_next_token(&mut self) {
        loop {
            self.src.lookahead(1);
            match self.src.peek() {
                '\u{FEFF}' if self.mark.pos == 0 => {
                    self.src.skip(1);
                    self.mark.pos += 1;
                }
                ' ' => self.skip_blank(),
                '\t' if self.flow_level > 0
                    || !self.leading_whitespace
                    || self.rest_of_line_is_blank() =>
                {
                    self.skip_blank();
                }
                c if is_break(c) => {
                    self.src.lookahead(2);
                    self.skip_linebreak();
                    if self.flow_level == 0 {
                        self.simple_key_allowed = true;
                    }
                }
                '#' => self.skip_comment(),
                _ => break,
            }
        }
    }

    fn rest_of_line_is_blank(&mut self) -> bool {
        let mut n = 0;
        loop {
            self.src.lookahead(n + 1);
            let c = self.src.peek_nth(n);
            if !is_blank(c) {
                return is_breakz(c) || c == '#';
            }
            n += 1;
        }
    }

    fn skip_comment(&mut self) {
        self.src.lookahead(1);
        while !self.src.next_is_breakz() {
            self.skip_non_blank();
            self.src.lookahead(1);
        }
    }

    fn skip_blanks(&mut self) {
        self.src.lookahead(1);
        while self.src.next_is_blank() {
            self.skip_blank();
            self.src.lookahead(1);
        }
    }

    #[inline]
    fn skip_blank(&mut self) {
        self.src.skip(1);
        self.mark.pos += 1;
        self.mark.col += 1;
    }

    #[inline]
    fn skip_non_blank(&mut self) {
        self.src.skip(1);
        self.mark.pos += 1;
        self.mark.col += 1;
        self.leading_whitespace = false;
    }

    fn skip_n_non_blank(&mut self, n: usize) {
        self.src.skip(n);
        self.mark.pos += n;
        self.mark.col += n as u32;
        self.leading_whitespace = false;
    }

    /// Skips one line break (`\r\n` counts as one). Needs two characters of lookahead.
    fn skip_linebreak(&mut self) {
        if self.src.next_is('\r') && self.src.peek_nth(1) == '\n' {
            self.src.skip(2);
            self.mark.pos += 2;
        } else if self.src.next_is_break() {
            self.src.skip(1);
            self.mark.pos += 1;
        } else {
            return;
        }
        self.mark.col = 0;
        self.mark.line += 1;
        self.leading_whitespace = true;
    }

    /// Reads one line break into `s`, normalizing `\r\n`, `\r` and NEL to `\n`.
    fn read_break(&mut self, s: &mut String) {
        let c = self.src.peek();
        if c == '\r' && self.src.peek_nth(1) == '\n' {
            s.push('\n');
            self.src.skip(2);
            self.mark.pos += 2;
        } else {
            s.push(if matches!(c, '\u{2028}' | '\u{2029}') { c } else { '\n' });
            self.src.skip(1);
            self.mark.pos += 1;
        }
        self.mark.col = 0;
        self.mark.line += 1;
        self.leading_whitespace = true;
    }
}

impl<S: LookAhead> Iterator for Scanner<S> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.error.is_some() {
            return None;
        }
        match self.next_token() {
            Ok(tok) => tok,
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tokenizer::buffered_source::CharsBuffer;
    use alloc::vec;
    use alloc::vec::Vec;
    use yev_common::TokenType::*;

    fn tokens(input: &str) -> Vec<TokenType> {
        let mut scanner = Scanner::new(CharsBuffer::from_str_input(input));
        let toks: Vec<TokenType> = scanner.by_ref().map(|t| t.token_type).collect();
        assert_eq!(scanner.get_error(), None, "unexpected error for {input:?}");
        toks
    }

    fn plain(value: &str) -> TokenType {
        Scalar {
            style: ScalarStyle::Plain,
            value: value.into(),
        }
    }

    fn scan_err(input: &str) -> YamlError {
        let mut scanner = Scanner::new(CharsBuffer::from_str_input(input));
        for _ in scanner.by_ref() {}
        scanner.get_error().expect("expected a scanner error")
    }

    #[test]
    fn block_mapping_tokens() {
        assert_eq!(
            tokens("a: b\nc: d\n"),
            vec![
                StreamStart,
                BlockMappingStart,
                Key,
                plain("a"),
                Value,
                plain("b"),
                Key,
                plain("c"),
                Value,
                plain("d"),
                BlockEnd,
                StreamEnd
            ]
        );
    }

    #[test]
    fn block_sequence_tokens() {
        assert_eq!(
            tokens("- x\n- - y\n"),
            vec![
                StreamStart,
                BlockSequenceStart,
                BlockEntry,
                plain("x"),
                BlockEntry,
                BlockSequenceStart,
                BlockEntry,
                plain("y"),
                BlockEnd,
                BlockEnd,
                StreamEnd
            ]
        );
    }

    #[test]
    fn flow_tokens() {
        assert_eq!(
            tokens("[a, {b: c}]"),
            vec![
                StreamStart,
                FlowSequenceStart,
                plain("a"),
                FlowEntry,
                FlowMappingStart,
                Key,
                plain("b"),
                Value,
                plain("c"),
                FlowMappingEnd,
                FlowSequenceEnd,
                StreamEnd
            ]
        );
    }

    #[test]
    fn directives_and_tags() {
        assert_eq!(
            tokens("%YAML 1.1\n%TAG !e! tag:e.com,2000:\n--- !e!f%21 x"),
            vec![
                StreamStart,
                VersionDirective { major: 1, minor: 1 },
                TagDirective {
                    handle: "!e!".into(),
                    prefix: "tag:e.com,2000:".into()
                },
                DocumentStart,
                Tag {
                    handle: "!e!".into(),
                    suffix: "f!".into()
                },
                plain("x"),
                StreamEnd
            ]
        );
        assert_eq!(
            tokens("!<tag:x> a")[1],
            Tag {
                handle: "".into(),
                suffix: "tag:x".into()
            }
        );
        assert_eq!(
            tokens("! a")[1],
            Tag {
                handle: "".into(),
                suffix: "!".into()
            }
        );
        assert_eq!(
            tokens("!local a")[1],
            Tag {
                handle: "!".into(),
                suffix: "local".into()
            }
        );
    }

    #[test]
    fn unknown_directive_is_skipped() {
        assert_eq!(
            tokens("%FOO bar baz\n--- x"),
            vec![StreamStart, DocumentStart, plain("x"), StreamEnd]
        );
    }

    #[test]
    fn quoted_escapes() {
        let toks = tokens(r#""a\tb\x41\u00e9\U0001F600\uD83D\uDE00""#);
        assert_eq!(
            toks[1],
            Scalar {
                style: ScalarStyle::DoubleQuoted,
                value: "a\tbAé😀😀".into()
            }
        );
        let toks = tokens("'it''s\n\n  here'");
        assert_eq!(
            toks[1],
            Scalar {
                style: ScalarStyle::SingleQuoted,
                value: "it's\nhere".into()
            }
        );
    }

    #[test]
    fn block_scalar_chomping() {
        let toks = tokens("--- |+\n  a\n\n");
        assert_eq!(
            toks[2],
            Scalar {
                style: ScalarStyle::Literal,
                value: "a\n\n".into()
            }
        );
        let toks = tokens("--- >-\n  a\n  b\n\n  c\n");
        assert_eq!(
            toks[2],
            Scalar {
                style: ScalarStyle::Folded,
                value: "a b\nc".into()
            }
        );
    }

    #[test]
    fn anchors_and_aliases() {
        assert_eq!(
            tokens("- &a x\n- *a\n"),
            vec![
                StreamStart,
                BlockSequenceStart,
                BlockEntry,
                Anchor("a".into()),
                plain("x"),
                BlockEntry,
                Alias("a".into()),
                BlockEnd,
                StreamEnd
            ]
        );
    }

    #[test]
    fn marks() {
        let mut scanner = Scanner::new(CharsBuffer::from_str_input("a:\n  bc: d"));
        let toks: Vec<Token> = scanner.by_ref().collect();
        let bc = toks
            .iter()
            .find(|t| t.token_type == plain("bc"))
            .expect("bc token");
        assert_eq!(bc.span.start, Marker::new(5, 2, 2));
        assert_eq!(bc.span.end, Marker::new(7, 2, 4));
    }

    #[test]
    fn lexical_errors() {
        assert!(scan_err("\"abc").message().contains("unexpected end of stream"));
        assert!(scan_err("a: b: c").message().contains("mapping values are not allowed"));
        assert!(scan_err("\ta: b").message().contains("tab character"));
        assert!(scan_err("a: \"\\q\"").message().contains("unknown escape"));
        assert!(scan_err("%TAG !e x\n").message().contains("did not find expected '!'"));
        assert!(scan_err("a: \u{1}").message().contains("control characters"));
        assert!(scan_err("--- |0\n a").message().contains("indentation indicator equal to 0"));
        let err = scan_err("key: value\n@x");
        assert_eq!(err.span().map(|s| s.start.line), Some(2));
    }
}
