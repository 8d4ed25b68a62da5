use crate::tokenizer::buffered_source::CharsBuffer;
use crate::tokenizer::scanner::{Scanner, Token};
use crate::tokenizer::source::LookAhead;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::str::Chars;
use hashbrown::HashMap;
use log::{debug, trace, warn};
use yev_common::{
    CollectionStart, CollectionStyle, DocumentStart, Encoding, Event, Marker, ScalarEvent,
    ScalarStyle, ScanResult, Span, TagDirective, TokenType, VersionDirective, YamlError,
    YamlResult,
};

#[derive(Clone, Copy, PartialEq, Debug, Eq)]
enum State {
    StreamStart,
    ImplicitDocumentStart,
    DocumentStart,
    DocumentContent,
    DocumentEnd,
    BlockNode,
    BlockSequenceFirstEntry,
    BlockSequenceEntry,
    IndentlessSequenceEntry,
    BlockMappingFirstKey,
    BlockMappingKey,
    BlockMappingValue,
    FlowSequenceFirstEntry,
    FlowSequenceEntry,
    FlowSequenceEntryMappingKey,
    FlowSequenceEntryMappingValue,
    FlowSequenceEntryMappingEnd,
    FlowMappingFirstKey,
    FlowMappingKey,
    FlowMappingValue,
    FlowMappingEmptyValue,
    End,
}

type ParseResult = YamlResult<(Event, Span)>;

/// Pulls tokens from a [`Scanner`] and produces well-nested [`Event`]s with their spans.
///
/// The parser stops at the first error. After an error, or after `StreamEnd`, every
/// further call to [`Parser::next_event`] returns `Ok(None)`.
pub struct Parser<S> {
    scanner: Scanner<S>,
    states: Vec<State>,
    state: State,
    token: Option<Token>,
    current: Option<(Event, Span)>,
    tag_directives: HashMap<String, String>,
}

impl<'a> Parser<CharsBuffer<Chars<'a>>> {
    #[must_use]
    pub fn new_from_str(input: &'a str) -> Self {
        Parser::new(CharsBuffer::from_str_input(input))
    }
}

impl Parser<CharsBuffer<alloc::vec::IntoIter<char>>> {
    /// Parser over raw bytes. The encoding is sniffed from the byte order mark
    /// (or the null byte pattern of the first characters) and defaults to UTF-8.
    ///
    /// # Errors
    /// Returns [`YamlError::NonDecodable`] if the bytes are not valid in the sniffed encoding.
    pub fn from_bytes(bytes: &[u8]) -> YamlResult<Self> {
        let text = Encoding::decode(bytes)?;
        Ok(Parser::new(CharsBuffer::from_string(&text)))
    }
}

impl<S: LookAhead> Parser<S> {
    pub fn new(src: S) -> Parser<S> {
        Parser {
            scanner: Scanner::new(src),
            states: Vec::new(),
            state: State::StreamStart,
            token: None,
            current: None,
            tag_directives: HashMap::new(),
        }
    }

    /// Next event, or `None` once the stream is over.
    ///
    /// # Errors
    /// Returns the first scanner or grammar error. The parser does not recover from it.
    pub fn next_event(&mut self) -> YamlResult<Option<(Event, Span)>> {
        if let Some(ev) = self.current.take() {
            return Ok(Some(ev));
        }
        match self.state_machine() {
            Ok(None) => Ok(None),
            Ok(Some((ev, span))) => {
                trace!("{ev} at {span}");
                Ok(Some((ev, span)))
            }
            Err(e) => {
                self.state = State::End;
                Err(e)
            }
        }
    }

    /// Looks at the next event without consuming it.
    ///
    /// # Errors
    /// See [`Parser::next_event`].
    pub fn peek_event(&mut self) -> YamlResult<Option<&(Event, Span)>> {
        if self.current.is_none() {
            self.current = self.next_event()?;
        }
        Ok(self.current.as_ref())
    }

    fn peek_token(&mut self) -> YamlResult<&Token> {
        if self.token.is_none() {
            self.token = self.scanner.next_token()?;
        }
        self.token
            .as_ref()
            .ok_or_else(|| YamlError::new_str(self.scanner.mark(), "unexpected end of token stream"))
    }

    fn fetch_token(&mut self) -> YamlResult<Token> {
        match self.token.take() {
            Some(tok) => Ok(tok),
            None => self.scanner.next_token()?.ok_or_else(|| {
                YamlError::new_str(self.scanner.mark(), "unexpected end of token stream")
            }),
        }
    }

    fn skip_token(&mut self) -> ScanResult {
        self.fetch_token().map(|_| ())
    }

    fn pop_state(&mut self) {
        self.state = self.states.pop().unwrap_or(State::End);
    }

    fn state_machine(&mut self) -> YamlResult<Option<(Event, Span)>> {
        let parsed = match self.state {
            State::End => return Ok(None),
            State::StreamStart => self.parse_stream_start(),
            State::ImplicitDocumentStart => self.parse_document_start(true),
            State::DocumentStart => self.parse_document_start(false),
            State::DocumentContent => self.parse_document_content(),
            State::DocumentEnd => self.parse_document_end(),
            State::BlockNode => self.parse_node(true, false),
            State::BlockSequenceFirstEntry => self.parse_block_sequence_entry(true),
            State::BlockSequenceEntry => self.parse_block_sequence_entry(false),
            State::IndentlessSequenceEntry => self.parse_indentless_sequence_entry(),
            State::BlockMappingFirstKey => self.parse_block_mapping_key(true),
            State::BlockMappingKey => self.parse_block_mapping_key(false),
            State::BlockMappingValue => self.parse_block_mapping_value(),
            State::FlowSequenceFirstEntry => self.parse_flow_sequence_entry(true),
            State::FlowSequenceEntry => self.parse_flow_sequence_entry(false),
            State::FlowSequenceEntryMappingKey => self.parse_flow_sequence_entry_mapping_key(),
            State::FlowSequenceEntryMappingValue => self.parse_flow_sequence_entry_mapping_value(),
            State::FlowSequenceEntryMappingEnd => self.parse_flow_sequence_entry_mapping_end(),
            State::FlowMappingFirstKey => self.parse_flow_mapping_key(true),
            State::FlowMappingKey => self.parse_flow_mapping_key(false),
            State::FlowMappingValue => self.parse_flow_mapping_value(false),
            State::FlowMappingEmptyValue => self.parse_flow_mapping_value(true),
        };
        parsed.map(Some)
    }

    fn parse_stream_start(&mut self) -> ParseResult {
        let tok = self.fetch_token()?;
        match tok.token_type {
            TokenType::StreamStart => {
                self.state = State::ImplicitDocumentStart;
                Ok((Event::StreamStart, tok.span))
            }
            tt => Err(unexpected(tok.span, "did not find expected <stream-start>", &tt)),
        }
    }

    fn parse_document_start(&mut self, implicit: bool) -> ParseResult {
        while matches!(self.peek_token()?.token_type, TokenType::DocumentEnd) {
            self.skip_token()?;
        }

        let tok = self.peek_token()?;
        let span = tok.span;
        match tok.token_type {
            TokenType::StreamEnd => {
                self.state = State::End;
                self.skip_token()?;
                Ok((Event::StreamEnd, span))
            }
            TokenType::VersionDirective { .. }
            | TokenType::TagDirective { .. }
            | TokenType::DocumentStart => {
                let start = span.start;
                let (version, tags) = self.process_directives()?;
                let tok = self.fetch_token()?;
                if tok.token_type != TokenType::DocumentStart {
                    return Err(unexpected(
                        tok.span,
                        "did not find expected <document start>",
                        &tok.token_type,
                    ));
                }
                self.states.push(State::DocumentEnd);
                self.state = State::DocumentContent;
                debug!("explicit document start at {start}");

                let mut doc = DocumentStart::explicit().with_tag_directives(tags);
                doc.version = version;
                Ok((Event::DocumentStart(doc), Span::new(start, tok.span.end)))
            }
            _ if implicit => {
                self.process_directives()?;
                self.states.push(State::DocumentEnd);
                self.state = State::BlockNode;
                debug!("implicit document start at {}", span.start);
                Ok((
                    Event::DocumentStart(DocumentStart::implicit()),
                    Span::empty(span.start),
                ))
            }
            ref tt => Err(unexpected(span, "did not find expected <document start>", tt)),
        }
    }

    fn process_directives(&mut self) -> YamlResult<(Option<VersionDirective>, Vec<TagDirective>)> {
        let mut version = None;
        let mut tags = Vec::new();
        self.tag_directives.clear();

        loop {
            let token = match self.peek_token()?.token_type {
                TokenType::VersionDirective { .. } | TokenType::TagDirective { .. } => {
                    self.fetch_token()?
                }
                _ => break,
            };
            let span = token.span;
            match token.token_type {
                TokenType::VersionDirective { major, minor } => {
                    if version.is_some() {
                        return Err(YamlError::parse_err(span, "found duplicate %YAML directive"));
                    }
                    let directive = VersionDirective::new(major, minor);
                    if !directive.is_compatible() {
                        return Err(YamlError::parse_err(
                            span,
                            &format!("found incompatible YAML document version {directive}"),
                        ));
                    }
                    if directive != VersionDirective::V1_1 {
                        warn!("reading YAML {directive} document at {span} with 1.1 rules");
                    }
                    version = Some(directive);
                }
                TokenType::TagDirective { handle, prefix } => {
                    match self.tag_directives.get(&handle) {
                        Some(existing) if *existing == prefix => {}
                        Some(_) => {
                            return Err(YamlError::parse_err(
                                span,
                                &format!("found duplicate %TAG directive for handle {handle}"),
                            ));
                        }
                        None => {
                            let directive = TagDirective::new(&handle, &prefix)
                                .map_err(|e| YamlError::parse_err(span, e.message()))?;
                            tags.push(directive);
                            self.tag_directives.insert(handle, prefix);
                        }
                    }
                }
                _ => {}
            }
        }

        for default in TagDirective::default_directives() {
            self.tag_directives
                .entry(String::from(default.handle()))
                .or_insert_with(|| String::from(default.prefix()));
        }
        Ok((version, tags))
    }

    fn parse_document_content(&mut self) -> ParseResult {
        let tok = self.peek_token()?;
        match tok.token_type {
            TokenType::VersionDirective { .. }
            | TokenType::TagDirective { .. }
            | TokenType::DocumentStart
            | TokenType::DocumentEnd
            | TokenType::StreamEnd => {
                let mark = tok.span.start;
                self.pop_state();
                Ok(empty_scalar(mark))
            }
            _ => self.parse_node(true, false),
        }
    }

    fn parse_document_end(&mut self) -> ParseResult {
        let tok = self.peek_token()?;
        let start = tok.span.start;
        let mut end = start;
        let mut implicit = true;
        if tok.token_type == TokenType::DocumentEnd {
            end = tok.span.end;
            implicit = false;
            self.skip_token()?;
        }

        self.tag_directives.clear();
        // A bare document may follow `...`, otherwise only `---` starts the next one.
        self.state = if implicit {
            State::DocumentStart
        } else {
            State::ImplicitDocumentStart
        };
        debug!("document end at {end}");
        Ok((Event::DocumentEnd { implicit }, Span::new(start, end)))
    }

    fn parse_node(&mut self, block: bool, indentless_sequence: bool) -> ParseResult {
        let mut anchor: Option<String> = None;
        let mut tag: Option<(String, String, Span)> = None;

        let tok = self.peek_token()?;
        let mut start = tok.span.start;
        let mut end = start;
        match tok.token_type {
            TokenType::Alias(_) => {
                self.pop_state();
                let tok = self.fetch_token()?;
                if let TokenType::Alias(name) = tok.token_type {
                    return Ok((Event::Alias(name), tok.span));
                }
            }
            TokenType::Anchor(_) => {
                let tok = self.fetch_token()?;
                (start, end) = (tok.span.start, tok.span.end);
                if let TokenType::Anchor(name) = tok.token_type {
                    anchor = Some(name);
                }
                if matches!(self.peek_token()?.token_type, TokenType::Tag { .. }) {
                    let tok = self.fetch_token()?;
                    end = tok.span.end;
                    if let TokenType::Tag { handle, suffix } = tok.token_type {
                        tag = Some((handle, suffix, tok.span));
                    }
                }
            }
            TokenType::Tag { .. } => {
                let tok = self.fetch_token()?;
                (start, end) = (tok.span.start, tok.span.end);
                if let TokenType::Tag { handle, suffix } = tok.token_type {
                    tag = Some((handle, suffix, tok.span));
                }
                if matches!(self.peek_token()?.token_type, TokenType::Anchor(_)) {
                    let tok = self.fetch_token()?;
                    end = tok.span.end;
                    if let TokenType::Anchor(name) = tok.token_type {
                        anchor = Some(name);
                    }
                }
            }
            _ => {}
        }

        let tag = match tag {
            Some((handle, suffix, span)) => Some(self.resolve_tag(&handle, suffix, span)?),
            None => None,
        };
        let implicit = tag.is_none();

        let tok = self.peek_token()?;
        let tok_span = tok.span;
        let props = CollectionStart {
            anchor,
            tag,
            implicit,
            style: CollectionStyle::Any,
        };
        match tok.token_type {
            TokenType::BlockEntry if indentless_sequence => {
                self.state = State::IndentlessSequenceEntry;
                Ok((
                    Event::SequenceStart(props.with_style(CollectionStyle::Block)),
                    Span::new(start, tok_span.end),
                ))
            }
            TokenType::Scalar { .. } => {
                self.pop_state();
                let tok = self.fetch_token()?;
                let (style, value) = match tok.token_type {
                    TokenType::Scalar { style, value } => (style, value),
                    _ => (ScalarStyle::Plain, String::new()),
                };
                let plain_implicit = (props.tag.is_none() && style == ScalarStyle::Plain)
                    || props.tag.as_deref() == Some("!");
                let quoted_implicit = props.tag.is_none();
                let scalar = ScalarEvent {
                    anchor: props.anchor,
                    tag: props.tag,
                    value,
                    style,
                    plain_implicit,
                    quoted_implicit,
                };
                Ok((Event::Scalar(scalar), Span::new(start, tok.span.end)))
            }
            TokenType::FlowSequenceStart => {
                self.state = State::FlowSequenceFirstEntry;
                Ok((
                    Event::SequenceStart(props.with_style(CollectionStyle::Flow)),
                    Span::new(start, tok_span.end),
                ))
            }
            TokenType::FlowMappingStart => {
                self.state = State::FlowMappingFirstKey;
                Ok((
                    Event::MappingStart(props.with_style(CollectionStyle::Flow)),
                    Span::new(start, tok_span.end),
                ))
            }
            TokenType::BlockSequenceStart if block => {
                self.state = State::BlockSequenceFirstEntry;
                Ok((
                    Event::SequenceStart(props.with_style(CollectionStyle::Block)),
                    Span::new(start, tok_span.end),
                ))
            }
            TokenType::BlockMappingStart if block => {
                self.state = State::BlockMappingFirstKey;
                Ok((
                    Event::MappingStart(props.with_style(CollectionStyle::Block)),
                    Span::new(start, tok_span.end),
                ))
            }
            _ if props.anchor.is_some() || props.tag.is_some() => {
                // Properties without content stand for an empty plain scalar.
                self.pop_state();
                let scalar = ScalarEvent {
                    anchor: props.anchor,
                    tag: props.tag,
                    value: String::new(),
                    style: ScalarStyle::Plain,
                    plain_implicit: implicit,
                    quoted_implicit: false,
                };
                Ok((Event::Scalar(scalar), Span::new(start, end)))
            }
            ref tt => {
                let context = if block {
                    "while parsing a block node, did not find expected node content"
                } else {
                    "while parsing a flow node, did not find expected node content"
                };
                Err(unexpected(tok_span, context, tt))
            }
        }
    }

    fn resolve_tag(&self, handle: &str, suffix: String, span: Span) -> YamlResult<String> {
        if handle.is_empty() {
            return Ok(suffix);
        }
        match self.tag_directives.get(handle) {
            Some(prefix) => Ok(format!("{prefix}{suffix}")),
            None => Err(YamlError::parse_err(
                span,
                &format!("while parsing a node, found undefined tag handle {handle}"),
            )),
        }
    }

    fn parse_block_sequence_entry(&mut self, first: bool) -> ParseResult {
        if first {
            self.skip_token()?;
        }

        let tok = self.peek_token()?;
        let span = tok.span;
        match tok.token_type {
            TokenType::BlockEntry => {
                self.skip_token()?;
                if matches!(
                    self.peek_token()?.token_type,
                    TokenType::BlockEntry | TokenType::BlockEnd
                ) {
                    self.state = State::BlockSequenceEntry;
                    Ok(empty_scalar(span.end))
                } else {
                    self.states.push(State::BlockSequenceEntry);
                    self.parse_node(true, false)
                }
            }
            TokenType::BlockEnd => {
                self.pop_state();
                self.skip_token()?;
                Ok((Event::SequenceEnd, span))
            }
            ref tt => Err(unexpected(
                span,
                "while parsing a block collection, did not find expected '-' indicator",
                tt,
            )),
        }
    }

    fn parse_indentless_sequence_entry(&mut self) -> ParseResult {
        let tok = self.peek_token()?;
        let span = tok.span;
        if tok.token_type != TokenType::BlockEntry {
            self.pop_state();
            return Ok((Event::SequenceEnd, Span::empty(span.start)));
        }

        self.skip_token()?;
        if matches!(
            self.peek_token()?.token_type,
            TokenType::BlockEntry | TokenType::Key | TokenType::Value | TokenType::BlockEnd
        ) {
            self.state = State::IndentlessSequenceEntry;
            Ok(empty_scalar(span.end))
        } else {
            self.states.push(State::IndentlessSequenceEntry);
            self.parse_node(true, false)
        }
    }

    fn parse_block_mapping_key(&mut self, first: bool) -> ParseResult {
        if first {
            self.skip_token()?;
        }

        let tok = self.peek_token()?;
        let span = tok.span;
        match tok.token_type {
            TokenType::Key => {
                self.skip_token()?;
                if matches!(
                    self.peek_token()?.token_type,
                    TokenType::Key | TokenType::Value | TokenType::BlockEnd
                ) {
                    self.state = State::BlockMappingValue;
                    Ok(empty_scalar(span.end))
                } else {
                    self.states.push(State::BlockMappingValue);
                    self.parse_node(true, true)
                }
            }
            // `: value` with the key left out
            TokenType::Value => {
                self.state = State::BlockMappingValue;
                Ok(empty_scalar(span.start))
            }
            TokenType::BlockEnd => {
                self.pop_state();
                self.skip_token()?;
                Ok((Event::MappingEnd, span))
            }
            ref tt => Err(unexpected(
                span,
                "while parsing a block mapping, did not find expected key",
                tt,
            )),
        }
    }

    fn parse_block_mapping_value(&mut self) -> ParseResult {
        let tok = self.peek_token()?;
        let span = tok.span;
        if tok.token_type != TokenType::Value {
            self.state = State::BlockMappingKey;
            return Ok(empty_scalar(span.start));
        }

        self.skip_token()?;
        if matches!(
            self.peek_token()?.token_type,
            TokenType::Key | TokenType::Value | TokenType::BlockEnd
        ) {
            self.state = State::BlockMappingKey;
            Ok(empty_scalar(span.end))
        } else {
            self.states.push(State::BlockMappingKey);
            self.parse_node(true, true)
        }
    }

    fn parse_flow_sequence_entry(&mut self, first: bool) -> ParseResult {
        if first {
            self.skip_token()?;
        }

        let mut tok = self.peek_token()?;
        if tok.token_type != TokenType::FlowSequenceEnd {
            if !first {
                if tok.token_type == TokenType::FlowEntry {
                    self.skip_token()?;
                    tok = self.peek_token()?;
                } else {
                    return Err(unexpected(
                        tok.span,
                        "while parsing a flow sequence, did not find expected ',' or ']'",
                        &tok.token_type,
                    ));
                }
            }

            let span = tok.span;
            match tok.token_type {
                TokenType::Key => {
                    // single pair mapping `[a: b]`
                    self.state = State::FlowSequenceEntryMappingKey;
                    self.skip_token()?;
                    let start = CollectionStart::new().with_style(CollectionStyle::Flow);
                    return Ok((Event::MappingStart(start), span));
                }
                TokenType::FlowSequenceEnd => {}
                _ => {
                    self.states.push(State::FlowSequenceEntry);
                    return self.parse_node(false, false);
                }
            }
        }

        let span = self.peek_token()?.span;
        self.pop_state();
        self.skip_token()?;
        Ok((Event::SequenceEnd, span))
    }

    fn parse_flow_sequence_entry_mapping_key(&mut self) -> ParseResult {
        let tok = self.peek_token()?;
        if matches!(
            tok.token_type,
            TokenType::Value | TokenType::FlowEntry | TokenType::FlowSequenceEnd
        ) {
            let mark = tok.span.start;
            self.state = State::FlowSequenceEntryMappingValue;
            Ok(empty_scalar(mark))
        } else {
            self.states.push(State::FlowSequenceEntryMappingValue);
            self.parse_node(false, false)
        }
    }

    fn parse_flow_sequence_entry_mapping_value(&mut self) -> ParseResult {
        let tok = self.peek_token()?;
        if tok.token_type == TokenType::Value {
            self.skip_token()?;
            let tok = self.peek_token()?;
            if !matches!(
                tok.token_type,
                TokenType::FlowEntry | TokenType::FlowSequenceEnd
            ) {
                self.states.push(State::FlowSequenceEntryMappingEnd);
                return self.parse_node(false, false);
            }
        }
        let mark = self.peek_token()?.span.start;
        self.state = State::FlowSequenceEntryMappingEnd;
        Ok(empty_scalar(mark))
    }

    fn parse_flow_sequence_entry_mapping_end(&mut self) -> ParseResult {
        let mark = self.peek_token()?.span.start;
        self.state = State::FlowSequenceEntry;
        Ok((Event::MappingEnd, Span::empty(mark)))
    }

    fn parse_flow_mapping_key(&mut self, first: bool) -> ParseResult {
        if first {
            self.skip_token()?;
        }

        let mut tok = self.peek_token()?;
        if tok.token_type != TokenType::FlowMappingEnd {
            if !first {
                if tok.token_type == TokenType::FlowEntry {
                    self.skip_token()?;
                    tok = self.peek_token()?;
                } else {
                    return Err(unexpected(
                        tok.span,
                        "while parsing a flow mapping, did not find expected ',' or '}'",
                        &tok.token_type,
                    ));
                }
            }

            let span = tok.span;
            match tok.token_type {
                TokenType::Key => {
                    self.skip_token()?;
                    let tok = self.peek_token()?;
                    let mark = tok.span.start;
                    if matches!(
                        tok.token_type,
                        TokenType::Value | TokenType::FlowEntry | TokenType::FlowMappingEnd
                    ) {
                        self.state = State::FlowMappingValue;
                        return Ok(empty_scalar(mark));
                    }
                    self.states.push(State::FlowMappingValue);
                    return self.parse_node(false, false);
                }
                TokenType::Value => {
                    self.state = State::FlowMappingValue;
                    return Ok(empty_scalar(span.start));
                }
                TokenType::FlowMappingEnd => {}
                _ => {
                    // `{a, b}`: entries without a value
                    self.states.push(State::FlowMappingEmptyValue);
                    return self.parse_node(false, false);
                }
            }
        }

        let span = self.peek_token()?.span;
        self.pop_state();
        self.skip_token()?;
        Ok((Event::MappingEnd, span))
    }

    fn parse_flow_mapping_value(&mut self, empty: bool) -> ParseResult {
        let tok = self.peek_token()?;
        let mark = tok.span.start;
        if empty {
            self.state = State::FlowMappingKey;
            return Ok(empty_scalar(mark));
        }

        if tok.token_type == TokenType::Value {
            self.skip_token()?;
            let tok = self.peek_token()?;
            if !matches!(
                tok.token_type,
                TokenType::FlowEntry | TokenType::FlowMappingEnd
            ) {
                self.states.push(State::FlowMappingKey);
                return self.parse_node(false, false);
            }
            let mark = tok.span.start;
            self.state = State::FlowMappingKey;
            return Ok(empty_scalar(mark));
        }

        self.state = State::FlowMappingKey;
        Ok(empty_scalar(mark))
    }

    /// The scanner error that stopped the token stream, if any.
    #[must_use]
    pub fn scanner_error(&self) -> Option<YamlError> {
        self.scanner.get_error()
    }
}

fn empty_scalar(mark: Marker) -> (Event, Span) {
    let scalar = ScalarEvent::new("").with_style(ScalarStyle::Plain).with_implicit(true, false);
    (Event::Scalar(scalar), Span::empty(mark))
}

fn unexpected(span: Span, context: &str, found: &TokenType) -> YamlError {
    YamlError::parse_err(span, &format!("{context}, found {}", found.name()))
}

impl<S: LookAhead> Iterator for Parser<S> {
    type Item = YamlResult<(Event, Span)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event().transpose()
    }
}
