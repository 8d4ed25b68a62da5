mod analyzer;
mod writer;

use alloc::collections::VecDeque;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use log::trace;
use yev_common::{
    CollectionStart, CollectionStyle, DocumentStart, Encoding, Event, ScalarEvent, ScalarStyle,
    ScanResult, TagDirective, YamlError, YamlResult,
};

pub use analyzer::{
    analyze_anchor, analyze_scalar, analyze_tag, AnchorAnalysis, ScalarAnalysis, TagAnalysis,
};

/// Keys longer than this are written as complex `? key` entries.
const MAX_SIMPLE_KEY_LENGTH: usize = 128;

/// Line break written between lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineBreak {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl LineBreak {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LineBreak::Lf => "\n",
            LineBreak::CrLf => "\r\n",
            LineBreak::Cr => "\r",
        }
    }
}

/// Output settings of an [`Emitter`].
///
/// ```
/// use yev_core::{EmitterConfig, LineBreak};
///
/// let config = EmitterConfig::default()
///     .with_indent(4)
///     .with_width(60)
///     .with_line_break(LineBreak::CrLf);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmitterConfig {
    /// Spaces added per nesting level, between 2 and 9.
    pub best_indent: usize,
    /// Preferred line width. Must exceed twice the indent.
    pub best_width: usize,
    /// Explicit documents, double quoted scalars and flow collections everywhere.
    pub canonical: bool,
    /// Writes block sequences under a mapping key at the key's indentation.
    pub force_indent_less: bool,
    /// Double quotes every simple key.
    pub emit_key_quoted: bool,
    /// Characters this encoding cannot represent are escaped.
    pub encoding: Encoding,
    pub line_break: LineBreak,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        EmitterConfig {
            best_indent: 2,
            best_width: usize::MAX,
            canonical: false,
            force_indent_less: false,
            emit_key_quoted: false,
            encoding: Encoding::Utf8,
            line_break: LineBreak::Lf,
        }
    }
}

impl EmitterConfig {
    #[must_use]
    pub fn with_indent(mut self, best_indent: usize) -> Self {
        self.best_indent = best_indent;
        self
    }

    #[must_use]
    pub fn with_width(mut self, best_width: usize) -> Self {
        self.best_width = best_width;
        self
    }

    #[must_use]
    pub fn canonical(mut self, canonical: bool) -> Self {
        self.canonical = canonical;
        self
    }

    #[must_use]
    pub fn force_indent_less(mut self, force_indent_less: bool) -> Self {
        self.force_indent_less = force_indent_less;
        self
    }

    #[must_use]
    pub fn emit_key_quoted(mut self, emit_key_quoted: bool) -> Self {
        self.emit_key_quoted = emit_key_quoted;
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_line_break(mut self, line_break: LineBreak) -> Self {
        self.line_break = line_break;
        self
    }

    /// # Errors
    /// Returns [`YamlError::Emitter`] when the indent is outside `2..=9` or the width is not
    /// larger than twice the indent.
    pub fn validate(&self) -> ScanResult {
        if !(2..=9).contains(&self.best_indent) {
            return Err(YamlError::emit_err(&format!(
                "best indent must be between 2 and 9, got {}",
                self.best_indent
            )));
        }
        if self.best_width <= self.best_indent * 2 {
            return Err(YamlError::emit_err(&format!(
                "best width must be greater than twice the best indent, got {}",
                self.best_width
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EmitterState {
    StreamStart,
    FirstDocumentStart,
    DocumentStart,
    DocumentContent,
    DocumentEnd,
    FlowSequenceFirstItem,
    FlowSequenceItem,
    FlowMappingFirstKey,
    FlowMappingKey,
    FlowMappingSimpleValue,
    FlowMappingValue,
    BlockSequenceFirstItem,
    BlockSequenceItem,
    BlockMappingFirstKey,
    BlockMappingKey,
    BlockMappingSimpleValue,
    BlockMappingValue,
    End,
}

/// Sink for a stream of events.
pub trait Emit {
    /// # Errors
    /// Returns an error when the event does not fit the stream received so far.
    fn emit(&mut self, event: Event) -> ScanResult;
}

impl Emit for Vec<Event> {
    fn emit(&mut self, event: Event) -> ScanResult {
        self.push(event);
        Ok(())
    }
}

/// Writes YAML text for a stream of events.
///
/// Events are queued until enough of the following ones are known to lay out the current
/// one: one more after a document start, two after a sequence start and three after a
/// mapping start. Every event is then checked against the grammar of the stream, its scalar,
/// anchor and tag are analyzed, and it is written in the best style the analysis allows.
///
/// ```
/// use yev_common::{DocumentStart, Event, ScalarStyle};
/// use yev_core::Emitter;
///
/// let mut out = String::new();
/// let mut emitter = Emitter::new(&mut out);
/// for event in [
///     Event::StreamStart,
///     Event::DocumentStart(DocumentStart::implicit()),
///     Event::scalar("hello", ScalarStyle::Any),
///     Event::DocumentEnd { implicit: true },
///     Event::StreamEnd,
/// ] {
///     emitter.emit(event).unwrap();
/// }
/// assert_eq!(out, "hello\n...\n");
/// ```
pub struct Emitter<'a> {
    writer: &'a mut dyn fmt::Write,
    config: EmitterConfig,

    state: EmitterState,
    states: Vec<EmitterState>,
    events: VecDeque<Event>,
    indents: Vec<isize>,
    tag_directives: Vec<TagDirective>,

    indent: isize,
    flow_level: usize,
    root_context: bool,
    mapping_context: bool,
    simple_key_context: bool,

    column: usize,
    whitespace: bool,
    indentation: bool,
    open_ended: bool,

    anchor_data: Option<AnchorAnalysis>,
    tag_data: Option<TagAnalysis>,
    scalar_data: ScalarAnalysis,
    scalar_style: ScalarStyle,
}

impl<'a> Emitter<'a> {
    /// Creates an emitter with the default [`EmitterConfig`].
    pub fn new(writer: &'a mut dyn fmt::Write) -> Self {
        Self::build(writer, EmitterConfig::default())
    }

    /// # Errors
    /// Returns [`YamlError::Emitter`] if `config` does not pass [`EmitterConfig::validate`].
    pub fn with_config(writer: &'a mut dyn fmt::Write, config: EmitterConfig) -> YamlResult<Self> {
        config.validate()?;
        Ok(Self::build(writer, config))
    }

    fn build(writer: &'a mut dyn fmt::Write, config: EmitterConfig) -> Self {
        Emitter {
            writer,
            config,
            state: EmitterState::StreamStart,
            states: Vec::new(),
            events: VecDeque::new(),
            indents: Vec::new(),
            tag_directives: Vec::new(),
            indent: -1,
            flow_level: 0,
            root_context: false,
            mapping_context: false,
            simple_key_context: false,
            column: 0,
            whitespace: true,
            indentation: true,
            open_ended: false,
            anchor_data: None,
            tag_data: None,
            scalar_data: ScalarAnalysis::default(),
            scalar_style: ScalarStyle::Any,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Queues `event` and writes every queued event whose layout is decided.
    ///
    /// # Errors
    /// Returns [`YamlError::Emitter`] for an event the stream does not allow at this point,
    /// an invalid anchor or tag, or a scalar with neither a tag nor an implicit flag.
    /// Write failures come back as [`YamlError::Fmt`].
    pub fn emit(&mut self, event: Event) -> ScanResult {
        self.events.push_back(event);
        while !self.need_more_events() {
            let Some(event) = self.events.pop_front() else {
                break;
            };
            self.analyze_event(&event)?;
            self.state_machine(event)?;
        }
        Ok(())
    }

    fn need_more_events(&self) -> bool {
        let Some(first) = self.events.front() else {
            return true;
        };
        let accumulate = match first {
            Event::DocumentStart(_) => 1,
            Event::SequenceStart(_) => 2,
            Event::MappingStart(_) => 3,
            _ => return false,
        };
        if self.events.len() > accumulate {
            return false;
        }
        let mut level = 0;
        for event in &self.events {
            level += event.nesting_delta();
            if level == 0 {
                return false;
            }
        }
        true
    }

    fn analyze_event(&mut self, event: &Event) -> ScanResult {
        self.anchor_data = None;
        self.tag_data = None;
        let canonical = self.config.canonical;
        match event {
            Event::Alias(name) => {
                self.anchor_data = Some(analyze_anchor(name, true)?);
            }
            Event::Scalar(scalar) => {
                self.scalar_data = analyze_scalar(&scalar.value, self.config.encoding);
                if let Some(anchor) = &scalar.anchor {
                    self.anchor_data = Some(analyze_anchor(anchor, false)?);
                }
                if let Some(tag) = &scalar.tag {
                    if canonical || (!scalar.plain_implicit && !scalar.quoted_implicit) {
                        self.tag_data = Some(analyze_tag(tag, &self.tag_directives)?);
                    }
                }
            }
            Event::SequenceStart(start) | Event::MappingStart(start) => {
                if let Some(anchor) = &start.anchor {
                    self.anchor_data = Some(analyze_anchor(anchor, false)?);
                }
                if let Some(tag) = &start.tag {
                    if canonical || !start.implicit {
                        self.tag_data = Some(analyze_tag(tag, &self.tag_directives)?);
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn state_machine(&mut self, event: Event) -> ScanResult {
        trace!("emitter {:?} <- {}", self.state, event.kind());
        match self.state {
            EmitterState::StreamStart => self.emit_stream_start(&event),
            EmitterState::FirstDocumentStart => self.emit_document_start(event, true),
            EmitterState::DocumentStart => self.emit_document_start(event, false),
            EmitterState::DocumentContent => self.emit_document_content(event),
            EmitterState::DocumentEnd => self.emit_document_end(&event),
            EmitterState::FlowSequenceFirstItem => self.emit_flow_sequence_item(event, true),
            EmitterState::FlowSequenceItem => self.emit_flow_sequence_item(event, false),
            EmitterState::FlowMappingFirstKey => self.emit_flow_mapping_key(event, true),
            EmitterState::FlowMappingKey => self.emit_flow_mapping_key(event, false),
            EmitterState::FlowMappingSimpleValue => self.emit_flow_mapping_value(event, true),
            EmitterState::FlowMappingValue => self.emit_flow_mapping_value(event, false),
            EmitterState::BlockSequenceFirstItem => self.emit_block_sequence_item(event, true),
            EmitterState::BlockSequenceItem => self.emit_block_sequence_item(event, false),
            EmitterState::BlockMappingFirstKey => self.emit_block_mapping_key(event, true),
            EmitterState::BlockMappingKey => self.emit_block_mapping_key(event, false),
            EmitterState::BlockMappingSimpleValue => self.emit_block_mapping_value(event, true),
            EmitterState::BlockMappingValue => self.emit_block_mapping_value(event, false),
            EmitterState::End => Err(unexpected("nothing", &event)),
        }
    }

    fn pop_state(&mut self) {
        self.state = self.states.pop().unwrap_or(EmitterState::End);
    }

    fn pop_indent(&mut self) {
        self.indent = self.indents.pop().unwrap_or(-1);
    }

    fn increase_indent(&mut self, flow: bool, indentless: bool) {
        self.indents.push(self.indent);
        if self.indent < 0 {
            self.indent = if flow {
                self.config.best_indent as isize
            } else {
                0
            };
        } else if !indentless || !self.config.force_indent_less {
            self.indent += self.config.best_indent as isize;
        }
    }

    fn emit_stream_start(&mut self, event: &Event) -> ScanResult {
        if !matches!(event, Event::StreamStart) {
            return Err(unexpected("STREAM-START", event));
        }
        self.indent = -1;
        self.column = 0;
        self.whitespace = true;
        self.indentation = true;
        self.state = EmitterState::FirstDocumentStart;
        Ok(())
    }

    fn emit_document_start(&mut self, event: Event, first: bool) -> ScanResult {
        match event {
            Event::DocumentStart(doc) => self.write_document_start(doc, first),
            Event::StreamEnd => {
                if self.open_ended {
                    self.write_indicator("...", true, false, false)?;
                    self.write_indent()?;
                }
                self.state = EmitterState::End;
                Ok(())
            }
            other => Err(unexpected("DOCUMENT-START or STREAM-END", &other)),
        }
    }

    fn write_document_start(&mut self, doc: DocumentStart, first: bool) -> ScanResult {
        let mut implicit = doc.implicit && first && !self.config.canonical;

        if (doc.version.is_some() || !doc.tags.is_empty()) && self.open_ended {
            self.write_indicator("...", true, false, false)?;
            self.write_indent()?;
        }

        if let Some(version) = doc.version {
            if !version.is_compatible() {
                return Err(YamlError::emit_err(&format!(
                    "incompatible %YAML directive {version}"
                )));
            }
            implicit = false;
            self.write_indicator("%YAML", true, false, false)?;
            self.write_indicator(&format!("{version}"), true, false, false)?;
            self.write_indent()?;
        }

        let mut declared = Vec::new();
        for tag in doc.tags {
            if self.append_tag_directive(&tag, false)? {
                declared.push(tag);
            }
        }
        for tag in TagDirective::default_directives() {
            self.append_tag_directive(&tag, true)?;
        }

        if !declared.is_empty() {
            implicit = false;
            for tag in &declared {
                self.write_indicator("%TAG", true, false, false)?;
                self.write_tag_handle(tag.handle())?;
                self.write_tag_content(tag.prefix(), true, true)?;
                self.write_indent()?;
            }
        }

        if self.check_empty_document() {
            implicit = false;
        }

        if !implicit {
            self.write_indent()?;
            self.write_indicator("---", true, false, false)?;
            if self.config.canonical {
                self.write_indent()?;
            }
        }

        self.state = EmitterState::DocumentContent;
        Ok(())
    }

    /// Returns whether `tag` is new. A handle already bound to another prefix is an error
    /// unless `allow_duplicates` is set, in which case the earlier binding wins.
    fn append_tag_directive(&mut self, tag: &TagDirective, allow_duplicates: bool) -> YamlResult<bool> {
        match self.tag_directives.iter().find(|t| t.handle() == tag.handle()) {
            Some(existing) if allow_duplicates || existing.prefix() == tag.prefix() => Ok(false),
            Some(_) => Err(YamlError::emit_err(&format!(
                "duplicate %TAG directive {}",
                tag.handle()
            ))),
            None => {
                self.tag_directives.push(tag.clone());
                Ok(true)
            }
        }
    }

    fn emit_document_content(&mut self, event: Event) -> ScanResult {
        self.states.push(EmitterState::DocumentEnd);
        self.emit_node(event, true, false, false)
    }

    fn emit_document_end(&mut self, event: &Event) -> ScanResult {
        let Event::DocumentEnd { implicit } = event else {
            return Err(unexpected("DOCUMENT-END", event));
        };
        self.write_indent()?;
        if !implicit {
            self.write_indicator("...", true, false, false)?;
            self.write_indent()?;
        }
        self.state = EmitterState::DocumentStart;
        self.tag_directives.clear();
        Ok(())
    }

    fn emit_flow_sequence_item(&mut self, event: Event, first: bool) -> ScanResult {
        if first {
            self.write_indicator("[", true, true, false)?;
            self.increase_indent(true, false);
            self.flow_level += 1;
        }

        if matches!(event, Event::SequenceEnd) {
            self.flow_level -= 1;
            self.pop_indent();
            if self.config.canonical && !first {
                self.write_indicator(",", false, false, false)?;
                self.write_indent()?;
            }
            self.write_indicator("]", false, false, false)?;
            self.pop_state();
            return Ok(());
        }

        if !first {
            self.write_indicator(",", false, false, false)?;
        }
        if self.config.canonical || self.column > self.config.best_width {
            self.write_indent()?;
        }
        self.states.push(EmitterState::FlowSequenceItem);
        self.emit_node(event, false, false, false)
    }

    fn emit_flow_mapping_key(&mut self, event: Event, first: bool) -> ScanResult {
        if first {
            self.write_indicator("{", true, true, false)?;
            self.increase_indent(true, false);
            self.flow_level += 1;
        }

        if matches!(event, Event::MappingEnd) {
            self.flow_level -= 1;
            self.pop_indent();
            if self.config.canonical && !first {
                self.write_indicator(",", false, false, false)?;
                self.write_indent()?;
            }
            self.write_indicator("}", false, false, false)?;
            self.pop_state();
            return Ok(());
        }

        if !first {
            self.write_indicator(",", false, false, false)?;
        }
        if self.config.canonical || self.column > self.config.best_width {
            self.write_indent()?;
        }
        if !self.config.canonical && self.check_simple_key(&event) {
            self.states.push(EmitterState::FlowMappingSimpleValue);
            self.emit_node(event, false, true, true)
        } else {
            self.write_indicator("?", true, false, false)?;
            self.states.push(EmitterState::FlowMappingValue);
            self.emit_node(event, false, true, false)
        }
    }

    fn emit_flow_mapping_value(&mut self, event: Event, simple: bool) -> ScanResult {
        if simple {
            self.write_indicator(":", false, false, false)?;
        } else {
            if self.config.canonical || self.column > self.config.best_width {
                self.write_indent()?;
            }
            self.write_indicator(":", true, false, false)?;
        }
        self.states.push(EmitterState::FlowMappingKey);
        self.emit_node(event, false, true, false)
    }

    fn emit_block_sequence_item(&mut self, event: Event, first: bool) -> ScanResult {
        if first {
            let indentless = self.mapping_context && !self.indentation;
            self.increase_indent(false, indentless);
        }

        if matches!(event, Event::SequenceEnd) {
            self.pop_indent();
            self.pop_state();
            return Ok(());
        }

        self.write_indent()?;
        self.write_indicator("-", true, false, true)?;
        self.states.push(EmitterState::BlockSequenceItem);
        self.emit_node(event, false, false, false)
    }

    fn emit_block_mapping_key(&mut self, event: Event, first: bool) -> ScanResult {
        if first {
            self.increase_indent(false, false);
        }

        if matches!(event, Event::MappingEnd) {
            self.pop_indent();
            self.pop_state();
            return Ok(());
        }

        self.write_indent()?;
        if self.check_simple_key(&event) {
            self.states.push(EmitterState::BlockMappingSimpleValue);
            self.emit_node(event, false, true, true)
        } else {
            self.write_indicator("?", true, false, true)?;
            self.states.push(EmitterState::BlockMappingValue);
            self.emit_node(event, false, true, false)
        }
    }

    fn emit_block_mapping_value(&mut self, event: Event, simple: bool) -> ScanResult {
        if simple {
            self.write_indicator(":", false, false, false)?;
        } else {
            self.write_indent()?;
            self.write_indicator(":", true, false, true)?;
        }
        self.states.push(EmitterState::BlockMappingKey);
        self.emit_node(event, false, true, false)
    }

    fn emit_node(&mut self, event: Event, root: bool, mapping: bool, simple_key: bool) -> ScanResult {
        self.root_context = root;
        self.mapping_context = mapping;
        self.simple_key_context = simple_key;

        match event {
            Event::Alias(_) => {
                self.process_anchor()?;
                self.pop_state();
                Ok(())
            }
            Event::Scalar(scalar) => self.emit_scalar(&scalar),
            Event::SequenceStart(start) => self.emit_sequence_start(&start),
            Event::MappingStart(start) => self.emit_mapping_start(&start),
            other => Err(unexpected(
                "SCALAR, SEQUENCE-START, MAPPING-START, or ALIAS",
                &other,
            )),
        }
    }

    fn emit_sequence_start(&mut self, start: &CollectionStart) -> ScanResult {
        self.process_anchor()?;
        self.process_tag()?;
        self.state = if self.flow_level > 0
            || self.config.canonical
            || start.style == CollectionStyle::Flow
            || self.check_empty_sequence()
        {
            EmitterState::FlowSequenceFirstItem
        } else {
            EmitterState::BlockSequenceFirstItem
        };
        Ok(())
    }

    fn emit_mapping_start(&mut self, start: &CollectionStart) -> ScanResult {
        self.process_anchor()?;
        self.process_tag()?;
        self.state = if self.flow_level > 0
            || self.config.canonical
            || start.style == CollectionStyle::Flow
            || self.check_empty_mapping()
        {
            EmitterState::FlowMappingFirstKey
        } else {
            EmitterState::BlockMappingFirstKey
        };
        Ok(())
    }

    fn emit_scalar(&mut self, scalar: &ScalarEvent) -> ScanResult {
        self.select_scalar_style(scalar)?;
        self.process_anchor()?;
        self.process_tag()?;
        self.increase_indent(true, false);
        self.process_scalar(&scalar.value)?;
        self.pop_indent();
        self.pop_state();
        Ok(())
    }

    fn select_scalar_style(&mut self, scalar: &ScalarEvent) -> ScanResult {
        let no_tag = self.tag_data.is_none();
        if no_tag && !scalar.plain_implicit && !scalar.quoted_implicit {
            return Err(YamlError::emit_err(
                "neither tag nor implicit flags are specified",
            ));
        }

        let analysis = self.scalar_data;
        let mut style = scalar.style;
        if style == ScalarStyle::Any {
            style = if analysis.multiline {
                ScalarStyle::Folded
            } else {
                ScalarStyle::Plain
            };
        }
        if self.config.canonical {
            style = ScalarStyle::DoubleQuoted;
        }
        if self.simple_key_context && (analysis.multiline || self.config.emit_key_quoted) {
            style = ScalarStyle::DoubleQuoted;
        }

        if style == ScalarStyle::Plain {
            let plain_allowed = if self.flow_level > 0 {
                analysis.flow_plain_allowed
            } else {
                analysis.block_plain_allowed
            };
            let empty_in_context =
                scalar.value.is_empty() && (self.flow_level > 0 || self.simple_key_context);
            if !plain_allowed || empty_in_context || (no_tag && !scalar.plain_implicit) {
                style = ScalarStyle::SingleQuoted;
            }
        }
        if style == ScalarStyle::SingleQuoted && !analysis.single_quoted_allowed {
            style = ScalarStyle::DoubleQuoted;
        }
        if matches!(style, ScalarStyle::Literal | ScalarStyle::Folded)
            && (self.flow_level > 0 || self.simple_key_context || !analysis.block_allowed)
        {
            style = ScalarStyle::DoubleQuoted;
        }
        if analysis.needs_double_quotes() {
            style = ScalarStyle::DoubleQuoted;
        }

        self.scalar_style = style;
        Ok(())
    }

    fn process_scalar(&mut self, value: &str) -> ScanResult {
        let allow_breaks = !self.simple_key_context;
        match self.scalar_style {
            ScalarStyle::Plain | ScalarStyle::Any => self.write_plain_scalar(value, allow_breaks),
            ScalarStyle::SingleQuoted => self.write_single_quoted_scalar(value, allow_breaks),
            ScalarStyle::DoubleQuoted => self.write_double_quoted_scalar(value, allow_breaks),
            ScalarStyle::Literal => self.write_literal_scalar(value),
            ScalarStyle::Folded => self.write_folded_scalar(value),
        }
    }

    fn process_anchor(&mut self) -> ScanResult {
        let Some(anchor) = self.anchor_data.take() else {
            return Ok(());
        };
        let indicator = if anchor.alias { "*" } else { "&" };
        self.write_indicator(indicator, true, false, false)?;
        self.write_str(&anchor.name)?;
        self.whitespace = false;
        self.indentation = false;
        Ok(())
    }

    fn process_tag(&mut self) -> ScanResult {
        match self.tag_data.take() {
            None => Ok(()),
            Some(TagAnalysis::Shorthand { handle, suffix }) => {
                self.write_tag_handle(&handle)?;
                if !suffix.is_empty() {
                    self.write_tag_content(&suffix, false, false)?;
                }
                Ok(())
            }
            Some(TagAnalysis::Verbatim(tag)) => {
                self.write_indicator("!<", true, false, false)?;
                self.write_tag_content(&tag, false, true)?;
                self.write_indicator(">", false, false, false)
            }
        }
    }

    fn check_empty_document(&self) -> bool {
        matches!(self.events.front(), Some(Event::Scalar(s)) if s.value.is_empty())
    }

    fn check_empty_sequence(&self) -> bool {
        matches!(self.events.front(), Some(Event::SequenceEnd))
    }

    fn check_empty_mapping(&self) -> bool {
        matches!(self.events.front(), Some(Event::MappingEnd))
    }

    /// Whether `event`, already analyzed, fits on one line before a `:`.
    fn check_simple_key(&self, event: &Event) -> bool {
        let anchor_len = self
            .anchor_data
            .as_ref()
            .map_or(0, |a| a.name.chars().count());
        let tag_len = self.tag_data.as_ref().map_or(0, TagAnalysis::len);
        let length = match event {
            Event::Alias(_) => anchor_len,
            Event::Scalar(scalar) => {
                if self.scalar_data.multiline {
                    return false;
                }
                anchor_len + tag_len + scalar.value.chars().count()
            }
            Event::SequenceStart(_) => {
                if !self.check_empty_sequence() {
                    return false;
                }
                anchor_len + tag_len
            }
            Event::MappingStart(_) => {
                if !self.check_empty_mapping() {
                    return false;
                }
                anchor_len + tag_len
            }
            _ => return false,
        };
        length <= MAX_SIMPLE_KEY_LENGTH
    }
}

impl Emit for Emitter<'_> {
    fn emit(&mut self, event: Event) -> ScanResult {
        Emitter::emit(self, event)
    }
}

fn unexpected(expected: &str, found: &Event) -> YamlError {
    YamlError::emit_err(&format!("expected {expected}, got {}", found.kind()))
}

/// Writes `events` into a new string.
///
/// # Errors
/// Returns the first error of [`EmitterConfig::validate`] or [`Emitter::emit`].
pub fn emit_events<I>(events: I, config: EmitterConfig) -> YamlResult<String>
where
    I: IntoIterator<Item = Event>,
{
    let mut out = String::new();
    let mut emitter = Emitter::with_config(&mut out, config)?;
    for event in events {
        emitter.emit(event)?;
    }
    Ok(out)
}
