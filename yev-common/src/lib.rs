extern crate core;

pub mod encoding;
pub mod event;

pub use encoding::Encoding;
pub use event::{CollectionStart, DocumentStart, Event, EventKind, ScalarEvent};

use std::fmt::{Display, Formatter};
use thiserror::Error;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash)]
pub enum ScalarStyle {
    /// Let the emitter pick a style from the scalar content.
    #[default]
    Any,
    /// Unquoted string type like:
    /// ```yaml
    ///   multiline
    ///   string
    /// ```
    Plain,
    /// Single quote string which permits any printable symbol inside
    /// E.g. :
    /// ```yaml
    /// ' This is a quoted string
    ///    with ''quoted'' string within.'
    /// ```
    SingleQuoted,
    /// Double quote string which permits escapes
    /// E.g. :
    /// ```yaml
    /// "This is a quoted string
    ///    with \"double quoted\" string within."
    /// ```
    DoubleQuoted,
    /// Literal string type like:
    /// ```yaml
    ///   |
    ///     literal
    ///     string
    /// ```
    Literal,
    /// Folded string type like:
    /// ```yaml
    ///   >
    ///     folded
    ///     string
    /// ```
    Folded,
}

impl Display for ScalarStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ScalarStyle::Any | ScalarStyle::Plain => write!(f, ":"),
            ScalarStyle::Folded => write!(f, ">"),
            ScalarStyle::Literal => write!(f, "|"),
            ScalarStyle::SingleQuoted => write!(f, "'"),
            ScalarStyle::DoubleQuoted => write!(f, "\""),
        }
    }
}

/// Presentation of a sequence or a mapping.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash)]
pub enum CollectionStyle {
    #[default]
    Any,
    Block,
    Flow,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TokenType {
    StreamStart,
    StreamEnd,
    VersionDirective {
        major: u32,
        minor: u32,
    },
    TagDirective {
        handle: String,
        prefix: String,
    },
    DocumentStart,
    DocumentEnd,
    BlockSequenceStart,
    BlockMappingStart,
    BlockEnd,
    FlowSequenceStart,
    FlowSequenceEnd,
    FlowMappingStart,
    FlowMappingEnd,
    BlockEntry,
    FlowEntry,
    Key,
    Value,
    Alias(String),
    Anchor(String),
    Tag {
        handle: String,
        suffix: String,
    },
    Scalar {
        style: ScalarStyle,
        value: String,
    },
}

impl TokenType {
    /// Human readable token name used in parser diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::StreamStart => "<stream start>",
            TokenType::StreamEnd => "<stream end>",
            TokenType::VersionDirective { .. } => "%YAML directive",
            TokenType::TagDirective { .. } => "%TAG directive",
            TokenType::DocumentStart => "<document start>",
            TokenType::DocumentEnd => "<document end>",
            TokenType::BlockSequenceStart => "<block sequence start>",
            TokenType::BlockMappingStart => "<block mapping start>",
            TokenType::BlockEnd => "<block end>",
            TokenType::FlowSequenceStart => "'['",
            TokenType::FlowSequenceEnd => "']'",
            TokenType::FlowMappingStart => "'{'",
            TokenType::FlowMappingEnd => "'}'",
            TokenType::BlockEntry => "'-'",
            TokenType::FlowEntry => "','",
            TokenType::Key => "'?'",
            TokenType::Value => "':'",
            TokenType::Alias(_) => "alias",
            TokenType::Anchor(_) => "anchor",
            TokenType::Tag { .. } => "tag",
            TokenType::Scalar { .. } => "scalar",
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ChompIndicator {
    /// `-` final line break and any trailing empty lines are excluded from the scalar’s content
    Strip,
    ///  ` ` final line break character is preserved in the scalar’s content
    Clip,
    /// `+` final line break and any trailing empty lines are considered to be part of the scalar’s content
    Keep,
}

#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Marker {
    /// Index in characters of the input.
    pub pos: usize,
    /// Line of mark. One indexed.
    pub line: u32,
    /// Column of mark. Zero indexed.
    pub col: u32,
}

impl Marker {
    #[must_use]
    pub fn new(pos: usize, line: u32, col: u32) -> Self {
        Marker { pos, line, col }
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} column {}", self.line, self.col + 1)
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Eq, Default, Hash)]
pub struct Span {
    pub start: Marker,
    pub end: Marker,
}

impl Span {
    #[must_use]
    pub fn new(start: Marker, end: Marker) -> Self {
        Span { start, end }
    }

    #[must_use]
    pub fn empty(mark: Marker) -> Self {
        Span {
            start: mark,
            end: mark,
        }
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{} - {}", self.start, self.end)
        }
    }
}

/// A `%YAML major.minor` directive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct VersionDirective {
    pub major: u32,
    pub minor: u32,
}

impl VersionDirective {
    pub const V1_1: VersionDirective = VersionDirective { major: 1, minor: 1 };

    #[must_use]
    pub fn new(major: u32, minor: u32) -> Self {
        VersionDirective { major, minor }
    }

    /// Versions this crate reads and writes. `1.2` documents are handled with 1.1 rules.
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.major == 1 && (self.minor == 1 || self.minor == 2)
    }
}

impl Display for VersionDirective {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// A `%TAG handle prefix` directive.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct TagDirective {
    handle: String,
    prefix: String,
}

impl TagDirective {
    /// Creates a directive, checking the handle against `^!([0-9A-Za-z_-]*!)?$`.
    ///
    /// # Errors
    /// Returns [`YamlError::Emitter`] for a malformed handle or an empty prefix.
    pub fn new(handle: &str, prefix: &str) -> YamlResult<Self> {
        if !Self::is_valid_handle(handle) {
            return Err(YamlError::emit_err(&format!(
                "tag handle '{handle}' must start with '!', end with '!' and contain only alphanumerical characters, '_' or '-'"
            )));
        }
        if prefix.is_empty() {
            return Err(YamlError::emit_err("tag prefix must not be empty"));
        }
        Ok(TagDirective {
            handle: handle.to_string(),
            prefix: prefix.to_string(),
        })
    }

    pub(crate) fn new_unchecked(handle: &str, prefix: &str) -> Self {
        TagDirective {
            handle: handle.to_string(),
            prefix: prefix.to_string(),
        }
    }

    /// The `!` and `!!` directives every document starts with.
    #[must_use]
    pub fn default_directives() -> [TagDirective; 2] {
        [
            TagDirective::new_unchecked("!", "!"),
            TagDirective::new_unchecked("!!", "tag:yaml.org,2002:"),
        ]
    }

    #[must_use]
    pub fn is_valid_handle(handle: &str) -> bool {
        let Some(rest) = handle.strip_prefix('!') else {
            return false;
        };
        if rest.is_empty() {
            return true;
        }
        match rest.strip_suffix('!') {
            Some(word) => word
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
            None => false,
        }
    }

    #[must_use]
    pub fn handle(&self) -> &str {
        &self.handle
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Display for TagDirective {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "%TAG {} {}", self.handle, self.prefix)
    }
}

/// A specialized `Result` type where the error is hard-wired to [`YamlError`].
pub type YamlResult<T> = Result<T, YamlError>;
pub type ScanResult = Result<(), YamlError>;

/// The one error kind of the crate family. Callers inspect [`YamlError::message`]
/// and [`YamlError::span`].
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum YamlError {
    /// Malformed characters, indicators, indentation or scalars.
    #[error("{info} at {span}")]
    Scanner { span: Span, info: String },
    /// A token that the grammar does not allow at this point, or a bad directive.
    #[error("{info} at {span}")]
    Parser { span: Span, info: String },
    /// An event the emitter cannot accept in its current state, or a bad configuration.
    #[error("{info}")]
    Emitter { info: String },
    /// Input bytes that are not valid in the sniffed encoding.
    #[error("invalid input: {info}")]
    NonDecodable { info: String },
    #[error("failed to write YAML output")]
    Fmt(#[from] std::fmt::Error),
}

impl YamlError {
    pub fn new_str(marker: Marker, info: &str) -> Self {
        YamlError::Scanner {
            span: Span::empty(marker),
            info: info.to_string(),
        }
    }

    pub fn parse_err(span: Span, info: &str) -> Self {
        YamlError::Parser {
            span,
            info: info.to_string(),
        }
    }

    pub fn emit_err(info: &str) -> Self {
        YamlError::Emitter {
            info: info.to_string(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            YamlError::Scanner { info, .. }
            | YamlError::Parser { info, .. }
            | YamlError::Emitter { info }
            | YamlError::NonDecodable { info } => info,
            YamlError::Fmt(_) => "failed to write YAML output",
        }
    }

    #[must_use]
    pub fn span(&self) -> Option<Span> {
        match self {
            YamlError::Scanner { span, .. } | YamlError::Parser { span, .. } => Some(*span),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tag_handle_grammar() {
        assert!(TagDirective::is_valid_handle("!"));
        assert!(TagDirective::is_valid_handle("!!"));
        assert!(TagDirective::is_valid_handle("!e-x_1!"));
        assert!(!TagDirective::is_valid_handle("e!"));
        assert!(!TagDirective::is_valid_handle("!e"));
        assert!(!TagDirective::is_valid_handle("!e.x!"));
        assert!(TagDirective::new("!e!", "").is_err());
    }

    #[test]
    fn error_view() {
        let mark = Marker::new(4, 2, 3);
        let err = YamlError::new_str(mark, "found a tab");
        assert_eq!(err.message(), "found a tab");
        assert_eq!(err.span(), Some(Span::empty(mark)));
        assert_eq!(err.to_string(), "found a tab at line 2 column 4");
        assert_eq!(YamlError::emit_err("x").span(), None);
    }
}
