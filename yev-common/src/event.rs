use std::fmt::{Display, Formatter, Write};

use crate::{CollectionStyle, ScalarStyle, TagDirective, VersionDirective};

/// A parsing event. Events are plain values; the position of a parsed event
/// travels next to it as a [`crate::Span`].
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Event {
    StreamStart,
    StreamEnd,
    DocumentStart(DocumentStart),
    DocumentEnd {
        implicit: bool,
    },
    MappingStart(CollectionStart),
    MappingEnd,
    SequenceStart(CollectionStart),
    SequenceEnd,
    Scalar(ScalarEvent),
    /// Reference to an anchor, by name.
    Alias(String),
}

/// Variant of an [`Event`] without its payload.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum EventKind {
    StreamStart,
    StreamEnd,
    DocumentStart,
    DocumentEnd,
    MappingStart,
    MappingEnd,
    SequenceStart,
    SequenceEnd,
    Scalar,
    Alias,
}

impl Display for EventKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventKind::StreamStart => "STREAM-START",
            EventKind::StreamEnd => "STREAM-END",
            EventKind::DocumentStart => "DOCUMENT-START",
            EventKind::DocumentEnd => "DOCUMENT-END",
            EventKind::MappingStart => "MAPPING-START",
            EventKind::MappingEnd => "MAPPING-END",
            EventKind::SequenceStart => "SEQUENCE-START",
            EventKind::SequenceEnd => "SEQUENCE-END",
            EventKind::Scalar => "SCALAR",
            EventKind::Alias => "ALIAS",
        };
        f.write_str(name)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Hash)]
pub struct DocumentStart {
    pub version: Option<VersionDirective>,
    pub tags: Vec<TagDirective>,
    pub implicit: bool,
}

impl DocumentStart {
    #[must_use]
    pub fn implicit() -> Self {
        DocumentStart {
            version: None,
            tags: Vec::new(),
            implicit: true,
        }
    }

    #[must_use]
    pub fn explicit() -> Self {
        DocumentStart {
            version: None,
            tags: Vec::new(),
            implicit: false,
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: VersionDirective) -> Self {
        self.version = Some(version);
        self
    }

    #[must_use]
    pub fn with_tag_directives(mut self, tags: Vec<TagDirective>) -> Self {
        self.tags = tags;
        self
    }
}

/// Payload shared by `MappingStart` and `SequenceStart`.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct CollectionStart {
    pub anchor: Option<String>,
    pub tag: Option<String>,
    pub implicit: bool,
    pub style: CollectionStyle,
}

impl Default for CollectionStart {
    fn default() -> Self {
        CollectionStart::new()
    }
}

impl CollectionStart {
    #[must_use]
    pub fn new() -> Self {
        CollectionStart {
            anchor: None,
            tag: None,
            implicit: true,
            style: CollectionStyle::Any,
        }
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: &str) -> Self {
        self.anchor = Some(anchor.to_string());
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    #[must_use]
    pub fn with_implicit(mut self, implicit: bool) -> Self {
        self.implicit = implicit;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: CollectionStyle) -> Self {
        self.style = style;
        self
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct ScalarEvent {
    pub anchor: Option<String>,
    pub tag: Option<String>,
    pub value: String,
    pub style: ScalarStyle,
    /// The tag may be omitted when written plain.
    pub plain_implicit: bool,
    /// The tag may be omitted when written in any non-plain style.
    pub quoted_implicit: bool,
}

impl ScalarEvent {
    /// An untagged scalar, implicit in every style.
    #[must_use]
    pub fn new(value: &str) -> Self {
        ScalarEvent {
            anchor: None,
            tag: None,
            value: value.to_string(),
            style: ScalarStyle::Any,
            plain_implicit: true,
            quoted_implicit: true,
        }
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: &str) -> Self {
        self.anchor = Some(anchor.to_string());
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ScalarStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_implicit(mut self, plain_implicit: bool, quoted_implicit: bool) -> Self {
        self.plain_implicit = plain_implicit;
        self.quoted_implicit = quoted_implicit;
        self
    }
}

impl Event {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Event::StreamStart => EventKind::StreamStart,
            Event::StreamEnd => EventKind::StreamEnd,
            Event::DocumentStart(_) => EventKind::DocumentStart,
            Event::DocumentEnd { .. } => EventKind::DocumentEnd,
            Event::MappingStart(_) => EventKind::MappingStart,
            Event::MappingEnd => EventKind::MappingEnd,
            Event::SequenceStart(_) => EventKind::SequenceStart,
            Event::SequenceEnd => EventKind::SequenceEnd,
            Event::Scalar(_) => EventKind::Scalar,
            Event::Alias(_) => EventKind::Alias,
        }
    }

    /// `1` for events opening a level, `-1` for events closing one.
    #[must_use]
    pub fn nesting_delta(&self) -> i32 {
        match self {
            Event::StreamStart
            | Event::DocumentStart(_)
            | Event::MappingStart(_)
            | Event::SequenceStart(_) => 1,
            Event::StreamEnd
            | Event::DocumentEnd { .. }
            | Event::MappingEnd
            | Event::SequenceEnd => -1,
            Event::Scalar(_) | Event::Alias(_) => 0,
        }
    }

    /// Shorthand for a plain-implicit scalar with a requested style.
    #[must_use]
    pub fn scalar(value: &str, style: ScalarStyle) -> Self {
        Event::Scalar(ScalarEvent::new(value).with_style(style))
    }

    #[must_use]
    pub fn sequence_start(style: CollectionStyle) -> Self {
        Event::SequenceStart(CollectionStart::new().with_style(style))
    }

    #[must_use]
    pub fn mapping_start(style: CollectionStyle) -> Self {
        Event::MappingStart(CollectionStart::new().with_style(style))
    }

    #[must_use]
    pub fn anchor(&self) -> Option<&str> {
        match self {
            Event::MappingStart(c) | Event::SequenceStart(c) => c.anchor.as_deref(),
            Event::Scalar(s) => s.anchor.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Event::MappingStart(c) | Event::SequenceStart(c) => c.tag.as_deref(),
            Event::Scalar(s) => s.tag.as_deref(),
            _ => None,
        }
    }
}

fn write_properties(f: &mut Formatter<'_>, anchor: Option<&str>, tag: Option<&str>) -> std::fmt::Result {
    if let Some(anchor) = anchor {
        write!(f, " &{anchor}")?;
    }
    if let Some(tag) = tag {
        write!(f, " <{tag}>")?;
    }
    Ok(())
}

fn write_escaped(f: &mut Formatter<'_>, value: &str) -> std::fmt::Result {
    for ch in value.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{8}' => f.write_str("\\b")?,
            _ => f.write_char(ch)?,
        }
    }
    Ok(())
}

/// Renders events in the yaml-test-suite event notation.
impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::StreamStart => f.write_str("+STR"),
            Event::StreamEnd => f.write_str("-STR"),
            Event::DocumentStart(doc) if doc.implicit => f.write_str("+DOC"),
            Event::DocumentStart(_) => f.write_str("+DOC ---"),
            Event::DocumentEnd { implicit: true } => f.write_str("-DOC"),
            Event::DocumentEnd { implicit: false } => f.write_str("-DOC ..."),
            Event::MappingStart(start) => {
                f.write_str("+MAP")?;
                if start.style == CollectionStyle::Flow {
                    f.write_str(" {}")?;
                }
                write_properties(f, start.anchor.as_deref(), start.tag.as_deref())
            }
            Event::MappingEnd => f.write_str("-MAP"),
            Event::SequenceStart(start) => {
                f.write_str("+SEQ")?;
                if start.style == CollectionStyle::Flow {
                    f.write_str(" []")?;
                }
                write_properties(f, start.anchor.as_deref(), start.tag.as_deref())
            }
            Event::SequenceEnd => f.write_str("-SEQ"),
            Event::Scalar(scalar) => {
                f.write_str("=VAL")?;
                write_properties(f, scalar.anchor.as_deref(), scalar.tag.as_deref())?;
                write!(f, " {}", scalar.style)?;
                write_escaped(f, &scalar.value)
            }
            Event::Alias(anchor) => write!(f, "=ALI *{anchor}"),
        }
    }
}
