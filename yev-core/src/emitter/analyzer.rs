use crate::tokenizer::char_utils::{is_break, is_printable, is_word_char};
use crate::{LookAhead, StrBuffer};
use alloc::format;
use alloc::string::{String, ToString};
use yev_common::{Encoding, TagDirective, YamlError, YamlResult};

/// Scalar styles a value can be written in without changing its content.
///
/// Computed once per scalar by [`analyze_scalar`]. The emitter combines it with the requested
/// style and the current context to pick the style actually written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ScalarAnalysis {
    pub multiline: bool,
    pub flow_plain_allowed: bool,
    pub block_plain_allowed: bool,
    pub single_quoted_allowed: bool,
    pub block_allowed: bool,
}

impl ScalarAnalysis {
    /// Only double quotes can write this value.
    #[must_use]
    pub fn needs_double_quotes(&self) -> bool {
        !self.flow_plain_allowed
            && !self.block_plain_allowed
            && !self.single_quoted_allowed
            && !self.block_allowed
    }
}

/// Classifies `value` for the output `encoding`.
///
/// Indicators restrict plain styles, leading or trailing blanks rule out plain, mixed space and
/// line break runs rule out the styles that would fold them, and characters that have to be
/// escaped leave only double quotes (and block styles, for multi-line values made of
/// printable text and tabs).
#[must_use]
pub fn analyze_scalar(value: &str, encoding: Encoding) -> ScalarAnalysis {
    if value.is_empty() {
        return ScalarAnalysis {
            multiline: false,
            flow_plain_allowed: false,
            block_plain_allowed: true,
            single_quoted_allowed: true,
            block_allowed: false,
        };
    }

    let mut block_indicators = false;
    let mut flow_indicators = false;
    let mut line_breaks = false;
    let mut special_characters = false;
    let mut raw_unsafe = false;

    let mut leading_space = false;
    let mut leading_break = false;
    let mut trailing_space = false;
    let mut trailing_break = false;
    let mut break_space = false;
    let mut space_break = false;

    let mut previous_space = false;
    let mut previous_break = false;

    if value.starts_with("---") || value.starts_with("...") {
        block_indicators = true;
        flow_indicators = true;
    }

    let mut buf = StrBuffer::new(value);
    let len = buf.len();
    let mut preceded_by_whitespace = true;

    while !buf.end_of_input() {
        let c = buf.peek();
        let first = buf.position() == 0;
        let last = buf.position() + 1 == len;
        let followed_by_whitespace = buf.is_blank_or_breakz_at(1);

        if first {
            match c {
                '#' | ',' | '[' | ']' | '{' | '}' | '&' | '*' | '!' | '|' | '>' | '\'' | '"'
                | '%' | '@' | '`' => {
                    flow_indicators = true;
                    block_indicators = true;
                }
                '?' | ':' => {
                    flow_indicators = true;
                    if followed_by_whitespace {
                        block_indicators = true;
                    }
                }
                '-' if followed_by_whitespace => {
                    flow_indicators = true;
                    block_indicators = true;
                }
                _ => {}
            }
        } else {
            match c {
                ',' | '?' | '[' | ']' | '{' | '}' => flow_indicators = true,
                ':' => {
                    flow_indicators = true;
                    if followed_by_whitespace {
                        block_indicators = true;
                    }
                }
                '#' if preceded_by_whitespace => {
                    flow_indicators = true;
                    block_indicators = true;
                }
                _ => {}
            }
        }

        // Outside double quotes '\n' is the only break that reads back unchanged.
        if (!is_printable(c) && c != '\t' && c != '\n')
            || (is_break(c) && c != '\n')
            || c == '\u{FEFF}'
            || !encoding.can_encode(c)
        {
            special_characters = true;
            raw_unsafe = true;
        } else if !is_printable(c) {
            special_characters = true;
        }

        if is_break(c) {
            line_breaks = true;
        }

        if c == ' ' {
            if first {
                leading_space = true;
            }
            if last {
                trailing_space = true;
            }
            if previous_break {
                break_space = true;
            }
            previous_space = true;
            previous_break = false;
        } else if is_break(c) {
            if first {
                leading_break = true;
            }
            if last {
                trailing_break = true;
            }
            if previous_space {
                space_break = true;
            }
            previous_space = false;
            previous_break = true;
        } else {
            previous_space = false;
            previous_break = false;
        }

        preceded_by_whitespace = c == ' ' || c == '\t' || is_break(c);
        buf.skip(1);
    }

    let mut analysis = ScalarAnalysis {
        multiline: line_breaks,
        flow_plain_allowed: true,
        block_plain_allowed: true,
        single_quoted_allowed: true,
        block_allowed: true,
    };

    if leading_space || leading_break || trailing_space || trailing_break {
        analysis.flow_plain_allowed = false;
        analysis.block_plain_allowed = false;
    }
    if trailing_space {
        analysis.block_allowed = false;
    }
    if break_space {
        analysis.flow_plain_allowed = false;
        analysis.block_plain_allowed = false;
        analysis.single_quoted_allowed = false;
    }
    if space_break {
        analysis.flow_plain_allowed = false;
        analysis.block_plain_allowed = false;
        analysis.single_quoted_allowed = false;
        analysis.block_allowed = false;
    }
    if special_characters {
        analysis.flow_plain_allowed = false;
        analysis.block_plain_allowed = false;
        analysis.single_quoted_allowed = false;
        if !line_breaks || len == 1 || raw_unsafe {
            analysis.block_allowed = false;
        }
    }
    if line_breaks {
        analysis.flow_plain_allowed = false;
        analysis.block_plain_allowed = false;
    }
    if flow_indicators {
        analysis.flow_plain_allowed = false;
    }
    if block_indicators {
        analysis.block_plain_allowed = false;
    }
    analysis
}

/// A checked anchor or alias name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnchorAnalysis {
    pub name: String,
    pub alias: bool,
}

/// # Errors
/// Returns [`YamlError::Emitter`] for an empty name or one with characters other than
/// alphanumericals, `-` and `_`.
pub fn analyze_anchor(name: &str, alias: bool) -> YamlResult<AnchorAnalysis> {
    let what = if alias { "alias" } else { "anchor" };
    if name.is_empty() {
        return Err(YamlError::emit_err(&format!("{what} value must not be empty")));
    }
    if !name.chars().all(is_word_char) {
        return Err(YamlError::emit_err(&format!(
            "{what} value must contain alphanumerical characters only"
        )));
    }
    Ok(AnchorAnalysis {
        name: name.to_string(),
        alias,
    })
}

/// How a tag is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagAnalysis {
    /// `handle` followed by the URI-escaped `suffix`, like `!!str`.
    Shorthand { handle: String, suffix: String },
    /// `!<tag>`, for tags no directive prefix matches.
    Verbatim(String),
}

impl TagAnalysis {
    /// Characters the tag takes before escaping.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            TagAnalysis::Shorthand { handle, suffix } => {
                handle.chars().count() + suffix.chars().count()
            }
            TagAnalysis::Verbatim(tag) => tag.chars().count() + 3,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits `tag` into the handle of the first directive whose prefix starts it and the rest.
///
/// # Errors
/// Returns [`YamlError::Emitter`] for an empty tag.
pub fn analyze_tag(tag: &str, directives: &[TagDirective]) -> YamlResult<TagAnalysis> {
    if tag.is_empty() {
        return Err(YamlError::emit_err("tag value must not be empty"));
    }
    for directive in directives {
        let Some(suffix) = tag.strip_prefix(directive.prefix()) else {
            continue;
        };
        // `!!` alone would not read back as a tag
        if suffix.is_empty() && directive.handle() != "!" {
            continue;
        }
        return Ok(TagAnalysis::Shorthand {
            handle: directive.handle().to_string(),
            suffix: suffix.to_string(),
        });
    }
    Ok(TagAnalysis::Verbatim(tag.to_string()))
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::vec;

    fn allowed(value: &str) -> (bool, bool, bool, bool) {
        let a = analyze_scalar(value, Encoding::Utf8);
        (
            a.flow_plain_allowed,
            a.block_plain_allowed,
            a.single_quoted_allowed,
            a.block_allowed,
        )
    }

    #[test]
    fn plain_text() {
        assert_eq!(allowed("hello world"), (true, true, true, true));
        assert!(!analyze_scalar("hello", Encoding::Utf8).multiline);
        assert_eq!(allowed("a:b"), (false, true, true, true));
        assert_eq!(allowed("a, b"), (false, true, true, true));
    }

    #[test]
    fn empty_value() {
        let a = analyze_scalar("", Encoding::Utf8);
        assert!(!a.multiline);
        assert!(!a.flow_plain_allowed);
        assert!(a.block_plain_allowed);
        assert!(a.single_quoted_allowed);
        assert!(!a.block_allowed);
    }

    #[test]
    fn indicators() {
        assert_eq!(allowed("- item"), (false, false, true, true));
        assert_eq!(allowed("-item"), (true, true, true, true));
        assert_eq!(allowed("key: value"), (false, false, true, true));
        assert_eq!(allowed("? x"), (false, false, true, true));
        assert_eq!(allowed("?x"), (false, true, true, true));
        assert_eq!(allowed("&anchor"), (false, false, true, true));
        assert_eq!(allowed("'quoted"), (false, false, true, true));
        assert_eq!(allowed("a #comment"), (false, false, true, true));
        assert_eq!(allowed("a#b"), (true, true, true, true));
        assert_eq!(allowed("--- x"), (false, false, true, true));
        assert_eq!(allowed("...x"), (false, false, true, true));
    }

    #[test]
    fn surrounding_whitespace() {
        assert_eq!(allowed(" lead"), (false, false, true, true));
        assert_eq!(allowed("trail "), (false, false, true, false));
        assert_eq!(allowed("trail\n"), (false, false, false, true));
        assert!(analyze_scalar("trail\n", Encoding::Utf8).multiline);
    }

    #[test]
    fn mixed_space_and_breaks() {
        // space after a break
        assert_eq!(allowed("a\n b"), (false, false, false, true));
        // space before a break
        assert_eq!(allowed("a \nb"), (false, false, false, false));
        assert_eq!(allowed("hello\nworld"), (false, false, false, true));
    }

    #[test]
    fn special_characters() {
        assert_eq!(allowed("tab\there"), (false, false, false, false));
        assert_eq!(allowed("tab\there\nx"), (false, false, false, true));
        assert_eq!(allowed("bell\u{7}\nx"), (false, false, false, false));
        assert_eq!(allowed("cr\r\nx"), (false, false, false, false));
        assert_eq!(allowed("\u{FEFF}bom"), (false, false, false, false));
        assert!(analyze_scalar("bell\u{7}", Encoding::Utf8).needs_double_quotes());
    }

    #[test]
    fn unencodable_characters() {
        assert_eq!(allowed("Yo\u{2665}"), (true, true, true, true));
        let ascii = analyze_scalar("Yo\u{2665}", Encoding::Ascii);
        assert!(ascii.needs_double_quotes());
        let latin = analyze_scalar("Ça va", Encoding::Latin1);
        assert!(latin.block_plain_allowed);
        assert!(latin.single_quoted_allowed);
    }

    #[test]
    fn anchors() {
        assert_eq!(
            analyze_anchor("a-1_b", false).unwrap(),
            AnchorAnalysis {
                name: "a-1_b".to_string(),
                alias: false
            }
        );
        assert!(analyze_anchor("x", true).unwrap().alias);
        assert_eq!(
            analyze_anchor("", true).unwrap_err().message(),
            "alias value must not be empty"
        );
        assert!(analyze_anchor("a b", false).is_err());
        assert!(analyze_anchor("a:", false).is_err());
    }

    #[test]
    fn tags() {
        let directives = TagDirective::default_directives();
        assert_eq!(
            analyze_tag("tag:yaml.org,2002:str", &directives).unwrap(),
            TagAnalysis::Shorthand {
                handle: "!!".to_string(),
                suffix: "str".to_string()
            }
        );
        assert_eq!(
            analyze_tag("!local", &directives).unwrap(),
            TagAnalysis::Shorthand {
                handle: "!".to_string(),
                suffix: "local".to_string()
            }
        );
        assert_eq!(
            analyze_tag("!", &directives).unwrap(),
            TagAnalysis::Shorthand {
                handle: "!".to_string(),
                suffix: String::new()
            }
        );
        assert_eq!(
            analyze_tag("tag:example.com,2000:x", &directives).unwrap(),
            TagAnalysis::Verbatim("tag:example.com,2000:x".to_string())
        );
        assert_eq!(
            analyze_tag("tag:yaml.org,2002:", &directives).unwrap(),
            TagAnalysis::Verbatim("tag:yaml.org,2002:".to_string())
        );
        assert!(analyze_tag("", &directives).is_err());
    }

    #[test]
    fn tags_prefer_earlier_directives() {
        let directives = vec![
            TagDirective::new("!e!", "tag:example.com,2000:").unwrap(),
            TagDirective::new("!!", "tag:example.com,2000:app/").unwrap(),
        ];
        assert_eq!(
            analyze_tag("tag:example.com,2000:app/foo", &directives).unwrap(),
            TagAnalysis::Shorthand {
                handle: "!e!".to_string(),
                suffix: "app/foo".to_string()
            }
        );
    }
}
