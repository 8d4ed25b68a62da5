use super::Emitter;
use crate::tokenizer::char_utils::{is_break, is_printable, is_tag_char, is_uri_char};
use crate::{LookAhead, StrBuffer};
use alloc::format;
use yev_common::ScanResult;

impl Emitter<'_> {
    pub(super) fn write_char(&mut self, c: char) -> ScanResult {
        self.writer.write_char(c)?;
        self.column += 1;
        Ok(())
    }

    pub(super) fn write_str(&mut self, s: &str) -> ScanResult {
        self.writer.write_str(s)?;
        self.column += s.chars().count();
        Ok(())
    }

    pub(super) fn write_break(&mut self) -> ScanResult {
        self.writer.write_str(self.config.line_break.as_str())?;
        self.column = 0;
        Ok(())
    }

    pub(super) fn write_indicator(
        &mut self,
        indicator: &str,
        need_whitespace: bool,
        whitespace: bool,
        indentation: bool,
    ) -> ScanResult {
        if need_whitespace && !self.whitespace {
            self.write_char(' ')?;
        }
        self.write_str(indicator)?;
        self.whitespace = whitespace;
        self.indentation &= indentation;
        self.open_ended = false;
        Ok(())
    }

    /// Starts a new line unless the current one is still blank up to the indentation.
    pub(super) fn write_indent(&mut self) -> ScanResult {
        let indent = self.indent.max(0) as usize;
        if !self.indentation
            || self.column > indent
            || (self.column == indent && !self.whitespace)
        {
            self.write_break()?;
        }
        while self.column < indent {
            self.write_char(' ')?;
        }
        self.whitespace = true;
        self.indentation = true;
        Ok(())
    }

    pub(super) fn write_tag_handle(&mut self, handle: &str) -> ScanResult {
        if !self.whitespace {
            self.write_char(' ')?;
        }
        self.write_str(handle)?;
        self.whitespace = false;
        self.indentation = false;
        Ok(())
    }

    /// Writes a tag suffix, a verbatim tag or a directive prefix. Characters the scanner
    /// would not read back are percent-encoded, byte by byte.
    pub(super) fn write_tag_content(
        &mut self,
        value: &str,
        need_whitespace: bool,
        uri_chars: bool,
    ) -> ScanResult {
        if need_whitespace && !self.whitespace {
            self.write_char(' ')?;
        }
        for c in value.chars() {
            let raw = if uri_chars {
                is_uri_char(c)
            } else {
                is_tag_char(c)
            };
            if raw && c != '%' {
                self.write_char(c)?;
            } else {
                let mut utf8 = [0u8; 4];
                let escaped = urlencoding::encode(c.encode_utf8(&mut utf8));
                self.write_str(&escaped)?;
            }
        }
        self.whitespace = false;
        self.indentation = false;
        Ok(())
    }

    pub(super) fn write_plain_scalar(&mut self, value: &str, allow_breaks: bool) -> ScanResult {
        if !self.whitespace && (!value.is_empty() || self.flow_level > 0) {
            self.write_char(' ')?;
        }

        let mut spaces = false;
        let mut breaks = false;
        let mut buf = StrBuffer::new(value);
        while !buf.end_of_input() {
            let c = buf.peek();
            if c == ' ' {
                if allow_breaks
                    && !spaces
                    && self.column > self.config.best_width
                    && !buf.is_space_at(1)
                {
                    self.write_indent()?;
                } else {
                    self.write_char(c)?;
                }
                spaces = true;
            } else if is_break(c) {
                if !breaks && c == '\n' {
                    self.write_break()?;
                }
                self.write_break()?;
                self.indentation = true;
                breaks = true;
            } else {
                if breaks {
                    self.write_indent()?;
                }
                self.write_char(c)?;
                self.indentation = false;
                spaces = false;
                breaks = false;
            }
            buf.skip(1);
        }

        self.whitespace = false;
        self.indentation = false;
        if self.root_context {
            self.open_ended = true;
        }
        Ok(())
    }

    pub(super) fn write_single_quoted_scalar(
        &mut self,
        value: &str,
        allow_breaks: bool,
    ) -> ScanResult {
        self.write_indicator("'", true, false, false)?;

        let mut spaces = false;
        let mut breaks = false;
        let mut buf = StrBuffer::new(value);
        while !buf.end_of_input() {
            let c = buf.peek();
            if c == ' ' {
                if allow_breaks
                    && !spaces
                    && self.column > self.config.best_width
                    && buf.position() != 0
                    && !buf.is_outside(1)
                    && !buf.is_space_at(1)
                {
                    self.write_indent()?;
                } else {
                    self.write_char(c)?;
                }
                spaces = true;
            } else if is_break(c) {
                if !breaks && c == '\n' {
                    self.write_break()?;
                }
                self.write_break()?;
                self.indentation = true;
                breaks = true;
            } else {
                if breaks {
                    self.write_indent()?;
                }
                if c == '\'' {
                    self.write_char('\'')?;
                }
                self.write_char(c)?;
                self.indentation = false;
                spaces = false;
                breaks = false;
            }
            buf.skip(1);
        }

        // closing quote of a value ending in breaks goes on an indented line
        if breaks {
            self.write_indent()?;
        }
        self.write_indicator("'", false, false, false)
    }

    pub(super) fn write_double_quoted_scalar(
        &mut self,
        value: &str,
        allow_breaks: bool,
    ) -> ScanResult {
        self.write_indicator("\"", true, false, false)?;

        let encoding = self.config.encoding;
        let mut spaces = false;
        let mut buf = StrBuffer::new(value);
        while !buf.end_of_input() {
            let c = buf.peek();
            if !is_printable(c)
                || !encoding.can_encode(c)
                || is_break(c)
                || c == '\u{FEFF}'
                || c == '"'
                || c == '\\'
            {
                self.write_char('\\')?;
                match c {
                    '\0' => self.write_char('0')?,
                    '\u{7}' => self.write_char('a')?,
                    '\u{8}' => self.write_char('b')?,
                    '\t' => self.write_char('t')?,
                    '\n' => self.write_char('n')?,
                    '\u{B}' => self.write_char('v')?,
                    '\u{C}' => self.write_char('f')?,
                    '\r' => self.write_char('r')?,
                    '\u{1B}' => self.write_char('e')?,
                    '"' => self.write_char('"')?,
                    '\\' => self.write_char('\\')?,
                    '\u{85}' => self.write_char('N')?,
                    '\u{A0}' => self.write_char('_')?,
                    '\u{2028}' => self.write_char('L')?,
                    '\u{2029}' => self.write_char('P')?,
                    _ => {
                        let code = u32::from(c);
                        let escape = if code <= 0xFF {
                            format!("x{code:02X}")
                        } else if code <= 0xFFFF {
                            format!("u{code:04X}")
                        } else {
                            format!("U{code:08X}")
                        };
                        self.write_str(&escape)?;
                    }
                }
                spaces = false;
            } else if c == ' ' {
                if allow_breaks
                    && !spaces
                    && self.column > self.config.best_width
                    && buf.position() != 0
                    && !buf.is_outside(1)
                {
                    self.write_indent()?;
                    // leading spaces of a continuation line are dropped unless escaped
                    if buf.is_space_at(1) {
                        self.write_char('\\')?;
                    }
                } else {
                    self.write_char(c)?;
                }
                spaces = true;
            } else {
                self.write_char(c)?;
                spaces = false;
            }
            buf.skip(1);
        }

        self.write_indicator("\"", false, false, false)
    }

    /// Indentation and chomping indicators of a block scalar.
    fn write_block_scalar_hints(&mut self, value: &str) -> ScanResult {
        let buf = StrBuffer::new(value);
        // a leading tab needs an explicit indentation indicator
        if buf.is_space_at(0) || buf.is_break_at(0) || buf.next_is('\t') {
            let hint = format!("{}", self.config.best_indent);
            self.write_indicator(&hint, false, false, false)?;
        }

        self.open_ended = false;
        let len = buf.len();
        if len == 0 || !is_break(buf.char_at(len - 1)) {
            self.write_indicator("-", false, false, false)?;
        } else if len >= 2 && is_break(buf.char_at(len - 2)) {
            self.write_indicator("+", false, false, false)?;
            self.open_ended = true;
        }
        Ok(())
    }

    pub(super) fn write_literal_scalar(&mut self, value: &str) -> ScanResult {
        self.write_indicator("|", true, false, false)?;
        self.write_block_scalar_hints(value)?;
        self.write_break()?;
        self.indentation = true;
        self.whitespace = true;

        let mut breaks = true;
        let mut buf = StrBuffer::new(value);
        while !buf.end_of_input() {
            let c = buf.peek();
            if is_break(c) {
                self.write_break()?;
                self.indentation = true;
                breaks = true;
            } else {
                if breaks {
                    self.write_indent()?;
                }
                self.write_char(c)?;
                self.indentation = false;
                breaks = false;
            }
            buf.skip(1);
        }
        Ok(())
    }

    pub(super) fn write_folded_scalar(&mut self, value: &str) -> ScanResult {
        self.write_indicator(">", true, false, false)?;
        self.write_block_scalar_hints(value)?;
        self.write_break()?;
        self.indentation = true;
        self.whitespace = true;

        let mut breaks = true;
        let mut leading_spaces = true;
        let mut buf = StrBuffer::new(value);
        while !buf.end_of_input() {
            let c = buf.peek();
            if is_break(c) {
                // a single break between two text lines would fold into a space
                if !breaks && !leading_spaces && c == '\n' {
                    let mut k = 0;
                    while buf.is_break_at(k) {
                        k += 1;
                    }
                    if !buf.is_blank_or_breakz_at(k) {
                        self.write_break()?;
                    }
                }
                self.write_break()?;
                self.indentation = true;
                breaks = true;
            } else {
                if breaks {
                    self.write_indent()?;
                    leading_spaces = c == ' ' || c == '\t';
                }
                // more-indented lines are written unwrapped
                if !breaks
                    && !leading_spaces
                    && c == ' '
                    && !buf.is_outside(1)
                    && !buf.is_space_at(1)
                    && self.column > self.config.best_width
                {
                    self.write_indent()?;
                } else {
                    self.write_char(c)?;
                }
                self.indentation = false;
                breaks = false;
            }
            buf.skip(1);
        }
        Ok(())
    }
}
