use crate::tokenizer::char_utils::{
    is_blank, is_blank_or_break, is_blank_or_breakz, is_break, is_breakz, is_flow,
};
use alloc::vec::Vec;

///
/// Bounded character lookahead shared by the scanner and the emitter's scalar analysis.
///
/// # Methods
/// ## Peeking
/// - `peek_nth(n)`: character `n` positions ahead. Past the end of input it returns `'\0'`;
///   callers that must tell a real `'\0'` apart check [`LookAhead::is_outside`] first.
/// - `lookahead(n)`: makes sure `n` characters are available to `peek_nth`. Sources that hold
///   their whole input implement it as a no-op.
///
/// ## Classification
/// - `is_break_at`, `is_space_at`: classify the character at an offset, `false` outside of
///   the input.
/// - `next_is_*`: scanner shorthands for the current character, where `'\0'` stands for the end.
pub trait LookAhead {
    #[must_use]
    fn peek_nth(&self, n: usize) -> char;

    fn skip(&mut self, n: usize);

    #[must_use]
    fn is_outside(&self, n: usize) -> bool;

    fn lookahead(&mut self, count: usize);

    #[must_use]
    fn peek(&self) -> char {
        self.peek_nth(0)
    }

    #[must_use]
    fn end_of_input(&self) -> bool {
        self.is_outside(0)
    }


    #[must_use]
    fn is_break_at(&self, n: usize) -> bool {
        !self.is_outside(n) && is_break(self.peek_nth(n))
    }


    #[must_use]
    fn is_space_at(&self, n: usize) -> bool {
        !self.is_outside(n) && self.peek_nth(n) == ' '
    }


    /// Blank, break or outside of the input.
    #[must_use]
    fn is_blank_or_breakz_at(&self, n: usize) -> bool {
        self.is_outside(n) || is_blank_or_break(self.peek_nth(n))
    }

    #[must_use]
    fn next_is(&self, c: char) -> bool {
        self.peek() == c
    }

    #[must_use]
    fn next_is_blank(&self) -> bool {
        is_blank(self.peek())
    }

    #[must_use]
    fn next_is_break(&self) -> bool {
        is_break(self.peek())
    }

    #[must_use]
    fn next_is_breakz(&self) -> bool {
        is_breakz(self.peek())
    }


    #[must_use]
    fn next_is_blank_or_breakz(&self) -> bool {
        is_blank_or_breakz(self.peek())
    }

    #[must_use]
    fn next_is_flow(&self) -> bool {
        is_flow(self.peek())
    }

    #[must_use]
    fn next_is_digit(&self) -> bool {
        self.peek().is_ascii_digit()
    }

    #[must_use]
    fn next_is_three(&self, c: char) -> bool {
        self.peek_nth(0) == c && self.peek_nth(1) == c && self.peek_nth(2) == c
    }

    /// `---` or `...` followed by a blank, a break or the end. Needs four characters of lookahead.
    #[must_use]
    fn next_is_document_indicator(&self) -> bool {
        (self.next_is_three('-') || self.next_is_three('.'))
            && is_blank_or_breakz(self.peek_nth(3))
    }

    #[must_use]
    fn next_is_document_start(&self) -> bool {
        self.next_is_three('-') && is_blank_or_breakz(self.peek_nth(3))
    }

    #[must_use]
    fn next_is_document_end(&self) -> bool {
        self.next_is_three('.') && is_blank_or_breakz(self.peek_nth(3))
    }

    /// Whether the current character continues a plain scalar. Needs two characters of lookahead.
    #[must_use]
    fn next_can_be_plain_scalar(&self, in_flow: bool) -> bool {
        let nc = self.peek_nth(1);
        match self.peek() {
            // indicators can end a plain scalar
            ':' if is_blank_or_breakz(nc) || (in_flow && is_flow(nc)) => false,
            c if in_flow && is_flow(c) => false,
            _ => true,
        }
    }
}

/// Lookahead over a scalar value held in memory.
pub struct StrBuffer {
    chars: Vec<char>,
    pos: usize,
}

impl StrBuffer {
    #[must_use]
    pub fn new(value: &str) -> Self {
        StrBuffer {
            chars: value.chars().collect(),
            pos: 0,
        }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at an absolute index, `'\0'` outside of the value.
    #[must_use]
    pub fn char_at(&self, index: usize) -> char {
        self.chars.get(index).copied().unwrap_or('\0')
    }
}

impl LookAhead for StrBuffer {
    fn peek_nth(&self, n: usize) -> char {
        self.char_at(self.pos + n)
    }

    fn skip(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.chars.len());
    }

    fn is_outside(&self, n: usize) -> bool {
        self.pos + n >= self.chars.len()
    }

    fn lookahead(&mut self, _count: usize) {}
}
