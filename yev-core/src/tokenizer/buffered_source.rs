use crate::tokenizer::char_utils::is_stream_char;
use crate::LookAhead;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::str::Chars;

/// Streaming lookahead over any character iterator.
///
/// Characters that are not allowed in a YAML stream are stored as `'\0'`; the scanner
/// reports them when it reaches a `'\0'` that is not past the end.
pub struct CharsBuffer<T> {
    input: T,
    buf: VecDeque<char>,
}

impl<T: Iterator<Item = char>> CharsBuffer<T> {
    pub fn new(input: T) -> Self {
        CharsBuffer {
            input,
            buf: VecDeque::with_capacity(16),
        }
    }

    fn pull(&mut self) -> bool {
        match self.input.next() {
            Some(c) => {
                self.buf.push_back(if is_stream_char(c) { c } else { '\0' });
                true
            }
            None => false,
        }
    }
}

impl<'a> CharsBuffer<Chars<'a>> {
    pub fn from_str_input(input: &'a str) -> Self {
        CharsBuffer::new(input.chars())
    }
}

impl CharsBuffer<alloc::vec::IntoIter<char>> {
    pub fn from_string(input: &str) -> Self {
        CharsBuffer::new(input.chars().collect::<Vec<_>>().into_iter())
    }
}

impl<T: Iterator<Item = char>> LookAhead for CharsBuffer<T> {
    fn peek_nth(&self, n: usize) -> char {
        self.buf.get(n).copied().unwrap_or('\0')
    }

    fn skip(&mut self, n: usize) {
        for _ in 0..n {
            if self.buf.pop_front().is_none() && self.input.next().is_none() {
                break;
            }
        }
    }

    fn is_outside(&self, n: usize) -> bool {
        n >= self.buf.len()
    }

    fn lookahead(&mut self, count: usize) {
        while self.buf.len() < count {
            if !self.pull() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lookahead_and_skip() {
        let mut src = CharsBuffer::from_str_input("ab\u{1}");
        assert_eq!(src.peek(), '\0');
        assert!(src.is_outside(0));
        src.lookahead(2);
        assert_eq!(src.peek(), 'a');
        assert_eq!(src.peek_nth(1), 'b');
        src.skip(2);
        src.lookahead(4);
        assert_eq!(src.peek(), '\0');
        assert!(!src.end_of_input());
        src.skip(1);
        src.lookahead(4);
        assert!(src.end_of_input());
    }

    #[test]
    fn skip_unbuffered() {
        let mut src = CharsBuffer::from_string("xyz");
        src.skip(1);
        src.lookahead(1);
        assert_eq!(src.peek(), 'y');
    }
}
