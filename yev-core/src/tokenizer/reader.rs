use alloc::format;
use yev_common::{Event, EventKind, ScanResult, Span, YamlError, YamlResult};

/// Peek-then-consume cursor over an event stream.
///
/// Consumers probe the next event with [`EventReader::accept`] and [`EventReader::allow`]
/// and reserve [`EventReader::expect`] for events the structure requires. The reader counts
/// open collections, so a consumer that rejects one entry can skip the rest of it with
/// [`EventReader::skip_to_depth`] and continue with the next one.
pub struct EventReader<I> {
    events: I,
    peeked: Option<(Event, Span)>,
    depth: usize,
    last_span: Span,
}

impl<I> EventReader<I>
where
    I: Iterator<Item = YamlResult<(Event, Span)>>,
{
    pub fn new(events: I) -> Self {
        EventReader {
            events,
            peeked: None,
            depth: 0,
            last_span: Span::default(),
        }
    }

    /// Number of mappings and sequences opened and not yet closed by consumed events.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// # Errors
    /// Propagates errors of the underlying event stream.
    pub fn peek(&mut self) -> YamlResult<Option<&(Event, Span)>> {
        if self.peeked.is_none() {
            self.peeked = self.events.next().transpose()?;
        }
        Ok(self.peeked.as_ref())
    }

    /// # Errors
    /// Propagates errors of the underlying event stream.
    pub fn next_event(&mut self) -> YamlResult<Option<(Event, Span)>> {
        let next = match self.peeked.take() {
            Some(ev) => Some(ev),
            None => self.events.next().transpose()?,
        };
        if let Some((ev, span)) = &next {
            match ev {
                Event::MappingStart(_) | Event::SequenceStart(_) => self.depth += 1,
                Event::MappingEnd | Event::SequenceEnd => {
                    self.depth = self.depth.saturating_sub(1);
                }
                _ => {}
            }
            self.last_span = *span;
        }
        Ok(next)
    }

    /// Whether the next event is of `kind`. Nothing is consumed.
    ///
    /// # Errors
    /// Propagates errors of the underlying event stream.
    pub fn accept(&mut self, kind: EventKind) -> YamlResult<bool> {
        Ok(self.peek()?.is_some_and(|(ev, _)| ev.kind() == kind))
    }

    /// Consumes the next event only if it is of `kind`.
    ///
    /// # Errors
    /// Propagates errors of the underlying event stream.
    pub fn allow(&mut self, kind: EventKind) -> YamlResult<Option<(Event, Span)>> {
        if self.accept(kind)? {
            self.next_event()
        } else {
            Ok(None)
        }
    }

    /// Consumes the next event, which must be of `kind`.
    ///
    /// # Errors
    /// A [`YamlError::Parser`] naming `kind` and located at the unexpected event, which
    /// stays unconsumed.
    pub fn expect(&mut self, kind: EventKind) -> YamlResult<(Event, Span)> {
        if let Some(ev) = self.allow(kind)? {
            return Ok(ev);
        }
        let end = Span::empty(self.last_span.end);
        let err = match self.peek()? {
            Some((ev, span)) => {
                YamlError::parse_err(*span, &format!("expected {kind}, found {}", ev.kind()))
            }
            None => YamlError::parse_err(end, &format!("expected {kind}, found end of events")),
        };
        Err(err)
    }

    /// Consumes one node: a scalar, an alias or a whole collection.
    ///
    /// # Errors
    /// A [`YamlError::Parser`] if the next event does not start a node.
    pub fn skip_node(&mut self) -> ScanResult {
        let depth = self.depth;
        let end = Span::empty(self.last_span.end);
        match self.peek()? {
            Some((Event::Scalar(_) | Event::Alias(_), _)) => {
                self.next_event()?;
                Ok(())
            }
            Some((Event::MappingStart(_) | Event::SequenceStart(_), _)) => {
                self.next_event()?;
                self.skip_to_depth(depth)
            }
            Some((ev, span)) => Err(YamlError::parse_err(
                *span,
                &format!("expected a node, found {}", ev.kind()),
            )),
            None => Err(YamlError::parse_err(end, "expected a node, found end of events")),
        }
    }

    /// Consumes events until the open collections are back to `depth`.
    ///
    /// # Errors
    /// Propagates errors of the underlying event stream.
    pub fn skip_to_depth(&mut self, depth: usize) -> ScanResult {
        while self.depth > depth {
            if self.next_event()?.is_none() {
                break;
            }
        }
        Ok(())
    }
}

impl<I> Iterator for EventReader<I>
where
    I: Iterator<Item = YamlResult<(Event, Span)>>,
{
    type Item = YamlResult<(Event, Span)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event().transpose()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Parser;
    use alloc::string::String;
    use yev_common::ScalarEvent;

    fn reader(input: &str) -> EventReader<Parser<crate::CharsBuffer<core::str::Chars<'_>>>> {
        EventReader::new(Parser::new_from_str(input))
    }

    fn scalar_value(ev: (Event, Span)) -> String {
        match ev.0 {
            Event::Scalar(ScalarEvent { value, .. }) => value,
            other => panic!("expected a scalar, got {other}"),
        }
    }

    #[test]
    fn accept_allow_expect() {
        let mut reader = reader("a: b");
        reader.expect(EventKind::StreamStart).unwrap();
        assert!(reader.accept(EventKind::DocumentStart).unwrap());
        assert!(reader.allow(EventKind::SequenceStart).unwrap().is_none());
        reader.expect(EventKind::DocumentStart).unwrap();
        reader.expect(EventKind::MappingStart).unwrap();
        assert_eq!(reader.depth(), 1);
        assert_eq!(scalar_value(reader.expect(EventKind::Scalar).unwrap()), "a");

        let err = reader.expect(EventKind::MappingEnd).unwrap_err();
        assert_eq!(err.message(), "expected MAPPING-END, found SCALAR");
        assert_eq!(err.span().map(|s| s.start.col), Some(3));
        // the unexpected event is still there
        assert_eq!(scalar_value(reader.expect(EventKind::Scalar).unwrap()), "b");
        reader.expect(EventKind::MappingEnd).unwrap();
        assert_eq!(reader.depth(), 0);
    }

    #[test]
    fn skip_whole_nodes() {
        let mut reader = reader("a: [1, [2]]\nb: {c: d}\ne: f\n");
        reader.expect(EventKind::StreamStart).unwrap();
        reader.expect(EventKind::DocumentStart).unwrap();
        reader.expect(EventKind::MappingStart).unwrap();

        assert_eq!(scalar_value(reader.expect(EventKind::Scalar).unwrap()), "a");
        reader.skip_node().unwrap();
        assert_eq!(scalar_value(reader.expect(EventKind::Scalar).unwrap()), "b");
        reader.skip_node().unwrap();
        assert_eq!(scalar_value(reader.expect(EventKind::Scalar).unwrap()), "e");
        reader.skip_node().unwrap();
        reader.expect(EventKind::MappingEnd).unwrap();
        assert!(reader.skip_node().is_err());
    }

    #[test]
    fn recover_to_depth() {
        let mut reader = reader("- [1, {x: 2}, 3]\n- ok\n");
        for _ in 0..4 {
            reader.next_event().unwrap();
        }
        // inside the flow sequence, give up on it
        assert_eq!(reader.depth(), 2);
        reader.next_event().unwrap();
        reader.next_event().unwrap();
        assert_eq!(reader.depth(), 3);
        reader.skip_to_depth(1).unwrap();
        assert_eq!(scalar_value(reader.expect(EventKind::Scalar).unwrap()), "ok");
    }

    #[test]
    fn stream_errors_pass_through() {
        let mut reader = reader("[a, b");
        let err = reader.find_map(Result::err).unwrap();
        assert!(err.message().contains("did not find expected ',' or ']'"));
    }
}
