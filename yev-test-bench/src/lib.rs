pub mod consts;

use std::fmt::Write;
use yev_common::{CollectionStyle, DocumentStart, Event, ScalarEvent, ScalarStyle, YamlResult};
use yev_core::{emit_events, EmitterConfig, Parser};

///
/// Assert that in for given input, the parser generates expected set of events
///
/// # Panics
///
///    Function panics if there is a difference between expected events string and one generated
///    from the input.
pub fn assert_eq_event(input: &str, events: &str) {
    let line = event_string(input, false);
    assert_eq!(line, events, "Error in case: {input}");
}

/// Same as [`assert_eq_event`] but also compares the `+STR` and `-STR` events.
///
/// # Panics
///
///    Function panics if the events differ.
pub fn assert_eq_event_exact(input: &str, events: &str) {
    let line = event_string(input, true);
    assert_eq!(line, events, "Error in case: {input}");
}

/// Every event on its own line, each line preceded by `\n`. A parser error ends the
/// string with `ERR`.
pub fn event_string(input: &str, emit_stream_token: bool) -> String {
    let mut line = String::new();
    for ev in Parser::new_from_str(input) {
        match ev {
            Ok((Event::StreamStart | Event::StreamEnd, _)) if !emit_stream_token => {}
            Ok((ev, _)) => {
                let _ = write!(line, "\n{ev}");
            }
            Err(_) => {
                line.push_str("\nERR");
                break;
            }
        }
    }
    line
}

/// # Panics
///
///    Function panics if the input is not well-formed YAML.
pub fn parse_events(input: &str) -> Vec<Event> {
    Parser::new_from_str(input)
        .map(|ev| match ev {
            Ok((ev, _)) => ev,
            Err(err) => panic!("Error in case: {input}\n{err}"),
        })
        .collect()
}

/// Event notation that ignores explicit document markers.
pub fn normalized(events: &[Event]) -> String {
    let mut line = String::new();
    for ev in events {
        let _ = write!(line, "\n{ev}");
    }
    line.replace("+DOC ---", "+DOC")
        .replace("-DOC ...", "-DOC")
}

/// Parses `input`, writes the events back and checks the output reads as the same events.
/// Returns the written YAML.
///
/// # Panics
///
///    Function panics if either side fails or if the events read back differ.
pub fn assert_roundtrip(input: &str, config: EmitterConfig) -> String {
    let events = parse_events(input);
    let expected = normalized(&events);
    let output = match emit_events(events, config) {
        Ok(output) => output,
        Err(err) => panic!("Error emitting case: {input}\n{err}"),
    };
    let actual = normalized(&parse_events(&output));
    assert_eq!(actual, expected, "Error in case: {input}\nwritten as:\n{output}");
    output
}

/// Stream with a single document whose root is `root`.
pub fn single_document(root: Vec<Event>) -> Vec<Event> {
    let mut events = vec![
        Event::StreamStart,
        Event::DocumentStart(DocumentStart::implicit()),
    ];
    events.extend(root);
    events.push(Event::DocumentEnd { implicit: true });
    events.push(Event::StreamEnd);
    events
}

/// Writes `value` with the requested style as a block mapping value, a flow sequence item
/// and a document root.
///
/// # Errors
///
///    Returns the emitter error, if any.
pub fn emit_value(value: &str, style: ScalarStyle, config: EmitterConfig) -> YamlResult<String> {
    let scalar = || Event::Scalar(ScalarEvent::new(value).with_style(style));
    let mut events = single_document(vec![
        Event::mapping_start(CollectionStyle::Block),
        Event::scalar("block", ScalarStyle::Any),
        scalar(),
        Event::scalar("flow", ScalarStyle::Any),
        Event::sequence_start(CollectionStyle::Flow),
        scalar(),
        Event::SequenceEnd,
        Event::MappingEnd,
    ]);
    events.pop();
    events.push(Event::DocumentStart(DocumentStart::explicit()));
    events.push(scalar());
    events.push(Event::DocumentEnd { implicit: true });
    events.push(Event::StreamEnd);
    emit_events(events, config)
}

/// Emits `value` with [`emit_value`], reads the output back and returns the three values
/// found there, in document order.
///
/// # Panics
///
///    Function panics if the value can't be written or the output can't be read.
pub fn value_roundtrip(value: &str, style: ScalarStyle, config: EmitterConfig) -> Vec<String> {
    let output = match emit_value(value, style, config) {
        Ok(output) => output,
        Err(err) => panic!("Error emitting {value:?}\n{err}"),
    };
    let scalars: Vec<String> = parse_events(&output)
        .into_iter()
        .filter_map(|ev| match ev {
            Event::Scalar(ScalarEvent { value, .. }) => Some(value),
            _ => None,
        })
        .collect();
    // keys `block` and `flow` sit at 0 and 2
    scalars
        .into_iter()
        .enumerate()
        .filter(|(i, _)| *i != 0 && *i != 2)
        .map(|(_, v)| v)
        .collect()
}
