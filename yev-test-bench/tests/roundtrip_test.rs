use yev_common::Event;
use yev_core::{emit_events, EmitterConfig};
use yev_test_bench::consts::*;
use yev_test_bench::{assert_roundtrip, parse_events};

#[test]
fn block_documents() {
    for input in [
        BLOCK2_INPUT,
        SEQ_TAGGED_INPUT,
        ANCHOR_SEQ_INPUT,
        NESTED_SEQ_INPUT,
        BLOCK_MAP_INPUT,
        NESTED_MAP_INPUT,
        INDENTLESS_SEQ_INPUT,
        COMPLEX_SEQ_KEY_INPUT,
        EMPTY_VALUES_INPUT,
        QUOTED_KEYS_INPUT,
    ] {
        assert_roundtrip(input, EmitterConfig::default());
    }
}

#[test]
fn block_scalars() {
    for input in [
        LITERAL_INPUT,
        LITERAL_KEEP_INPUT,
        LITERAL_STRIP_INPUT,
        LITERAL_INDENT_INPUT,
        FOLDED_INPUT,
        FOLDED_MORE_INPUT,
        DQUOTE_ESCAPE_INPUT,
        DQUOTE_MULTI_INPUT,
    ] {
        assert_roundtrip(input, EmitterConfig::default());
    }
}

#[test]
fn flow_documents() {
    for input in [
        FLOW_SEQ_INPUT,
        FLOW_MAP_INPUT,
        FLOW_PAIR_INPUT,
        FLOW_NESTED_INPUT,
        FLOW_IN_BLOCK_INPUT,
    ] {
        assert_roundtrip(input, EmitterConfig::default());
    }
}

#[test]
fn streams_and_directives() {
    for input in [
        MULTI_DOC_INPUT,
        MULTI_DOC2_INPUT,
        BARE_AFTER_END_INPUT,
        TAG_DIRECTIVE_INPUT,
        LOCAL_TAG_INPUT,
        YAML_DIRECTIVE_INPUT,
    ] {
        assert_roundtrip(input, EmitterConfig::default());
    }
}

#[test]
fn exact_outputs() {
    let config = EmitterConfig::default;
    assert_eq!(
        assert_roundtrip(NESTED_MAP_INPUT, config()),
        "a:\n  b: c\nd: e\n"
    );
    assert_eq!(
        assert_roundtrip(NESTED_MAP_INPUT, config().with_indent(4)),
        "a:\n    b: c\nd: e\n"
    );
    assert_eq!(
        assert_roundtrip(INDENTLESS_SEQ_INPUT, config()),
        "a:\n  - b\n  - c\nd: e\n"
    );
    assert_eq!(
        assert_roundtrip(INDENTLESS_SEQ_INPUT, config().force_indent_less(true)),
        "a:\n- b\n- c\nd: e\n"
    );
    assert_eq!(
        assert_roundtrip(FLOW_IN_BLOCK_INPUT, config()),
        "a: [b, c]\nd: {e: f}\n"
    );
    assert_eq!(
        assert_roundtrip(TAG_DIRECTIVE_INPUT, config()),
        "%TAG !e! tag:example.com,2000:\n--- !e!x v\n...\n"
    );
}

#[test]
fn canonical_keeps_values() {
    let scalars = |events: Vec<Event>| -> Vec<String> {
        events
            .into_iter()
            .filter_map(|ev| match ev {
                Event::Scalar(s) => Some(s.value),
                _ => None,
            })
            .collect()
    };
    let config = EmitterConfig::default().canonical(true);
    for input in [NESTED_MAP_INPUT, FLOW_NESTED_INPUT, LITERAL_KEEP_INPUT] {
        let events = parse_events(input);
        let expected = scalars(events.clone());
        let out = emit_events(events, config).unwrap();
        assert!(out.starts_with("---"), "{out}");
        assert_eq!(scalars(parse_events(&out)), expected, "{out}");
    }
}
