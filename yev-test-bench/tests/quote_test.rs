use yev_test_bench::assert_eq_event;
use yev_test_bench::consts::*;

#[test]
fn quote_single() {
    assert_eq_event(SQUOTE_STR_INPUT, SQUOTE_STR_EVENTS);
    assert_eq_event(SQUOTE_ESCAPE_INPUT, SQUOTE_ESCAPE_EVENTS);
    assert_eq_event(SQUOTE_MULTI_INPUT, SQUOTE_MULTI_EVENTS);
}

#[test]
fn dquote_solo() {
    assert_eq_event(DQUOTE_STR_INPUT, DQUOTE_STR_EVENTS);
    assert_eq_event(DQUOTE_ESCAPE_INPUT, DQUOTE_ESCAPE_EVENTS);
}

#[test]
fn dquote_multiline() {
    assert_eq_event(DQUOTE_MULTI_INPUT, DQUOTE_MULTI_EVENTS);
    assert_eq_event(DQUOTE_LINE_JOIN_INPUT, DQUOTE_LINE_JOIN_EVENTS);
}

#[test]
fn quoted_keys() {
    assert_eq_event(QUOTED_KEYS_INPUT, QUOTED_KEYS_EVENTS);
}

#[test]
fn quote_err() {
    assert_eq_event(DQUOTE_UNTERMINATED_INPUT, DQUOTE_UNTERMINATED_EVENTS);
    assert_eq_event(SQUOTE_UNTERMINATED_INPUT, QUOTE_ERR_EVENTS);
    assert_eq_event(DQUOTE_BAD_ESCAPE_INPUT, QUOTE_ERR_EVENTS);
}
