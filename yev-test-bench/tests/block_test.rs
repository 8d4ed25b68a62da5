use yev_test_bench::assert_eq_event;
use yev_test_bench::consts::*;

#[test]
fn block_seq() {
    assert_eq_event(BLOCK1_INPUT, BLOCK_EVENTS);
    assert_eq_event(BLOCK2_INPUT, BLOCK_EVENTS);
    assert_eq_event(SEQ_PLAIN_INPUT, SEQ_PLAIN_EVENTS);
    assert_eq_event(SEQ_PLAIN2_INPUT, SEQ_PLAIN_EVENTS);
    assert_eq_event(SEQ_TAGGED_INPUT, SEQ_TAGGED_EVENTS);
    assert_eq_event(ANCHOR_SEQ_INPUT, ANCHOR_SEQ_EVENTS);
}

#[test]
fn block_seq_err() {
    assert_eq_event(BLOCK_ERR_INPUT, BLOCK_ERR_EVENTS);
    assert_eq_event(WRONG_SEQ_INDENT_INPUT, WRONG_SEQ_INDENT_EVENTS);
    assert_eq_event(SEQ_NO_MINUS_INPUT, SEQ_NO_MINUS_EVENTS);
}

#[test]
fn seq_block_nested() {
    assert_eq_event(NESTED_SEQ_INPUT, NESTED_SEQ_EVENTS);
    assert_eq_event(INDENTLESS_SEQ_INPUT, INDENTLESS_SEQ_EVENTS);
}

#[test]
fn block_map() {
    assert_eq_event(BLOCK_MAP_INPUT, BLOCK_MAP_EVENTS);
    assert_eq_event(NESTED_MAP_INPUT, NESTED_MAP_EVENTS);
    assert_eq_event(EMPTY_VALUES_INPUT, EMPTY_VALUES_EVENTS);
}

#[test]
fn block_complex_key() {
    assert_eq_event(COMPLEX_KEY_INPUT, COMPLEX_KEY_EVENTS);
    assert_eq_event(COMPLEX_SEQ_KEY_INPUT, COMPLEX_SEQ_KEY_EVENTS);
}

#[test]
fn block_map_err() {
    assert_eq_event(MAP_ERR_INPUT, MAP_ERR_EVENTS);
    assert_eq_event(MAP_TAB_ERR_INPUT, MAP_TAB_ERR_EVENTS);
}

#[test]
fn block_plain_scalar() {
    assert_eq_event(PLAIN_MULTI_INPUT, PLAIN_MULTI_EVENTS);
    assert_eq_event(PLAIN_MULTI_VALUE_INPUT, PLAIN_MULTI_VALUE_EVENTS);
}

#[test]
fn block_literal() {
    assert_eq_event(LITERAL_INPUT, LITERAL_EVENTS);
    assert_eq_event(LITERAL_KEEP_INPUT, LITERAL_KEEP_EVENTS);
    assert_eq_event(LITERAL_STRIP_INPUT, LITERAL_STRIP_EVENTS);
    assert_eq_event(LITERAL_INDENT_INPUT, LITERAL_INDENT_EVENTS);
}

#[test]
fn block_fold() {
    assert_eq_event(FOLDED_INPUT, FOLDED_EVENTS);
    assert_eq_event(FOLDED_MORE_INPUT, FOLDED_MORE_EVENTS);
    assert_eq_event(BLOCK_SCALAR_ERR_INPUT, BLOCK_SCALAR_ERR_EVENTS);
}
