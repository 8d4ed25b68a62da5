use yev_test_bench::assert_eq_event;
use yev_test_bench::consts::*;

#[test]
fn flow_seq() {
    assert_eq_event(FLOW_SEQ_INPUT, FLOW_SEQ_EVENTS);
    assert_eq_event(FLOW_SEQ2_INPUT, FLOW_SEQ_EVENTS);
}

#[test]
fn flow_map() {
    assert_eq_event(FLOW_MAP_INPUT, FLOW_MAP_EVENTS);
    assert_eq_event(FLOW_MAP_EMPTY_VALUE_INPUT, FLOW_MAP_EMPTY_VALUE_EVENTS);
}

#[test]
fn flow_implicit_map_in_seq() {
    assert_eq_event(FLOW_PAIR_INPUT, FLOW_PAIR_EVENTS);
}

#[test]
fn flow_nested() {
    assert_eq_event(FLOW_NESTED_INPUT, FLOW_NESTED_EVENTS);
    assert_eq_event(FLOW_IN_BLOCK_INPUT, FLOW_IN_BLOCK_EVENTS);
    assert_eq_event(FLOW_PROPS_INPUT, FLOW_PROPS_EVENTS);
}

#[test]
fn flow_err() {
    assert_eq_event(FLOW_SEQ_ERR_INPUT, FLOW_SEQ_ERR_EVENTS);
    assert_eq_event(FLOW_MAP_ERR_INPUT, FLOW_MAP_ERR_EVENTS);
    assert_eq_event(FLOW_EXTRA_END_INPUT, FLOW_EXTRA_END_EVENTS);
}
