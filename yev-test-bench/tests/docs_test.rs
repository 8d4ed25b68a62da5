use rstest::rstest;
use yev_test_bench::consts::*;
use yev_test_bench::{assert_eq_event, assert_eq_event_exact};

#[rstest]
#[case::docs_empty_doc(EMPTY_DOC_INPUT, EMPTY_DOC_EVENTS)]
#[case::docs_multi_doc1(MULTI_DOC_INPUT, MULTI_DOC_EVENTS)]
#[case::docs_multi_doc2(MULTI_DOC2_INPUT, MULTI_DOC2_EVENTS)]
#[case::docs_bare_after_end(BARE_AFTER_END_INPUT, BARE_AFTER_END_EVENTS)]
#[case::docs_repeated_end(REPEATED_END_MULTI_INPUT, REPEATED_END_MULTI_EVENTS)]
#[case::docs_yaml_directive(YAML_DIRECTIVE_INPUT, DIRECTIVE_EVENTS)]
#[case::docs_unknown_directive(UNKNOWN_DIRECTIVE_INPUT, DIRECTIVE_EVENTS)]
#[case::docs_tag_directive(TAG_DIRECTIVE_INPUT, TAG_DIRECTIVE_EVENTS)]
#[case::docs_local_tags(LOCAL_TAG_INPUT, LOCAL_TAG_EVENTS)]
fn run_doc_tests(#[case] input: &str, #[case] expected_events: &str) {
    assert_eq_event(input, expected_events);
}

#[rstest]
#[case::docs_exact_empty1(EMPTY_INPUT, EMPTY_EVENTS)]
#[case::docs_exact_empty2(COMMENT_ONLY_INPUT, EMPTY_EVENTS)]
#[case::docs_exact_footer(FOOTER_INPUT, FOOTER_EVENTS)]
#[case::docs_exact_repeated_end(REPEATED_END_INPUT, REPEATED_END_EVENTS)]
#[case::docs_exact_err_version(ERR_VERSION_INPUT, ERR_DIRECTIVE_EVENTS)]
#[case::docs_exact_err_dup_version(ERR_DUP_VERSION_INPUT, ERR_DIRECTIVE_EVENTS)]
#[case::docs_exact_err_dup_tag(ERR_DUP_TAG_INPUT, ERR_DIRECTIVE_EVENTS)]
#[case::docs_exact_err_no_start(ERR_NO_DOC_START_INPUT, ERR_DIRECTIVE_EVENTS)]
#[case::docs_exact_err_multiline_key(ERR_MULTILINE_KEY_INPUT, ERR_MULTILINE_KEY_EVENTS)]
fn simple_doc(#[case] input: &str, #[case] expected_events: &str) {
    assert_eq_event_exact(input, expected_events);
}
